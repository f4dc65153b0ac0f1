//! Mount-state machine for the lazily loaded 3D scene overlay.
//!
//! The overlay element is heavy, so it only exists while its section is near
//! the viewport. Intersection callbacks can repeat and arrive from more than
//! one observer; the state machine collapses them into idempotent commands.

/// What the DOM layer should do in response to a visibility change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneCommand {
    Mount,
    Unmount,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SceneOverlay {
    mounted: bool,
}

impl SceneOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Visibility edge from the section's own observer. Repeated reports of
    /// the same state produce no command.
    pub fn on_visibility(&mut self, intersecting: bool) -> Option<SceneCommand> {
        match (intersecting, self.mounted) {
            (true, false) => {
                self.mounted = true;
                Some(SceneCommand::Mount)
            }
            (false, true) => {
                self.mounted = false;
                Some(SceneCommand::Unmount)
            }
            _ => None,
        }
    }

    /// Early-load trigger (the preceding section scrolled near, or an anchor
    /// pointing at the overlay's section was clicked). Mounts at most once.
    pub fn on_preload(&mut self) -> Option<SceneCommand> {
        if self.mounted {
            None
        } else {
            self.mounted = true;
            Some(SceneCommand::Mount)
        }
    }
}
