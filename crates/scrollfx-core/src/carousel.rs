//! Mobile project carousel state.

/// Styling role of a card for the stacked-carousel effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardRole {
    /// The card currently shown.
    Active,
    /// The card peeking from behind the active one.
    Next,
    /// Everything else.
    Rest,
}

/// Cyclic card pointer for the mobile carousel. Advancing past the last card
/// wraps back to the first.
#[derive(Clone, Copy, Debug)]
pub struct Carousel {
    current: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn advance(&mut self) {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
    }

    /// Role of card `index` for the current position. With a single card the
    /// active role wins over next.
    pub fn role_of(&self, index: usize) -> CardRole {
        if self.len == 0 {
            return CardRole::Rest;
        }
        if index == self.current {
            CardRole::Active
        } else if index == (self.current + 1) % self.len {
            CardRole::Next
        } else {
            CardRole::Rest
        }
    }
}
