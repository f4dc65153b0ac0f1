pub mod carousel;
pub mod constants;
pub mod ease;
pub mod rotator;
pub mod scene;
pub mod smooth;
pub mod stack;

pub use carousel::*;
pub use constants::*;
pub use ease::*;
pub use rotator::*;
pub use scene::*;
pub use smooth::*;
pub use stack::*;
