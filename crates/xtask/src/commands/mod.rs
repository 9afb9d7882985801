//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod area;
mod decide;
mod reach;

pub use area::Area;
pub use decide::Decide;
pub use reach::Reach;
