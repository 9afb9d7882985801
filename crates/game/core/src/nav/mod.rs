//! Movement legality: who may stand where, and how to get there.
mod blocking;
mod pathfinder;

pub use blocking::{BlockingRule, SideBlocking, SolidUnits};
pub use pathfinder::{Pathfinder, Reachability};
