#![warn(clippy::all, clippy::cargo)]

mod life;
mod quadtree;
mod utils;
mod validate;

pub use life::{signature_of, BoundaryMode, GridLife, Life, NodeLife};
pub use quadtree::{next_alive, NodeArena, NodeIdx, PopulationManager, QuadTreeNode};
pub use utils::NiceInt;
pub use validate::{measure, validate};

/// Smallest level a field can be built at: a level-2 node is the smallest
/// region whose center 2x2 is fully surrounded.
pub const MIN_LEVEL: u32 = 2;

/// Largest supported level; coordinates and side lengths fit into u64
/// with headroom.
pub const MAX_LEVEL: u32 = 60;
