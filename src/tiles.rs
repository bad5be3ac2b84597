//! Basic types for working with letters, tiles and racks.
mod letter;
mod occupant;
mod rack;
mod values;

/// Inline capacity of a [`Run`](crate::Run) before it spills to the heap
pub(super) const DIM: usize = 16;
pub use letter::Letter;
pub use occupant::Occupant;
pub use rack::{Rack, Tally, Tile};
pub use values::LetterValues;
