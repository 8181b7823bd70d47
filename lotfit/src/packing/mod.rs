mod grid;
mod orientation;
mod packer;

#[doc(inline)]
pub use grid::OccupancyGrid;
#[doc(inline)]
pub use orientation::Orientation;
#[doc(inline)]
pub use packer::{PackOutcome, Placement, n_blocks, pack, pack_orientation};
