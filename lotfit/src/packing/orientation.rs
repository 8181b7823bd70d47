use crate::BLOCK_SIZE;
use crate::entities::Listing;
use std::fmt::{Display, Formatter};

/// The two ways a listing's rectangular surface can be laid out as a grid.
/// Vehicles are always placed along the grid's rows, so the orientation decides which
/// dimension of the listing they are parked along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Rows run along the listing's length, one row per [`BLOCK_SIZE`] of width
    Lengthwise,
    /// Rows run along the listing's width, one row per [`BLOCK_SIZE`] of length
    Widthwise,
}

impl Orientation {
    /// Order in which orientations are tried, the first one wins ties
    pub const ALL: [Orientation; 2] = [Orientation::Lengthwise, Orientation::Widthwise];

    /// (length, width) of the listing as seen in this orientation
    pub fn dims(self, listing: &Listing) -> (u32, u32) {
        match self {
            Orientation::Lengthwise => (listing.length, listing.width),
            Orientation::Widthwise => (listing.width, listing.length),
        }
    }

    /// (rows, cols) of the occupancy grid of the listing in this orientation
    pub fn grid_dims(self, listing: &Listing) -> (usize, usize) {
        let (length, width) = self.dims(listing);
        ((width / BLOCK_SIZE) as usize, (length / BLOCK_SIZE) as usize)
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Lengthwise => write!(f, "lengthwise"),
            Orientation::Widthwise => write!(f, "widthwise"),
        }
    }
}
