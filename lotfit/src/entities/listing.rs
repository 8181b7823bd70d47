use crate::BLOCK_SIZE;

/// A rectangular storage surface offered at a fixed price, belonging to a location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Listing {
    /// Unique identifier within the catalog
    pub id: String,
    /// Listings sharing this identifier are solved together
    pub location_id: String,
    pub length: u32,
    pub width: u32,
    pub price_in_cents: u64,
}

impl Listing {
    pub fn new(
        id: impl Into<String>,
        location_id: impl Into<String>,
        length: u32,
        width: u32,
        price_in_cents: u64,
    ) -> Self {
        Self {
            id: id.into(),
            location_id: location_id.into(),
            length,
            width,
            price_in_cents,
        }
    }

    /// Number of grid cells available on the surface (identical for both orientations).
    pub fn n_cells(&self) -> usize {
        (self.length / BLOCK_SIZE) as usize * (self.width / BLOCK_SIZE) as usize
    }

    /// Whether one of the dimensions is not a multiple of [`BLOCK_SIZE`], i.e. part of the surface is lost to quantization.
    pub fn is_truncated(&self) -> bool {
        self.length % BLOCK_SIZE != 0 || self.width % BLOCK_SIZE != 0
    }
}
