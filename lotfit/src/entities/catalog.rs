use crate::entities::Listing;
use crate::util::assertions;

/// Read-only collection of all listings on offer.
/// Loaded once and shared between requests, it is never modified while matching.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    pub fn new(listings: Vec<Listing>) -> Self {
        assert!(
            assertions::listing_ids_unique(&listings),
            "All listings should have a unique id"
        );
        Self { listings }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn listing(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
