use serde::{Deserialize, Serialize};

/// External representation of a [`Listing`](crate::entities::Listing).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtListing {
    /// Unique identifier of the listing
    pub id: String,
    /// Identifier of the location the listing belongs to
    pub location_id: String,
    pub length: i64,
    pub width: i64,
    pub price_in_cents: i64,
}

/// External representation of a [`VehicleRequest`](crate::entities::VehicleRequest).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtVehicleRequest {
    pub length: i64,
    pub quantity: i64,
}

/// External representation of a [`LocationResult`](crate::entities::LocationResult).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtLocationResult {
    pub location_id: String,
    /// The listings to book, cheapest first
    pub listing_ids: Vec<String>,
    pub total_price_in_cents: i64,
}
