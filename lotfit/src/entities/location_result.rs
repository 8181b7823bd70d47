/// A location able to store every requested vehicle, with the listings it takes to do so.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocationResult {
    pub location_id: String,
    /// Ids of the selected listings, in the order they were consumed (ascending price)
    pub listing_ids: Vec<String>,
    pub total_price_in_cents: u64,
}
