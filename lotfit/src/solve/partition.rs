use crate::entities::Listing;
use std::collections::BTreeMap;

/// Groups the listings by their location, keyed by location id.
/// Within a group, listings keep their catalog order.
pub fn group_by_location(listings: &[Listing]) -> BTreeMap<&str, Vec<&Listing>> {
    let mut groups: BTreeMap<&str, Vec<&Listing>> = BTreeMap::new();
    for listing in listings {
        groups
            .entry(listing.location_id.as_str())
            .or_default()
            .push(listing);
    }
    groups
}
