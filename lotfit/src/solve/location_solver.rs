use crate::entities::{Listing, LocationResult};
use crate::packing::pack;
use crate::util::assertions;
use itertools::Itertools;
use log::{debug, warn};

/// Greedily selects listings of a single location, cheapest first, until every vehicle is placed.
///
/// Each listing takes as many of the remaining vehicles as [`pack`] manages to place on it.
/// Listings which place nothing are skipped and do not count towards the price.
/// Returns `None` if vehicles remain after all listings were tried, partial results are never reported.
/// Equally priced listings are consumed in the order they are given.
/// A location whose total price would overflow is reported as `None` as well.
pub fn solve_location(
    location_id: &str,
    listings: &[&Listing],
    vehicles: &[u32],
) -> Option<LocationResult> {
    let sorted_listings = listings
        .iter()
        .copied()
        .sorted_by_key(|l| l.price_in_cents)
        .collect_vec();

    let mut remaining = vehicles.to_vec();
    let mut listing_ids = vec![];
    let mut total_price_in_cents: u64 = 0;

    for listing in sorted_listings {
        if remaining.is_empty() {
            break;
        }
        let outcome = pack(listing, &remaining);
        if outcome.n_placed() > 0 {
            debug!(
                "[SOLVE] {location_id}: listing {} ({}) takes {} vehicle(s), {} remaining",
                listing.id,
                outcome.orientation,
                outcome.n_placed(),
                outcome.unplaced.len()
            );
            listing_ids.push(listing.id.clone());
            let Some(total) = total_price_in_cents.checked_add(listing.price_in_cents) else {
                warn!("[SOLVE] {location_id}: total price overflows, location dropped");
                return None;
            };
            total_price_in_cents = total;
            remaining = outcome.unplaced;
        }
    }

    if !remaining.is_empty() {
        debug!(
            "[SOLVE] {location_id}: {}/{} vehicle(s) do not fit",
            remaining.len(),
            vehicles.len()
        );
        return None;
    }

    let result = LocationResult {
        location_id: location_id.to_string(),
        listing_ids,
        total_price_in_cents,
    };
    debug_assert!(assertions::location_result_consistent(&result, listings));
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cheapest_listings_are_consumed_first() {
        let l2 = Listing::new("l2", "A", 30, 15, 200);
        let l3 = Listing::new("l3", "A", 10, 10, 50);

        let result = solve_location("A", &[&l2, &l3], &[30, 10]).unwrap();
        assert_eq!(result.listing_ids, vec!["l3", "l2"]);
        assert_eq!(result.total_price_in_cents, 250);
    }

    #[test]
    fn useless_listings_are_skipped() {
        let tiny = Listing::new("tiny", "A", 5, 5, 1);
        let big = Listing::new("big", "A", 40, 20, 300);

        let result = solve_location("A", &[&big, &tiny], &[20, 20]).unwrap();
        assert_eq!(result.listing_ids, vec!["big"]);
        assert_eq!(result.total_price_in_cents, 300);
    }

    #[test]
    fn stops_once_everything_is_placed() {
        let cheap = Listing::new("cheap", "A", 20, 10, 10);
        let pricey = Listing::new("pricey", "A", 20, 10, 20);

        let result = solve_location("A", &[&pricey, &cheap], &[20]).unwrap();
        assert_eq!(result.listing_ids, vec!["cheap"]);
    }

    #[test]
    fn equal_prices_keep_given_order() {
        let first = Listing::new("first", "A", 20, 10, 10);
        let second = Listing::new("second", "A", 20, 10, 10);

        let result = solve_location("A", &[&first, &second], &[20]).unwrap();
        assert_eq!(result.listing_ids, vec!["first"]);
    }

    #[test]
    fn partial_capacity_is_no_result() {
        let l1 = Listing::new("l1", "A", 20, 10, 100);
        let l2 = Listing::new("l2", "A", 20, 10, 100);

        assert_eq!(solve_location("A", &[&l1, &l2], &[20, 20, 20]), None);
    }

    #[test]
    fn no_listings() {
        assert_eq!(solve_location("A", &[], &[10]), None);
        let result = solve_location("A", &[], &[]).unwrap();
        assert!(result.listing_ids.is_empty());
        assert_eq!(result.total_price_in_cents, 0);
    }

    #[test]
    fn overflowing_total_drops_location() {
        let a = Listing::new("a", "A", 10, 10, u64::MAX);
        let b = Listing::new("b", "A", 10, 10, u64::MAX);
        let c = Listing::new("c", "A", 10, 10, u64::MAX);

        assert_eq!(solve_location("A", &[&a, &b, &c], &[10, 10, 10]), None);
        // a single listing still fits
        let result = solve_location("A", &[&a, &b, &c], &[10]).unwrap();
        assert_eq!(result.total_price_in_cents, u64::MAX);
    }

    #[test]
    fn caller_vehicles_are_untouched() {
        let l1 = Listing::new("l1", "A", 20, 10, 100);
        let vehicles = vec![30, 20];

        assert_eq!(solve_location("A", &[&l1], &vehicles), None);
        assert_eq!(vehicles, vec![30, 20]);
    }
}
