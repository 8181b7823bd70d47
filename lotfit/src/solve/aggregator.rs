use crate::entities::{Catalog, LocationResult};
use crate::solve::{group_by_location, solve_location};
use crate::util::assertions;
use itertools::Itertools;
use log::debug;
use rayon::prelude::*;

/// Finds every location of the catalog which can store all `vehicles` at once.
///
/// `vehicles` is expected longest first, see [`flatten_vehicles`](crate::entities::flatten_vehicles).
/// Locations are solved independently (and in parallel), each starting from the full set of vehicles.
/// The results are sorted by ascending total price, equally priced locations by ascending location id.
pub fn compute_results(vehicles: &[u32], catalog: &Catalog) -> Vec<LocationResult> {
    let groups = group_by_location(catalog.listings()).into_iter().collect_vec();

    let results = groups
        .par_iter()
        .filter_map(|(location_id, listings)| solve_location(location_id, listings, vehicles))
        .collect::<Vec<LocationResult>>()
        .into_iter()
        .sorted_by_key(|r| r.total_price_in_cents)
        .collect_vec();

    debug!(
        "[SOLVE] {}/{} location(s) can store all {} vehicle(s)",
        results.len(),
        groups.len(),
        vehicles.len()
    );
    debug_assert!(assertions::results_sorted_by_price(&results));
    results
}
