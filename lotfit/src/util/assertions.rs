use crate::entities::{Listing, LocationResult};
use crate::packing::{OccupancyGrid, PackOutcome, n_blocks};
use itertools::Itertools;
use log::error;
//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

pub fn listing_ids_unique(listings: &[Listing]) -> bool {
    listings.iter().map(|l| l.id.as_str()).all_unique()
}

/// Every input vehicle is either placed or left over, none are invented or lost
pub fn pack_outcome_conserves_vehicles(vehicles: &[u32], outcome: &PackOutcome) -> bool {
    let input = vehicles.iter().copied().sorted().collect_vec();
    let output = outcome
        .placed_lengths()
        .chain(outcome.unplaced.iter().copied())
        .sorted()
        .collect_vec();

    if input != output {
        error!("vehicles not conserved: {input:?} went in, {output:?} came out");
        return false;
    }
    true
}

/// All placements lie within the listing's grid and no cell is claimed twice
pub fn placements_are_disjoint(listing: &Listing, outcome: &PackOutcome) -> bool {
    let (n_rows, n_cols) = outcome.orientation.grid_dims(listing);
    let mut grid = OccupancyGrid::new(n_rows, n_cols);

    for p in &outcome.placements {
        if p.n_blocks != n_blocks(p.vehicle_length) || p.row >= n_rows || p.col + p.n_blocks > n_cols {
            error!("placement {p:?} out of bounds on a {n_rows}x{n_cols} grid of listing {}", listing.id);
            return false;
        }
        if (p.col..p.col + p.n_blocks).any(|c| grid.is_occupied(p.row, c)) {
            error!("placement {p:?} overlaps on listing {}", listing.id);
            return false;
        }
        grid.occupy(p.row, p.col, p.n_blocks);
    }
    true
}

pub fn location_result_consistent(result: &LocationResult, listings: &[&Listing]) -> bool {
    let selected = result
        .listing_ids
        .iter()
        .filter_map(|id| listings.iter().find(|l| &l.id == id))
        .collect_vec();

    selected.len() == result.listing_ids.len()
        && selected.iter().all(|l| l.location_id == result.location_id)
        && selected.iter().map(|l| l.price_in_cents).sum::<u64>() == result.total_price_in_cents
        && selected
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.price_in_cents <= b.price_in_cents)
}

pub fn results_sorted_by_price(results: &[LocationResult]) -> bool {
    results
        .iter()
        .tuple_windows()
        .all(|(a, b)| a.total_price_in_cents <= b.total_price_in_cents)
}
