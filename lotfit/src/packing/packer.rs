use crate::BLOCK_SIZE;
use crate::entities::Listing;
use crate::packing::{OccupancyGrid, Orientation};
use crate::util::assertions;
use log::trace;

/// A vehicle placed on the occupancy grid of a listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub vehicle_length: u32,
    pub row: usize,
    pub col: usize,
    /// Number of consecutive cells occupied in `row`, starting from `col`
    pub n_blocks: usize,
}

/// Outcome of packing a sequence of vehicles onto a single listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackOutcome {
    /// Orientation of the listing in which the vehicles were placed
    pub orientation: Orientation,
    pub placements: Vec<Placement>,
    /// Vehicles which could not be placed, in their original order
    pub unplaced: Vec<u32>,
}

impl PackOutcome {
    fn nothing_placed(vehicles: &[u32]) -> Self {
        Self {
            orientation: Orientation::ALL[0],
            placements: vec![],
            unplaced: vehicles.to_vec(),
        }
    }

    pub fn n_placed(&self) -> usize {
        self.placements.len()
    }

    pub fn placed_lengths(&self) -> impl Iterator<Item = u32> + '_ {
        self.placements.iter().map(|p| p.vehicle_length)
    }
}

/// Number of grid cells a vehicle of the given length occupies. The remainder is dropped.
pub fn n_blocks(vehicle_length: u32) -> usize {
    (vehicle_length / BLOCK_SIZE) as usize
}

/// Places as many `vehicles` as possible on the listing.
///
/// Both orientations of the listing are tried with a first-fit scan over its occupancy grid, in the order
/// the vehicles are given. The orientation placing strictly more vehicles wins, ties go to [`Orientation::Lengthwise`].
/// Neither the listing nor `vehicles` is modified.
pub fn pack(listing: &Listing, vehicles: &[u32]) -> PackOutcome {
    let mut best = PackOutcome::nothing_placed(vehicles);

    for orientation in Orientation::ALL {
        let outcome = pack_orientation(listing, orientation, vehicles);
        trace!(
            "[PACK] listing {} ({orientation}): {}/{} vehicles placed",
            listing.id,
            outcome.n_placed(),
            vehicles.len()
        );
        if outcome.n_placed() > best.n_placed() {
            best = outcome;
        }
    }

    debug_assert!(assertions::pack_outcome_conserves_vehicles(vehicles, &best));
    debug_assert!(assertions::placements_are_disjoint(listing, &best));
    best
}

/// First-fit placement of the vehicles on the listing in a fixed orientation.
pub fn pack_orientation(listing: &Listing, orientation: Orientation, vehicles: &[u32]) -> PackOutcome {
    let (n_rows, n_cols) = orientation.grid_dims(listing);
    let mut grid = OccupancyGrid::new(n_rows, n_cols);

    let mut placements = vec![];
    let mut unplaced = vec![];

    for &vehicle_length in vehicles {
        let n_blocks = n_blocks(vehicle_length);
        match grid.first_fit(n_blocks) {
            Some((row, col)) => {
                grid.occupy(row, col, n_blocks);
                placements.push(Placement {
                    vehicle_length,
                    row,
                    col,
                    n_blocks,
                });
            }
            None => unplaced.push(vehicle_length),
        }
    }

    PackOutcome {
        orientation,
        placements,
        unplaced,
    }
}
