use std::cmp::Reverse;
use std::iter;

/// A number of identical vehicles of a given length which all need storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VehicleRequest {
    pub length: u32,
    pub quantity: usize,
}

impl VehicleRequest {
    pub fn new(length: u32, quantity: usize) -> Self {
        Self { length, quantity }
    }
}

/// Expands the requests into one length per vehicle, longest first.
///
/// Vehicles are interchangeable, only their length matters for placement.
/// The descending order is what makes the packer's first-fit scan a first-fit-decreasing heuristic.
pub fn flatten_vehicles(requests: &[VehicleRequest]) -> Vec<u32> {
    let mut vehicles = requests
        .iter()
        .flat_map(|r| iter::repeat_n(r.length, r.quantity))
        .collect::<Vec<u32>>();

    vehicles.sort_unstable_by_key(|&l| Reverse(l));
    vehicles
}
