//! Grid packing and price-greedy matching of vehicles against a catalog of storage listings.
//!
//! Given a multiset of vehicle lengths and a [`Catalog`](entities::Catalog) of listings grouped by location,
//! [`compute_results`](solve::compute_results) reports every location able to hold all vehicles at once,
//! together with the listings it would take and their combined price.

/// Listings, catalogs, vehicle requests and location results
pub mod entities;

/// Placing vehicles on the quantized surface of a single listing
pub mod packing;

/// Selecting listings per location and aggregating the outcomes
pub mod solve;

/// Importing external representations into the library and exporting results out of it
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

/// Quantization unit (in the same unit as listing and vehicle dimensions) of the occupancy grids.
/// Dimensions are divided by this value with truncation; any remainder is unusable.
pub const BLOCK_SIZE: u32 = 10;

/// Upper bound on the number of vehicles in a single search, summed over all requests.
pub const MAX_VEHICLES: usize = 10_000;
