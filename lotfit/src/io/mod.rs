use crate::entities::{Catalog, flatten_vehicles};
use crate::io::ext_repr::{ExtLocationResult, ExtVehicleRequest};
use crate::solve::compute_results;
use anyhow::{Context, Result};
use log::{debug, info};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// External (serializable) representations of the entities within the library.
pub mod ext_repr;

/// All logic for converting external representations into internal ones
pub mod import;

/// All logic for exporting internal representations into external ones
pub mod export;

/// Reads and imports a catalog from a JSON file containing an array of [`ExtListing`](ext_repr::ExtListing)s.
pub fn read_catalog(path: &Path) -> Result<Catalog> {
    let file = File::open(path)
        .with_context(|| format!("could not open catalog file: {}", path.display()))?;
    let reader = BufReader::new(file);
    let ext_listings: Vec<ext_repr::ExtListing> = serde_json::from_reader(reader)
        .with_context(|| format!("could not parse catalog file: {}", path.display()))?;

    let catalog = import::import_catalog(&ext_listings)
        .with_context(|| format!("invalid catalog file: {}", path.display()))?;
    info!(
        "[IO] loaded catalog with {} listing(s) from {}",
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}

/// Answers a search expressed in external representations: imports the requests,
/// matches them against the catalog and exports the results.
pub fn search(catalog: &Catalog, ext_requests: &[ExtVehicleRequest]) -> Result<Vec<ExtLocationResult>> {
    let requests = import::import_requests(ext_requests)?;
    let vehicles = flatten_vehicles(&requests);
    debug!("[IO] searching for {} vehicle(s): {vehicles:?}", vehicles.len());

    let results = compute_results(&vehicles, catalog);
    export::export_results(&results)
}
