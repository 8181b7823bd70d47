use lotfit::io::ext_repr::{ExtLocationResult, ExtVehicleRequest};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Everything written out by a search: the request as it was read and the matching locations.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SearchOutput {
    pub request: Vec<ExtVehicleRequest>,
    /// Locations able to store every vehicle, cheapest first
    pub results: Vec<ExtLocationResult>,
    pub run_time_ms: u64,
}

impl SearchOutput {
    pub fn new(
        request: Vec<ExtVehicleRequest>,
        results: Vec<ExtLocationResult>,
        run_time: Duration,
    ) -> Self {
        Self {
            request,
            results,
            run_time_ms: u64::try_from(run_time.as_millis()).unwrap_or(u64::MAX),
        }
    }
}
