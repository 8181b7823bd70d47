use crate::entities::LocationResult;
use crate::io::ext_repr::ExtLocationResult;
use anyhow::{Context, Result};

/// Exports the results of a search out of the library.
pub fn export_results(results: &[LocationResult]) -> Result<Vec<ExtLocationResult>> {
    results.iter().map(export_result).collect()
}

pub fn export_result(result: &LocationResult) -> Result<ExtLocationResult> {
    let total_price_in_cents = i64::try_from(result.total_price_in_cents).with_context(|| {
        format!(
            "total price of location {} does not fit the external representation: {}",
            result.location_id, result.total_price_in_cents
        )
    })?;

    Ok(ExtLocationResult {
        location_id: result.location_id.clone(),
        listing_ids: result.listing_ids.clone(),
        total_price_in_cents,
    })
}
