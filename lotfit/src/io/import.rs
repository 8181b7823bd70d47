use crate::{BLOCK_SIZE, MAX_VEHICLES};
use crate::entities::{Catalog, Listing, VehicleRequest};
use crate::io::ext_repr::{ExtListing, ExtVehicleRequest};
use anyhow::{Context, Result, ensure};
use itertools::Itertools;
use log::warn;
use std::collections::BTreeMap;

pub fn import_listing(ext_listing: &ExtListing) -> Result<Listing> {
    let ExtListing {
        id,
        location_id,
        length,
        width,
        price_in_cents,
    } = ext_listing;

    ensure!(!id.is_empty(), "listing without an id");
    ensure!(*length > 0, "listing {id}: length must be positive, got {length}");
    ensure!(*width > 0, "listing {id}: width must be positive, got {width}");
    ensure!(
        *price_in_cents >= 0,
        "listing {id}: price must not be negative, got {price_in_cents}"
    );

    Ok(Listing {
        id: id.clone(),
        location_id: location_id.clone(),
        length: u32::try_from(*length).with_context(|| format!("listing {id}: length too large"))?,
        width: u32::try_from(*width).with_context(|| format!("listing {id}: width too large"))?,
        price_in_cents: *price_in_cents as u64,
    })
}

/// Imports a catalog into the library. Listing ids must be unique.
pub fn import_catalog(ext_listings: &[ExtListing]) -> Result<Catalog> {
    let listings = ext_listings
        .iter()
        .map(import_listing)
        .collect::<Result<Vec<Listing>>>()?;

    let duplicates = listings
        .iter()
        .map(|l| l.id.as_str())
        .duplicates()
        .collect_vec();
    ensure!(
        duplicates.is_empty(),
        "listing ids should be unique, duplicates: {duplicates:?}"
    );

    // every location total must be exportable as an i64
    let mut location_prices: BTreeMap<&str, i64> = BTreeMap::new();
    for ext_listing in ext_listings {
        let total = location_prices.entry(ext_listing.location_id.as_str()).or_default();
        *total = total.checked_add(ext_listing.price_in_cents).with_context(|| {
            format!(
                "summed listing prices of location {} exceed {}",
                ext_listing.location_id,
                i64::MAX
            )
        })?;
    }

    let n_truncated = listings.iter().filter(|l| l.is_truncated()).count();
    if n_truncated > 0 {
        warn!(
            "[IO] {n_truncated}/{} listing(s) have dimensions which are not a multiple of {BLOCK_SIZE}, the remainder is unusable",
            listings.len()
        );
    }

    Ok(Catalog::new(listings))
}

pub fn import_request(ext_request: &ExtVehicleRequest) -> Result<VehicleRequest> {
    let ExtVehicleRequest { length, quantity } = *ext_request;

    ensure!(length > 0, "vehicle length must be positive, got {length}");
    ensure!(quantity >= 0, "vehicle quantity must not be negative, got {quantity}");

    Ok(VehicleRequest {
        length: u32::try_from(length).context("vehicle length too large")?,
        quantity: usize::try_from(quantity).context("vehicle quantity too large")?,
    })
}

/// Imports the vehicle requests of a search, rejecting malformed entries
/// and searches for more than [`MAX_VEHICLES`] vehicles in total.
pub fn import_requests(ext_requests: &[ExtVehicleRequest]) -> Result<Vec<VehicleRequest>> {
    let requests = ext_requests
        .iter()
        .enumerate()
        .map(|(i, r)| import_request(r).with_context(|| format!("invalid vehicle request #{i}")))
        .collect::<Result<Vec<VehicleRequest>>>()?;

    let mut n_vehicles: usize = 0;
    for r in &requests {
        n_vehicles = n_vehicles.saturating_add(r.quantity);
        ensure!(
            n_vehicles <= MAX_VEHICLES,
            "search exceeds the limit of {MAX_VEHICLES} vehicles"
        );
    }
    Ok(requests)
}
