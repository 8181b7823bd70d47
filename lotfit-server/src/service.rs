use anyhow::{Context, Result};
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use log::{error, info, warn};
use lotfit::entities::Catalog;
use lotfit::io::ext_repr::ExtVehicleRequest;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

pub const CATALOG_PATH_VAR: &str = "LOTFIT_CATALOG_PATH";
pub const BIND_ADDR_VAR: &str = "LOTFIT_BIND_ADDR";
const DEFAULT_CATALOG_PATH: &str = "./data/listings.json";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Configuration of the service, read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// JSON file holding the catalog, read once at startup
    pub catalog_path: PathBuf,
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key-value source, falling back to the defaults for missing keys
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let catalog_path = lookup(CATALOG_PATH_VAR)
            .unwrap_or_else(|| DEFAULT_CATALOG_PATH.to_string())
            .into();
        let bind_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .with_context(|| format!("{BIND_ADDR_VAR} is not a valid socket address: {bind_addr}"))?;

        Ok(Self {
            catalog_path,
            bind_addr,
        })
    }
}

/// Every method on `/` is answered with a search, the body being a JSON array of vehicle requests
pub fn router(catalog: Arc<Catalog>) -> Router {
    Router::new()
        .route("/", any(handle_search))
        .with_state(catalog)
}

pub async fn handle_search(State(catalog): State<Arc<Catalog>>, body: Bytes) -> Response {
    let start = Instant::now();
    // matching is CPU bound, keep it off the async workers
    let outcome = tokio::task::spawn_blocking(move || respond(&catalog, &body)).await;

    match outcome {
        Ok(Ok((n_vehicles, json))) => {
            info!(
                "[SERVER] answered search for {n_vehicles} vehicle(s) in {:.3}ms",
                start.elapsed().as_secs_f64() * 1000.0
            );
            ([(header::CONTENT_TYPE, "application/json")], json).into_response()
        }
        Ok(Err(e)) => {
            warn!("[SERVER] rejected request: {e:#}");
            (StatusCode::BAD_REQUEST, "invalid request").into_response()
        }
        Err(e) => {
            error!("[SERVER] search task failed: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Parses the body, runs the search and serializes the results.
/// Returns the number of requested vehicles along with the response body.
fn respond(catalog: &Catalog, body: &[u8]) -> Result<(usize, String)> {
    let ext_requests: Vec<ExtVehicleRequest> =
        serde_json::from_slice(body).context("failed to parse request body")?;
    let results = lotfit::io::search(catalog, &ext_requests)?;
    let n_vehicles = ext_requests
        .iter()
        .map(|r| usize::try_from(r.quantity).unwrap_or(0))
        .fold(0usize, usize::saturating_add);
    let json = serde_json::to_string(&results).context("failed to serialize results")?;
    Ok((n_vehicles, json))
}
