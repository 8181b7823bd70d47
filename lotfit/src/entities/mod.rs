mod catalog;
mod listing;
mod location_result;
mod vehicle;

#[doc(inline)]
pub use catalog::Catalog;
#[doc(inline)]
pub use listing::Listing;
#[doc(inline)]
pub use location_result::LocationResult;
#[doc(inline)]
pub use vehicle::VehicleRequest;
#[doc(inline)]
pub use vehicle::flatten_vehicles;
