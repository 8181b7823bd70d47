mod aggregator;
mod location_solver;
mod partition;

#[doc(inline)]
pub use aggregator::compute_results;
#[doc(inline)]
pub use location_solver::solve_location;
#[doc(inline)]
pub use partition::group_by_location;
