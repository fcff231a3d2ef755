//! Facade crate for the hubroute delivery cost engine.
//!
//! This crate re-exports the core domain types and exposes the exhaustive
//! planner behind the `search` feature.

#![forbid(unsafe_code)]

pub use hubroute_core::{
    CenterId, CostRates, Diagnostics, DistanceTable, NO_ITEMS_NOTE, Network, NetworkError,
    NetworkSpec, Order, OrderError, PickupPolicy, PickupWeights, Plan, PlanError, Planner, Quote,
    Route, RouteCost, RouteError, Topology,
};

#[cfg(feature = "search")]
pub use hubroute_search::{DEFAULT_MAX_REQUIRED_CENTERS, ExhaustiveSearch, SearchConfig};
