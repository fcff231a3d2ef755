//! Core domain types for the hubroute engine.
//!
//! The crate models a static delivery network of warehouses feeding a single
//! hub, validates customer orders, and scores candidate routes under a
//! load-dependent cost model. Search strategies live elsewhere and plug in
//! through the [`Planner`] trait.
//!
//! Constructors return `Result` so invalid configuration and input surface
//! before any route is scored.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod center;
pub mod cost;
pub mod network;
pub mod order;
pub mod planner;
pub mod route;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use center::CenterId;
pub use cost::{CostRates, PickupPolicy, PickupWeights, RouteCost};
pub use network::{DistanceTable, Network, NetworkError, NetworkSpec, Topology};
pub use order::{Order, OrderError};
pub use planner::{Diagnostics, NO_ITEMS_NOTE, Plan, PlanError, Planner, Quote};
pub use route::{Route, RouteError};
