//! Exhaustive route search for hubroute.
//!
//! This crate provides [`ExhaustiveSearch`], the default implementation of
//! the [`Planner`](hubroute_core::Planner) trait. For every required warehouse
//! as the departure point, every ordering of the remaining warehouses, and
//! every split point, it scores the route
//! `[start] ++ prefix ++ [hub] ++ suffix ++ [hub]` and keeps the cheapest
//! feasible one.
//!
//! The search is factorial in the number of required warehouses. A
//! configurable bound in [`SearchConfig`] rejects orders that would exceed it
//! before any candidate is scored.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod candidates;
mod permutations;
mod search;

pub use candidates::{candidate_count, candidate_stops, for_each_candidate};
pub use permutations::Permutations;
pub use search::{DEFAULT_MAX_REQUIRED_CENTERS, ExhaustiveSearch, SearchConfig};
