//! `ExhaustiveSearch` implementation of the `Planner` trait.

use std::time::Instant;

use hubroute_core::{
    CenterId, Diagnostics, Network, Order, Plan, PlanError, Planner, Route, RouteCost,
};

use crate::candidates::{candidate_count, for_each_candidate};

/// Default upper bound on required warehouses per order.
pub const DEFAULT_MAX_REQUIRED_CENTERS: usize = 8;

/// Configuration for [`ExhaustiveSearch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Orders requiring more warehouses than this fail with
    /// [`PlanError::TooManyCenters`] before any candidate is scored.
    pub max_required_centers: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_required_centers: DEFAULT_MAX_REQUIRED_CENTERS,
        }
    }
}

/// Planner that scores every hub-split candidate route.
///
/// The network is held by value and never mutated, so one instance may be
/// shared across threads and called concurrently.
///
/// # Examples
/// ```
/// use hubroute_core::{Order, Planner, Quote};
/// use hubroute_core::test_support::reference_network;
/// use hubroute_search::ExhaustiveSearch;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let planner = ExhaustiveSearch::new(reference_network());
/// let plan = planner.plan(&Order::new([("A", 2.0), ("D", 2.0), ("G", 2.0)])?)?;
/// assert_eq!(Quote::from(&plan).min_cost, 102);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ExhaustiveSearch {
    network: Network,
    config: SearchConfig,
}

impl ExhaustiveSearch {
    /// Construct a planner using default configuration.
    #[must_use]
    pub fn new(network: Network) -> Self {
        Self::with_config(network, SearchConfig::default())
    }

    /// Construct a planner with explicit configuration.
    #[must_use]
    pub const fn with_config(network: Network, config: SearchConfig) -> Self {
        Self { network, config }
    }

    /// The network routes are planned over.
    #[must_use]
    pub const fn network(&self) -> &Network {
        &self.network
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> SearchConfig {
        self.config
    }
}

impl Planner for ExhaustiveSearch {
    fn plan(&self, order: &Order) -> Result<Plan, PlanError> {
        let started_at = Instant::now();
        let topology = self.network.topology();

        if let Some(product) = topology.unstocked_product(order) {
            return Err(PlanError::UnstockedProduct {
                product: product.to_owned(),
            });
        }

        let required = topology.required_centers(order);
        if required.is_empty() {
            log::debug!("order requests nothing; skipping search");
            return Ok(Plan::nothing_requested(Diagnostics {
                solve_time: started_at.elapsed(),
                ..Diagnostics::default()
            }));
        }
        if required.len() > self.config.max_required_centers {
            return Err(PlanError::TooManyCenters {
                required: required.len(),
                limit: self.config.max_required_centers,
            });
        }

        log::debug!(
            "planning over {} required centers ({} candidates): {}",
            required.len(),
            candidate_count(required.len()),
            join(&required)
        );

        let best = self.search(order, &required)?;
        let diagnostics = Diagnostics {
            solve_time: started_at.elapsed(),
            candidates_evaluated: best.evaluated,
            infeasible_candidates: best.infeasible,
        };

        let Some(cost) = best.cost else {
            if best.overflowed > 0 {
                log::warn!(
                    "every routable candidate through {} overflowed ({} of {})",
                    join(&required),
                    best.overflowed,
                    best.evaluated
                );
                return Err(PlanError::CostOverflow { required });
            }
            log::warn!(
                "no feasible route through {} after {} candidates",
                join(&required),
                best.evaluated
            );
            return Err(PlanError::Unroutable { required });
        };
        let route = Route::new(best.stops, self.network.hub())
            .map_err(|_| PlanError::Unroutable {
                required: required.clone(),
            })?;

        Ok(Plan {
            cost,
            route: Some(route),
            required,
            diagnostics,
        })
    }
}

/// Running minimum over the candidates scored so far.
#[derive(Debug, Default)]
struct Best {
    cost: Option<f64>,
    stops: Vec<CenterId>,
    evaluated: u64,
    infeasible: u64,
    overflowed: u64,
}

impl Best {
    fn offer(&mut self, stops: &[&CenterId], cost: &RouteCost) {
        self.evaluated = self.evaluated.saturating_add(1);
        if !cost.is_feasible() {
            self.infeasible = self.infeasible.saturating_add(1);
            if matches!(cost, RouteCost::Overflow) {
                self.overflowed = self.overflowed.saturating_add(1);
            }
            return;
        }
        if cost.improves_on(self.cost) {
            self.cost = cost.value();
            self.stops = stops.iter().map(|stop| (*stop).clone()).collect();
            log::trace!(
                "candidate {} improves minimum to {cost:?} via {}",
                self.evaluated,
                join_refs(stops)
            );
        }
    }
}

impl ExhaustiveSearch {
    fn search(&self, order: &Order, required: &[CenterId]) -> Result<Best, PlanError> {
        let pickups = self.network.pickup_weights(order)?;
        let mut best = Best::default();
        for_each_candidate(required, self.network.hub(), |stops| {
            let cost = self.network.stops_cost(stops, &pickups);
            best.offer(stops, &cost);
        });
        Ok(best)
    }
}

fn join(centers: &[CenterId]) -> String {
    centers
        .iter()
        .map(CenterId::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

fn join_refs(centers: &[&CenterId]) -> String {
    centers
        .iter()
        .map(|center| center.as_str())
        .collect::<Vec<_>>()
        .join(",")
}
