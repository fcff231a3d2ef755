//! The planning boundary between callers and search engines.

use std::time::Duration;

use thiserror::Error;

use crate::{CenterId, Order, Route};

/// Note attached to quotes for orders that request nothing.
pub const NO_ITEMS_NOTE: &str = "no items requested";

/// Search statistics reported with a [`Plan`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagnostics {
    /// Wall-clock time spent planning.
    pub solve_time: Duration,
    /// Candidate routes scored.
    pub candidates_evaluated: u64,
    /// Candidate routes rejected for a missing leg or an overflowing cost.
    pub infeasible_candidates: u64,
}

/// Result of a successful planning call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Plan {
    /// Minimum route cost; zero when the order requests nothing.
    pub cost: f64,
    /// The cheapest route, or `None` when no warehouse had to be visited.
    pub route: Option<Route>,
    /// Warehouses the order required, in identifier order.
    pub required: Vec<CenterId>,
    /// Search statistics.
    pub diagnostics: Diagnostics,
}

impl Plan {
    /// Plan for an order that needs no pickups.
    #[must_use]
    pub const fn nothing_requested(diagnostics: Diagnostics) -> Self {
        Self {
            cost: 0.0,
            route: None,
            required: Vec::new(),
            diagnostics,
        }
    }

    /// Return `true` when the order required no warehouse.
    #[must_use]
    pub const fn is_empty_order(&self) -> bool {
        self.route.is_none()
    }
}

/// Caller-facing summary of a [`Plan`].
///
/// # Examples
/// ```
/// use hubroute_core::{Diagnostics, Plan, Quote};
///
/// let quote = Quote::from(&Plan::nothing_requested(Diagnostics::default()));
/// assert_eq!(quote.min_cost, 0);
/// assert_eq!(quote.note.as_deref(), Some("no items requested"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Quote {
    /// Plan cost rounded to the nearest integer.
    pub min_cost: u64,
    /// Explanation for degenerate results.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub note: Option<String>,
}

impl From<&Plan> for Quote {
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "plan costs are finite and non-negative; rounding to whole units is the quote contract"
    )]
    fn from(plan: &Plan) -> Self {
        let note = plan.is_empty_order().then(|| NO_ITEMS_NOTE.to_owned());
        Self {
            min_cost: plan.cost.max(0.0).round() as u64,
            note,
        }
    }
}

/// Errors returned by [`Planner::plan`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// A requested product is not stocked by any warehouse.
    #[error("product {product:?} is not stocked by any warehouse")]
    UnstockedProduct {
        /// Product key with a positive quantity.
        product: String,
    },
    /// Every candidate route used a leg missing from the distance table.
    #[error("no valid route visits {}", join(required))]
    Unroutable {
        /// Warehouses the order required.
        required: Vec<CenterId>,
    },
    /// The order needs more warehouses than the search is allowed to permute.
    #[error("order requires {required} warehouses but the search limit is {limit}")]
    TooManyCenters {
        /// Number of required warehouses.
        required: usize,
        /// Configured upper bound.
        limit: usize,
    },
    /// A warehouse's share of the order weighs more than an `f64` can hold.
    #[error("pickup weight at {warehouse} overflows")]
    WeightOverflow {
        /// Warehouse whose pickup weight is not finite.
        warehouse: CenterId,
    },
    /// Every routable candidate overflowed while accumulating its cost.
    #[error("route cost through {} overflows", join(required))]
    CostOverflow {
        /// Warehouses the order required.
        required: Vec<CenterId>,
    },
}

fn join(centers: &[CenterId]) -> String {
    centers
        .iter()
        .map(CenterId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Find the cheapest way to bring an order's goods to the hub.
///
/// Implementations hold their network as immutable state and must be
/// `Send + Sync` so one instance can serve concurrent callers.
pub trait Planner: Send + Sync {
    /// Plan deliveries for `order`.
    ///
    /// # Errors
    /// Returns [`PlanError`] when the order cannot be routed.
    fn plan(&self, order: &Order) -> Result<Plan, PlanError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct FixedPlanner {
        cost: f64,
    }

    impl Planner for FixedPlanner {
        fn plan(&self, order: &Order) -> Result<Plan, PlanError> {
            if order.is_empty() {
                return Ok(Plan::nothing_requested(Diagnostics::default()));
            }
            let hub = CenterId::from("L1");
            let route = Route::new(vec![CenterId::from("C1"), hub.clone()], &hub)
                .map_err(|_| PlanError::Unroutable { required: Vec::new() })?;
            Ok(Plan {
                cost: self.cost,
                route: Some(route),
                required: vec![CenterId::from("C1")],
                diagnostics: Diagnostics::default(),
            })
        }
    }

    #[rstest]
    #[case(101.5, 102)]
    #[case(101.49, 101)]
    #[case(0.4, 0)]
    fn quote_rounds_to_nearest_integer(#[case] cost: f64, #[case] expected: u64) {
        let order = Order::new([("A", 1.0)]).expect("valid order");
        let plan = FixedPlanner { cost }.plan(&order).expect("plan");
        let quote = Quote::from(&plan);
        assert_eq!(quote.min_cost, expected);
        assert!(quote.note.is_none());
    }

    #[rstest]
    fn empty_orders_carry_a_note() {
        let plan = FixedPlanner { cost: 5.0 }
            .plan(&Order::empty())
            .expect("plan");
        assert!(plan.is_empty_order());
        assert_eq!(Quote::from(&plan).note.as_deref(), Some(NO_ITEMS_NOTE));
    }

    #[rstest]
    fn unroutable_message_lists_centers() {
        let err = PlanError::Unroutable {
            required: vec![CenterId::from("C1"), CenterId::from("C3")],
        };
        assert_eq!(err.to_string(), "no valid route visits C1, C3");
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn quote_serialises_with_camel_case_keys() {
        let quote = Quote {
            min_cost: 102,
            note: None,
        };
        let json = serde_json::to_string(&quote).expect("serialise quote");
        assert_eq!(json, r#"{"minCost":102}"#);
    }
}
