//! Load-dependent cost model.
//!
//! Each leg costs `distance * per_km` for moving the vehicle plus
//! `distance * load * per_km_per_kg` for the weight carried over it. The
//! carried load grows at warehouses and drops to zero at the hub.

use std::collections::BTreeMap;

use crate::network::NetworkError;
use crate::{CenterId, Order, PlanError, Topology};

/// How repeated visits to one warehouse within a route are charged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PickupPolicy {
    /// A warehouse's goods are loaded on its first visit only.
    #[default]
    OncePerWarehouse,
    /// Every visit loads the warehouse's full share of the order again.
    EveryVisit,
}

/// Cost coefficients shared by every route evaluation.
///
/// # Examples
/// ```
/// use hubroute_core::CostRates;
///
/// # fn main() -> Result<(), hubroute_core::NetworkError> {
/// let rates = CostRates::new(2.0, 1.0, 0.5)?;
/// assert_eq!(rates.per_km, 2.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct CostRates {
    /// Cost per kilometre travelled, independent of load.
    pub per_km: f64,
    /// Cost per kilometre for each kilogram carried.
    pub per_km_per_kg: f64,
    /// Weight in kilograms of one requested unit.
    pub weight_per_unit: f64,
    /// Treatment of repeated warehouse visits.
    #[cfg_attr(feature = "serde", serde(default))]
    pub pickup: PickupPolicy,
}

impl CostRates {
    /// Validate and construct rates with the default [`PickupPolicy`].
    ///
    /// # Errors
    /// Returns [`NetworkError::InvalidRate`] when a coefficient is negative
    /// or not finite.
    pub fn new(per_km: f64, per_km_per_kg: f64, weight_per_unit: f64) -> Result<Self, NetworkError> {
        let rates = Self {
            per_km,
            per_km_per_kg,
            weight_per_unit,
            pickup: PickupPolicy::default(),
        };
        rates.validate()?;
        Ok(rates)
    }

    /// Replace the pickup policy.
    #[must_use]
    pub const fn with_pickup(mut self, pickup: PickupPolicy) -> Self {
        self.pickup = pickup;
        self
    }

    /// Check every coefficient is finite and non-negative.
    ///
    /// # Errors
    /// Returns [`NetworkError::InvalidRate`] naming the first bad coefficient.
    pub fn validate(&self) -> Result<(), NetworkError> {
        let named = [
            ("per_km", self.per_km),
            ("per_km_per_kg", self.per_km_per_kg),
            ("weight_per_unit", self.weight_per_unit),
        ];
        match named
            .into_iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            Some((name, value)) => Err(NetworkError::InvalidRate { name, value }),
            None => Ok(()),
        }
    }

    /// Cost of driving `distance` kilometres while carrying `load` kilograms.
    #[expect(
        clippy::float_arithmetic,
        reason = "leg cost is a floating-point product of distance, load and rates"
    )]
    #[must_use]
    pub fn leg_cost(&self, distance: f64, load: f64) -> f64 {
        distance * self.per_km + distance * load * self.per_km_per_kg
    }
}

/// Outcome of scoring one route.
///
/// Infeasibility and overflow are distinct variants rather than infinite or
/// NaN costs, so they never leak into sums or comparisons.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteCost {
    /// Every leg exists; the value is the total cost.
    Feasible(f64),
    /// A leg has no distance entry.
    Infeasible {
        /// Origin of the first missing leg.
        from: CenterId,
        /// Destination of the first missing leg.
        to: CenterId,
    },
    /// The carried load or the running total stopped being finite.
    Overflow,
}

impl RouteCost {
    /// The cost of a feasible route.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self {
            Self::Feasible(cost) => Some(*cost),
            Self::Infeasible { .. } | Self::Overflow => None,
        }
    }

    /// Return `true` for [`RouteCost::Feasible`].
    #[must_use]
    pub const fn is_feasible(&self) -> bool {
        matches!(self, Self::Feasible(_))
    }

    /// Return `true` when this cost is feasible and strictly below `best`.
    #[must_use]
    pub fn improves_on(&self, best: Option<f64>) -> bool {
        match (self.value(), best) {
            (Some(cost), Some(current)) => cost < current,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }
}

/// Kilograms each warehouse contributes to a particular order.
///
/// Computed once per order: for every warehouse, the sum over its stocked
/// products of `quantity * weight_per_unit`. Warehouses that supply nothing
/// for the order are omitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PickupWeights {
    by_warehouse: BTreeMap<CenterId, f64>,
}

impl PickupWeights {
    /// Compute pickup weights for `order`.
    ///
    /// # Errors
    /// Returns [`PlanError::WeightOverflow`] when a warehouse's summed
    /// quantity or weight is not finite.
    #[expect(
        clippy::float_arithmetic,
        reason = "weights are floating-point products of quantities and unit weight"
    )]
    pub fn for_order(
        topology: &Topology,
        rates: &CostRates,
        order: &Order,
    ) -> Result<Self, PlanError> {
        let mut by_warehouse = BTreeMap::new();
        for (warehouse, stock) in topology.warehouses() {
            let quantity: f64 = stock.iter().map(|product| order.quantity(product)).sum();
            if quantity <= 0.0 {
                continue;
            }
            let weight = quantity * rates.weight_per_unit;
            if !weight.is_finite() {
                return Err(PlanError::WeightOverflow {
                    warehouse: warehouse.clone(),
                });
            }
            by_warehouse.insert(warehouse.clone(), weight);
        }
        Ok(Self { by_warehouse })
    }

    /// Weight loaded at `center`; zero for the hub and uninvolved warehouses.
    #[must_use]
    pub fn weight(&self, center: &CenterId) -> f64 {
        self.by_warehouse.get(center).copied().unwrap_or(0.0)
    }

    /// Total weight across every warehouse.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.by_warehouse.values().sum()
    }
}
