//! Static delivery network: topology, distances and cost rates.
//!
//! A [`Network`] is validated once at start-up and then shared read-only by
//! every planning call. It owns the route cost evaluator, since scoring a
//! route needs all three parts of the configuration.

mod distance;
mod error;
mod topology;

use std::collections::{BTreeMap, BTreeSet};

pub use distance::DistanceTable;
pub use error::NetworkError;
pub use topology::Topology;

use crate::{
    CenterId, CostRates, Order, PickupPolicy, PickupWeights, PlanError, Route, RouteCost,
};

/// Plain configuration form of a [`Network`].
///
/// This is the shape read from configuration files. Distances are nested as
/// `from -> to -> kilometres`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct NetworkSpec {
    /// Identifier of the delivery hub.
    pub hub: CenterId,
    /// Product keys stocked by each warehouse.
    pub warehouses: BTreeMap<CenterId, BTreeSet<String>>,
    /// Directed leg distances.
    #[cfg_attr(feature = "serde", serde(default))]
    pub distances: BTreeMap<CenterId, BTreeMap<CenterId, f64>>,
    /// Cost coefficients.
    pub rates: CostRates,
}

/// Validated, immutable delivery network.
///
/// # Examples
/// ```
/// use std::collections::{BTreeMap, BTreeSet};
/// use hubroute_core::{CenterId, CostRates, DistanceTable, Network, Order, Route, Topology};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let hub = CenterId::from("L1");
/// let c1 = CenterId::from("C1");
/// let mut warehouses = BTreeMap::new();
/// warehouses.insert(c1.clone(), BTreeSet::from(["A".to_owned()]));
///
/// let network = Network::new(
///     Topology::new(hub.clone(), warehouses)?,
///     DistanceTable::new().with_symmetric_leg(c1.clone(), hub.clone(), 10.0),
///     CostRates::new(2.0, 1.0, 0.5)?,
/// )?;
///
/// let order = Order::new([("A", 4.0)])?;
/// let route = Route::new(vec![c1, hub.clone(), hub], &CenterId::from("L1"))?;
/// // 10 km * (2 + 1 * 2 kg)
/// assert_eq!(network.route_cost(&route, &order).value(), Some(40.0));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "NetworkSpec", into = "NetworkSpec")
)]
pub struct Network {
    topology: Topology,
    distances: DistanceTable,
    rates: CostRates,
}

impl Network {
    /// Validate and assemble a network.
    ///
    /// # Errors
    /// Returns [`NetworkError`] when a distance names an unknown center or is
    /// negative or non-finite, or when a rate is invalid.
    pub fn new(
        topology: Topology,
        distances: DistanceTable,
        rates: CostRates,
    ) -> Result<Self, NetworkError> {
        rates.validate()?;
        for (from, to, distance) in distances.legs() {
            if let Some(center) = [from, to].into_iter().find(|c| !topology.contains(c)) {
                return Err(NetworkError::UnknownCenter {
                    center: center.clone(),
                });
            }
            if !distance.is_finite() || distance < 0.0 {
                return Err(NetworkError::InvalidDistance {
                    from: from.clone(),
                    to: to.clone(),
                    distance,
                });
            }
        }
        Ok(Self {
            topology,
            distances,
            rates,
        })
    }

    /// Warehouses and hub.
    #[must_use]
    pub const fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Leg distances.
    #[must_use]
    pub const fn distances(&self) -> &DistanceTable {
        &self.distances
    }

    /// Cost coefficients.
    #[must_use]
    pub const fn rates(&self) -> &CostRates {
        &self.rates
    }

    /// The delivery hub.
    #[must_use]
    pub const fn hub(&self) -> &CenterId {
        self.topology.hub()
    }

    /// Pickup weights of every warehouse for `order`.
    ///
    /// # Errors
    /// Returns [`PlanError::WeightOverflow`] when a warehouse's share of the
    /// order is too heavy to represent.
    pub fn pickup_weights(&self, order: &Order) -> Result<PickupWeights, PlanError> {
        PickupWeights::for_order(&self.topology, &self.rates, order)
    }

    /// Score `route` for `order`.
    ///
    /// Pickup weights that overflow score as [`RouteCost::Overflow`].
    #[must_use]
    pub fn route_cost(&self, route: &Route, order: &Order) -> RouteCost {
        let Ok(pickups) = self.pickup_weights(order) else {
            return RouteCost::Overflow;
        };
        let stops: Vec<&CenterId> = route.stops().iter().collect();
        self.stops_cost(&stops, &pickups)
    }

    /// Score a borrowed stop sequence against precomputed pickup weights.
    ///
    /// The first stop is the departure point; a warehouse there is loaded
    /// before the first leg, unlike a walk that starts empty and loads on
    /// arrival only. Each later stop adds its pickup weight on arrival
    /// (subject to the [`PickupPolicy`]) and the hub unloads everything.
    /// The walk stops at the first missing leg, and at the first load or
    /// running total that is not finite.
    #[expect(
        clippy::float_arithmetic,
        reason = "route cost accumulates floating-point leg costs and loads"
    )]
    #[must_use]
    pub fn stops_cost(&self, stops: &[&CenterId], pickups: &PickupWeights) -> RouteCost {
        let Some((first, rest)) = stops.split_first() else {
            return RouteCost::Feasible(0.0);
        };

        let mut visited: Vec<&CenterId> = Vec::with_capacity(stops.len());
        let mut load = self.arrive(first, 0.0, pickups, &mut visited);
        if !load.is_finite() {
            return RouteCost::Overflow;
        }
        let mut total = 0.0;
        let mut from = *first;

        for to in rest.iter().copied() {
            let Some(distance) = self.distances.get(from, to) else {
                return RouteCost::Infeasible {
                    from: from.clone(),
                    to: to.clone(),
                };
            };
            total += self.rates.leg_cost(distance, load);
            load = self.arrive(to, load, pickups, &mut visited);
            if !total.is_finite() || !load.is_finite() {
                return RouteCost::Overflow;
            }
            from = to;
        }

        RouteCost::Feasible(total)
    }

    /// Load carried after arriving at `center`.
    #[expect(
        clippy::float_arithmetic,
        reason = "carried load is a floating-point running sum"
    )]
    fn arrive<'a>(
        &self,
        center: &'a CenterId,
        load: f64,
        pickups: &PickupWeights,
        visited: &mut Vec<&'a CenterId>,
    ) -> f64 {
        if self.topology.is_hub(center) {
            return 0.0;
        }
        if self.rates.pickup == PickupPolicy::OncePerWarehouse {
            if visited.contains(&center) {
                return load;
            }
            visited.push(center);
        }
        load + pickups.weight(center)
    }
}

impl TryFrom<NetworkSpec> for Network {
    type Error = NetworkError;

    fn try_from(spec: NetworkSpec) -> Result<Self, Self::Error> {
        let topology = Topology::new(spec.hub, spec.warehouses)?;
        let mut distances = DistanceTable::new();
        for (from, row) in spec.distances {
            for (to, distance) in row {
                distances.insert(from.clone(), to, distance);
            }
        }
        Self::new(topology, distances, spec.rates)
    }
}

impl From<Network> for NetworkSpec {
    fn from(network: Network) -> Self {
        let mut distances: BTreeMap<CenterId, BTreeMap<CenterId, f64>> = BTreeMap::new();
        for (from, to, distance) in network.distances.legs() {
            distances
                .entry(from.clone())
                .or_default()
                .insert(to.clone(), distance);
        }
        let warehouses = network
            .topology
            .warehouses()
            .map(|(id, stock)| (id.clone(), stock.clone()))
            .collect();
        Self {
            hub: network.topology.hub().clone(),
            warehouses,
            distances,
            rates: network.rates,
        }
    }
}
