//! Fixtures shared by unit, behaviour and property tests.
//!
//! The reference network has three warehouses with disjoint stock feeding
//! hub `L1` over a symmetric, complete distance table.

use std::collections::{BTreeMap, BTreeSet};

use crate::{CenterId, CostRates, DistanceTable, Network, Order, Topology};

/// Identifier of the reference hub.
pub const REFERENCE_HUB: &str = "L1";

/// Reference warehouses with their stock.
pub const REFERENCE_STOCK: [(&str, [&str; 3]); 3] = [
    ("C1", ["A", "B", "C"]),
    ("C2", ["D", "E", "F"]),
    ("C3", ["G", "H", "I"]),
];

/// Undirected reference legs in kilometres.
pub const REFERENCE_LEGS: [(&str, &str, f64); 6] = [
    ("C1", "L1", 10.0),
    ("C2", "L1", 8.0),
    ("C3", "L1", 5.0),
    ("C1", "C2", 15.0),
    ("C1", "C3", 20.0),
    ("C2", "C3", 12.0),
];

/// Warehouses of the reference network.
///
/// # Panics
/// Never; the reference data is valid.
#[expect(clippy::expect_used, reason = "reference data is statically valid")]
#[must_use]
pub fn reference_topology() -> Topology {
    let warehouses: BTreeMap<CenterId, BTreeSet<String>> = REFERENCE_STOCK
        .iter()
        .map(|(id, stock)| {
            (
                CenterId::from(*id),
                stock.iter().map(|p| (*p).to_owned()).collect(),
            )
        })
        .collect();
    Topology::new(CenterId::from(REFERENCE_HUB), warehouses).expect("reference topology")
}

/// Symmetric distances of the reference network.
#[must_use]
pub fn reference_distances() -> DistanceTable {
    REFERENCE_LEGS
        .iter()
        .fold(DistanceTable::new(), |table, (a, b, distance)| {
            table.with_symmetric_leg(CenterId::from(*a), CenterId::from(*b), *distance)
        })
}

/// Rates of 2 per km, 1 per km per kg and 0.5 kg per unit.
///
/// # Panics
/// Never; the literals are valid.
#[expect(clippy::expect_used, reason = "reference rates are statically valid")]
#[must_use]
pub fn reference_rates() -> CostRates {
    CostRates::new(2.0, 1.0, 0.5).expect("reference rates")
}

/// The complete reference network.
///
/// # Panics
/// Never; the reference data is valid.
#[expect(clippy::expect_used, reason = "reference network is statically valid")]
#[must_use]
pub fn reference_network() -> Network {
    Network::new(reference_topology(), reference_distances(), reference_rates())
        .expect("reference network")
}

/// The reference network with the given undirected legs removed.
///
/// # Panics
/// Never; dropping legs cannot invalidate the network.
#[expect(clippy::expect_used, reason = "removing legs keeps the network valid")]
#[must_use]
pub fn reference_network_without(missing: &[(&str, &str)]) -> Network {
    let distances = REFERENCE_LEGS
        .iter()
        .filter(|(a, b, _)| {
            !missing
                .iter()
                .any(|(x, y)| (x == a && y == b) || (x == b && y == a))
        })
        .fold(DistanceTable::new(), |table, (a, b, distance)| {
            table.with_symmetric_leg(CenterId::from(*a), CenterId::from(*b), *distance)
        });
    Network::new(reference_topology(), distances, reference_rates()).expect("reference network")
}

/// Build an order from literal entries.
///
/// # Panics
/// Panics when an entry is not a valid order line.
#[expect(clippy::expect_used, reason = "test orders use valid literals")]
#[must_use]
pub fn order(entries: &[(&str, f64)]) -> Order {
    Order::new(entries.iter().copied()).expect("valid order")
}
