#![cfg(feature = "serde")]
#![expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]

//! Behavioural tests for route scoring using rstest-bdd.


use std::cell::RefCell;

use hubroute_core::{CenterId, Network, Order, Route, RouteCost};
use network_fixtures::{load_network, units_from_every_warehouse};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// World state for route cost scenarios.
#[derive(Debug, Default)]
struct RouteCostWorld {
    network: RefCell<Option<Network>>,
    order: RefCell<Order>,
    cost: RefCell<Option<RouteCost>>,
}

#[fixture]
fn world() -> RouteCostWorld {
    RouteCostWorld::default()
}

#[given("the {name} network")]
fn given_network(world: &RouteCostWorld, name: String) {
    world.network.replace(Some(load_network(name.trim_matches('"'))));
}

#[given("an order of {units} units from every warehouse")]
fn given_order(world: &RouteCostWorld, units: f64) {
    world.order.replace(units_from_every_warehouse(units));
}

#[when("I score the route {stops}")]
fn when_scored(world: &RouteCostWorld, stops: String) {
    let network = world.network.borrow();
    let network = network.as_ref().expect("network should be loaded");
    let stops: Vec<CenterId> = stops.split(',').map(str::trim).map(CenterId::from).collect();
    let route = Route::new(stops, network.hub()).expect("route should end at the hub");
    let cost = network.route_cost(&route, &world.order.borrow());
    world.cost.replace(Some(cost));
}

#[then("the route costs {expected}")]
fn then_costs(world: &RouteCostWorld, expected: f64) {
    let cost = world.cost.borrow();
    let value = cost
        .as_ref()
        .and_then(RouteCost::value)
        .expect("route should be feasible");
    assert!(
        (value - expected).abs() < 1e-9,
        "route cost {value} differs from {expected}"
    );
}

#[then("the route is infeasible from {from} to {to}")]
fn then_infeasible(world: &RouteCostWorld, from: String, to: String) {
    let cost = world.cost.borrow();
    assert_eq!(
        cost.as_ref(),
        Some(&RouteCost::Infeasible {
            from: CenterId::from(from.as_str()),
            to: CenterId::from(to.as_str()),
        })
    );
}

#[scenario(path = "tests/features/route_cost.feature", index = 0)]
fn single_trip(world: RouteCostWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/route_cost.feature", index = 1)]
fn split_trip(world: RouteCostWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/route_cost.feature", index = 2)]
fn missing_leg(world: RouteCostWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/route_cost.feature", index = 3)]
fn every_visit_pickup(world: RouteCostWorld) {
    let _ = world;
}
