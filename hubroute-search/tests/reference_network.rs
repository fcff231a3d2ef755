#![expect(clippy::expect_used, reason = "tests use expect for readable failures")]

//! Regression tests over the three-warehouse reference network.
//!
//! The expected costs were computed by hand with rates of 2 per km, 1 per km
//! per kg and 0.5 kg per unit.

use hubroute_core::test_support::{order, reference_network};
use hubroute_core::{CenterId, Network, Planner, Quote, Route};
use hubroute_search::ExhaustiveSearch;
use rstest::{fixture, rstest};

#[fixture]
fn network() -> Network {
    reference_network()
}

fn route(raw: &[&str]) -> Route {
    Route::new(
        raw.iter().copied().map(CenterId::from).collect(),
        &CenterId::from("L1"),
    )
    .expect("valid route")
}

#[rstest]
#[case(&["C1", "C2", "C3", "L1", "L1"], 118.0)]
#[case(&["C1", "C2", "L1", "C3", "L1"], 102.0)]
#[case(&["C1", "L1", "C2", "C3", "L1"], 102.0)]
#[case(&["C2", "C3", "L1", "C1", "L1"], 106.0)]
fn hand_computed_candidates(network: Network, #[case] stops: &[&str], #[case] expected: f64) {
    let request = order(&[("A", 2.0), ("D", 2.0), ("G", 2.0)]);
    let cost = network.route_cost(&route(stops), &request);
    assert_eq!(cost.value(), Some(expected));
}

#[rstest]
fn engine_returns_the_cheaper_split_trip(network: Network) {
    let request = order(&[("A", 2.0), ("D", 2.0), ("G", 2.0)]);
    let single_trip = network
        .route_cost(&route(&["C1", "C2", "C3", "L1", "L1"]), &request)
        .value()
        .expect("feasible");
    let split_trip = network
        .route_cost(&route(&["C1", "C2", "L1", "C3", "L1"]), &request)
        .value()
        .expect("feasible");

    let plan = ExhaustiveSearch::new(network)
        .plan(&request)
        .expect("reference order plans");
    assert!(split_trip < single_trip);
    assert_eq!(Quote::from(&plan).min_cost, 102);
    assert_eq!(plan.cost, split_trip);
}

#[rstest]
#[case(&[("A", 4.0)], 40)]
#[case(&[("F", 4.0)], 32)]
#[case(&[("H", 4.0)], 20)]
#[case(&[("A", 1.0), ("B", 1.0), ("C", 2.0)], 40)]
fn single_warehouse_orders(
    network: Network,
    #[case] entries: &[(&str, f64)],
    #[case] expected: u64,
) {
    let plan = ExhaustiveSearch::new(network)
        .plan(&order(entries))
        .expect("plan");
    assert_eq!(Quote::from(&plan).min_cost, expected);
    assert_eq!(plan.route.map(|route| route.len()), Some(3));
}

#[rstest]
fn empty_order_quotes_zero_with_note(network: Network) {
    let plan = ExhaustiveSearch::new(network)
        .plan(&order(&[]))
        .expect("empty order plans");
    let quote = Quote::from(&plan);
    assert_eq!(quote.min_cost, 0);
    assert_eq!(quote.note.as_deref(), Some("no items requested"));
}
