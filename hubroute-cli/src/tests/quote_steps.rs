//! Behaviour-driven step definitions driving the quote CLI scenarios.

use super::helpers::{TWO_WAREHOUSE_NETWORK, write_utf8};
use super::*;
use crate::quote::{DefaultPlannerBuilder, run_quote_with};
use camino::Utf8PathBuf;
use hubroute_core::{NO_ITEMS_NOTE, PlanError, Quote};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use tempfile::TempDir;

#[derive(Debug)]
struct QuoteWorld {
    _tmp: TempDir,
    order_path: Utf8PathBuf,
    network_path: Utf8PathBuf,
    include_order: RefCell<bool>,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl QuoteWorld {
    fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        Self {
            _tmp: tmp,
            order_path: root.join("order.json"),
            network_path: root.join("network.json"),
            include_order: RefCell::new(true),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["hubroute".to_owned(), "quote".to_owned()];
        if *self.include_order.borrow() {
            argv.push(self.order_path.as_str().to_owned());
        }
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }
}

#[fixture]
fn world() -> QuoteWorld {
    QuoteWorld::new()
}

/// Render `A=2,D=2` as a JSON order object.
fn order_json(entries: &str) -> String {
    let fields: Vec<String> = entries
        .split(',')
        .map(|entry| {
            let (product, quantity) = entry.split_once('=').expect("product=quantity");
            format!("\"{}\": {}", product.trim(), quantity.trim())
        })
        .collect();
    format!("{{ {} }}", fields.join(", "))
}

#[given("an order file requesting {entries}")]
fn order_file_requesting(#[from(world)] world: &QuoteWorld, entries: String) {
    let payload = order_json(entries.trim_matches('"'));
    write_utf8(&world.order_path, payload.as_bytes());
}

#[given("a two-warehouse network file")]
fn two_warehouse_network_file(#[from(world)] world: &QuoteWorld) {
    write_utf8(&world.network_path, TWO_WAREHOUSE_NETWORK.as_bytes());
    world.cli_args.borrow_mut().extend([
        format!("--{ARG_QUOTE_NETWORK}"),
        world.network_path.as_str().to_owned(),
    ]);
}

#[given("the warehouse bound is {limit}")]
fn warehouse_bound(#[from(world)] world: &QuoteWorld, limit: usize) {
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_QUOTE_MAX_CENTERS}"), limit.to_string()]);
}

#[given("the order file contains invalid JSON")]
fn order_contains_invalid_json(#[from(world)] world: &QuoteWorld) {
    write_utf8(&world.order_path, b"{ not valid json");
}

#[given("I omit the order path")]
fn omit_order_path(#[from(world)] world: &QuoteWorld) {
    *world.include_order.borrow_mut() = false;
}

#[when("I run the quote command")]
fn run_quote_command(#[from(world)] world: &QuoteWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Quote(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_quote_with(args, &DefaultPlannerBuilder, &mut *buffer)
        }
    });
    world.result.replace(Some(outcome));
}

#[then("the command succeeds with a minimum cost of {expected}")]
fn command_succeeds_with_cost(#[from(world)] world: &QuoteWorld, expected: u64) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    result.as_ref().expect("expected success");

    let stdout = String::from_utf8(world.stdout.borrow().clone()).expect("stdout utf-8");
    let quote: Quote = serde_json::from_str(&stdout).expect("output should be a JSON quote");
    assert_eq!(quote.min_cost, expected);
}

#[then("the quote notes that no items were requested")]
fn quote_notes_no_items(#[from(world)] world: &QuoteWorld) {
    let stdout = String::from_utf8(world.stdout.borrow().clone()).expect("stdout utf-8");
    let quote: Quote = serde_json::from_str(&stdout).expect("output should be a JSON quote");
    assert_eq!(quote.note.as_deref(), Some(NO_ITEMS_NOTE));
}

#[then("the command fails because the order JSON is invalid")]
fn command_fails_invalid_json(#[from(world)] world: &QuoteWorld) {
    match &*world.error() {
        CliError::ParseOrder { .. } => {}
        other => panic!("expected ParseOrder, found {other:?}"),
    }
}

#[then("the command fails because the order path is missing")]
fn command_fails_missing_order_path(#[from(world)] world: &QuoteWorld) {
    match &*world.error() {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_QUOTE_ORDER),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[then("the command fails because {product} is not stocked")]
fn command_fails_unstocked(#[from(world)] world: &QuoteWorld, product: String) {
    match &*world.error() {
        CliError::Plan {
            source: PlanError::UnstockedProduct { product: reported },
        } => assert_eq!(*reported, product),
        other => panic!("expected UnstockedProduct, found {other:?}"),
    }
}

#[then("the command fails because too many warehouses are required")]
fn command_fails_too_many_centers(#[from(world)] world: &QuoteWorld) {
    match &*world.error() {
        CliError::Plan {
            source: PlanError::TooManyCenters { .. },
        } => {}
        other => panic!("expected TooManyCenters, found {other:?}"),
    }
}

macro_rules! register_quote_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/quote_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: QuoteWorld) {
            let _ = world;
        }
    };
}

register_quote_scenario!(quote_bundled_network, "quoting an order against the bundled network");
register_quote_scenario!(quote_network_file, "quoting an order against a network file");
register_quote_scenario!(quote_empty_order, "quoting an order that requests nothing");
register_quote_scenario!(quote_invalid_json, "rejecting invalid order JSON");
register_quote_scenario!(quote_missing_order, "rejecting missing order paths");
register_quote_scenario!(quote_unstocked_product, "rejecting products no warehouse stocks");
register_quote_scenario!(quote_bound_exceeded, "rejecting orders beyond the warehouse bound");
