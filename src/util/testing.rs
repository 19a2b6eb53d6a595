//! Shared helpers for unit and integration tests.

use std::sync::Once;

use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::domain::{Node, Resource};

static TEST_SETUP: Once = Once::new();

/// Install a stderr tracing subscriber once per test binary.
///
/// Honors `RUST_LOG`, defaults to `debug`.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_test_writer()
                .with_target(true)
                .with_filter(env_filter),
        );
        if tracing::dispatcher::has_been_set() {
            debug!("Tracing subscriber already set");
        } else if let Err(e) = subscriber.try_init() {
            eprintln!("Error: Failed to set up logging: {}", e);
        }
    });
}

/// Build resources from `(name, parent)` pairs.
pub fn resources(pairs: &[(&str, Option<&str>)]) -> Vec<Resource> {
    pairs
        .iter()
        .map(|(name, parent)| Resource {
            name: name.to_string(),
            parent: parent.map(String::from),
        })
        .collect()
}

/// All names in the forest, pre-order.
pub fn forest_names(forest: &[Node]) -> Vec<String> {
    forest
        .iter()
        .flat_map(|root| root.names())
        .map(String::from)
        .collect()
}

/// True if the roots and every children list are strictly ascending by name.
pub fn is_sorted_forest(forest: &[Node]) -> bool {
    forest.windows(2).all(|w| w[0].name < w[1].name)
        && forest.iter().all(|n| is_sorted_forest(&n.children))
}
