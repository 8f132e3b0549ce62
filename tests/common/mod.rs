#![allow(dead_code)]
//! Shared test utilities for cuesearch integration harnesses.
//!
//! Import everything via `mod common; use common::*;` at the top of each
//! harness file.

pub mod fixtures;

pub use fixtures::*;

use cuesearch::config::SearchConfig;
use cuesearch::SearchUiState;
use std::time::Duration;
use tokio::sync::watch;

/// Install a tracing subscriber honouring `RUST_LOG`, once per process.
/// Harnesses call this so `--nocapture` runs show the session's debug logs.
pub fn init_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A search config with no debounce, so harnesses observe scan results as
/// soon as the background task commits them.
pub fn immediate_config() -> SearchConfig {
    SearchConfig { debounce_ms: 0 }
}

/// Await the first state snapshot satisfying `pred`, starting from the
/// currently held one. Panics after two seconds; with a paused clock the
/// timeout only fires once the runtime is otherwise idle.
pub async fn wait_for_state(
    rx: &mut watch::Receiver<SearchUiState>,
    pred: impl Fn(&SearchUiState) -> bool,
) -> SearchUiState {
    tokio::time::timeout(Duration::from_secs(2), async {
        loop {
            if pred(&rx.borrow()) {
                return rx.borrow().clone();
            }
            rx.changed().await.expect("search session dropped");
        }
    })
    .await
    .expect("state condition not reached within timeout")
}
