//! Search session — owns the installed corpus and the current query, and
//! publishes immutable [`SearchUiState`] snapshots through a
//! `tokio::sync::watch` channel.
//!
//! # Concurrency
//!
//! The session is the single owner of its state; readers only ever see
//! whole-state replacements through the watch channel. At most one scan is
//! outstanding: a new query aborts the previous task and bumps a generation
//! counter, and a scan commits its result only if its generation is still
//! current. The scan itself (fold + KMP) is a tight CPU loop run on the
//! blocking pool; it is not preempted mid-scan, so cancellation takes
//! effect at the debounce boundary and at commit.
//!
//! A failed or panicked scan surfaces as an empty match list, never as an
//! error: every input in this domain is a valid, representable state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::config::SearchConfig;
use crate::matcher::SubstringMatcher;

// ---------------------------------------------------------------------------
// SearchUiState
// ---------------------------------------------------------------------------

/// One immutable snapshot of the search feature's observable state.
///
/// `match_offsets` holds strictly increasing char offsets into the
/// installed corpus; it is replaced atomically on every completed scan and
/// never mutated in place. `current_index` is always `0` when the offsets
/// are empty and always within bounds otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchUiState {
    /// The query as typed, echoed before the scan completes.
    pub search_term: String,
    /// Char offsets of every occurrence, ascending.
    pub match_offsets: Arc<[usize]>,
    /// Which occurrence is selected for highlighting.
    pub current_index: usize,
}

impl SearchUiState {
    /// Display label for the occurrence counter: `"0"` with no matches,
    /// otherwise `"{selected}/{total}"` one-based.
    pub fn occurrences_label(&self) -> String {
        if self.match_offsets.is_empty() {
            "0".to_owned()
        } else {
            format!("{}/{}", self.current_index + 1, self.match_offsets.len())
        }
    }

    /// Whether next/previous navigation is meaningful.
    pub fn can_navigate(&self) -> bool {
        !self.match_offsets.is_empty()
    }

    /// The offset the display layer should highlight, if any.
    pub fn current_offset(&self) -> Option<usize> {
        self.match_offsets.get(self.current_index).copied()
    }
}

// ---------------------------------------------------------------------------
// SearchSession
// ---------------------------------------------------------------------------

/// Computes all match offsets for a pattern over a corpus. The session
/// treats the scan as opaque: a scan that panics is reported as an empty
/// result, never propagated.
pub type ScanFn = fn(pattern: &str, corpus: &str) -> Vec<usize>;

/// The default scan: folded KMP over the whole corpus.
fn kmp_scan(pattern: &str, corpus: &str) -> Vec<usize> {
    SubstringMatcher::new(pattern).search(corpus)
}

/// Incremental search over one installed transcript corpus.
///
/// Must be driven from within a tokio runtime; [`SearchSession::set_query`]
/// spawns the debounced background scan.
pub struct SearchSession {
    corpus: Option<Arc<str>>,
    tx: watch::Sender<SearchUiState>,
    scan_task: Option<JoinHandle<()>>,
    /// Bumped on every query change, corpus change, and clear. A scan may
    /// commit only while its captured generation is still current.
    generation: Arc<AtomicU64>,
    debounce: Duration,
    scan: ScanFn,
}

impl SearchSession {
    pub fn new(config: &SearchConfig) -> Self {
        Self::with_scanner(config, kmp_scan)
    }

    /// A session with a substitute scan implementation. Used by hosts that
    /// bring their own matcher and by tests driving the failure path.
    pub fn with_scanner(config: &SearchConfig, scan: ScanFn) -> Self {
        let (tx, _) = watch::channel(SearchUiState::default());
        Self {
            corpus: None,
            tx,
            scan_task: None,
            generation: Arc::new(AtomicU64::new(0)),
            debounce: config.debounce(),
            scan,
        }
    }

    /// Subscribe to state snapshots. The receiver sees every committed
    /// replacement, starting from the current state.
    pub fn subscribe(&self) -> watch::Receiver<SearchUiState> {
        self.tx.subscribe()
    }

    /// The current state snapshot.
    pub fn state(&self) -> SearchUiState {
        self.tx.borrow().clone()
    }

    /// Install the normalized text this session will search. Optional
    /// prefix/suffix context (header/footer text shown around the
    /// transcript) is part of the same corpus for matching purposes.
    ///
    /// Cancels any in-progress query and resets the published state.
    pub fn set_search_input(&mut self, text: &str, prefix: Option<&str>, suffix: Option<&str>) {
        self.supersede();

        let mut corpus = String::with_capacity(
            prefix.map_or(0, str::len) + text.len() + suffix.map_or(0, str::len),
        );
        if let Some(prefix) = prefix {
            corpus.push_str(prefix);
        }
        corpus.push_str(text);
        if let Some(suffix) = suffix {
            corpus.push_str(suffix);
        }
        tracing::debug!(chars = corpus.chars().count(), "search input installed");
        self.corpus = Some(corpus.into());
        self.tx.send_replace(SearchUiState::default());
    }

    /// Replace the query. The term is echoed into the state immediately;
    /// the match list is recomputed on a background task after the
    /// configured debounce, superseding any in-flight scan (last query
    /// wins). An empty query publishes the empty result synchronously.
    pub fn set_query(&mut self, query: &str) {
        let generation = self.supersede();
        tracing::debug!(query, generation, "search query changed");
        self.tx.send_modify(|state| state.search_term = query.to_owned());

        let corpus = match &self.corpus {
            Some(corpus) if !query.is_empty() => Arc::clone(corpus),
            _ => {
                self.tx.send_modify(|state| {
                    state.match_offsets = Arc::from(Vec::new());
                    state.current_index = 0;
                });
                return;
            }
        };

        let tx = self.tx.clone();
        let shared = Arc::clone(&self.generation);
        let debounce = self.debounce;
        let pattern = query.to_owned();
        let scan = self.scan;

        self.scan_task = Some(tokio::spawn(async move {
            if !debounce.is_zero() {
                tokio::time::sleep(debounce).await;
            }
            if shared.load(Ordering::Acquire) != generation {
                return;
            }

            let scan = tokio::task::spawn_blocking(move || scan(&pattern, &corpus)).await;
            let offsets = match scan {
                Ok(offsets) => offsets,
                Err(error) => {
                    tracing::warn!(%error, "search scan failed, publishing empty result");
                    Vec::new()
                }
            };

            tx.send_if_modified(|state| {
                if shared.load(Ordering::Acquire) != generation {
                    return false;
                }
                tracing::debug!(matches = offsets.len(), "search result committed");
                state.match_offsets = Arc::from(offsets);
                state.current_index = 0;
                true
            });
        }));
    }

    /// Select the next occurrence, wrapping from the last back to the
    /// first. No-op with no matches.
    pub fn next_match(&mut self) {
        self.tx.send_if_modified(|state| {
            if state.match_offsets.is_empty() {
                return false;
            }
            state.current_index = (state.current_index + 1) % state.match_offsets.len();
            true
        });
    }

    /// Select the previous occurrence, wrapping from the first back to the
    /// last. No-op with no matches.
    pub fn previous_match(&mut self) {
        self.tx.send_if_modified(|state| {
            if state.match_offsets.is_empty() {
                return false;
            }
            let len = state.match_offsets.len();
            state.current_index = (state.current_index + len - 1) % len;
            true
        });
    }

    /// Dismiss the search: cancel any in-flight scan and reset to the
    /// empty state. The corpus stays installed.
    pub fn done(&mut self) {
        self.clear();
    }

    /// Same reset as [`SearchSession::done`], named for the clear-button
    /// path.
    pub fn clear(&mut self) {
        self.supersede();
        self.tx.send_replace(SearchUiState::default());
    }

    /// Abort the in-flight scan (if any) and invalidate its commit.
    fn supersede(&mut self) -> u64 {
        if let Some(task) = self.scan_task.take() {
            task.abort();
        }
        self.generation.fetch_add(1, Ordering::AcqRel) + 1
    }
}

impl Drop for SearchSession {
    fn drop(&mut self) {
        if let Some(task) = self.scan_task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(offsets: Vec<usize>, index: usize) -> SearchUiState {
        SearchUiState {
            search_term: "q".to_owned(),
            match_offsets: offsets.into(),
            current_index: index,
        }
    }

    #[test]
    fn occurrences_label_is_zero_when_empty() {
        assert_eq!(SearchUiState::default().occurrences_label(), "0");
    }

    #[test]
    fn occurrences_label_is_one_based() {
        assert_eq!(state_with(vec![3, 9, 14], 0).occurrences_label(), "1/3");
        assert_eq!(state_with(vec![3, 9, 14], 2).occurrences_label(), "3/3");
    }

    #[test]
    fn current_offset_follows_index() {
        assert_eq!(state_with(vec![3, 9, 14], 1).current_offset(), Some(9));
        assert_eq!(SearchUiState::default().current_offset(), None);
    }

    #[test]
    fn navigation_is_disabled_without_matches() {
        assert!(!SearchUiState::default().can_navigate());
        assert!(state_with(vec![0], 0).can_navigate());
    }
}
