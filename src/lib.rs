//! cuesearch — transcript cue normalization and in-transcript search.
//!
//! Takes raw caption/subtitle cue text (VTT voice tags, HTML-ish speaker
//! labels, entities, bracketed sound descriptors), normalizes it into
//! paragraph-shaped prose, and provides diacritic- and case-insensitive
//! exact substring search over the result with stable, navigable match
//! positions recomputed on every query change.
//!
//! # Architecture
//!
//! ```text
//! raw cues ──► filters ──► normalized text ──► SearchSession ──► SearchUiState
//!                                                   │                 ▲
//!                                                   └─ fold + matcher ┘
//! ```
//!
//! The session publishes immutable [`SearchUiState`] snapshots through a
//! `tokio::sync::watch` channel; the scan itself (fold + KMP) runs on a
//! background task so large transcripts never block the caller's thread.
//!
//! Match offsets are **character** offsets into the normalized text. Folding
//! maps every character to exactly one folded character, so char indices in
//! the folded copy and the original line up one-to-one.

pub mod config;
pub mod filters;
pub mod fold;
pub mod matcher;
pub mod session;

pub use filters::{normalize, normalize_cues, CueFilterPipeline};
pub use fold::{fold, fold_char};
pub use matcher::SubstringMatcher;
pub use session::{ScanFn, SearchSession, SearchUiState};
