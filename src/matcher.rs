//! Folded substring matching via Knuth–Morris–Pratt.
//!
//! The pattern is compiled once ([`SubstringMatcher::set_pattern`] folds it
//! and builds the LPS failure table in O(m)); each [`SubstringMatcher::search`]
//! then scans the text in O(n + m) regardless of content, folding characters
//! on the fly. After a full match the scan resumes from `lps[m - 1]` rather
//! than restarting, so overlapping occurrences are all reported.
//!
//! Offsets are char indices into the original, unfolded text. Folding maps
//! one char to one char, so indices in the folded view are valid in the
//! original.

use crate::fold::fold_char;

/// Compiled search pattern plus its KMP failure table.
#[derive(Debug, Clone, Default)]
pub struct SubstringMatcher {
    pattern: Vec<char>,
    lps: Vec<usize>,
}

impl SubstringMatcher {
    /// Compile `pattern`. An empty pattern is valid and makes every future
    /// search return no matches.
    pub fn new(pattern: &str) -> Self {
        let mut matcher = Self::default();
        matcher.set_pattern(pattern);
        matcher
    }

    /// Replace the stored pattern and rebuild the failure table.
    pub fn set_pattern(&mut self, pattern: &str) {
        self.pattern = pattern.chars().map(fold_char).collect();
        self.lps = build_lps(&self.pattern);
    }

    /// All start offsets (char indices, ascending) where the folded pattern
    /// occurs in the folded `text`. Empty pattern short-circuits to no
    /// matches without scanning.
    pub fn search(&self, text: &str) -> Vec<usize> {
        if self.pattern.is_empty() {
            return Vec::new();
        }

        let m = self.pattern.len();
        let mut matches = Vec::new();
        let mut k = 0; // chars of pattern matched so far

        for (i, ch) in text.chars().map(fold_char).enumerate() {
            while k > 0 && ch != self.pattern[k] {
                k = self.lps[k - 1];
            }
            if ch == self.pattern[k] {
                k += 1;
            }
            if k == m {
                matches.push(i + 1 - m);
                k = self.lps[m - 1];
            }
        }

        matches
    }
}

/// Longest-proper-prefix-which-is-also-suffix table: `lps[i]` is the length
/// of the longest proper prefix of `pattern[..=i]` that is also its suffix.
fn build_lps(pattern: &[char]) -> Vec<usize> {
    let mut lps = vec![0; pattern.len()];
    let mut len = 0;
    for i in 1..pattern.len() {
        while len > 0 && pattern[i] != pattern[len] {
            len = lps[len - 1];
        }
        if pattern[i] == pattern[len] {
            len += 1;
        }
        lps[i] = len;
    }
    lps
}
