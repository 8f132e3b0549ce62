//! Cue text filters — ordered rewrite rules that turn raw caption/subtitle
//! markup into readable prose.
//!
//! Each filter is a pure `&str -> String` function with a single concern and
//! is independently reusable (e.g. for display-only cleanup). The canonical
//! pipeline order is a correctness contract, not a tuning knob: the
//! whitespace and newline canonicalization filters at the tail clean up
//! artifacts left behind by the tag and label removal filters at the head.
//!
//! Order: tag/voice removal → speaker label removal → cue boundary shaping
//! (paragraph breaks after sentence terminators) → entity/markup rewrites →
//! whitespace/newline canonicalization.

use regex::Regex;
use std::sync::LazyLock;

/// A single rewrite rule.
pub type CueFilter = fn(&str) -> String;

static VTT_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<v[^>]*>").unwrap());
static LEADING_SPEAKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w][\w ]*?: ").unwrap());
static NEWLINE_SPEAKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[\w][\w ]*?: ").unwrap());
static TERMINATOR_MID_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([.!?]) *([^\s])").unwrap());
static TERMINATOR_AT_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([.!?])$").unwrap());
static NON_TERMINATOR_AT_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^.!?\s])$").unwrap());
static BREAK_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<br */?>").unwrap());
static SOUND_DESCRIPTOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[[^\]]*\]").unwrap());
static SPACES_BEFORE_NEWLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" +\n").unwrap());
static DOUBLE_OR_MORE_SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {2,}").unwrap());
static TRIPLE_OR_MORE_NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Remove `<v NAME>` voice tags anywhere in the text.
///
/// `"<v Speaker 1> Hello, world!"` → `" Hello, world!"`
pub fn vtt_tags_filter(text: &str) -> String {
    VTT_TAG.replace_all(text, "").into_owned()
}

/// Remove a leading `"Name: "` speaker label from plain-text cues.
///
/// `"Speaker 1: Hello, world!"` → `"Hello, world!"`
pub fn speaker_filter(text: &str) -> String {
    LEADING_SPEAKER.replace(text, "").into_owned()
}

/// Remove a `"Name: "` speaker label anchored at the start of HTML-sourced
/// text.
pub fn html_speaker_filter(text: &str) -> String {
    LEADING_SPEAKER.replace(text, "").into_owned()
}

/// Remove `"Name: "` speaker labels immediately after a newline. Handles
/// multi-cue concatenation where labels recur per line.
pub fn html_speaker_newline_filter(text: &str) -> String {
    NEWLINE_SPEAKER.replace_all(text, "\n").into_owned()
}

/// Insert a paragraph break after a sentence terminator (`.` `!` `?`) that
/// is not at the very end of the text. Any spaces between the terminator
/// and the following text are absorbed into the break.
pub fn end_of_line_char_new_line_filter(text: &str) -> String {
    TERMINATOR_MID_TEXT.replace_all(text, "$1\n\n$2").into_owned()
}

/// Append a paragraph separator when the text ends with a sentence
/// terminator, so consecutive cues render as separate paragraphs.
pub fn end_of_line_char_end_of_cue_filter(text: &str) -> String {
    TERMINATOR_AT_END.replace(text, "$1\n\n").into_owned()
}

/// Append a single space when the text does not end with a sentence
/// terminator, so the next cue continues the same sentence. Text already
/// ending in whitespace is left alone.
pub fn not_end_of_line_char_new_line_filter(text: &str) -> String {
    NON_TERMINATOR_AT_END.replace(text, "$1 ").into_owned()
}

/// Replace the `&nbsp;` HTML entity with a literal space.
pub fn nbsp_filter(text: &str) -> String {
    text.replace("&nbsp;", " ")
}

/// Replace `<br>` tags (including `<br/>` and `<br />`) with a paragraph
/// break.
pub fn break_line_filter(text: &str) -> String {
    BREAK_TAG.replace_all(text, "\n\n").into_owned()
}

/// Remove bracketed non-speech descriptors such as `[laughs]`, brackets
/// included. Surrounding whitespace is left as-is for the later whitespace
/// filters to collapse.
pub fn sound_descriptor_filter(text: &str) -> String {
    SOUND_DESCRIPTOR.replace_all(text, "").into_owned()
}

/// Trim trailing spaces before a newline and canonicalize the line ending
/// to exactly two newlines (one blank line between paragraphs).
pub fn empty_spaces_at_end_of_lines_filter(text: &str) -> String {
    SPACES_BEFORE_NEWLINE.replace_all(text, "\n\n").into_owned()
}

/// Collapse runs of two or more spaces into a single space.
pub fn double_or_more_spaces_filter(text: &str) -> String {
    DOUBLE_OR_MORE_SPACES.replace_all(text, " ").into_owned()
}

/// Collapse runs of three or more newlines into exactly two.
pub fn triple_or_more_empty_lines_filter(text: &str) -> String {
    TRIPLE_OR_MORE_NEWLINES.replace_all(text, "\n\n").into_owned()
}

/// The canonical filter order. Later filters assume the output shape of
/// earlier ones; reordering changes visible output.
const CANONICAL_ORDER: &[CueFilter] = &[
    vtt_tags_filter,
    speaker_filter,
    html_speaker_filter,
    html_speaker_newline_filter,
    end_of_line_char_new_line_filter,
    end_of_line_char_end_of_cue_filter,
    not_end_of_line_char_new_line_filter,
    nbsp_filter,
    break_line_filter,
    sound_descriptor_filter,
    empty_spaces_at_end_of_lines_filter,
    double_or_more_spaces_filter,
    triple_or_more_empty_lines_filter,
];

/// An ordered sequence of cue filters, applied exactly once per input.
#[derive(Clone, Copy)]
pub struct CueFilterPipeline {
    filters: &'static [CueFilter],
}

impl Default for CueFilterPipeline {
    fn default() -> Self {
        Self::canonical()
    }
}

impl CueFilterPipeline {
    /// The canonical pipeline in its contract order.
    pub fn canonical() -> Self {
        Self {
            filters: CANONICAL_ORDER,
        }
    }

    /// Run every filter, in order, over `text`.
    pub fn apply(&self, text: &str) -> String {
        self.filters
            .iter()
            .fold(text.to_owned(), |acc, filter| filter(&acc))
    }
}

/// Normalize a single raw text blob through the canonical pipeline.
pub fn normalize(text: &str) -> String {
    CueFilterPipeline::canonical().apply(text)
}

/// Normalize each cue through the canonical pipeline and concatenate the
/// results. The end-of-cue shaping filters decide per cue whether the next
/// cue starts a new paragraph or continues the sentence.
///
/// Cue seams can stack whitespace (a trailing joining space meeting a
/// leading space left by tag removal), so the whitespace canonicalization
/// filters run once more over the joined text.
pub fn normalize_cues<S: AsRef<str>>(cues: &[S]) -> String {
    let pipeline = CueFilterPipeline::canonical();
    let joined: String = cues.iter().map(|cue| pipeline.apply(cue.as_ref())).collect();
    triple_or_more_empty_lines_filter(&double_or_more_spaces_filter(
        &empty_spaces_at_end_of_lines_filter(&joined),
    ))
}
