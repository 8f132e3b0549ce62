//! Static cue corpora used across harnesses.

/// Raw VTT-style cues with voice tags, the shape produced by a WebVTT
/// parser before normalization.
pub const CUES_VTT: &[&str] = &[
    "<v Speaker 1> Welcome back to the show.",
    "<v Speaker 2> Thanks for having me",
    "<v Speaker 2> it's great to be here.",
];

/// Plain-text cues with recurring `Name:` speaker labels.
pub const CUES_SPEAKER_LABELS: &[&str] = &[
    "Host: So where were we?",
    "Guest 1: Right in the middle of the story",
    "Guest 1: when the lights went out.",
];

/// HTML-ish cues with entities, break tags, and sound descriptors.
pub const CUES_HTML: &[&str] = &[
    "One&nbsp;moment. [rustling]",
    "There.<br>Much better!",
];

/// A normalized transcript body used by the session harness. The word
/// "test" occurs at char offsets 10 and 31.
pub const TRANSCRIPT_PLAIN: &str = "this is a test. This is only a Test.";

/// A normalized transcript body with diacritics; "żółŁć" starts at char
/// offset 19.
pub const TRANSCRIPT_DIACRITICS: &str = "testing diacritics żółŁć in transcripts";

/// Build a large synthetic transcript: `paragraphs` copies of a fixed
/// paragraph with the needle "quartz" embedded once per copy.
pub fn large_transcript(paragraphs: usize) -> String {
    let mut text = String::with_capacity(paragraphs * 96);
    for i in 0..paragraphs {
        text.push_str("Paragraph ");
        text.push_str(&i.to_string());
        text.push_str(" talks about nothing in particular until quartz shows up.\n\n");
    }
    text
}
