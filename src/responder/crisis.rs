//! Crisis reply builder.

use std::fmt::Write;

use super::templates::{CRISIS_CLOSING, CRISIS_PREAMBLE};
use crate::safety::HotlineEntry;

/// Preamble, one `- region: contact` line per hotline, then the closing
/// offer of a grounding exercise.
pub fn build_crisis_reply(hotlines: &[HotlineEntry]) -> String {
    let mut text = String::from(CRISIS_PREAMBLE);
    for entry in hotlines {
        let _ = writeln!(text, "- {}: {}", entry.region, entry.contact);
    }
    text.push_str(CRISIS_CLOSING);
    text
}
