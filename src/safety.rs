//! Safety layer — crisis detection and the hotline table.
//!
//! Crisis detection is a plain boolean OR over a small, literal set of
//! case-insensitive regexes. It runs before any other classification and,
//! when it fires, the caller must reply with crisis resources only.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

/// Phrase patterns that flag a message as a possible self-harm crisis.
pub const CRISIS_PATTERNS: &[&str] = &[
    r"\bkill myself\b",
    r"\bsuicide\b",
    r"\bwant to die\b",
    r"\bend my life\b",
    r"\bi will die\b",
    r"\bcut myself\b",
    r"\bself[- ]harm\b",
    r"\bworthless\b\s*and\b\s*die",
];

/// A crisis line for one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotlineEntry {
    pub region: &'static str,
    pub contact: &'static str,
}

/// Hotlines listed in every crisis reply, in this order.
pub const HOTLINES: &[HotlineEntry] = &[
    HotlineEntry {
        region: "India",
        contact: "1800 599 0019",
    },
    HotlineEntry {
        region: "USA",
        contact: "988",
    },
    HotlineEntry {
        region: "UK",
        contact: "0800 689 5652",
    },
    HotlineEntry {
        region: "International",
        contact: "If you are outside these countries, contact local emergency services or search 'suicide hotline' in your country.",
    },
];

static DEFAULT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    CRISIS_PATTERNS
        .iter()
        .map(|p| compile(p).unwrap())
        .collect()
});

fn compile(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

/// Boolean crisis classifier over a fixed pattern set.
#[derive(Debug, Clone)]
pub struct CrisisDetector {
    patterns: Vec<Regex>,
}

impl CrisisDetector {
    /// Detector over [`CRISIS_PATTERNS`].
    pub fn new() -> Self {
        Self {
            patterns: DEFAULT_PATTERNS.clone(),
        }
    }

    /// Detector over a caller-supplied pattern list. Patterns are always
    /// matched case-insensitively.
    pub fn with_patterns(patterns: &[&str]) -> Result<Self, regex::Error> {
        let patterns = patterns
            .iter()
            .map(|p| compile(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Returns `true` if any pattern matches anywhere in `text`.
    pub fn is_crisis(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        self.patterns.iter().any(|r| r.is_match(text))
    }

    /// Number of compiled patterns.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }
}

impl Default for CrisisDetector {
    fn default() -> Self {
        Self::new()
    }
}
