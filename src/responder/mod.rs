//! Rule-based responder.
//!
//! Every message goes through the same fixed pipeline:
//! 1. crisis detection on the raw text (short-circuits everything else)
//! 2. normalization (lowercase + trim)
//! 3. the keyword cascade in [`rules`]
//! 4. template rendering, with random picks drawn from the supplied RNG
//!
//! Nothing is stored between calls, and message text never reaches the logs.

pub mod crisis;
pub mod rules;
pub mod templates;
pub mod types;

pub use crisis::build_crisis_reply;
pub use rules::{Fragment, KeywordRule, ReplyTemplate, RuleSet, choose};
pub use types::{Category, ReplyResult};

use rand::Rng;
use tracing::debug;

use crate::safety::{CrisisDetector, HOTLINES, HotlineEntry};

/// Crisis detector, keyword cascade and hotline table bundled together.
/// Built once at startup and shared read-only across requests.
#[derive(Debug, Clone)]
pub struct Responder {
    detector: CrisisDetector,
    rules: RuleSet,
    hotlines: &'static [HotlineEntry],
}

impl Responder {
    pub fn new(detector: CrisisDetector, rules: RuleSet) -> Self {
        Self {
            detector,
            rules,
            hotlines: HOTLINES,
        }
    }

    /// Reply using the thread-local RNG.
    pub fn respond(&self, message: &str) -> ReplyResult {
        self.respond_with(message, &mut rand::thread_rng())
    }

    /// Reply drawing template choices from `rng`.
    pub fn respond_with<R: Rng + ?Sized>(&self, message: &str, rng: &mut R) -> ReplyResult {
        if self.detector.is_crisis(message) {
            debug!(crisis = true, len = message.len(), "Crisis reply");
            return ReplyResult::crisis(build_crisis_reply(self.hotlines));
        }

        let rule = self.rules.evaluate(&normalize(message));
        debug!(
            category = %rule.category,
            crisis = false,
            len = message.len(),
            "Supportive reply"
        );
        ReplyResult::supportive(rule.template.render(rng))
    }

    /// Category the cascade assigns to `message`, or `None` for crisis text.
    pub fn classify(&self, message: &str) -> Option<Category> {
        if self.detector.is_crisis(message) {
            return None;
        }
        Some(self.rules.classify(&normalize(message)))
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::new(CrisisDetector::new(), RuleSet::default_rules())
    }
}

fn normalize(message: &str) -> String {
    message.to_lowercase().trim().to_string()
}
