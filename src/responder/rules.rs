//! Keyword cascade — ordered category rules with first-match-wins semantics.
//!
//! Each rule is "text contains any of these keywords" over lowercased,
//! trimmed input. Rules are evaluated in order; the first hit picks the
//! category and its reply template. When nothing matches, the reflective
//! fallback is used.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use super::templates::{
    ANXIETY_FOLLOW_UP, BEHAVIORAL, BREATHING, COPING_IDEAS, FAREWELL, GROUNDING, LONELINESS_LEAD,
    LOW_MOOD_LEAD, OPENING, REASSURE, REFLECTIVE, SLEEP,
};
use super::types::Category;

/// Pick one candidate uniformly at random.
///
/// Returns an empty string for an empty candidate list.
pub fn choose<'a, R: Rng + ?Sized>(candidates: &[&'a str], rng: &mut R) -> &'a str {
    candidates.choose(rng).copied().unwrap_or_default()
}

/// One piece of a composed reply.
#[derive(Debug, Clone, Copy)]
pub enum Fragment {
    /// Emitted verbatim.
    Literal(&'static str),
    /// One entry picked at random per render.
    Pick(&'static [&'static str]),
}

/// How a category turns into reply text.
#[derive(Debug, Clone)]
pub enum ReplyTemplate {
    Fixed(&'static str),
    OneOf(&'static [&'static str]),
    /// Fragments joined in order; each `Pick` is chosen independently.
    Composed(Vec<Fragment>),
}

impl ReplyTemplate {
    /// Render the template, drawing any random picks from `rng`.
    pub fn render<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        match self {
            Self::Fixed(text) => (*text).to_string(),
            Self::OneOf(candidates) => choose(candidates, rng).to_string(),
            Self::Composed(fragments) => {
                let mut out = String::new();
                for fragment in fragments {
                    match fragment {
                        Fragment::Literal(text) => out.push_str(text),
                        Fragment::Pick(candidates) => out.push_str(choose(candidates, rng)),
                    }
                }
                out
            }
        }
    }
}

/// A single cascade entry.
#[derive(Debug, Clone)]
pub struct KeywordRule {
    pub category: Category,
    /// Substrings tested against the normalized message.
    pub keywords: &'static [&'static str],
    pub template: ReplyTemplate,
}

impl KeywordRule {
    /// Whether `normalized` contains any of this rule's keywords.
    pub fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|kw| normalized.contains(kw))
    }
}

/// The ordered cascade plus its fallback.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<KeywordRule>,
    fallback: KeywordRule,
}

impl RuleSet {
    /// The built-in cascade:
    /// greeting → low mood → anxiety → loneliness → sleep → farewell → help → reflective.
    pub fn default_rules() -> Self {
        let rules = vec![
            KeywordRule {
                category: Category::Greeting,
                keywords: &["hi", "hello", "hey", "hii"],
                template: ReplyTemplate::OneOf(OPENING),
            },
            KeywordRule {
                category: Category::LowMood,
                keywords: &["sad", "depressed", "down", "unhappy", "hopeless"],
                template: ReplyTemplate::Composed(vec![
                    Fragment::Literal(LOW_MOOD_LEAD),
                    Fragment::Pick(REASSURE),
                    Fragment::Literal(" "),
                    Fragment::Pick(GROUNDING),
                ]),
            },
            KeywordRule {
                category: Category::Anxiety,
                keywords: &["anxious", "anxiety", "panic", "scared", "nervous"],
                template: ReplyTemplate::Composed(vec![
                    Fragment::Pick(REASSURE),
                    Fragment::Literal(" "),
                    Fragment::Pick(BREATHING),
                    Fragment::Literal(ANXIETY_FOLLOW_UP),
                ]),
            },
            KeywordRule {
                category: Category::Loneliness,
                keywords: &["lonely", "alone", "isolated"],
                template: ReplyTemplate::Composed(vec![
                    Fragment::Literal(LONELINESS_LEAD),
                    Fragment::Pick(REASSURE),
                    Fragment::Literal(" "),
                    Fragment::Pick(BEHAVIORAL),
                ]),
            },
            KeywordRule {
                category: Category::Sleep,
                keywords: &["sleep", "insomnia", "tired", "exhausted"],
                template: ReplyTemplate::Fixed(SLEEP),
            },
            KeywordRule {
                category: Category::Farewell,
                keywords: &["thanks", "thank", "bye", "goodbye"],
                template: ReplyTemplate::Fixed(FAREWELL),
            },
            KeywordRule {
                category: Category::HelpRequest,
                keywords: &["help", "cope", "coping", "advice", "tips"],
                template: ReplyTemplate::Fixed(COPING_IDEAS),
            },
        ];

        Self {
            rules,
            fallback: KeywordRule {
                category: Category::Reflective,
                keywords: &[],
                template: ReplyTemplate::Fixed(REFLECTIVE),
            },
        }
    }

    /// First rule whose keywords appear in `normalized`, or the fallback.
    pub fn evaluate(&self, normalized: &str) -> &KeywordRule {
        match self.rules.iter().find(|rule| rule.matches(normalized)) {
            Some(rule) => {
                debug!(category = %rule.category, "Message matched keyword rule");
                rule
            }
            None => &self.fallback,
        }
    }

    /// Category for already-normalized text.
    pub fn classify(&self, normalized: &str) -> Category {
        self.evaluate(normalized).category
    }

    /// Rules in evaluation order, excluding the fallback.
    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::default_rules()
    }
}
