//! Responder types — the reply shape and the category set.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of classifying one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyResult {
    pub reply: String,
    pub crisis: bool,
}

impl ReplyResult {
    /// A non-crisis reply.
    pub fn supportive(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            crisis: false,
        }
    }

    /// A crisis-resources reply.
    pub fn crisis(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            crisis: true,
        }
    }
}

/// Categories of the keyword cascade, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Greeting,
    LowMood,
    Anxiety,
    Loneliness,
    Sleep,
    Farewell,
    HelpRequest,
    /// Fallback when no keyword matches.
    Reflective,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::LowMood => "low_mood",
            Self::Anxiety => "anxiety",
            Self::Loneliness => "loneliness",
            Self::Sleep => "sleep",
            Self::Farewell => "farewell",
            Self::HelpRequest => "help_request",
            Self::Reflective => "reflective",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
