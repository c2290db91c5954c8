//! Rejection filter
//!
//! Cheap checks that discard transcripts which are clearly not an answer,
//! before any rule is evaluated.

use super::text_normalizer::normalize;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

/// Words that mean "move on", not "this is my answer"
pub const DEFAULT_NON_ANSWER_WORDS: &[&str] = &[
    "passer",
    "passe",
    "pass",
    "suivant",
    "suivante",
    "next",
    "skip",
    "ignorer",
    "ignore",
    "attendre",
    "attends",
    "attendez",
    "wait",
    "repeter",
    "repete",
    "repetez",
    "precedent",
    "precedente",
    "retour",
];

/// Default ceiling on the normalized transcript length, in characters
pub const DEFAULT_MAX_LENGTH: usize = 30;

/// Why a transcript did not produce a score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectReason {
    /// Normalized text is longer than the configured ceiling
    InputTooLong { length: usize, max: usize },
    /// A navigation word was spoken
    NonAnswerToken { token: String },
    /// Nothing matched
    NoMatch,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::InputTooLong { length, max } => {
                write!(f, "input too long ({} > {} characters)", length, max)
            }
            RejectReason::NonAnswerToken { token } => write!(f, "non-answer token '{}'", token),
            RejectReason::NoMatch => f.write_str("no match"),
        }
    }
}

/// Length ceiling plus non-answer vocabulary
#[derive(Debug, Clone)]
pub struct RejectionFilter {
    max_length: usize,
    non_answer: HashSet<String>,
}

impl RejectionFilter {
    pub fn new<I, S>(max_length: usize, non_answer_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let non_answer = non_answer_words
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();

        Self {
            max_length,
            non_answer,
        }
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Check normalized text; `Some` short-circuits interpretation
    pub fn check(&self, normalized: &str, tokens: &[&str]) -> Option<RejectReason> {
        let length = normalized.chars().count();
        if length > self.max_length {
            debug!("Rejected: {} characters > {}", length, self.max_length);
            return Some(RejectReason::InputTooLong {
                length,
                max: self.max_length,
            });
        }

        if let Some(token) = tokens.iter().find(|t| self.non_answer.contains(**t)) {
            debug!("Rejected: non-answer token '{}'", token);
            return Some(RejectReason::NonAnswerToken {
                token: token.to_string(),
            });
        }

        None
    }
}

impl Default for RejectionFilter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LENGTH, DEFAULT_NON_ANSWER_WORDS)
    }
}
