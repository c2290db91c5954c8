//! Transcript Interpreter
//!
//! Turns a recognized utterance into a score on the active scale.
//!
//! **Pipeline:**
//! 1. Normalize (plus configured ASR corrections)
//! 2. Rejection filter: length ceiling, then non-answer vocabulary
//! 3. Priority matcher: phrase tier, then word tier
//! 4. Numeral fallback: number words, exact digits, embedded digits;
//!    skipped when the transcript holds a decimal such as "2,5"
//!
//! The first stage that decides ends the call. Nothing is retained between
//! calls, so one interpreter can be shared freely across threads.

use super::matcher::match_rules;
use super::numerals;
use super::rejection::{RejectReason, RejectionFilter};
use super::rules::{RuleTable, RULE_TABLE};
use super::text_normalizer::{tokens, TextNormalizer};
use crate::config::InterpreterConfig;
use crate::error::VoiceResult;
use crate::scale::Scale;
use lazy_static::lazy_static;
use serde::Serialize;
use tracing::debug;

lazy_static! {
    static ref DEFAULT_INTERPRETER: Interpreter = Interpreter::default();
}

/// Outcome of interpreting one transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Interpretation {
    /// A score within the scale's range
    Score { score: u8 },
    /// No score; the caller should re-prompt
    Unrecognized {
        transcript: String,
        reason: RejectReason,
    },
}

impl Interpretation {
    pub fn score(&self) -> Option<u8> {
        match self {
            Interpretation::Score { score } => Some(*score),
            Interpretation::Unrecognized { .. } => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        self.score().is_some()
    }
}

/// Stateless interpreter over an immutable rule table
#[derive(Debug, Clone)]
pub struct Interpreter {
    normalizer: TextNormalizer,
    filter: RejectionFilter,
    rules: &'static RuleTable,
}

impl Interpreter {
    /// Build from a validated configuration
    pub fn new(config: &InterpreterConfig) -> VoiceResult<Self> {
        config.validate()?;
        Ok(Self {
            normalizer: TextNormalizer::new(&config.corrections),
            filter: RejectionFilter::new(config.max_length, &config.non_answer_words),
            rules: &RULE_TABLE,
        })
    }

    /// Version of the rule table in use
    pub fn rule_version(&self) -> u32 {
        self.rules.version
    }

    /// Interpret a transcript on a known scale
    pub fn interpret(&self, scale: Scale, transcript: &str) -> Interpretation {
        let normalized = self.normalizer.normalize(transcript);
        let tokens = tokens(&normalized);
        debug!("Interpreting '{}' on {} as '{}'", transcript, scale, normalized);

        if let Some(reason) = self.filter.check(&normalized, &tokens) {
            return unrecognized(transcript, reason);
        }

        if let Some(hit) = match_rules(self.rules.tiers(scale), &tokens) {
            return Interpretation::Score { score: hit.score };
        }

        if numerals::has_decimal(transcript) {
            debug!("Decimal in '{}', skipping numeral fallback", transcript);
        } else if let Some((score, kind)) = numerals::resolve(scale, &normalized, &tokens) {
            debug!("Numeral fallback ({:?}) -> {}", kind, score);
            return Interpretation::Score { score };
        }

        unrecognized(transcript, RejectReason::NoMatch)
    }

    /// Interpret with a textual scale identifier ("1-4" or "1-7").
    ///
    /// An unsupported identifier is an integration defect and comes back as
    /// `Err(VoiceError::InvalidScale)`, never as a default scale.
    pub fn interpret_id(&self, scale_id: &str, transcript: &str) -> VoiceResult<Interpretation> {
        let scale = Scale::from_id(scale_id)?;
        Ok(self.interpret(scale, transcript))
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self {
            normalizer: TextNormalizer::new(&InterpreterConfig::default().corrections),
            filter: RejectionFilter::default(),
            rules: &RULE_TABLE,
        }
    }
}

/// Interpret with the default configuration
pub fn interpret(scale: Scale, transcript: &str) -> Interpretation {
    DEFAULT_INTERPRETER.interpret(scale, transcript)
}

fn unrecognized(transcript: &str, reason: RejectReason) -> Interpretation {
    debug!("Unrecognized answer '{}': {}", transcript, reason);
    Interpretation::Unrecognized {
        transcript: transcript.to_string(),
        reason,
    }
}
