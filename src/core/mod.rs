//! Core processing modules
//!
//! Normalization, rejection, rule matching and numeral fallback, composed
//! by the [`Interpreter`].

pub mod interpreter;
pub mod matcher;
pub mod numerals;
pub mod rejection;
pub mod rules;
pub mod text_normalizer;

pub use interpreter::{interpret, Interpretation, Interpreter};
pub use rejection::RejectReason;
pub use rules::{RuleTable, TierKind, RULE_TABLE, RULE_TABLE_VERSION};
pub use text_normalizer::{normalize, TextNormalizer};
