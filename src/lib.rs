//! EORTC Voice Library
//!
//! Scores spoken answers to the French EORTC QLQ-C30 questionnaire.

pub mod audit;
pub mod config;
pub mod core;
pub mod error;
pub mod questionnaire;
pub mod scale;

pub use crate::core::{interpret, normalize, Interpretation, Interpreter, RejectReason};
pub use config::InterpreterConfig;
pub use error::{VoiceError, VoiceResult};
pub use questionnaire::{Answer, Question, Questionnaire};
pub use scale::Scale;
