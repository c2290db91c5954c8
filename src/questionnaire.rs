//! Questionnaire catalogue
//!
//! The 30 items of the French EORTC QLQ-C30 with their response scales,
//! plus the caller-side answer flow: interpret, validate, label, or re-prompt.

use crate::core::{Interpretation, Interpreter, RejectReason};
use crate::error::{VoiceError, VoiceResult};
use crate::scale::Scale;
use serde::Serialize;
use tracing::{debug, info};

/// Number of items in the questionnaire
pub const QUESTION_COUNT: u32 = 30;

/// Items whose option list is read aloud (first item of each scale)
const READ_OPTIONS_AT: &[u32] = &[1, 29];

const WEEK_PREFIX: &str = "Au cours de la semaine passée : ";

const FOUR_POINT_ITEMS: &[&str] = &[
    "Avez-vous des difficultés à faire certains efforts physiques pénibles comme porter un sac à provisions chargé ou une valise?",
    "Avez-vous des difficultés à faire une longue promenade?",
    "Avez-vous des difficultés à faire un petit tour dehors?",
    "Êtes-vous obligé de rester au lit ou dans un fauteuil pendant la journée?",
    "Avez-vous besoin d'aide pour manger, vous habiller, faire votre toilette ou aller aux toilettes?",
    // Items 6-28 refer to the past week
    "Avez-vous été gêné pour faire votre travail ou vos activités de tous les jours?",
    "Avez-vous été gêné dans vos activités de loisirs?",
    "Avez-vous eu le souffle court?",
    "Avez-vous ressenti de la douleur?",
    "Avez-vous eu besoin de repos?",
    "Avez-vous eu des difficultés pour dormir?",
    "Vous êtes-vous senti faible?",
    "Avez-vous manqué d'appétit?",
    "Avez-vous eu des nausées?",
    "Avez-vous vomi?",
    "Avez-vous été constipé?",
    "Avez-vous eu de la diarrhée?",
    "Étiez-vous fatigué?",
    "Des douleurs ont-elles perturbé vos activités quotidiennes?",
    "Avez-vous eu des difficultés à vous concentrer sur certaines choses?",
    "Vous êtes-vous senti tendu?",
    "Vous êtes-vous fait du souci?",
    "Vous êtes-vous senti irritable?",
    "Vous êtes-vous senti déprimé?",
    "Avez-vous eu des difficultés pour vous souvenir de certaines choses?",
    "Votre état physique ou votre traitement médical vous ont-ils gêné dans votre vie familiale?",
    "Votre état physique ou votre traitement médical vous ont-ils gêné dans vos activités sociales?",
    "Votre état physique ou votre traitement médical vous ont-ils causé des problèmes financiers?",
];

const SEVEN_POINT_ITEMS: &[&str] = &[
    "Comment évalueriez-vous votre état de santé au cours de la semaine passée? Sur une échelle de 1 à 7, où 1 signifie \"très mauvais\" et 7 \"excellent\".",
    "Comment évalueriez-vous l'ensemble de votre qualité de vie au cours de la semaine passée? Sur une échelle de 1 à 7, où 1 signifie \"très mauvaise\" et 7 \"excellente\".",
];

/// A single questionnaire item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub number: u32,
    pub text: String,
    pub scale: Scale,
}

impl Question {
    /// Option labels, in score order
    pub fn options(&self) -> &'static [&'static str] {
        self.scale.options()
    }
}

/// Result of the answer flow for one transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Answer {
    /// Score accepted; move on to `next` (None when the questionnaire is complete)
    Accepted {
        score: u8,
        label: &'static str,
        next: Option<u32>,
    },
    /// Ask again, offering the scale's options
    Retry {
        transcript: String,
        reason: RejectReason,
        suggestions: Vec<&'static str>,
    },
}

/// The static questionnaire
#[derive(Debug, Clone)]
pub struct Questionnaire {
    questions: Vec<Question>,
}

impl Questionnaire {
    pub fn new() -> Self {
        let mut questions = Vec::with_capacity(QUESTION_COUNT as usize);

        for (i, text) in FOUR_POINT_ITEMS.iter().enumerate() {
            let number = i as u32 + 1;
            let text = if number >= 6 {
                format!("{}{}", WEEK_PREFIX, text)
            } else {
                text.to_string()
            };
            questions.push(Question {
                number,
                text,
                scale: Scale::FourPoint,
            });
        }

        for text in SEVEN_POINT_ITEMS {
            questions.push(Question {
                number: questions.len() as u32 + 1,
                text: text.to_string(),
                scale: Scale::SevenPoint,
            });
        }

        Self { questions }
    }

    /// Look up an item by its 1-based number
    pub fn question(&self, number: u32) -> VoiceResult<&Question> {
        number
            .checked_sub(1)
            .and_then(|i| self.questions.get(i as usize))
            .ok_or(VoiceError::InvalidQuestion(number))
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Whether the options are read aloud for this item
    pub fn should_read_options(&self, number: u32) -> bool {
        READ_OPTIONS_AT.contains(&number)
    }

    /// Text handed to speech synthesis for an item
    pub fn speech_text(&self, number: u32) -> VoiceResult<String> {
        let question = self.question(number)?;
        let mut speech = format!("Question {}. {}", number, question.text);

        if self.should_read_options(number) {
            let options = question.options();
            if let Some((last, rest)) = options.split_last() {
                speech.push_str(&format!(" Répondez par {}, ou {}", rest.join(", "), last));
            }
        }

        Ok(speech)
    }

    /// Whether `score` is valid for the item's scale
    pub fn validate_score(&self, number: u32, score: u8) -> VoiceResult<bool> {
        Ok(self.question(number)?.scale.contains(u32::from(score)))
    }

    /// Recorded response text for a score
    pub fn option_label(&self, number: u32, score: u8) -> VoiceResult<Option<&'static str>> {
        Ok(self.question(number)?.scale.label(score))
    }

    /// Item that follows `number`, or None after the last one
    pub fn next_question(&self, number: u32) -> Option<u32> {
        if number < QUESTION_COUNT {
            Some(number + 1)
        } else {
            None
        }
    }

    /// Interpret a spoken answer to an item
    pub fn interpret_answer(
        &self,
        interpreter: &Interpreter,
        number: u32,
        transcript: &str,
    ) -> VoiceResult<Answer> {
        let question = self.question(number)?;

        match interpreter.interpret(question.scale, transcript) {
            Interpretation::Score { score } => {
                // The interpreter never leaves the range, but the label lookup
                // is still the authority on what gets recorded
                let label = question
                    .scale
                    .label(score)
                    .ok_or_else(|| anyhow::anyhow!("score {} outside {}", score, question.scale))?;
                info!("✅ Question {}: {} ({})", number, score, label);
                Ok(Answer::Accepted {
                    score,
                    label,
                    next: self.next_question(number),
                })
            }
            Interpretation::Unrecognized { transcript, reason } => {
                debug!("Question {} needs a retry: {}", number, reason);
                Ok(Answer::Retry {
                    transcript,
                    reason,
                    suggestions: question.options().to_vec(),
                })
            }
        }
    }
}

impl Default for Questionnaire {
    fn default() -> Self {
        Self::new()
    }
}
