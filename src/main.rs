//! EORTC Voice - spoken answer scoring
//!
//! Scores transcripts given on the command line, or one per stdin line.

use anyhow::Result;
use clap::{ArgGroup, Parser};
use eortc_voice::{
    audit, Answer, Interpretation, Interpreter, InterpreterConfig, Questionnaire, RejectReason,
    Scale,
};
use serde::Serialize;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("target").required(true).args(["scale", "question"])))]
struct Args {
    /// Response scale identifier ("1-4" or "1-7")
    #[arg(short, long)]
    scale: Option<String>,

    /// Questionnaire item (1-30); uses that item's scale and options
    #[arg(short, long)]
    question: Option<u32>,

    /// Config file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print one JSON object per transcript
    #[arg(long)]
    json: bool,

    /// Append unrecognized transcripts to the diagnostics log
    #[arg(long)]
    audit: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Transcript to score; stdin is read line by line when omitted
    transcript: Option<String>,
}

/// What the transcripts are answering
#[derive(Debug, Clone, Copy)]
enum Target {
    Scale(Scale),
    Question(u32, Scale),
}

impl Target {
    fn scale(self) -> Scale {
        match self {
            Target::Scale(scale) | Target::Question(_, scale) => scale,
        }
    }

    fn question(self) -> Option<u32> {
        match self {
            Target::Scale(_) => None,
            Target::Question(number, _) => Some(number),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Outcome {
    Answer(Answer),
    Interpretation(Interpretation),
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    transcript: &'a str,
    question: Option<u32>,
    scale: Scale,
    result: Outcome,
}

struct Session {
    interpreter: Interpreter,
    questionnaire: Questionnaire,
    target: Target,
    json: bool,
    audit: bool,
}

impl Session {
    fn handle(&self, transcript: &str) -> Result<()> {
        let result = match self.target {
            Target::Question(number, _) => Outcome::Answer(
                self.questionnaire
                    .interpret_answer(&self.interpreter, number, transcript)?,
            ),
            Target::Scale(scale) => {
                Outcome::Interpretation(self.interpreter.interpret(scale, transcript))
            }
        };

        if let Some((transcript, reason)) = rejection(&result) {
            warn!("Unrecognized answer '{}': {}", transcript, reason);
            if self.audit {
                self.record_unrecognized(transcript, reason);
            }
        }

        let report = Report {
            transcript,
            question: self.target.question(),
            scale: self.target.scale(),
            result,
        };

        if self.json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            println!("{}", render(&report));
        }
        Ok(())
    }

    fn record_unrecognized(&self, transcript: &str, reason: &RejectReason) {
        if let Err(e) = audit::log_unrecognized(
            self.target.question(),
            self.target.scale(),
            transcript,
            reason,
        ) {
            warn!("Could not write diagnostics log: {}", e);
        }
    }
}

fn rejection(result: &Outcome) -> Option<(&str, &RejectReason)> {
    match result {
        Outcome::Answer(Answer::Retry {
            transcript, reason, ..
        })
        | Outcome::Interpretation(Interpretation::Unrecognized { transcript, reason }) => {
            Some((transcript.as_str(), reason))
        }
        _ => None,
    }
}

fn render(report: &Report<'_>) -> String {
    match &report.result {
        Outcome::Answer(Answer::Accepted { score, label, .. }) => {
            format!("{} -> {} ({})", report.transcript, score, label)
        }
        Outcome::Interpretation(Interpretation::Score { score }) => {
            let label = report.scale.label(*score).unwrap_or("?");
            format!("{} -> {} ({})", report.transcript, score, label)
        }
        Outcome::Answer(Answer::Retry {
            reason, suggestions, ..
        }) => format!(
            "{} -> non reconnu ({}); répondez par : {}",
            report.transcript,
            reason,
            suggestions.join(", ")
        ),
        Outcome::Interpretation(Interpretation::Unrecognized { reason, .. }) => format!(
            "{} -> non reconnu ({}); répondez par : {}",
            report.transcript,
            reason,
            report.scale.options().join(", ")
        ),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging (stderr, so stdout stays machine-readable)
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = match &args.config {
        Some(path) => InterpreterConfig::load_from(path)?,
        None => InterpreterConfig::load()?,
    };
    let interpreter = Interpreter::new(&config)?;
    let questionnaire = Questionnaire::new();

    // Bad identifiers are integration errors: fail before reading any input
    let target = match (&args.scale, args.question) {
        (_, Some(number)) => Target::Question(number, questionnaire.question(number)?.scale),
        (Some(id), None) => Target::Scale(Scale::from_id(id)?),
        (None, None) => anyhow::bail!("either --scale or --question is required"),
    };

    info!(
        "🎙️ EORTC Voice v{} (rules v{}) on {}",
        env!("CARGO_PKG_VERSION"),
        interpreter.rule_version(),
        target.scale()
    );

    let session = Session {
        interpreter,
        questionnaire,
        target,
        json: args.json,
        audit: args.audit,
    };

    if let Some(transcript) = &args.transcript {
        return session.handle(transcript);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        session.handle(&line)?;
    }

    Ok(())
}
