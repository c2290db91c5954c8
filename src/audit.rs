//! Diagnostics log for answers that could not be scored

use crate::core::RejectReason;
use crate::scale::Scale;
use anyhow::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Default log location (respecting XDG)
pub fn log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from(".local/share"))
        .join("eortc-voice")
        .join("unrecognized.log")
}

/// Record an unrecognized transcript in the default log
pub fn log_unrecognized(
    question: Option<u32>,
    scale: Scale,
    transcript: &str,
    reason: &RejectReason,
) -> Result<()> {
    append_entry(&log_path(), question, scale, transcript, reason)
}

/// Append one line to the log at `path`
pub fn append_entry(
    path: &Path,
    question: Option<u32>,
    scale: Scale,
    transcript: &str,
    reason: &RejectReason,
) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;

    let question = question.map_or_else(|| "-".to_string(), |n| n.to_string());
    writeln!(
        file,
        "[{}] Q{} [{}] {} | TRANSCRIPT: {:?}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        question,
        scale,
        reason,
        transcript
    )?;
    Ok(())
}
