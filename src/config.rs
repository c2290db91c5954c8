use crate::core::rejection::{DEFAULT_MAX_LENGTH, DEFAULT_NON_ANSWER_WORDS};
use crate::error::{VoiceError, VoiceResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Interpreter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpreterConfig {
    /// Normalized transcripts longer than this are not answers
    pub max_length: usize,

    /// Navigation words that void the whole transcript
    pub non_answer_words: Vec<String>,

    /// Known ASR mishearings, applied as whole-token substitutions
    pub corrections: BTreeMap<String, String>,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            non_answer_words: DEFAULT_NON_ANSWER_WORDS
                .iter()
                .map(|w| w.to_string())
                .collect(),
            corrections: BTreeMap::from([
                ("pas du tous".to_string(), "pas du tout".to_string()),
                ("beau coup".to_string(), "beaucoup".to_string()),
                ("asse".to_string(), "assez".to_string()),
                ("un peux".to_string(), "un peu".to_string()),
                ("tres mauvait".to_string(), "tres mauvais".to_string()),
            ]),
        }
    }
}

impl InterpreterConfig {
    /// Load config from the default location, or defaults
    pub fn load() -> VoiceResult<Self> {
        Self::load_from(&config_path())
    }

    /// Load config from `path`; missing or corrupt files fall back to defaults
    pub fn load_from(path: &Path) -> VoiceResult<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str::<Self>(&content) {
            Ok(config) => {
                config.validate()?;
                Ok(config)
            }
            Err(e) => {
                // Graceful degradation: log warning and use defaults
                tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                // Keep the corrupt file around for debugging
                let backup_path = path.with_extension("json.corrupt");
                let _ = std::fs::rename(path, &backup_path);
                Ok(Self::default())
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> VoiceResult<()> {
        self.save_to(&config_path())
    }

    pub fn save_to(&self, path: &Path) -> VoiceResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> VoiceResult<()> {
        if self.max_length == 0 {
            return Err(VoiceError::Config(
                "max_length must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("eortc-voice")
        .join("config.json")
}
