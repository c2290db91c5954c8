//! Text Normalization
//!
//! Canonicalizes recognized speech before any matching: lower-case, no
//! diacritics, no punctuation, single spaces. Configured ASR corrections are
//! applied on top of the canonical form.

use std::collections::BTreeMap;
use tracing::debug;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalize a transcript.
///
/// Idempotent: `normalize(&normalize(t)) == normalize(t)`.
pub fn normalize(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());

    for ch in text.nfkd().filter(|c| !is_combining_mark(*c)) {
        for lower in ch.to_lowercase() {
            match lower {
                'œ' => folded.push_str("oe"),
                'æ' => folded.push_str("ae"),
                'ß' => folded.push_str("ss"),
                _ => folded.push(lower),
            }
        }
    }

    // Anything that is not a letter or digit becomes a word break
    let mut result = String::with_capacity(folded.len());
    let mut pending_space = false;
    for ch in folded.chars() {
        if ch.is_alphanumeric() {
            if pending_space && !result.is_empty() {
                result.push(' ');
            }
            pending_space = false;
            result.push(ch);
        } else {
            pending_space = true;
        }
    }

    result
}

/// Split normalized text into whole tokens
pub fn tokens(normalized: &str) -> Vec<&str> {
    normalized.split(' ').filter(|t| !t.is_empty()).collect()
}

/// Normalizes spoken text and fixes known recognition errors
#[derive(Debug, Clone, Default)]
pub struct TextNormalizer {
    /// Token sequence -> replacement tokens, longest pattern first
    corrections: Vec<(Vec<String>, Vec<String>)>,
}

impl TextNormalizer {
    /// Create a normalizer from raw correction pairs (normalized here)
    pub fn new(corrections: &BTreeMap<String, String>) -> Self {
        let mut prepared: Vec<(Vec<String>, Vec<String>)> = corrections
            .iter()
            .map(|(from, to)| (owned_tokens(from), owned_tokens(to)))
            .filter(|(from, to)| !from.is_empty() && from != to)
            .collect();

        // Longer patterns first so "pas du tous" wins over a shorter overlap
        prepared.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        Self {
            corrections: prepared,
        }
    }

    /// Normalize text, then apply corrections as whole-token substitutions
    pub fn normalize(&self, text: &str) -> String {
        let canonical = normalize(text);
        if self.corrections.is_empty() {
            return canonical;
        }

        let mut current: Vec<String> = owned_tokens(&canonical);
        for (from, to) in &self.corrections {
            let mut replaced = Vec::with_capacity(current.len());
            let mut i = 0;
            while i < current.len() {
                if current[i..].starts_with(from) {
                    replaced.extend(to.iter().cloned());
                    i += from.len();
                } else {
                    replaced.push(current[i].clone());
                    i += 1;
                }
            }
            current = replaced;
        }

        let corrected = current.join(" ");
        if corrected != canonical {
            debug!("Corrected '{}' -> '{}'", canonical, corrected);
        }
        corrected
    }

    /// Number of active correction rules
    pub fn len(&self) -> usize {
        self.corrections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corrections.is_empty()
    }
}

fn owned_tokens(text: &str) -> Vec<String> {
    tokens(&normalize(text)).into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_basic() {
        assert_eq!(normalize("BEAUCOUP"), "beaucoup");
        assert_eq!(normalize("  Un   peu  "), "un peu");
    }

    #[test]
    fn test_normalize_diacritics() {
        assert_eq!(normalize("Très mauvais"), "tres mauvais");
        assert_eq!(normalize("Légèrement"), "legerement");
        assert_eq!(normalize("plutôt bon"), "plutot bon");
        assert_eq!(normalize("ÉNORMÉMENT"), "enormement");
        assert_eq!(normalize("tout à fait"), "tout a fait");
        assert_eq!(normalize("Cœur"), "coeur");
    }

    #[test]
    fn test_normalize_punctuation() {
        assert_eq!(normalize("Pas du tout !"), "pas du tout");
        assert_eq!(normalize("euh... assez?"), "euh assez");
        assert_eq!(normalize("c'est-à-dire"), "c est a dire");
        assert_eq!(normalize("«beaucoup»"), "beaucoup");
        assert_eq!(normalize("\t3.\n"), "3");
        assert_eq!(normalize("?!"), "");
    }

    #[test]
    fn test_normalize_idempotent() {
        for text in ["Très  BIEN!", "œuvre", "  ", "Straße", "ｆｕｌｌ ｗｉｄｔｈ", "İstanbul"] {
            let once = normalize(text);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", text);
        }
    }

    #[test]
    fn test_tokens() {
        assert_eq!(tokens("pas du tout"), vec!["pas", "du", "tout"]);
        assert!(tokens("").is_empty());
    }

    #[test]
    fn test_normalize_corrections() {
        let mut corrections = BTreeMap::new();
        corrections.insert("pas du tous".to_string(), "pas du tout".to_string());
        corrections.insert("Beau coup".to_string(), "beaucoup".to_string());
        let normalizer = TextNormalizer::new(&corrections);

        assert_eq!(normalizer.normalize("Pas du tous"), "pas du tout");
        assert_eq!(normalizer.normalize("beau coup !"), "beaucoup");
        // Whole tokens only
        assert_eq!(normalizer.normalize("beau coupable"), "beau coupable");
        assert_eq!(normalizer.len(), 2);
    }

    #[test]
    fn test_identity_corrections_dropped() {
        let mut corrections = BTreeMap::new();
        corrections.insert("Assez".to_string(), "assez".to_string());
        corrections.insert("  ".to_string(), "vide".to_string());
        assert!(TextNormalizer::new(&corrections).is_empty());
    }
}
