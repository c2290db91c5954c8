//! Priority matcher
//!
//! Walks a scale's tiers in order and returns the first synonym that occurs
//! in the transcript as a run of whole tokens. Inside a tier, longer synonyms
//! are tried before shorter ones so that a modifier ("pas", "tres") binds to
//! the word it modifies; equal lengths fall back to ascending score.

use super::rules::{Tier, TierKind};
use serde::Serialize;
use tracing::debug;

/// The rule that produced a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleHit {
    pub score: u8,
    pub tier: TierKind,
    pub synonym: &'static str,
}

/// Whether `phrase` occurs in `tokens` as contiguous whole tokens
pub fn contains_phrase(tokens: &[&str], phrase: &str) -> bool {
    let needle: Vec<&str> = phrase.split(' ').filter(|t| !t.is_empty()).collect();
    if needle.is_empty() || needle.len() > tokens.len() {
        return false;
    }
    tokens.windows(needle.len()).any(|window| window == needle.as_slice())
}

fn word_count(synonym: &str) -> usize {
    synonym.split(' ').filter(|t| !t.is_empty()).count()
}

/// First matching rule in priority order
pub fn match_rules(tiers: &'static [Tier], tokens: &[&str]) -> Option<RuleHit> {
    for tier in tiers {
        let longest = tier
            .groups
            .iter()
            .flat_map(|group| group.synonyms.iter())
            .map(|synonym| word_count(synonym))
            .max()
            .unwrap_or(0);

        for length in (1..=longest).rev() {
            for group in tier.groups {
                for &synonym in group.synonyms {
                    if word_count(synonym) != length || !contains_phrase(tokens, synonym) {
                        continue;
                    }
                    debug!(
                        "Rule hit: '{}' -> {} ({:?} tier)",
                        synonym, group.score, tier.kind
                    );
                    return Some(RuleHit {
                        score: group.score,
                        tier: tier.kind,
                        synonym,
                    });
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rules::RULE_TABLE;
    use crate::scale::Scale;

    fn hit(scale: Scale, text: &str) -> Option<u8> {
        let tokens: Vec<&str> = text.split(' ').collect();
        match_rules(RULE_TABLE.tiers(scale), &tokens).map(|h| h.score)
    }

    #[test]
    fn test_contains_phrase_whole_tokens() {
        let tokens = ["je", "vais", "passer"];
        assert!(!contains_phrase(&tokens, "assez"));
        assert!(contains_phrase(&tokens, "vais passer"));
        assert!(!contains_phrase(&tokens, "je passer"));
        assert!(!contains_phrase(&tokens, ""));
        assert!(!contains_phrase(&[], "pas"));
    }

    #[test]
    fn test_phrase_beats_word() {
        assert_eq!(hit(Scale::FourPoint, "pas du tout"), Some(1));
        assert_eq!(hit(Scale::FourPoint, "pas beaucoup"), Some(2));
        assert_eq!(hit(Scale::FourPoint, "tres peu"), Some(2));
        assert_eq!(hit(Scale::SevenPoint, "tres mauvais"), Some(1));
        assert_eq!(hit(Scale::SevenPoint, "pas mal"), Some(5));
        assert_eq!(hit(Scale::SevenPoint, "tres bon"), Some(7));
    }

    #[test]
    fn test_ladder_order_within_tier() {
        // Both "pas" (1) and "beaucoup" (4) are words; the lower rung is checked first
        assert_eq!(hit(Scale::FourPoint, "beaucoup pas"), Some(1));
        // Equal-length phrases: the lower rung wins
        assert_eq!(hit(Scale::FourPoint, "un peu pas mal"), Some(2));
    }

    #[test]
    fn test_longer_phrase_wins() {
        // "pas tres bien" (3 words) before "tres bien" (2 words)
        assert_eq!(hit(Scale::SevenPoint, "pas tres bien"), Some(3));
        // "pas tres mauvais" before "tres mauvais"
        assert_eq!(hit(Scale::SevenPoint, "pas tres mauvais"), Some(5));
        // "tout a fait" before "un peu"
        assert_eq!(hit(Scale::FourPoint, "un peu tout a fait"), Some(4));
        // Any phrase before any word
        assert_eq!(hit(Scale::FourPoint, "jamais tres souvent"), Some(4));
    }

    #[test]
    fn test_no_substring_match() {
        assert_eq!(hit(Scale::FourPoint, "passer"), None);
        assert_eq!(hit(Scale::SevenPoint, "bonjour"), None);
        assert_eq!(hit(Scale::SevenPoint, "malade"), None);
    }

    #[test]
    fn test_hit_reports_rule() {
        let tokens = ["tout", "a", "fait"];
        let found = match_rules(RULE_TABLE.tiers(Scale::FourPoint), &tokens);
        assert_eq!(
            found,
            Some(RuleHit {
                score: 4,
                tier: TierKind::Phrase,
                synonym: "tout a fait",
            })
        );
    }
}
