//! Answer rule table
//!
//! One declarative table per scale. Each scale is a list of tiers evaluated
//! in order; each tier is a list of rule groups in ascending score order.
//! Negated and intensified forms ("pas bon", "tres souvent") are phrases of
//! their own and outrank the bare word they contain.
//! All synonyms are stored in normalized form.

use crate::scale::Scale;
use serde::Serialize;

/// Bumped whenever a synonym or the evaluation order changes
pub const RULE_TABLE_VERSION: u32 = 2;

/// Priority tier of a rule group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TierKind {
    /// Multi-word expressions, checked first
    Phrase,
    /// Single words along the severity ladder
    Word,
}

/// Synonyms mapped to one canonical score
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RuleGroup {
    pub score: u8,
    pub synonyms: &'static [&'static str],
}

/// An ordered set of rule groups
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Tier {
    pub kind: TierKind,
    pub groups: &'static [RuleGroup],
}

/// Versioned rule table keyed by scale
#[derive(Debug, Serialize)]
pub struct RuleTable {
    pub version: u32,
    four_point: &'static [Tier],
    seven_point: &'static [Tier],
}

impl RuleTable {
    /// Tiers for a scale, in evaluation order
    pub fn tiers(&self, scale: Scale) -> &'static [Tier] {
        match scale {
            Scale::FourPoint => self.four_point,
            Scale::SevenPoint => self.seven_point,
        }
    }

    /// Every (tier, score, synonym) triple of a scale, in evaluation order
    pub fn entries(&self, scale: Scale) -> impl Iterator<Item = (TierKind, u8, &'static str)> {
        self.tiers(scale).iter().flat_map(|tier| {
            tier.groups.iter().flat_map(move |group| {
                group
                    .synonyms
                    .iter()
                    .map(move |synonym| (tier.kind, group.score, *synonym))
            })
        })
    }
}

const FOUR_POINT: &[Tier] = &[
    Tier {
        kind: TierKind::Phrase,
        groups: &[
            RuleGroup {
                score: 1,
                synonyms: &["pas du tout", "absolument pas", "pas une seule fois"],
            },
            RuleGroup {
                score: 2,
                synonyms: &[
                    "un peu",
                    "un petit peu",
                    "tres peu",
                    "pas beaucoup",
                    "pas tellement",
                    "pas trop",
                    "pas tres",
                    "pas souvent",
                    "pas toujours",
                    "pas assez",
                    "pas enormement",
                ],
            },
            RuleGroup {
                score: 3,
                synonyms: &["pas mal", "assez souvent"],
            },
            RuleGroup {
                score: 4,
                synonyms: &[
                    "tout a fait",
                    "vraiment beaucoup",
                    "tout le temps",
                    "tres souvent",
                ],
            },
        ],
    },
    Tier {
        kind: TierKind::Word,
        groups: &[
            RuleGroup {
                score: 1,
                synonyms: &["jamais", "aucunement", "pas"],
            },
            RuleGroup {
                score: 2,
                synonyms: &["peu", "legerement", "rarement"],
            },
            RuleGroup {
                score: 3,
                synonyms: &["assez", "moyennement", "moderement", "souvent"],
            },
            RuleGroup {
                score: 4,
                synonyms: &[
                    "beaucoup",
                    "tres",
                    "enormement",
                    "completement",
                    "extremement",
                    "toujours",
                ],
            },
        ],
    },
];

const SEVEN_POINT: &[Tier] = &[
    Tier {
        kind: TierKind::Phrase,
        groups: &[
            RuleGroup {
                score: 1,
                synonyms: &["tres mauvais", "tres mauvaise", "extremement mauvais", "tres mal"],
            },
            RuleGroup {
                score: 3,
                synonyms: &[
                    "plutot mauvais",
                    "plutot mauvaise",
                    "pas bien",
                    "pas tres bien",
                    "pas tres bon",
                    "pas terrible",
                    "pas bon",
                    "pas bonne",
                    "pas super",
                ],
            },
            RuleGroup {
                score: 4,
                synonyms: &["ni bon ni mauvais", "comme ci comme ca"],
            },
            RuleGroup {
                score: 5,
                synonyms: &[
                    "plutot bon",
                    "plutot bonne",
                    "plutot bien",
                    "assez bien",
                    "assez bon",
                    "pas mal",
                    "pas mauvais",
                    "pas mauvaise",
                    "pas tres mauvais",
                    "pas tres mauvaise",
                    "pas excellent",
                    "pas excellente",
                    "pas parfait",
                    "pas parfaite",
                ],
            },
            RuleGroup {
                score: 7,
                synonyms: &["tres bon", "tres bonne", "tres bien"],
            },
        ],
    },
    Tier {
        kind: TierKind::Word,
        groups: &[
            RuleGroup {
                score: 1,
                synonyms: &["horrible", "terrible", "catastrophique", "execrable"],
            },
            RuleGroup {
                score: 2,
                synonyms: &["mauvais", "mauvaise", "mal"],
            },
            RuleGroup {
                score: 3,
                synonyms: &["mediocre"],
            },
            RuleGroup {
                score: 4,
                synonyms: &["moyen", "moyenne", "neutre", "correct", "correcte", "passable"],
            },
            RuleGroup {
                score: 5,
                synonyms: &["convenable"],
            },
            RuleGroup {
                score: 6,
                synonyms: &["bon", "bonne", "bien"],
            },
            RuleGroup {
                score: 7,
                synonyms: &[
                    "excellent",
                    "excellente",
                    "parfait",
                    "parfaite",
                    "super",
                    "formidable",
                ],
            },
        ],
    },
];

/// The canonical rule table
pub static RULE_TABLE: RuleTable = RuleTable {
    version: RULE_TABLE_VERSION,
    four_point: FOUR_POINT,
    seven_point: SEVEN_POINT,
};
