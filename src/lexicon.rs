//! Keyword lexicon for review scoring.
//! Sentiment polarity words plus per-aspect keyword sets, built once at startup.

use crate::error::{Result, ReviewError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Service dimension scored independently from sentiment.
///
/// Declaration order is the enumeration order used for tie-breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aspect {
    DrivingSkill,
    Communication,
    Punctuality,
    Professionalism,
    VehicleCondition,
}

impl Aspect {
    pub const ALL: [Aspect; 5] = [
        Aspect::DrivingSkill,
        Aspect::Communication,
        Aspect::Punctuality,
        Aspect::Professionalism,
        Aspect::VehicleCondition,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Aspect::DrivingSkill => "driving_skill",
            Aspect::Communication => "communication",
            Aspect::Punctuality => "punctuality",
            Aspect::Professionalism => "professionalism",
            Aspect::VehicleCondition => "vehicle_condition",
        }
    }

    /// Title-cased name with underscores replaced by spaces, e.g. "Driving Skill".
    pub fn label(&self) -> String {
        self.as_str()
            .split('_')
            .map(|part| {
                let mut chars = part.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Display for Aspect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const POSITIVE_WORDS: &[&str] = &[
    "excellent",
    "amazing",
    "outstanding",
    "brilliant",
    "exceptional",
    "great",
    "good",
    "awesome",
    "fantastic",
    "wonderful",
    "professional",
    "helpful",
    "friendly",
    "polite",
    "courteous",
    "reliable",
    "punctual",
    "timely",
    "safe",
    "clean",
    "comfortable",
    "responsive",
    "attentive",
    "skilled",
    "expert",
    "knowledgeable",
    "experienced",
    "efficient",
];

const NEGATIVE_WORDS: &[&str] = &[
    "poor",
    "bad",
    "terrible",
    "awful",
    "horrible",
    "disappointing",
    "rude",
    "unprofessional",
    "unreliable",
    "late",
    "dirty",
    "unsafe",
    "uncomfortable",
    "slow",
    "unresponsive",
    "careless",
    "inexperienced",
    "inefficient",
    "dangerous",
    "aggressive",
    "unprepared",
    "confused",
    "distracted",
    "impatient",
    "unpunctual",
    "messy",
];

fn builtin_aspect_words(aspect: Aspect) -> &'static [&'static str] {
    match aspect {
        Aspect::DrivingSkill => &[
            "drive", "driving", "skill", "control", "maneuver", "handling", "navigate",
        ],
        Aspect::Communication => &[
            "communicate",
            "communication",
            "response",
            "responsive",
            "talk",
            "explain",
            "update",
        ],
        Aspect::Punctuality => &[
            "punctual", "time", "early", "late", "delay", "wait", "schedule", "arrival",
        ],
        Aspect::Professionalism => &[
            "professional",
            "manner",
            "conduct",
            "behavior",
            "attitude",
            "respectful",
            "courteous",
        ],
        Aspect::VehicleCondition => &[
            "car",
            "vehicle",
            "clean",
            "maintained",
            "condition",
            "interior",
            "exterior",
        ],
    }
}

/// Immutable keyword tables shared by the scorer.
#[derive(Debug, Clone)]
pub struct Lexicon {
    positive: BTreeSet<String>,
    negative: BTreeSet<String>,
    aspects: BTreeMap<Aspect, BTreeSet<String>>,
}

impl Lexicon {
    /// Build a lexicon from explicit word lists.
    ///
    /// Words are lowercased. Fails if a word carries both polarities or if any
    /// aspect is missing a keyword set.
    pub fn new<I, S>(positive: I, negative: I, aspects: BTreeMap<Aspect, Vec<S>>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalize = |w: &S| w.as_ref().trim().to_lowercase();
        let positive: BTreeSet<String> = positive.into_iter().map(|w| normalize(&w)).collect();
        let negative: BTreeSet<String> = negative.into_iter().map(|w| normalize(&w)).collect();

        if let Some(word) = positive.intersection(&negative).next() {
            return Err(ReviewError::config(format!(
                "lexicon word '{}' is both positive and negative",
                word
            )));
        }

        let mut aspect_sets = BTreeMap::new();
        for aspect in Aspect::ALL {
            let words = aspects.get(&aspect).ok_or_else(|| {
                ReviewError::config(format!("lexicon has no keywords for aspect '{}'", aspect))
            })?;
            aspect_sets.insert(aspect, words.iter().map(|w| normalize(w)).collect());
        }

        Ok(Self {
            positive,
            negative,
            aspects: aspect_sets,
        })
    }

    /// The keyword tables the service ships with.
    pub fn builtin() -> Self {
        let to_set = |words: &[&str]| -> BTreeSet<String> {
            words.iter().map(|w| w.to_string()).collect()
        };
        Self {
            positive: to_set(POSITIVE_WORDS),
            negative: to_set(NEGATIVE_WORDS),
            aspects: Aspect::ALL
                .iter()
                .map(|a| (*a, to_set(builtin_aspect_words(*a))))
                .collect(),
        }
    }

    /// The shipped tables, run through the same checks as [`Lexicon::new`].
    pub fn checked_builtin() -> Result<Self> {
        Self::new(
            POSITIVE_WORDS.iter().copied(),
            NEGATIVE_WORDS.iter().copied(),
            Aspect::ALL
                .iter()
                .map(|a| (*a, builtin_aspect_words(*a).to_vec()))
                .collect(),
        )
    }

    pub fn positive_words(&self) -> &BTreeSet<String> {
        &self.positive
    }

    pub fn negative_words(&self) -> &BTreeSet<String> {
        &self.negative
    }

    /// Keyword sets keyed by aspect, iterating in enumeration order.
    pub fn aspect_keywords(&self) -> &BTreeMap<Aspect, BTreeSet<String>> {
        &self.aspects
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}
