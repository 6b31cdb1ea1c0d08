//! Keyword scorer: sentiment and per-aspect scores from whole-word matches.
//!
//! Text is NFKC-normalized, lowercased and split on every non-alphanumeric
//! character. A lexicon word counts only when it equals a whole token, so
//! "lateness" never matches "late" while "late," and "(late)" do.

use crate::lexicon::{Aspect, Lexicon};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::Arc;
use unicode_normalization::UnicodeNormalization;

pub const MIN_SCORE: f64 = 1.0;
pub const MAX_SCORE: f64 = 5.0;
/// Neutral score assigned when no relevant keywords are found.
pub const BASELINE_SCORE: f64 = 3.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub sentiment_score: f64,
    pub aspect_scores: BTreeMap<Aspect, f64>,
}

impl ScoreResult {
    pub fn aspect(&self, aspect: Aspect) -> f64 {
        self.aspect_scores
            .get(&aspect)
            .copied()
            .unwrap_or(BASELINE_SCORE)
    }
}

/// Which lexicon words were found, sorted. Used for debug output only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchBreakdown {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
    pub aspects: BTreeMap<Aspect, Vec<String>>,
}

/// Lowercased whole-word tokens of `text`.
pub fn tokenize(text: &str) -> HashSet<String> {
    text.nfkc()
        .collect::<String>()
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

fn matched(words: &BTreeSet<String>, tokens: &HashSet<String>) -> Vec<String> {
    words
        .iter()
        .filter(|w| tokens.contains(w.as_str()))
        .cloned()
        .collect()
}

/// `(p - n) / (p + n) * 5` on top of the baseline, clamped to [1, 5].
pub fn sentiment_from_counts(positive: usize, negative: usize) -> f64 {
    let total = positive + negative;
    let raw = if total == 0 {
        0.0
    } else {
        (positive as f64 - negative as f64) / total as f64 * 5.0
    };
    (raw + BASELINE_SCORE).clamp(MIN_SCORE, MAX_SCORE)
}

/// Baseline plus one per distinct keyword, saturating at 5.
pub fn aspect_from_matches(matches: usize) -> f64 {
    (matches as f64 + BASELINE_SCORE).clamp(MIN_SCORE, MAX_SCORE)
}

#[derive(Debug, Clone)]
pub struct Scorer {
    lexicon: Arc<Lexicon>,
}

impl Scorer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn score(&self, text: &str) -> ScoreResult {
        self.score_with_matches(text).0
    }

    pub fn score_with_matches(&self, text: &str) -> (ScoreResult, MatchBreakdown) {
        let tokens = tokenize(text);

        let positive = matched(self.lexicon.positive_words(), &tokens);
        let negative = matched(self.lexicon.negative_words(), &tokens);
        let sentiment_score = sentiment_from_counts(positive.len(), negative.len());

        let mut aspect_scores = BTreeMap::new();
        let mut aspect_matches = BTreeMap::new();
        for (aspect, keywords) in self.lexicon.aspect_keywords() {
            let hits = matched(keywords, &tokens);
            aspect_scores.insert(*aspect, aspect_from_matches(hits.len()));
            aspect_matches.insert(*aspect, hits);
        }

        tracing::debug!(
            positive = positive.len(),
            negative = negative.len(),
            sentiment_score,
            "scored review text"
        );

        (
            ScoreResult {
                sentiment_score,
                aspect_scores,
            },
            MatchBreakdown {
                positive,
                negative,
                aspects: aspect_matches,
            },
        )
    }
}
