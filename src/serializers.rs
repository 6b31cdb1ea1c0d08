use crate::lexicon::Aspect;
use serde::ser::SerializeMap;
use std::collections::BTreeMap;

/// Round a score to one decimal place for display.
///
/// Exact halves go to the even digit (3.25 -> 3.2), as the legacy API did.
pub fn round1(score: f64) -> f64 {
    (score * 10.0).round_ties_even() / 10.0
}

// Scores go over the wire with one decimal, matching the legacy API
pub fn serialize_score<S>(score: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_f64(round1(*score))
}

pub fn serialize_score_map<S>(
    scores: &BTreeMap<Aspect, f64>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let mut map = serializer.serialize_map(Some(scores.len()))?;
    for (aspect, score) in scores {
        map.serialize_entry(aspect.as_str(), &round1(*score))?;
    }
    map.end()
}
