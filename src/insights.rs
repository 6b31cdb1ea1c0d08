//! Rule-based insights and recommendations derived from scores.

use crate::drivers::Driver;
use crate::lexicon::Aspect;
use crate::scorer::ScoreResult;

/// Insights and recommendations, each in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Derivation {
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
}

const EXPERIENCE_HIGHLIGHT_YEARS: u32 = 5;
const HIGH_SENTIMENT: f64 = 4.0;
const LOW_SENTIMENT: f64 = 2.0;
const STRONG_ASPECT: f64 = 3.0;
const WEAK_ASPECT: f64 = 4.0;

/// Highest-scoring aspect; ties go to the earliest in enumeration order.
pub fn strongest_aspect(scores: &ScoreResult) -> (Aspect, f64) {
    let mut best = (Aspect::ALL[0], scores.aspect(Aspect::ALL[0]));
    for aspect in &Aspect::ALL[1..] {
        let s = scores.aspect(*aspect);
        if s > best.1 {
            best = (*aspect, s);
        }
    }
    best
}

/// Lowest-scoring aspect; ties go to the earliest in enumeration order.
pub fn weakest_aspect(scores: &ScoreResult) -> (Aspect, f64) {
    let mut worst = (Aspect::ALL[0], scores.aspect(Aspect::ALL[0]));
    for aspect in &Aspect::ALL[1..] {
        let s = scores.aspect(*aspect);
        if s < worst.1 {
            worst = (*aspect, s);
        }
    }
    worst
}

pub fn derive(scores: &ScoreResult, driver: &Driver) -> Derivation {
    let mut insights = Vec::new();
    let mut recommendations = Vec::new();

    if driver.experience_years > EXPERIENCE_HIGHLIGHT_YEARS {
        insights.push(format!(
            "{}'s {} years of experience clearly shows in their driving skills.",
            driver.name, driver.experience_years
        ));
    }

    if scores.sentiment_score > HIGH_SENTIMENT {
        insights.push("Passengers consistently rate this driver very highly.".to_string());
    } else if scores.sentiment_score < LOW_SENTIMENT {
        insights.push("There may be some areas where this driver could improve.".to_string());
    }

    let (top, top_score) = strongest_aspect(scores);
    if top_score > STRONG_ASPECT {
        insights.push(format!(
            "{} is this driver's strongest attribute based on passenger reviews.",
            top.label()
        ));
    }

    let (low, low_score) = weakest_aspect(scores);
    if low_score < WEAK_ASPECT {
        recommendations.push(format!(
            "Consider focusing on improving {} for better passenger satisfaction.",
            low.label()
        ));
    }

    if recommendations.is_empty() && scores.sentiment_score > HIGH_SENTIMENT {
        recommendations.push("Continue maintaining your excellent service standards.".to_string());
    }

    Derivation {
        insights,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn scores(sentiment: f64, aspects: [f64; 5]) -> ScoreResult {
        ScoreResult {
            sentiment_score: sentiment,
            aspect_scores: Aspect::ALL.iter().copied().zip(aspects).collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn neutral_scores_recommend_first_aspect() {
        let d = derive(&scores(3.0, [3.0; 5]), &Driver::sentinel(999));
        assert!(d.insights.is_empty());
        assert_eq!(
            d.recommendations,
            vec!["Consider focusing on improving Driving Skill for better passenger satisfaction."]
        );
    }

    #[test]
    fn experience_insight_requires_more_than_five_years() {
        let five = derive(&scores(3.0, [3.0; 5]), &Driver::new(1, "James Wilson", 5));
        assert!(five.insights.is_empty());

        let eight = derive(&scores(3.0, [3.0; 5]), &Driver::new(2, "Sarah Chen", 8));
        assert_eq!(
            eight.insights,
            vec!["Sarah Chen's 8 years of experience clearly shows in their driving skills."]
        );
    }

    #[test]
    fn sentiment_bands_are_exclusive() {
        let d = Driver::sentinel(0);
        let high = derive(&scores(4.5, [3.0; 5]), &d);
        assert_eq!(high.insights, vec!["Passengers consistently rate this driver very highly."]);

        let low = derive(&scores(1.0, [3.0; 5]), &d);
        assert_eq!(low.insights, vec!["There may be some areas where this driver could improve."]);

        for middling in [2.0, 3.0, 4.0] {
            assert!(derive(&scores(middling, [3.0; 5]), &d).insights.is_empty());
        }
    }

    #[test]
    fn strongest_aspect_ties_go_to_enumeration_order() {
        let s = scores(3.0, [3.0, 4.0, 4.0, 3.0, 3.0]);
        assert_eq!(strongest_aspect(&s), (Aspect::Communication, 4.0));
        let d = derive(&s, &Driver::sentinel(0));
        assert_eq!(
            d.insights,
            vec!["Communication is this driver's strongest attribute based on passenger reviews."]
        );
    }

    #[test]
    fn weakest_aspect_ties_go_to_enumeration_order() {
        let s = scores(3.0, [5.0, 4.0, 3.0, 5.0, 3.0]);
        assert_eq!(weakest_aspect(&s), (Aspect::Punctuality, 3.0));
    }

    #[test]
    fn high_sentiment_without_weak_aspect_gets_generic_recommendation() {
        let d = derive(&scores(5.0, [4.0, 5.0, 4.0, 4.0, 4.0]), &Driver::sentinel(0));
        assert_eq!(
            d.recommendations,
            vec!["Continue maintaining your excellent service standards."]
        );
        assert_eq!(
            d.insights.last().map(String::as_str),
            Some("Communication is this driver's strongest attribute based on passenger reviews.")
        );
    }

    #[test]
    fn middling_sentiment_with_strong_aspects_has_no_recommendation() {
        let d = derive(&scores(3.0, [4.0; 5]), &Driver::sentinel(0));
        assert!(d.recommendations.is_empty());
    }

    #[test]
    fn vehicle_condition_label_in_recommendation() {
        let d = derive(&scores(3.0, [4.0, 4.0, 4.0, 4.0, 3.0]), &Driver::sentinel(0));
        assert_eq!(
            d.recommendations,
            vec!["Consider focusing on improving Vehicle Condition for better passenger satisfaction."]
        );
    }
}
