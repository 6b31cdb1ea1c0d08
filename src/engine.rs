//! Review engine: scoring, derivation and generation over shared reference data.

use crate::config::DirectoryConfig;
use crate::drivers::{Driver, DriverDirectory};
use crate::error::Result;
use crate::generator::{self, GeneratedReview};
use crate::insights;
use crate::lexicon::{Aspect, Lexicon};
use crate::scorer::{MatchBreakdown, Scorer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub driver_id: i64,
    pub driver_name: String,
    pub sentiment_score: f64,
    pub aspect_scores: BTreeMap<Aspect, f64>,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Cheap to clone; all clones share the same lexicon and directory.
#[derive(Debug, Clone)]
pub struct ReviewEngine {
    lexicon: Arc<Lexicon>,
    directory: Arc<DriverDirectory>,
    scorer: Scorer,
}

impl ReviewEngine {
    pub fn new(lexicon: Arc<Lexicon>, directory: Arc<DriverDirectory>) -> Self {
        Self {
            scorer: Scorer::new(lexicon.clone()),
            lexicon,
            directory,
        }
    }

    /// Built-in lexicon with the directory described by `cfg`.
    pub fn from_config(cfg: &DirectoryConfig) -> Result<Self> {
        let lexicon = Lexicon::checked_builtin()?;
        let directory = DriverDirectory::from_config(cfg)?;
        tracing::info!("review engine ready with {} drivers", directory.len());
        Ok(Self::new(Arc::new(lexicon), Arc::new(directory)))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn directory(&self) -> &DriverDirectory {
        &self.directory
    }

    pub fn lookup_driver(&self, driver_id: i64) -> Driver {
        self.directory.lookup_driver(driver_id)
    }

    pub fn analyze(&self, review_text: &str, driver_id: i64) -> AnalysisReport {
        self.analyze_verbose(review_text, driver_id).0
    }

    /// Same as [`analyze`](Self::analyze) but also returns the matched words.
    pub fn analyze_verbose(
        &self,
        review_text: &str,
        driver_id: i64,
    ) -> (AnalysisReport, MatchBreakdown) {
        let driver = self.directory.lookup_driver(driver_id);
        let (scores, matches) = self.scorer.score_with_matches(review_text);
        let derived = insights::derive(&scores, &driver);

        let report = AnalysisReport {
            driver_id,
            driver_name: driver.name,
            sentiment_score: scores.sentiment_score,
            aspect_scores: scores.aspect_scores,
            insights: derived.insights,
            recommendations: derived.recommendations,
        };
        (report, matches)
    }

    pub fn generate(&self, driver_id: i64) -> GeneratedReview {
        let driver = self.directory.lookup_driver(driver_id);
        generator::generate_review(&driver)
    }
}

impl Default for ReviewEngine {
    fn default() -> Self {
        Self::new(
            Arc::new(Lexicon::builtin()),
            Arc::new(DriverDirectory::builtin()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<ReviewEngine>();
    }

    #[test]
    fn analyze_reports_requested_id_for_unknown_driver() {
        let report = ReviewEngine::default().analyze("good", 404);
        assert_eq!(report.driver_id, 404);
        assert_eq!(report.driver_name, "Unknown Driver");
    }

    #[test]
    fn verbose_analysis_exposes_matches() {
        let (report, matches) =
            ReviewEngine::default().analyze_verbose("Clean car, polite driver", 1);
        assert_eq!(matches.positive, vec!["clean", "polite"]);
        assert_eq!(
            matches.aspects[&Aspect::VehicleCondition],
            vec!["car", "clean"]
        );
        assert_eq!(report.aspect_scores[&Aspect::VehicleCondition], 5.0);
    }

    #[test]
    fn from_config_scores_like_default() {
        let engine = ReviewEngine::from_config(&DirectoryConfig::default()).unwrap();
        let text = "Clean car, polite driver, but late";
        assert_eq!(
            engine.analyze(text, 2),
            ReviewEngine::default().analyze(text, 2)
        );
        assert_eq!(engine.directory().len(), 3);
    }
}
