use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::data::Dimension;

/// Decoded answer of the recommendation service.
///
/// `success` and `recommendations` must be present; everything else falls
/// back to empty values when the service leaves it out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub success: bool,
    #[serde(default)]
    pub answered_questions: usize,
    #[serde(default)]
    pub dominant_type: String,
    #[serde(default)]
    pub assessment_summary: BTreeMap<String, DimensionScore>,
    #[serde(default)]
    pub riasec_scores: BTreeMap<String, f64>,
    #[serde(default)]
    pub riasec_percentages: BTreeMap<String, f64>,
    pub recommendations: Vec<MajorRecommendation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub name: String,
    pub score: f64,
}

/// A recommended study programme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MajorRecommendation {
    pub major_code: String,
    pub major_name: String,
    #[serde(default)]
    pub faculty: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub riasec_pattern: String,
    pub compatibility_score: f64,
    pub compatibility_percentage: f64,
}

impl RecommendationResult {
    /// Name of the dominant type, preferring the service's own label.
    pub fn dominant_name(&self) -> Option<&str> {
        self.assessment_summary
            .get(&self.dominant_type)
            .map(|summary| summary.name.as_str())
            .or_else(|| Dimension::from_code(&self.dominant_type).map(Dimension::name))
    }

    /// Summary entries in R-I-A-S-E-C order, unknown codes last.
    pub fn ordered_summary(&self) -> Vec<(&str, &DimensionScore)> {
        let mut entries: Vec<(&str, &DimensionScore)> = self
            .assessment_summary
            .iter()
            .map(|(code, score)| (code.as_str(), score))
            .collect();
        entries.sort_by_key(|(code, _)| {
            Dimension::from_code(code)
                .map(Dimension::rank)
                .unwrap_or(usize::MAX)
        });
        entries
    }
}

/// Where a displayed result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSource {
    Remote,
    Fallback,
}

/// The result shown on the results screen, tagged with its origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub result: RecommendationResult,
    pub source: ResultSource,
}

impl Assessment {
    pub fn remote(result: RecommendationResult) -> Self {
        Self {
            result,
            source: ResultSource::Remote,
        }
    }

    pub fn fallback(result: RecommendationResult) -> Self {
        Self {
            result,
            source: ResultSource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == ResultSource::Fallback
    }
}

/// Clamps a percentage into `[0, 100]` for display.
pub fn display_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}
