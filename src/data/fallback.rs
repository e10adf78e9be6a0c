use std::collections::BTreeMap;

use crate::models::{DimensionScore, MajorRecommendation, RecommendationResult};

/// Shown when the service answered but the recommendation call failed.
pub const FALLBACK_MESSAGE: &str = "Failed to get recommendations. Using fallback data.";

/// Shown when the service was never reachable in this session.
pub const UNREACHABLE_MESSAGE: &str =
    "Assessment service unreachable. Showing sample recommendations.";

/// Fixed sample shown when recommendations cannot be fetched.
///
/// The sample does not depend on the submitted answers.
pub fn sample_result() -> RecommendationResult {
    let summary = [
        ("R", "Realistic", 100.0),
        ("I", "Investigative", 84.0),
        ("A", "Artistic", 72.0),
    ];

    let assessment_summary = summary
        .iter()
        .map(|(code, name, score)| {
            (
                code.to_string(),
                DimensionScore {
                    name: name.to_string(),
                    score: *score,
                },
            )
        })
        .collect();

    let riasec_scores = BTreeMap::from([
        ("R".to_string(), 5.0),
        ("I".to_string(), 4.2),
        ("A".to_string(), 3.6),
    ]);

    let riasec_percentages = summary
        .iter()
        .map(|(code, _, score)| (code.to_string(), *score))
        .collect();

    RecommendationResult {
        success: true,
        answered_questions: 30,
        dominant_type: "R".to_string(),
        assessment_summary,
        riasec_scores,
        riasec_percentages,
        recommendations: vec![
            MajorRecommendation {
                major_code: "FT1".to_string(),
                major_name: "Mechanical Engineering".to_string(),
                faculty: "Faculty of Engineering".to_string(),
                description: "Designing and developing mechanical systems".to_string(),
                riasec_pattern: "RI".to_string(),
                compatibility_score: 9.2,
                compatibility_percentage: 92.0,
            },
            MajorRecommendation {
                major_code: "FT2".to_string(),
                major_name: "Chemical Engineering".to_string(),
                faculty: "Faculty of Engineering".to_string(),
                description: "Developing industrial chemical processes".to_string(),
                riasec_pattern: "IR".to_string(),
                compatibility_score: 9.2,
                compatibility_percentage: 92.0,
            },
        ],
    }
}
