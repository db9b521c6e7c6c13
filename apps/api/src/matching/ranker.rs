use serde::{Deserialize, Serialize};

use crate::matching::aggregator::TraitScores;
use crate::matching::weights::{CareerWeightTable, ConfigurationError};

/// One ranked career recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerMatch {
    pub career: String,
    pub category: String,
    pub match_percentage: u8,
}

/// Resolution weighted sums are snapped to before rounding, in percent.
const PERCENT_EPSILON: f64 = 1e-6;

/// Converts a raw weighted score to a whole percentage in 0–100.
///
/// Rounds half away from zero, so 12.5 becomes 13, then clamps. The scaled
/// value is first snapped to `PERCENT_EPSILON` so float drift in the weighted
/// sum (0.7 * 0.75 = 52.4999...%) cannot move a true half below the boundary.
pub fn match_percentage(raw: f64) -> u8 {
    let scaled = raw * 100.0;
    let pct = ((scaled / PERCENT_EPSILON).round() * PERCENT_EPSILON).round();
    if pct.is_nan() || pct <= 0.0 {
        0
    } else if pct >= 100.0 {
        100
    } else {
        pct as u8
    }
}

/// Scores every career in `table` and sorts the result by match percentage.
///
/// Every trait the table references must have a score; a missing one is a
/// configuration error and is reported before any career is evaluated.
#[cfg(test)]
pub fn rank(
    scores: &TraitScores,
    table: &CareerWeightTable,
) -> Result<Vec<CareerMatch>, ConfigurationError> {
    if let Some(missing) = table
        .referenced_traits()
        .find(|name| !scores.contains_key(name))
    {
        return Err(ConfigurationError::MissingScore(missing.to_string()));
    }
    Ok(rank_checked(scores, table))
}

/// Ranking body shared with callers that already validated `scores` against the table.
pub(crate) fn rank_checked(scores: &TraitScores, table: &CareerWeightTable) -> Vec<CareerMatch> {
    let mut matches: Vec<CareerMatch> = table
        .careers()
        .iter()
        .map(|career| {
            let raw: f64 = career
                .weights
                .iter()
                .map(|(name, weight)| weight * scores.get(name).copied().unwrap_or(0.0))
                .sum();
            CareerMatch {
                career: career.career.to_string(),
                category: career.category.to_string(),
                match_percentage: match_percentage(raw),
            }
        })
        .collect();

    // sort_by is stable: equal percentages keep table order
    matches.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
    matches
}
