use std::collections::BTreeMap;

use crate::matching::answers::{QuizAnswer, MAX_OPTION};

/// A latent trait and the questions that probe it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraitGroup {
    pub name: &'static str,
    pub question_ids: &'static [i32],
}

/// Per-trait scores for one quiz attempt, keyed by trait name.
pub type TraitScores = BTreeMap<&'static str, f64>;

/// Mean option value of the answers in `group`, normalized by the top of the scale.
///
/// No matching answers scores exactly 0.0. Careers that lean on an unanswered trait
/// are under-scored rather than rejected.
pub fn aggregate(answers: &[QuizAnswer], group: &TraitGroup) -> f64 {
    let (sum, count) = answers
        .iter()
        .filter(|a| group.question_ids.contains(&a.question_id))
        .fold((0_i64, 0_i64), |(sum, count), a| {
            (sum + i64::from(a.option_id), count + 1)
        });

    if count == 0 {
        return 0.0;
    }

    sum as f64 / (count * i64::from(MAX_OPTION)) as f64
}

/// Runs [`aggregate`] once for every trait group.
pub fn aggregate_all(answers: &[QuizAnswer], groups: &[TraitGroup]) -> TraitScores {
    groups
        .iter()
        .map(|group| (group.name, aggregate(answers, group)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TECHNICAL: TraitGroup = TraitGroup {
        name: "technical",
        question_ids: &[1, 6, 11, 16],
    };

    fn answers(pairs: &[(i32, i32)]) -> Vec<QuizAnswer> {
        pairs.iter().map(|&(q, o)| QuizAnswer::new(q, o)).collect()
    }

    #[test]
    fn test_no_matching_answers_is_zero() {
        let score = aggregate(&answers(&[(2, 5), (3, 4)]), &TECHNICAL);
        assert_eq!(score, 0.0);
        assert!(!score.is_nan());
    }

    #[test]
    fn test_empty_answers_is_zero() {
        assert_eq!(aggregate(&[], &TECHNICAL), 0.0);
    }

    #[test]
    fn test_full_agreement_is_exactly_one() {
        let score = aggregate(&answers(&[(1, 5), (6, 5), (11, 5), (16, 5)]), &TECHNICAL);
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_partial_group_uses_answered_questions_only() {
        // (4 + 2) / (2 * 5) = 0.6
        let score = aggregate(&answers(&[(1, 4), (6, 2), (2, 5)]), &TECHNICAL);
        assert!((score - 0.6).abs() < 1e-12, "Score was {score}");
    }

    #[test]
    fn test_lowest_answers_score_one_fifth() {
        let score = aggregate(&answers(&[(1, 1), (6, 1)]), &TECHNICAL);
        assert!((score - 0.2).abs() < 1e-12, "Score was {score}");
    }

    #[test]
    fn test_unknown_question_ids_are_ignored() {
        let score = aggregate(&answers(&[(1, 5), (999, 1), (-4, 1)]), &TECHNICAL);
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_aggregate_all_covers_every_group() {
        let groups = [
            TECHNICAL,
            TraitGroup {
                name: "social",
                question_ids: &[4, 9],
            },
        ];
        let scores = aggregate_all(&answers(&[(1, 5)]), &groups);
        assert_eq!(scores.len(), 2);
        assert_eq!(scores["technical"], 1.0);
        assert_eq!(scores["social"], 0.0);
    }
}
