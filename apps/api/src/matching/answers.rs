use serde::{Deserialize, Serialize};

/// Lowest and highest option id on the 5-point agreement scale.
pub const MIN_OPTION: i32 = 1;
pub const MAX_OPTION: i32 = 5;

/// One answered question: `option_id` is the Likert ordinal (1 = strongly disagree,
/// 5 = strongly agree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAnswer {
    pub question_id: i32,
    pub option_id: i32,
}

impl QuizAnswer {
    pub fn new(question_id: i32, option_id: i32) -> Self {
        Self {
            question_id,
            option_id,
        }
    }

    pub fn is_in_range(&self) -> bool {
        (MIN_OPTION..=MAX_OPTION).contains(&self.option_id)
    }
}

/// Collapses repeated answers to the same question, last write wins.
///
/// A replaced answer keeps the position of the first occurrence, the same way
/// the quiz client swaps an answer in place when the user changes their mind.
pub fn dedup_last_wins(answers: &[QuizAnswer]) -> Vec<QuizAnswer> {
    let mut deduped: Vec<QuizAnswer> = Vec::with_capacity(answers.len());
    for answer in answers {
        match deduped
            .iter_mut()
            .find(|a| a.question_id == answer.question_id)
        {
            Some(existing) => *existing = *answer,
            None => deduped.push(*answer),
        }
    }
    deduped
}

/// Answers whose option id falls outside the 1–5 scale.
pub fn out_of_range(answers: &[QuizAnswer]) -> Vec<QuizAnswer> {
    answers.iter().filter(|a| !a.is_in_range()).copied().collect()
}
