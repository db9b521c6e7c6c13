use std::fmt::Write;

use crate::llm_client::prompts::with_tone;
use crate::matching::answers::dedup_last_wins;
use crate::matching::variants::option_label;
use crate::matching::{CareerMatch, QuizAnswer, QuizVariant};

pub const ANALYSIS_MAX_TOKENS: u32 = 1500;
const TOP_MATCHES: usize = 5;

const ANALYSIS_ROLE: &str = "\
    You are a career counseling AI specializing in analyzing career assessment results. \
    Based on the user's quiz answers, computed career matches and skills, provide a detailed \
    analysis of suitable career paths. For each recommended career, include necessary skills, \
    education requirements, growth prospects, and why it might be a good fit based on their \
    answers. Provide at least 3 career recommendations in order of relevance.";

pub fn analysis_system_prompt() -> String {
    with_tone(ANALYSIS_ROLE)
}

/// User turn for a stored quiz result: each answer in words, the top matches, and skills.
pub fn build_analysis_prompt(
    variant: QuizVariant,
    answers: &[QuizAnswer],
    matches: &[CareerMatch],
    skills: &[String],
) -> String {
    let mut prompt = format!("Here are my results from the {}:\n\n", variant.title());

    for answer in dedup_last_wins(answers) {
        let question = variant
            .question_text(answer.question_id)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Question {}", answer.question_id));
        let choice = option_label(answer.option_id)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Option {}", answer.option_id));
        let _ = writeln!(prompt, "- {question} Answer: {choice}");
    }

    if !matches.is_empty() {
        prompt.push_str("\nMy strongest computed career matches:\n");
        for m in matches.iter().take(TOP_MATCHES) {
            let _ = writeln!(
                prompt,
                "- {} ({}): {}%",
                m.career, m.category, m.match_percentage
            );
        }
    }

    let skills: Vec<&str> = skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    if skills.is_empty() {
        prompt.push_str("\nNo specific skills provided by the user.\n");
    } else {
        let _ = writeln!(prompt, "\nMy self-reported skills: {}", skills.join(", "));
    }

    prompt.push_str(
        "\nPlease analyze these results and recommend suitable career paths for me with detailed explanations.",
    );
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn career(name: &str, pct: u8) -> CareerMatch {
        CareerMatch {
            career: name.into(),
            category: "Technology".into(),
            match_percentage: pct,
        }
    }

    #[test]
    fn test_answers_rendered_as_text() {
        let prompt = build_analysis_prompt(
            QuizVariant::GeneralInterest,
            &[QuizAnswer::new(1, 5), QuizAnswer::new(2, 1)],
            &[],
            &[],
        );
        assert!(prompt.contains(
            "- I enjoy solving complex problems and analyzing data. Answer: Strongly Agree"
        ));
        assert!(prompt.contains("Answer: Strongly Disagree"));
        assert!(prompt.contains("No specific skills provided"));
    }

    #[test]
    fn test_repeated_question_rendered_once_with_last_answer() {
        let prompt = build_analysis_prompt(
            QuizVariant::GeneralInterest,
            &[QuizAnswer::new(1, 1), QuizAnswer::new(1, 5)],
            &[],
            &[],
        );
        assert_eq!(prompt.matches("solving complex problems").count(), 1);
        assert!(prompt.contains("Answer: Strongly Agree"));
        assert!(!prompt.contains("Answer: Strongly Disagree"));
    }

    #[test]
    fn test_unknown_question_and_option_fall_back_to_ids() {
        let prompt =
            build_analysis_prompt(QuizVariant::TechnologyPath, &[QuizAnswer::new(18, 9)], &[], &[]);
        assert!(prompt.contains("- Question 18 Answer: Option 9"));
    }

    #[test]
    fn test_only_top_matches_listed() {
        let matches: Vec<_> = (0..8).map(|i| career(&format!("Career {i}"), 90 - i)).collect();
        let prompt = build_analysis_prompt(QuizVariant::TechnologyPath, &[], &matches, &[]);
        assert!(prompt.contains("Career 4 (Technology): 86%"));
        assert!(!prompt.contains("Career 5"));
    }

    #[test]
    fn test_skills_listed_when_present() {
        let skills = vec!["Rust".to_string(), " ".to_string(), "SQL".to_string()];
        let prompt = build_analysis_prompt(QuizVariant::TechnologyPath, &[], &[], &skills);
        assert!(prompt.contains("My self-reported skills: Rust, SQL"));
    }
}
