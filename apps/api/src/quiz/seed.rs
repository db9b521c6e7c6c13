use anyhow::Result;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;

use crate::matching::variants::LIKERT_OPTIONS;
use crate::matching::{QuizRegistry, QuizVariant};
use crate::models::quiz::{QuizOption, QuizQuestion};

/// Question list for a variant, each with the shared five-point agreement scale.
pub fn build_questions(variant: QuizVariant) -> Vec<QuizQuestion> {
    let options: Vec<QuizOption> = (1..)
        .zip(LIKERT_OPTIONS)
        .map(|(id, text)| QuizOption {
            id,
            text: text.to_string(),
        })
        .collect();

    (1..)
        .zip(variant.questions())
        .map(|(id, text)| QuizQuestion {
            id,
            text: text.to_string(),
            options: options.clone(),
        })
        .collect()
}

/// Upserts every registered quiz so stored quiz ids always match the scoring registry.
pub async fn seed_quizzes(pool: &PgPool, registry: &QuizRegistry) -> Result<()> {
    for config in registry.configs() {
        let variant = config.variant();
        sqlx::query(
            r#"
            INSERT INTO career_quizzes (id, title, description, questions)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE
            SET title = EXCLUDED.title,
                description = EXCLUDED.description,
                questions = EXCLUDED.questions
            "#,
        )
        .bind(variant.quiz_id())
        .bind(variant.title())
        .bind(variant.description())
        .bind(Json(build_questions(variant)))
        .execute(pool)
        .await?;
    }
    info!("Seeded {} career quizzes", registry.configs().len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_quiz_questions() {
        let questions = build_questions(QuizVariant::GeneralInterest);
        assert_eq!(questions.len(), 15);
        assert_eq!(questions[0].id, 1);
        assert_eq!(questions[14].id, 15);
        assert_eq!(
            questions[0].text,
            "I enjoy solving complex problems and analyzing data."
        );
    }

    #[test]
    fn test_every_question_has_likert_scale() {
        for question in build_questions(QuizVariant::TechnologyPath) {
            let ids: Vec<i32> = question.options.iter().map(|o| o.id).collect();
            assert_eq!(ids, vec![1, 2, 3, 4, 5]);
            assert_eq!(question.options[0].text, "Strongly Disagree");
            assert_eq!(question.options[4].text, "Strongly Agree");
        }
    }
}
