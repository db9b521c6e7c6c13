//! Quiz variants and their static scoring configuration.
//!
//! Quiz ids are fixed: the same ids are seeded into `career_quizzes`, so a
//! submission's `quizId` always resolves to exactly one variant here.

use tracing::{debug, info, warn};

use crate::matching::aggregator::{aggregate_all, TraitGroup, TraitScores};
use crate::matching::answers::{dedup_last_wins, out_of_range, QuizAnswer};
use crate::matching::ranker::{rank_checked, CareerMatch};
use crate::matching::weights::{CareerWeightTable, CareerWeights, ConfigurationError};

/// Labels for option ids 1..=5.
pub const LIKERT_OPTIONS: [&str; 5] = [
    "Strongly Disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly Agree",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizVariant {
    GeneralInterest,
    TechnologyPath,
}

impl QuizVariant {
    pub const ALL: [QuizVariant; 2] = [QuizVariant::GeneralInterest, QuizVariant::TechnologyPath];

    pub fn from_quiz_id(quiz_id: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.quiz_id() == quiz_id)
    }

    pub fn quiz_id(self) -> i32 {
        match self {
            QuizVariant::GeneralInterest => 1,
            QuizVariant::TechnologyPath => 2,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            QuizVariant::GeneralInterest => "General Career Interest Profiler",
            QuizVariant::TechnologyPath => "Technology Career Path Assessment",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            QuizVariant::GeneralInterest => {
                "Focus on soft skills, leadership, creativity, and business-related roles"
            }
            QuizVariant::TechnologyPath => {
                "Focus on programming, AI, cybersecurity, web development, and emerging tech fields"
            }
        }
    }

    /// Question texts; question ids are 1-based positions in this list.
    pub fn questions(self) -> &'static [&'static str] {
        match self {
            QuizVariant::GeneralInterest => GENERAL_QUESTIONS,
            QuizVariant::TechnologyPath => TECH_QUESTIONS,
        }
    }

    pub fn question_text(self, question_id: i32) -> Option<&'static str> {
        let index = usize::try_from(question_id).ok()?.checked_sub(1)?;
        self.questions().get(index).copied()
    }

    pub fn trait_groups(self) -> &'static [TraitGroup] {
        match self {
            QuizVariant::GeneralInterest => GENERAL_TRAITS,
            QuizVariant::TechnologyPath => TECH_TRAITS,
        }
    }

    pub fn careers(self) -> &'static [CareerWeights] {
        match self {
            QuizVariant::GeneralInterest => GENERAL_CAREERS,
            QuizVariant::TechnologyPath => TECH_CAREERS,
        }
    }
}

/// Label for an option id, if it is on the scale.
pub fn option_label(option_id: i32) -> Option<&'static str> {
    let index = usize::try_from(option_id).ok()?.checked_sub(1)?;
    LIKERT_OPTIONS.get(index).copied()
}

// ────────────────────────────────────────────────────────────────────────────
// Validated configuration
// ────────────────────────────────────────────────────────────────────────────

/// One variant's trait groups and weight table, validated together.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    variant: QuizVariant,
    traits: Vec<TraitGroup>,
    table: CareerWeightTable,
}

impl ScoringConfig {
    pub fn new(
        variant: QuizVariant,
        traits: &[TraitGroup],
        careers: &[CareerWeights],
    ) -> Result<Self, ConfigurationError> {
        let table = CareerWeightTable::new(traits, careers)?;
        Ok(Self {
            variant,
            traits: traits.to_vec(),
            table,
        })
    }

    pub fn for_variant(variant: QuizVariant) -> Result<Self, ConfigurationError> {
        Self::new(variant, variant.trait_groups(), variant.careers())
    }

    pub fn variant(&self) -> QuizVariant {
        self.variant
    }

    pub fn table(&self) -> &CareerWeightTable {
        &self.table
    }

    #[cfg(test)]
    pub fn trait_scores(&self, answers: &[QuizAnswer]) -> TraitScores {
        aggregate_all(&dedup_last_wins(answers), &self.traits)
    }

    /// Full pipeline: dedup → aggregate every trait → rank.
    ///
    /// Out-of-range option ids are logged and scored as given.
    pub fn score(&self, answers: &[QuizAnswer]) -> Vec<CareerMatch> {
        let answers = dedup_last_wins(answers);
        for answer in out_of_range(&answers) {
            warn!(
                "Quiz {} answer for question {} has option {} outside 1-5",
                self.variant.quiz_id(),
                answer.question_id,
                answer.option_id
            );
        }

        let scores = aggregate_all(&answers, &self.traits);
        debug!("Trait scores for quiz {}: {:?}", self.variant.quiz_id(), scores);

        // Construction guarantees every weighted trait has a group, hence a score.
        rank_checked(&scores, &self.table)
    }
}

/// All quiz variants, validated once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct QuizRegistry {
    configs: Vec<ScoringConfig>,
}

impl QuizRegistry {
    /// Loads and validates the built-in variants. Any error must stop startup.
    pub fn load() -> Result<Self, ConfigurationError> {
        let configs = QuizVariant::ALL
            .into_iter()
            .map(ScoringConfig::for_variant)
            .collect::<Result<Vec<_>, _>>()?;
        let registry = Self::from_configs(configs)?;
        for config in &registry.configs {
            info!(
                "Loaded quiz {} '{}': {} traits, {} careers",
                config.variant.quiz_id(),
                config.variant.title(),
                config.traits.len(),
                config.table.len()
            );
        }
        Ok(registry)
    }

    pub fn from_configs(configs: Vec<ScoringConfig>) -> Result<Self, ConfigurationError> {
        for (i, config) in configs.iter().enumerate() {
            let id = config.variant.quiz_id();
            if configs[..i].iter().any(|c| c.variant.quiz_id() == id) {
                return Err(ConfigurationError::DuplicateQuiz(id));
            }
        }
        Ok(Self { configs })
    }

    pub fn get(&self, quiz_id: i32) -> Option<&ScoringConfig> {
        self.configs.iter().find(|c| c.variant.quiz_id() == quiz_id)
    }

    pub fn configs(&self) -> &[ScoringConfig] {
        &self.configs
    }
}

// ────────────────────────────────────────────────────────────────────────────
// General Career Interest Profiler (quiz 1)
// ────────────────────────────────────────────────────────────────────────────

const GENERAL_QUESTIONS: &[&str] = &[
    "I enjoy solving complex problems and analyzing data.",
    "I prefer working with people rather than with things.",
    "I enjoy creative activities like writing, design, or art.",
    "I am comfortable taking leadership roles.",
    "I enjoy learning about how technology works.",
    "I am detail-oriented and enjoy organizing things methodically.",
    "I'm comfortable with public speaking and presenting to groups.",
    "I enjoy helping others learn new things or develop skills.",
    "I like to work with numbers and analyze financial information.",
    "I enjoy watching market trends and analyzing consumer behavior.",
    "I'm good at persuading others and negotiating.",
    "I enjoy writing code or creating digital solutions to problems.",
    "I'm interested in human psychology and understanding behavior.",
    "I enjoy managing projects and coordinating different teams.",
    "I like to work with visual design and user experiences.",
];

// Groups reference ids up to 20 while only 15 questions are asked; unasked ids never match.
const GENERAL_TRAITS: &[TraitGroup] = &[
    TraitGroup {
        name: "technical",
        question_ids: &[1, 6, 11, 16],
    },
    TraitGroup {
        name: "analytical",
        question_ids: &[2, 7, 12, 17],
    },
    TraitGroup {
        name: "creative",
        question_ids: &[3, 8, 13, 18],
    },
    TraitGroup {
        name: "social",
        question_ids: &[4, 9, 14, 19],
    },
    TraitGroup {
        name: "leadership",
        question_ids: &[5, 10, 15, 20],
    },
];

const TECHNOLOGY: &str = "Technology";
const BUSINESS: &str = "Business & Management";
const CREATIVE_MEDIA: &str = "Creative & Media";
const HEALTH_SCIENCE: &str = "Healthcare & Science";
const ENGINEERING: &str = "Engineering & Architecture";
const OTHERS: &str = "Others";

const GENERAL_CAREERS: &[CareerWeights] = &[
    CareerWeights {
        career: "Software Developer",
        category: TECHNOLOGY,
        weights: &[("technical", 0.7), ("analytical", 0.2), ("creative", 0.1)],
    },
    CareerWeights {
        career: "Data Scientist",
        category: TECHNOLOGY,
        weights: &[("analytical", 0.6), ("technical", 0.3), ("leadership", 0.1)],
    },
    CareerWeights {
        career: "UX/UI Designer",
        category: TECHNOLOGY,
        weights: &[("creative", 0.5), ("technical", 0.3), ("social", 0.2)],
    },
    CareerWeights {
        career: "IT Project Manager",
        category: TECHNOLOGY,
        weights: &[("leadership", 0.4), ("technical", 0.3), ("analytical", 0.3)],
    },
    CareerWeights {
        career: "Cybersecurity Analyst",
        category: TECHNOLOGY,
        weights: &[("technical", 0.5), ("analytical", 0.4), ("leadership", 0.1)],
    },
    CareerWeights {
        career: "Product Manager",
        category: BUSINESS,
        weights: &[("leadership", 0.4), ("analytical", 0.3), ("social", 0.3)],
    },
    CareerWeights {
        career: "Marketing Specialist",
        category: BUSINESS,
        weights: &[("creative", 0.4), ("social", 0.3), ("analytical", 0.3)],
    },
    CareerWeights {
        career: "Financial Analyst",
        category: BUSINESS,
        weights: &[("analytical", 0.7), ("technical", 0.2), ("leadership", 0.1)],
    },
    CareerWeights {
        career: "Management Consultant",
        category: BUSINESS,
        weights: &[("analytical", 0.4), ("leadership", 0.4), ("social", 0.2)],
    },
    CareerWeights {
        career: "Graphic Designer",
        category: CREATIVE_MEDIA,
        weights: &[("creative", 0.7), ("technical", 0.2), ("social", 0.1)],
    },
    CareerWeights {
        career: "Content Creator",
        category: CREATIVE_MEDIA,
        weights: &[("creative", 0.5), ("social", 0.3), ("leadership", 0.2)],
    },
    CareerWeights {
        career: "Digital Marketer",
        category: CREATIVE_MEDIA,
        weights: &[("creative", 0.4), ("analytical", 0.3), ("social", 0.3)],
    },
    CareerWeights {
        career: "Film Producer",
        category: CREATIVE_MEDIA,
        weights: &[("creative", 0.5), ("leadership", 0.3), ("social", 0.2)],
    },
    CareerWeights {
        career: "Doctor",
        category: HEALTH_SCIENCE,
        weights: &[("analytical", 0.5), ("social", 0.3), ("technical", 0.2)],
    },
    CareerWeights {
        career: "Research Scientist",
        category: HEALTH_SCIENCE,
        weights: &[("analytical", 0.6), ("technical", 0.3), ("creative", 0.1)],
    },
    CareerWeights {
        career: "Nurse",
        category: HEALTH_SCIENCE,
        weights: &[("social", 0.6), ("technical", 0.2), ("leadership", 0.2)],
    },
    CareerWeights {
        career: "Psychologist",
        category: HEALTH_SCIENCE,
        weights: &[("social", 0.5), ("analytical", 0.4), ("leadership", 0.1)],
    },
    CareerWeights {
        career: "Civil Engineer",
        category: ENGINEERING,
        weights: &[("technical", 0.5), ("analytical", 0.4), ("leadership", 0.1)],
    },
    CareerWeights {
        career: "Mechanical Engineer",
        category: ENGINEERING,
        weights: &[("technical", 0.6), ("analytical", 0.3), ("creative", 0.1)],
    },
    CareerWeights {
        career: "Architect",
        category: ENGINEERING,
        weights: &[("creative", 0.5), ("technical", 0.3), ("analytical", 0.2)],
    },
    CareerWeights {
        career: "Electrical Engineer",
        category: ENGINEERING,
        weights: &[("technical", 0.6), ("analytical", 0.3), ("leadership", 0.1)],
    },
    CareerWeights {
        career: "Teacher",
        category: OTHERS,
        weights: &[("social", 0.5), ("creative", 0.3), ("leadership", 0.2)],
    },
    CareerWeights {
        career: "Lawyer",
        category: OTHERS,
        weights: &[("analytical", 0.5), ("social", 0.3), ("leadership", 0.2)],
    },
    CareerWeights {
        career: "Human Resources Manager",
        category: OTHERS,
        weights: &[("social", 0.6), ("leadership", 0.3), ("analytical", 0.1)],
    },
    CareerWeights {
        career: "Writer",
        category: OTHERS,
        weights: &[("creative", 0.7), ("analytical", 0.2), ("social", 0.1)],
    },
    CareerWeights {
        career: "Journalist",
        category: OTHERS,
        weights: &[("social", 0.4), ("creative", 0.4), ("analytical", 0.2)],
    },
    CareerWeights {
        career: "Sales Representative",
        category: OTHERS,
        weights: &[("social", 0.5), ("leadership", 0.4), ("analytical", 0.1)],
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Technology Career Path Assessment (quiz 2)
// ────────────────────────────────────────────────────────────────────────────

const TECH_QUESTIONS: &[&str] = &[
    "I enjoy solving logic puzzles and complex problems.",
    "I am interested in how software applications are built.",
    "I enjoy working with visual design and user interfaces.",
    "I like analyzing data and finding patterns or insights.",
    "I'm interested in cybersecurity and protecting digital assets.",
    "I enjoy learning new programming languages or technical skills.",
    "I like bridging the gap between technical and non-technical people.",
    "I enjoy optimizing systems for better performance.",
    "I'm comfortable with mathematics and statistical concepts.",
    "I enjoy managing technology projects and team coordination.",
];

const TECH_TRAITS: &[TraitGroup] = &[
    TraitGroup {
        name: "coding",
        question_ids: &[1, 8, 15],
    },
    TraitGroup {
        name: "analysis",
        question_ids: &[2, 9, 16],
    },
    TraitGroup {
        name: "design",
        question_ids: &[3, 10, 17],
    },
    TraitGroup {
        name: "communication",
        question_ids: &[4, 11, 18],
    },
    TraitGroup {
        name: "leadership",
        question_ids: &[5, 12, 19],
    },
    TraitGroup {
        name: "security",
        question_ids: &[6, 13, 20],
    },
    TraitGroup {
        name: "creativity",
        question_ids: &[7, 14],
    },
];

const TECH_CAREERS: &[CareerWeights] = &[
    CareerWeights {
        career: "Software Developer",
        category: TECHNOLOGY,
        weights: &[
            ("coding", 0.6),
            ("analysis", 0.2),
            ("leadership", 0.1),
            ("creativity", 0.1),
        ],
    },
    CareerWeights {
        career: "Data Scientist",
        category: TECHNOLOGY,
        weights: &[("analysis", 0.6), ("coding", 0.3), ("communication", 0.1)],
    },
    CareerWeights {
        career: "UX/UI Designer",
        category: TECHNOLOGY,
        weights: &[("design", 0.6), ("creativity", 0.2), ("communication", 0.2)],
    },
    CareerWeights {
        career: "IT Project Manager",
        category: TECHNOLOGY,
        weights: &[
            ("leadership", 0.5),
            ("communication", 0.3),
            ("coding", 0.1),
            ("analysis", 0.1),
        ],
    },
    CareerWeights {
        career: "Cybersecurity Analyst",
        category: TECHNOLOGY,
        weights: &[("security", 0.6), ("analysis", 0.2), ("coding", 0.2)],
    },
    CareerWeights {
        career: "Frontend Developer",
        category: TECHNOLOGY,
        weights: &[("coding", 0.5), ("design", 0.3), ("creativity", 0.2)],
    },
    CareerWeights {
        career: "Backend Developer",
        category: TECHNOLOGY,
        weights: &[("coding", 0.6), ("analysis", 0.3), ("security", 0.1)],
    },
    CareerWeights {
        career: "DevOps Engineer",
        category: TECHNOLOGY,
        weights: &[("coding", 0.4), ("security", 0.3), ("leadership", 0.3)],
    },
    CareerWeights {
        career: "Technical Writer",
        category: TECHNOLOGY,
        weights: &[
            ("communication", 0.5),
            ("coding", 0.2),
            ("design", 0.2),
            ("analysis", 0.1),
        ],
    },
    CareerWeights {
        career: "Product Manager",
        category: BUSINESS,
        weights: &[
            ("leadership", 0.4),
            ("communication", 0.3),
            ("analysis", 0.2),
            ("design", 0.1),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(pairs: &[(i32, i32)]) -> Vec<QuizAnswer> {
        pairs.iter().map(|&(q, o)| QuizAnswer::new(q, o)).collect()
    }

    fn general() -> ScoringConfig {
        ScoringConfig::for_variant(QuizVariant::GeneralInterest).unwrap()
    }

    fn tech() -> ScoringConfig {
        ScoringConfig::for_variant(QuizVariant::TechnologyPath).unwrap()
    }

    fn percentage_of(matches: &[CareerMatch], career: &str) -> u8 {
        matches
            .iter()
            .find(|m| m.career == career)
            .map(|m| m.match_percentage)
            .unwrap_or_else(|| panic!("{career} missing from results"))
    }

    #[test]
    fn test_registry_loads_both_variants() {
        let registry = QuizRegistry::load().unwrap();
        assert_eq!(registry.configs().len(), 2);
        assert_eq!(registry.get(1).unwrap().table().len(), 27);
        assert_eq!(registry.get(2).unwrap().table().len(), 10);
        assert!(registry.get(3).is_none());
    }

    #[test]
    fn test_documented_weights_sum_to_one() {
        for variant in QuizVariant::ALL {
            for career in variant.careers() {
                assert!(
                    (career.weight_sum() - 1.0).abs() < 1e-9,
                    "{} sums to {}",
                    career.career,
                    career.weight_sum()
                );
            }
        }
    }

    #[test]
    fn test_variant_lookup_by_quiz_id() {
        assert_eq!(QuizVariant::from_quiz_id(1), Some(QuizVariant::GeneralInterest));
        assert_eq!(QuizVariant::from_quiz_id(2), Some(QuizVariant::TechnologyPath));
        assert_eq!(QuizVariant::from_quiz_id(0), None);
    }

    #[test]
    fn test_technical_only_answers_match_example() {
        let matches = general().score(&answers(&[(1, 5), (6, 5), (11, 5), (16, 5)]));
        assert_eq!(percentage_of(&matches, "Software Developer"), 70);
        assert_eq!(percentage_of(&matches, "Graphic Designer"), 20);
        assert_eq!(matches[0].career, "Software Developer");
        assert_eq!(matches[0].category, "Technology");
    }

    #[test]
    fn test_technical_only_ties_keep_table_order() {
        let matches = general().score(&answers(&[(1, 5), (6, 5), (11, 5), (16, 5)]));
        let top: Vec<_> = matches.iter().take(5).map(|m| m.career.as_str()).collect();
        assert_eq!(
            top,
            vec![
                "Software Developer",
                "Mechanical Engineer",
                "Electrical Engineer",
                "Cybersecurity Analyst",
                "Civil Engineer",
            ]
        );
    }

    #[test]
    fn test_empty_answers_yield_all_zero_in_table_order() {
        let config = general();
        let matches = config.score(&[]);
        assert_eq!(matches.len(), config.table().len());
        assert!(matches.iter().all(|m| m.match_percentage == 0));
        let expected: Vec<_> = config.table().careers().iter().map(|c| c.career).collect();
        let actual: Vec<_> = matches.iter().map(|m| m.career.as_str()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_all_strongly_agree_scores_one_hundred_everywhere() {
        let config = tech();
        let all: Vec<_> = (1..=20).map(|q| QuizAnswer::new(q, 5)).collect();
        let matches = config.score(&all);
        assert!(matches.iter().all(|m| m.match_percentage == 100));
        assert_eq!(matches.len(), 10);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let config = general();
        let input = answers(&[(1, 3), (2, 4), (3, 2), (4, 5), (5, 1), (12, 4), (13, 3)]);
        let first = serde_json::to_string(&config.score(&input)).unwrap();
        let second = serde_json::to_string(&config.score(&input)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_output_is_complete_sorted_and_in_range() {
        for variant in QuizVariant::ALL {
            let config = ScoringConfig::for_variant(variant).unwrap();
            let input = answers(&[(1, 2), (2, 5), (3, 1), (4, 4), (7, 3), (9, 5), (14, 2)]);
            let matches = config.score(&input);

            assert_eq!(matches.len(), config.table().len());
            for career in config.table().careers() {
                assert_eq!(matches.iter().filter(|m| m.career == career.career).count(), 1);
            }
            assert!(matches.iter().all(|m| m.match_percentage <= 100));
            assert!(matches
                .windows(2)
                .all(|w| w[0].match_percentage >= w[1].match_percentage));
        }
    }

    #[test]
    fn test_equal_percentages_follow_table_order() {
        let config = tech();
        let matches = config.score(&answers(&[(1, 4), (2, 3), (3, 5), (4, 2), (5, 1)]));
        let position = |name: &str| {
            config
                .table()
                .careers()
                .iter()
                .position(|c| c.career == name)
                .unwrap()
        };
        for pair in matches.windows(2) {
            if pair[0].match_percentage == pair[1].match_percentage {
                assert!(position(&pair[0].career) < position(&pair[1].career));
            }
        }
    }

    #[test]
    fn test_career_weighted_on_unanswered_trait_scores_zero() {
        let traits = [
            TraitGroup {
                name: "answered",
                question_ids: &[1],
            },
            TraitGroup {
                name: "silent",
                question_ids: &[2],
            },
        ];
        let careers = [CareerWeights {
            career: "Mime",
            category: "Others",
            weights: &[("silent", 1.0)],
        }];
        let config = ScoringConfig::new(QuizVariant::GeneralInterest, &traits, &careers).unwrap();
        let matches = config.score(&answers(&[(1, 5)]));
        assert_eq!(matches[0].match_percentage, 0);
        assert_eq!(config.trait_scores(&answers(&[(1, 5)]))["silent"], 0.0);
    }

    #[test]
    fn test_misconfigured_overweight_clamps_to_one_hundred() {
        let traits = [TraitGroup {
            name: "drive",
            question_ids: &[1],
        }];
        let careers = [CareerWeights {
            career: "Overbooked",
            category: "Others",
            weights: &[("drive", 1.3)],
        }];
        let config = ScoringConfig::new(QuizVariant::GeneralInterest, &traits, &careers).unwrap();
        assert_eq!(config.score(&answers(&[(1, 5)]))[0].match_percentage, 100);
    }

    #[test]
    fn test_half_percent_rounds_up() {
        // 1 + 1 + 1 + 2 over 4 * 5 = 0.25
        let traits = [TraitGroup {
            name: "focus",
            question_ids: &[1, 2, 3, 4],
        }];
        let careers = [CareerWeights {
            career: "Halfway",
            category: "Others",
            weights: &[("focus", 0.5)],
        }];
        let config = ScoringConfig::new(QuizVariant::GeneralInterest, &traits, &careers).unwrap();
        let matches = config.score(&answers(&[(1, 1), (2, 1), (3, 1), (4, 2)]));
        // 0.5 * 0.25 = 0.125 → 12.5% → 13
        assert_eq!(matches[0].match_percentage, 13);
    }

    #[test]
    fn test_half_percent_on_general_table_rounds_up() {
        // technical = (4 + 4 + 3 + 4) / 20 = 0.75, Software Developer 0.7 * 0.75 = 52.5%
        let config = general();
        let input = answers(&[(1, 4), (6, 4), (11, 3), (16, 4)]);
        assert_eq!(config.trait_scores(&input)["technical"], 0.75);
        let matches = config.score(&input);
        assert_eq!(percentage_of(&matches, "Software Developer"), 53);
    }

    #[test]
    fn test_duplicate_answers_last_write_wins() {
        let config = general();
        let changed_mind = config.score(&answers(&[(1, 1), (6, 5), (11, 5), (16, 5), (1, 5)]));
        assert_eq!(percentage_of(&changed_mind, "Software Developer"), 70);
    }

    #[test]
    fn test_unknown_questions_do_not_change_scores() {
        let config = general();
        let base = config.score(&answers(&[(1, 4), (2, 3)]));
        let noisy = config.score(&answers(&[(1, 4), (2, 3), (99, 5), (-1, 2)]));
        assert_eq!(base, noisy);
    }

    #[test]
    fn test_out_of_range_option_is_scored_as_given_and_clamped() {
        let config = general();
        let matches = config.score(&answers(&[(1, 9)]));
        // technical = 9/5 = 1.8 → Software Developer raw 1.26 → 100
        assert_eq!(percentage_of(&matches, "Software Developer"), 100);
        let negative = config.score(&answers(&[(1, -5)]));
        assert!(negative.iter().all(|m| m.match_percentage == 0));
    }

    #[test]
    fn test_question_text_lookup() {
        let v = QuizVariant::TechnologyPath;
        assert_eq!(
            v.question_text(1),
            Some("I enjoy solving logic puzzles and complex problems.")
        );
        assert_eq!(v.question_text(0), None);
        assert_eq!(v.question_text(11), None);
        assert_eq!(option_label(5), Some("Strongly Agree"));
        assert_eq!(option_label(6), None);
    }

    #[test]
    fn test_duplicate_quiz_ids_are_rejected() {
        let a = ScoringConfig::for_variant(QuizVariant::GeneralInterest).unwrap();
        let err = QuizRegistry::from_configs(vec![a.clone(), a]).unwrap_err();
        assert_eq!(err, ConfigurationError::DuplicateQuiz(1));
    }
}
