use std::collections::HashSet;

use thiserror::Error;

use crate::matching::aggregator::TraitGroup;

/// How strongly one career depends on each trait, plus its display category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CareerWeights {
    pub career: &'static str,
    pub category: &'static str,
    pub weights: &'static [(&'static str, f64)],
}

impl CareerWeights {
    #[cfg(test)]
    pub fn weight_sum(&self) -> f64 {
        self.weights.iter().map(|(_, w)| w).sum()
    }
}

/// Rejected scoring configuration. Raised at load time, never per request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("career '{career}' references unknown trait '{trait_name}'")]
    UnknownTrait {
        career: String,
        trait_name: String,
    },

    #[error("career '{career}' has invalid weight {weight} for trait '{trait_name}'")]
    InvalidWeight {
        career: String,
        trait_name: String,
        weight: f64,
    },

    #[error("career '{0}' is defined more than once")]
    DuplicateCareer(String),

    #[error("career '{career}' weights trait '{trait_name}' more than once")]
    DuplicateWeight {
        career: String,
        trait_name: String,
    },

    #[error("trait '{0}' is defined more than once")]
    DuplicateTrait(String),

    #[error("question {question_id} belongs to both '{first}' and '{second}'")]
    SharedQuestion {
        question_id: i32,
        first: String,
        second: String,
    },

    #[error("no score supplied for trait '{0}'")]
    MissingScore(String),

    #[error("quiz {0} is configured more than once")]
    DuplicateQuiz(i32),
}

/// Validated, immutable weight table for one quiz variant.
///
/// Career order is the order of definition and doubles as the ranking tie-break.
#[derive(Debug, Clone)]
pub struct CareerWeightTable {
    careers: Vec<CareerWeights>,
}

impl CareerWeightTable {
    /// Builds the table, checking every career against the variant's trait vocabulary.
    pub fn new(
        traits: &[TraitGroup],
        careers: &[CareerWeights],
    ) -> Result<Self, ConfigurationError> {
        validate_traits(traits)?;

        let known: HashSet<&str> = traits.iter().map(|t| t.name).collect();
        let mut seen_careers = HashSet::new();

        for career in careers {
            if !seen_careers.insert(career.career) {
                return Err(ConfigurationError::DuplicateCareer(
                    career.career.to_string(),
                ));
            }

            let mut seen_traits = HashSet::new();
            for &(trait_name, weight) in career.weights {
                if !known.contains(trait_name) {
                    return Err(ConfigurationError::UnknownTrait {
                        career: career.career.to_string(),
                        trait_name: trait_name.to_string(),
                    });
                }
                if !weight.is_finite() || weight < 0.0 {
                    return Err(ConfigurationError::InvalidWeight {
                        career: career.career.to_string(),
                        trait_name: trait_name.to_string(),
                        weight,
                    });
                }
                if !seen_traits.insert(trait_name) {
                    return Err(ConfigurationError::DuplicateWeight {
                        career: career.career.to_string(),
                        trait_name: trait_name.to_string(),
                    });
                }
            }
        }

        Ok(Self {
            careers: careers.to_vec(),
        })
    }

    pub fn careers(&self) -> &[CareerWeights] {
        &self.careers
    }

    pub fn len(&self) -> usize {
        self.careers.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.careers.is_empty()
    }

    /// Every trait name referenced by at least one career.
    pub fn referenced_traits(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.careers
            .iter()
            .flat_map(|c| c.weights.iter().map(|&(name, _)| name))
    }
}

fn validate_traits(traits: &[TraitGroup]) -> Result<(), ConfigurationError> {
    let mut names = HashSet::new();
    let mut owners: Vec<(i32, &str)> = Vec::new();

    for group in traits {
        if !names.insert(group.name) {
            return Err(ConfigurationError::DuplicateTrait(group.name.to_string()));
        }
        for &question_id in group.question_ids {
            if let Some(&(_, first)) = owners.iter().find(|(q, _)| *q == question_id) {
                return Err(ConfigurationError::SharedQuestion {
                    question_id,
                    first: first.to_string(),
                    second: group.name.to_string(),
                });
            }
            owners.push((question_id, group.name));
        }
    }
    Ok(())
}
