//! Study configuration loading and validation.
//!
//! Studies are TOML files. Weights are written as strings
//! (`weight = "0.35"`) so the decimal values survive parsing exactly.
//! Validation runs once at load time, before any sampler is built; the
//! sampler itself re-checks only the two conditions it owns (empty list,
//! negative weight).

use rust_decimal::Decimal;
use std::collections::BTreeSet;
use std::path::Path;
use thiserror::Error;

use crate::domain::{GroupId, PhaseId, QuestionId, QuestionKind, Study, StudyId};

/// Structured errors for study configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read study config '{path}': {message}")]
    Io { path: String, message: String },

    #[error("parse study config TOML: {0}")]
    Parse(String),

    #[error("study '{study}' declares no groups")]
    NoGroups { study: StudyId },

    #[error("group '{group}' has negative weight {weight}")]
    NegativeWeight { group: GroupId, weight: Decimal },

    #[error("group weights sum to {actual}, expected {expected}")]
    WeightSumMismatch { expected: Decimal, actual: Decimal },

    #[error("duplicate group id '{0}'")]
    DuplicateGroupId(GroupId),

    #[error("duplicate phase id '{phase}' in group '{group}'")]
    DuplicatePhaseId { group: GroupId, phase: PhaseId },

    #[error("duplicate question id '{question}' in phase '{phase}'")]
    DuplicateQuestionId {
        phase: PhaseId,
        question: QuestionId,
    },

    #[error("select question '{question}' has no options")]
    NoOptions { question: QuestionId },

    #[error("slider question '{question}' has invalid range [{min}, {max}] step {step}")]
    InvalidSliderRange {
        question: QuestionId,
        min: i64,
        max: i64,
        step: i64,
    },
}

impl Study {
    /// Parse a study from a TOML string. Does not validate.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Parse a study from a TOML file. Does not validate.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate in one step; the usual entry point.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let study = Self::from_file(path)?;
        study.validate()?;
        Ok(study)
    }

    /// Check the configuration invariants the sampler and materializer rely
    /// on. First violation wins.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.groups.is_empty() {
            return Err(ConfigError::NoGroups {
                study: self.id.clone(),
            });
        }

        let mut group_ids = BTreeSet::new();
        let mut sum = Decimal::ZERO;

        for group in &self.groups {
            if group.weight.is_sign_negative() && !group.weight.is_zero() {
                return Err(ConfigError::NegativeWeight {
                    group: group.id.clone(),
                    weight: group.weight,
                });
            }
            if !group_ids.insert(&group.id) {
                return Err(ConfigError::DuplicateGroupId(group.id.clone()));
            }
            sum += group.weight;

            let mut phase_ids = BTreeSet::new();
            for phase in &group.protocol.phases {
                if !phase_ids.insert(&phase.id) {
                    return Err(ConfigError::DuplicatePhaseId {
                        group: group.id.clone(),
                        phase: phase.id.clone(),
                    });
                }

                let mut question_ids = BTreeSet::new();
                for question in &phase.questions {
                    if !question_ids.insert(&question.id) {
                        return Err(ConfigError::DuplicateQuestionId {
                            phase: phase.id.clone(),
                            question: question.id.clone(),
                        });
                    }
                    validate_kind(&question.id, &question.kind)?;
                }
            }
        }

        if sum != self.total_weight {
            return Err(ConfigError::WeightSumMismatch {
                expected: self.total_weight,
                actual: sum,
            });
        }

        Ok(())
    }
}

fn validate_kind(id: &QuestionId, kind: &QuestionKind) -> Result<(), ConfigError> {
    match kind {
        QuestionKind::SelectOne { options } | QuestionKind::SelectMany { options, .. } => {
            if options.is_empty() {
                return Err(ConfigError::NoOptions {
                    question: id.clone(),
                });
            }
        }
        QuestionKind::Slider { min, max, step } => {
            if min >= max || *step <= 0 {
                return Err(ConfigError::InvalidSliderRange {
                    question: id.clone(),
                    min: *min,
                    max: *max,
                    step: *step,
                });
            }
        }
        QuestionKind::TextShort { .. } | QuestionKind::TextLong { .. } => {}
    }
    Ok(())
}
