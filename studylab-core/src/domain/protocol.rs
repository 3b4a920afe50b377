//! Protocol content hierarchy: phases, questions, answer options.
//!
//! Each level carries its own randomization flag. The flags describe what a
//! session materialization is allowed to reorder; the canonical declared
//! order below is never mutated.

use serde::{Deserialize, Serialize};

use super::ids::{OptionId, PhaseId, QuestionId};

/// Ordered set of phases presented to a participant within a group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Protocol {
    /// Present phases in a random order instead of the declared order.
    #[serde(default)]
    pub randomize_phases: bool,

    #[serde(rename = "phase", default)]
    pub phases: Vec<Phase>,
}

/// One phase of a protocol: an ordered list of questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub id: PhaseId,

    #[serde(default)]
    pub title: String,

    /// Present this phase's questions in a random order.
    #[serde(default)]
    pub randomize_questions: bool,

    #[serde(rename = "question", default)]
    pub questions: Vec<Question>,
}

/// A single question. The kind determines which answer surface is rendered
/// and whether the question carries answer options at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,

    pub prompt: String,

    /// Present answer options in a random order. Only meaningful for the
    /// select kinds; ignored for slider and free-text questions.
    #[serde(default)]
    pub randomize_options: bool,

    #[serde(flatten)]
    pub kind: QuestionKind,
}

/// Question kind, one variant per answer surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestionKind {
    /// Pick exactly one of the listed options.
    SelectOne {
        #[serde(rename = "option", default)]
        options: Vec<AnswerOption>,
    },
    /// Pick zero or more options, optionally bounded.
    SelectMany {
        #[serde(rename = "option", default)]
        options: Vec<AnswerOption>,
        #[serde(default)]
        min_choices: Option<u32>,
        #[serde(default)]
        max_choices: Option<u32>,
    },
    /// Integer slider over an inclusive range.
    Slider { min: i64, max: i64, step: i64 },
    /// Single-line free text.
    TextShort {
        #[serde(default)]
        max_len: Option<u32>,
    },
    /// Multi-line free text.
    TextLong {
        #[serde(default)]
        max_len: Option<u32>,
    },
}

impl QuestionKind {
    /// Answer options carried by this kind, if any.
    pub fn options(&self) -> Option<&[AnswerOption]> {
        match self {
            QuestionKind::SelectOne { options } | QuestionKind::SelectMany { options, .. } => {
                Some(options.as_slice())
            }
            _ => None,
        }
    }

    /// Short name matching the serialized `kind` tag.
    pub fn name(&self) -> &'static str {
        match self {
            QuestionKind::SelectOne { .. } => "select_one",
            QuestionKind::SelectMany { .. } => "select_many",
            QuestionKind::Slider { .. } => "slider",
            QuestionKind::TextShort { .. } => "text_short",
            QuestionKind::TextLong { .. } => "text_long",
        }
    }
}

/// One selectable answer option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: OptionId,
    pub label: String,
}
