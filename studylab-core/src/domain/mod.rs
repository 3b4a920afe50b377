//! Domain types for StudyLab

pub mod ids;
pub mod protocol;
pub mod study;

pub use ids::{GroupId, OptionId, PhaseId, QuestionId, StudyId};
pub use protocol::{AnswerOption, Phase, Protocol, Question, QuestionKind};
pub use study::{Group, Study};
