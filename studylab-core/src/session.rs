//! Session materialization — one participant's presentation plan.
//!
//! Materializing a session samples a group, then fixes the presentation
//! order of phases, questions, and answer options for every level whose
//! configuration opts into randomization. The plan carries identifiers only;
//! the canonical declared order in the `Study` is never mutated, and the
//! shuffle runs exactly once per materialization. Whether a plan is cached
//! or re-materialized later is the caller's policy, not this module's.

use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::domain::{Group, GroupId, OptionId, Phase, PhaseId, Question, QuestionId, Study, StudyId};
use crate::sampler::WeightedGroupSampler;
use crate::shuffle::secure_shuffle;

/// Result of assigning a participant to a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Position of the chosen group in the study's declaration order.
    pub group_index: usize,
    pub group: GroupId,
}

/// Presentation order for one participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPlan {
    pub study: StudyId,
    pub group: GroupId,
    pub phases: Vec<PhasePlan>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhasePlan {
    pub phase: PhaseId,
    pub questions: Vec<QuestionPlan>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionPlan {
    pub question: QuestionId,
    /// Option presentation order. Empty for slider and free-text kinds.
    pub options: Vec<OptionId>,
}

/// Assign a participant to a group. Consumes one `u32` of entropy.
pub fn assign<R: RngCore + CryptoRng + ?Sized>(
    study: &Study,
    sampler: &WeightedGroupSampler,
    rng: &mut R,
) -> Assignment {
    debug_assert_eq!(sampler.len(), study.groups.len());
    let group_index = sampler.sample(rng);
    Assignment {
        group_index,
        group: study.groups[group_index].id.clone(),
    }
}

/// Assign a group and fix the full presentation order for one session.
pub fn materialize<R: RngCore + CryptoRng + ?Sized>(
    study: &Study,
    sampler: &WeightedGroupSampler,
    rng: &mut R,
) -> SessionPlan {
    let assignment = assign(study, sampler, rng);
    let group = &study.groups[assignment.group_index];
    SessionPlan {
        study: study.id.clone(),
        group: group.id.clone(),
        phases: plan_protocol(group, rng),
    }
}

fn plan_protocol<R: RngCore + CryptoRng + ?Sized>(group: &Group, rng: &mut R) -> Vec<PhasePlan> {
    let protocol = &group.protocol;
    // Shuffle a working copy of positions; the declared order stays put.
    let mut order: Vec<usize> = (0..protocol.phases.len()).collect();
    if protocol.randomize_phases {
        secure_shuffle(&mut order, rng);
    }
    order
        .into_iter()
        .map(|i| plan_phase(&protocol.phases[i], rng))
        .collect()
}

fn plan_phase<R: RngCore + CryptoRng + ?Sized>(phase: &Phase, rng: &mut R) -> PhasePlan {
    let mut order: Vec<usize> = (0..phase.questions.len()).collect();
    if phase.randomize_questions {
        secure_shuffle(&mut order, rng);
    }
    PhasePlan {
        phase: phase.id.clone(),
        questions: order
            .into_iter()
            .map(|i| plan_question(&phase.questions[i], rng))
            .collect(),
    }
}

fn plan_question<R: RngCore + CryptoRng + ?Sized>(
    question: &Question,
    rng: &mut R,
) -> QuestionPlan {
    let options = match question.kind.options() {
        Some(declared) => {
            let mut ids: Vec<OptionId> = declared.iter().map(|o| o.id.clone()).collect();
            if question.randomize_options {
                secure_shuffle(&mut ids, rng);
            }
            ids
        }
        None => Vec::new(),
    };
    QuestionPlan {
        question: question.id.clone(),
        options,
    }
}
