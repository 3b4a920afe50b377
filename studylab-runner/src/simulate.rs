//! Assignment simulation — repeated draws for distribution auditing.
//!
//! Every simulated participant gets an independent RNG derived from the seed
//! hierarchy, so the work fans out over rayon without sharing any mutable
//! state and the aggregate is identical for any thread count.

use rayon::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use studylab_core::domain::{GroupId, Study, StudyId};
use studylab_core::manifest::StudyManifest;
use studylab_core::sampler::{SamplerError, WeightedGroupSampler};

use crate::seeds::SeedHierarchy;

/// Simulation parameters.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationConfig {
    pub draws: u64,
    pub master_seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            draws: 10_000,
            master_seed: 42,
        }
    }
}

/// Expected vs observed share for one group.
#[derive(Debug, Clone, Serialize)]
pub struct GroupFrequency {
    pub group: GroupId,
    pub weight: Decimal,
    /// Configured share: weight / total.
    pub expected: f64,
    /// Number of simulated participants assigned to this group.
    pub observed: u64,
    /// Empirical share: observed / draws.
    pub frequency: f64,
}

impl GroupFrequency {
    pub fn deviation(&self) -> f64 {
        self.frequency - self.expected
    }
}

/// Aggregated result of one simulation run.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub study: StudyId,
    pub config_hash: String,
    pub draws: u64,
    pub master_seed: u64,
    pub groups: Vec<GroupFrequency>,
    pub max_abs_deviation: f64,
}

/// Run `config.draws` independent assignments against the study's sampler
/// and aggregate per-group frequencies.
pub fn simulate_assignments(
    study: &Study,
    config: &SimulationConfig,
) -> Result<SimulationReport, SamplerError> {
    let sampler = WeightedGroupSampler::for_study(study)?;
    let manifest = StudyManifest::for_study(study);
    let seeds = SeedHierarchy::new(config.master_seed);
    let group_count = study.groups.len();

    let counts: Vec<u64> = (0..config.draws)
        .into_par_iter()
        .fold(
            || vec![0u64; group_count],
            |mut acc, participant| {
                let mut rng = seeds.rng_for(&manifest.config_hash, participant);
                acc[sampler.sample(&mut rng)] += 1;
                acc
            },
        )
        .reduce(
            || vec![0u64; group_count],
            |mut left, right| {
                for (slot, count) in left.iter_mut().zip(right) {
                    *slot += count;
                }
                left
            },
        );

    let total = sampler.total_weight();
    let groups: Vec<GroupFrequency> = study
        .groups
        .iter()
        .zip(&counts)
        .map(|(group, &observed)| {
            let expected = if total.is_zero() {
                0.0
            } else {
                (group.weight / total).to_f64().unwrap_or(0.0)
            };
            let frequency = if config.draws == 0 {
                0.0
            } else {
                observed as f64 / config.draws as f64
            };
            GroupFrequency {
                group: group.id.clone(),
                weight: group.weight,
                expected,
                observed,
                frequency,
            }
        })
        .collect();

    let max_abs_deviation = groups
        .iter()
        .map(|g| g.deviation().abs())
        .fold(0.0, f64::max);

    Ok(SimulationReport {
        study: study.id.clone(),
        config_hash: manifest.config_hash,
        draws: config.draws,
        master_seed: config.master_seed,
        groups,
        max_abs_deviation,
    })
}
