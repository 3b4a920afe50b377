//! Study manifest — deterministic configuration fingerprint.
//!
//! The fingerprint is a BLAKE3 hash over the canonical JSON serialization of
//! the full study (ids, weights as exact decimal strings, randomization
//! flags, question kinds). It identifies a configuration in reports and
//! seeds the simulation hierarchy, so it must be stable across platforms,
//! builds, and repeated loads.

use serde::{Deserialize, Serialize};

use crate::domain::{Study, StudyId};

/// Fingerprint record for a loaded study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyManifest {
    pub study: StudyId,
    pub group_count: usize,
    pub config_hash: String,
}

impl StudyManifest {
    pub fn for_study(study: &Study) -> Self {
        Self {
            study: study.id.clone(),
            group_count: study.groups.len(),
            config_hash: compute_hash(study),
        }
    }

    /// True if the manifest still matches the given configuration.
    pub fn verify(&self, study: &Study) -> bool {
        self.study == study.id && self.config_hash == compute_hash(study)
    }
}

/// Canonical BLAKE3 hash of a study configuration.
///
/// Serde struct fields serialize in declaration order and decimal weights
/// serialize as exact strings, so the JSON form is canonical without any
/// extra normalization pass.
pub fn compute_hash(study: &Study) -> String {
    let canonical = serde_json::to_string(study).expect("study configuration serializes to JSON");
    blake3::hash(canonical.as_bytes()).to_hex().to_string()
}
