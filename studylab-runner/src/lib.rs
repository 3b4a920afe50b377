//! StudyLab Runner — deterministic assignment simulation.
//!
//! Repeated group-assignment draws for distribution auditing:
//! - Seed hierarchy (master seed → per-participant sub-seeds via BLAKE3)
//! - Rayon-parallel simulation with per-draw independent RNGs
//! - Expected-vs-observed frequency reports, text and JSON

pub mod report;
pub mod seeds;
pub mod simulate;

pub use report::{render_json, render_text};
pub use seeds::SeedHierarchy;
pub use simulate::{simulate_assignments, GroupFrequency, SimulationConfig, SimulationReport};
