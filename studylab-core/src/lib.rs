//! StudyLab Core — randomized group assignment and protocol ordering.
//!
//! This crate contains the randomization heart of the platform:
//! - Domain types (studies, groups, protocols, phases, questions, options)
//! - Weighted group sampler over exact decimal cumulative sums
//! - Cryptographically seeded Fisher–Yates shuffle with unbiased index draws
//! - Study configuration loading, validation, and BLAKE3 fingerprinting
//! - Per-participant session materialization (presentation-order plans)

pub mod config;
pub mod domain;
pub mod entropy;
pub mod manifest;
pub mod sampler;
pub mod session;
pub mod shuffle;
