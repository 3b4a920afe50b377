//! Entropy sources.
//!
//! Production callers use the operating system's CSPRNG. Simulations and
//! tests use a seeded ChaCha-based generator so every run is reproducible,
//! and exact-trace tests use a scripted byte replay. A failing platform
//! entropy source aborts the process rather than degrading to a
//! non-cryptographic fallback: predictable group assignment or question
//! ordering could bias study results.

use rand::rngs::{OsRng, StdRng};
use rand::{CryptoRng, RngCore, SeedableRng};
use std::collections::VecDeque;

/// Operating-system CSPRNG, the default source for live assignment.
pub fn os_entropy() -> OsRng {
    OsRng
}

/// Deterministic CSPRNG seeded from a single `u64`, for simulations and
/// reproducible replays.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Byte-replay source for exact-trace tests.
///
/// Yields the scripted bytes in order and panics when the script runs dry,
/// which catches tests that consume more entropy than they budgeted for.
/// Implements the CSPRNG marker trait solely so it is accepted by the secure
/// entry points; it is not a cryptographic source and must never leave test
/// or diagnostic code.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    script: VecDeque<u8>,
}

impl ScriptedRng {
    pub fn new(script: impl Into<VecDeque<u8>>) -> Self {
        Self {
            script: script.into(),
        }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest.iter_mut() {
            *byte = self.script.pop_front().expect("scripted entropy exhausted");
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for ScriptedRng {}
