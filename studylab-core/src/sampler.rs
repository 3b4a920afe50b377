//! Weighted group sampler.
//!
//! Maps one draw of uniform randomness to exactly one group, with selection
//! probability proportional to the group's configured weight. The cumulative
//! distribution is built once per configuration load (stable sort by
//! ascending weight, then a running decimal sum) and every `sample()` call is
//! a single `u32` draw plus a binary search.
//!
//! All weight arithmetic is `rust_decimal::Decimal`. Binary floating point is
//! deliberately absent here: summing many small fractional probabilities in
//! `f64` accumulates representation error that can move a selection boundary,
//! and the boundary placement must be identical on every load.

use rand::{CryptoRng, RngCore};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::Study;

/// Construction errors. Both are caller programming errors and are surfaced
/// at build time, never deferred to `sample()`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SamplerError {
    #[error("cannot build a sampler over an empty group list")]
    NoGroups,

    #[error("group at position {index} has negative weight {weight}")]
    NegativeWeight { index: usize, weight: Decimal },
}

#[derive(Debug, Clone)]
struct CumulativeEntry {
    /// Position of the group in the caller's declaration order.
    index: usize,
    /// Running sum of weights up to and including this group, in
    /// ascending-weight order.
    cumulative: Decimal,
}

/// Immutable sampler over one study's group weights.
///
/// Read-only after construction, so one instance may be shared freely across
/// threads and `sample()`d concurrently.
#[derive(Debug, Clone)]
pub struct WeightedGroupSampler {
    entries: Vec<CumulativeEntry>,
    total: Decimal,
}

impl WeightedGroupSampler {
    /// Build a sampler from weights in declaration order.
    ///
    /// Groups are stably sorted by ascending weight (equal weights keep their
    /// declaration order, so repeated loads of the same configuration resolve
    /// identically), then prefix-summed. `sample()` returns positions in the
    /// original declaration order.
    pub fn from_weights(weights: &[Decimal]) -> Result<Self, SamplerError> {
        if weights.is_empty() {
            return Err(SamplerError::NoGroups);
        }
        if let Some((index, &weight)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| w.is_sign_negative() && !w.is_zero())
        {
            return Err(SamplerError::NegativeWeight { index, weight });
        }

        let mut order: Vec<usize> = (0..weights.len()).collect();
        order.sort_by(|&a, &b| weights[a].cmp(&weights[b]));

        let mut entries = Vec::with_capacity(weights.len());
        let mut running = Decimal::ZERO;
        for index in order {
            running += weights[index];
            entries.push(CumulativeEntry {
                index,
                cumulative: running,
            });
        }

        Ok(Self {
            entries,
            total: running,
        })
    }

    /// Convenience constructor over a study's groups.
    pub fn for_study(study: &Study) -> Result<Self, SamplerError> {
        Self::from_weights(&study.weights())
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> Decimal {
        self.total
    }

    /// Draw one group, returning its position in declaration order.
    ///
    /// Consumes exactly one `u32` of entropy. Never fails.
    pub fn sample<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R) -> usize {
        let target = target_from_draw(rng.next_u32()) * self.total;
        self.index_for_target(target)
    }

    /// Resolve a target in `[0, total)` to a group position.
    ///
    /// Finds the left-most cumulative sum STRICTLY greater than the target: a
    /// target landing exactly on a cumulative boundary belongs to the group
    /// after the boundary point. A target at or past the final cumulative sum
    /// resolves to the last (largest-weight) group, so the operation is total
    /// even on out-of-contract input.
    pub fn index_for_target(&self, target: Decimal) -> usize {
        let pos = self
            .entries
            .partition_point(|entry| entry.cumulative <= target);
        match self.entries.get(pos) {
            Some(entry) => entry.index,
            None => self.entries[self.entries.len() - 1].index,
        }
    }
}

/// Map a uniform `u32` draw to a decimal target in `[0, 1)`.
///
/// The draw's base-10 digits are reversed and read as the fractional digits
/// of a decimal: `120` becomes `0.021`. The low-order digits of a uniform
/// `u32` are themselves uniform, so the reversed string puts uniform digits
/// in the leading fractional positions. This exact mapping is the canonical
/// one; tests replay it digit for digit.
pub fn target_from_draw(draw: u32) -> Decimal {
    let mut mantissa: i64 = 0;
    let mut scale: u32 = 0;
    let mut rest = draw;
    while rest > 0 {
        mantissa = mantissa * 10 + i64::from(rest % 10);
        rest /= 10;
        scale += 1;
    }
    Decimal::new(mantissa, scale)
}
