//! Cryptographically seeded order shuffling.
//!
//! Fisher–Yates driven by raw CSPRNG bytes, with rejection sampling for the
//! per-step index draw. `random() % (max + 1)` is statistically biased
//! whenever `max + 1` does not divide the source's range, so the helper masks
//! down to the minimum bit width and redraws out-of-range values instead.

use rand::{CryptoRng, RngCore};

/// Permute `items` in place, uniformly at random.
///
/// Iterates `i` from `n-1` down to `1`, drawing `j` in `[0, i]` via
/// [`random_index`] and swapping. Sequences of length 0 or 1 are left
/// untouched and consume no entropy.
pub fn secure_shuffle<T, R: RngCore + CryptoRng + ?Sized>(items: &mut [T], rng: &mut R) {
    if items.len() < 2 {
        return;
    }
    for i in (1..items.len()).rev() {
        let j = random_index(rng, i);
        items.swap(i, j);
    }
}

/// Clone-then-shuffle convenience for callers that must keep the canonical
/// order intact (presentation order is per participant; declared order is
/// what gets persisted).
pub fn shuffled<T: Clone, R: RngCore + CryptoRng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut copy = items.to_vec();
    secure_shuffle(&mut copy, rng);
    copy
}

/// Draw a uniform integer in `[0, max]` with no modulo bias.
///
/// Draws the minimum number of whole bytes that can represent `max`, masks
/// the value down to `max`'s bit width, and redraws while the masked value
/// still exceeds `max`. The mask keeps the rejection probability below one
/// half, so the expected number of redraws per call is bounded.
pub fn random_index<R: RngCore + CryptoRng + ?Sized>(rng: &mut R, max: usize) -> usize {
    if max == 0 {
        return 0;
    }
    let bits = usize::BITS - max.leading_zeros();
    let byte_count = ((bits + 7) / 8) as usize;
    let mask: u64 = if bits >= 64 {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    };

    let mut buf = [0u8; 8];
    loop {
        rng.fill_bytes(&mut buf[..byte_count]);
        let mut value: u64 = 0;
        for &byte in &buf[..byte_count] {
            value = (value << 8) | u64::from(byte);
        }
        value &= mask;
        if value <= max as u64 {
            return value as usize;
        }
    }
}
