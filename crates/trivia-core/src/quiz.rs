//! Quiz selection: pick one unseen question at random.
//!
//! Randomness comes from a [`RandomSource`] so callers can substitute a
//! deterministic source in tests.

use rand_core::{OsRng, RngCore as _};

use crate::question::Question;

// ─── Random source ───────────────────────────────────────────────────────────

/// A source of uniformly distributed indices.
pub trait RandomSource: Send + Sync {
  /// Return an index in `0..len`. `len` is never zero.
  fn index(&self, len: usize) -> usize;
}

/// [`RandomSource`] backed by the operating system's CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
  fn index(&self, len: usize) -> usize {
    debug_assert!(len > 0);
    let len = len as u64;
    // Reject the top `2^64 mod len` values so every index is equally likely.
    let rem = (u64::MAX % len + 1) % len;
    let max = u64::MAX - rem;
    let mut rng = OsRng;
    loop {
      let v = rng.next_u64();
      if v <= max {
        return (v % len) as usize;
      }
    }
  }
}

// ─── Selection ───────────────────────────────────────────────────────────────

/// Choose one of `candidates`, or `None` when the round is exhausted.
pub fn pick_question(
  mut candidates: Vec<Question>,
  rng: &dyn RandomSource,
) -> Option<Question> {
  if candidates.is_empty() {
    return None;
  }
  let i = rng.index(candidates.len()).min(candidates.len() - 1);
  Some(candidates.swap_remove(i))
}
