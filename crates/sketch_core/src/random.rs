//! Pseudo-random integers
//!
//! A xorshift32 generator is enough for picking colors and list items. It is
//! seedable so callers (and tests) can reproduce a sequence.

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hasher};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// Create a generator from `seed`. A zero seed would lock the sequence at
    /// zero, so it is replaced with a fixed non-zero constant.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 0x9E37_79B9 } else { seed },
        }
    }

    /// Seed from the process hasher keys mixed with the wall clock.
    pub fn from_entropy() -> Self {
        let mut hasher = RandomState::new().build_hasher();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        hasher.write_u128(nanos);
        let h = hasher.finish();
        Self::new((h ^ (h >> 32)) as u32)
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / (u32::MAX as f64 + 1.0)
    }
}

/// Uniform integer in the inclusive interval spanned by `a` and `b`.
pub fn random_int(rng: &mut Xorshift32, a: i64, b: i64) -> i64 {
    let lo = a.min(b);
    let span = (a.max(b) - lo + 1) as f64;
    lo + (rng.next_f64() * span).floor() as i64
}

/// Pick one item uniformly. `None` for an empty slice.
pub fn choose<'a, T>(rng: &mut Xorshift32, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let idx = random_int(rng, 0, items.len() as i64 - 1) as usize;
    items.get(idx)
}
