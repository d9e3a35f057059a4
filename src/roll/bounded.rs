//! Uniform draws over `[0, n)` from the Mersenne Twister, without modulo bias.

use super::mt::Mt19937;
use crate::config::ExtractionWidth;
use crate::seed::Seed;
use rand::{RngCore, SeedableRng};

#[enum_dispatch::enum_dispatch]
pub trait Extract {
    /// Number of high-order output bits each attempt uses.
    fn bits(&self) -> u32;

    /// Draws from `[0, n)`. `n` must be in `1..=2^bits`.
    fn extract(&self, rng: &mut dyn RngCore, n: u32) -> u32;

    fn max_range(&self) -> u64 {
        1 << self.bits()
    }
}

fn check_range<E: Extract + ?Sized>(e: &E, n: u32) {
    assert!(
        n > 0 && u64::from(n) <= e.max_range(),
        "bounded draw over {} values is outside 1..={}",
        n,
        e.max_range()
    );
}

/// 26-bit extraction by scaled division: the output space is cut into `n` equal
/// buckets and draws landing in the leftover tail are rejected.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Int26;

impl Extract for Int26 {
    fn bits(&self) -> u32 {
        26
    }

    fn extract(&self, rng: &mut dyn RngCore, n: u32) -> u32 {
        check_range(self, n);
        let bucket = self.max_range() / u64::from(n);
        loop {
            let r = u64::from(rng.next_u32() >> (32 - self.bits()));
            let q = r / bucket;
            if q < u64::from(n) {
                return q as u32;
            }
        }
    }
}

/// 31-bit extraction by rejection: draws at or above the largest multiple of `n`
/// are rejected, the rest reduced modulo `n`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Int31;

impl Extract for Int31 {
    fn bits(&self) -> u32 {
        31
    }

    fn extract(&self, rng: &mut dyn RngCore, n: u32) -> u32 {
        check_range(self, n);
        let range = self.max_range();
        let zone = range - range % u64::from(n);
        loop {
            let r = u64::from(rng.next_u32() >> (32 - self.bits()));
            if r < zone {
                return (r % u64::from(n)) as u32;
            }
        }
    }
}

#[enum_dispatch::enum_dispatch(Extract)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Extractor {
    Int26,
    Int31,
}

impl From<ExtractionWidth> for Extractor {
    fn from(width: ExtractionWidth) -> Self {
        match width {
            ExtractionWidth::Bits26 => Int26.into(),
            ExtractionWidth::Bits31 => Int31.into(),
        }
    }
}

/// A seeded Mersenne Twister paired with a bounded extraction method.
#[derive(Debug, Clone)]
pub struct BoundedRng {
    mt: Mt19937,
    extractor: Extractor,
    draws: u64,
}

impl BoundedRng {
    pub fn new(seed: Seed, width: ExtractionWidth) -> Self {
        Self {
            mt: Mt19937::from_seed(seed.get().to_le_bytes()),
            extractor: width.into(),
            draws: 0,
        }
    }

    /// A uniformly distributed value in `[0, n)`.
    ///
    /// # Panics
    /// If `n` is zero or wider than the extraction width allows.
    pub fn next(&mut self, n: u32) -> u32 {
        let value = self.extractor.extract(&mut self.mt, n);
        self.draws += 1;
        value
    }

    /// Number of bounded draws taken so far (rejected attempts are not counted).
    pub fn draws(&self) -> u64 {
        self.draws
    }

    pub fn max_range(&self) -> u64 {
        self.extractor.max_range()
    }
}
