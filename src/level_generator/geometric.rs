//! Geometric level generator.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use thiserror::Error;

use crate::level_generator::LevelGenerator;

/// Default number of levels above level 0 which a node may reach.
pub const DEFAULT_MAX_LEVEL_CAP: usize = 16;

/// Default probability that a node present at level `$n$` is also present at
/// level `$n+1$`.
pub const DEFAULT_PROBABILITY: f64 = 0.5;

#[derive(Error, Debug, PartialEq, Eq)]
/// Errors that can occur when creating a [`Geometric`] level generator.
#[expect(
    clippy::module_name_repetitions,
    reason = "Using 'Error' would be too generic and may cause confusion."
)]
#[non_exhaustive]
pub enum GeometricError {
    /// The maximum number of levels must be non-zero.
    #[error("max must be non-zero.")]
    ZeroMax,
    /// The probability `$p$` must be in the range `$(0, 1)$`.
    #[error("p must be in (0, 1).")]
    InvalidProbability,
}

/// A level generator using a geometric distribution.
///
/// This distribution assumes that if a node is present at some level `$n$`,
/// then the probability that it is present at level `$n+1$` is some constant
/// `$p \in (0, 1)$`, so that `$P(\text{level} \geq k) = p^k$`. Levels which
/// would exceed the cap are folded into the cap itself.
#[derive(Debug, Clone)]
pub struct Geometric {
    /// The total number of levels that are assumed to exist.
    total: usize,
    /// The probability that a node is present in the next level.
    p: f64,
    /// The random number generator.
    rng: SmallRng,
}

impl Geometric {
    /// Create a new geometric level generator with `total` number of levels,
    /// and `p` as the probability that a given node is present in the next
    /// level.
    ///
    /// # Errors
    ///
    /// `p` must be strictly between 0 and 1, and `total` must be at least 1.
    #[inline]
    pub fn new(total: usize, p: f64) -> Result<Self, GeometricError> {
        Self::validate(total, p)?;
        Ok(Self::build(total, p, SmallRng::from_rng(&mut rand::rng())))
    }

    /// Create a new geometric level generator whose sequence of levels is
    /// fully determined by `seed`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Geometric::new`].
    #[inline]
    pub fn seeded(total: usize, p: f64, seed: u64) -> Result<Self, GeometricError> {
        Self::validate(total, p)?;
        Ok(Self::build(total, p, SmallRng::seed_from_u64(seed)))
    }

    /// The probability that a node is present in the next level.
    #[inline]
    #[must_use]
    pub fn probability(&self) -> f64 {
        self.p
    }

    /// Generator with `total` levels and the default probability.
    ///
    /// A zero `total` is raised to 1.
    pub(crate) fn with_total(total: usize) -> Self {
        Self::build(
            total.max(1),
            DEFAULT_PROBABILITY,
            SmallRng::from_rng(&mut rand::rng()),
        )
    }

    fn validate(total: usize, p: f64) -> Result<(), GeometricError> {
        if total == 0 {
            return Err(GeometricError::ZeroMax);
        }
        if !(0.0 < p && p < 1.0) {
            return Err(GeometricError::InvalidProbability);
        }
        Ok(())
    }

    fn build(total: usize, p: f64, rng: SmallRng) -> Self {
        Geometric { total, p, rng }
    }
}

impl Default for Geometric {
    /// A generator with `DEFAULT_MAX_LEVEL_CAP + 1` levels and `$p = 1/2$`.
    #[inline]
    fn default() -> Self {
        Self::with_total(DEFAULT_MAX_LEVEL_CAP + 1)
    }
}

impl LevelGenerator for Geometric {
    #[inline]
    fn total(&self) -> usize {
        self.total
    }

    /// Generate a level for a new node using a geometric distribution.
    ///
    /// A single uniform variate `$u \in (0, 1]$` is drawn, and the level is
    /// the number of successive powers `$p, p^2, \ldots$` which exceed it,
    /// truncated at `$\text{total} - 1$`. This is equivalent to flipping a
    /// biased coin until it first comes up tails.
    #[inline]
    #[expect(clippy::float_arithmetic, reason = "Comparing against powers of p")]
    fn level(&mut self) -> usize {
        let u = 1.0 - self.rng.random::<f64>();
        let mut level = 0;
        let mut threshold = self.p;
        while threshold > u && level + 1 < self.total {
            level += 1;
            threshold *= self.p;
        }
        level
    }
}
