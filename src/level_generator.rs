//! Skiplists use a probabilistic distribution of nodes over the internal
//! levels, whereby the lowest level (level 0) contains all the nodes, and each
//! level `$n > 0$` will contain a random subset of the nodes on level `$n - 1$`.
//!
//! Most commonly, a geometric distribution is used whereby the chance that a
//! node occupies level `$n$` is `$p$` times the chance of occupying level
//! `$n-1$` (with `$0 < p < 1$`).
//!
//! It is very unlikely that this will need to be changed as the default should
//! suffice, but if need be custom level generators can be implemented. Any
//! sampler works so long as it only ever returns levels below
//! [`total`][LevelGenerator::total]; the rank bookkeeping of the list does not
//! depend on the distribution, only the expected running time does.

pub mod geometric;

pub use geometric::{Geometric, GeometricError};

/// Upon the insertion of a new node in the list, the node is replicated to high
/// levels with a certain probability as determined by a [`LevelGenerator`].
pub trait LevelGenerator {
    /// The total number of levels that are assumed to exist.
    ///
    /// The highest level a node may reach (the level cap) is `total() - 1`.
    #[must_use]
    fn total(&self) -> usize;

    /// Generate a random level for a new node in the range `[0, total)`.
    ///
    /// This function should _never_ return a level greater or equal to
    /// [`total`][LevelGenerator::total]. The list clamps any such level to the
    /// cap rather than trusting it.
    #[must_use]
    fn level(&mut self) -> usize;
}

impl<G: LevelGenerator + ?Sized> LevelGenerator for &mut G {
    #[inline]
    fn total(&self) -> usize {
        (**self).total()
    }

    #[inline]
    fn level(&mut self) -> usize {
        (**self).level()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Geometric, LevelGenerator};

    /// Level generators must be usable through a mutable reference so that a
    /// caller can keep ownership of a seeded generator.
    #[test]
    fn by_mut_ref() -> anyhow::Result<()> {
        let mut generator = Geometric::seeded(4, 0.5, 7)?;
        let mut twin = Geometric::seeded(4, 0.5, 7)?;
        let by_ref = &mut generator;
        assert_eq!(by_ref.total(), 4);
        for _ in 0..100 {
            assert_eq!(by_ref.level(), twin.level());
        }
        Ok(())
    }
}
