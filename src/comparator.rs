//! Orderings used to keep a [`RankedSkipList`][crate::RankedSkipList] sorted.
//!
//! The list never asks its values how to order themselves; instead it holds a
//! [`Comparator`] which is consulted for every comparison. Types implementing
//! [`Ord`] can use [`Natural`], and any closure of the form
//! `Fn(&T, &T) -> Ordering` is a comparator as well.
//!
//! A comparator **must** be well-behaved. Given some ordering function
//! `f(a, b)`, it must satisfy the following properties:
//!
//! - Be well defined: `f(a, b)` should always return the same value.
//! - Be anti-symmetric: `f(a, b) == Greater` iff `f(b, a) == Less`, and
//!   `f(a, b) == Equal` iff `f(b, a) == Equal`.
//! - Be transitive: if `f(a, b) == Greater` and `f(b, c) == Greater` then
//!   `f(a, c) == Greater`.
//!
//! A comparator violating these properties cannot cause memory unsafety, but
//! lookups may then miss resident values and duplicates may be admitted.

use std::{cmp::Ordering, fmt};

/// A three-way comparison strategy over values of type `T`.
pub trait Comparator<T: ?Sized> {
    /// Compare `a` with `b`.
    #[must_use]
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// The natural ordering of a type, as given by its [`Ord`] implementation.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl fmt::Debug for Natural {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Natural")
    }
}

/// The reverse of another comparator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Reverse<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reverse<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::{Comparator, Natural, Reverse};

    #[rstest]
    #[case(1, 2, Ordering::Less)]
    #[case(2, 2, Ordering::Equal)]
    #[case(3, 2, Ordering::Greater)]
    fn natural(#[case] a: i32, #[case] b: i32, #[case] expected: Ordering) {
        assert_eq!(Natural.compare(&a, &b), expected);
        assert_eq!(Reverse(Natural).compare(&a, &b), expected.reverse());
    }

    #[test]
    fn closure() {
        let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
        assert_eq!(by_len.compare(&"ab", &"c"), Ordering::Greater);
        assert_eq!(by_len.compare(&"ab", &"cd"), Ordering::Equal);
    }

    #[test]
    fn unsized_values() {
        assert_eq!(Natural.compare("abc", "abd"), Ordering::Less);
    }
}
