//! A skiplist is a way of storing elements in such a way that elements can be
//! efficiently accessed, inserted and removed, all in `O(log(n))` on average.
//!
//! Conceptually, a skiplist resembles something like:
//!
//! ```text
//! <head> ----------> [2] --------------------------------------------------> [9] ---------->
//! <head> ----------> [2] ------------------------------------[7] ----------> [9] ---------->
//! <head> ----------> [2] ----------> [4] ------------------> [7] ----------> [9] --> [10] ->
//! <head> --> [1] --> [2] --> [3] --> [4] --> [5] --> [6] --> [7] --> [8] --> [9] --> [10] ->
//! ```
//!
//! where each node `[x]` has references to nodes further down the list,
//! allowing the algorithm to effectively skip ahead.
//!
//! The [`RankedSkipList`] additionally records, for every link, how many
//! positions it jumps over. For the list above:
//!
//! ```text
//! <head> -2--------> [2] -7------------------------------------------------> [9] -2-------->
//! <head> -2--------> [2] -5----------------------------------[7] -2--------> [9] -2-------->
//! <head> -2--------> [2] -2--------> [4] -3----------------> [7] -2--------> [9] -1> [10] -1>
//! <head> -1> [1] -1> [2] -1> [3] -1> [4] -1> [5] -1> [6] -1> [7] -1> [8] -1> [9] -1> [10] -1>
//! ```
//!
//! Summing the lengths of the links followed while searching for a value
//! gives its rank, and following links while the running sum stays within a
//! given rank finds the value holding it. Both directions therefore run in
//! the same expected `O(log(n))` time as an ordinary search.
//!
//! The list is ordered by a [`Comparator`], which **must** be well-behaved;
//! see the [`comparator`] module for the requirements.
//!
//! # Examples
//!
//! ```
//! use ranked_skiplist::RankedSkipList;
//!
//! let mut scores = RankedSkipList::new();
//! scores.extend([72, 95, 60, 88]);
//!
//! // Third smallest score, and the position of a given score.
//! assert_eq!(scores.get_by_rank(3), Some(&88));
//! assert_eq!(scores.rank(&95), Some(4));
//!
//! assert_eq!(scores.remove(&72), Some(72));
//! assert_eq!(scores.rank(&95), Some(3));
//! ```

pub mod comparator;
pub mod level_generator;
mod ranked_skiplist;
mod skipnode;

pub use comparator::{Comparator, Natural, Reverse};
pub use level_generator::{
    Geometric, GeometricError, LevelGenerator,
    geometric::{DEFAULT_MAX_LEVEL_CAP, DEFAULT_PROBABILITY},
};
pub use ranked_skiplist::{InsertError, RankedSkipList};
pub use skipnode::Iter;
