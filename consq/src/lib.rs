//! Immutable singly-linked sequences.
//!
//! [`Seq`] is a persistent cons list: every operation returns a new
//! sequence and leaves its inputs untouched. Suffixes are shared between
//! sequences through reference counting, so taking a tail, dropping a
//! prefix or consing onto an existing sequence is cheap.
//!
//! ```
//! use consq::{seq, Seq};
//!
//! let numbers = seq![1, 2, 3, 4];
//! assert_eq!(numbers.take(2), seq![1, 2]);
//! assert_eq!(numbers.drop(2), seq![3, 4]);
//! assert_eq!(numbers.reverse().reverse(), numbers);
//! assert_eq!(numbers.fold_left(0, |acc, x| acc + x), 10);
//! ```
//!
//! Operations that would need a valid index (such as [`Seq::lookup`])
//! check it at runtime and report [`Error::IndexOutOfRange`]. Everything
//! else is total: emptiness is reported through `Option`, never an error.
pub mod error;
mod sequence;

pub use error::{Error, Result};
pub use itertools::Either;
pub use sequence::{IntoIter, Iter, Seq};

/// An inclusive-or of two values: only the left one, only the right one, or
/// both. Produced by [`Seq::align`] for sequences of unequal length.
pub type These<A, B> = itertools::EitherOrBoth<A, B>;

/// Create a [`Seq`] from a list of elements, like `vec!`.
///
/// ```
/// use consq::seq;
///
/// let s = seq![1, 2, 3];
/// assert_eq!(s.len(), 3);
/// let empty: consq::Seq<i32> = seq![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::Seq::new()
    };
    ($($x:expr),+ $(,)?) => {
        $crate::Seq::from([$($x),+])
    };
}
