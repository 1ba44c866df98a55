//! A sequence is an immutable singly-linked list of elements.
//!
//! The type itself lives in `core`; the operations are spread out over
//! the other modules by family, each adding an `impl` block to `Seq`.
//!
//! No operation here recurses over the structure of a sequence. Results are
//! collected front to back into a buffer and then linked from the back onto
//! a tail, which is often a suffix shared with the input.
mod core;
mod creation;
mod fold;
mod iter;
mod reverse;
#[cfg(feature = "serde")]
mod serialization;
mod slice;
mod split;
mod transform;
mod update;

pub use self::core::Seq;
pub use self::iter::{IntoIter, Iter};
