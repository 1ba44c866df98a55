use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// An immutable singly-linked sequence.
///
/// A sequence is either empty or an element followed by another sequence.
/// Cloning is O(1): the nodes are reference counted and shared. Because of
/// that sharing, no operation ever mutates a node; all of them return a new
/// sequence, reusing suffixes of their inputs where they can.
///
/// Equality, ordering and hashing are structural and element-wise.
pub struct Seq<T> {
    pub(super) head: Option<Rc<Node<T>>>,
}

pub(super) struct Node<T> {
    pub(super) value: T,
    pub(super) next: Seq<T>,
}

// a sequence is a single (nullable) pointer
static_assertions::assert_eq_size!(Seq<u64>, usize);
static_assertions::assert_eq_size!(Seq<String>, usize);

impl<T> Seq<T> {
    /// The empty sequence.
    pub const fn new() -> Self {
        Seq { head: None }
    }

    /// A new sequence with `value` in front of this one.
    ///
    /// This sequence becomes the tail of the result without being copied.
    pub fn cons(&self, value: T) -> Self {
        Self::link(value, self.clone())
    }

    /// Check whether the sequence is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// The number of elements.
    ///
    /// The length is not cached, so this walks the whole sequence.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    #[inline]
    pub(super) fn link(value: T, next: Seq<T>) -> Self {
        Seq {
            head: Some(Rc::new(Node { value, next })),
        }
    }

    #[inline]
    pub(super) fn node(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    /// Link `items` in order in front of `tail`.
    pub(super) fn from_buffer(items: Vec<T>, tail: Seq<T>) -> Self {
        items
            .into_iter()
            .rev()
            .fold(tail, |next, value| Self::link(value, next))
    }
}

impl<T> Clone for Seq<T> {
    fn clone(&self) -> Self {
        Seq {
            head: self.head.clone(),
        }
    }
}

impl<T> Default for Seq<T> {
    fn default() -> Self {
        Self::new()
    }
}

// The default drop would recurse once per node. Instead we unlink nodes one
// at a time, stopping at the first node that is still shared by another
// sequence.
impl<T> Drop for Seq<T> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(node) = link {
            match Rc::try_unwrap(node) {
                Ok(mut node) => link = node.next.head.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Seq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Seq<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Seq<T> {}

impl<T: PartialOrd> PartialOrd for Seq<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for Seq<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for Seq<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0;
        for value in self.iter() {
            value.hash(state);
            len += 1;
        }
        state.write_usize(len);
    }
}
