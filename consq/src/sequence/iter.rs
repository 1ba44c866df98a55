use std::iter::FusedIterator;
use std::rc::Rc;

use super::core::{Node, Seq};

/// An iterator over references to the elements of a sequence.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { next: self.next }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.next.node();
            &node.value
        })
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the elements of a sequence.
///
/// Elements are moved out of nodes that no other sequence refers to, and
/// cloned out of shared ones.
pub struct IntoIter<T> {
    rest: Seq<T>,
}

impl<T: Clone> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let node = self.rest.head.take()?;
        match Rc::try_unwrap(node) {
            Ok(Node { value, next }) => {
                self.rest = next;
                Some(value)
            }
            Err(node) => {
                self.rest = node.next.clone();
                Some(node.value.clone())
            }
        }
    }
}

impl<T: Clone> FusedIterator for IntoIter<T> {}

impl<T> Seq<T> {
    /// Iterate over the elements in order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { next: self.node() }
    }

    /// Collect the elements into a `Vec`, in order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<'a, T> IntoIterator for &'a Seq<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> IntoIterator for Seq<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { rest: self }
    }
}

impl<T> FromIterator<T> for Seq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Seq::from_buffer(iter.into_iter().collect(), Seq::new())
    }
}

impl<T> From<Vec<T>> for Seq<T> {
    fn from(items: Vec<T>) -> Self {
        Seq::from_buffer(items, Seq::new())
    }
}

impl<T, const N: usize> From<[T; N]> for Seq<T> {
    fn from(items: [T; N]) -> Self {
        items
            .into_iter()
            .rev()
            .fold(Seq::new(), |next, value| Seq::link(value, next))
    }
}
