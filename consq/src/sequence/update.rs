use crate::error;

use super::core::{Node, Seq};

impl<T: Clone> Seq<T> {
    /// Replace the element at `index` with `f` applied to it.
    ///
    /// The elements after `index` are shared with this sequence.
    pub fn update_at<F>(&self, index: usize, f: F) -> error::Result<Seq<T>>
    where
        F: FnOnce(&T) -> T,
    {
        let (prefix, node) = self.split_before(index)?;
        Ok(Seq::from_buffer(
            prefix,
            Seq::link(f(&node.value), node.next.clone()),
        ))
    }

    /// Replace the element at `index` with `value`.
    pub fn set_at(&self, index: usize, value: T) -> error::Result<Seq<T>> {
        self.update_at(index, |_| value)
    }

    /// Remove the element at `index`, making the sequence one shorter.
    pub fn remove_at(&self, index: usize) -> error::Result<Seq<T>> {
        let (prefix, node) = self.split_before(index)?;
        Ok(Seq::from_buffer(prefix, node.next.clone()))
    }

    /// Insert `value` so that it ends up at `index`.
    ///
    /// Unlike the other positional operations `index` may equal the
    /// length, which appends `value` at the end.
    pub fn insert_at(&self, index: usize, value: T) -> error::Result<Seq<T>> {
        let mut prefix = Vec::new();
        let mut cursor = self;
        while prefix.len() < index {
            match cursor.node() {
                Some(node) => {
                    prefix.push(node.value.clone());
                    cursor = &node.next;
                }
                None => {
                    return Err(error::Error::IndexOutOfRange {
                        index,
                        len: prefix.len(),
                    })
                }
            }
        }
        Ok(Seq::from_buffer(prefix, cursor.cons(value)))
    }

    // copies of the elements before `index`, and the node at `index`
    fn split_before(&self, index: usize) -> error::Result<(Vec<T>, &Node<T>)> {
        let mut prefix = Vec::new();
        let mut cursor = self;
        loop {
            match cursor.node() {
                Some(node) if prefix.len() == index => return Ok((prefix, node)),
                Some(node) => {
                    prefix.push(node.value.clone());
                    cursor = &node.next;
                }
                None => {
                    return Err(error::Error::IndexOutOfRange {
                        index,
                        len: prefix.len(),
                    })
                }
            }
        }
    }
}
