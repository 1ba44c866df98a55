use std::ops::{Add, Mul};

use num_traits::{One, Zero};

use super::core::Seq;

impl<T> Seq<T> {
    /// Right-associative fold: `f(x1, f(x2, ... f(xn, seed)))`.
    pub fn fold_right<B, F>(&self, seed: B, mut f: F) -> B
    where
        F: FnMut(&T, B) -> B,
    {
        // a singly-linked list can only be walked forward, so remember the
        // elements to visit them back to front
        let items: Vec<&T> = self.iter().collect();
        items
            .into_iter()
            .rev()
            .fold(seed, |acc, value| f(value, acc))
    }

    /// Left-associative fold: `f(... f(f(seed, x1), x2) ..., xn)`.
    pub fn fold_left<B, F>(&self, seed: B, f: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.iter().fold(seed, f)
    }

    /// Map every element to a sequence and concatenate the results.
    pub fn concat_map<U, F>(&self, f: F) -> Seq<U>
    where
        U: Clone,
        F: FnMut(&T) -> Seq<U>,
    {
        self.map(f).concat()
    }

    /// Whether `predicate` holds for at least one element.
    pub fn any<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }

    /// Whether `predicate` holds for every element.
    pub fn all<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().all(predicate)
    }

    /// The sum of the elements, `0` for the empty sequence.
    pub fn sum(&self) -> T
    where
        T: Clone + Zero + Add<Output = T>,
    {
        self.fold_right(T::zero(), |value, acc| value.clone() + acc)
    }

    /// The product of the elements, `1` for the empty sequence.
    pub fn product(&self) -> T
    where
        T: Clone + One + Mul<Output = T>,
    {
        self.fold_right(T::one(), |value, acc| value.clone() * acc)
    }
}

impl<T: Clone> Seq<Seq<T>> {
    /// Concatenate all sequences in order.
    ///
    /// The last sequence is shared by the result.
    pub fn concat(&self) -> Seq<T> {
        let mut parts: Vec<&Seq<T>> = self.iter().collect();
        let Some(last) = parts.pop() else {
            return Seq::new();
        };
        let mut items = Vec::new();
        for part in parts {
            items.extend(part.iter().cloned());
        }
        Seq::from_buffer(items, last.clone())
    }
}

impl Seq<bool> {
    /// Conjunction of all elements; `true` when empty.
    pub fn and(&self) -> bool {
        self.fold_right(true, |value, acc| *value && acc)
    }

    /// Disjunction of all elements; `false` when empty.
    pub fn or(&self) -> bool {
        self.fold_right(false, |value, acc| *value || acc)
    }
}
