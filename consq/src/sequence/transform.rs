// Operations that transform one sequence or combine several into one.

use itertools::{Either, Itertools};

use crate::These;

use super::core::Seq;

impl<T> Seq<T> {
    /// Apply `f` to every element.
    pub fn map<U, F>(&self, f: F) -> Seq<U>
    where
        F: FnMut(&T) -> U,
    {
        self.iter().map(f).collect()
    }

    /// Apply `f` to every element and keep the results that are present.
    pub fn map_option<U, F>(&self, f: F) -> Seq<U>
    where
        F: FnMut(&T) -> Option<U>,
    {
        self.iter().filter_map(f).collect()
    }

    /// All elements of this sequence followed by all elements of `other`.
    ///
    /// `other` is shared by the result, only this sequence is copied.
    pub fn append(&self, other: &Seq<T>) -> Seq<T>
    where
        T: Clone,
    {
        Seq::from_buffer(self.to_vec(), other.clone())
    }

    /// Put `separator` between each pair of neighbouring elements.
    pub fn intersperse(&self, separator: T) -> Seq<T>
    where
        T: Clone,
    {
        let mut items = Vec::new();
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                items.push(separator.clone());
            }
            items.push(value.clone());
        }
        items.into()
    }

    /// Combine every element of this sequence with every element of
    /// `other`, in row-major order.
    pub fn cartesian_product_with<U, V, F>(&self, other: &Seq<U>, mut f: F) -> Seq<V>
    where
        F: FnMut(&T, &U) -> V,
    {
        let mut items = Vec::new();
        for a in self.iter() {
            for b in other.iter() {
                items.push(f(a, b));
            }
        }
        items.into()
    }

    /// Every pair of an element of this sequence and one of `other`, in
    /// row-major order.
    pub fn cartesian_product<U>(&self, other: &Seq<U>) -> Seq<(T, U)>
    where
        T: Clone,
        U: Clone,
    {
        self.cartesian_product_with(other, |a, b| (a.clone(), b.clone()))
    }

    /// Combine two sequences position by position, up to the length of
    /// the longer one.
    ///
    /// Where only this sequence has an element `f` sees `These::Left`,
    /// where only `other` has one it sees `These::Right`.
    pub fn align_with<U, V, F>(&self, other: &Seq<U>, f: F) -> Seq<V>
    where
        F: FnMut(These<&T, &U>) -> V,
    {
        self.iter().zip_longest(other.iter()).map(f).collect()
    }

    pub fn align<U>(&self, other: &Seq<U>) -> Seq<These<T, U>>
    where
        T: Clone,
        U: Clone,
    {
        self.align_with(other, |these| these.map_any(T::clone, U::clone))
    }

    /// Combine two sequences position by position, up to the length of
    /// the shorter one.
    pub fn zip_with<U, V, F>(&self, other: &Seq<U>, mut f: F) -> Seq<V>
    where
        F: FnMut(&T, &U) -> V,
    {
        self.iter().zip(other.iter()).map(|(a, b)| f(a, b)).collect()
    }

    pub fn zip<U>(&self, other: &Seq<U>) -> Seq<(T, U)>
    where
        T: Clone,
        U: Clone,
    {
        self.zip_with(other, |a, b| (a.clone(), b.clone()))
    }

    /// Split each element into a `These` and distribute the parts over two
    /// sequences. This undoes [`Seq::align_with`].
    pub fn unalign_with<A, B, F>(&self, mut f: F) -> (Seq<A>, Seq<B>)
    where
        F: FnMut(&T) -> These<A, B>,
    {
        let mut left = Vec::new();
        let mut right = Vec::new();
        for value in self.iter() {
            match f(value) {
                These::Left(a) => left.push(a),
                These::Right(b) => right.push(b),
                These::Both(a, b) => {
                    left.push(a);
                    right.push(b);
                }
            }
        }
        (left.into(), right.into())
    }

    /// Split each element into a pair and distribute the parts over two
    /// sequences of equal length. This undoes [`Seq::zip_with`].
    pub fn unzip_with<A, B, F>(&self, f: F) -> (Seq<A>, Seq<B>)
    where
        F: FnMut(&T) -> (A, B),
    {
        let (left, right): (Vec<A>, Vec<B>) = self.iter().map(f).unzip();
        (left.into(), right.into())
    }

    /// Sort each element into the left or the right sequence, keeping the
    /// relative order on each side.
    pub fn partition_sums_with<A, B, F>(&self, f: F) -> (Seq<A>, Seq<B>)
    where
        F: FnMut(&T) -> Either<A, B>,
    {
        let (left, right): (Vec<A>, Vec<B>) = self.iter().partition_map(f);
        (left.into(), right.into())
    }

    /// Merge two sequences that are each sorted according to `precedes`.
    ///
    /// `precedes(x, y)` means `x` should not come after `y`. When it holds
    /// for the two current heads the left one is taken, so elements that
    /// are equivalent keep the left sequence first. Once one side runs out
    /// the remainder of the other is shared by the result.
    pub fn merge<F>(&self, other: &Seq<T>, mut precedes: F) -> Seq<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool,
    {
        let mut items = Vec::new();
        let mut left = self;
        let mut right = other;
        loop {
            match (left.node(), right.node()) {
                (Some(l), Some(r)) => {
                    if precedes(&l.value, &r.value) {
                        items.push(l.value.clone());
                        left = &l.next;
                    } else {
                        items.push(r.value.clone());
                        right = &r.next;
                    }
                }
                (Some(_), None) => return Seq::from_buffer(items, left.clone()),
                (None, _) => return Seq::from_buffer(items, right.clone()),
            }
        }
    }
}

impl<T: Clone> Seq<Seq<T>> {
    /// Join the sequences with `separator` between each neighbouring pair.
    pub fn intercalate(&self, separator: &Seq<T>) -> Seq<T> {
        self.intersperse(separator.clone()).concat()
    }
}

impl<A: Clone, B: Clone> Seq<These<A, B>> {
    pub fn unalign(&self) -> (Seq<A>, Seq<B>) {
        self.unalign_with(These::clone)
    }
}

impl<A: Clone, B: Clone> Seq<(A, B)> {
    pub fn unzip(&self) -> (Seq<A>, Seq<B>) {
        self.unzip_with(|(a, b)| (a.clone(), b.clone()))
    }
}

impl<A: Clone, B: Clone> Seq<Either<A, B>> {
    pub fn partition_sums(&self) -> (Seq<A>, Seq<B>) {
        self.partition_sums_with(Either::clone)
    }
}
