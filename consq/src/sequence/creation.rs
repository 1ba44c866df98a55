// creation.rs contains the functions that build sequences from scratch or
// derive whole families of sequences (prefixes, suffixes, scans) from one.

use crate::error;

use super::core::Seq;

impl<T> Seq<T> {
    /// A sequence of one element.
    pub fn singleton(value: T) -> Self {
        Seq::link(value, Seq::new())
    }

    /// The empty sequence for `None`, a singleton otherwise.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Seq::singleton(value),
            None => Seq::new(),
        }
    }

    /// A sequence of exactly `n` copies of `value`.
    pub fn replicate(n: usize, value: T) -> Self
    where
        T: Clone,
    {
        std::iter::repeat(value).take(n).collect()
    }

    /// `[f(0), f(1), ..., f(n - 1)]`
    pub fn apply_up_to<F>(n: usize, f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        (0..n).map(f).collect()
    }

    /// `[f(n - 1), ..., f(1), f(0)]`
    pub fn apply_down_from<F>(n: usize, f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        (0..n).rev().map(f).collect()
    }

    /// A sequence of length `n` whose element at each index `i` is `f(i)`.
    ///
    /// `f` is called for the indices in ascending order.
    pub fn tabulate<F>(n: usize, mut f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        let mut items = Vec::with_capacity(n);
        for i in 0..n {
            items.push(f(i));
        }
        items.into()
    }

    /// `[x, f(x), f(f(x)), ...]`, exactly `n` elements long.
    pub fn iterate<F>(n: usize, value: T, mut f: F) -> Self
    where
        F: FnMut(&T) -> T,
    {
        if n == 0 {
            return Seq::new();
        }
        let mut items = Vec::with_capacity(n);
        let mut current = value;
        for _ in 1..n {
            let next = f(&current);
            items.push(std::mem::replace(&mut current, next));
        }
        items.push(current);
        items.into()
    }

    /// Build a sequence from a seed state.
    ///
    /// `step` produces the next element and state, or `None` when done. At
    /// most `fuel` elements are produced, so this terminates even if `step`
    /// never returns `None`.
    pub fn unfold<S, F>(fuel: usize, state: S, mut step: F) -> Self
    where
        F: FnMut(S) -> Option<(T, S)>,
    {
        let mut items = Vec::new();
        let mut state = state;
        for _ in 0..fuel {
            match step(state) {
                Some((value, next)) => {
                    items.push(value);
                    state = next;
                }
                None => break,
            }
        }
        items.into()
    }

    /// The element at `index`.
    ///
    /// Errors with [`error::Error::IndexOutOfRange`] if `index` is not
    /// below the length.
    pub fn lookup(&self, index: usize) -> error::Result<&T> {
        self.iter()
            .nth(index)
            .ok_or_else(|| error::Error::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// All prefixes, from the empty one up to the whole sequence.
    pub fn inits(&self) -> Seq<Seq<T>>
    where
        T: Clone,
    {
        let items = self.to_vec();
        let mut prefixes = Vec::with_capacity(items.len() + 1);
        for end in 0..=items.len() {
            prefixes.push(Seq::from(items[..end].to_vec()));
        }
        prefixes.into()
    }

    /// All suffixes, from the whole sequence down to the empty one.
    ///
    /// The suffixes share their nodes with this sequence.
    pub fn tails(&self) -> Seq<Seq<T>> {
        let mut suffixes = Vec::new();
        let mut cursor = self;
        loop {
            suffixes.push(cursor.clone());
            match cursor.node() {
                Some(node) => cursor = &node.next,
                None => break,
            }
        }
        suffixes.into()
    }

    /// The intermediate results of [`Seq::fold_left`], starting with
    /// `seed` and ending with the full fold.
    pub fn scan_left<B, F>(&self, seed: B, mut f: F) -> Seq<B>
    where
        F: FnMut(&B, &T) -> B,
    {
        let mut items = Vec::new();
        let mut acc = seed;
        for value in self.iter() {
            let next = f(&acc, value);
            items.push(std::mem::replace(&mut acc, next));
        }
        items.push(acc);
        items.into()
    }

    /// The intermediate results of [`Seq::fold_right`], starting with the
    /// full fold and ending with `seed`.
    pub fn scan_right<B, F>(&self, seed: B, mut f: F) -> Seq<B>
    where
        F: FnMut(&T, &B) -> B,
    {
        let values: Vec<&T> = self.iter().collect();
        let mut acc = seed;
        let mut result = Seq::new();
        for value in values.into_iter().rev() {
            let next = f(value, &acc);
            result = Seq::link(std::mem::replace(&mut acc, next), result);
        }
        Seq::link(acc, result)
    }
}

impl Seq<usize> {
    /// `[0, 1, ..., n - 1]`
    pub fn up_to(n: usize) -> Self {
        Seq::apply_up_to(n, |i| i)
    }

    /// `[n - 1, ..., 1, 0]`
    pub fn down_from(n: usize) -> Self {
        Seq::apply_down_from(n, |i| i)
    }
}

impl<T> From<Option<T>> for Seq<T> {
    fn from(value: Option<T>) -> Self {
        Seq::from_option(value)
    }
}
