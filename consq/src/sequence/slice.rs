use super::core::Seq;

impl<T> Seq<T> {
    /// The first element and the rest of the sequence, if not empty.
    pub fn uncons(&self) -> Option<(&T, Seq<T>)> {
        self.node().map(|node| (&node.value, node.next.clone()))
    }

    pub fn head(&self) -> Option<&T> {
        self.node().map(|node| &node.value)
    }

    /// Everything but the first element, if not empty.
    pub fn tail(&self) -> Option<Seq<T>> {
        self.node().map(|node| node.next.clone())
    }

    pub fn last(&self) -> Option<&T> {
        self.iter().last()
    }

    /// The first `n` elements, or all of them if there are fewer.
    pub fn take(&self, n: usize) -> Seq<T>
    where
        T: Clone,
    {
        self.iter().take(n).cloned().collect()
    }

    /// Everything after the first `n` elements; empty if there are fewer.
    ///
    /// The result is a suffix shared with this sequence.
    pub fn drop(&self, n: usize) -> Seq<T> {
        let mut cursor = self;
        for _ in 0..n {
            match cursor.node() {
                Some(node) => cursor = &node.next,
                None => break,
            }
        }
        cursor.clone()
    }

    /// `(take(n), drop(n))` in a single pass.
    pub fn split_at(&self, n: usize) -> (Seq<T>, Seq<T>)
    where
        T: Clone,
    {
        let mut prefix = Vec::new();
        let mut cursor = self;
        while prefix.len() < n {
            match cursor.node() {
                Some(node) => {
                    prefix.push(node.value.clone());
                    cursor = &node.next;
                }
                None => break,
            }
        }
        (prefix.into(), cursor.clone())
    }

    /// The longest prefix whose elements all satisfy `predicate`.
    pub fn take_while<F>(&self, mut predicate: F) -> Seq<T>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        self.iter()
            .take_while(|&value| predicate(value))
            .cloned()
            .collect()
    }

    /// What remains after [`Seq::take_while`]; a shared suffix.
    pub fn drop_while<F>(&self, mut predicate: F) -> Seq<T>
    where
        F: FnMut(&T) -> bool,
    {
        let mut cursor = self;
        while let Some(node) = cursor.node() {
            if !predicate(&node.value) {
                break;
            }
            cursor = &node.next;
        }
        cursor.clone()
    }

    /// `(take_while(predicate), drop_while(predicate))` in a single pass.
    pub fn span<F>(&self, mut predicate: F) -> (Seq<T>, Seq<T>)
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        let mut prefix = Vec::new();
        let mut cursor = self;
        while let Some(node) = cursor.node() {
            if !predicate(&node.value) {
                break;
            }
            prefix.push(node.value.clone());
            cursor = &node.next;
        }
        (prefix.into(), cursor.clone())
    }

    /// Split before the first element that satisfies `predicate`.
    ///
    /// This is [`Seq::span`] with the predicate negated (Haskell's `break`).
    pub fn break_when<F>(&self, mut predicate: F) -> (Seq<T>, Seq<T>)
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        self.span(|value| !predicate(value))
    }

    /// The elements that satisfy `predicate`, in order.
    pub fn filter<F>(&self, mut predicate: F) -> Seq<T>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        self.iter()
            .filter(|&value| predicate(value))
            .cloned()
            .collect()
    }

    /// `(filter(predicate), filter(not predicate))` in a single pass.
    pub fn partition<F>(&self, mut predicate: F) -> (Seq<T>, Seq<T>)
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        let (matching, rest): (Vec<T>, Vec<T>) =
            self.iter().cloned().partition(|value| predicate(value));
        (matching.into(), rest.into())
    }

    /// Collapse every run of neighbouring elements related by `related`
    /// into the last element of the run.
    ///
    /// An element is dropped when `related(element, next)` holds for the
    /// element right after it.
    pub fn derun<F>(&self, mut related: F) -> Seq<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool,
    {
        let mut items = Vec::new();
        let mut cursor = self.node();
        while let Some(node) = cursor {
            let next = node.next.node();
            match next {
                Some(next) if related(&node.value, &next.value) => {}
                _ => items.push(node.value.clone()),
            }
            cursor = next;
        }
        items.into()
    }

    /// Keep only the first of each group of related elements.
    ///
    /// Scanning from the left, a candidate is dropped when
    /// `related(kept, candidate)` holds for any element kept so far. This
    /// compares every candidate against every kept element, so it is
    /// quadratic. Unlike [`Seq::derun`] it also removes elements that are
    /// not adjacent.
    pub fn deduplicate<F>(&self, mut related: F) -> Seq<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool,
    {
        let mut kept: Vec<T> = Vec::new();
        for value in self.iter() {
            if !kept.iter().any(|seen| related(seen, value)) {
                kept.push(value.clone());
            }
        }
        kept.into()
    }
}

impl<T: Clone> Seq<Option<T>> {
    /// The values of the `Some` elements, in order.
    pub fn cat_options(&self) -> Seq<T> {
        self.iter().flatten().cloned().collect()
    }
}
