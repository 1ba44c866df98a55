use super::core::Seq;

impl<T> Seq<T> {
    /// Put `value` in front, if there is one.
    pub fn cons_option(&self, value: Option<T>) -> Seq<T> {
        match value {
            Some(value) => self.cons(value),
            None => self.clone(),
        }
    }
}

impl<T: Clone> Seq<T> {
    /// The elements in reverse order.
    pub fn reverse(&self) -> Seq<T> {
        self.reverse_append(&Seq::new())
    }

    /// The elements of this sequence in reverse order, followed by `other`.
    ///
    /// Same as `self.reverse().append(other)` but done in one pass, with
    /// `other` shared by the result.
    pub fn reverse_append(&self, other: &Seq<T>) -> Seq<T> {
        self.iter()
            .fold(other.clone(), |acc, value| Seq::link(value.clone(), acc))
    }

    /// A new sequence with `value` at the end.
    pub fn snoc(&self, value: T) -> Seq<T> {
        let mut items = self.to_vec();
        items.push(value);
        items.into()
    }

    /// Put `value` at the end, if there is one.
    pub fn snoc_option(&self, value: Option<T>) -> Seq<T> {
        match value {
            Some(value) => self.snoc(value),
            None => self.clone(),
        }
    }

    /// Everything but the last element, and the last element, if not empty.
    pub fn unsnoc(&self) -> Option<(Seq<T>, T)> {
        let mut items = self.to_vec();
        let last = items.pop()?;
        Some((items.into(), last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq;

    #[test]
    fn test_reverse() {
        assert_eq!(seq![1, 2, 3].reverse(), seq![3, 2, 1]);
        assert_eq!(Seq::<i32>::new().reverse(), Seq::new());
    }

    #[test]
    fn test_reverse_append() {
        assert_eq!(seq![1, 2].reverse_append(&seq![3, 4]), seq![2, 1, 3, 4]);
        assert_eq!(Seq::new().reverse_append(&seq![3]), seq![3]);
    }

    #[test]
    fn test_snoc() {
        assert_eq!(seq![1, 2].snoc(3), seq![1, 2, 3]);
        assert_eq!(Seq::new().snoc(1), seq![1]);
        assert_eq!(seq![1].snoc_option(None), seq![1]);
        assert_eq!(seq![1].snoc_option(Some(2)), seq![1, 2]);
        assert_eq!(seq![1].cons_option(None), seq![1]);
        assert_eq!(seq![1].cons_option(Some(0)), seq![0, 1]);
    }

    #[test]
    fn test_unsnoc() {
        assert_eq!(seq![1, 2, 3].unsnoc(), Some((seq![1, 2], 3)));
        assert_eq!(seq![1].unsnoc(), Some((Seq::new(), 1)));
        assert_eq!(Seq::<i32>::new().unsnoc(), None);
    }
}
