use super::core::Seq;

// Accumulates the segments of a sequence being split. `current` holds the
// elements of the segment that is still open.
struct Segments<T> {
    done: Vec<Seq<T>>,
    current: Vec<T>,
}

impl<T> Segments<T> {
    fn new() -> Self {
        Segments {
            done: Vec::new(),
            current: Vec::new(),
        }
    }

    fn push(&mut self, value: T) {
        self.current.push(value);
    }

    // close the open segment; empty segments are only kept on request
    fn close(&mut self, keep_empty: bool) {
        if keep_empty || !self.current.is_empty() {
            let segment = std::mem::take(&mut self.current);
            self.done.push(segment.into());
        }
    }

    fn finish(mut self, keep_empty: bool) -> Seq<Seq<T>> {
        self.close(keep_empty);
        self.done.into()
    }
}

impl<T: Clone> Seq<T> {
    /// Split at every element for which `is_break` holds.
    ///
    /// Breaking elements are dropped. Segments may be empty: two breaks in
    /// a row produce an empty segment between them. There is always one
    /// more segment than there are breaks.
    pub fn lines_by<F>(&self, mut is_break: F) -> Seq<Seq<T>>
    where
        F: FnMut(&T) -> bool,
    {
        let mut segments = Segments::new();
        for value in self.iter() {
            if is_break(value) {
                segments.close(true);
            } else {
                segments.push(value.clone());
            }
        }
        segments.finish(true)
    }

    /// Split at every run of elements for which `is_space` holds.
    ///
    /// Separators are dropped and no segment is ever empty, so leading and
    /// trailing separators do not produce segments either.
    pub fn words_by<F>(&self, mut is_space: F) -> Seq<Seq<T>>
    where
        F: FnMut(&T) -> bool,
    {
        let mut segments = Segments::new();
        for value in self.iter() {
            if is_space(value) {
                segments.close(false);
            } else {
                segments.push(value.clone());
            }
        }
        segments.finish(false)
    }
}
