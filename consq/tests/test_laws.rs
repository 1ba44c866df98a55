use consq::{Seq, These};
use proptest::prelude::*;

fn seq_strategy() -> impl Strategy<Value = Seq<i32>> {
    prop::collection::vec(-50i32..50, 0..30).prop_map(Seq::from)
}

fn small_seq_strategy() -> impl Strategy<Value = Seq<u8>> {
    prop::collection::vec(0u8..4, 0..30).prop_map(Seq::from)
}

proptest! {
    #[test]
    fn append_identity(s in seq_strategy()) {
        prop_assert_eq!(Seq::new().append(&s), s.clone());
        prop_assert_eq!(s.append(&Seq::new()), s);
    }

    #[test]
    fn append_associative(a in seq_strategy(), b in seq_strategy(), c in seq_strategy()) {
        prop_assert_eq!(a.append(&b).append(&c), a.append(&b.append(&c)));
    }

    #[test]
    fn append_length(a in seq_strategy(), b in seq_strategy()) {
        prop_assert_eq!(a.append(&b).len(), a.len() + b.len());
    }

    #[test]
    fn map_preserves_length(s in seq_strategy()) {
        prop_assert_eq!(s.map(|x| x * 2).len(), s.len());
    }

    #[test]
    fn functor_laws(s in seq_strategy()) {
        prop_assert_eq!(s.map(|x| *x), s.clone());
        let f = |x: &i32| x + 1;
        let g = |x: &i32| x * 3;
        prop_assert_eq!(s.map(g).map(f), s.map(|x| f(&g(x))));
    }

    #[test]
    fn zip_and_align_lengths(a in seq_strategy(), b in seq_strategy()) {
        prop_assert_eq!(a.zip(&b).len(), a.len().min(b.len()));
        prop_assert_eq!(a.align(&b).len(), a.len().max(b.len()));
    }

    #[test]
    fn cartesian_product_length(a in seq_strategy(), b in small_seq_strategy()) {
        let table = a.cartesian_product_with(&b, |x, y| (*x, *y));
        prop_assert_eq!(table.len(), a.len() * b.len());
        prop_assert_eq!(a.cartesian_product(&b), table);
    }

    #[test]
    fn map_option_never_grows(s in seq_strategy()) {
        let kept = s.map_option(|x| if x % 2 == 0 { Some(x / 2) } else { None });
        prop_assert!(kept.len() <= s.len());
        prop_assert_eq!(kept.len(), s.filter(|x| x % 2 == 0).len());
        prop_assert_eq!(s.map_option(|x| Some(*x)), s);
    }

    #[test]
    fn reverse_involution(s in seq_strategy()) {
        prop_assert_eq!(s.reverse().reverse(), s);
    }

    #[test]
    fn reverse_append_is_reverse_then_append(a in seq_strategy(), b in seq_strategy()) {
        prop_assert_eq!(a.reverse_append(&b), a.reverse().append(&b));
    }

    #[test]
    fn unzip_inverts_zip(v in prop::collection::vec((any::<i32>(), any::<bool>()), 0..30)) {
        let a: Seq<i32> = v.iter().map(|(x, _)| *x).collect();
        let b: Seq<bool> = v.iter().map(|(_, y)| *y).collect();
        prop_assert_eq!(a.zip(&b).unzip(), (a, b));
    }

    #[test]
    fn unalign_inverts_align(a in seq_strategy(), b in small_seq_strategy()) {
        prop_assert_eq!(a.align(&b).unalign(), (a, b));
    }

    #[test]
    fn align_with_matches_zip_on_overlap(a in seq_strategy(), b in seq_strategy()) {
        let both = a.align(&b).map_option(|these| match these {
            These::Both(x, y) => Some((*x, *y)),
            _ => None,
        });
        prop_assert_eq!(both, a.zip(&b));
    }

    #[test]
    fn derun_idempotent(s in small_seq_strategy()) {
        let once = s.derun(|a, b| a == b);
        prop_assert_eq!(once.derun(|a, b| a == b), once);
    }

    #[test]
    fn derun_has_no_adjacent_duplicates(s in small_seq_strategy()) {
        let deruned = s.derun(|a, b| a == b).to_vec();
        prop_assert!(deruned.windows(2).all(|w| w[0] != w[1]));
    }

    #[test]
    fn deduplicate_has_no_duplicates(s in small_seq_strategy()) {
        let mut seen = std::collections::HashSet::new();
        let expected: Seq<u8> = s.iter().filter(|x| seen.insert(**x)).copied().collect();
        prop_assert_eq!(s.deduplicate(|a, b| a == b), expected);
    }

    #[test]
    fn take_drop_split(s in seq_strategy(), n in 0usize..40) {
        let (prefix, suffix) = s.split_at(n);
        prop_assert_eq!(&prefix, &s.take(n));
        prop_assert_eq!(&suffix, &s.drop(n));
        prop_assert_eq!(prefix.append(&suffix), s.clone());
        prop_assert_eq!(prefix.len(), n.min(s.len()));
    }

    #[test]
    fn span_is_take_while_drop_while(s in seq_strategy()) {
        let p = |x: &i32| *x < 10;
        prop_assert_eq!(s.span(p), (s.take_while(p), s.drop_while(p)));
        prop_assert_eq!(s.break_when(p), s.span(|x| !p(x)));
    }

    #[test]
    fn partition_is_two_filters(s in seq_strategy()) {
        let p = |x: &i32| x % 3 == 0;
        prop_assert_eq!(s.partition(p), (s.filter(p), s.filter(|x| !p(x))));
    }

    #[test]
    fn intersperse_length(s in seq_strategy()) {
        let expected = if s.is_empty() { 0 } else { 2 * s.len() - 1 };
        prop_assert_eq!(s.intersperse(0).len(), expected);
    }

    #[test]
    fn intercalate_is_concat_of_intersperse(
        v in prop::collection::vec(prop::collection::vec(0i32..5, 0..5), 0..6),
        sep in prop::collection::vec(0i32..5, 0..3),
    ) {
        let ss: Seq<Seq<i32>> = v.into_iter().map(Seq::from).collect();
        let sep = Seq::from(sep);
        prop_assert_eq!(ss.intercalate(&sep), ss.intersperse(sep.clone()).concat());
    }

    #[test]
    fn inits_and_tails_lengths(s in seq_strategy()) {
        let inits = s.inits();
        let tails = s.tails();
        prop_assert_eq!(inits.len(), s.len() + 1);
        prop_assert_eq!(tails.len(), s.len() + 1);
        prop_assert_eq!(inits.last(), Some(&s));
        prop_assert_eq!(tails.head(), Some(&s));
    }

    #[test]
    fn scans_end_in_folds(s in seq_strategy()) {
        let left = s.scan_left(0, |acc, x| acc + x);
        let left_fold = s.fold_left(0, |acc, x| acc + x);
        prop_assert_eq!(left.len(), s.len() + 1);
        prop_assert_eq!(left.last(), Some(&left_fold));
        let right = s.scan_right(0, |x, acc| x + acc);
        let right_fold = s.fold_right(0, |x, acc| x + acc);
        prop_assert_eq!(right.len(), s.len() + 1);
        prop_assert_eq!(right.head(), Some(&right_fold));
    }

    #[test]
    fn merge_of_sorted_is_sorted(
        a in prop::collection::vec(-20i32..20, 0..20),
        b in prop::collection::vec(-20i32..20, 0..20),
    ) {
        let mut a = a;
        let mut b = b;
        a.sort();
        b.sort();
        let merged = Seq::from(a.clone()).merge(&Seq::from(b.clone()), |x, y| x <= y);
        let mut expected = a;
        expected.extend(b);
        expected.sort();
        prop_assert_eq!(merged.to_vec(), expected);
    }

    #[test]
    fn lines_by_counts_breaks(v in prop::collection::vec(0u8..3, 0..30)) {
        let s = Seq::from(v.clone());
        let breaks = v.iter().filter(|x| **x == 0).count();
        let lines = s.lines_by(|x| *x == 0);
        prop_assert_eq!(lines.len(), breaks + 1);
        prop_assert_eq!(lines.intercalate(&Seq::singleton(0)), s);
    }

    #[test]
    fn words_by_never_empty(v in prop::collection::vec(0u8..3, 0..30)) {
        let s = Seq::from(v.clone());
        let words = s.words_by(|x| *x == 0);
        prop_assert!(words.all(|w| !w.is_empty()));
        prop_assert_eq!(words.concat(), s.filter(|x| *x != 0));
    }

    #[test]
    fn positional_updates(s in seq_strategy(), i in 0usize..40) {
        if i < s.len() {
            let removed = s.remove_at(i).unwrap();
            prop_assert_eq!(removed.len(), s.len() - 1);
            let updated = s.set_at(i, 1000).unwrap();
            prop_assert_eq!(updated.lookup(i), Ok(&1000));
            prop_assert_eq!(updated.len(), s.len());
            prop_assert_eq!(removed.insert_at(i, *s.lookup(i).unwrap()).unwrap(), s);
        } else {
            prop_assert!(s.lookup(i).is_err());
            prop_assert!(s.remove_at(i).is_err());
            prop_assert!(s.update_at(i, |x| *x).is_err());
        }
    }

    #[test]
    fn unsnoc_inverts_snoc(s in seq_strategy(), x in any::<i32>()) {
        prop_assert_eq!(s.snoc(x).unsnoc(), Some((s.clone(), x)));
        prop_assert_eq!(s.snoc(x), s.append(&Seq::singleton(x)));
    }
}
