//! Predicate combinator for deciding whether observed values changed.
//!
//! Callers supply the domain-specific ignore/equality rules as predicates;
//! this crate only aggregates their verdicts. A pair of snapshots counts as
//! changed as soon as any one predicate stops vouching for "no meaningful
//! change".

#![forbid(unsafe_code)]

/// A named comparison strategy over two same-length snapshots.
///
/// `unchanged` returns the "no meaningful change" verdict: `true` means this
/// strategy saw nothing worth reacting to. Implementations must be free of
/// side effects for [`distinct_changes`] to stay deterministic.
pub trait ChangePredicate<T> {
    fn unchanged(&self, old: &[T], new: &[T]) -> bool;
}

impl<T, F> ChangePredicate<T> for F
where
    F: Fn(&[T], &[T]) -> bool,
{
    #[inline]
    fn unchanged(&self, old: &[T], new: &[T]) -> bool {
        self(old, new)
    }
}

/// True if any predicate reports a change between `old` and `new`.
///
/// Predicates agree on "nothing changed" with AND semantics, so the combined
/// "changed" verdict is the negation of that conjunction. Evaluation is
/// left-to-right and stops at the first predicate that reports a change.
/// An empty predicate list vouches for everything: the result is `false`.
pub fn distinct_changes<T, P>(old: &[T], new: &[T], predicates: &[P]) -> bool
where
    P: ChangePredicate<T>,
{
    !predicates
        .iter()
        .all(|predicate| predicate.unchanged(old, new))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Strategy form of "first element equal" for the trait surface.
    struct HeadUnchanged;

    impl ChangePredicate<i32> for HeadUnchanged {
        fn unchanged(&self, old: &[i32], new: &[i32]) -> bool {
            old.first() == new.first()
        }
    }

    #[test]
    fn no_predicates_means_no_change() {
        let none: &[fn(&[i32], &[i32]) -> bool] = &[];
        assert!(!distinct_changes(&[1, 2], &[3, 4], none));
    }

    #[test]
    fn unanimous_unchanged_verdict_is_no_change() {
        let predicates: &[fn(&[i32], &[i32]) -> bool] =
            &[|old, new| old.first() == new.first(), |old, new| old.len() == new.len()];
        assert!(!distinct_changes(&[1, 2], &[1, 3], predicates));
    }

    #[test]
    fn single_dissenting_predicate_flags_change() {
        let predicates: &[fn(&[i32], &[i32]) -> bool] = &[
            |old, new| old.first() == new.first(),
            |old, new| old.get(1) == new.get(1),
        ];
        // Index 1 differs, so the second predicate withdraws its verdict.
        assert!(distinct_changes(&[1, 2], &[1, 3], predicates));
    }

    #[test]
    fn named_strategy_behaves_like_closure() {
        assert!(distinct_changes(&[1, 2], &[9, 2], &[HeadUnchanged]));
        assert!(!distinct_changes(&[1, 2], &[1, 9], &[HeadUnchanged]));
    }

    #[test]
    fn works_over_non_copy_values() {
        let old = [String::from("a"), String::from("b")];
        let new = [String::from("a"), String::from("c")];
        let predicates: &[fn(&[String], &[String]) -> bool] = &[|old, new| old == new];
        assert!(distinct_changes(&old, &new, predicates));
    }
}
