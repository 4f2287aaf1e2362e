//! Sequential scan.

use std::cmp::Ordering;
use std::fmt::Debug;

use algoscope_engine::{Outcome, Timeline, Tracer};

/// Scan left to right for the first element equal to `target`.
///
/// A target first found at index `i` costs exactly `i + 1` comparisons.
pub fn linear_search<T>(values: &[T], target: &T) -> Timeline<Vec<T>>
where
    T: Ord + Clone + Debug,
{
    let label = format!("linear search for {target:?}");
    let mut tracer = Tracer::new(values.to_vec());

    for i in 0..tracer.len() {
        if tracer.compare_with(i, target) == Ordering::Equal {
            tracer.mark(vec![i], format!("Found {target:?} at index {i}"));
            return tracer.finish(label, Outcome::Found { index: i });
        }
    }

    tracer.mark(Vec::new(), format!("{target:?} is not in the collection"));
    tracer.finish(label, Outcome::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparisons_equal_index_plus_one() {
        let values = [4, 8, 15, 16, 23, 42];
        for (i, target) in values.iter().enumerate() {
            let timeline = linear_search(&values, target);
            assert_eq!(timeline.outcome, Outcome::Found { index: i });
            assert_eq!(timeline.stats.comparisons, i as u64 + 1);
        }
    }

    #[test]
    fn reports_first_occurrence() {
        let timeline = linear_search(&[1, 7, 3, 7], &7);
        assert_eq!(timeline.outcome, Outcome::Found { index: 1 });
    }

    #[test]
    fn missing_target_scans_everything() {
        let timeline = linear_search(&[1, 2, 3], &9);
        assert_eq!(timeline.outcome, Outcome::NotFound);
        assert_eq!(timeline.stats.comparisons, 3);
    }

    #[test]
    fn works_on_strings() {
        let words = ["ant", "bee", "cat"].map(String::from);
        let timeline = linear_search(&words, &"cat".to_string());
        assert_eq!(timeline.outcome, Outcome::Found { index: 2 });
    }

    #[test]
    fn never_mutates() {
        let timeline = linear_search(&[3, 1, 2], &2);
        assert!(timeline.steps.iter().all(|s| s.snapshot == vec![3, 1, 2]));
    }
}
