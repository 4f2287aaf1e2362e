//! Top-down merge sort.

use std::cmp::Ordering;
use std::fmt::Debug;

use algoscope_engine::Tracer;

use crate::Sorter;

/// Splits in halves, sorts each, merges them back. Stable.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSort;

impl<T: Ord + Clone + Debug> Sorter<T> for MergeSort {
    fn name(&self) -> &'static str {
        "merge sort"
    }

    fn sort(&self, tracer: &mut Tracer<Vec<T>>) {
        let n = tracer.len();
        sort_range(tracer, 0, n);
    }
}

fn sort_range<T: Ord + Clone + Debug>(tracer: &mut Tracer<Vec<T>>, lo: usize, hi: usize) {
    if hi - lo < 2 {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    sort_range(tracer, lo, mid);
    sort_range(tracer, mid, hi);
    merge(tracer, lo, mid, hi);
}

fn merge<T: Ord + Clone + Debug>(tracer: &mut Tracer<Vec<T>>, lo: usize, mid: usize, hi: usize) {
    tracer.boundary(
        vec![lo, mid, hi - 1],
        format!("Merge [{lo}..{mid}) with [{mid}..{hi})"),
    );

    let left = tracer.model()[lo..mid].to_vec();
    let right = tracer.model()[mid..hi].to_vec();
    let (mut i, mut j, mut k) = (0, 0, lo);

    while i < left.len() && j < right.len() {
        // Ties take from the left run to keep the sort stable.
        if tracer.compare_values(&left[i], &right[j], vec![lo + i, mid + j]) != Ordering::Greater {
            tracer.write(k, left[i].clone());
            i += 1;
        } else {
            tracer.write(k, right[j].clone());
            j += 1;
        }
        k += 1;
    }
    for value in left[i..].iter().chain(&right[j..]) {
        tracer.write(k, value.clone());
        k += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace_with;

    /// Orders by `key` only so ties between equal keys are observable.
    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Keyed {
        key: i64,
        tag: char,
    }

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Keyed {
        fn cmp(&self, other: &Self) -> Ordering {
            self.key.cmp(&other.key)
        }
    }

    #[test]
    fn sorts() {
        let timeline = trace_with(&MergeSort, &[38, 27, 43, 3, 9, 82, 10]);
        assert_eq!(timeline.result, vec![3, 9, 10, 27, 38, 43, 82]);
        assert_eq!(timeline.stats.swaps, 0);
    }

    #[test]
    fn is_stable() {
        let input = vec![
            Keyed { key: 2, tag: 'a' },
            Keyed { key: 1, tag: 'b' },
            Keyed { key: 2, tag: 'c' },
            Keyed { key: 1, tag: 'd' },
        ];
        let tags: String = trace_with(&MergeSort, &input)
            .result
            .iter()
            .map(|k| k.tag)
            .collect();
        assert_eq!(tags, "bdac");
    }

    #[test]
    fn writes_every_element_once_per_level() {
        // 8 elements → 3 merge levels × 8 writes
        let timeline = trace_with(&MergeSort, &[8, 7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(timeline.stats.shifts, 24);
    }
}
