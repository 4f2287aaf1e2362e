//! Quicksort with Lomuto partitioning (pivot = last element).

use std::cmp::Ordering;
use std::fmt::Debug;

use algoscope_engine::Tracer;

use crate::Sorter;

/// Partitions around the last element, then recurses into both sides.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl<T: Ord + Clone + Debug> Sorter<T> for QuickSort {
    fn name(&self) -> &'static str {
        "quick sort"
    }

    fn sort(&self, tracer: &mut Tracer<Vec<T>>) {
        let n = tracer.len();
        if n > 1 {
            sort_range(tracer, 0, n - 1);
        }
    }
}

/// Sort the inclusive range `lo..=hi`.
fn sort_range<T: Ord + Clone + Debug>(tracer: &mut Tracer<Vec<T>>, lo: usize, hi: usize) {
    if lo >= hi {
        return;
    }
    let pivot = partition(tracer, lo, hi);
    if pivot > lo {
        sort_range(tracer, lo, pivot - 1);
    }
    sort_range(tracer, pivot + 1, hi);
}

fn partition<T: Ord + Clone + Debug>(tracer: &mut Tracer<Vec<T>>, lo: usize, hi: usize) -> usize {
    tracer.pass(format!("Partition [{lo}..={hi}]"));
    let description = format!("Pivot {:?}", tracer.get(hi));
    tracer.boundary(vec![hi], description);

    let mut store = lo;
    for j in lo..hi {
        if tracer.compare(j, hi) != Ordering::Greater {
            if store != j {
                tracer.swap(store, j);
            }
            store += 1;
        }
    }
    if store != hi {
        tracer.swap(store, hi);
    }

    let description = format!("Pivot {:?} is in place", tracer.get(store));
    tracer.mark(vec![store], description);
    store
}
