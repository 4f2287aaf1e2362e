//! Insertion sort (shifting variant).

use std::cmp::Ordering;
use std::fmt::Debug;

use algoscope_engine::Tracer;

use crate::Sorter;

/// Grows a sorted prefix, shifting larger elements right to open a gap.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

impl<T: Ord + Clone + Debug> Sorter<T> for InsertionSort {
    fn name(&self) -> &'static str {
        "insertion sort"
    }

    fn sort(&self, tracer: &mut Tracer<Vec<T>>) {
        let n = tracer.len();
        for i in 1..n {
            tracer.pass(format!("Insert element {i}"));
            insert_one(tracer, 0, i);
        }
    }
}

/// Insertion-sort the half-open range `lo..hi`.
pub(crate) fn sort_range<T: Ord + Clone + Debug>(tracer: &mut Tracer<Vec<T>>, lo: usize, hi: usize) {
    for i in lo + 1..hi {
        insert_one(tracer, lo, i);
    }
}

/// Move the element at `i` left into the sorted range `lo..i`.
fn insert_one<T: Ord + Clone + Debug>(tracer: &mut Tracer<Vec<T>>, lo: usize, i: usize) {
    let key = tracer.get(i).clone();
    tracer.boundary(vec![i], format!("Hold {key:?}"));

    let mut j = i;
    while j > lo && tracer.compare_with(j - 1, &key) == Ordering::Greater {
        let shifted = tracer.get(j - 1).clone();
        tracer.write(j, shifted);
        j -= 1;
    }
    if j != i {
        tracer.write(j, key);
    }
}
