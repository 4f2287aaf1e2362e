//! Heap sort over a binary max-heap stored in the array.

use std::cmp::Ordering;
use std::fmt::Debug;

use algoscope_engine::Tracer;

use crate::Sorter;

/// Builds a max-heap in place, then repeatedly moves the root to the end.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeapSort;

impl<T: Ord + Clone + Debug> Sorter<T> for HeapSort {
    fn name(&self) -> &'static str {
        "heap sort"
    }

    fn sort(&self, tracer: &mut Tracer<Vec<T>>) {
        let n = tracer.len();
        if n < 2 {
            return;
        }

        tracer.pass("Build max-heap");
        for root in (0..n / 2).rev() {
            sift_down(tracer, root, n);
        }

        for end in (1..n).rev() {
            tracer.pass(format!("Extract maximum into index {end}"));
            tracer.swap(0, end);
            let description = format!("{:?} is in place", tracer.get(end));
            tracer.mark(vec![end], description);
            sift_down(tracer, 0, end);
        }
    }
}

/// Restore the heap property below `root` within `0..end`.
fn sift_down<T: Ord + Clone + Debug>(tracer: &mut Tracer<Vec<T>>, mut root: usize, end: usize) {
    loop {
        let left = 2 * root + 1;
        if left >= end {
            return;
        }
        let mut largest = root;
        if tracer.compare(left, largest) == Ordering::Greater {
            largest = left;
        }
        let right = left + 1;
        if right < end && tracer.compare(right, largest) == Ordering::Greater {
            largest = right;
        }
        if largest == root {
            return;
        }
        tracer.swap(root, largest);
        root = largest;
    }
}
