//! Selection sort.

use std::cmp::Ordering;
use std::fmt::Debug;

use algoscope_engine::Tracer;

use crate::Sorter;

/// Selects the minimum of the unsorted suffix and swaps it to the front.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionSort;

impl<T: Ord + Clone + Debug> Sorter<T> for SelectionSort {
    fn name(&self) -> &'static str {
        "selection sort"
    }

    fn sort(&self, tracer: &mut Tracer<Vec<T>>) {
        let n = tracer.len();
        for i in 0..n.saturating_sub(1) {
            tracer.pass(format!("Pass {}", i + 1));
            let mut min = i;
            tracer.boundary(vec![min], format!("Minimum so far: {:?}", tracer.get(min)));

            for j in i + 1..n {
                if tracer.compare(j, min) == Ordering::Less {
                    min = j;
                    let description = format!("New minimum: {:?}", tracer.get(min));
                    tracer.boundary(vec![min], description);
                }
            }

            if min != i {
                tracer.swap(i, min);
            }
            let description = format!("{:?} is in place", tracer.get(i));
            tracer.mark(vec![i], description);
        }
    }
}
