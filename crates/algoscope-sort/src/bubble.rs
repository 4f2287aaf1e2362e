//! Bubble sort with early exit.

use std::cmp::Ordering;
use std::fmt::Debug;

use algoscope_engine::Tracer;

use crate::Sorter;

/// Repeatedly swaps adjacent out-of-order pairs; stops after a pass with no swaps.
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl<T: Ord + Clone + Debug> Sorter<T> for BubbleSort {
    fn name(&self) -> &'static str {
        "bubble sort"
    }

    fn sort(&self, tracer: &mut Tracer<Vec<T>>) {
        let n = tracer.len();
        for pass in 0..n.saturating_sub(1) {
            tracer.pass(format!("Pass {}", pass + 1));
            let mut swapped = false;
            for j in 0..n - 1 - pass {
                if tracer.compare(j, j + 1) == Ordering::Greater {
                    tracer.swap(j, j + 1);
                    swapped = true;
                }
            }

            let settled = n - 1 - pass;
            let description = format!("{:?} is in place", tracer.get(settled));
            tracer.mark(vec![settled], description);

            if !swapped {
                break;
            }
        }
    }
}
