//! Algoscope Sorting
//!
//! Traced implementations of the classic sorts. Each sorter runs against a
//! [`Tracer`] so every comparison, swap and write becomes an animation step.
//!
//! - Comparison sorts: bubble, selection, insertion, merge, quick, heap
//! - Distribution sorts: radix (LSD, decimal), bucket
//!
//! ```
//! use algoscope_sort::{trace, SortAlgorithm};
//!
//! let timeline = trace(SortAlgorithm::Bubble, &[5, 3, 8, 1]);
//! assert_eq!(timeline.result, vec![1, 3, 5, 8]);
//! assert_eq!(timeline.stats.comparisons, 6);
//! assert_eq!(timeline.stats.swaps, 4);
//! ```

use std::fmt::{self, Debug};
use std::str::FromStr;

use algoscope_engine::{Error, Outcome, Timeline, Tracer};
use serde::{Deserialize, Serialize};

mod bubble;
mod bucket;
mod heap;
mod insertion;
mod merge;
mod quick;
mod radix;
mod selection;

pub use bubble::BubbleSort;
pub use bucket::BucketSort;
pub use heap::HeapSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use radix::RadixSort;
pub use selection::SelectionSort;

/// A sorting strategy that records its work into a tracer.
pub trait Sorter<T> {
    /// Name shown while the sort runs.
    fn name(&self) -> &'static str;

    /// Sort the tracer's array in place, recording every step.
    fn sort(&self, tracer: &mut Tracer<Vec<T>>);
}

/// The sorts a visualizer can run on numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
    Radix,
    Bucket,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 8] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
        SortAlgorithm::Heap,
        SortAlgorithm::Radix,
        SortAlgorithm::Bucket,
    ];

    /// Short identifier, as used in the API.
    pub fn id(&self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Selection => "selection",
            SortAlgorithm::Insertion => "insertion",
            SortAlgorithm::Merge => "merge",
            SortAlgorithm::Quick => "quick",
            SortAlgorithm::Heap => "heap",
            SortAlgorithm::Radix => "radix",
            SortAlgorithm::Bucket => "bucket",
        }
    }

    /// Whether equal elements keep their relative order.
    pub fn is_stable(&self) -> bool {
        matches!(
            self,
            SortAlgorithm::Bubble
                | SortAlgorithm::Insertion
                | SortAlgorithm::Merge
                | SortAlgorithm::Radix
                | SortAlgorithm::Bucket
        )
    }

    /// Whether the sort orders elements only by comparing them.
    pub fn is_comparison(&self) -> bool {
        !matches!(self, SortAlgorithm::Radix | SortAlgorithm::Bucket)
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SortAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortAlgorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidInput(format!("unknown sort algorithm `{s}`")))
    }
}

/// Trace a sort over a copy of `values`.
pub fn trace_with<T, S>(sorter: &S, values: &[T]) -> Timeline<Vec<T>>
where
    T: Ord + Clone + Debug,
    S: Sorter<T> + ?Sized,
{
    let mut tracer = Tracer::new(values.to_vec());
    sorter.sort(&mut tracer);
    if !tracer.is_empty() {
        let all = (0..tracer.len()).collect();
        tracer.mark(all, "Sorted");
    }
    tracer.finish(sorter.name(), Outcome::Completed)
}

/// Trace one of the built-in sorts over a copy of `values`.
pub fn trace(algorithm: SortAlgorithm, values: &[i64]) -> Timeline<Vec<i64>> {
    match algorithm {
        SortAlgorithm::Bubble => trace_with(&BubbleSort, values),
        SortAlgorithm::Selection => trace_with(&SelectionSort, values),
        SortAlgorithm::Insertion => trace_with(&InsertionSort, values),
        SortAlgorithm::Merge => trace_with(&MergeSort, values),
        SortAlgorithm::Quick => trace_with(&QuickSort, values),
        SortAlgorithm::Heap => trace_with(&HeapSort, values),
        SortAlgorithm::Radix => trace_with(&RadixSort, values),
        SortAlgorithm::Bucket => trace_with(&BucketSort, values),
    }
}
