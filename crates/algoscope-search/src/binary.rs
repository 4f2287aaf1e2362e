//! Binary search over a sorted collection.

use std::cmp::Ordering;
use std::fmt::Debug;

use algoscope_engine::{Error, Outcome, Result, Timeline, Tracer};
use serde::{Deserialize, Serialize};

/// One iteration of the low/high/mid loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryProbe {
    pub low: usize,
    pub high: usize,
    pub mid: usize,
    pub ordering: ProbeOrdering,
}

/// How the probed element compared with the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeOrdering {
    /// Element smaller than target: search continues right
    Less,
    /// Element equals target
    Equal,
    /// Element larger than target: search continues left
    Greater,
}

impl From<Ordering> for ProbeOrdering {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => ProbeOrdering::Less,
            Ordering::Equal => ProbeOrdering::Equal,
            Ordering::Greater => ProbeOrdering::Greater,
        }
    }
}

/// A traced binary search together with its probe history.
#[derive(Debug, Clone)]
pub struct BinarySearch<T> {
    pub timeline: Timeline<Vec<T>>,
    pub probes: Vec<BinaryProbe>,
}

/// Find the first position where the order breaks, if any.
pub fn check_sorted<T: Ord>(values: &[T]) -> Result<()> {
    match values.windows(2).position(|pair| pair[0] > pair[1]) {
        Some(position) => Err(Error::NotSorted {
            index: position + 1,
        }),
        None => Ok(()),
    }
}

/// Classic low/high/mid binary search.
///
/// Refuses to run on unsorted input. An absent target is reported after at
/// most ⌊log₂ n⌋ + 1 comparisons.
pub fn binary_search<T>(values: &[T], target: &T) -> Result<BinarySearch<T>>
where
    T: Ord + Clone + Debug,
{
    check_sorted(values)?;

    let label = format!("binary search for {target:?}");
    let mut tracer = Tracer::new(values.to_vec());
    let mut probes = Vec::new();

    // Half-open window [low, end); `high` in probes is the inclusive bound.
    let (mut low, mut end) = (0, tracer.len());
    while low < end {
        let mid = low + (end - low) / 2;
        let high = end - 1;
        tracer.boundary(
            vec![low, mid, high],
            format!("low = {low}, mid = {mid}, high = {high}"),
        );

        let ordering = tracer.compare_with(mid, target);
        probes.push(BinaryProbe {
            low,
            high,
            mid,
            ordering: ordering.into(),
        });

        match ordering {
            Ordering::Equal => {
                tracer.mark(vec![mid], format!("Found {target:?} at index {mid}"));
                return Ok(BinarySearch {
                    timeline: tracer.finish(label, Outcome::Found { index: mid }),
                    probes,
                });
            }
            Ordering::Less => low = mid + 1,
            Ordering::Greater => end = mid,
        }
    }

    tracer.mark(Vec::new(), format!("{target:?} is not in the collection"));
    Ok(BinarySearch {
        timeline: tracer.finish(label, Outcome::NotFound),
        probes,
    })
}
