//! Algoscope Searching
//!
//! Traced linear and binary search. Binary search verifies that its input is
//! sorted and refuses to run otherwise.

use std::fmt;
use std::str::FromStr;

use algoscope_engine::{Error, Result, Timeline};
use serde::{Deserialize, Serialize};

mod binary;
mod linear;

pub use binary::{binary_search, check_sorted, BinaryProbe, BinarySearch, ProbeOrdering};
pub use linear::linear_search;

/// The searches a visualizer can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchAlgorithm {
    Linear,
    Binary,
}

impl SearchAlgorithm {
    pub const ALL: [SearchAlgorithm; 2] = [SearchAlgorithm::Linear, SearchAlgorithm::Binary];

    /// Short identifier, as used in the API.
    pub fn id(&self) -> &'static str {
        match self {
            SearchAlgorithm::Linear => "linear",
            SearchAlgorithm::Binary => "binary",
        }
    }

    /// Whether the input must be sorted first.
    pub fn requires_sorted(&self) -> bool {
        matches!(self, SearchAlgorithm::Binary)
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SearchAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        SearchAlgorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidInput(format!("unknown search algorithm `{s}`")))
    }
}

/// Trace a search for `target` over `values`.
pub fn trace(algorithm: SearchAlgorithm, values: &[i64], target: i64) -> Result<Timeline<Vec<i64>>> {
    trace_with_probes(algorithm, values, target).map(|(timeline, _)| timeline)
}

/// Like [`trace`], also returning the low/high/mid history of a binary
/// search. Linear search has no such history.
pub fn trace_with_probes(
    algorithm: SearchAlgorithm,
    values: &[i64],
    target: i64,
) -> Result<(Timeline<Vec<i64>>, Vec<BinaryProbe>)> {
    match algorithm {
        SearchAlgorithm::Linear => Ok((linear_search(values, &target), Vec::new())),
        SearchAlgorithm::Binary => {
            binary_search(values, &target).map(|search| (search.timeline, search.probes))
        }
    }
}
