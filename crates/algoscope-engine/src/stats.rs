//! Run statistics.

use serde::{Deserialize, Serialize};

use crate::step::StepKind;

/// Counters accumulated over one run.
///
/// Counters only grow while a run is in progress and are zeroed when the
/// next run starts or the visualizer is reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub comparisons: u64,
    pub swaps: u64,
    /// Single-position writes: shifts, merge write-backs, bucket collection
    pub shifts: u64,
    pub passes: u64,
    /// Slots or nodes inspected by hashing and list traversal
    pub probes: u64,
}

impl RunStats {
    /// Count one step of the given kind.
    pub fn record(&mut self, kind: StepKind) {
        match kind {
            StepKind::Compare => self.comparisons += 1,
            StepKind::Swap => self.swaps += 1,
            StepKind::Move => self.shifts += 1,
            StepKind::Pass => self.passes += 1,
            StepKind::Probe | StepKind::Visit => self.probes += 1,
            StepKind::Boundary | StepKind::Insert | StepKind::Remove | StepKind::Mark => {}
        }
    }

    /// Zero every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Sum of all counters.
    pub fn total(&self) -> u64 {
        self.comparisons + self.swaps + self.shifts + self.passes + self.probes
    }
}
