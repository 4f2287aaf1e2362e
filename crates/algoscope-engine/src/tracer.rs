//! Step recording.
//!
//! Algorithms run to completion eagerly against a [`Tracer`], which owns a
//! private copy of the model and records a [`Step`] (with a snapshot of the
//! model) every time the algorithm does something observable. The finished
//! [`Timeline`] is then replayed by the sequencer with delays in between.

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::stats::RunStats;
use crate::step::{Outcome, Step, StepKind};

/// Records the steps of one operation against a model.
#[derive(Debug)]
pub struct Tracer<S> {
    model: S,
    steps: Vec<Step<S>>,
    stats: RunStats,
}

impl<S: Clone> Tracer<S> {
    /// Start tracing against `model`.
    pub fn new(model: S) -> Self {
        Self {
            model,
            steps: Vec::new(),
            stats: RunStats::default(),
        }
    }

    /// The model as it currently stands.
    pub fn model(&self) -> &S {
        &self.model
    }

    /// Mutable access to the model. Changes become visible in the next
    /// recorded step's snapshot.
    pub fn model_mut(&mut self) -> &mut S {
        &mut self.model
    }

    /// Record a step against the current model.
    pub fn record(&mut self, kind: StepKind, indices: Vec<usize>, description: impl Into<String>) {
        self.stats.record(kind);
        self.steps.push(Step::new(
            kind,
            indices,
            self.model.clone(),
            description.into(),
        ));
    }

    /// Record the start of a new pass.
    pub fn pass(&mut self, description: impl Into<String>) {
        self.record(StepKind::Pass, Vec::new(), description);
    }

    /// Record a boundary/pivot/minimum update.
    pub fn boundary(&mut self, indices: Vec<usize>, description: impl Into<String>) {
        self.record(StepKind::Boundary, indices, description);
    }

    /// Record that positions are final.
    pub fn mark(&mut self, indices: Vec<usize>, description: impl Into<String>) {
        self.record(StepKind::Mark, indices, description);
    }

    /// Statistics accumulated so far.
    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Number of steps recorded so far.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Finish tracing.
    pub fn finish(self, label: impl Into<String>, outcome: Outcome) -> Timeline<S> {
        Timeline {
            label: label.into(),
            steps: self.steps,
            result: self.model,
            stats: self.stats,
            outcome,
        }
    }
}

impl<T: Ord + Clone + Debug> Tracer<Vec<T>> {
    /// Number of elements in the working array.
    pub fn len(&self) -> usize {
        self.model.len()
    }

    /// Whether the working array is empty.
    pub fn is_empty(&self) -> bool {
        self.model.is_empty()
    }

    /// Element at `index`.
    pub fn get(&self, index: usize) -> &T {
        &self.model[index]
    }

    /// Compare the elements at `i` and `j`.
    pub fn compare(&mut self, i: usize, j: usize) -> Ordering {
        let ordering = self.model[i].cmp(&self.model[j]);
        let description = format!(
            "Compare {:?} (index {i}) with {:?} (index {j})",
            self.model[i], self.model[j]
        );
        self.record(StepKind::Compare, vec![i, j], description);
        ordering
    }

    /// Compare the element at `i` with a value held outside the array.
    pub fn compare_with(&mut self, i: usize, value: &T) -> Ordering {
        let ordering = self.model[i].cmp(value);
        let description = format!("Compare {:?} (index {i}) with {value:?}", self.model[i]);
        self.record(StepKind::Compare, vec![i], description);
        ordering
    }

    /// Compare two values held outside the array, highlighting `indices`.
    pub fn compare_values(&mut self, a: &T, b: &T, indices: Vec<usize>) -> Ordering {
        let ordering = a.cmp(b);
        self.record(StepKind::Compare, indices, format!("Compare {a:?} with {b:?}"));
        ordering
    }

    /// Swap the elements at `i` and `j`.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.model.swap(i, j);
        let description = format!(
            "Swap index {i} and index {j} (now {:?} and {:?})",
            self.model[i], self.model[j]
        );
        self.record(StepKind::Swap, vec![i, j], description);
    }

    /// Write `value` into position `index`.
    pub fn write(&mut self, index: usize, value: T) {
        let description = format!("Write {value:?} to index {index}");
        self.model[index] = value;
        self.record(StepKind::Move, vec![index], description);
    }
}

/// The full recorded run of one operation.
#[derive(Debug, Clone)]
pub struct Timeline<S> {
    pub label: String,
    pub steps: Vec<Step<S>>,
    /// The model after the final step
    pub result: S,
    pub stats: RunStats,
    pub outcome: Outcome,
}

impl<S> Timeline<S> {
    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether no steps were recorded.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Count steps of one kind.
    pub fn count(&self, kind: StepKind) -> usize {
        self.steps.iter().filter(|s| s.kind == kind).count()
    }
}
