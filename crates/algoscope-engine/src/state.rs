//! Animation state holder.
//!
//! A plain data sink mirroring the step being shown. The sequencer writes it,
//! renderers read it; it has no logic of its own beyond bookkeeping.

use serde::Serialize;

use crate::speed::Speed;
use crate::stats::RunStats;
use crate::step::{Outcome, Step, StepKind};

/// Lifecycle of a visualizer run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunPhase {
    /// No run in progress
    Idle,
    /// Steps are being replayed
    Running,
    /// The last step was shown; lingering before returning to idle
    Completed,
}

/// Everything a renderer needs to draw the current frame.
#[derive(Debug, Clone, Serialize)]
pub struct AnimationState<S> {
    pub phase: RunPhase,
    /// Name of the operation being shown
    pub label: Option<String>,
    pub model: S,
    pub highlights: Vec<usize>,
    /// Kind of the step currently shown
    pub current: Option<StepKind>,
    pub status: String,
    /// Transient warning from the last rejected operation
    pub warning: Option<String>,
    pub stats: RunStats,
    pub step: usize,
    pub total_steps: usize,
    pub outcome: Option<Outcome>,
    pub speed: Speed,
    #[serde(skip)]
    pub(crate) run: Option<u64>,
}

impl<S> AnimationState<S> {
    /// Idle state showing `model`.
    pub fn new(model: S, speed: Speed) -> Self {
        Self {
            phase: RunPhase::Idle,
            label: None,
            model,
            highlights: Vec::new(),
            current: None,
            status: "Ready".to_string(),
            warning: None,
            stats: RunStats::default(),
            step: 0,
            total_steps: 0,
            outcome: None,
            speed,
            run: None,
        }
    }

    /// Whether a run is replaying steps.
    pub fn is_running(&self) -> bool {
        self.phase == RunPhase::Running
    }

    /// Fraction of steps shown (0.0 - 1.0).
    pub fn progress(&self) -> f64 {
        if self.total_steps == 0 {
            0.0
        } else {
            self.step as f64 / self.total_steps as f64
        }
    }

    pub(crate) fn begin(&mut self, run: u64, label: &str, total_steps: usize) {
        self.phase = RunPhase::Running;
        self.run = Some(run);
        self.label = Some(label.to_string());
        self.highlights.clear();
        self.current = None;
        self.status = format!("Running {label}");
        self.warning = None;
        self.stats.reset();
        self.step = 0;
        self.total_steps = total_steps;
        self.outcome = None;
    }

    pub(crate) fn apply(&mut self, step: Step<S>) {
        self.stats.record(step.kind);
        self.model = step.snapshot;
        self.highlights = step.indices;
        self.current = Some(step.kind);
        self.status = step.description;
        self.step += 1;
    }

    pub(crate) fn complete(&mut self, result: S, outcome: Outcome) {
        self.phase = RunPhase::Completed;
        self.model = result;
        self.highlights.clear();
        self.current = None;
        self.status = outcome.describe();
        self.outcome = Some(outcome);
    }

    pub(crate) fn settle(&mut self) {
        self.phase = RunPhase::Idle;
        self.run = None;
    }

    pub(crate) fn restore(&mut self, model: S, status: impl Into<String>) {
        self.phase = RunPhase::Idle;
        self.run = None;
        self.label = None;
        self.model = model;
        self.highlights.clear();
        self.current = None;
        self.status = status.into();
        self.warning = None;
        self.stats.reset();
        self.step = 0;
        self.total_steps = 0;
        self.outcome = None;
    }

    pub(crate) fn warn(&mut self, message: String) {
        self.warning = Some(message);
    }

    pub(crate) fn owned_by(&self, run: u64) -> bool {
        self.run == Some(run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AnimationState<Vec<i64>> {
        AnimationState::new(vec![3, 1, 2], Speed::Medium)
    }

    #[test]
    fn starts_idle() {
        let state = state();
        assert_eq!(state.phase, RunPhase::Idle);
        assert_eq!(state.progress(), 0.0);
        assert!(!state.is_running());
    }

    #[test]
    fn apply_overwrites_highlights_and_counts() {
        let mut state = state();
        state.begin(1, "bubble sort", 2);

        state.apply(Step::new(
            StepKind::Compare,
            vec![0, 1],
            vec![3, 1, 2],
            "compare".into(),
        ));
        state.apply(Step::new(
            StepKind::Swap,
            vec![0, 1],
            vec![1, 3, 2],
            "swap".into(),
        ));

        assert_eq!(state.model, vec![1, 3, 2]);
        assert_eq!(state.highlights, vec![0, 1]);
        assert_eq!(state.current, Some(StepKind::Swap));
        assert_eq!(state.stats.comparisons, 1);
        assert_eq!(state.stats.swaps, 1);
        assert_eq!(state.progress(), 1.0);
    }

    #[test]
    fn complete_clears_highlights() {
        let mut state = state();
        state.begin(1, "sort", 1);
        state.apply(Step::new(StepKind::Mark, vec![2], vec![1, 2, 3], "m".into()));
        state.complete(vec![1, 2, 3], Outcome::Completed);

        assert_eq!(state.phase, RunPhase::Completed);
        assert!(state.highlights.is_empty());
        assert_eq!(state.status, "Done");
    }

    #[test]
    fn restore_zeroes_stats() {
        let mut state = state();
        state.begin(4, "sort", 1);
        state.apply(Step::new(StepKind::Swap, vec![0, 1], vec![1, 3, 2], "s".into()));
        state.restore(vec![3, 1, 2], "Reset");

        assert_eq!(state.stats, RunStats::default());
        assert_eq!(state.model, vec![3, 1, 2]);
        assert!(!state.owned_by(4));
    }

    #[test]
    fn run_id_is_not_serialized() {
        let mut state = state();
        state.begin(9, "sort", 0);
        let json = serde_json::to_value(&state).unwrap();
        assert!(json.get("run").is_none());
        assert_eq!(json["phase"], "running");
    }
}
