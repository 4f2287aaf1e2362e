//! The step sequencer: replays a traced operation into a visualizer's
//! animation state, pausing between steps.
//!
//! # Run lifecycle
//!
//! `idle → running → completed → idle`. Every run gets an id and a
//! [`CancelToken`]. Starting another run, resetting, loading new input or
//! calling [`Visualizer::cancel`] cancels the active run: the cancelled task
//! wakes from its pause, sees that the state no longer belongs to it, and
//! returns [`Error::Cancelled`] without writing anything else.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::cancel::CancelToken;
use crate::config::VisualizerConfig;
use crate::error::{Error, Result};
use crate::speed::Speed;
use crate::state::AnimationState;
use crate::stats::RunStats;
use crate::step::Outcome;
use crate::tracer::Timeline;

/// Summary returned when a run finishes replaying.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport<S> {
    pub label: String,
    pub result: S,
    pub stats: RunStats,
    pub outcome: Outcome,
    pub steps: usize,
}

/// A traced operation that has claimed the visualizer and is ready to replay.
#[derive(Debug)]
pub struct PreparedRun<S> {
    id: u64,
    token: CancelToken,
    timeline: Timeline<S>,
}

impl<S> PreparedRun<S> {
    /// Run id assigned by the visualizer.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The recorded steps.
    pub fn timeline(&self) -> &Timeline<S> {
        &self.timeline
    }

    /// Token that cancels this run.
    pub fn token(&self) -> &CancelToken {
        &self.token
    }
}

#[derive(Debug)]
struct ActiveRun<S> {
    id: u64,
    token: CancelToken,
    /// Model the run started from; restored if the run is cancelled
    base: S,
}

#[derive(Debug)]
struct Control<S> {
    original: S,
    active: Option<ActiveRun<S>>,
    lingering: Option<CancelToken>,
    next_run: u64,
}

impl<S> Control<S> {
    fn stop_lingering(&mut self) {
        if let Some(token) = self.lingering.take() {
            token.cancel();
        }
    }
}

/// One visualizer: a working model, its animation state, and at most one
/// active run.
#[derive(Debug)]
pub struct Visualizer<S> {
    name: String,
    config: VisualizerConfig,
    state: watch::Sender<AnimationState<S>>,
    control: Mutex<Control<S>>,
}

impl<S: Clone> Visualizer<S> {
    /// Create an idle visualizer showing `model`.
    pub fn new(name: impl Into<String>, model: S, config: VisualizerConfig) -> Self {
        let (state, _) = watch::channel(AnimationState::new(model.clone(), config.speed));
        Self {
            name: name.into(),
            config,
            state,
            control: Mutex::new(Control {
                original: model,
                active: None,
                lingering: None,
                next_run: 1,
            }),
        }
    }

    /// Visualizer name used in logs.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Configuration this visualizer was built with.
    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    /// Copy of the current animation state.
    pub fn snapshot(&self) -> AnimationState<S> {
        self.state.borrow().clone()
    }

    /// Copy of the model currently shown.
    pub fn model(&self) -> S {
        self.state.borrow().model.clone()
    }

    /// Observe state changes.
    pub fn subscribe(&self) -> watch::Receiver<AnimationState<S>> {
        self.state.subscribe()
    }

    /// Whether a run is replaying or lingering on its final frame.
    pub fn is_busy(&self) -> bool {
        self.state.borrow().run.is_some()
    }

    /// Current speed preset.
    pub fn speed(&self) -> Speed {
        self.state.borrow().speed
    }

    /// Change the speed. Takes effect from the next step of an active run.
    pub fn set_speed(&self, speed: Speed) {
        self.state.send_modify(|state| state.speed = speed);
        debug!(visualizer = %self.name, %speed, "speed changed");
    }

    /// The input the visualizer resets to.
    pub async fn original(&self) -> S {
        self.control.lock().await.original.clone()
    }

    /// Trace an operation against the current model and claim the
    /// visualizer for it.
    ///
    /// If the operation rejects its input the error is returned, a transient
    /// warning is published, and neither the model nor any active run is
    /// touched. Otherwise the active run (if any) is cancelled and the new
    /// run is put in the `running` phase, ready for [`Visualizer::play`].
    pub async fn prepare<F>(&self, operation: F) -> Result<PreparedRun<S>>
    where
        F: FnOnce(&S) -> Result<Timeline<S>>,
    {
        let mut control = self.control.lock().await;
        let base = match &control.active {
            Some(active) => active.base.clone(),
            None => self.model(),
        };

        let timeline = match operation(&base) {
            Ok(timeline) => timeline,
            Err(err) => {
                warn!(visualizer = %self.name, error = %err, "operation rejected");
                self.state.send_modify(|state| state.warn(err.to_string()));
                return Err(err);
            }
        };

        if let Some(previous) = control.active.take() {
            previous.token.cancel();
            debug!(visualizer = %self.name, run = previous.id, "superseded active run");
        }
        control.stop_lingering();

        let id = control.next_run;
        control.next_run += 1;
        let token = CancelToken::new();
        control.active = Some(ActiveRun {
            id,
            token: token.clone(),
            base: base.clone(),
        });

        self.state.send_modify(|state| {
            state.model = base;
            state.begin(id, &timeline.label, timeline.len());
        });

        Ok(PreparedRun {
            id,
            token,
            timeline,
        })
    }

    /// Replay a prepared run, pausing between steps.
    pub async fn play(&self, prepared: PreparedRun<S>) -> Result<RunReport<S>> {
        let PreparedRun {
            id,
            token,
            timeline,
        } = prepared;
        let Timeline {
            label,
            steps,
            result,
            stats,
            outcome,
        } = timeline;
        let total = steps.len();

        info!(visualizer = %self.name, run = id, %label, steps = total, "run started");

        for step in steps {
            let kind = step.kind;
            let applied = self.state.send_if_modified(|state| {
                if state.owned_by(id) && !token.is_cancelled() {
                    state.apply(step);
                    true
                } else {
                    false
                }
            });
            if !applied {
                return Err(self.abandoned(id, &label));
            }
            debug!(visualizer = %self.name, run = id, kind = kind.name(), "step applied");

            let delay = self.speed().delay(self.config.base_delay());
            if self.pause(delay, &token).await.is_err() {
                return Err(self.abandoned(id, &label));
            }
        }

        {
            let mut control = self.control.lock().await;
            match &control.active {
                Some(active) if active.id == id => {
                    control.active = None;
                    control.lingering = Some(token.clone());
                }
                _ => return Err(self.abandoned(id, &label)),
            }
            let result = result.clone();
            self.state.send_modify(|state| state.complete(result, outcome));
        }

        info!(
            visualizer = %self.name,
            run = id,
            %label,
            comparisons = stats.comparisons,
            swaps = stats.swaps,
            outcome = %outcome.describe(),
            "run completed"
        );

        let _ = self.pause(self.config.linger(), &token).await;
        self.state.send_if_modified(|state| {
            if state.owned_by(id) {
                state.settle();
                true
            } else {
                false
            }
        });

        Ok(RunReport {
            label,
            result,
            stats,
            outcome,
            steps: total,
        })
    }

    /// Trace and replay an operation to completion.
    pub async fn run<F>(&self, operation: F) -> Result<RunReport<S>>
    where
        F: FnOnce(&S) -> Result<Timeline<S>>,
    {
        let prepared = self.prepare(operation).await?;
        self.play(prepared).await
    }

    /// Cancel the active run, restoring the model it started from.
    ///
    /// Returns `true` if a run was replaying.
    pub async fn cancel(&self) -> bool {
        let mut control = self.control.lock().await;
        control.stop_lingering();
        match control.active.take() {
            Some(active) => {
                active.token.cancel();
                self.state
                    .send_modify(|state| state.restore(active.base, "Cancelled"));
                info!(visualizer = %self.name, run = active.id, "run cancelled");
                true
            }
            None => {
                self.state.send_if_modified(|state| {
                    if state.run.is_some() {
                        state.settle();
                        true
                    } else {
                        false
                    }
                });
                false
            }
        }
    }

    /// Cancel any run and restore the original input with zeroed statistics.
    pub async fn reset(&self) {
        let mut control = self.control.lock().await;
        self.stop_all(&mut control);
        let original = control.original.clone();
        self.state.send_modify(|state| state.restore(original, "Reset"));
        info!(visualizer = %self.name, "reset");
    }

    /// Cancel any run and replace the original input.
    pub async fn load(&self, model: S) {
        let mut control = self.control.lock().await;
        self.stop_all(&mut control);
        control.original = model.clone();
        self.state.send_modify(|state| state.restore(model, "Loaded"));
        info!(visualizer = %self.name, "new input loaded");
    }

    fn stop_all(&self, control: &mut Control<S>) {
        control.stop_lingering();
        if let Some(active) = control.active.take() {
            active.token.cancel();
            debug!(visualizer = %self.name, run = active.id, "run stopped");
        }
    }

    async fn pause(&self, delay: Duration, token: &CancelToken) -> Result<()> {
        if delay.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                _ = token.cancelled() => {}
            }
        }
        if token.is_cancelled() {
            Err(Error::Cancelled)
        } else {
            Ok(())
        }
    }

    fn abandoned(&self, id: u64, label: &str) -> Error {
        debug!(visualizer = %self.name, run = id, %label, "run abandoned");
        Error::Cancelled
    }
}

impl<S: Clone + Send + Sync + 'static> Visualizer<S> {
    /// Trace an operation, then replay it on a background task.
    ///
    /// Input errors are returned directly; the handle resolves when the
    /// replay finishes or is cancelled.
    pub async fn spawn<F>(self: &Arc<Self>, operation: F) -> Result<JoinHandle<Result<RunReport<S>>>>
    where
        F: FnOnce(&S) -> Result<Timeline<S>>,
    {
        let prepared = self.prepare(operation).await?;
        let visualizer = Arc::clone(self);
        Ok(tokio::spawn(async move { visualizer.play(prepared).await }))
    }
}
