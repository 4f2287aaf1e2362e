//! Algoscope Step Engine
//!
//! Step-synchronized animation of classic algorithms.
//!
//! # Architecture
//!
//! - **Tracer**: an algorithm runs to completion against a copy of the
//!   working model, recording a [`Step`] for every comparison, swap, probe…
//! - **Sequencer**: a [`Visualizer`] replays the recorded [`Timeline`] into
//!   its [`AnimationState`], pausing between steps at the chosen [`Speed`]
//! - **State**: renderers subscribe to the animation state and draw it
//!
//! # Usage
//!
//! ```ignore
//! let vis = Visualizer::new("array", vec![5, 3, 8, 1], VisualizerConfig::default());
//! let report = vis.run(|model| algoscope_sort::trace(SortAlgorithm::Bubble, model)).await?;
//! assert_eq!(report.result, vec![1, 3, 5, 8]);
//! ```

mod cancel;
mod config;
mod error;
pub mod input;
mod sequencer;
mod speed;
mod state;
mod stats;
mod step;
mod tracer;

pub use cancel::CancelToken;
pub use config::VisualizerConfig;
pub use error::{Error, Result};
pub use sequencer::{PreparedRun, RunReport, Visualizer};
pub use speed::Speed;
pub use state::{AnimationState, RunPhase};
pub use stats::RunStats;
pub use step::{Outcome, Step, StepKind};
pub use tracer::{Timeline, Tracer};
