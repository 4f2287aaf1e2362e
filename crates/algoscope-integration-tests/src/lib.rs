//! Helpers shared by the end-to-end tests.

use algoscope_engine::{AnimationState, RunPhase, Visualizer};

/// Wait until `vis` has no run replaying or lingering, and return its state.
pub async fn settled<S: Clone>(vis: &Visualizer<S>) -> AnimationState<S> {
    let mut updates = vis.subscribe();
    let state = match updates.wait_for(|state| state.phase == RunPhase::Idle).await {
        Ok(state) => state.clone(),
        Err(_) => vis.snapshot(),
    };
    state
}

/// Whether `values` is in non-decreasing order.
pub fn is_sorted(values: &[i64]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}
