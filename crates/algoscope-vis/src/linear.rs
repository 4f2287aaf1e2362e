//! Routes for the stack, queue and deque visualizers.

use std::sync::Arc;

use algoscope_engine::input::check_room;
use algoscope_engine::{AnimationState, Visualizer};
use algoscope_structures::{Deque, Queue, Stack};
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use crate::error::ApiResult;
use crate::requests::{DequePushRequest, EndRequest, ValueRequest};
use crate::server::launch;

type Vis<T> = Arc<Visualizer<T>>;
type Frame<T> = ApiResult<Json<AnimationState<T>>>;

/// `GET /`, `POST /{push,pop,peek,reset}` for a bounded stack.
pub fn stack_routes<S>(vis: Vis<Stack<i64>>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(state_handler::<Stack<i64>>))
        .route("/push", post(stack_push_handler))
        .route("/pop", post(stack_pop_handler))
        .route("/peek", post(stack_peek_handler))
        .route("/reset", post(reset_handler::<Stack<i64>>))
        .with_state(vis)
}

/// `GET /`, `POST /{enqueue,dequeue,peek,reset}` for a bounded queue.
pub fn queue_routes<S>(vis: Vis<Queue<i64>>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(state_handler::<Queue<i64>>))
        .route("/enqueue", post(enqueue_handler))
        .route("/dequeue", post(dequeue_handler))
        .route("/peek", post(queue_peek_handler))
        .route("/reset", post(reset_handler::<Queue<i64>>))
        .with_state(vis)
}

/// `GET /`, `POST /{push,pop,peek,reset}` for a deque; every operation
/// names an `end`.
pub fn deque_routes<S>(vis: Vis<Deque<i64>>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(state_handler::<Deque<i64>>))
        .route("/push", post(deque_push_handler))
        .route("/pop", post(deque_pop_handler))
        .route("/peek", post(deque_peek_handler))
        .route("/reset", post(reset_handler::<Deque<i64>>))
        .with_state(vis)
}

async fn state_handler<T: Clone + Serialize + Send + Sync + 'static>(
    State(vis): State<Vis<T>>,
) -> Json<AnimationState<T>> {
    Json(vis.snapshot())
}

async fn reset_handler<T: Clone + Serialize + Send + Sync + 'static>(
    State(vis): State<Vis<T>>,
) -> Json<AnimationState<T>> {
    vis.reset().await;
    Json(vis.snapshot())
}

async fn stack_push_handler(
    State(vis): State<Vis<Stack<i64>>>,
    Json(req): Json<ValueRequest>,
) -> Frame<Stack<i64>> {
    let value = req.value.value();
    launch(&vis, move |stack: &Stack<i64>| stack.trace_push(value))
        .await
        .map(Json)
}

async fn stack_pop_handler(State(vis): State<Vis<Stack<i64>>>) -> Frame<Stack<i64>> {
    launch(&vis, |stack: &Stack<i64>| stack.trace_pop()).await.map(Json)
}

async fn stack_peek_handler(State(vis): State<Vis<Stack<i64>>>) -> Frame<Stack<i64>> {
    launch(&vis, |stack: &Stack<i64>| stack.trace_peek()).await.map(Json)
}

async fn enqueue_handler(
    State(vis): State<Vis<Queue<i64>>>,
    Json(req): Json<ValueRequest>,
) -> Frame<Queue<i64>> {
    let value = req.value.value();
    launch(&vis, move |queue: &Queue<i64>| queue.trace_enqueue(value))
        .await
        .map(Json)
}

async fn dequeue_handler(State(vis): State<Vis<Queue<i64>>>) -> Frame<Queue<i64>> {
    launch(&vis, |queue: &Queue<i64>| queue.trace_dequeue()).await.map(Json)
}

async fn queue_peek_handler(State(vis): State<Vis<Queue<i64>>>) -> Frame<Queue<i64>> {
    launch(&vis, |queue: &Queue<i64>| queue.trace_peek()).await.map(Json)
}

async fn deque_push_handler(
    State(vis): State<Vis<Deque<i64>>>,
    Json(req): Json<DequePushRequest>,
) -> Frame<Deque<i64>> {
    let value = req.value.value();
    let max_len = vis.config().max_len;
    launch(&vis, move |deque: &Deque<i64>| {
        check_room("deque", deque.len(), max_len)?;
        Ok(deque.trace_push(req.end, value))
    })
    .await
    .map(Json)
}

async fn deque_pop_handler(
    State(vis): State<Vis<Deque<i64>>>,
    Json(req): Json<EndRequest>,
) -> Frame<Deque<i64>> {
    launch(&vis, move |deque: &Deque<i64>| deque.trace_pop(req.end))
        .await
        .map(Json)
}

async fn deque_peek_handler(
    State(vis): State<Vis<Deque<i64>>>,
    Json(req): Json<EndRequest>,
) -> Frame<Deque<i64>> {
    launch(&vis, move |deque: &Deque<i64>| deque.trace_peek(req.end))
        .await
        .map(Json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoscope_engine::{Error, Outcome, RunPhase, VisualizerConfig};
    use algoscope_structures::End;
    use tokio_test::assert_err;

    use crate::error::ApiError;
    use crate::requests::NumberInput;

    fn config(max_len: usize) -> VisualizerConfig {
        VisualizerConfig {
            max_len,
            ..VisualizerConfig::instant()
        }
    }

    async fn settled<S: Clone>(vis: &Visualizer<S>) -> AnimationState<S> {
        let mut updates = vis.subscribe();
        let state = updates
            .wait_for(|state| state.phase == RunPhase::Idle)
            .await
            .unwrap()
            .clone();
        state
    }

    fn value(n: i64) -> Json<ValueRequest> {
        Json(ValueRequest {
            value: NumberInput::Number(n),
        })
    }

    #[tokio::test]
    async fn stack_push_pop_and_overflow() {
        let vis = Arc::new(Visualizer::new(
            "stack",
            Stack::bounded(2).unwrap(),
            config(2),
        ));
        for n in [4, 7] {
            stack_push_handler(State(vis.clone()), value(n)).await.unwrap();
            settled(&vis).await;
        }

        let err = assert_err!(stack_push_handler(State(vis.clone()), value(9)).await);
        assert!(matches!(err, ApiError::Rejected(Error::Overflow { capacity: 2, .. })));
        assert_eq!(vis.model().items(), &[4, 7]);

        stack_pop_handler(State(vis.clone())).await.unwrap();
        let state = settled(&vis).await;
        assert_eq!(state.model.items(), &[4]);
        assert_eq!(state.outcome, Some(Outcome::Removed { index: 1 }));
    }

    #[tokio::test]
    async fn empty_queue_underflows() {
        let vis = Arc::new(Visualizer::new(
            "queue",
            Queue::bounded(4).unwrap(),
            config(4),
        ));
        let err = assert_err!(dequeue_handler(State(vis.clone())).await);
        assert!(matches!(err, ApiError::Rejected(Error::Underflow { .. })));
        assert!(vis.snapshot().warning.is_some());

        enqueue_handler(State(vis.clone()), value(3)).await.unwrap();
        settled(&vis).await;
        queue_peek_handler(State(vis.clone())).await.unwrap();
        let state = settled(&vis).await;
        assert_eq!(state.outcome, Some(Outcome::Found { index: 0 }));
    }

    #[tokio::test]
    async fn deque_works_at_both_ends_and_is_capped() {
        let vis = Arc::new(Visualizer::new("deque", Deque::new(), config(2)));
        for (end, n) in [(End::Back, 1), (End::Front, 0)] {
            deque_push_handler(
                State(vis.clone()),
                Json(DequePushRequest {
                    end,
                    value: NumberInput::Number(n),
                }),
            )
            .await
            .unwrap();
            settled(&vis).await;
        }
        assert_eq!(vis.model().iter().copied().collect::<Vec<_>>(), vec![0, 1]);

        let err = assert_err!(
            deque_push_handler(
                State(vis.clone()),
                Json(DequePushRequest {
                    end: End::Back,
                    value: NumberInput::Number(2),
                }),
            )
            .await
        );
        assert!(matches!(err, ApiError::Rejected(Error::Overflow { .. })));

        deque_pop_handler(State(vis.clone()), Json(EndRequest { end: End::Back }))
            .await
            .unwrap();
        let state = settled(&vis).await;
        assert_eq!(state.model.iter().copied().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn routes_build() {
        let _stack: Router = stack_routes(Arc::new(Visualizer::new(
            "stack",
            Stack::new(),
            config(4),
        )));
        let _deque: Router = deque_routes(Arc::new(Visualizer::new(
            "deque",
            Deque::new(),
            config(4),
        )));
    }
}
