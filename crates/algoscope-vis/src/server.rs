//! Axum web server exposing visualizer controls and state.

use std::sync::Arc;

use algoscope_engine::input::{check_room, random_collection};
use algoscope_engine::{AnimationState, RunPhase, Speed, Timeline, Visualizer};
use algoscope_hash::{ChainedTable, OpenTable};
use algoscope_search::{BinaryProbe, SearchAlgorithm};
use algoscope_structures::{Deque, Queue, SinglyLinkedList, Stack};
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::error::ApiResult;
use crate::requests::{
    IndexRequest, ListInsertRequest, LoadRequest, SearchRequest, SortRequest, SpeedRequest,
    ValueRequest,
};
use crate::{linear, tables};
use crate::ws::ws_handler;

/// Values shown in the linked list visualizer at startup.
const LIST_SEED_LEN: usize = 5;

/// Values shown in the stack, queue and deque visualizers at startup.
const LINEAR_SEED_LEN: usize = 3;

/// Shared application state: one visualizer per collection.
pub struct AppState {
    pub array: Arc<Visualizer<Vec<i64>>>,
    pub open: Arc<Visualizer<OpenTable<String, i64>>>,
    pub chained: Arc<Visualizer<ChainedTable<String, i64>>>,
    pub list: Arc<Visualizer<SinglyLinkedList<i64>>>,
    pub stack: Arc<Visualizer<Stack<i64>>>,
    pub queue: Arc<Visualizer<Queue<i64>>>,
    pub deque: Arc<Visualizer<Deque<i64>>>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> algoscope_engine::Result<Self> {
        let (min, max) = config.value_range;
        let values = random_collection(config.array_len, min, max, config.seed)?;
        let list = values.iter().copied().take(LIST_SEED_LEN).collect();
        let open = OpenTable::new(config.table_capacity, config.hash_function)?;
        let chained = ChainedTable::new(config.table_capacity, config.hash_function)?;
        let vis = &config.visualizer;

        let seed = values.iter().copied().take(LINEAR_SEED_LEN.min(vis.max_len));
        let mut stack = Stack::bounded(vis.max_len)?;
        let mut queue = Queue::bounded(vis.max_len)?;
        for value in seed.clone() {
            stack.push(value)?;
            queue.enqueue(value)?;
        }
        let deque: Deque<i64> = seed.collect();

        Ok(Self {
            array: Arc::new(Visualizer::new("array", values, vis.clone())),
            open: Arc::new(Visualizer::new("open-addressing", open, vis.clone())),
            chained: Arc::new(Visualizer::new("separate-chaining", chained, vis.clone())),
            list: Arc::new(Visualizer::new("linked-list", list, vis.clone())),
            stack: Arc::new(Visualizer::new("stack", stack, vis.clone())),
            queue: Arc::new(Visualizer::new("queue", queue, vis.clone())),
            deque: Arc::new(Visualizer::new("deque", deque, vis.clone())),
        })
    }

    /// Change the speed of every visualizer.
    pub fn set_speed(&self, speed: Speed) {
        self.array.set_speed(speed);
        self.open.set_speed(speed);
        self.chained.set_speed(speed);
        self.list.set_speed(speed);
        self.stack.set_speed(speed);
        self.queue.set_speed(speed);
        self.deque.set_speed(speed);
    }

    fn status(&self) -> StatusResponse {
        StatusResponse {
            status: "ok",
            speed: self.array.speed(),
            visualizers: vec![
                VisualizerStatus::of(&self.array),
                VisualizerStatus::of(&self.open),
                VisualizerStatus::of(&self.chained),
                VisualizerStatus::of(&self.list),
                VisualizerStatus::of(&self.stack),
                VisualizerStatus::of(&self.queue),
                VisualizerStatus::of(&self.deque),
            ],
        }
    }
}

/// Visualization server.
pub struct VisServer {
    state: Arc<AppState>,
}

impl VisServer {
    /// Create a server with fresh visualizers.
    pub fn new(config: &ServerConfig) -> algoscope_engine::Result<Self> {
        Ok(Self::with_state(Arc::new(AppState::new(config)?)))
    }

    pub fn with_state(state: Arc<AppState>) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// Build the router for the server.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/api/status", get(status_handler))
            .route("/api/speed", post(speed_handler))
            .nest("/api/array", array_routes(self.state.array.clone()))
            .nest("/api/open", tables::routes(self.state.open.clone()))
            .nest("/api/chained", tables::routes(self.state.chained.clone()))
            .nest("/api/list", list_routes(self.state.list.clone()))
            .nest("/api/stack", linear::stack_routes(self.state.stack.clone()))
            .nest("/api/queue", linear::queue_routes(self.state.queue.clone()))
            .nest("/api/deque", linear::deque_routes(self.state.deque.clone()))
            // WebSocket streaming the array visualizer
            .route("/ws", get(ws_handler))
            .layer(CorsLayer::permissive())
            .with_state(self.state.clone())
    }

    /// Run the server on the given port.
    pub async fn serve(self, port: u16) -> Result<(), std::io::Error> {
        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!("Algoscope server running on http://localhost:{}", port);
        axum::serve(listener, self.router()).await
    }
}

/// Trace `operation` and replay it in the background, returning the first
/// frame of the new run.
pub(crate) async fn launch<S, F>(vis: &Arc<Visualizer<S>>, operation: F) -> ApiResult<AnimationState<S>>
where
    S: Clone + Send + Sync + 'static,
    F: FnOnce(&S) -> algoscope_engine::Result<Timeline<S>>,
{
    // Replay runs detached; cancellation goes through the visualizer.
    let _replay = vis.spawn(operation).await?;
    Ok(vis.snapshot())
}

/// First frame of a search run, with the low/high/mid history when the
/// search is binary.
#[derive(Debug, Serialize)]
pub(crate) struct SearchFrame {
    #[serde(flatten)]
    pub state: AnimationState<Vec<i64>>,
    pub probes: Vec<BinaryProbe>,
}

pub(crate) async fn launch_search(
    vis: &Arc<Visualizer<Vec<i64>>>,
    algorithm: SearchAlgorithm,
    target: i64,
) -> ApiResult<SearchFrame> {
    let mut probes = Vec::new();
    let state = launch(vis, |values: &Vec<i64>| {
        let (timeline, history) = algoscope_search::trace_with_probes(algorithm, values, target)?;
        probes = history;
        Ok(timeline)
    })
    .await?;
    Ok(SearchFrame { state, probes })
}

#[derive(Debug, Serialize)]
struct StatusResponse {
    status: &'static str,
    speed: Speed,
    visualizers: Vec<VisualizerStatus>,
}

#[derive(Debug, Serialize)]
struct VisualizerStatus {
    name: String,
    phase: RunPhase,
    label: Option<String>,
    step: usize,
    total_steps: usize,
    progress: f64,
}

impl VisualizerStatus {
    fn of<S: Clone>(vis: &Visualizer<S>) -> Self {
        let state = vis.snapshot();
        Self {
            name: vis.name().to_string(),
            phase: state.phase,
            progress: state.progress(),
            label: state.label,
            step: state.step,
            total_steps: state.total_steps,
        }
    }
}

async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(state.status())
}

async fn speed_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SpeedRequest>,
) -> Json<StatusResponse> {
    state.set_speed(req.speed);
    Json(state.status())
}

// Array

type ArrayState = State<Arc<Visualizer<Vec<i64>>>>;
type ArrayFrame = ApiResult<Json<AnimationState<Vec<i64>>>>;

fn array_routes<S>(vis: Arc<Visualizer<Vec<i64>>>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(array_state_handler))
        .route("/load", post(load_handler))
        .route("/sort", post(sort_handler))
        .route("/search", post(search_handler))
        .route("/reset", post(array_reset_handler))
        .route("/cancel", post(cancel_handler))
        .with_state(vis)
}

async fn array_state_handler(State(vis): ArrayState) -> Json<AnimationState<Vec<i64>>> {
    Json(vis.snapshot())
}

async fn load_handler(State(vis): ArrayState, Json(req): Json<LoadRequest>) -> ArrayFrame {
    let values = req.collection(vis.config().max_len)?;
    vis.load(values).await;
    Ok(Json(vis.snapshot()))
}

async fn sort_handler(State(vis): ArrayState, Json(req): Json<SortRequest>) -> ArrayFrame {
    let algorithm = req.algorithm;
    launch(&vis, move |values: &Vec<i64>| Ok(algoscope_sort::trace(algorithm, values)))
        .await
        .map(Json)
}

async fn search_handler(
    State(vis): ArrayState,
    Json(req): Json<SearchRequest>,
) -> ApiResult<Json<SearchFrame>> {
    launch_search(&vis, req.algorithm, req.target.value())
        .await
        .map(Json)
}

async fn array_reset_handler(State(vis): ArrayState) -> Json<AnimationState<Vec<i64>>> {
    vis.reset().await;
    Json(vis.snapshot())
}

async fn cancel_handler(State(vis): ArrayState) -> Json<AnimationState<Vec<i64>>> {
    vis.cancel().await;
    Json(vis.snapshot())
}

// Linked list

type ListState = State<Arc<Visualizer<SinglyLinkedList<i64>>>>;
type ListFrame = ApiResult<Json<AnimationState<SinglyLinkedList<i64>>>>;

fn list_routes<S>(vis: Arc<Visualizer<SinglyLinkedList<i64>>>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list_state_handler))
        .route("/insert", post(list_insert_handler))
        .route("/remove", post(list_remove_handler))
        .route("/search", post(list_search_handler))
        .route("/reset", post(list_reset_handler))
        .with_state(vis)
}

async fn list_state_handler(State(vis): ListState) -> Json<AnimationState<SinglyLinkedList<i64>>> {
    Json(vis.snapshot())
}

async fn list_insert_handler(State(vis): ListState, Json(req): Json<ListInsertRequest>) -> ListFrame {
    let value = req.value.value();
    let max_len = vis.config().max_len;
    launch(&vis, move |list: &SinglyLinkedList<i64>| {
        check_room("linked list", list.len(), max_len)?;
        list.trace_insert_at(req.index, value)
    })
    .await
    .map(Json)
}

async fn list_remove_handler(State(vis): ListState, Json(req): Json<IndexRequest>) -> ListFrame {
    launch(&vis, move |list: &SinglyLinkedList<i64>| list.trace_remove_at(req.index))
        .await
        .map(Json)
}

async fn list_search_handler(State(vis): ListState, Json(req): Json<ValueRequest>) -> ListFrame {
    let value = req.value.value();
    launch(&vis, move |list: &SinglyLinkedList<i64>| Ok(list.trace_search(&value)))
        .await
        .map(Json)
}

async fn list_reset_handler(State(vis): ListState) -> Json<AnimationState<SinglyLinkedList<i64>>> {
    vis.reset().await;
    Json(vis.snapshot())
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoscope_engine::{Error, Outcome, VisualizerConfig};
    use algoscope_search::ProbeOrdering;
    use algoscope_sort::SortAlgorithm;
    use tokio_test::{assert_err, assert_ok};

    use crate::error::ApiError;
    use crate::requests::NumberInput;

    fn config() -> ServerConfig {
        ServerConfig {
            array_len: 8,
            visualizer: VisualizerConfig::instant(),
            ..ServerConfig::default()
        }
    }

    fn array(values: Vec<i64>) -> Arc<Visualizer<Vec<i64>>> {
        Arc::new(Visualizer::new("array", values, VisualizerConfig::instant()))
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

    #[test]
    fn server_creation() {
        let server = assert_ok!(VisServer::new(&config()));
        assert_eq!(server.state().array.model().len(), 8);
        assert_eq!(server.state().list.model().len(), LIST_SEED_LEN);
        assert_eq!(server.state().stack.model().len(), LINEAR_SEED_LEN);
        assert_eq!(server.state().queue.model().len(), LINEAR_SEED_LEN);
        assert_eq!(server.state().deque.model().len(), LINEAR_SEED_LEN);
    }

    #[test]
    fn router_builds() {
        let server = VisServer::new(&config()).unwrap();
        let _router = server.router();
    }

    #[tokio::test]
    async fn sort_runs_to_completion() {
        let vis = array(vec![5, 3, 8, 1]);
        let frame = assert_ok!(
            sort_handler(
                State(vis.clone()),
                Json(SortRequest {
                    algorithm: SortAlgorithm::Bubble,
                }),
            )
            .await
        );
        assert_eq!(frame.0.phase, RunPhase::Running);
        assert_eq!(frame.0.label.as_deref(), Some("bubble sort"));

        let state = settled(&vis).await;
        assert_eq!(state.model, vec![1, 3, 5, 8]);
        assert_eq!(state.stats.comparisons, 6);
        assert_eq!(state.stats.swaps, 4);
    }

    #[tokio::test]
    async fn binary_search_on_unsorted_input_is_rejected() {
        let vis = array(vec![9, 2, 7]);
        let err = assert_err!(
            search_handler(
                State(vis.clone()),
                Json(SearchRequest {
                    algorithm: SearchAlgorithm::Binary,
                    target: NumberInput::Number(7),
                }),
            )
            .await
        );
        assert!(matches!(err, ApiError::Rejected(Error::NotSorted { index: 1 })));
        assert_eq!(vis.model(), vec![9, 2, 7]);
    }

    #[tokio::test]
    async fn binary_search_returns_probe_history() {
        let vis = array(vec![2, 5, 8, 12, 16, 23, 38]);
        let frame = search_handler(
            State(vis.clone()),
            Json(SearchRequest {
                algorithm: SearchAlgorithm::Binary,
                target: NumberInput::Number(23),
            }),
        )
        .await
        .unwrap();
        let mids: Vec<usize> = frame.0.probes.iter().map(|probe| probe.mid).collect();
        assert_eq!(mids, vec![3, 5]);
        assert_eq!(frame.0.probes[1].ordering, ProbeOrdering::Equal);

        let json = serde_json::to_value(&frame.0).unwrap();
        assert_eq!(json["phase"], "running");
        assert_eq!(json["probes"].as_array().map(Vec::len), Some(2));

        let state = settled(&vis).await;
        assert_eq!(state.outcome, Some(Outcome::Found { index: 5 }));
    }

    #[tokio::test]
    async fn search_coerces_text_targets() {
        let vis = array(vec![0, 4, 6]);
        search_handler(
            State(vis.clone()),
            Json(SearchRequest {
                algorithm: SearchAlgorithm::Linear,
                target: NumberInput::Text("abc".into()),
            }),
        )
        .await
        .unwrap();
        let state = settled(&vis).await;
        assert_eq!(state.outcome, Some(Outcome::Found { index: 0 }));
    }

    #[tokio::test]
    async fn load_then_reset_restores_loaded_values() {
        let vis = array(vec![1]);
        let req = LoadRequest {
            values: Some(vec![4, 2, 3]),
            ..LoadRequest::default()
        };
        let frame = load_handler(State(vis.clone()), Json(req)).await.unwrap();
        assert_eq!(frame.0.model, vec![4, 2, 3]);

        sort_handler(
            State(vis.clone()),
            Json(SortRequest {
                algorithm: SortAlgorithm::Quick,
            }),
        )
        .await
        .unwrap();
        settled(&vis).await;

        let frame = array_reset_handler(State(vis.clone())).await;
        assert_eq!(frame.0.model, vec![4, 2, 3]);
        assert_eq!(frame.0.stats.total(), 0);
    }

    #[tokio::test]
    async fn oversized_load_is_rejected() {
        let vis = array(vec![1]);
        let req = LoadRequest {
            values: Some(vec![0; 65]),
            ..LoadRequest::default()
        };
        assert_err!(load_handler(State(vis.clone()), Json(req)).await);
        assert_eq!(vis.model(), vec![1]);
    }

    #[tokio::test]
    async fn huge_random_load_is_rejected() {
        let vis = array(vec![1]);
        let req: LoadRequest =
            serde_json::from_value(serde_json::json!({ "random": { "len": usize::MAX } })).unwrap();
        let err = assert_err!(load_handler(State(vis.clone()), Json(req)).await);
        assert!(matches!(err, ApiError::Rejected(Error::InvalidInput(_))));
        assert_eq!(vis.model(), vec![1]);
    }

    #[tokio::test]
    async fn list_length_is_capped() {
        let config = VisualizerConfig {
            max_len: 3,
            ..VisualizerConfig::instant()
        };
        let vis = Arc::new(Visualizer::new(
            "list",
            [1i64, 2, 3].into_iter().collect::<SinglyLinkedList<i64>>(),
            config,
        ));
        let err = assert_err!(
            list_insert_handler(
                State(vis.clone()),
                Json(ListInsertRequest {
                    index: 0,
                    value: NumberInput::Number(0),
                }),
            )
            .await
        );
        assert!(matches!(err, ApiError::Rejected(Error::Overflow { capacity: 3, .. })));
        assert_eq!(vis.model().len(), 3);
        assert!(vis.snapshot().warning.is_some());
    }

    #[tokio::test]
    async fn list_operations() {
        let vis = Arc::new(Visualizer::new(
            "list",
            [1i64, 2, 3].into_iter().collect::<SinglyLinkedList<i64>>(),
            VisualizerConfig::instant(),
        ));

        list_insert_handler(
            State(vis.clone()),
            Json(ListInsertRequest {
                index: 1,
                value: NumberInput::Number(9),
            }),
        )
        .await
        .unwrap();
        let state = settled(&vis).await;
        assert_eq!(state.model.iter().copied().collect::<Vec<_>>(), vec![1, 9, 2, 3]);

        let err = list_remove_handler(State(vis.clone()), Json(IndexRequest { index: 4 }))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Rejected(Error::IndexOutOfRange { index: 4, len: 4 })));

        list_search_handler(
            State(vis.clone()),
            Json(ValueRequest {
                value: NumberInput::Number(3),
            }),
        )
        .await
        .unwrap();
        let state = settled(&vis).await;
        assert_eq!(state.outcome, Some(Outcome::Found { index: 3 }));
    }

    #[tokio::test]
    async fn speed_applies_to_every_visualizer() {
        let state = Arc::new(AppState::new(&config()).unwrap());
        let response = speed_handler(
            State(state.clone()),
            Json(SpeedRequest { speed: Speed::Fast }),
        )
        .await;
        assert_eq!(response.0.speed, Speed::Fast);
        assert_eq!(state.open.speed(), Speed::Fast);
        assert_eq!(state.list.speed(), Speed::Fast);
        assert_eq!(state.deque.speed(), Speed::Fast);
        assert_eq!(response.0.visualizers.len(), 7);
    }
}
