//! Routes shared by the two hash table visualizers.

use std::fmt::Debug;
use std::sync::Arc;

use algoscope_engine::input::check_room;
use algoscope_engine::{AnimationState, Result, Timeline, Visualizer};
use algoscope_hash::{ChainedTable, HashFunction, OpenTable};
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use crate::error::ApiResult;
use crate::requests::{EntryRequest, KeyRequest, ResizeRequest};
use crate::server::launch;

/// A string-keyed table of numbers that the API can drive.
pub trait TableModel: Clone + Debug + Serialize + Send + Sync + 'static {
    /// Empty table.
    fn empty(capacity: usize, function: HashFunction) -> Result<Self>;
    fn slots(&self) -> usize;
    fn entry_count(&self) -> usize;
    fn has_key(&self, key: &str) -> bool;
    fn insert(&self, key: String, value: i64) -> Result<Timeline<Self>>;
    fn get(&self, key: &str) -> Timeline<Self>;
    fn remove(&self, key: &str) -> Timeline<Self>;
    fn resize(&self, capacity: usize) -> Result<Timeline<Self>>;
}

impl TableModel for OpenTable<String, i64> {
    fn empty(capacity: usize, function: HashFunction) -> Result<Self> {
        OpenTable::new(capacity, function)
    }

    fn slots(&self) -> usize {
        self.capacity()
    }

    fn entry_count(&self) -> usize {
        self.len()
    }

    fn has_key(&self, key: &str) -> bool {
        self.contains(&key.to_string())
    }

    fn insert(&self, key: String, value: i64) -> Result<Timeline<Self>> {
        self.trace_insert(key, value)
    }

    fn get(&self, key: &str) -> Timeline<Self> {
        self.trace_get(&key.to_string())
    }

    fn remove(&self, key: &str) -> Timeline<Self> {
        self.trace_remove(&key.to_string())
    }

    fn resize(&self, capacity: usize) -> Result<Timeline<Self>> {
        self.trace_resize(capacity)
    }
}

impl TableModel for ChainedTable<String, i64> {
    fn empty(capacity: usize, function: HashFunction) -> Result<Self> {
        ChainedTable::new(capacity, function)
    }

    fn slots(&self) -> usize {
        self.capacity()
    }

    fn entry_count(&self) -> usize {
        self.len()
    }

    fn has_key(&self, key: &str) -> bool {
        self.contains(&key.to_string())
    }

    fn insert(&self, key: String, value: i64) -> Result<Timeline<Self>> {
        Ok(self.trace_insert(key, value))
    }

    fn get(&self, key: &str) -> Timeline<Self> {
        self.trace_get(&key.to_string())
    }

    fn remove(&self, key: &str) -> Timeline<Self> {
        self.trace_remove(&key.to_string())
    }

    fn resize(&self, capacity: usize) -> Result<Timeline<Self>> {
        self.trace_resize(capacity)
    }
}

type TableState<T> = State<Arc<Visualizer<T>>>;
type Frame<T> = ApiResult<Json<AnimationState<T>>>;

/// `GET /`, `POST /{insert,remove,get,resize,reset}` for one table.
pub fn routes<T, S>(vis: Arc<Visualizer<T>>) -> Router<S>
where
    T: TableModel,
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(state_handler::<T>))
        .route("/insert", post(insert_handler::<T>))
        .route("/remove", post(remove_handler::<T>))
        .route("/get", post(get_handler::<T>))
        .route("/resize", post(resize_handler::<T>))
        .route("/reset", post(reset_handler::<T>))
        .with_state(vis)
}

async fn state_handler<T: TableModel>(State(vis): TableState<T>) -> Json<AnimationState<T>> {
    Json(vis.snapshot())
}

async fn insert_handler<T: TableModel>(
    State(vis): TableState<T>,
    Json(req): Json<EntryRequest>,
) -> Frame<T> {
    let value = req.value.value();
    let max_len = vis.config().max_len;
    launch(&vis, move |table: &T| {
        if !table.has_key(&req.key) {
            check_room("hash table", table.entry_count(), max_len)?;
        }
        table.insert(req.key, value)
    })
    .await
    .map(Json)
}

async fn remove_handler<T: TableModel>(
    State(vis): TableState<T>,
    Json(req): Json<KeyRequest>,
) -> Frame<T> {
    launch(&vis, move |table: &T| Ok(table.remove(&req.key))).await.map(Json)
}

async fn get_handler<T: TableModel>(
    State(vis): TableState<T>,
    Json(req): Json<KeyRequest>,
) -> Frame<T> {
    launch(&vis, move |table: &T| Ok(table.get(&req.key))).await.map(Json)
}

async fn resize_handler<T: TableModel>(
    State(vis): TableState<T>,
    Json(req): Json<ResizeRequest>,
) -> Frame<T> {
    let max_capacity = vis.config().max_capacity;
    launch(&vis, move |table: &T| {
        table.resize(req.capacity(table.slots(), max_capacity)?)
    })
    .await
    .map(Json)
}

async fn reset_handler<T: TableModel>(State(vis): TableState<T>) -> Json<AnimationState<T>> {
    vis.reset().await;
    Json(vis.snapshot())
}
