//! WebSocket streaming of the array visualizer.
//!
//! Every state change is pushed as a `state` frame. Clients send tagged JSON
//! commands (`sort`, `search`, `reset`, `cancel`, `speed`, `get_snapshot`)
//! and get the resulting frame, or an `error` frame, back. A search answers
//! with a `search` frame that also carries its probe history.

use std::sync::Arc;

use algoscope_engine::{AnimationState, Speed};
use algoscope_search::SearchAlgorithm;
use algoscope_sort::SortAlgorithm;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::requests::NumberInput;
use crate::server::{launch, launch_search, AppState, SearchFrame};

pub(crate) async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
    let mut updates = state.array.subscribe();
    let initial = WsResponse::State(updates.borrow_and_update().clone());
    if send(&mut socket, &initial).await.is_err() {
        return;
    }

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let frame = WsResponse::State(updates.borrow_and_update().clone());
                if send(&mut socket, &frame).await.is_err() {
                    break;
                }
            }
            message = socket.recv() => {
                let text = match message {
                    Some(Ok(Message::Text(text))) => text,
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    Some(Ok(_)) => continue,
                };
                let response = match serde_json::from_str::<WsCommand>(text.as_str()) {
                    Ok(command) => handle_ws_command(&state, command).await,
                    Err(err) => WsResponse::Error {
                        message: format!("invalid command: {err}"),
                    },
                };
                if send(&mut socket, &response).await.is_err() {
                    break;
                }
            }
        }
    }

    debug!("websocket closed");
}

async fn send(socket: &mut WebSocket, response: &WsResponse) -> Result<(), axum::Error> {
    match serde_json::to_string(response) {
        Ok(json) => socket.send(Message::Text(json.into())).await,
        Err(err) => {
            debug!(error = %err, "frame serialization failed");
            Ok(())
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum WsCommand {
    Sort {
        algorithm: SortAlgorithm,
    },
    Search {
        algorithm: SearchAlgorithm,
        target: NumberInput,
    },
    Reset,
    Cancel,
    Speed {
        speed: Speed,
    },
    GetSnapshot,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum WsResponse {
    State(AnimationState<Vec<i64>>),
    /// First frame of a search, with its probe history
    Search(SearchFrame),
    Error { message: String },
}

async fn handle_ws_command(state: &Arc<AppState>, cmd: WsCommand) -> WsResponse {
    let vis = &state.array;
    let response = match cmd {
        WsCommand::Sort { algorithm } => launch(vis, move |values: &Vec<i64>| {
            Ok(algoscope_sort::trace(algorithm, values))
        })
        .await
        .map(WsResponse::State),
        WsCommand::Search { algorithm, target } => {
            launch_search(vis, algorithm, target.value())
                .await
                .map(WsResponse::Search)
        }
        WsCommand::Reset => {
            vis.reset().await;
            Ok(WsResponse::State(vis.snapshot()))
        }
        WsCommand::Cancel => {
            vis.cancel().await;
            Ok(WsResponse::State(vis.snapshot()))
        }
        WsCommand::Speed { speed } => {
            state.set_speed(speed);
            Ok(WsResponse::State(vis.snapshot()))
        }
        WsCommand::GetSnapshot => Ok(WsResponse::State(vis.snapshot())),
    };

    response.unwrap_or_else(|err| WsResponse::Error {
        message: err.to_string(),
    })
}
