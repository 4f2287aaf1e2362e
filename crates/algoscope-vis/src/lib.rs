//! Algoscope Visualization Server
//!
//! HTTP and WebSocket control surface for the algorithm visualizers.
//!
//! # Architecture
//!
//! - **Visualizers**: one per collection (array, open-addressing table,
//!   separate-chaining table, linked list, stack, queue, deque), each
//!   replaying traced runs
//! - **REST API**: start operations, reset, cancel, change speed, read state
//! - **WebSocket**: streams array animation frames to any renderer
//!
//! # Usage
//!
//! ```ignore
//! let config = ServerConfig::from_args(std::env::args().skip(1));
//! let server = VisServer::new(&config)?;
//! server.serve(config.port).await?;
//! ```

mod config;
mod error;
mod linear;
mod requests;
mod server;
mod tables;
mod ws;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use requests::{NumberInput, ResizeRequest};
pub use server::{AppState, VisServer};
pub use tables::TableModel;
