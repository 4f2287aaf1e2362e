//! Algoscope Visualization Server
//!
//! Serve the visualizer API for an external renderer.
//!
//! Usage: `algoscope-vis [port] [array-len] [seed]`

use algoscope_vis::{ServerConfig, VisServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "algoscope=info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_args(std::env::args().skip(1));

    println!("Algoscope Visualizer");
    println!("====================");
    println!();
    println!("  Array length: {}", config.array_len);
    println!("  Seed:         {}", config.seed);
    println!("  Table size:   {}", config.table_capacity);
    println!();
    println!("Starting server on http://localhost:{}", config.port);
    println!("Stream animation frames from ws://localhost:{}/ws", config.port);
    println!();

    let server = VisServer::new(&config)?;
    server.serve(config.port).await?;

    Ok(())
}
