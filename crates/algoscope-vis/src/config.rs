//! Server configuration from command-line arguments.

use algoscope_engine::VisualizerConfig;
use algoscope_hash::{HashFunction, DEFAULT_CAPACITY};

/// Configuration for [`VisServer`](crate::VisServer).
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    /// Length of the random array shown at startup
    pub array_len: usize,
    /// Seed for the startup array
    pub seed: u64,
    /// Smallest and largest value in the startup array
    pub value_range: (i64, i64),
    pub table_capacity: usize,
    pub hash_function: HashFunction,
    pub visualizer: VisualizerConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            array_len: 16,
            seed: 42,
            value_range: (1, 99),
            table_capacity: DEFAULT_CAPACITY,
            hash_function: HashFunction::Additive,
            visualizer: VisualizerConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Parse `[port] [array-len] [seed]`. Missing or unparsable arguments
    /// keep their defaults; the array length is capped at the visualizer's
    /// `max_len`.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        let mut config = Self::default();

        if let Some(port) = args.first().and_then(|s| s.parse().ok()) {
            config.port = port;
        }
        if let Some(len) = args.get(1).and_then(|s| s.parse::<usize>().ok()) {
            config.array_len = len.min(config.visualizer.max_len);
        }
        if let Some(seed) = args.get(2).and_then(|s| s.parse().ok()) {
            config.seed = seed;
        }
        config
    }
}
