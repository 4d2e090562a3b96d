//! Runtime configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::TICK_MS;

const DATA_FILE: &str = ".tetrix.json";
const FALLBACK_DATA_FILE: &str = "tetrix.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Store file; `None` disables persistence
    pub data_path: Option<PathBuf>,
    pub seed: u32,
    pub tick_ms: u32,
}

impl AppConfig {
    /// Read `TETRIX_DATA_PATH`, `TETRIX_NO_PERSIST`, `TETRIX_SEED` and `TETRIX_TICK_MS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let no_persist = lookup("TETRIX_NO_PERSIST")
            .map(|s| matches!(s.trim(), "1" | "true" | "TRUE" | "yes"))
            .unwrap_or(false);

        let data_path = if no_persist {
            None
        } else {
            let explicit = lookup("TETRIX_DATA_PATH")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .map(PathBuf::from);
            Some(explicit.unwrap_or_else(|| default_data_path(lookup("HOME"))))
        };

        let seed = lookup("TETRIX_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let tick_ms = lookup("TETRIX_TICK_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(TICK_MS)
            .max(1);

        Self {
            data_path,
            seed,
            tick_ms,
        }
    }
}

fn default_data_path(home: Option<String>) -> PathBuf {
    match home.filter(|h| !h.is_empty()) {
        Some(home) => PathBuf::from(home).join(DATA_FILE),
        None => PathBuf::from(FALLBACK_DATA_FILE),
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}
