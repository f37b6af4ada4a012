//! Runtime configuration from environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `MEMORY_VARIANT` | `ranked` (`plain` shows a summary only) |
//! | `MEMORY_CONTACT` | `business` (`phone` asks for a phone number) |
//! | `MEMORY_TIME_BUDGET_SECS` | 30 |
//! | `MEMORY_MISMATCH_DELAY_MS` | 800 |
//! | `MEMORY_RANKING_CAP` | unset, keep every entry |
//! | `MEMORY_SEED` | derived from the clock |
//! | `MEMORY_DATA_DIR` | `./.memory-data` |
//! | `MEMORY_EXPORT_DIR` | current directory |
//! | `MEMORY_LOG_PATH` | `<data dir>/memory.log` |
//!
//! Empty or unparseable values fall back to the default.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::core::GameConfig;
use crate::types::{ContactKind, ResultDisplay};

pub const DEFAULT_DATA_DIR: &str = ".memory-data";
pub const LOG_FILE_NAME: &str = "memory.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub game: GameConfig,
    /// Fixed shuffle seed. `None` seeds from the clock.
    pub seed: Option<u32>,
    pub data_dir: PathBuf,
    pub export_dir: PathBuf,
    pub log_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let defaults = GameConfig::default();
        let game = defaults
            .clone()
            .with_display(
                var("MEMORY_VARIANT")
                    .and_then(|s| ResultDisplay::from_str(&s))
                    .unwrap_or_default(),
            )
            .with_contact(
                var("MEMORY_CONTACT")
                    .and_then(|s| ContactKind::from_str(&s))
                    .unwrap_or_default(),
            )
            .with_time_budget_secs(
                parsed(var("MEMORY_TIME_BUDGET_SECS"))
                    .filter(|&s: &u32| s > 0)
                    .unwrap_or(defaults.time_budget_secs),
            )
            .with_mismatch_delay_ms(
                parsed(var("MEMORY_MISMATCH_DELAY_MS")).unwrap_or(defaults.mismatch_delay_ms),
            )
            .with_ranking_cap(parsed(var("MEMORY_RANKING_CAP")).filter(|&n: &usize| n > 0));

        let data_dir = var("MEMORY_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        let export_dir = var("MEMORY_EXPORT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        let log_path = var("MEMORY_LOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join(LOG_FILE_NAME));

        Self {
            game,
            seed: parsed(var("MEMORY_SEED")),
            data_dir,
            export_dir,
            log_path,
        }
    }
}

fn parsed<T: FromStr>(value: Option<String>) -> Option<T> {
    value.and_then(|s| s.parse().ok())
}
