//! Runtime configuration read from the environment.
//!
//! - `TETRIS_TICK_MS`: milliseconds per tick (default 300, minimum 16)
//! - `TETRIS_SEED`: piece sequence seed (default: random)
//! - `TETRIS_LOG_PATH`: JSON-lines session log file (unset or empty: off)
//! - `TETRIS_NO_COLOR`: `1`/`true` renders without colors

use std::time::Duration;

use crate::types::{DEFAULT_TICK_MS, MIN_TICK_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub tick_ms: u64,
    pub seed: Option<u32>,
    pub log_path: Option<String>,
    pub color: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            seed: None,
            log_path: None,
            color: true,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let tick_ms = lookup("TETRIS_TICK_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_TICK_MS)
            .max(MIN_TICK_MS);

        let seed = lookup("TETRIS_SEED").and_then(|s| s.trim().parse().ok());

        let log_path = lookup("TETRIS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let no_color = lookup("TETRIS_NO_COLOR")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Self {
            tick_ms,
            seed,
            log_path,
            color: !no_color,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(GameConfig::from_lookup(|_| None), GameConfig::default());
    }

    #[test]
    fn values_are_parsed() {
        let config = GameConfig::from_lookup(lookup_from(&[
            ("TETRIS_TICK_MS", " 120 "),
            ("TETRIS_SEED", "42"),
            ("TETRIS_LOG_PATH", "/tmp/tetris.jsonl"),
            ("TETRIS_NO_COLOR", "TRUE"),
        ]));
        assert_eq!(config.tick_ms, 120);
        assert_eq!(config.tick_interval(), Duration::from_millis(120));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_path.as_deref(), Some("/tmp/tetris.jsonl"));
        assert!(!config.color);
    }

    #[test]
    fn bad_values_fall_back() {
        let config = GameConfig::from_lookup(lookup_from(&[
            ("TETRIS_TICK_MS", "fast"),
            ("TETRIS_SEED", "-3"),
            ("TETRIS_LOG_PATH", "   "),
            ("TETRIS_NO_COLOR", "yes please"),
        ]));
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn tick_is_clamped() {
        let config = GameConfig::from_lookup(lookup_from(&[("TETRIS_TICK_MS", "1")]));
        assert_eq!(config.tick_ms, MIN_TICK_MS);
    }
}
