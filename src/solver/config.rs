// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Limits for the two-phase search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Longest solution accepted, in face turns (half turns count as one).
    pub max_length: usize,
    /// Longest phase-2 search tried for each phase-1 solution.
    pub max_phase2_depth: usize,
    /// Give up after this long; `None` searches until `max_length` is exhausted.
    pub timeout: Option<Duration>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_length: 24,
            max_phase2_depth: 10,
            timeout: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: SolverConfig = serde_json::from_str(r#"{"max_length": 20}"#).unwrap();
        assert_eq!(
            config,
            SolverConfig {
                max_length: 20,
                ..SolverConfig::default()
            }
        );
    }

    #[test]
    fn test_json_round_trip() {
        let config = SolverConfig {
            timeout: Some(Duration::from_secs(5)),
            ..SolverConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<SolverConfig>(&json).unwrap(), config);
    }
}
