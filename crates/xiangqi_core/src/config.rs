//! Rule-set configuration.
//!
//! Read from TOML. Every key is optional:
//!
//! ```toml
//! first_to_move = "red"
//! horse_leg_blocking = false
//! log_level = "debug"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::types::Side;

/// Rule switches that travel with a board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    /// When set, a horse is blocked by a piece on the orthogonal square
    /// next to it in the direction of the long leg of the jump.
    pub horse_leg_blocking: bool,
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleConfig {
    /// Side that moves first in a new session.
    pub first_to_move: Side,
    pub horse_leg_blocking: bool,
    /// Default tracing filter for hosts that install a subscriber.
    pub log_level: String,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            first_to_move: Side::Red,
            horse_leg_blocking: false,
            log_level: "info".to_string(),
        }
    }
}

impl RuleConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, InputError> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, InputError> {
        let text = std::fs::read_to_string(path).map_err(|source| InputError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn rules(&self) -> Rules {
        Rules {
            horse_leg_blocking: self.horse_leg_blocking,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
