//! Server configuration file support.
//!
//! Configuration is read from a TOML file (`timetable.toml`) with
//! environment-variable overrides for the bind address, mirroring how the
//! server binary is deployed alongside a checked-in config file.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::api::{BatchId, LevelId};
use crate::error::{TimetableError, TimetableResult};
use crate::services::roster::StaticRoster;

/// Top-level configuration for the timetable server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub server: ServerSettings,
    /// Level membership for the static roster: level id (as a string TOML
    /// key) to the batches it contains. Deployments backed by a real
    /// roster service leave this empty.
    #[serde(default)]
    pub roster: HashMap<String, Vec<i64>>,
}

/// HTTP bind settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> TimetableResult<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| TimetableError::Store(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| TimetableError::Store(format!("Failed to parse config file: {}", e)))
    }

    /// Load configuration from the default locations, falling back to
    /// defaults when no file is present.
    ///
    /// Searches for `timetable.toml` in:
    /// 1. Current directory
    /// 2. Parent directory
    pub fn from_default_location() -> TimetableResult<Self> {
        let search_paths = [
            PathBuf::from("timetable.toml"),
            PathBuf::from("../timetable.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Apply `HOST`/`PORT` environment overrides on top of the file values.
    pub fn apply_env_overrides(mut self) -> Self {
        if let Ok(host) = std::env::var("HOST") {
            self.server.host = host;
        }
        if let Some(port) = std::env::var("PORT").ok().and_then(|s| s.parse().ok()) {
            self.server.port = port;
        }
        self
    }

    /// Build the static roster described by the `[roster]` section.
    ///
    /// TOML keys are strings; each must parse as a level id.
    pub fn build_roster(&self) -> TimetableResult<StaticRoster> {
        let roster = StaticRoster::new();
        for (level_key, batches) in &self.roster {
            let level: i64 = level_key.parse().map_err(|_| {
                TimetableError::Validation(format!(
                    "Roster level key is not an integer: {:?}",
                    level_key
                ))
            })?;
            for batch in batches {
                roster.assign_batch(LevelId::new(level), BatchId::new(*batch));
            }
        }
        Ok(roster)
    }
}
