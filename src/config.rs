// Firewalld Zones - Configuration
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Client settings stored in a local JSON file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::firewall::BUS_NAME;

/// Which message bus to connect to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusKind {
    #[default]
    System,
    Session,
}

/// Client settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Bus firewalld listens on.
    #[serde(default)]
    pub bus: BusKind,
    /// Bus name of the firewalld service.
    #[serde(default = "default_destination")]
    pub destination: String,
    /// Timeout applied to calls whose context sets none. `null` waits
    /// as long as the bus does.
    #[serde(default = "default_call_timeout_ms")]
    pub call_timeout_ms: Option<u64>,
}

fn default_destination() -> String { BUS_NAME.to_string() }
fn default_call_timeout_ms() -> Option<u64> { Some(25_000) }

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            bus: BusKind::default(),
            destination: default_destination(),
            call_timeout_ms: default_call_timeout_ms(),
        }
    }
}

impl ClientConfig {
    /// Default location: `$XDG_CONFIG_HOME/firewalld-zones/client.json`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("firewalld-zones")
            .join("client.json")
    }

    /// Load from the default location.
    pub fn load() -> Self {
        Self::from_path(&Self::default_path())
    }

    /// Load from `path`. A missing file gives the defaults; a broken one
    /// is logged and also gives the defaults.
    pub fn from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse client config {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read client config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Default per-call timeout.
    pub fn call_timeout(&self) -> Option<Duration> {
        self.call_timeout_ms.map(Duration::from_millis)
    }
}
