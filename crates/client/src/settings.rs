// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Config file loading.
//!
//! The config is a small JSON document with the service endpoint, the API
//! key, and the owner label stamped onto created maintenances. It is loaded
//! once at startup and passed explicitly to every component that needs it.

use crate::error::ClientError;
use serde::Deserialize;
use std::path::Path;

/// Default config location when `--file` is not supplied.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/fds/icinga.json";

/// Immutable process settings loaded from the config file.
///
/// Missing fields default to empty strings; only a read or parse failure is
/// an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Service base URL, including the trailing path separator.
    #[serde(rename = "BaseURL", default)]
    pub base_url: String,
    /// Static API key sent in the Authorization header.
    #[serde(rename = "API-KEY", default)]
    pub api_key: String,
    /// Owner label recorded on created maintenances.
    #[serde(rename = "Owners", default)]
    pub owner: String,
}

impl Settings {
    /// Loads settings from the JSON config file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` if the file cannot be read or its
    /// contents are not valid JSON of the expected shape.
    pub fn load(path: &Path) -> Result<Self, ClientError> {
        let content: String = std::fs::read_to_string(path).map_err(|err| ClientError::Config {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|err| ClientError::Config {
            path: path.display().to_string(),
            message: err.to_string(),
        })
    }
}
