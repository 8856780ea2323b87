use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};

/// How the dispatcher treats a delete of a key that has no row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeletePolicy {
    /// Deleting an absent key is a [`LedgerError::MissingEntry`].
    #[default]
    Strict,
    /// Deleting an absent key succeeds and records nothing.
    Idempotent,
}

/// Configuration for entry dispatch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Policy for deletes of absent keys.
    pub delete_policy: DeletePolicy,
}

impl LedgerConfig {
    /// A configuration that tolerates deletes of absent keys.
    ///
    /// Suited to replaying change sets that may already be partially
    /// applied.
    pub fn idempotent() -> Self {
        Self {
            delete_policy: DeletePolicy::Idempotent,
        }
    }

    /// Parse from a TOML document. Missing fields take their defaults.
    pub fn from_toml_str(s: &str) -> LedgerResult<Self> {
        toml::from_str(s).map_err(|e| LedgerError::Config(e.to_string()))
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> LedgerResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| LedgerError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Render as a TOML document.
    pub fn to_toml_string(&self) -> LedgerResult<String> {
        toml::to_string(self).map_err(|e| LedgerError::Config(e.to_string()))
    }
}
