use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::convention::ArgumentConvention;
use crate::error::{RpcError, RpcResult};

/// Environment variable overriding the argument convention.
pub const CONVENTION_ENV: &str = "WIDGET_BRIDGE_CONVENTION";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub convention: ArgumentConvention,
}

impl ClientConfig {
    pub fn from_env() -> RpcResult<Self> {
        Self::default().with_override(std::env::var(CONVENTION_ENV).ok().as_deref())
    }

    pub fn from_yaml_str(content: &str) -> RpcResult<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| RpcError::Config(format!("Failed to parse client config: {e}")))
    }

    /// Read a YAML config file; the environment variable wins over the file.
    pub fn load(path: impl AsRef<Path>) -> RpcResult<Self> {
        Self::from_file(path.as_ref())?.with_override(std::env::var(CONVENTION_ENV).ok().as_deref())
    }

    fn from_file(path: &Path) -> RpcResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RpcError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn with_convention(mut self, convention: ArgumentConvention) -> Self {
        self.convention = convention;
        self
    }

    fn with_override(mut self, raw: Option<&str>) -> RpcResult<Self> {
        if let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) {
            self.convention = raw.parse()?;
            debug!("Argument convention overridden to {}", self.convention);
        }
        Ok(self)
    }
}
