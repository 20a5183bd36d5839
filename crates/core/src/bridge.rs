//! The host bridge capability.

use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use crate::error::{RpcError, RpcResult};

/// Transport to the widget host, supplied by the hosting runtime.
///
/// `call` must forward the method name and argument to the host and resolve
/// with the decoded success payload, or fail with `RpcError::Host` /
/// `RpcError::Transport`.
#[async_trait]
pub trait Bridge: Send + Sync {
    async fn call(&self, method: &str, argument: Value) -> RpcResult<Value>;
}

static INSTALLED: OnceLock<Arc<dyn Bridge>> = OnceLock::new();

/// Install the process-wide bridge. Only the first call succeeds.
pub fn install(bridge: Arc<dyn Bridge>) -> RpcResult<()> {
    INSTALLED
        .set(bridge)
        .map_err(|_| RpcError::AlreadyInstalled)?;
    info!("Widget bridge installed");
    Ok(())
}

/// The installed bridge, or `BridgeUnavailable` when the host never injected one.
pub fn installed() -> RpcResult<Arc<dyn Bridge>> {
    INSTALLED.get().cloned().ok_or(RpcError::BridgeUnavailable)
}

pub fn is_installed() -> bool {
    INSTALLED.get().is_some()
}
