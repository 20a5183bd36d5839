//! The call primitive.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, trace, warn};

use crate::bridge::{self, Bridge};
use crate::config::ClientConfig;
use crate::convention::{ArgumentConvention, PositionalArgs};
use crate::error::{RpcError, RpcResult};
use crate::method::Method;
use crate::outcome::SetOutcome;

/// Handle to the host bridge shared by every façade.
///
/// Cloning is cheap. Each `invoke` performs exactly one bridge call with no
/// retry, timeout or caching; host failures come back unchanged.
#[derive(Clone)]
pub struct Rpc {
    bridge: Arc<dyn Bridge>,
    convention: ArgumentConvention,
}

impl Rpc {
    pub fn new(bridge: Arc<dyn Bridge>) -> Self {
        Self {
            bridge,
            convention: ArgumentConvention::default(),
        }
    }

    pub fn with_config(bridge: Arc<dyn Bridge>, config: &ClientConfig) -> Self {
        Self {
            bridge,
            convention: config.convention,
        }
    }

    /// Build from the process-wide bridge. Fails with `BridgeUnavailable`
    /// when the host has not installed one.
    pub fn from_installed() -> RpcResult<Self> {
        Ok(Self::new(bridge::installed()?))
    }

    pub fn from_installed_with_config(config: &ClientConfig) -> RpcResult<Self> {
        Ok(Self::with_config(bridge::installed()?, config))
    }

    pub fn convention(&self) -> ArgumentConvention {
        self.convention
    }

    /// Encode an argument per the active convention.
    pub fn encode<A>(&self, argument: &A) -> RpcResult<Value>
    where
        A: PositionalArgs + ?Sized,
    {
        self.convention.encode(argument)
    }

    pub async fn invoke(&self, method: Method, argument: Value) -> RpcResult<Value> {
        debug!("Invoking host method: {}", method);
        trace!("Argument for {}: {}", method, argument);

        self.bridge
            .call(method.as_str(), argument)
            .await
            .map_err(|e| {
                warn!("Host method {} failed: {}", method, e);
                e
            })
    }

    /// `invoke`, then decode the payload into `R`.
    pub async fn call<R>(&self, method: Method, argument: Value) -> RpcResult<R>
    where
        R: DeserializeOwned,
    {
        let value = self.invoke(method, argument).await?;
        serde_json::from_value(value).map_err(|e| {
            error!("Unexpected payload from {}: {}", method, e);
            RpcError::Decode(e)
        })
    }

    /// `invoke` for set-style methods that report soft failures in-band.
    pub async fn call_set(&self, method: Method, argument: Value) -> RpcResult<SetOutcome> {
        let value = self.invoke(method, argument).await?;
        Ok(SetOutcome::from_value(value))
    }
}

impl fmt::Debug for Rpc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rpc")
            .field("convention", &self.convention)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::envelope::HostError;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    struct ScriptedBridge {
        reply: RpcResult<Value>,
        calls: Mutex<Vec<(String, Value)>>,
    }

    impl ScriptedBridge {
        fn replying(value: Value) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(value),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn rejecting(code: u16, message: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(RpcError::Host(HostError::new(code, message))),
                calls: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl Bridge for ScriptedBridge {
        async fn call(&self, method: &str, argument: Value) -> RpcResult<Value> {
            self.calls
                .lock()
                .unwrap()
                .push((method.to_string(), argument));
            match &self.reply {
                Ok(value) => Ok(value.clone()),
                Err(RpcError::Host(err)) => Err(RpcError::Host(err.clone())),
                Err(other) => Err(RpcError::Transport(other.to_string())),
            }
        }
    }

    #[tokio::test]
    async fn test_invoke_forwards_unchanged() {
        let bridge = ScriptedBridge::replying(json!({"anything": [1, 2]}));
        let rpc = Rpc::new(bridge.clone());

        let value = rpc
            .invoke(Method::MediaSetVolume, json!(0.25))
            .await
            .unwrap();

        assert_eq!(value, json!({"anything": [1, 2]}));
        let calls = bridge.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], ("media.set_volume".to_string(), json!(0.25)));
    }

    #[tokio::test]
    async fn test_call_decodes() {
        let rpc = Rpc::new(ScriptedBridge::replying(json!(2)));
        let count: u32 = rpc.call(Method::BatteryCounts, Value::Null).await.unwrap();
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn test_call_decode_failure() {
        let rpc = Rpc::new(ScriptedBridge::replying(json!("not a number")));
        let result: RpcResult<u32> = rpc.call(Method::BatteryCounts, Value::Null).await;
        assert!(matches!(result, Err(RpcError::Decode(_))));
    }

    #[tokio::test]
    async fn test_host_rejection_passes_through() {
        let bridge = ScriptedBridge::rejecting(404, "Invalid command");
        let rpc = Rpc::new(bridge.clone());

        let err = rpc.invoke(Method::SysCpu, Value::Null).await.unwrap_err();
        match err {
            RpcError::Host(host) => {
                assert_eq!(host.code, 404);
                assert_eq!(host.message(), Some("Invalid command"));
            }
            other => panic!("expected host error, got {other:?}"),
        }
        assert_eq!(bridge.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_call_set_reads_in_band_error() {
        let rpc = Rpc::new(ScriptedBridge::replying(json!("device not found")));
        let outcome = rpc
            .call_set(Method::BrightnessSetMain, json!(75))
            .await
            .unwrap();
        assert_eq!(outcome, SetOutcome::Rejected("device not found".into()));
    }

    #[test]
    fn test_config_selects_convention() {
        let config = ClientConfig::default().with_convention(ArgumentConvention::LegacyPositional);
        let rpc = Rpc::with_config(ScriptedBridge::replying(Value::Null), &config);
        assert_eq!(rpc.convention(), ArgumentConvention::LegacyPositional);
        assert!(format!("{rpc:?}").contains("LegacyPositional"));
    }
}
