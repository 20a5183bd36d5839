use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::trace;
use widget_bridge_core::{Method, Rpc, RpcResult, SetOutcome};

/// A display or backlight device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrightnessDevice {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone)]
pub struct BrightnessApi {
    rpc: Rpc,
}

impl BrightnessApi {
    pub fn new(rpc: Rpc) -> Self {
        Self { rpc }
    }

    pub async fn main(&self) -> RpcResult<BrightnessDevice> {
        trace!("Request main brightness device");
        self.rpc.call(Method::BrightnessMain, Value::Null).await
    }

    pub async fn all(&self) -> RpcResult<Vec<BrightnessDevice>> {
        trace!("Request all brightness devices");
        self.rpc.call(Method::BrightnessAll, Value::Null).await
    }

    /// The level goes out as a bare unsigned integer, the only form the
    /// host accepts.
    pub async fn set_main(&self, level: u32) -> RpcResult<SetOutcome> {
        trace!("Set main brightness to {}", level);
        self.rpc.call_set(Method::BrightnessSetMain, json!(level)).await
    }

    pub async fn set_all(&self, level: u32) -> RpcResult<SetOutcome> {
        trace!("Set all brightness to {}", level);
        self.rpc.call_set(Method::BrightnessSetAll, json!(level)).await
    }
}
