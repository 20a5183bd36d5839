#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use widget_bridge_api::{Bridge, HostError, RpcError, RpcResult};

/// Fake host: records every `(method, argument)` and answers from a script.
#[derive(Default)]
pub struct RecordingBridge {
    calls: Mutex<Vec<(String, Value)>>,
    replies: Mutex<HashMap<String, Value>>,
    rejections: Mutex<HashMap<String, HostError>>,
}

impl RecordingBridge {
    pub fn new() -> Arc<Self> {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
        Arc::new(Self::default())
    }

    pub fn reply(&self, method: &str, value: Value) {
        self.replies
            .lock()
            .unwrap()
            .insert(method.to_string(), value);
    }

    pub fn reject(&self, method: &str, code: u16, message: &str) {
        self.rejections
            .lock()
            .unwrap()
            .insert(method.to_string(), HostError::new(code, message));
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }

    /// The single recorded call; fails the test if there was not exactly one.
    pub fn only_call(&self) -> (String, Value) {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one call, got {calls:?}");
        calls.into_iter().next().unwrap()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

#[async_trait]
impl Bridge for RecordingBridge {
    async fn call(&self, method: &str, argument: Value) -> RpcResult<Value> {
        self.calls
            .lock()
            .unwrap()
            .push((method.to_string(), argument));

        if let Some(err) = self.rejections.lock().unwrap().get(method) {
            return Err(RpcError::Host(err.clone()));
        }
        Ok(self
            .replies
            .lock()
            .unwrap()
            .get(method)
            .cloned()
            .unwrap_or(Value::Null))
    }
}
