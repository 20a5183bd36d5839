//! Host response envelope.
//!
//! The host answers every call with `{ "status": <http code>, "data": <string> }`.
//! A `200` resolves with `data` parsed as JSON, or with the raw string when it
//! is not JSON. Any other status is a rejection carrying the code and payload.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const STATUS_OK: u16 = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub status: u16,
    #[serde(default)]
    pub data: String,
}

impl Envelope {
    pub fn ok(data: impl Into<String>) -> Self {
        Self {
            status: STATUS_OK,
            data: data.into(),
        }
    }

    pub fn error(status: u16, data: impl Into<String>) -> Self {
        Self {
            status,
            data: data.into(),
        }
    }

    /// Resolve the envelope the way the host-side script does.
    pub fn into_result(self) -> Result<Value, HostError> {
        if self.status == STATUS_OK {
            return match serde_json::from_str::<Value>(&self.data) {
                Ok(value) => Ok(value),
                Err(_) => Ok(Value::String(self.data)),
            };
        }

        let data = match serde_json::from_str::<Value>(&self.data) {
            Ok(Value::Object(fields)) => HostErrorData::Fields(fields),
            _ => HostErrorData::Message(self.data),
        };
        Err(HostError {
            code: self.status,
            data,
        })
    }
}

/// Payload of a rejected call: a message, or a structured mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HostErrorData {
    Message(String),
    Fields(Map<String, Value>),
}

/// A status-coded failure reported by the host.
///
/// Codes follow HTTP conventions. Nothing in this crate branches on a
/// specific code; the range helpers are for callers that want to log or
/// classify.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostError {
    pub code: u16,
    pub data: HostErrorData,
}

impl HostError {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            data: HostErrorData::Message(message.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        match &self.data {
            HostErrorData::Message(message) => Some(message),
            HostErrorData::Fields(_) => None,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.code)
    }

    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.code)
    }
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data {
            HostErrorData::Message(message) => write!(f, "{} {}", self.code, message),
            HostErrorData::Fields(fields) => {
                write!(f, "{} {}", self.code, Value::Object(fields.clone()))
            }
        }
    }
}

impl std::error::Error for HostError {}
