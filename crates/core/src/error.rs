use thiserror::Error;

use crate::envelope::HostError;

/// Errors surfaced by the call primitive and the façades built on it.
#[derive(Error, Debug)]
pub enum RpcError {
    #[error("Bridge unavailable: no bridge has been installed")]
    BridgeUnavailable,

    #[error("Bridge already installed")]
    AlreadyInstalled,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Host error: {0}")]
    Host(HostError),

    #[error("Unknown method: {0}")]
    UnknownMethod(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Encode error: {0}")]
    Encode(serde_json::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<HostError> for RpcError {
    fn from(err: HostError) -> Self {
        RpcError::Host(err)
    }
}

pub type RpcResult<T> = Result<T, RpcError>;
