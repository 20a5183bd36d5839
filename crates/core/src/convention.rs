//! Argument encoding conventions.
//!
//! Current hosts take the argument as structured JSON. Older hosts expect a
//! list of stringified positional arguments for the widget geometry calls;
//! `LegacyPositional` produces that list for any argument that knows its
//! positional form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{RpcError, RpcResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArgumentConvention {
    #[default]
    #[serde(rename = "verbatim")]
    Verbatim,
    #[serde(rename = "legacy")]
    LegacyPositional,
}

/// An argument with a stringified positional form for legacy hosts.
pub trait PositionalArgs: Serialize {
    fn positional(&self) -> Vec<String>;
}

/// Argument of calls that take nothing. `null` when verbatim, `[]` when positional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NoArgs;

impl PositionalArgs for NoArgs {
    fn positional(&self) -> Vec<String> {
        Vec::new()
    }
}

impl ArgumentConvention {
    pub fn encode<A>(self, argument: &A) -> RpcResult<Value>
    where
        A: PositionalArgs + ?Sized,
    {
        match self {
            ArgumentConvention::Verbatim => {
                serde_json::to_value(argument).map_err(RpcError::Encode)
            }
            ArgumentConvention::LegacyPositional => Ok(Value::from(argument.positional())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ArgumentConvention::Verbatim => "verbatim",
            ArgumentConvention::LegacyPositional => "legacy",
        }
    }
}

impl fmt::Display for ArgumentConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArgumentConvention {
    type Err = RpcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "verbatim" => Ok(ArgumentConvention::Verbatim),
            "legacy" | "positional" => Ok(ArgumentConvention::LegacyPositional),
            other => Err(RpcError::Config(format!(
                "unknown argument convention: {other}"
            ))),
        }
    }
}
