//! Identity and geometry of the calling widget window.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;
use tracing::trace;
use widget_bridge_core::{Method, NoArgs, PositionalArgs, Rpc, RpcResult};

use crate::to_number;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetInfo {
    pub name: String,
    /// Arguments passed by the CLI when the widget was opened.
    pub widget_args: Vec<String>,
}

/// One axis of a position or size: a plain number, or a unit-suffixed string
/// such as `"50%"`. The client never does arithmetic on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    Absolute(Number),
    Relative(String),
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinate::Absolute(number) => write!(f, "{number}"),
            Coordinate::Relative(raw) => f.write_str(raw),
        }
    }
}

macro_rules! coordinate_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Coordinate {
                fn from(value: $ty) -> Self {
                    Coordinate::Absolute(Number::from(value))
                }
            }
        )*
    };
}

coordinate_from_int!(i32, i64, u32, u64);

impl From<f64> for Coordinate {
    /// Whole values become integers, as a JS caller would send them;
    /// non-finite values become `0`.
    fn from(value: f64) -> Self {
        Coordinate::Absolute(to_number(value).unwrap_or_else(|| Number::from(0)))
    }
}

impl From<&str> for Coordinate {
    fn from(value: &str) -> Self {
        Coordinate::Relative(value.to_string())
    }
}

impl From<String> for Coordinate {
    fn from(value: String) -> Self {
        Coordinate::Relative(value)
    }
}

/// Target position or size of the widget window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetVector {
    pub x: Coordinate,
    pub y: Coordinate,
}

impl WidgetVector {
    pub fn new(x: impl Into<Coordinate>, y: impl Into<Coordinate>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl PositionalArgs for WidgetVector {
    fn positional(&self) -> Vec<String> {
        vec![self.x.to_string(), self.y.to_string()]
    }
}

#[derive(Debug, Clone)]
pub struct WidgetApi {
    rpc: Rpc,
}

impl WidgetApi {
    pub fn new(rpc: Rpc) -> Self {
        Self { rpc }
    }

    pub async fn info(&self) -> RpcResult<WidgetInfo> {
        trace!("Request widget info");
        let argument = self.rpc.encode(&NoArgs)?;
        self.rpc.call(Method::WidgetInfo, argument).await
    }

    pub async fn move_to(&self, position: &WidgetVector) -> RpcResult<WidgetInfo> {
        trace!("Request widget move to ({}, {})", position.x, position.y);
        let argument = self.rpc.encode(position)?;
        self.rpc.call(Method::WidgetMove, argument).await
    }

    pub async fn resize(&self, size: &WidgetVector) -> RpcResult<WidgetInfo> {
        trace!("Request widget resize to {}x{}", size.x, size.y);
        let argument = self.rpc.encode(size)?;
        self.rpc.call(Method::WidgetResize, argument).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mixed_units_serialize_untouched() {
        let vector = WidgetVector::new(10, "50%");
        assert_eq!(
            serde_json::to_value(&vector).unwrap(),
            json!({"x": 10, "y": "50%"})
        );
    }

    #[test]
    fn test_positional_form() {
        assert_eq!(WidgetVector::new(10, "50%").positional(), vec!["10", "50%"]);
        assert_eq!(WidgetVector::new(12.5, 300).positional(), vec!["12.5", "300"]);
    }

    #[test]
    fn test_deserialize_either_kind() {
        let vector: WidgetVector = serde_json::from_value(json!({"x": "25%", "y": 40})).unwrap();
        assert_eq!(vector.x, Coordinate::Relative("25%".into()));
        assert_eq!(vector.y, Coordinate::from(40));
    }

    #[test]
    fn test_whole_float_is_sent_as_integer() {
        let vector = WidgetVector::new(10.0, "50%");
        assert_eq!(vector.positional(), vec!["10", "50%"]);
        assert_eq!(
            serde_json::to_value(&vector).unwrap(),
            json!({"x": 10, "y": "50%"})
        );
        assert_eq!(Coordinate::from(10.0), Coordinate::from(10));
    }

    #[test]
    fn test_non_finite_is_zero() {
        assert_eq!(Coordinate::from(f64::INFINITY), Coordinate::from(0));
    }
}
