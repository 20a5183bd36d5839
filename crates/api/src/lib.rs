//! Typed façades over the widget host's remote methods.
//!
//! Each façade owns a clone of the shared [`Rpc`] handle and exposes one
//! async method per host method. Façades keep no state between calls.

pub mod battery;
pub mod brightness;
pub mod host;
pub mod media;
pub mod process;
pub mod sysinfo;
pub mod widget;

use serde_json::{Number, Value};

pub use battery::{Battery, BatteryApi, BatteryState, BatteryTechnology};
pub use brightness::{BrightnessApi, BrightnessDevice};
pub use host::WidgetHost;
pub use media::{MediaApi, MediaMetadata, MediaState};
pub use process::{ExecParams, ProcessApi};
pub use sysinfo::{Cpu, Disk, Memory, Network, SysInfo, SysInfoApi, SysUser};
pub use widget::{Coordinate, WidgetApi, WidgetInfo, WidgetVector};
pub use widget_bridge_core::{
    ArgumentConvention, Bridge, ClientConfig, General, HostError, HostFacts, Method, NoArgs,
    PositionalArgs, Rpc, RpcError, RpcResult, SetOutcome,
};

/// Whole numbers become integers (`10`, not `10.0`); `None` when not finite.
pub(crate) fn to_number(value: f64) -> Option<Number> {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(Number::from(value as i64))
    } else {
        Number::from_f64(value)
    }
}

/// [`to_number`] as a JSON value; non-finite as `null`.
pub(crate) fn number(value: f64) -> Value {
    to_number(value).map_or(Value::Null, Value::Number)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_whole_number_is_integer() {
        assert_eq!(number(75.0), json!(75));
        assert_eq!(number(0.0), json!(0));
    }

    #[test]
    fn test_fraction_is_kept() {
        assert_eq!(number(0.35), json!(0.35));
    }

    #[test]
    fn test_non_finite_becomes_null() {
        assert_eq!(number(f64::NAN), Value::Null);
        assert_eq!(number(f64::INFINITY), Value::Null);
        assert!(to_number(f64::NEG_INFINITY).is_none());
    }
}
