//! The closed vocabulary of host methods.

use std::fmt;
use std::str::FromStr;

use crate::error::RpcError;

/// Every remote method the widget host recognizes.
///
/// The wire names are fixed; `as_str` returns them verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    BatteryCounts,
    BatteryAll,
    BatteryMain,
    BrightnessMain,
    BrightnessAll,
    BrightnessSetMain,
    BrightnessSetAll,
    SysDisks,
    SysNet,
    SysInfo,
    SysMemory,
    SysCpu,
    MediaPlayPause,
    MediaNext,
    MediaPrev,
    MediaSetVolume,
    MediaState,
    MediaGetVolume,
    MediaActive,
    WidgetInfo,
    WidgetMove,
    WidgetResize,
    Exec,
}

impl Method {
    pub const ALL: [Method; 23] = [
        Method::BatteryCounts,
        Method::BatteryAll,
        Method::BatteryMain,
        Method::BrightnessMain,
        Method::BrightnessAll,
        Method::BrightnessSetMain,
        Method::BrightnessSetAll,
        Method::SysDisks,
        Method::SysNet,
        Method::SysInfo,
        Method::SysMemory,
        Method::SysCpu,
        Method::MediaPlayPause,
        Method::MediaNext,
        Method::MediaPrev,
        Method::MediaSetVolume,
        Method::MediaState,
        Method::MediaGetVolume,
        Method::MediaActive,
        Method::WidgetInfo,
        Method::WidgetMove,
        Method::WidgetResize,
        Method::Exec,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Method::BatteryCounts => "battery.counts",
            Method::BatteryAll => "battery.all",
            Method::BatteryMain => "battery.main",
            Method::BrightnessMain => "brightness.main",
            Method::BrightnessAll => "brightness.all",
            Method::BrightnessSetMain => "brightness.set_main",
            Method::BrightnessSetAll => "brightness.set_all",
            Method::SysDisks => "sys.disks",
            Method::SysNet => "sys.net",
            Method::SysInfo => "sys.info",
            Method::SysMemory => "sys.memory",
            Method::SysCpu => "sys.cpu",
            Method::MediaPlayPause => "media.play_pause",
            Method::MediaNext => "media.next",
            Method::MediaPrev => "media.prev",
            Method::MediaSetVolume => "media.set_volume",
            Method::MediaState => "media.state",
            Method::MediaGetVolume => "media.get_volume",
            Method::MediaActive => "media.active",
            Method::WidgetInfo => "widget.info",
            Method::WidgetMove => "widget.move",
            Method::WidgetResize => "widget.resize",
            Method::Exec => "exec",
        }
    }

    /// Leading segment of the wire name (`"battery"`, `"sys"`, `"exec"`, ...).
    pub fn namespace(self) -> &'static str {
        let name = self.as_str();
        match name.split_once('.') {
            Some((namespace, _)) => namespace,
            None => name,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = RpcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .iter()
            .copied()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| RpcError::UnknownMethod(s.to_string()))
    }
}
