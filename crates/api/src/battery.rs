//! Battery snapshots.

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::trace;
use widget_bridge_core::{Method, Rpc, RpcResult};

/// Lowercased alphanumerics only, so `"lithium-ion"` matches `"LithiumIon"`.
fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|ch| ch.is_ascii_alphanumeric())
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BatteryState {
    Unknown,
    Charging,
    Discharging,
    Empty,
    Full,
    /// A state this client does not know about, kept as sent.
    Other(String),
}

impl BatteryState {
    pub fn as_str(&self) -> &str {
        match self {
            BatteryState::Unknown => "unknown",
            BatteryState::Charging => "charging",
            BatteryState::Discharging => "discharging",
            BatteryState::Empty => "empty",
            BatteryState::Full => "full",
            BatteryState::Other(raw) => raw,
        }
    }
}

impl From<String> for BatteryState {
    fn from(raw: String) -> Self {
        match normalize(&raw).as_str() {
            "unknown" => BatteryState::Unknown,
            "charging" => BatteryState::Charging,
            "discharging" => BatteryState::Discharging,
            "empty" => BatteryState::Empty,
            "full" => BatteryState::Full,
            _ => BatteryState::Other(raw),
        }
    }
}

impl From<BatteryState> for String {
    fn from(state: BatteryState) -> Self {
        match state {
            BatteryState::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BatteryTechnology {
    Unknown,
    LithiumIon,
    LeadAcid,
    LithiumPolymer,
    NickelMetalHydride,
    NickelCadmium,
    NickelZinc,
    LithiumIronPhosphate,
    RechargeableAlkalineManganese,
    Other(String),
}

impl BatteryTechnology {
    pub fn as_str(&self) -> &str {
        match self {
            BatteryTechnology::Unknown => "Unknown",
            BatteryTechnology::LithiumIon => "LithiumIon",
            BatteryTechnology::LeadAcid => "LeadAcid",
            BatteryTechnology::LithiumPolymer => "LithiumPolymer",
            BatteryTechnology::NickelMetalHydride => "NickelMetalHydride",
            BatteryTechnology::NickelCadmium => "NickelCadmium",
            BatteryTechnology::NickelZinc => "NickelZinc",
            BatteryTechnology::LithiumIronPhosphate => "LithiumIronPhosphate",
            BatteryTechnology::RechargeableAlkalineManganese => "RechargeableAlkalineManganese",
            BatteryTechnology::Other(raw) => raw,
        }
    }
}

impl From<String> for BatteryTechnology {
    fn from(raw: String) -> Self {
        match normalize(&raw).as_str() {
            "unknown" => BatteryTechnology::Unknown,
            "lithiumion" => BatteryTechnology::LithiumIon,
            "leadacid" => BatteryTechnology::LeadAcid,
            "lithiumpolymer" => BatteryTechnology::LithiumPolymer,
            "nickelmetalhydride" => BatteryTechnology::NickelMetalHydride,
            "nickelcadmium" => BatteryTechnology::NickelCadmium,
            "nickelzinc" => BatteryTechnology::NickelZinc,
            "lithiumironphosphate" => BatteryTechnology::LithiumIronPhosphate,
            "rechargeablealkalinemanganese" => BatteryTechnology::RechargeableAlkalineManganese,
            _ => BatteryTechnology::Other(raw),
        }
    }
}

impl From<BatteryTechnology> for String {
    fn from(technology: BatteryTechnology) -> Self {
        match technology {
            BatteryTechnology::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// The host computes some readings as floats; a NaN (e.g. `energy_full` of
/// zero) reaches the wire as `null`.
fn nan_if_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// One battery at the time of the call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Battery {
    pub vendor: String,
    pub model: String,
    pub serial: String,
    /// Percent of `energy_full` currently available.
    #[serde(deserialize_with = "nan_if_null")]
    pub percentage: f64,
    #[serde(deserialize_with = "nan_if_null")]
    pub energy: f64,
    #[serde(deserialize_with = "nan_if_null")]
    pub energy_full: f64,
    #[serde(deserialize_with = "nan_if_null")]
    pub voltage: f64,
    pub state: BatteryState,
    /// State of health, in percent.
    #[serde(deserialize_with = "nan_if_null")]
    pub health: f64,
    pub technology: BatteryTechnology,
    #[serde(deserialize_with = "nan_if_null")]
    pub temperature: f64,
    pub cycle_count: u32,
    /// Seconds until full; zero when the host cannot tell.
    #[serde(deserialize_with = "nan_if_null")]
    pub time_to_full: f64,
    /// Seconds until empty; zero when the host cannot tell.
    #[serde(deserialize_with = "nan_if_null")]
    pub time_to_empty: f64,
}

impl Battery {
    pub fn is_charging(&self) -> bool {
        self.state == BatteryState::Charging
    }

    pub fn time_to_full_duration(&self) -> Option<Duration> {
        seconds(self.time_to_full)
    }

    pub fn time_to_empty_duration(&self) -> Option<Duration> {
        seconds(self.time_to_empty)
    }
}

fn seconds(value: f64) -> Option<Duration> {
    (value.is_finite() && value > 0.0).then(|| Duration::from_secs_f64(value))
}

#[derive(Debug, Clone)]
pub struct BatteryApi {
    rpc: Rpc,
}

impl BatteryApi {
    pub fn new(rpc: Rpc) -> Self {
        Self { rpc }
    }

    pub async fn counts(&self) -> RpcResult<u32> {
        trace!("Request batteries count");
        self.rpc.call(Method::BatteryCounts, Value::Null).await
    }

    pub async fn all(&self) -> RpcResult<Vec<Battery>> {
        trace!("Request all batteries");
        self.rpc.call(Method::BatteryAll, Value::Null).await
    }

    pub async fn main(&self) -> RpcResult<Battery> {
        trace!("Request main battery");
        self.rpc.call(Method::BatteryMain, Value::Null).await
    }
}
