use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Result of a host "set" operation that reports soft failures in-band.
///
/// The host resolves these calls with nothing on success and with a message
/// string when the change could not be applied (e.g. `"device not found"`).
/// A rejected call is still an `Err` on the surrounding `Result`.
///
/// Serializes to the same wire form: `null` or the message string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetOutcome {
    Applied,
    Rejected(String),
}

impl SetOutcome {
    /// `null`, an empty string and any non-string payload mean success.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(message) if !message.is_empty() => SetOutcome::Rejected(message),
            _ => SetOutcome::Applied,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, SetOutcome::Applied)
    }

    pub fn rejection(&self) -> Option<&str> {
        match self {
            SetOutcome::Applied => None,
            SetOutcome::Rejected(message) => Some(message),
        }
    }

    pub fn into_result(self) -> Result<(), String> {
        match self {
            SetOutcome::Applied => Ok(()),
            SetOutcome::Rejected(message) => Err(message),
        }
    }
}

impl Serialize for SetOutcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            SetOutcome::Applied => serializer.serialize_unit(),
            SetOutcome::Rejected(message) => serializer.serialize_str(message),
        }
    }
}

impl<'de> Deserialize<'de> for SetOutcome {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(SetOutcome::from_value)
    }
}
