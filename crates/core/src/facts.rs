//! Static platform facts published by the host.

use serde::{Deserialize, Serialize};

/// Facts object the host injects next to the bridge. Fields may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostFacts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_arch: Option<String>,
}

impl HostFacts {
    /// Facts for the current process, as a host running here would publish them.
    pub fn native() -> Self {
        Self {
            os: Some(std::env::consts::OS.to_string()),
            os_arch: Some(std::env::consts::ARCH.to_string()),
        }
    }
}

/// Operating system and CPU architecture of the host.
///
/// Values follow `std::env::consts::{OS, ARCH}` naming (`"linux"`, `"x86_64"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct General {
    pub os: String,
    pub arch: String,
}

impl General {
    pub fn from_facts(facts: &HostFacts) -> Self {
        Self::from(facts.clone())
    }
}

impl From<HostFacts> for General {
    fn from(facts: HostFacts) -> Self {
        Self {
            os: facts.os.unwrap_or_default(),
            arch: facts.os_arch.unwrap_or_default(),
        }
    }
}
