//! Operating system facts: host, users, disks, network interfaces, memory, CPUs.
//!
//! Every method returns a list, even for resources a machine usually has one
//! of, so hosts can fan out (one entry per CPU, per memory node, ...).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;
use widget_bridge_core::{Method, Rpc, RpcResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SysInfo {
    /// DNS hostname.
    pub hostname: String,
    /// Seconds since boot.
    pub uptime: u64,
    pub kernel_version: String,
    /// Short version, e.g. `11.1` on macOS.
    pub os_version: String,
    /// Long version, e.g. `MacOS 11.2 BigSur`.
    pub long_os_version: String,
    pub users: Vec<SysUser>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SysUser {
    pub id: String,
    /// Always `"0"` on Windows, which has no per-user group.
    pub group_id: String,
    pub name: String,
    pub groups: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disk {
    pub name: String,
    /// Bytes.
    pub total_space: u64,
    /// Bytes.
    pub free_space: u64,
    pub is_removable: bool,
    pub mount_point: String,
    pub file_system: String,
}

impl Disk {
    pub fn used_space(&self) -> u64 {
        self.total_space.saturating_sub(self.free_space)
    }
}

/// Counters of one network interface.
///
/// Unprefixed counters cover the interval since the host last refreshed;
/// `total_*` counters are cumulative since boot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    pub name: String,
    pub received: u64,
    pub total_received: u64,
    pub transmitted: u64,
    pub total_transmitted: u64,
    pub packets_received: u64,
    pub total_packets_received: u64,
    pub packets_transmitted: u64,
    pub total_packets_transmitted: u64,
    pub errors_on_received: u64,
    pub total_errors_on_received: u64,
    pub errors_on_transmitted: u64,
    pub total_errors_on_transmitted: u64,
}

/// Memory and swap, in KB.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memory {
    pub total: u64,
    pub free: u64,
    #[serde(rename = "aviable", alias = "available")]
    pub available: u64,
    pub used: u64,
    pub swap_total: u64,
    pub swap_free: u64,
    pub swap_used: u64,
}

impl Memory {
    /// Used RAM over total, `0.0` when total is unknown.
    pub fn used_ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.used as f64 / self.total as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cpu {
    /// Percent.
    pub cpu_usage: f64,
    pub name: String,
    pub vendor_id: String,
    pub brand: String,
    /// MHz.
    pub frequency: u64,
}

#[derive(Debug, Clone)]
pub struct SysInfoApi {
    rpc: Rpc,
}

impl SysInfoApi {
    pub fn new(rpc: Rpc) -> Self {
        Self { rpc }
    }

    pub async fn disks(&self) -> RpcResult<Vec<Disk>> {
        trace!("Request disks");
        self.rpc.call(Method::SysDisks, Value::Null).await
    }

    pub async fn networks(&self) -> RpcResult<Vec<Network>> {
        trace!("Request network interfaces");
        self.rpc.call(Method::SysNet, Value::Null).await
    }

    pub async fn info(&self) -> RpcResult<Vec<SysInfo>> {
        trace!("Request system info");
        self.rpc.call(Method::SysInfo, Value::Null).await
    }

    pub async fn memory(&self) -> RpcResult<Vec<Memory>> {
        trace!("Request memory");
        self.rpc.call(Method::SysMemory, Value::Null).await
    }

    pub async fn cpu(&self) -> RpcResult<Vec<Cpu>> {
        trace!("Request cpus");
        self.rpc.call(Method::SysCpu, Value::Null).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_memory_keeps_host_spelling() {
        let wire = json!({
            "total": 16000, "free": 2000, "aviable": 9000, "used": 7000,
            "swap_total": 4000, "swap_free": 4000, "swap_used": 0
        });
        let memory: Memory = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(memory.available, 9000);
        assert_eq!(serde_json::to_value(&memory).unwrap(), wire);
        assert!((memory.used_ratio() - 0.4375).abs() < f64::EPSILON);
    }

    #[test]
    fn test_memory_accepts_corrected_spelling() {
        let memory: Memory = serde_json::from_value(json!({
            "total": 0, "free": 0, "available": 5, "used": 0,
            "swap_total": 0, "swap_free": 0, "swap_used": 0
        }))
        .unwrap();
        assert_eq!(memory.available, 5);
        assert_eq!(memory.used_ratio(), 0.0);
    }

    #[test]
    fn test_disk_used_space() {
        let disk = Disk {
            name: "nvme0n1p2".into(),
            total_space: 500,
            free_space: 120,
            is_removable: false,
            mount_point: "/".into(),
            file_system: "ext4".into(),
        };
        assert_eq!(disk.used_space(), 380);
    }
}
