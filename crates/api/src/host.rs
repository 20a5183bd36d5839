use widget_bridge_core::{ClientConfig, General, HostFacts, Rpc, RpcResult};

use crate::battery::BatteryApi;
use crate::brightness::BrightnessApi;
use crate::media::MediaApi;
use crate::process::ProcessApi;
use crate::sysinfo::SysInfoApi;
use crate::widget::WidgetApi;

/// Every façade over one bridge, plus the host's platform facts.
#[derive(Debug, Clone)]
pub struct WidgetHost {
    pub general: General,
    pub battery: BatteryApi,
    pub brightness: BrightnessApi,
    pub sysinfo: SysInfoApi,
    pub media: MediaApi,
    pub widget: WidgetApi,
    pub process: ProcessApi,
}

impl WidgetHost {
    pub fn new(rpc: Rpc, facts: &HostFacts) -> Self {
        Self {
            general: General::from_facts(facts),
            battery: BatteryApi::new(rpc.clone()),
            brightness: BrightnessApi::new(rpc.clone()),
            sysinfo: SysInfoApi::new(rpc.clone()),
            media: MediaApi::new(rpc.clone()),
            widget: WidgetApi::new(rpc.clone()),
            process: ProcessApi::new(rpc),
        }
    }

    /// Wire up against the process-wide bridge; fails if none is installed.
    pub fn from_installed(facts: &HostFacts) -> RpcResult<Self> {
        Ok(Self::new(Rpc::from_installed()?, facts))
    }

    pub fn from_installed_with_config(facts: &HostFacts, config: &ClientConfig) -> RpcResult<Self> {
        Ok(Self::new(Rpc::from_installed_with_config(config)?, facts))
    }
}
