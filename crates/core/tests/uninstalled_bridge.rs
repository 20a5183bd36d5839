#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Nothing in this test binary installs a bridge.

use widget_bridge_core::*;

#[test]
fn test_lookup_before_install_fails() {
    assert!(!is_installed());
    assert!(matches!(installed(), Err(RpcError::BridgeUnavailable)));
}

#[test]
fn test_rpc_from_installed_fails_without_bridge() {
    let result = Rpc::from_installed();
    assert!(matches!(result, Err(RpcError::BridgeUnavailable)));
}

#[test]
fn test_config_path_also_fails_without_bridge() {
    let config = ClientConfig::default();
    let result = Rpc::from_installed_with_config(&config);
    assert!(matches!(result, Err(RpcError::BridgeUnavailable)));
}
