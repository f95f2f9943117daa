//! Tests for device/link types and the connection rule table.

use super::types::{DeviceKind, LinkKind, Vertex, MAX_NAME_LEN};

#[test]
fn test_link_cost_table() {
    assert_eq!(LinkKind::Fiber.cost(), 0);
    assert_eq!(LinkKind::Cable.cost(), 1);
    assert_eq!(LinkKind::WiFi.cost(), 2);
    assert_eq!(LinkKind::Satellite.cost(), 3);
}

#[test]
fn test_device_labels() {
    assert_eq!(DeviceKind::Server.to_string(), "Server");
    assert_eq!(DeviceKind::AccessPoint.to_string(), "Access Point");
    assert_eq!(LinkKind::Fiber.to_string(), "Fiber");
    assert_eq!(LinkKind::Satellite.to_string(), "Satellite");
}

#[test]
fn test_server_only_connects_to_switch() {
    assert!(DeviceKind::Server.may_connect_to(DeviceKind::Switch));
    assert!(!DeviceKind::Server.may_connect_to(DeviceKind::Server));
    assert!(!DeviceKind::Server.may_connect_to(DeviceKind::Computer));
    assert!(!DeviceKind::Server.may_connect_to(DeviceKind::AccessPoint));
}

#[test]
fn test_computer_rule() {
    assert!(DeviceKind::Computer.may_connect_to(DeviceKind::Switch));
    assert!(DeviceKind::Computer.may_connect_to(DeviceKind::AccessPoint));
    assert!(DeviceKind::Computer.may_connect_to(DeviceKind::Computer));
    assert!(!DeviceKind::Computer.may_connect_to(DeviceKind::Server));
}

#[test]
fn test_access_point_rule() {
    assert!(DeviceKind::AccessPoint.may_connect_to(DeviceKind::Switch));
    assert!(DeviceKind::AccessPoint.may_connect_to(DeviceKind::Computer));
    assert!(!DeviceKind::AccessPoint.may_connect_to(DeviceKind::Server));
    assert!(!DeviceKind::AccessPoint.may_connect_to(DeviceKind::AccessPoint));
}

#[test]
fn test_switch_connects_to_anything() {
    for kind in [
        DeviceKind::Server,
        DeviceKind::Switch,
        DeviceKind::Computer,
        DeviceKind::AccessPoint,
    ] {
        assert!(DeviceKind::Switch.may_connect_to(kind));
    }
}

#[test]
fn test_vertex_name_truncation() {
    let long = "x".repeat(MAX_NAME_LEN + 20);
    let vertex = Vertex::new(0, DeviceKind::Computer, &long);
    assert_eq!(vertex.name().len(), MAX_NAME_LEN);
}

#[test]
fn test_vertex_name_truncation_respects_char_boundary() {
    // 'é' is 2 bytes; a run of them never lands exactly on the 49-byte bound.
    let long = "é".repeat(40);
    let vertex = Vertex::new(0, DeviceKind::Computer, &long);
    assert!(vertex.name().len() <= MAX_NAME_LEN);
    assert!(vertex.name().chars().all(|c| c == 'é'));
}

#[test]
fn test_short_name_kept_verbatim() {
    let vertex = Vertex::new(3, DeviceKind::Server, "Server 1");
    assert_eq!(vertex.id(), 3);
    assert_eq!(vertex.kind(), DeviceKind::Server);
    assert_eq!(vertex.name(), "Server 1");
    assert_eq!(vertex.degree(), 0);
}

#[test]
fn test_vertex_serialize_deserialize() {
    let vertex = Vertex::new(1, DeviceKind::AccessPoint, "AP West");
    let json = serde_json::to_string(&vertex).unwrap();
    let restored: Vertex = serde_json::from_str(&json).unwrap();
    assert_eq!(vertex, restored);
}
