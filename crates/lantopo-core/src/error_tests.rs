//! Tests for topology error display.

use crate::error::Error;
use crate::graph::DeviceKind;

#[test]
fn test_capacity_exhausted_display() {
    let err = Error::CapacityExhausted(50);
    assert_eq!(err.to_string(), "capacity exhausted: graph is full at 50 devices");
}

#[test]
fn test_vertex_not_found_display() {
    let err = Error::VertexNotFound(7);
    assert_eq!(err.to_string(), "no device with id 7");
}

#[test]
fn test_illegal_connection_display() {
    let err = Error::IllegalConnection(DeviceKind::Server, DeviceKind::Computer);
    assert_eq!(err.to_string(), "Server may not be linked to Computer");
}

#[test]
fn test_duplicate_edge_display() {
    let err = Error::DuplicateEdge(0, 1);
    assert_eq!(err.to_string(), "devices 0 and 1 are already linked");
}
