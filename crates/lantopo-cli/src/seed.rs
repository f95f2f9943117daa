//! Sample network fixture.

use lantopo_core::{DeviceKind, LinkKind, NetworkGraph, Result};

/// Populates an empty graph with the demo topology from the README:
/// three servers, two switches, two access points, seven computers.
pub fn seed_sample_network(graph: &mut NetworkGraph) -> Result<()> {
    let server1 = graph.add_vertex(DeviceKind::Server, "Server 1")?;
    let switch1 = graph.add_vertex(DeviceKind::Switch, "Switch 1")?;
    let computer1 = graph.add_vertex(DeviceKind::Computer, "Computer 1")?;
    let access_point1 = graph.add_vertex(DeviceKind::AccessPoint, "Access Point 1")?;
    let computer2 = graph.add_vertex(DeviceKind::Computer, "Computer 2")?;
    let server2 = graph.add_vertex(DeviceKind::Server, "Server 2")?;
    let switch2 = graph.add_vertex(DeviceKind::Switch, "Switch 2")?;
    let computer3 = graph.add_vertex(DeviceKind::Computer, "Computer 3")?;
    let access_point2 = graph.add_vertex(DeviceKind::AccessPoint, "Access Point 2")?;
    let computer4 = graph.add_vertex(DeviceKind::Computer, "Computer 4")?;
    let server3 = graph.add_vertex(DeviceKind::Server, "Server 3")?;
    let computer5 = graph.add_vertex(DeviceKind::Computer, "Computer 5")?;
    let computer6 = graph.add_vertex(DeviceKind::Computer, "Computer 6")?;
    let computer7 = graph.add_vertex(DeviceKind::Computer, "Computer 7")?;

    graph.add_edge(server1, switch1, LinkKind::Fiber)?;
    graph.add_edge(switch1, computer1, LinkKind::WiFi)?;
    graph.add_edge(switch1, access_point1, LinkKind::Cable)?;
    graph.add_edge(access_point1, computer2, LinkKind::WiFi)?;
    graph.add_edge(switch1, server2, LinkKind::Satellite)?;
    graph.add_edge(server2, switch2, LinkKind::Fiber)?;
    graph.add_edge(switch2, computer3, LinkKind::Cable)?;
    graph.add_edge(switch2, access_point2, LinkKind::WiFi)?;
    graph.add_edge(access_point2, computer4, LinkKind::WiFi)?;
    graph.add_edge(switch2, server3, LinkKind::Satellite)?;
    graph.add_edge(switch1, computer5, LinkKind::Cable)?;
    graph.add_edge(computer5, computer6, LinkKind::WiFi)?;
    graph.add_edge(access_point1, computer7, LinkKind::Cable)?;

    Ok(())
}
