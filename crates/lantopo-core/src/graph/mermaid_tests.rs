//! Tests for Mermaid export.

use super::mermaid::write_mermaid;
use super::store::NetworkGraph;
use super::types::{DeviceKind, LinkKind};

fn render(graph: &NetworkGraph) -> String {
    let mut buf = Vec::new();
    write_mermaid(graph, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_empty_graph_renders_header_only() {
    let graph = NetworkGraph::new(5);
    assert_eq!(render(&graph), "graph TD\n");
}

#[test]
fn test_nodes_and_links() {
    let mut graph = NetworkGraph::new(5);
    graph.add_vertex(DeviceKind::Server, "Server 1").unwrap();
    graph.add_vertex(DeviceKind::Switch, "Switch 1").unwrap();
    graph.add_edge(0, 1, LinkKind::Fiber).unwrap();

    let out = render(&graph);
    assert_eq!(
        out,
        "graph TD\n    0[\"Server 1\"]\n    1[\"Switch 1\"]\n    0 -- Fiber --> 1\n"
    );
}

#[test]
fn test_each_undirected_link_emitted_once() {
    let mut graph = NetworkGraph::new(5);
    graph.add_vertex(DeviceKind::Switch, "hub").unwrap();
    graph.add_vertex(DeviceKind::Computer, "pc1").unwrap();
    graph.add_vertex(DeviceKind::Computer, "pc2").unwrap();
    graph.add_edge(0, 1, LinkKind::Cable).unwrap();
    graph.add_edge(2, 0, LinkKind::WiFi).unwrap();
    graph.add_edge(1, 2, LinkKind::WiFi).unwrap();

    let out = render(&graph);
    let link_lines: Vec<&str> = out.lines().filter(|l| l.contains("-->")).collect();
    assert_eq!(link_lines.len(), 3);
    assert!(link_lines.contains(&"    0 -- Cable --> 1"));
    assert!(link_lines.contains(&"    0 -- WiFi --> 2"));
    assert!(link_lines.contains(&"    1 -- WiFi --> 2"));
}
