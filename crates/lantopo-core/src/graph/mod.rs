//! Topology graph engine: device/link model, legality rules, cheapest-route
//! search, and Mermaid export.
//!
//! # Example
//!
//! ```rust
//! use lantopo_core::graph::{cheapest_route, DeviceKind, LinkKind, NetworkGraph};
//!
//! let mut graph = NetworkGraph::new(10);
//! let pc = graph.add_vertex(DeviceKind::Computer, "Desk PC").unwrap();
//! let hub = graph.add_vertex(DeviceKind::Switch, "Core switch").unwrap();
//! let srv = graph.add_vertex(DeviceKind::Server, "File server").unwrap();
//! graph.add_edge(pc, hub, LinkKind::Cable).unwrap();
//! graph.add_edge(hub, srv, LinkKind::Fiber).unwrap();
//!
//! let route = cheapest_route(&graph, pc, srv).unwrap();
//! assert_eq!(route.hops, vec![pc, hub, srv]);
//! assert_eq!(route.cost, 1);
//! ```

pub mod mermaid;
mod route;
mod store;
mod types;

#[cfg(test)]
mod mermaid_tests;
#[cfg(test)]
mod types_tests;

pub use mermaid::write_mermaid;
pub use route::{cheapest_route, Route};
pub use store::NetworkGraph;
pub use types::{DeviceKind, Edge, LinkKind, Vertex, VertexId, MAX_NAME_LEN};
