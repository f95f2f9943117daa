//! # LanTopo Core
//!
//! Topology graph engine for small computer networks.
//!
//! Models a network as a fixed-capacity undirected graph of devices
//! (servers, switches, computers, access points) joined by typed links
//! (fiber, cable, Wi-Fi, satellite), enforces which device kinds may
//! connect, and finds the cheapest route between two devices.
//!
//! ## Quick start
//!
//! ```rust
//! use lantopo_core::{cheapest_route, DeviceKind, LinkKind, NetworkGraph};
//!
//! let mut net = NetworkGraph::new(50);
//! let srv = net.add_vertex(DeviceKind::Server, "Server 1")?;
//! let hub = net.add_vertex(DeviceKind::Switch, "Switch 1")?;
//! let pc = net.add_vertex(DeviceKind::Computer, "Computer 1")?;
//! net.add_edge(srv, hub, LinkKind::Fiber)?;
//! net.add_edge(hub, pc, LinkKind::Cable)?;
//!
//! let route = cheapest_route(&net, srv, pc).expect("connected");
//! assert_eq!(route.cost, 1);
//! # Ok::<(), lantopo_core::Error>(())
//! ```

#![warn(missing_docs)]

pub mod config;
#[cfg(test)]
mod config_tests;
pub mod error;
#[cfg(test)]
mod error_tests;
pub mod graph;

pub use config::{ConfigError, GraphSettings, LoggingSettings, Settings};
pub use error::{Error, Result};
pub use graph::{
    cheapest_route, write_mermaid, DeviceKind, Edge, LinkKind, NetworkGraph, Route, Vertex,
    VertexId, MAX_NAME_LEN,
};
