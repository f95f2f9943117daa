//! Device, link, and vertex types for the topology graph.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Dense vertex identity: always exactly `0..graph.len()`, no gaps.
pub type VertexId = usize;

/// Maximum byte length of a device name; longer names are truncated.
pub const MAX_NAME_LEN: usize = 49;

/// Kind of network device a vertex represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceKind {
    /// Application or file server.
    Server,
    /// Packet switch; may link to any device kind.
    Switch,
    /// End-user workstation.
    Computer,
    /// Wireless access point.
    AccessPoint,
}

impl DeviceKind {
    /// Directional connection rule table.
    ///
    /// A pair of devices forms a legal *undirected* link when this holds in
    /// either direction; see [`NetworkGraph::add_edge`](super::NetworkGraph::add_edge).
    #[must_use]
    pub fn may_connect_to(self, other: DeviceKind) -> bool {
        match self {
            DeviceKind::Server => matches!(other, DeviceKind::Switch),
            DeviceKind::Computer => matches!(
                other,
                DeviceKind::Switch | DeviceKind::AccessPoint | DeviceKind::Computer
            ),
            DeviceKind::AccessPoint => {
                matches!(other, DeviceKind::Switch | DeviceKind::Computer)
            }
            DeviceKind::Switch => true,
        }
    }

    /// Display label used in listings and Mermaid output.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DeviceKind::Server => "Server",
            DeviceKind::Switch => "Switch",
            DeviceKind::Computer => "Computer",
            DeviceKind::AccessPoint => "Access Point",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind of physical link between two devices.
///
/// Each kind carries a fixed routing cost; lower is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkKind {
    /// Satellite uplink, cost 3.
    Satellite,
    /// Wi-Fi, cost 2.
    WiFi,
    /// Copper cable, cost 1.
    Cable,
    /// Optical fiber, cost 0.
    Fiber,
}

impl LinkKind {
    /// Routing cost of one hop over this link kind.
    #[must_use]
    pub fn cost(self) -> u32 {
        match self {
            LinkKind::Fiber => 0,
            LinkKind::Cable => 1,
            LinkKind::WiFi => 2,
            LinkKind::Satellite => 3,
        }
    }

    /// Display label used in listings and Mermaid output.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            LinkKind::Satellite => "Satellite",
            LinkKind::WiFi => "WiFi",
            LinkKind::Cable => "Cable",
            LinkKind::Fiber => "Fiber",
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One directed half of an undirected link.
///
/// Every link is stored as a mirrored pair of `Edge` records, one in each
/// endpoint's adjacency list, always inserted and removed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Destination vertex.
    pub to: VertexId,
    /// Link kind, shared by both halves of the pair.
    pub link: LinkKind,
}

/// Adjacency storage; inline up to 4 edges before spilling to the heap.
pub(crate) type AdjacencyList = SmallVec<[Edge; 4]>;

/// A device in the topology graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    id: VertexId,
    kind: DeviceKind,
    name: String,
    pub(crate) edges: AdjacencyList,
}

impl Vertex {
    pub(crate) fn new(id: VertexId, kind: DeviceKind, name: &str) -> Self {
        Self {
            id,
            kind,
            name: truncate_name(name),
            edges: AdjacencyList::new(),
        }
    }

    /// Returns the vertex id (dense, equal to its position in the graph).
    #[must_use]
    pub fn id(&self) -> VertexId {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: VertexId) {
        self.id = id;
    }

    /// Returns the device kind.
    #[must_use]
    pub fn kind(&self) -> DeviceKind {
        self.kind
    }

    /// Returns the device name (already truncated to [`MAX_NAME_LEN`]).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the adjacency list, most-recently-linked neighbor first.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of links attached to this device.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.edges.len()
    }
}

/// Truncates a name to [`MAX_NAME_LEN`] bytes without splitting a character.
fn truncate_name(name: &str) -> String {
    if name.len() <= MAX_NAME_LEN {
        return name.to_string();
    }
    let mut end = MAX_NAME_LEN;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    name[..end].to_string()
}
