//! Fixed-capacity topology graph with dense vertex ids.
//!
//! The graph is undirected: every link is held as a mirrored pair of
//! [`Edge`] records, one per endpoint, inserted and removed together so the
//! pair can never be observed out of sync. Vertex ids are dense (`0..len()`);
//! removing a vertex renumbers everything above it.

use tracing::debug;

use crate::error::{Error, Result};

use super::types::{DeviceKind, Edge, LinkKind, Vertex, VertexId};

/// In-memory store for the network topology.
///
/// Created empty with a fixed maximum device count; all mutation goes through
/// the methods here, which enforce the connection-legality rules and keep the
/// mirrored edge pairs and dense ids consistent.
#[derive(Debug, Clone)]
pub struct NetworkGraph {
    vertices: Vec<Vertex>,
    capacity: usize,
}

impl NetworkGraph {
    /// Creates an empty graph that can hold up to `capacity` devices.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
            capacity,
        }
    }

    // ── Read surface ───────────────────────────────────────────────────

    /// Number of devices currently in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true when the graph holds no devices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Fixed maximum device count.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Gets a vertex by id.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    /// Iterates vertices in id order (order-stable, for listings and export).
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    /// Adjacency list of a vertex, most-recently-linked neighbor first.
    #[must_use]
    pub fn neighbors(&self, id: VertexId) -> &[Edge] {
        self.vertices.get(id).map_or(&[], Vertex::edges)
    }

    /// Link kind between two devices, if they are directly linked.
    #[must_use]
    pub fn link_between(&self, a: VertexId, b: VertexId) -> Option<LinkKind> {
        self.vertices
            .get(a)?
            .edges
            .iter()
            .find(|e| e.to == b)
            .map(|e| e.link)
    }

    /// Number of undirected links (mirrored pairs counted once).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(Vertex::degree).sum::<usize>() / 2
    }

    // ── Mutation ───────────────────────────────────────────────────────

    /// Adds a device with the next dense id.
    ///
    /// The name is truncated to [`MAX_NAME_LEN`](super::MAX_NAME_LEN) bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExhausted`] when the graph is full.
    pub fn add_vertex(&mut self, kind: DeviceKind, name: &str) -> Result<VertexId> {
        if self.vertices.len() >= self.capacity {
            return Err(Error::CapacityExhausted(self.capacity));
        }
        let id = self.vertices.len();
        self.vertices.push(Vertex::new(id, kind, name));
        debug!(id, %kind, "device added");
        Ok(id)
    }

    /// Links two devices with the given link kind.
    ///
    /// The mirrored pair is prepended to both adjacency lists, so the newest
    /// link of a device is always first in its list. Insertion is atomic:
    /// either both halves land or neither does.
    ///
    /// # Errors
    ///
    /// - [`Error::VertexNotFound`] if either id is out of range.
    /// - [`Error::SelfLoop`] if `a == b`.
    /// - [`Error::IllegalConnection`] if the device kinds may not connect in
    ///   either direction.
    /// - [`Error::DuplicateEdge`] if the devices are already linked.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId, link: LinkKind) -> Result<()> {
        if a >= self.vertices.len() {
            return Err(Error::VertexNotFound(a));
        }
        if b >= self.vertices.len() {
            return Err(Error::VertexNotFound(b));
        }
        if a == b {
            return Err(Error::SelfLoop(a));
        }

        let kind_a = self.vertices[a].kind();
        let kind_b = self.vertices[b].kind();
        if !kind_a.may_connect_to(kind_b) && !kind_b.may_connect_to(kind_a) {
            return Err(Error::IllegalConnection(kind_a, kind_b));
        }

        // Scanning one side is enough: the mirror invariant guarantees the
        // other side agrees.
        if self.vertices[a].edges.iter().any(|e| e.to == b) {
            return Err(Error::DuplicateEdge(a, b));
        }

        self.vertices[a].edges.insert(0, Edge { to: b, link });
        self.vertices[b].edges.insert(0, Edge { to: a, link });
        debug!(a, b, %link, "link added");
        Ok(())
    }

    /// Removes the link between two devices.
    ///
    /// Returns whether a link was removed; absent endpoints or an absent link
    /// are a negative result, not an error.
    pub fn remove_edge(&mut self, a: VertexId, b: VertexId) -> bool {
        if a >= self.vertices.len() || b >= self.vertices.len() {
            return false;
        }
        let Some(pos) = self.vertices[a].edges.iter().position(|e| e.to == b) else {
            return false;
        };
        self.vertices[a].edges.remove(pos);
        if let Some(pos) = self.vertices[b].edges.iter().position(|e| e.to == a) {
            self.vertices[b].edges.remove(pos);
        }
        debug!(a, b, "link removed");
        true
    }

    /// Removes a device, cascading to its links and renumbering ids.
    ///
    /// Two phases, in this order:
    ///
    /// 1. every incident link is removed, mirror half included;
    /// 2. vertices above `id` shift down one position, their id fields are
    ///    rewritten to match, and every remaining adjacency destination
    ///    greater than `id` is decremented.
    ///
    /// Destinations equal to `id` are all gone after phase 1, so phase 2
    /// leaves no dangling reference. Returns the removed vertex, or `None`
    /// when `id` is out of range.
    pub fn remove_vertex(&mut self, id: VertexId) -> Option<Vertex> {
        if id >= self.vertices.len() {
            return None;
        }

        let neighbor_ids: Vec<VertexId> =
            self.vertices[id].edges.iter().map(|e| e.to).collect();
        for neighbor in neighbor_ids {
            self.vertices[neighbor].edges.retain(|e| e.to != id);
        }

        let removed = self.vertices.remove(id);
        for vertex in &mut self.vertices[id..] {
            let new_id = vertex.id() - 1;
            vertex.set_id(new_id);
        }
        for vertex in &mut self.vertices {
            for edge in &mut vertex.edges {
                if edge.to > id {
                    edge.to -= 1;
                }
            }
        }

        debug!(id, name = removed.name(), "device removed");
        Some(removed)
    }
}
