//! Mermaid flow-diagram export.
//!
//! Read-only serialization of the topology: one node line per device, one
//! link line per undirected link. Relies on the store's order-stable vertex
//! and adjacency traversal.

use std::io::{self, Write};

use super::store::NetworkGraph;

/// Writes the graph as a Mermaid `graph TD` block.
///
/// Each undirected link is emitted exactly once, when the lower endpoint id
/// is seen first.
///
/// # Errors
///
/// Propagates any I/O error from the writer.
pub fn write_mermaid<W: Write>(graph: &NetworkGraph, out: &mut W) -> io::Result<()> {
    writeln!(out, "graph TD")?;

    for vertex in graph.vertices() {
        writeln!(out, "    {}[\"{}\"]", vertex.id(), vertex.name())?;
    }

    for vertex in graph.vertices() {
        for edge in vertex.edges() {
            if vertex.id() < edge.to {
                writeln!(out, "    {} -- {} --> {}", vertex.id(), edge.link, edge.to)?;
            }
        }
    }

    Ok(())
}
