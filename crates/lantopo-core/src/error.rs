//! Error types for topology operations.

use thiserror::Error;

use crate::graph::VertexId;

/// Topology error types.
///
/// Every variant is a recoverable condition: operations that fail leave the
/// graph exactly as it was before the call.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// The graph already holds `capacity` devices.
    #[error("capacity exhausted: graph is full at {0} devices")]
    CapacityExhausted(usize),

    /// A vertex id outside `0..len` was given.
    #[error("no device with id {0}")]
    VertexNotFound(VertexId),

    /// Both endpoints of a link were the same device.
    #[error("device {0} cannot be linked to itself")]
    SelfLoop(VertexId),

    /// The device-kind pair is not allowed to connect in either direction.
    #[error("{0} may not be linked to {1}")]
    IllegalConnection(crate::graph::DeviceKind, crate::graph::DeviceKind),

    /// A link between the two devices already exists.
    #[error("devices {0} and {1} are already linked")]
    DuplicateEdge(VertexId, VertexId),
}

/// Result type alias for topology operations.
pub type Result<T> = std::result::Result<T, Error>;
