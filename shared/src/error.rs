use thiserror::Error;

use crate::{EntityId, PacketKind};

/// Failures raised at the host boundary.
///
/// Host adapters return these from every primitive. None of them are fatal:
/// the phantom logs the failure and carries on without that one effect.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HostError {
    /// The running host does not expose this primitive
    #[error("Host does not support {operation}")]
    Unsupported { operation: &'static str },

    /// The host refused to allocate the synthetic entity
    #[error("Cannot create phantom entity: {reason}")]
    EntityCreation { reason: String },

    /// Writing a field on the host entity failed
    #[error("Cannot set {field} on entity {entity_id}: {reason}")]
    Mutation {
        entity_id: EntityId,
        field: &'static str,
        reason: String,
    },

    /// Reading a field from the host entity failed
    #[error("Cannot read {field} from entity {entity_id}: {reason}")]
    Query {
        entity_id: EntityId,
        field: &'static str,
        reason: String,
    },

    /// The host could not build a packet of this kind
    #[error("Cannot build {kind} packet: {reason}")]
    PacketConstruction { kind: PacketKind, reason: String },

    /// The viewer is not known to the host (e.g. already disconnected)
    #[error("Viewer {viewer} is not available")]
    ViewerUnavailable { viewer: String },
}

/// Failures raised while delivering a packet to a viewer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("Viewer {viewer} is disconnected")]
    Disconnected { viewer: String },

    #[error("Failed to deliver {kind} packet to {viewer}: {reason}")]
    Delivery {
        viewer: String,
        kind: PacketKind,
        reason: String,
    },
}
