use std::{fmt::Debug, hash::Hash};

use crate::{DataSlot, EntityId, HostCapabilities, HostError, Location};

/// The narrow seam between phantom tracking and one host version.
///
/// An adapter constructs the synthetic entity, mutates its fields and builds
/// the packets describing it. It never sends anything; delivery goes through
/// [`PacketTransport`](crate::PacketTransport).
pub trait HostAdapter: Send + Sync + 'static {
    /// Host-side synthetic entity, exclusively owned by one phantom
    type Entity: Send + Sync;
    /// What sort of entity to create
    type Kind;
    /// Untyped metadata value
    type Value;
    type Packet: Send + Sync;
    type Viewer: Copy + Eq + Hash + Send + Sync + Debug;

    /// Probe the host for the primitives it exposes.
    ///
    /// Each `PhantomFactory` probes once and keeps the answer, so create a
    /// single factory per host for the life of the process. A second factory
    /// over the same host probes again.
    fn probe(&self) -> HostCapabilities;

    // Entity

    fn create_entity(
        &self,
        location: &Location,
        kind: &Self::Kind,
    ) -> Result<Self::Entity, HostError>;

    fn entity_id(&self, entity: &Self::Entity) -> EntityId;

    fn set_location(&self, entity: &Self::Entity, location: &Location) -> Result<(), HostError>;

    fn is_invisible(&self, entity: &Self::Entity) -> Result<bool, HostError>;

    fn set_invisible(&self, entity: &Self::Entity, invisible: bool) -> Result<(), HostError>;

    /// Write into an existing metadata slot. Slots are not validated; what
    /// happens with an unknown slot is up to the host.
    fn write_data(
        &self,
        entity: &Self::Entity,
        slot: DataSlot,
        value: Self::Value,
    ) -> Result<(), HostError>;

    // Viewers

    fn viewer_location(&self, viewer: &Self::Viewer) -> Result<Location, HostError>;

    // Packets

    fn spawn_packet(&self, entity: &Self::Entity) -> Result<Self::Packet, HostError>;

    fn despawn_packet(&self, ids: &[EntityId]) -> Result<Self::Packet, HostError>;

    fn metadata_packet(
        &self,
        entity: &Self::Entity,
        update_all: bool,
    ) -> Result<Self::Packet, HostError>;

    fn teleport_packet(&self, entity: &Self::Entity) -> Result<Self::Packet, HostError>;
}
