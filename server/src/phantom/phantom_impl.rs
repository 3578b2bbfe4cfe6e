use std::{
    collections::HashSet,
    error::Error,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, RwLock, RwLockReadGuard, RwLockWriteGuard,
    },
};

use log::debug;

use phantom_shared::{
    DataSlot, EntityId, HostAdapter, HostCapabilities, HostError, Location, PacketKind,
    PacketTransport, PhantomKey, RelativeOffset,
};

use crate::{report, PhantomConfig, PhantomEntity, PhantomError, PhantomTracker};

use super::relative_offsets::RelativeOffsets;

/// Stateful phantom: one host entity, the viewers it is spawned for, and
/// where it should be placed.
///
/// Packets are only ever emitted while the viewer set lock is held, and only
/// for viewers whose membership the call just checked or changed. That keeps
/// spawn and despawn for a single viewer strictly ordered.
pub struct PhantomEntityImpl<H: HostAdapter> {
    key: PhantomKey,
    host: Arc<H>,
    capabilities: HostCapabilities,
    transport: Arc<dyn PacketTransport<H::Viewer, H::Packet>>,
    tracker: Arc<dyn PhantomTracker<H>>,
    config: PhantomConfig,
    entity: H::Entity,
    viewers: RwLock<HashSet<H::Viewer>>,
    offsets: RelativeOffsets,
    location_dirty: AtomicBool,
}

impl<H: HostAdapter> PhantomEntityImpl<H> {
    pub(crate) fn new(
        key: PhantomKey,
        host: Arc<H>,
        capabilities: HostCapabilities,
        transport: Arc<dyn PacketTransport<H::Viewer, H::Packet>>,
        tracker: Arc<dyn PhantomTracker<H>>,
        config: PhantomConfig,
        entity: H::Entity,
    ) -> Self {
        Self {
            key,
            host,
            capabilities,
            transport,
            tracker,
            config,
            entity,
            viewers: RwLock::new(HashSet::new()),
            offsets: RelativeOffsets::new(),
            location_dirty: AtomicBool::new(false),
        }
    }

    pub fn key(&self) -> PhantomKey {
        self.key
    }

    pub fn entity_id(&self) -> EntityId {
        self.host.entity_id(&self.entity)
    }

    pub fn offset(&self) -> RelativeOffset {
        self.offsets.load()
    }

    /// Returns true if a fixed position change has not been broadcast yet
    pub fn is_location_dirty(&self) -> bool {
        self.location_dirty.load(Ordering::Acquire)
    }

    pub fn viewer_count(&self) -> usize {
        self.read_viewers().len()
    }

    // Failures

    fn report(&self, context: &str, cause: &dyn Error) {
        report(self.config.report_level, context, cause);
    }

    // The set stays consistent across a panic; poisoning is reported and cleared.
    fn read_viewers(&self) -> RwLockReadGuard<'_, HashSet<H::Viewer>> {
        self.viewers.read().unwrap_or_else(|poisoned| {
            self.recover_viewers("reading");
            poisoned.into_inner()
        })
    }

    fn write_viewers(&self) -> RwLockWriteGuard<'_, HashSet<H::Viewer>> {
        self.viewers.write().unwrap_or_else(|poisoned| {
            self.recover_viewers("updating");
            poisoned.into_inner()
        })
    }

    fn recover_viewers(&self, action: &str) {
        self.report(
            &format!("{} viewers of phantom {:?}", action, self.key),
            &PhantomError::ViewerLockPoisoned,
        );
        self.viewers.clear_poison();
    }

    // Host entity

    fn apply_location(&self, location: &Location) {
        if !self.capabilities.set_location {
            return;
        }
        if let Err(err) = self.host.set_location(&self.entity, &location.detached()) {
            self.report(
                &format!("setting position for phantom entity {}", self.entity_id()),
                &err,
            );
        }
    }

    // Packets

    fn build_packet(
        &self,
        kind: PacketKind,
        packet: Result<H::Packet, HostError>,
    ) -> Option<H::Packet> {
        match packet {
            Ok(packet) => Some(packet),
            Err(err) => {
                self.report(
                    &format!(
                        "creating {} packet for phantom entity {}",
                        kind,
                        self.entity_id()
                    ),
                    &err,
                );
                None
            }
        }
    }

    fn despawn_packet(&self) -> Option<H::Packet> {
        self.build_packet(
            PacketKind::Despawn,
            self.host.despawn_packet(&[self.entity_id()]),
        )
    }

    fn teleport_packet(&self) -> Option<H::Packet> {
        self.build_packet(
            PacketKind::LocationTeleport,
            self.host.teleport_packet(&self.entity),
        )
    }

    fn send_packet(&self, viewer: &H::Viewer, kind: PacketKind, packet: &H::Packet) {
        debug!(
            "Phantom {:?}: sending {} packet to {:?}",
            self.key, kind, viewer
        );
        if let Err(err) = self.transport.send_packet(viewer, packet) {
            self.report(
                &format!(
                    "sending {} packet for phantom entity {} to {:?}",
                    kind,
                    self.entity_id(),
                    viewer
                ),
                &err,
            );
        }
    }

    fn send_spawn_packet(&self, viewer: &H::Viewer) {
        let offset = self.offsets.load();
        if offset.is_relative() {
            match self.host.viewer_location(viewer) {
                Ok(viewer_location) => self.apply_location(&offset.apply(viewer_location)),
                Err(err) => self.report(
                    &format!(
                        "locating viewer {:?} for phantom entity {}",
                        viewer,
                        self.entity_id()
                    ),
                    &err,
                ),
            }
        }
        if let Some(packet) = self.build_packet(PacketKind::Spawn, self.host.spawn_packet(&self.entity))
        {
            self.send_packet(viewer, PacketKind::Spawn, &packet);
        }
    }
}

impl<H: HostAdapter> PhantomEntity<H> for PhantomEntityImpl<H> {
    fn entity(&self) -> Option<&H::Entity> {
        Some(&self.entity)
    }

    fn is_relative(&self) -> bool {
        self.offsets.load().is_relative()
    }

    fn relative(&self, distance: f64, pitch_offset: f64, yaw_offset: f64) -> &Self {
        let was_relative = self.is_relative();
        self.offsets
            .store(RelativeOffset::new(distance, pitch_offset, yaw_offset));
        self.tracker.on_placement_mode_changed(self.key, was_relative);
        self
    }

    fn location(&self, position: &Location) -> &Self {
        let was_relative = self.is_relative();
        self.offsets.store(RelativeOffset::NONE);
        self.tracker.on_placement_mode_changed(self.key, was_relative);
        self.apply_location(position);
        self.location_dirty.store(true, Ordering::Release);
        self
    }

    fn watching(&self, viewer: &H::Viewer) -> bool {
        self.read_viewers().contains(viewer)
    }

    fn has_viewers(&self) -> bool {
        !self.read_viewers().is_empty()
    }

    fn set_invisible(&self, invisible: bool) -> &Self {
        if self.capabilities.invisibility {
            if let Err(err) = self.host.set_invisible(&self.entity, invisible) {
                self.report(
                    &format!("setting invisibility for phantom entity {}", self.entity_id()),
                    &err,
                );
            }
        }
        self
    }

    fn invisible(&self) -> bool {
        if !self.capabilities.invisibility {
            return false;
        }
        match self.host.is_invisible(&self.entity) {
            Ok(invisible) => invisible,
            Err(err) => {
                self.report(
                    &format!("getting invisibility for phantom entity {}", self.entity_id()),
                    &err,
                );
                false
            }
        }
    }

    fn data(&self, slot: DataSlot, value: H::Value) -> &Self {
        if self.capabilities.write_data {
            if let Err(err) = self.host.write_data(&self.entity, slot, value) {
                self.report(
                    &format!(
                        "writing data slot {} for phantom entity {}",
                        slot,
                        self.entity_id()
                    ),
                    &err,
                );
            }
        }
        self
    }

    fn add(&self, viewer: &H::Viewer) -> bool {
        let mut viewers = self.write_viewers();
        if !viewers.insert(*viewer) {
            return false;
        }
        self.send_spawn_packet(viewer);
        drop(viewers);

        self.tracker
            .on_placement_mode_changed(self.key, self.is_relative());
        true
    }

    fn remove(&self, viewer: &H::Viewer) -> bool {
        let mut viewers = self.write_viewers();
        if !viewers.remove(viewer) {
            return false;
        }
        if let Some(packet) = self.despawn_packet() {
            self.send_packet(viewer, PacketKind::Despawn, &packet);
        }
        let emptied = viewers.is_empty();
        drop(viewers);

        if emptied {
            self.tracker.on_viewer_set_emptied(self.key);
        }
        true
    }

    fn remove_all(&self) {
        let mut viewers = self.write_viewers();
        if viewers.is_empty() {
            return;
        }
        if let Some(packet) = self.despawn_packet() {
            for viewer in viewers.iter() {
                self.send_packet(viewer, PacketKind::Despawn, &packet);
            }
        }
        viewers.clear();
        drop(viewers);

        self.tracker.on_viewer_set_emptied(self.key);
    }

    fn send_update(&self) {
        let metadata = self.build_packet(
            PacketKind::MetadataUpdate,
            self.host
                .metadata_packet(&self.entity, self.config.metadata_update_all),
        );
        let location = if self.location_dirty.swap(false, Ordering::AcqRel) {
            self.teleport_packet()
        } else {
            None
        };

        let viewers = self.read_viewers();
        for viewer in viewers.iter() {
            if let Some(packet) = &metadata {
                self.send_packet(viewer, PacketKind::MetadataUpdate, packet);
            }
            if let Some(packet) = &location {
                self.send_packet(viewer, PacketKind::LocationTeleport, packet);
            }
        }
    }

    fn update_if_necessary(&self, viewer: &H::Viewer, viewer_location: Location) {
        let offset = self.offsets.load();
        if !offset.is_relative() {
            return;
        }
        let viewers = self.read_viewers();
        if !viewers.contains(viewer) {
            return;
        }

        self.apply_location(&offset.apply(viewer_location));
        if let Some(packet) = self.teleport_packet() {
            self.send_packet(viewer, PacketKind::LocationTeleport, &packet);
        }
    }
}

impl<H: HostAdapter> Drop for PhantomEntityImpl<H> {
    fn drop(&mut self) {
        if self.config.despawn_on_drop && self.has_viewers() {
            debug!(
                "Phantom {:?}: dropped while watched, despawning for remaining viewers",
                self.key
            );
            self.remove_all();
        }
    }
}
