use phantom_shared::{DataSlot, HostAdapter, Location};

/// A tracker for one client-side-only entity.
///
/// The entity is never ticked by the host, so every change is made through
/// this trait and pushed to viewers as packets. Implementations never fail:
/// host or transport errors are logged and the call degrades.
pub trait PhantomEntity<H: HostAdapter>: Send + Sync {
    /// The host entity being tracked, if there is one
    fn entity(&self) -> Option<&H::Entity>;

    /// Returns true if the entity is placed relative to each viewer
    fn is_relative(&self) -> bool;

    /// Place the entity at an offset from each viewer.
    ///
    /// A pitch and yaw offset of zero puts the entity `distance` in front of
    /// the viewer. All three at zero switches relative placement off.
    fn relative(&self, distance: f64, pitch_offset: f64, yaw_offset: f64) -> &Self;

    /// Place the entity at a fixed position. The world of `position` is
    /// ignored; the entity stays in the world it was created in.
    ///
    /// The move is applied to the host entity immediately and sent to
    /// viewers on the next [`send_update`](Self::send_update).
    fn location(&self, position: &Location) -> &Self;

    /// Returns true if the entity is spawned from the perspective of `viewer`
    fn watching(&self, viewer: &H::Viewer) -> bool;

    /// Returns true if anyone is watching the entity
    fn has_viewers(&self) -> bool;

    /// Set the invisibility flag. Nothing is sent until
    /// [`send_update`](Self::send_update).
    fn set_invisible(&self, invisible: bool) -> &Self;

    fn invisible(&self) -> bool;

    /// Write a metadata value into `slot`.
    ///
    /// The slot must already exist on the entity; this is not checked.
    fn data(&self, slot: DataSlot, value: H::Value) -> &Self;

    /// Spawn the entity for `viewer`. Returns false if it was already watching.
    fn add(&self, viewer: &H::Viewer) -> bool;

    /// Despawn the entity for `viewer`. Returns false if it was not watching.
    fn remove(&self, viewer: &H::Viewer) -> bool;

    /// Despawn the entity for every current viewer
    fn remove_all(&self);

    /// Send metadata to every viewer, plus the position if it moved since the
    /// last update
    fn send_update(&self);

    /// Per-tick refresh for relative placement: move the entity in front of
    /// `viewer` and tell only that viewer
    fn update_if_necessary(&self, _viewer: &H::Viewer, _viewer_location: Location) {}
}
