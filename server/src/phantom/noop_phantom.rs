use std::marker::PhantomData;

use phantom_shared::{DataSlot, HostAdapter, Location};

use crate::PhantomEntity;

/// Stand-in used when the host cannot support phantoms. Every mutator does
/// nothing and every query answers false.
pub struct NoOpPhantom<H: HostAdapter> {
    phantom_type: PhantomData<fn() -> H>,
}

impl<H: HostAdapter> NoOpPhantom<H> {
    pub fn new() -> Self {
        Self {
            phantom_type: PhantomData,
        }
    }
}

impl<H: HostAdapter> Default for NoOpPhantom<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: HostAdapter> PhantomEntity<H> for NoOpPhantom<H> {
    fn entity(&self) -> Option<&H::Entity> {
        None
    }

    fn is_relative(&self) -> bool {
        false
    }

    fn relative(&self, _distance: f64, _pitch_offset: f64, _yaw_offset: f64) -> &Self {
        self
    }

    fn location(&self, _position: &Location) -> &Self {
        self
    }

    fn watching(&self, _viewer: &H::Viewer) -> bool {
        false
    }

    fn has_viewers(&self) -> bool {
        false
    }

    fn set_invisible(&self, _invisible: bool) -> &Self {
        self
    }

    fn invisible(&self) -> bool {
        false
    }

    fn data(&self, _slot: DataSlot, _value: H::Value) -> &Self {
        self
    }

    fn add(&self, _viewer: &H::Viewer) -> bool {
        false
    }

    fn remove(&self, _viewer: &H::Viewer) -> bool {
        false
    }

    fn remove_all(&self) {}

    fn send_update(&self) {}
}
