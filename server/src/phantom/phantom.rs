use phantom_shared::{DataSlot, HostAdapter, Location, PhantomKey};

use crate::PhantomEntity;

use super::{noop_phantom::NoOpPhantom, phantom_impl::PhantomEntityImpl};

/// Handle returned by [`PhantomFactory`](crate::PhantomFactory).
///
/// Which variant you get is decided once, when the phantom is created, so
/// callers never need to check whether the host supports phantoms.
pub enum Phantom<H: HostAdapter> {
    Active(PhantomEntityImpl<H>),
    NoOp(NoOpPhantom<H>),
}

impl<H: HostAdapter> Phantom<H> {
    /// Registry key, for phantoms that are actually tracked
    pub fn key(&self) -> Option<PhantomKey> {
        match self {
            Phantom::Active(inner) => Some(inner.key()),
            Phantom::NoOp(_) => None,
        }
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, Phantom::NoOp(_))
    }

    pub fn as_active(&self) -> Option<&PhantomEntityImpl<H>> {
        match self {
            Phantom::Active(inner) => Some(inner),
            Phantom::NoOp(_) => None,
        }
    }
}

impl<H: HostAdapter> PhantomEntity<H> for Phantom<H> {
    fn entity(&self) -> Option<&H::Entity> {
        match self {
            Phantom::Active(inner) => inner.entity(),
            Phantom::NoOp(inner) => inner.entity(),
        }
    }

    fn is_relative(&self) -> bool {
        match self {
            Phantom::Active(inner) => inner.is_relative(),
            Phantom::NoOp(inner) => inner.is_relative(),
        }
    }

    fn relative(&self, distance: f64, pitch_offset: f64, yaw_offset: f64) -> &Self {
        match self {
            Phantom::Active(inner) => {
                inner.relative(distance, pitch_offset, yaw_offset);
            }
            Phantom::NoOp(inner) => {
                inner.relative(distance, pitch_offset, yaw_offset);
            }
        }
        self
    }

    fn location(&self, position: &Location) -> &Self {
        match self {
            Phantom::Active(inner) => {
                inner.location(position);
            }
            Phantom::NoOp(inner) => {
                inner.location(position);
            }
        }
        self
    }

    fn watching(&self, viewer: &H::Viewer) -> bool {
        match self {
            Phantom::Active(inner) => inner.watching(viewer),
            Phantom::NoOp(inner) => inner.watching(viewer),
        }
    }

    fn has_viewers(&self) -> bool {
        match self {
            Phantom::Active(inner) => inner.has_viewers(),
            Phantom::NoOp(inner) => inner.has_viewers(),
        }
    }

    fn set_invisible(&self, invisible: bool) -> &Self {
        match self {
            Phantom::Active(inner) => {
                inner.set_invisible(invisible);
            }
            Phantom::NoOp(inner) => {
                inner.set_invisible(invisible);
            }
        }
        self
    }

    fn invisible(&self) -> bool {
        match self {
            Phantom::Active(inner) => inner.invisible(),
            Phantom::NoOp(inner) => inner.invisible(),
        }
    }

    fn data(&self, slot: DataSlot, value: H::Value) -> &Self {
        match self {
            Phantom::Active(inner) => {
                inner.data(slot, value);
            }
            Phantom::NoOp(inner) => {
                inner.data(slot, value);
            }
        }
        self
    }

    fn add(&self, viewer: &H::Viewer) -> bool {
        match self {
            Phantom::Active(inner) => inner.add(viewer),
            Phantom::NoOp(inner) => inner.add(viewer),
        }
    }

    fn remove(&self, viewer: &H::Viewer) -> bool {
        match self {
            Phantom::Active(inner) => inner.remove(viewer),
            Phantom::NoOp(inner) => inner.remove(viewer),
        }
    }

    fn remove_all(&self) {
        match self {
            Phantom::Active(inner) => inner.remove_all(),
            Phantom::NoOp(inner) => inner.remove_all(),
        }
    }

    fn send_update(&self) {
        match self {
            Phantom::Active(inner) => inner.send_update(),
            Phantom::NoOp(inner) => inner.send_update(),
        }
    }

    fn update_if_necessary(&self, viewer: &H::Viewer, viewer_location: Location) {
        match self {
            Phantom::Active(inner) => inner.update_if_necessary(viewer, viewer_location),
            Phantom::NoOp(inner) => inner.update_if_necessary(viewer, viewer_location),
        }
    }
}
