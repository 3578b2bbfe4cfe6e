//! # Phantom Server
//! Tracks client-side-only "phantom" entities: objects that exist only as
//! packets sent to a chosen set of viewers, never in the host's simulation.
//! Each phantom keeps its own viewer set and pushes spawn, despawn, metadata
//! and teleport packets as its state changes.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

pub mod shared {
    pub use phantom_shared::{
        DataSlot, EntityId, HostAdapter, HostCapabilities, HostError, Location, PacketKind,
        PacketTransport, PhantomKey, RelativeOffset, TransportError, Vector, WorldId,
    };
}

mod error;
mod factory;
mod key_generator;
mod phantom;
mod phantom_config;
mod report;
mod tracker;

pub use error::PhantomError;
pub use factory::PhantomFactory;
pub use phantom::{
    noop_phantom::NoOpPhantom, phantom::Phantom, phantom_entity::PhantomEntity,
    phantom_impl::PhantomEntityImpl,
};
pub use phantom_config::PhantomConfig;
pub use report::report;
pub use tracker::{phantom_registry::PhantomRegistry, phantom_tracker::PhantomTracker};
