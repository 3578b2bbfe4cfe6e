//! # Phantom Shared
//! Value types and host seams shared by the phantom tracking crates.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod error;
mod host;
mod location;
mod packet_kind;
mod relative_offset;
mod types;

pub use error::{HostError, TransportError};
pub use host::{
    capabilities::HostCapabilities, host_adapter::HostAdapter, transport::PacketTransport,
};
pub use location::{Location, Vector};
pub use packet_kind::PacketKind;
pub use relative_offset::RelativeOffset;
pub use types::{DataSlot, EntityId, PhantomKey, WorldId};
