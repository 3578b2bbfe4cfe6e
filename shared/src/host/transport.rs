use crate::TransportError;

/// Delivers opaque packets to viewers. Fire-and-forget; must not block.
///
/// Phantoms call `send_packet` while holding their viewer set lock.
/// Implementations must not call back into the sending phantom (for example
/// `remove` on a detected disconnect); queue such work and run it after
/// `send_packet` returns.
pub trait PacketTransport<V, P>: Send + Sync {
    fn send_packet(&self, viewer: &V, packet: &P) -> Result<(), TransportError>;
}
