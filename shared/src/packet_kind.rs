use std::fmt;

/// The four packets a phantom ever emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PacketKind {
    Spawn,
    Despawn,
    MetadataUpdate,
    LocationTeleport,
}

impl PacketKind {
    pub fn name(&self) -> &'static str {
        match self {
            PacketKind::Spawn => "spawn",
            PacketKind::Despawn => "despawn",
            PacketKind::MetadataUpdate => "metadata",
            PacketKind::LocationTeleport => "teleport",
        }
    }
}

impl fmt::Display for PacketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
