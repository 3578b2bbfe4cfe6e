/// Which primitives the running host exposes, as found by a one-time probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HostCapabilities {
    /// Synthetic entities can be allocated
    pub create_entity: bool,
    /// The host-side handle behind an entity can be reached
    pub entity_handle: bool,
    /// The entity's metadata store can be reached
    pub metadata: bool,
    pub set_location: bool,
    pub invisibility: bool,
    /// Individual metadata slots can be written
    pub write_data: bool,
}

impl HostCapabilities {
    pub fn all() -> Self {
        Self {
            create_entity: true,
            entity_handle: true,
            metadata: true,
            set_location: true,
            invisibility: true,
            write_data: true,
        }
    }

    pub fn none() -> Self {
        Self {
            create_entity: false,
            entity_handle: false,
            metadata: false,
            set_location: false,
            invisibility: false,
            write_data: false,
        }
    }

    /// Phantoms need at least creation, the entity handle and its metadata;
    /// everything else degrades per call.
    pub fn supports_phantoms(&self) -> bool {
        self.create_entity && self.entity_handle && self.metadata
    }
}

impl Default for HostCapabilities {
    fn default() -> Self {
        Self::none()
    }
}
