/// Host-assigned network id of an entity, as carried in packets.
pub type EntityId = i32;

/// Index of a metadata slot on a host entity.
pub type DataSlot = u8;

// PhantomKey
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, PartialOrd, Ord)]
pub struct PhantomKey(u64);

impl PhantomKey {
    pub fn to_u64(&self) -> u64 {
        self.0
    }

    pub fn from_u64(value: u64) -> Self {
        PhantomKey(value)
    }
}

// WorldId
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct WorldId(u64);

impl WorldId {
    pub fn new(value: u64) -> Self {
        WorldId(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}
