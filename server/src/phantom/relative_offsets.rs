use std::sync::atomic::{AtomicU64, Ordering};

use phantom_shared::RelativeOffset;

// Each field is atomic on its own; a reader racing a writer may see a mix of
// old and new fields until the next refresh.
pub(crate) struct RelativeOffsets {
    distance: AtomicU64,
    pitch: AtomicU64,
    yaw: AtomicU64,
}

impl RelativeOffsets {
    pub fn new() -> Self {
        let zero = 0.0f64.to_bits();
        Self {
            distance: AtomicU64::new(zero),
            pitch: AtomicU64::new(zero),
            yaw: AtomicU64::new(zero),
        }
    }

    pub fn load(&self) -> RelativeOffset {
        RelativeOffset::new(
            f64::from_bits(self.distance.load(Ordering::Acquire)),
            f64::from_bits(self.pitch.load(Ordering::Acquire)),
            f64::from_bits(self.yaw.load(Ordering::Acquire)),
        )
    }

    pub fn store(&self, offset: RelativeOffset) {
        self.distance.store(offset.distance.to_bits(), Ordering::Release);
        self.pitch.store(offset.pitch.to_bits(), Ordering::Release);
        self.yaw.store(offset.yaw.to_bits(), Ordering::Release);
    }
}
