use std::default::Default;

use log::Level;

/// Contains Config properties which will be used by every Phantom a
/// factory creates
#[derive(Clone, Debug)]
pub struct PhantomConfig {
    /// Passed as the `update_all` flag when building metadata packets.
    /// When false, the host only includes metadata that changed.
    pub metadata_update_all: bool,
    /// Log level used when reporting host or transport failures
    pub report_level: Level,
    /// Whether a Phantom that is dropped while still watched despawns for
    /// its remaining viewers
    pub despawn_on_drop: bool,
}

impl Default for PhantomConfig {
    fn default() -> Self {
        Self {
            metadata_update_all: false,
            report_level: Level::Warn,
            despawn_on_drop: true,
        }
    }
}
