use std::sync::Arc;

use phantom_shared::{HostAdapter, PhantomKey};

use crate::Phantom;

/// Registry hooks a phantom calls back into.
///
/// Callbacks run on whichever thread mutated the phantom, with none of the
/// phantom's internal locks held, so they may query the phantom freely.
pub trait PhantomTracker<H: HostAdapter>: Send + Sync {
    /// A factory created a new stateful phantom
    fn on_created(&self, _phantom: &Arc<Phantom<H>>) {}

    /// Placement was set, or a viewer was added. `was_relative` is the
    /// placement before the call.
    fn on_placement_mode_changed(&self, key: PhantomKey, was_relative: bool);

    /// The viewer set just went from non-empty to empty
    fn on_viewer_set_emptied(&self, key: PhantomKey);
}
