use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, Mutex, RwLock, Weak},
};

use log::{debug, Level};

use phantom_shared::{HostAdapter, Location, PhantomKey};

use crate::{report, Phantom, PhantomEntity, PhantomError, PhantomTracker};

/// Owns the set of live phantoms and drives their periodic work.
///
/// Phantoms are held weakly; dropping the last handle to a phantom is enough
/// to stop tracking it. Call [`tick`](Self::tick) once per simulation tick
/// and [`flush`](Self::flush) whenever dirty phantoms should be broadcast.
pub struct PhantomRegistry<H: HostAdapter> {
    phantoms: RwLock<HashMap<PhantomKey, Weak<Phantom<H>>>>,
    // phantoms in relative placement, refreshed for every viewer each tick
    refreshing: RwLock<HashSet<PhantomKey>>,
    dirty: Mutex<HashSet<PhantomKey>>,
    report_level: Level,
}

impl<H: HostAdapter> PhantomRegistry<H> {
    pub fn new() -> Self {
        Self::with_report_level(Level::Warn)
    }

    pub fn with_report_level(report_level: Level) -> Self {
        Self {
            phantoms: RwLock::new(HashMap::new()),
            refreshing: RwLock::new(HashSet::new()),
            dirty: Mutex::new(HashSet::new()),
            report_level,
        }
    }

    fn lock_failed(&self, table: &'static str) {
        report(
            self.report_level,
            "accessing phantom registry",
            &PhantomError::RegistryLockPoisoned { table },
        );
    }

    // Lookup

    pub fn get(&self, key: &PhantomKey) -> Option<Arc<Phantom<H>>> {
        let Ok(phantoms) = self.phantoms.read() else {
            self.lock_failed("phantoms");
            return None;
        };
        phantoms.get(key).and_then(Weak::upgrade)
    }

    /// Number of phantoms registered, including ones dropped since the last
    /// [`prune`](Self::prune)
    pub fn len(&self) -> usize {
        self.phantoms.read().map_or(0, |phantoms| phantoms.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_refreshing(&self, key: &PhantomKey) -> bool {
        self.refreshing
            .read()
            .map_or(false, |refreshing| refreshing.contains(key))
    }

    pub fn refreshing_count(&self) -> usize {
        self.refreshing.read().map_or(0, |refreshing| refreshing.len())
    }

    // Updates

    /// Queue `key` for a [`send_update`](PhantomEntity::send_update) on the
    /// next flush
    pub fn mark_dirty(&self, key: &PhantomKey) {
        let Ok(mut dirty) = self.dirty.lock() else {
            self.lock_failed("dirty");
            return;
        };
        dirty.insert(*key);
    }

    pub fn is_dirty(&self, key: &PhantomKey) -> bool {
        self.dirty.lock().map_or(false, |dirty| dirty.contains(key))
    }

    /// Sends an update for every dirty phantom, once. Returns how many were
    /// sent.
    pub fn flush(&self) -> usize {
        let keys = {
            let Ok(mut dirty) = self.dirty.lock() else {
                self.lock_failed("dirty");
                return 0;
            };
            std::mem::take(&mut *dirty)
        };

        let mut flushed = 0;
        for key in keys {
            let Some(phantom) = self.get(&key) else {
                continue;
            };
            phantom.send_update();
            flushed += 1;
        }
        flushed
    }

    /// Refresh every relative phantom for every viewer given. Returns how many
    /// phantoms were refreshed.
    pub fn tick(&self, viewers: &[(H::Viewer, Location)]) -> usize {
        let keys: Vec<PhantomKey> = {
            let Ok(refreshing) = self.refreshing.read() else {
                self.lock_failed("refreshing");
                return 0;
            };
            refreshing.iter().copied().collect()
        };

        let mut live = Vec::with_capacity(keys.len());
        let mut dead = Vec::new();
        for key in keys {
            match self.get(&key) {
                Some(phantom) => live.push(phantom),
                None => dead.push(key),
            }
        }
        for key in &dead {
            self.forget(key);
        }

        for phantom in &live {
            for (viewer, viewer_location) in viewers {
                phantom.update_if_necessary(viewer, *viewer_location);
            }
        }
        live.len()
    }

    /// Drop bookkeeping for phantoms whose last handle is gone. Returns how
    /// many were removed.
    pub fn prune(&self) -> usize {
        let dead: Vec<PhantomKey> = {
            let Ok(phantoms) = self.phantoms.read() else {
                self.lock_failed("phantoms");
                return 0;
            };
            phantoms
                .iter()
                .filter(|(_, phantom)| phantom.strong_count() == 0)
                .map(|(key, _)| *key)
                .collect()
        };
        for key in &dead {
            self.forget(key);
        }
        dead.len()
    }

    fn forget(&self, key: &PhantomKey) {
        debug!("PhantomRegistry: forgetting dropped phantom {:?}", key);
        if let Ok(mut phantoms) = self.phantoms.write() {
            phantoms.remove(key);
        } else {
            self.lock_failed("phantoms");
        }
        self.stop_refreshing(key);
        if let Ok(mut dirty) = self.dirty.lock() {
            dirty.remove(key);
        } else {
            self.lock_failed("dirty");
        }
    }

    fn stop_refreshing(&self, key: &PhantomKey) {
        if let Ok(mut refreshing) = self.refreshing.write() {
            refreshing.remove(key);
        } else {
            self.lock_failed("refreshing");
        }
    }
}

impl<H: HostAdapter> Default for PhantomRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: HostAdapter> PhantomTracker<H> for PhantomRegistry<H> {
    fn on_created(&self, phantom: &Arc<Phantom<H>>) {
        let Some(key) = phantom.key() else {
            return;
        };
        let Ok(mut phantoms) = self.phantoms.write() else {
            self.lock_failed("phantoms");
            return;
        };
        debug!("PhantomRegistry: tracking phantom {:?}", key);
        phantoms.insert(key, Arc::downgrade(phantom));
    }

    fn on_placement_mode_changed(&self, key: PhantomKey, was_relative: bool) {
        let Some(phantom) = self.get(&key) else {
            // still being constructed, or already dropped
            return;
        };
        let is_relative = phantom.is_relative();

        let Ok(mut refreshing) = self.refreshing.write() else {
            self.lock_failed("refreshing");
            return;
        };
        if is_relative {
            refreshing.insert(key);
        } else {
            refreshing.remove(&key);
        }
        if was_relative != is_relative {
            debug!(
                "PhantomRegistry: phantom {:?} relative placement {} -> {}",
                key, was_relative, is_relative
            );
        }
    }

    fn on_viewer_set_emptied(&self, key: PhantomKey) {
        // callbacks run outside the viewer lock and may arrive after a newer add
        if let Some(phantom) = self.get(&key) {
            if phantom.has_viewers() {
                if phantom.is_relative() {
                    if let Ok(mut refreshing) = self.refreshing.write() {
                        refreshing.insert(key);
                    } else {
                        self.lock_failed("refreshing");
                    }
                }
                return;
            }
        }

        debug!("PhantomRegistry: phantom {:?} has no viewers left", key);
        self.stop_refreshing(&key);
        if let Ok(mut dirty) = self.dirty.lock() {
            dirty.remove(&key);
        } else {
            self.lock_failed("dirty");
        }
    }
}
