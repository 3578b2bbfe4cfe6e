use std::sync::atomic::{AtomicU64, Ordering};

use phantom_shared::PhantomKey;

static NEXT_KEY: AtomicU64 = AtomicU64::new(1);

/// Hands out process-unique keys, so phantoms from different factories can
/// share one registry.
pub(crate) fn generate_phantom_key() -> PhantomKey {
    PhantomKey::from_u64(NEXT_KEY.fetch_add(1, Ordering::Relaxed))
}
