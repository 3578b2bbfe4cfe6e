use thiserror::Error;

use phantom_shared::{HostError, TransportError};

/// Everything that can go wrong inside phantom tracking.
///
/// These are logged through [`report`](crate::report) and never returned to
/// callers of [`PhantomEntity`](crate::PhantomEntity).
#[derive(Debug, Clone, Error)]
pub enum PhantomError {
    #[error(transparent)]
    Host(#[from] HostError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A thread panicked while holding the viewer set
    #[error("Viewer set lock was poisoned by a panicking thread")]
    ViewerLockPoisoned,

    /// A thread panicked while holding one of the registry's tables
    #[error("Registry lock on {table} is poisoned")]
    RegistryLockPoisoned { table: &'static str },
}
