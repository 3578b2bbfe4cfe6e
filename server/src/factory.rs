use std::sync::Arc;

use log::info;
use once_cell::sync::OnceCell;

use phantom_shared::{HostAdapter, HostCapabilities, Location, PacketTransport};

use crate::{
    key_generator::generate_phantom_key, report, NoOpPhantom, Phantom, PhantomConfig,
    PhantomEntityImpl, PhantomTracker,
};

/// Creates phantoms for one host.
///
/// The host is probed the first time its capabilities are needed and the
/// answer is kept for the life of the factory. Keep a single factory per
/// host for the whole process.
pub struct PhantomFactory<H: HostAdapter> {
    host: Arc<H>,
    transport: Arc<dyn PacketTransport<H::Viewer, H::Packet>>,
    tracker: Arc<dyn PhantomTracker<H>>,
    config: PhantomConfig,
    capabilities: OnceCell<HostCapabilities>,
}

impl<H: HostAdapter> PhantomFactory<H> {
    pub fn new(
        host: Arc<H>,
        transport: Arc<dyn PacketTransport<H::Viewer, H::Packet>>,
        tracker: Arc<dyn PhantomTracker<H>>,
        config: PhantomConfig,
    ) -> Self {
        Self {
            host,
            transport,
            tracker,
            config,
            capabilities: OnceCell::new(),
        }
    }

    pub fn host(&self) -> &Arc<H> {
        &self.host
    }

    pub fn config(&self) -> &PhantomConfig {
        &self.config
    }

    pub fn capabilities(&self) -> HostCapabilities {
        *self.capabilities.get_or_init(|| {
            let capabilities = self.host.probe();
            if capabilities.supports_phantoms() {
                info!("PhantomFactory: host supports phantom entities ({:?})", capabilities);
            } else {
                info!("PhantomFactory: host does not support phantom entities, phantoms will be inert");
            }
            capabilities
        })
    }

    pub fn is_supported(&self) -> bool {
        self.capabilities().supports_phantoms()
    }

    /// Create a phantom of `kind` at `location`, spawned for nobody yet.
    ///
    /// Yields an inert phantom if the host lacks support or refuses to create
    /// the entity.
    pub fn create(&self, location: &Location, kind: &H::Kind) -> Arc<Phantom<H>> {
        let capabilities = self.capabilities();
        if !capabilities.supports_phantoms() {
            return Arc::new(Phantom::NoOp(NoOpPhantom::new()));
        }

        let entity = match self.host.create_entity(location, kind) {
            Ok(entity) => entity,
            Err(err) => {
                report(self.config.report_level, "creating phantom entity", &err);
                return Arc::new(Phantom::NoOp(NoOpPhantom::new()));
            }
        };

        let key = generate_phantom_key();
        let phantom = Arc::new(Phantom::Active(PhantomEntityImpl::new(
            key,
            self.host.clone(),
            capabilities,
            self.transport.clone(),
            self.tracker.clone(),
            self.config.clone(),
            entity,
        )));
        self.tracker.on_created(&phantom);

        phantom
    }
}
