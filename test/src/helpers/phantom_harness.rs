use std::sync::Arc;

use phantom_server::{Phantom, PhantomConfig, PhantomFactory, PhantomRegistry};
use phantom_shared::{Location, PhantomKey};

use super::{
    test_host::{TestHost, TestKind, TestViewer},
    test_tracker::RecordingTracker,
    test_transport::RecordingTransport,
};

/// Default spawn point for test phantoms
pub fn origin() -> Location {
    Location::new(0.0, 64.0, 0.0)
}

/// Factory wired to a recording transport and a recording tracker
pub struct PhantomHarness {
    pub host: Arc<TestHost>,
    pub transport: Arc<RecordingTransport>,
    pub tracker: Arc<RecordingTracker>,
    pub factory: PhantomFactory<TestHost>,
}

impl PhantomHarness {
    pub fn new() -> Self {
        Self::build(TestHost::new(), PhantomConfig::default())
    }

    pub fn with_host(host: TestHost) -> Self {
        Self::build(host, PhantomConfig::default())
    }

    pub fn with_config(config: PhantomConfig) -> Self {
        Self::build(TestHost::new(), config)
    }

    fn build(host: TestHost, config: PhantomConfig) -> Self {
        let host = Arc::new(host);
        let transport = Arc::new(RecordingTransport::new());
        let tracker = Arc::new(RecordingTracker::new());
        let factory = PhantomFactory::new(host.clone(), transport.clone(), tracker.clone(), config);
        Self {
            host,
            transport,
            tracker,
            factory,
        }
    }

    pub fn spawn(&self) -> Arc<Phantom<TestHost>> {
        self.factory.create(&origin(), &TestKind::Living)
    }

    pub fn spawn_at(&self, location: Location, kind: TestKind) -> Arc<Phantom<TestHost>> {
        self.factory.create(&location, &kind)
    }

    /// A viewer the host knows to be standing at `location`
    pub fn viewer(&self, id: u32, location: Location) -> TestViewer {
        let viewer = TestViewer::new(id);
        self.host.set_viewer_location(viewer, location);
        viewer
    }
}

impl Default for PhantomHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Factory wired to a real [`PhantomRegistry`]
pub struct RegistryHarness {
    pub host: Arc<TestHost>,
    pub transport: Arc<RecordingTransport>,
    pub registry: Arc<PhantomRegistry<TestHost>>,
    pub factory: PhantomFactory<TestHost>,
}

impl RegistryHarness {
    pub fn new() -> Self {
        let host = Arc::new(TestHost::new());
        let transport = Arc::new(RecordingTransport::new());
        let registry = Arc::new(PhantomRegistry::new());
        let factory = PhantomFactory::new(
            host.clone(),
            transport.clone(),
            registry.clone(),
            PhantomConfig::default(),
        );
        Self {
            host,
            transport,
            registry,
            factory,
        }
    }

    pub fn spawn(&self) -> (PhantomKey, Arc<Phantom<TestHost>>) {
        let phantom = self.factory.create(&origin(), &TestKind::Living);
        let key = phantom.key().expect("test host supports phantoms");
        (key, phantom)
    }

    pub fn viewer(&self, id: u32, location: Location) -> TestViewer {
        let viewer = TestViewer::new(id);
        self.host.set_viewer_location(viewer, location);
        viewer
    }
}

impl Default for RegistryHarness {
    fn default() -> Self {
        Self::new()
    }
}
