use std::{collections::HashSet, sync::Mutex};

use phantom_shared::{PacketKind, PacketTransport, TransportError};

use super::test_host::{TestPacket, TestViewer};

/// Transport that records every delivered packet, in order
pub struct RecordingTransport {
    sent: Mutex<Vec<(TestViewer, TestPacket)>>,
    disconnected: Mutex<HashSet<TestViewer>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            disconnected: Mutex::new(HashSet::new()),
        }
    }

    pub fn sent(&self) -> Vec<(TestViewer, TestPacket)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_to(&self, viewer: &TestViewer) -> Vec<TestPacket> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|(to, _)| to == viewer)
            .map(|(_, packet)| packet.clone())
            .collect()
    }

    pub fn kinds_sent_to(&self, viewer: &TestViewer) -> Vec<PacketKind> {
        self.sent_to(viewer).iter().map(TestPacket::kind).collect()
    }

    pub fn count(&self, viewer: &TestViewer, kind: PacketKind) -> usize {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|(to, packet)| to == viewer && packet.kind() == kind)
            .count()
    }

    pub fn total(&self, kind: PacketKind) -> usize {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, packet)| packet.kind() == kind)
            .count()
    }

    pub fn clear(&self) {
        self.sent.lock().unwrap().clear();
    }

    /// Deliveries to `viewer` fail until [`reconnect`](Self::reconnect)
    pub fn disconnect(&self, viewer: TestViewer) {
        self.disconnected.lock().unwrap().insert(viewer);
    }

    pub fn reconnect(&self, viewer: TestViewer) {
        self.disconnected.lock().unwrap().remove(&viewer);
    }
}

impl Default for RecordingTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl PacketTransport<TestViewer, TestPacket> for RecordingTransport {
    fn send_packet(&self, viewer: &TestViewer, packet: &TestPacket) -> Result<(), TransportError> {
        if self.disconnected.lock().unwrap().contains(viewer) {
            return Err(TransportError::Disconnected {
                viewer: format!("{:?}", viewer),
            });
        }
        self.sent.lock().unwrap().push((*viewer, packet.clone()));
        Ok(())
    }
}
