//! Per-viewer refresh of relatively placed phantoms.

use phantom_server::PhantomEntity;
use phantom_shared::{Location, PacketKind};
use phantom_test::{assert_location_near, assert_packet_kinds, PhantomHarness, TestPacket};

#[test]
fn refresh_places_phantom_ahead_of_viewer() {
    let harness = PhantomHarness::new();
    let phantom = harness.spawn();
    let viewer = harness.viewer(1, Location::new(0.0, 0.0, 0.0));
    phantom.add(&viewer);
    phantom.relative(4.0, 0.0, 0.0);

    phantom.update_if_necessary(&viewer, Location::new(0.0, 0.0, 0.0));
    assert_location_near!(phantom.entity().unwrap().location(), 0.0, 0.0, 4.0);
}

#[test]
fn refresh_only_tells_the_refreshed_viewer() {
    let harness = PhantomHarness::new();
    let phantom = harness.spawn();
    let first = harness.viewer(1, Location::default());
    let second = harness.viewer(2, Location::default());
    phantom.add(&first);
    phantom.add(&second);
    phantom.relative(1.0, 0.0, 0.0);

    phantom.update_if_necessary(&first, Location::new(10.0, 0.0, 10.0));

    assert_packet_kinds!(harness.transport, first, [Spawn, LocationTeleport]);
    assert_packet_kinds!(harness.transport, second, [Spawn]);

    let id = phantom.entity().unwrap().id();
    match harness.transport.sent_to(&first).last() {
        Some(TestPacket::Teleport { id: moved, location }) => {
            assert_eq!(*moved, id);
            assert_location_near!(*location, 10.0, 0.0, 11.0);
        }
        other => panic!("expected a teleport, got {:?}", other),
    }
}

#[test]
fn refresh_follows_viewer_movement() {
    let harness = PhantomHarness::new();
    let phantom = harness.spawn();
    let viewer = harness.viewer(1, Location::default());
    phantom.add(&viewer);
    phantom.relative(2.0, 0.0, 0.0);

    for step in 0..5 {
        let x = f64::from(step);
        phantom.update_if_necessary(&viewer, Location::new(x, 64.0, 0.0));
        assert_location_near!(phantom.entity().unwrap().location(), x, 64.0, 2.0);
    }
    assert_eq!(harness.transport.count(&viewer, PacketKind::LocationTeleport), 5);
}

#[test]
fn fixed_phantoms_ignore_refresh() {
    let harness = PhantomHarness::new();
    let phantom = harness.spawn();
    let viewer = harness.viewer(1, Location::default());
    phantom.add(&viewer);
    phantom.location(&Location::new(7.0, 7.0, 7.0));
    harness.transport.clear();

    phantom.update_if_necessary(&viewer, Location::new(0.0, 0.0, 0.0));

    assert!(harness.transport.sent().is_empty());
    assert_location_near!(phantom.entity().unwrap().location(), 7.0, 7.0, 7.0);
}

#[test]
fn refresh_ignores_viewers_not_watching() {
    let harness = PhantomHarness::new();
    let phantom = harness.spawn();
    let stranger = harness.viewer(9, Location::default());
    phantom.relative(2.0, 0.0, 0.0);
    let before = phantom.entity().unwrap().location();

    phantom.update_if_necessary(&stranger, Location::new(50.0, 0.0, 50.0));

    assert!(harness.transport.sent().is_empty());
    assert_eq!(phantom.entity().unwrap().location(), before);
}

#[test]
fn refresh_does_not_touch_dirty_flag() {
    let harness = PhantomHarness::new();
    let phantom = harness.spawn();
    let viewer = harness.viewer(1, Location::default());
    phantom.add(&viewer);
    phantom.relative(2.0, 0.0, 0.0);

    phantom.update_if_necessary(&viewer, Location::new(0.0, 0.0, 0.0));
    assert!(!phantom.as_active().unwrap().is_location_dirty());

    harness.transport.clear();
    phantom.send_update();
    assert_packet_kinds!(harness.transport, viewer, [MetadataUpdate]);
}

#[test]
fn back_to_fixed_stops_refresh() {
    let harness = PhantomHarness::new();
    let phantom = harness.spawn();
    let viewer = harness.viewer(1, Location::default());
    phantom.add(&viewer);
    phantom.relative(2.0, 0.0, 0.0);
    phantom.relative(0.0, 0.0, 0.0);
    harness.transport.clear();

    phantom.update_if_necessary(&viewer, Location::new(1.0, 1.0, 1.0));
    assert!(harness.transport.sent().is_empty());
}
