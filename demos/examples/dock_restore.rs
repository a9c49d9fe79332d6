// Copyright 2026 the Quayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Programmatic docking and undocking without an interactive trigger.
//!
//! A host restoring a saved layout calls `dock_to` directly; no release
//! signal or proximity check is involved. Dragging the item back into the
//! interior later undocks it in place via the normal release protocol.
//!
//! Run:
//! - `cargo run -p quayside_examples --example dock_restore`

use kurbo::{Point, Size};
use quayside_dockable::{DockState, Dockable, Pose, Resolution};

fn main() {
    let mut item = Dockable::new();
    item.set_duration_ms(80.0);
    let container = Size::new(1024.0, 768.0);
    let item_height = 160.0;

    // Restore: the saved layout says this item was docked left.
    let current = Pose::new(Point::new(512.0, 384.0), 0.0);
    item.dock_to(DockState::Left, current, item_height, container)
        .expect("left is a dockable edge");

    println!("== Restoring a left dock ==");
    let mut committed = None;
    while let Some(frame) = item.tick(16.0) {
        if let Some(changed) = frame.completed {
            println!("  dock changed: {:?} -> {:?}", changed.previous, changed.current);
        }
        committed = Some(frame.pose);
    }
    let resting = committed.unwrap();
    println!(
        "  resting at ({:.1}, {:.1}), {}°",
        resting.center.x, resting.center.y, resting.orientation
    );
    assert_eq!(item.docked_location(), DockState::Left);
    assert_eq!(resting.orientation, 90.0);

    // Later, the user drags the item to the middle and lets go: undocked,
    // staying wherever it was released, event delivered immediately.
    println!("== Dragging back out ==");
    assert!(item.manipulation_completed());
    let released = Pose::new(Point::new(500.0, 300.0), 25.0);
    match item.resolve(released, item_height, container).unwrap() {
        Resolution::Stay { event: Some(changed) } => {
            println!("  dock changed: {:?} -> {:?}", changed.previous, changed.current);
            assert_eq!(changed.previous, DockState::Left);
            assert_eq!(changed.current, DockState::None);
        }
        other => unreachable!("expected an undock, got {other:?}"),
    }
    assert!(!item.is_transitioning());
    assert_eq!(item.docked_location(), DockState::None);
}
