// Copyright 2026 the Quayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The full release → resolve → tick protocol with a simulated frame loop.
//!
//! A host toolkit would call `manipulation_completed` from its input
//! handler, schedule `resolve` after layout settles, then apply the pose
//! from each `tick` to its visual state. Here the frame loop is simulated
//! at a fixed 16 ms step and the poses are printed instead of rendered.
//!
//! Run:
//! - `cargo run -p quayside_examples --example dock_tick_loop`

use kurbo::{Point, Size};
use quayside_dockable::{DockState, Dockable, Frame, Pose, Resolution};

fn main() {
    let mut item = Dockable::new();
    item.set_duration_ms(120.0);
    let container = Size::new(1280.0, 800.0);
    let item_height = 180.0;

    // The user releases the item near the bottom edge, slightly rotated.
    let released = Pose::new(Point::new(400.0, 770.0), 338.0);
    assert!(item.manipulation_completed());

    // Layout has settled; resolve on the pose-owning thread.
    let resolution = item.resolve(released, item_height, container).unwrap();
    match resolution {
        Resolution::Dock { state, .. } => println!("== Docking {state:?} =="),
        Resolution::Stay { .. } => unreachable!("released inside the bottom band"),
    }

    // Frame loop: apply each pose; the last frame is the commit.
    let mut frames = 0;
    while let Some(Frame { pose, completed }) = item.tick(16.0) {
        frames += 1;
        println!(
            "  frame {frames:2}: center ({:7.2}, {:7.2})  orientation {:7.2}°",
            pose.center.x, pose.center.y, pose.orientation
        );
        if let Some(changed) = completed {
            println!("== Dock changed: {:?} -> {:?} ==", changed.previous, changed.current);
        }
    }

    assert_eq!(item.docked_location(), DockState::Bottom);
    // 338° is corrected toward 360°, not unwound back to 0°.
    // The committed center tucks half the item height past the edge.
    assert!(!item.is_transitioning());
}
