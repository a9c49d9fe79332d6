// Copyright 2026 the Quayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Classifying release points against container edges.
//!
//! This example feeds a handful of release positions to the pure classifier
//! and prints the decision for each: the docked edge (if any), the resting
//! orientation, and the tucked center.
//!
//! Run:
//! - `cargo run -p quayside_examples --example dock_basics`

use kurbo::{Point, Size};
use quayside_edge::{DockConfig, DockState, classify};

fn main() {
    let config = DockConfig::default(); // uniform 64.0 thickness and padding
    let container = Size::new(1920.0, 1080.0);
    let item_height = 240.0;

    let releases = [
        ("near the right edge", Point::new(1880.0, 540.0)),
        ("near the left edge", Point::new(40.0, 300.0)),
        ("near the top edge", Point::new(960.0, 20.0)),
        ("near the bottom edge", Point::new(700.0, 1050.0)),
        ("in the interior", Point::new(960.0, 540.0)),
    ];

    println!("== Release classification ==");
    for (label, center) in releases {
        let placement = classify(center, item_height, container, &config);
        match placement.target {
            Some(target) => println!(
                "  {label}: dock {:?}, orient to {}°, tuck at ({:.1}, {:.1})",
                placement.state, target.orientation, target.center.x, target.center.y
            ),
            None => println!("  {label}: stays put"),
        }
    }

    // Corners fall into two bands at once; the fixed priority
    // right > left > top > bottom breaks the tie.
    println!("== Corner tie-breaks ==");
    let corners = [
        Point::new(1900.0, 20.0),
        Point::new(1900.0, 1060.0),
        Point::new(20.0, 20.0),
        Point::new(20.0, 1060.0),
    ];
    for corner in corners {
        let placement = classify(corner, item_height, container, &config);
        println!("  ({:.0}, {:.0}) -> {:?}", corner.x, corner.y, placement.state);
    }

    let top_right = classify(Point::new(1900.0, 20.0), item_height, container, &config);
    assert_eq!(top_right.state, DockState::Right);
    let top_left = classify(Point::new(20.0, 20.0), item_height, container, &config);
    assert_eq!(top_left.state, DockState::Left);
}
