// Copyright 2026 the Quayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quayside Edge: edge-proximity classification for dockable scatter items.
//!
//! ## Overview
//!
//! Given an item's center, its height, the container size, and a dock
//! configuration, [`classify`] decides which container edge (if any) the item
//! should dock to and, for a docked result, the resting pose: an orientation
//! facing outward from that edge and a center partially tucked under it.
//!
//! This crate holds no state and performs no animation. Feed it the item's
//! settled geometry after a manipulation ends; downstream crates
//! (`quayside_transition`, `quayside_dockable`) animate toward the returned
//! target and surface dock-change events.
//!
//! ## Proximity bands and priority
//!
//! Each edge has an independent thickness forming a band along the container
//! boundary. A center inside a band docks to that edge. Bands may overlap at
//! corners; the tie is broken by a fixed evaluation order — right, then left,
//! then top, then bottom — which is a documented policy, not an accident of
//! implementation. See [`classify`] for the exact tests.
//!
//! ## Degenerate containers
//!
//! A container with non-positive width or height means "no bounds available":
//! classification returns [`DockState::None`] and no docking happens. This is
//! never a fault.
//!
//! ## Minimal example
//!
//! ```
//! use quayside_edge::{classify, DockConfig, DockState};
//! use kurbo::{Point, Size};
//!
//! let config = DockConfig::default(); // 64.0 thickness and padding
//! let container = Size::new(1920.0, 1080.0);
//!
//! // Released near the right edge: dock right, face outward (270°).
//! let placement = classify(Point::new(1900.0, 540.0), 200.0, container, &config);
//! assert_eq!(placement.state, DockState::Right);
//! let target = placement.target.unwrap();
//! assert_eq!(target.orientation, 270.0);
//! assert_eq!(target.center, Point::new(1920.0 + 100.0 - 64.0, 540.0));
//!
//! // Released in the interior: stays put.
//! let placement = classify(Point::new(960.0, 540.0), 200.0, container, &config);
//! assert_eq!(placement.state, DockState::None);
//! assert!(placement.target.is_none());
//! ```
//!
//! Float inputs are assumed finite (no NaNs).
//!
//! This crate is `no_std`.

#![no_std]

pub mod classify;
pub mod types;

pub use classify::{classify, dock_target};
pub use types::{DockConfig, DockState, DockTarget, EdgeInsets, Placement};
