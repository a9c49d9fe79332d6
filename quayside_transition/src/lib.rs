// Copyright 2026 the Quayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quayside Transition: tick-driven pose interpolation toward a dock target.
//!
//! ## Overview
//!
//! [`DockTransition`] animates an item's pose (center plus orientation in
//! degrees) from its current value to a target over a fixed duration. The
//! machine is headless: it holds elapsed time and endpoints, and the host
//! drives it with [`DockTransition::tick`] once per frame, applying the
//! returned pose to its visual state. On the completing tick the machine
//! returns the target pose bit-exactly, so no residual interpolation error
//! survives the animation.
//!
//! ## Shortest-path rotation
//!
//! [`DockTransition::start`] corrects the target orientation by ±360° so the
//! interpolated rotation never exceeds 180° in magnitude. Orientations are
//! deliberately *unbounded* degrees: a correction may push the target outside
//! [0, 360), and poses are not renormalized between transitions.
//!
//! ```
//! use quayside_transition::{DockTransition, Pose, Tick};
//! use kurbo::Point;
//!
//! let mut t = DockTransition::new(100.0);
//! let current = Pose::new(Point::new(0.0, 0.0), 10.0);
//!
//! // 10° → 200° naively turns 190°; the corrected target is −160° (170°).
//! t.start(current, 200.0, Point::new(50.0, 0.0));
//! assert_eq!(t.target().unwrap().orientation, -160.0);
//!
//! // Halfway through: both channels at 50% (linear easing).
//! match t.tick(50.0) {
//!     Tick::InFlight(pose) => {
//!         assert_eq!(pose.orientation, -75.0);
//!         assert_eq!(pose.center, Point::new(25.0, 0.0));
//!     }
//!     other => panic!("expected in-flight frame, got {other:?}"),
//! }
//!
//! // Completion commits the exact target.
//! match t.tick(50.0) {
//!     Tick::Completed(pose) => assert_eq!(pose.orientation, -160.0),
//!     other => panic!("expected completion, got {other:?}"),
//! }
//! assert!(!t.is_running());
//! ```
//!
//! ## Supersession
//!
//! Calling `start` while a transition runs discards the in-flight session
//! without committing its target and begins a fresh interpolation from the
//! pose the caller passes (normally the in-progress pose). Each session has
//! a [`TransitionId`] generation; hosts holding per-frame callbacks compare
//! generations to drop frames from a superseded session.
//!
//! This crate is `no_std`.

#![no_std]

pub mod easing;
pub mod pose;
pub mod transition;

pub use easing::Easing;
pub use pose::Pose;
pub use transition::{DockTransition, Tick, TransitionId};
