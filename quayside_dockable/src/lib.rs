// Copyright 2026 the Quayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quayside Dockable: the per-item controller for edge docking.
//!
//! ## Overview
//!
//! [`Dockable`] ties the pure classifier (`quayside_edge`) and the pose
//! transition (`quayside_transition`) together behind the protocol a host
//! toolkit drives. The controller computes decisions and frames; the host
//! owns rendering, layout, input, and threading, and applies the poses the
//! controller returns.
//!
//! ## Protocol
//!
//! 1. **Release.** When interactive dragging/rotation ends, call
//!    [`Dockable::manipulation_completed`] from the input handler. It only
//!    flips a pending flag, so it is cheap enough for any thread; it returns
//!    `false` (signal ignored, not queued) if docking is disabled or a check
//!    is already pending, so at most one check is active per item.
//! 2. **Resolve.** When it returned `true`, schedule
//!    [`Dockable::resolve`] on the thread that owns the item's visual
//!    state, *after* layout has settled — the controller reads final
//!    on-screen geometry, and calling resolve with settled geometry is the
//!    host's layout-settle barrier. Resolve classifies, updates the dock
//!    state, and for a docked result starts the transition.
//! 3. **Tick.** While [`Dockable::is_transitioning`], call
//!    [`Dockable::tick`] once per frame on the same thread and apply the
//!    returned [`Frame::pose`]. The completing frame carries the exact
//!    target pose (the commit) and, if the dock state differs from the
//!    state before the check began, a one-shot [`DockChanged`] event —
//!    delivered after the commit, so consumers may assume the pose already
//!    reflects the new state.
//!
//! The host must suppress direct interactive pose mutation while a
//! transition runs; the controller never sees manipulation-in-progress
//! events and cannot arbitrate that race itself.
//!
//! ## Minimal example
//!
//! ```
//! use quayside_dockable::{Dockable, DockState, Frame, Pose, Resolution};
//! use kurbo::{Point, Size};
//!
//! let mut item = Dockable::new();
//! item.set_duration_ms(100.0);
//! let container = Size::new(1920.0, 1080.0);
//!
//! // Released near the right edge.
//! assert!(item.manipulation_completed());
//! let released = Pose::new(Point::new(1900.0, 540.0), 15.0);
//! let resolution = item.resolve(released, 200.0, container).unwrap();
//! assert!(matches!(resolution, Resolution::Dock { state: DockState::Right, .. }));
//!
//! // Drive frames until the commit; the event arrives with it.
//! let mut event = None;
//! while let Some(Frame { pose, completed }) = item.tick(16.0) {
//!     // ... apply `pose` to the visual state ...
//!     # let _ = pose;
//!     if let Some(changed) = completed {
//!         event = Some(changed);
//!     }
//! }
//! let changed = event.unwrap();
//! assert_eq!(changed.previous, DockState::None);
//! assert_eq!(changed.current, DockState::Right);
//! assert_eq!(item.docked_location(), DockState::Right);
//! ```
//!
//! ## Undocking
//!
//! The release check can also *undock*: a docked item dragged back into the
//! interior classifies as [`DockState::None`], stays where the user put it,
//! and the dock-change event is carried on [`Resolution::Stay`] immediately,
//! since no transition runs.
//!
//! This crate is `no_std`.

#![no_std]

pub mod controller;
pub mod types;

pub use controller::Dockable;
pub use types::{DockChanged, Frame, ItemFlags, Resolution};

pub use quayside_edge::{DockConfig, DockState, DockTarget, EdgeInsets, Placement};
pub use quayside_transition::{Easing, Pose, Tick, TransitionId};
