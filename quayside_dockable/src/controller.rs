// Copyright 2026 the Quayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dockable-item controller.

use kurbo::{Point, Size};

use quayside_edge::{DockConfig, DockState, EdgeInsets, classify, dock_target};
use quayside_transition::{DockTransition, Easing, Pose, Tick, TransitionId};

use crate::types::{DockChanged, Frame, ItemFlags, Resolution};

/// Default transition duration in milliseconds, matching the original
/// tabletop control.
pub const DEFAULT_DURATION_MS: f64 = 500.0;

/// Per-item edge-docking controller.
///
/// Owns the dock configuration, the current [`DockState`], the pending-check
/// flag, and one transition machine. See the crate docs for the
/// release → resolve → tick protocol and its threading contract: `resolve`
/// and `tick` mutate controller state and must run on the single thread
/// that owns the item's visual state.
///
/// Configuration (thickness, padding, duration, easing) may be changed at
/// any time between checks; each resolve reads it fresh.
#[derive(Clone, Debug)]
pub struct Dockable {
    config: DockConfig,
    flags: ItemFlags,
    state: DockState,
    // State when the live check began; the committing tick compares
    // against this to decide whether a DockChanged event fires.
    check_origin: DockState,
    transition: DockTransition,
}

impl Default for Dockable {
    fn default() -> Self {
        Self::new()
    }
}

impl Dockable {
    /// A controller with the default configuration: uniform 64.0 thickness
    /// and padding, a 500 ms linear transition, docking enabled.
    pub fn new() -> Self {
        Self::with_config(DockConfig::default())
    }

    /// A controller with the given dock configuration.
    pub fn with_config(config: DockConfig) -> Self {
        Self {
            config,
            flags: ItemFlags::default(),
            state: DockState::None,
            check_origin: DockState::None,
            transition: DockTransition::new(DEFAULT_DURATION_MS),
        }
    }

    /// The current dock state.
    pub fn docked_location(&self) -> DockState {
        self.state
    }

    /// Whether docking is enabled.
    pub fn is_dockable(&self) -> bool {
        self.flags.contains(ItemFlags::DOCKABLE)
    }

    /// Enable or disable docking. Disabling also drops a pending check, so
    /// a later `resolve` is a no-op; an in-flight transition is left to
    /// finish (it was decided while docking was enabled).
    pub fn set_dockable(&mut self, dockable: bool) {
        self.flags.set(ItemFlags::DOCKABLE, dockable);
        if !dockable {
            self.flags.remove(ItemFlags::CHECK_PENDING);
        }
    }

    /// Whether a proximity check has been requested and not yet resolved.
    pub fn check_pending(&self) -> bool {
        self.flags.contains(ItemFlags::CHECK_PENDING)
    }

    /// Whether a transition is in flight.
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_running()
    }

    /// The id of the current (or most recent) transition session.
    pub fn transition_id(&self) -> TransitionId {
        self.transition.generation()
    }

    /// The dock configuration.
    pub fn config(&self) -> &DockConfig {
        &self.config
    }

    /// Mutable access to the dock configuration.
    pub fn config_mut(&mut self) -> &mut DockConfig {
        &mut self.config
    }

    /// Set the per-edge proximity thickness.
    pub fn set_thickness(&mut self, thickness: EdgeInsets) {
        self.config.thickness = thickness;
    }

    /// Set the per-edge tuck padding.
    pub fn set_padding(&mut self, padding: EdgeInsets) {
        self.config.padding = padding;
    }

    /// The transition duration in milliseconds.
    pub fn duration_ms(&self) -> f64 {
        self.transition.duration_ms()
    }

    /// Set the transition duration. Negative clamps to zero; takes effect
    /// from the next transition.
    pub fn set_duration_ms(&mut self, duration_ms: f64) {
        self.transition.set_duration_ms(duration_ms);
    }

    /// The transition easing.
    pub fn easing(&self) -> Easing {
        self.transition.easing()
    }

    /// Set the transition easing; takes effect from the next transition.
    pub fn set_easing(&mut self, easing: Easing) {
        self.transition.set_easing(easing);
    }

    /// Signal that interactive dragging/rotation has ended.
    ///
    /// Returns `true` when a proximity check was requested: the host should
    /// then schedule [`resolve`](Self::resolve) on the pose-owning thread
    /// once layout has settled. Returns `false` — the signal is ignored,
    /// not queued — when docking is disabled or a check is already pending,
    /// so at most one check is ever active per item.
    ///
    /// Only flips a flag; safe to call from an input-completion handler
    /// without blocking it.
    pub fn manipulation_completed(&mut self) -> bool {
        if !self.flags.contains(ItemFlags::DOCKABLE)
            || self.flags.contains(ItemFlags::CHECK_PENDING)
        {
            return false;
        }
        self.flags.insert(ItemFlags::CHECK_PENDING);
        true
    }

    /// Resolve the pending proximity check against settled geometry.
    ///
    /// `pose` is the item's current center and orientation, `item_height`
    /// its laid-out height, `container` the enclosing surface's size. Must
    /// run on the pose-owning thread after layout has settled.
    ///
    /// Returns `None` when no check is pending. Otherwise clears the
    /// pending flag, reads the configuration fresh, classifies, and updates
    /// the dock state:
    ///
    /// - Docked result: records the pre-check state, starts the transition
    ///   from `pose` (superseding any in-flight session), and returns
    ///   [`Resolution::Dock`].
    /// - No edge: any in-flight transition is discarded, the item stays
    ///   where it is, and [`Resolution::Stay`] carries the undock event if
    ///   the item was docked before.
    pub fn resolve(&mut self, pose: Pose, item_height: f64, container: Size) -> Option<Resolution> {
        if !self.flags.contains(ItemFlags::CHECK_PENDING) {
            return None;
        }
        self.flags.remove(ItemFlags::CHECK_PENDING);

        let placement = classify(pose.center, item_height, container, &self.config);
        let previous = self.state;
        self.state = placement.state;

        match placement.target {
            Some(target) => {
                self.check_origin = previous;
                let transition = self.transition.start(pose, target.orientation, target.center);
                Some(Resolution::Dock {
                    state: placement.state,
                    transition,
                })
            }
            None => {
                self.transition.stop();
                self.check_origin = self.state;
                let event = previous.is_docked().then_some(DockChanged {
                    previous,
                    current: DockState::None,
                });
                Some(Resolution::Stay { event })
            }
        }
    }

    /// Advance the in-flight transition by `dt_ms` and report the frame.
    ///
    /// Returns `None` when idle. The completing frame's pose is the exact
    /// target (the commit); its `completed` field carries the one-shot
    /// [`DockChanged`] event when the committed state differs from the
    /// state before the check began. Re-docking to the same edge runs a
    /// full transition but yields no event.
    pub fn tick(&mut self, dt_ms: f64) -> Option<Frame> {
        match self.transition.tick(dt_ms) {
            Tick::Idle => None,
            Tick::InFlight(pose) => Some(Frame {
                pose,
                completed: None,
            }),
            Tick::Completed(pose) => {
                let completed = (self.state != self.check_origin).then_some(DockChanged {
                    previous: self.check_origin,
                    current: self.state,
                });
                self.check_origin = self.state;
                Some(Frame { pose, completed })
            }
        }
    }

    /// Dock programmatically to a named edge (e.g. restoring saved layout).
    ///
    /// Computes the resting pose from the current padding, updates the dock
    /// state, and starts the transition from `current`. Returns `None` for
    /// [`DockState::None`] or a degenerate container, in which case nothing
    /// changes. The completing tick emits the usual event if the state
    /// changed.
    pub fn dock_to(
        &mut self,
        edge: DockState,
        current: Pose,
        item_height: f64,
        container: Size,
    ) -> Option<TransitionId> {
        if container.width <= 0.0 || container.height <= 0.0 {
            return None;
        }
        let target = dock_target(
            edge,
            current.center,
            item_height,
            container,
            &self.config.padding,
        )?;
        self.check_origin = self.state;
        self.state = edge;
        Some(self.transition.start(current, target.orientation, target.center))
    }

    /// Start a transition to an explicit target pose, without touching the
    /// dock state or requiring an interactive trigger.
    ///
    /// Raw access to the underlying machine's `start`: shortest-path
    /// correction and supersession apply as usual, and since the dock state
    /// is unchanged the completing tick emits no event.
    pub fn start_transition(
        &mut self,
        current: Pose,
        target_orientation: f64,
        target_center: Point,
    ) -> TransitionId {
        self.check_origin = self.state;
        self.transition.start(current, target_orientation, target_center)
    }
}
