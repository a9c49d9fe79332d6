// Copyright 2026 the Quayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller types: item flags, resolutions, frames, and events.

use quayside_edge::DockState;
use quayside_transition::{Pose, TransitionId};

bitflags::bitflags! {
    /// Per-item controller flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ItemFlags: u8 {
        /// Docking is enabled; release signals start proximity checks.
        const DOCKABLE      = 0b0000_0001;
        /// A proximity check has been requested and not yet resolved.
        const CHECK_PENDING = 0b0000_0010;
    }
}

impl Default for ItemFlags {
    fn default() -> Self {
        Self::DOCKABLE
    }
}

/// A dock-state change observed by a check.
///
/// Emitted at most once per check: with the committing [`Frame`] when a
/// transition ran, or on [`Resolution::Stay`] when the item undocked
/// without one.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DockChanged {
    /// The state before the check began.
    pub previous: DockState,
    /// The state the check decided.
    pub current: DockState,
}

/// Outcome of resolving a pending proximity check.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Resolution {
    /// The classifier said no edge applies: the item stays where the user
    /// released it and no transition starts. If the item was docked before,
    /// `event` reports the undock here, since there is no committing frame
    /// to defer it to.
    Stay {
        /// The undock event, when the check changed a docked state to
        /// [`DockState::None`].
        event: Option<DockChanged>,
    },
    /// The item docks: a transition toward the edge's resting pose has
    /// started. Drive it with [`Dockable::tick`](crate::Dockable::tick).
    Dock {
        /// The decided edge.
        state: DockState,
        /// The started transition session.
        transition: TransitionId,
    },
}

/// Per-frame output of [`Dockable::tick`](crate::Dockable::tick).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frame {
    /// The pose to apply to the visual state this frame. On the completing
    /// frame this is the exact target pose — the commit.
    pub pose: Pose,
    /// Present only on the completing frame, and only when the committed
    /// dock state differs from the state before the check began.
    pub completed: Option<DockChanged>,
}
