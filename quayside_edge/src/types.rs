// Copyright 2026 the Quayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for edge docking: dock states, edge insets, configuration,
//! and classifier output.

use kurbo::Point;

/// Which container edge (if any) an item rests against.
///
/// Mutated only by a classification decision, read by the transition driver
/// and exposed to hosts.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum DockState {
    /// Not docked; the item floats freely.
    #[default]
    None,
    /// Docked against the left edge.
    Left,
    /// Docked against the right edge.
    Right,
    /// Docked against the top edge.
    Top,
    /// Docked against the bottom edge.
    Bottom,
}

impl DockState {
    /// Whether the item is docked to some edge.
    pub const fn is_docked(self) -> bool {
        !matches!(self, Self::None)
    }

    /// The resting orientation for this edge, in degrees.
    ///
    /// Docked items face outward: `Bottom` is the neutral 0°, `Left` 90°,
    /// `Top` 180° (upside down), `Right` 270°. Returns `None` for an
    /// undocked state.
    pub const fn resting_orientation(self) -> Option<f64> {
        match self {
            Self::None => None,
            Self::Left => Some(90.0),
            Self::Right => Some(270.0),
            Self::Top => Some(180.0),
            Self::Bottom => Some(0.0),
        }
    }
}

/// Four independent non-negative margins, one per container edge.
///
/// Used both as dock *thickness* (the proximity band that triggers docking)
/// and as dock *padding* (how far the item stays out from under the edge
/// once docked). Negative components are clamped to zero at construction;
/// a negative margin would silently invert the edge tests.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    /// Margin along the left edge.
    pub left: f64,
    /// Margin along the right edge.
    pub right: f64,
    /// Margin along the top edge.
    pub top: f64,
    /// Margin along the bottom edge.
    pub bottom: f64,
}

impl EdgeInsets {
    /// All margins zero.
    pub const ZERO: Self = Self {
        left: 0.0,
        right: 0.0,
        top: 0.0,
        bottom: 0.0,
    };

    /// Insets with the given per-edge margins. Negative values clamp to zero.
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left: left.max(0.0),
            right: right.max(0.0),
            top: top.max(0.0),
            bottom: bottom.max(0.0),
        }
    }

    /// The same margin on all four edges. Negative values clamp to zero.
    pub fn uniform(value: f64) -> Self {
        let value = value.max(0.0);
        Self {
            left: value,
            right: value,
            top: value,
            bottom: value,
        }
    }
}

/// Dock configuration: proximity thickness and tuck padding.
///
/// Hosts may mutate this between checks; the classifier reads it fresh at
/// every invocation rather than caching it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DockConfig {
    /// Per-edge proximity band within which a released item docks.
    pub thickness: EdgeInsets,
    /// Per-edge offset controlling how far the docked item is tucked
    /// under (or kept out from) the edge.
    pub padding: EdgeInsets,
}

impl Default for DockConfig {
    /// A uniform 64.0 for both thickness and padding, the original
    /// tabletop control's defaults.
    fn default() -> Self {
        Self {
            thickness: EdgeInsets::uniform(64.0),
            padding: EdgeInsets::uniform(64.0),
        }
    }
}

/// The resting pose for a docked item.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DockTarget {
    /// Resting orientation in degrees; always one of 0, 90, 180, 270.
    pub orientation: f64,
    /// Resting center, partially tucked under the docked edge.
    pub center: Point,
}

/// Output of [`classify`](crate::classify::classify).
///
/// `target` is `Some` exactly when `state` is a docked edge. An undocked
/// result carries no pose: the item stays where the user released it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// The decided dock state.
    pub state: DockState,
    /// The resting pose for a docked result.
    pub target: Option<DockTarget>,
}

impl Placement {
    /// An undocked placement with no target pose.
    pub const NONE: Self = Self {
        state: DockState::None,
        target: None,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    // Negative components must never survive construction.
    #[test]
    fn insets_clamp_negative_components() {
        let insets = EdgeInsets::new(-1.0, 2.0, -3.0, 4.0);
        assert_eq!(insets, EdgeInsets::new(0.0, 2.0, 0.0, 4.0));
        assert_eq!(EdgeInsets::uniform(-5.0), EdgeInsets::ZERO);
    }

    #[test]
    fn resting_orientation_matches_edges() {
        assert_eq!(DockState::Bottom.resting_orientation(), Some(0.0));
        assert_eq!(DockState::Left.resting_orientation(), Some(90.0));
        assert_eq!(DockState::Top.resting_orientation(), Some(180.0));
        assert_eq!(DockState::Right.resting_orientation(), Some(270.0));
        assert_eq!(DockState::None.resting_orientation(), None);
        assert!(!DockState::None.is_docked());
        assert!(DockState::Top.is_docked());
    }
}
