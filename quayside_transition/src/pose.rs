// Copyright 2026 the Quayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pose of a scatter item: a center point plus an orientation.

use kurbo::Point;

/// Position and orientation of an item.
///
/// Orientation is in degrees and unbounded: the shortest-path correction in
/// [`DockTransition::start`](crate::transition::DockTransition::start) may
/// produce targets outside [0, 360), and nothing renormalizes between
/// transitions. Hosts that need a canonical angle can reduce modulo 360 at
/// the point of use.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Pose {
    /// Center of the item in container coordinates.
    pub center: Point,
    /// Orientation in degrees, unbounded.
    pub orientation: f64,
}

impl Pose {
    /// A pose from a center and an orientation in degrees.
    pub const fn new(center: Point, orientation: f64) -> Self {
        Self {
            center,
            orientation,
        }
    }

    /// Linear interpolation between two poses at parameter `t` in [0, 1].
    ///
    /// Both channels use the same parameter, which is what keeps position
    /// and orientation in lockstep during a transition.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            center: self.center.lerp(other.center, t),
            orientation: self.orientation + (other.orientation - self.orientation) * t,
        }
    }
}
