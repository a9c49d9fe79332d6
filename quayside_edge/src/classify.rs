// Copyright 2026 the Quayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The edge-proximity classifier: a pure decision function from settled
//! geometry to a dock placement.

use kurbo::{Point, Size};

use crate::types::{DockConfig, DockState, DockTarget, EdgeInsets, Placement};

/// Decide which edge (if any) an item should dock to.
///
/// Inputs are the item's current center, its height, and the container size.
/// The item's *height* is the tuck offset for all four edges: the docked
/// item is rotated to face outward, so its height is the dimension that
/// crosses the edge regardless of which edge it is.
///
/// ## Evaluation order
///
/// The edge tests run in a fixed, mutually exclusive order — right, then
/// left, then top, then bottom — and the first match wins. At a corner,
/// where two proximity bands overlap, this order is the tie-break policy:
/// right beats left beats top beats bottom. Callers relying on corner
/// behavior should not reorder these tests.
///
/// ## Preconditions
///
/// Call only after layout has settled, since the decision reads final
/// on-screen geometry. A container with non-positive width or height
/// classifies as [`DockState::None`].
///
/// ```
/// use quayside_edge::{classify, DockConfig, DockState};
/// use kurbo::{Point, Size};
///
/// let config = DockConfig {
///     thickness: quayside_edge::EdgeInsets::uniform(50.0),
///     padding: quayside_edge::EdgeInsets::uniform(10.0),
/// };
/// let container = Size::new(800.0, 600.0);
///
/// // Bottom band: y >= 600 - 50.
/// let p = classify(Point::new(400.0, 580.0), 120.0, container, &config);
/// assert_eq!(p.state, DockState::Bottom);
/// // Tucked: container height + half item height - padding.
/// assert_eq!(p.target.unwrap().center, Point::new(400.0, 600.0 + 60.0 - 10.0));
/// ```
pub fn classify(center: Point, item_height: f64, container: Size, config: &DockConfig) -> Placement {
    if container.width <= 0.0 || container.height <= 0.0 {
        return Placement::NONE;
    }
    let thickness = &config.thickness;

    let state = if center.x >= container.width - thickness.right {
        DockState::Right
    } else if center.x <= thickness.left {
        DockState::Left
    } else if center.y <= thickness.top {
        DockState::Top
    } else if center.y >= container.height - thickness.bottom {
        DockState::Bottom
    } else {
        return Placement::NONE;
    };

    Placement {
        state,
        target: dock_target(state, center, item_height, container, &config.padding),
    }
}

/// The resting pose for docking to `edge`, or `None` for [`DockState::None`].
///
/// The off-axis coordinate is kept from the current center (a right-docked
/// item keeps its `y`); the on-axis coordinate places the center half the
/// item's height past the container bound, pulled back by the edge's
/// padding. Exposed separately from [`classify`] so hosts can dock
/// programmatically to a chosen edge (e.g. when restoring a saved layout).
pub fn dock_target(
    edge: DockState,
    center: Point,
    item_height: f64,
    container: Size,
    padding: &EdgeInsets,
) -> Option<DockTarget> {
    let half = item_height * 0.5;
    let (orientation, target) = match edge {
        DockState::None => return None,
        DockState::Right => (270.0, Point::new(container.width + half - padding.right, center.y)),
        DockState::Left => (90.0, Point::new(padding.left - half, center.y)),
        DockState::Top => (180.0, Point::new(center.x, padding.top - half)),
        DockState::Bottom => (0.0, Point::new(center.x, container.height + half - padding.bottom)),
    };
    Some(DockTarget {
        orientation,
        center: target,
    })
}
