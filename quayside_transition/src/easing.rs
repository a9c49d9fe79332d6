// Copyright 2026 the Quayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Progress curves for transitions.

/// Easing applied to the unified progress parameter of a transition.
///
/// One eased value drives both position and orientation, so the two
/// channels always progress in lockstep and finish simultaneously
/// whichever curve is chosen.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Easing {
    /// Constant-rate progress (the original control's behavior).
    #[default]
    Linear,
    /// Hermite smoothstep: eases in and out, `3t² − 2t³`.
    SmoothStep,
}

impl Easing {
    /// Map raw progress `t` in [0, 1] through the curve.
    ///
    /// Inputs outside [0, 1] are clamped first; every curve maps 0 to 0
    /// and 1 to 1.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
        }
    }
}
