// Copyright 2026 the Quayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The transition state machine: start, tick, commit.

use kurbo::Point;

use crate::easing::Easing;
use crate::pose::Pose;

/// Identifier for one transition session.
///
/// Every [`DockTransition::start`] bumps the generation, so a host holding a
/// per-frame callback can remember the id it started and drop frames once
/// the machine reports a different one — the session was superseded and its
/// target will never be committed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TransitionId(pub(crate) u32);

/// Output of one [`DockTransition::tick`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Tick {
    /// No transition is running.
    Idle,
    /// The interpolated pose for this frame; apply it to the visual state.
    InFlight(Pose),
    /// The transition finished this frame. The pose is the corrected target,
    /// bit-exact; apply it as the final commit. The machine is idle again.
    Completed(Pose),
}

/// Timed interpolation of an item's pose toward a dock target.
///
/// States are `Idle` and `Transitioning`:
///
/// - `Idle` → `Transitioning` on [`start`](Self::start).
/// - `Transitioning` → `Idle` when the duration elapses during
///   [`tick`](Self::tick); the completing tick carries the exact target.
/// - `Transitioning` → `Transitioning` on a second `start`: the old session
///   is discarded without committing its target (supersession) and the new
///   one interpolates from the pose the caller passes.
///
/// Duration and easing are read when a session starts; changing them
/// mid-flight affects the next session, not the current one.
#[derive(Clone, Debug)]
pub struct DockTransition {
    duration_ms: f64,
    easing: Easing,
    // Session state, valid while `running`.
    start: Pose,
    target: Pose,
    session_duration_ms: f64,
    session_easing: Easing,
    elapsed_ms: f64,
    generation: u32,
    running: bool,
}

impl DockTransition {
    /// A machine with the given duration in milliseconds (negative clamps
    /// to zero) and linear easing.
    pub fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms: duration_ms.max(0.0),
            easing: Easing::Linear,
            start: Pose::default(),
            target: Pose::default(),
            session_duration_ms: 0.0,
            session_easing: Easing::Linear,
            elapsed_ms: 0.0,
            generation: 0,
            running: false,
        }
    }

    /// The configured duration for future sessions, in milliseconds.
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Set the duration for future sessions. Negative clamps to zero.
    pub fn set_duration_ms(&mut self, duration_ms: f64) {
        self.duration_ms = duration_ms.max(0.0);
    }

    /// The configured easing for future sessions.
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Set the easing for future sessions.
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Whether a session is in flight.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The id of the current (or most recent) session.
    pub fn generation(&self) -> TransitionId {
        TransitionId(self.generation)
    }

    /// The corrected target pose of the in-flight session, if any.
    pub fn target(&self) -> Option<Pose> {
        self.running.then_some(self.target)
    }

    /// Begin interpolating from `current` toward the given target.
    ///
    /// The target orientation is first corrected to the nearest equivalent
    /// angle: if `current.orientation - target_orientation` exceeds 180 the
    /// target gains 360, if it is below −180 the target loses 360. The
    /// corrected travel is therefore at most 180° in magnitude, which
    /// prevents a visually excessive spin (a 10° → 200° request turns 170°
    /// to −160° rather than 190° to 200°).
    ///
    /// If a session is already running it is superseded: its target is
    /// discarded, never committed. Pass the in-progress pose as `current`
    /// to continue smoothly from wherever the item is. Starting with the
    /// target equal to `current` is a valid zero-motion session: it still
    /// runs to completion so the caller's commit logic executes.
    pub fn start(
        &mut self,
        current: Pose,
        target_orientation: f64,
        target_center: Point,
    ) -> TransitionId {
        let mut orientation = target_orientation;
        if current.orientation - target_orientation > 180.0 {
            orientation += 360.0;
        }
        if current.orientation - target_orientation < -180.0 {
            orientation -= 360.0;
        }

        self.start = current;
        self.target = Pose::new(target_center, orientation);
        self.session_duration_ms = self.duration_ms;
        self.session_easing = self.easing;
        self.elapsed_ms = 0.0;
        self.generation = self.generation.wrapping_add(1);
        self.running = true;
        TransitionId(self.generation)
    }

    /// Discard the in-flight session, if any, without committing its target.
    ///
    /// The item is left at whatever pose the host last applied. A no-op when
    /// idle. Supersession via [`start`](Self::start) covers the common case;
    /// `stop` exists for the host that decides mid-flight that no target
    /// applies anymore.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Advance the session by `dt_ms` milliseconds (negative counts as zero)
    /// and report the pose for this frame.
    ///
    /// While running, both channels move by the same eased progress value,
    /// so position and orientation finish simultaneously. When the session's
    /// duration has elapsed the machine returns [`Tick::Completed`] with the
    /// exact target and goes idle; a zero-duration session completes on its
    /// first tick.
    pub fn tick(&mut self, dt_ms: f64) -> Tick {
        if !self.running {
            return Tick::Idle;
        }
        self.elapsed_ms += dt_ms.max(0.0);
        if self.elapsed_ms >= self.session_duration_ms {
            self.running = false;
            return Tick::Completed(self.target);
        }
        let t = self.session_easing.apply(self.elapsed_ms / self.session_duration_ms);
        Tick::InFlight(self.start.lerp(self.target, t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pose(x: f64, y: f64, orientation: f64) -> Pose {
        Pose::new(Point::new(x, y), orientation)
    }

    // The worked example from the docs: 10° → 200° corrects to −160°.
    #[test]
    fn correction_below_negative_180() {
        let mut t = DockTransition::new(100.0);
        t.start(pose(0.0, 0.0, 10.0), 200.0, Point::ZERO);
        assert_eq!(t.target().unwrap().orientation, -160.0);
    }

    // 350° → 0° would naively unwind 350°; corrected target is 360°.
    #[test]
    fn correction_above_positive_180() {
        let mut t = DockTransition::new(100.0);
        t.start(pose(0.0, 0.0, 350.0), 0.0, Point::ZERO);
        assert_eq!(t.target().unwrap().orientation, 360.0);
    }

    // A 180° delta is left alone; either direction is equally short.
    #[test]
    fn exact_half_turn_is_not_corrected() {
        let mut t = DockTransition::new(100.0);
        t.start(pose(0.0, 0.0, 0.0), 180.0, Point::ZERO);
        assert_eq!(t.target().unwrap().orientation, 180.0);
    }

    // Corrected travel never exceeds 180° over a sweep of start angles.
    #[test]
    fn corrected_travel_is_bounded() {
        let mut t = DockTransition::new(100.0);
        let mut current = -720.0;
        while current <= 720.0 {
            for target in [0.0, 90.0, 180.0, 270.0] {
                t.start(pose(0.0, 0.0, current), target, Point::ZERO);
                let travel = t.target().unwrap().orientation - current;
                assert!(
                    travel.abs() <= 180.0 + 1e-9,
                    "travel {travel} for {current} -> {target}"
                );
            }
            current += 17.0;
        }
    }

    #[test]
    fn linear_interpolation_in_lockstep() {
        let mut t = DockTransition::new(200.0);
        t.start(pose(0.0, 0.0, 0.0), 90.0, Point::new(100.0, 0.0));
        match t.tick(50.0) {
            Tick::InFlight(p) => {
                // Both channels at 25%.
                assert_eq!(p.orientation, 22.5);
                assert_eq!(p.center, Point::new(25.0, 0.0));
            }
            other => panic!("expected in-flight frame, got {other:?}"),
        }
    }

    #[test]
    fn completion_commits_exact_target_and_goes_idle() {
        let mut t = DockTransition::new(90.0);
        t.start(pose(0.0, 0.0, 10.0), 200.0, Point::new(3.0, 7.0));
        // Three 30ms frames; the oddly sized duration would leave residual
        // error if the last frame interpolated instead of committing.
        assert!(matches!(t.tick(30.0), Tick::InFlight(_)));
        assert!(matches!(t.tick(30.0), Tick::InFlight(_)));
        match t.tick(30.0) {
            Tick::Completed(p) => assert_eq!(p, pose(3.0, 7.0, -160.0)),
            other => panic!("expected completion, got {other:?}"),
        }
        assert!(!t.is_running());
        assert_eq!(t.tick(16.0), Tick::Idle);
    }

    // Supersession: the second target wins, the first is never committed.
    #[test]
    fn restart_discards_previous_target() {
        let mut t = DockTransition::new(100.0);
        let first = t.start(pose(0.0, 0.0, 0.0), 90.0, Point::new(100.0, 0.0));
        let in_flight = match t.tick(50.0) {
            Tick::InFlight(p) => p,
            other => panic!("expected in-flight frame, got {other:?}"),
        };

        let second = t.start(in_flight, 270.0, Point::new(0.0, 100.0));
        assert_ne!(first, second);
        assert_eq!(t.generation(), second);

        // Run the new session to completion; the committed pose is the
        // second target, not the first.
        let committed = loop {
            match t.tick(25.0) {
                Tick::InFlight(_) => {}
                Tick::Completed(p) => break p,
                Tick::Idle => panic!("went idle without completing"),
            }
        };
        // From 45° the shortest path to 270° is backwards to −90°.
        assert_eq!(committed, pose(0.0, 100.0, -90.0));
    }

    // A zero-motion session still completes, so commit logic runs.
    #[test]
    fn zero_motion_session_completes() {
        let mut t = DockTransition::new(50.0);
        let at_target = pose(10.0, 10.0, 90.0);
        t.start(at_target, 90.0, at_target.center);
        assert!(t.is_running());
        match t.tick(50.0) {
            Tick::Completed(p) => assert_eq!(p, at_target),
            other => panic!("expected completion, got {other:?}"),
        }
    }

    // Stop discards the session; nothing is ever committed.
    #[test]
    fn stop_discards_without_committing() {
        let mut t = DockTransition::new(100.0);
        t.start(pose(0.0, 0.0, 0.0), 90.0, Point::new(10.0, 0.0));
        assert!(matches!(t.tick(50.0), Tick::InFlight(_)));
        t.stop();
        assert!(!t.is_running());
        assert_eq!(t.target(), None);
        assert_eq!(t.tick(50.0), Tick::Idle);
    }

    #[test]
    fn zero_duration_completes_on_first_tick() {
        let mut t = DockTransition::new(0.0);
        t.start(pose(0.0, 0.0, 0.0), 90.0, Point::new(5.0, 5.0));
        assert!(matches!(t.tick(0.0), Tick::Completed(_)));
    }

    #[test]
    fn negative_duration_clamps_to_zero() {
        let mut t = DockTransition::new(-10.0);
        assert_eq!(t.duration_ms(), 0.0);
        t.set_duration_ms(-1.0);
        assert_eq!(t.duration_ms(), 0.0);
    }

    // Duration changes mid-flight only affect the next session.
    #[test]
    fn duration_is_captured_at_start() {
        let mut t = DockTransition::new(100.0);
        t.start(pose(0.0, 0.0, 0.0), 90.0, Point::ZERO);
        t.set_duration_ms(10.0);
        assert!(matches!(t.tick(50.0), Tick::InFlight(_)));
        assert!(matches!(t.tick(50.0), Tick::Completed(_)));
    }

    // Negative dt does not rewind the session.
    #[test]
    fn negative_dt_counts_as_zero() {
        let mut t = DockTransition::new(100.0);
        t.start(pose(0.0, 0.0, 0.0), 90.0, Point::ZERO);
        let a = t.tick(50.0);
        let b = t.tick(-25.0);
        assert_eq!(a, b);
    }
}
