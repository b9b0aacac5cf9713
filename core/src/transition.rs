//! Timed morph between two catalog functions.
//!
//! While a transition runs, both functions are evaluated at the same domain
//! coordinate and their outputs are blended by an eased progress value. The
//! blend works on raw positions, never on shape parameters.

use glam::Vec3;
use log::debug;

use crate::functions::{FunctionId, ShapeParameters, lookup};

/// Cubic Hermite easing `x²(3 − 2x)` of `x` normalized into `[edge0, edge1]`.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let x = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    x * x * (3.0 - 2.0 * x)
}

/// Which function is on display and how far a transition has come.
///
/// This is `Copy` on purpose: a grid sweep works on a snapshot taken after
/// the frame's [`advance`](TransitionState::advance).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionState {
    current: FunctionId,
    previous: FunctionId,
    active: bool,
    elapsed: f32,
    duration: f32,
    progress: f32,
}

impl Default for TransitionState {
    fn default() -> Self {
        Self::new(FunctionId::default())
    }
}

impl TransitionState {
    /// Idle state showing `function`.
    pub fn new(function: FunctionId) -> Self {
        Self {
            current: function,
            previous: function,
            active: false,
            elapsed: 0.0,
            duration: 0.0,
            progress: 1.0,
        }
    }

    pub fn current(&self) -> FunctionId {
        self.current
    }

    /// The function being morphed away from, only while transitioning.
    pub fn previous(&self) -> Option<FunctionId> {
        self.active.then_some(self.previous)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Eased progress in `[0, 1]`. Always 1 when idle.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Start morphing from the displayed function to `to`.
    ///
    /// Legal mid-transition: the new transition starts from whatever is
    /// current right now. A `duration <= 0` completes on the next advance.
    pub fn begin(&mut self, to: FunctionId, duration: f32) {
        debug!(
            "transition {} -> {} over {:.3}s",
            self.current, to, duration
        );
        self.previous = self.current;
        self.current = to;
        self.elapsed = 0.0;
        self.duration = duration;
        self.progress = 0.0;
        self.active = true;
    }

    /// Move time forward by `dt` seconds. No effect when idle.
    pub fn advance(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.elapsed += dt;
        let linear = if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        };
        self.progress = smoothstep(0.0, 1.0, linear);
        if self.progress >= 1.0 {
            debug!("transition to {} complete", self.current);
            self.active = false;
            self.progress = 1.0;
            self.elapsed = self.duration.max(0.0);
        }
    }

    /// Position of the displayed surface at `(u, v, t)`.
    pub fn evaluate(&self, u: f32, v: f32, t: f32, params: &ShapeParameters) -> Vec3 {
        let to = lookup(self.current)(u, v, t, params);
        if !self.active {
            return to;
        }
        let from = lookup(self.previous)(u, v, t, params);
        from.lerp(to, self.progress)
    }

    /// Index of the specialised `(from, to)` blend kernel a GPU backend
    /// would dispatch. Idle maps to the `(current, current)` kernel.
    pub fn kernel_index(&self) -> usize {
        let from = if self.active {
            self.previous
        } else {
            self.current
        };
        FunctionId::COUNT * from.index() + self.current.index()
    }
}

#[cfg(test)]
mod tests {
    use super::{TransitionState, smoothstep};
    use crate::functions::{FunctionId, ShapeParameters};

    const POINTS: [(f32, f32, f32); 4] = [
        (0.0, 0.0, 0.0),
        (-0.5, 0.25, 1.3),
        (0.9, -0.9, 7.0),
        (0.1, 0.6, 42.25),
    ];

    #[test]
    fn smoothstep_endpoints_and_monotonic() {
        assert_eq!(smoothstep(0.0, 1.0, 0.0), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 1.0), 1.0);
        assert_eq!(smoothstep(0.0, 1.0, -3.0), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 4.0), 1.0);
        assert_eq!(smoothstep(0.0, 1.0, 0.5), 0.5);
        let mut last = 0.0;
        for i in 0..=1000 {
            let s = smoothstep(0.0, 1.0, i as f32 / 1000.0);
            assert!(s >= last);
            last = s;
        }
    }

    #[test]
    fn starts_idle() {
        let state = TransitionState::new(FunctionId::Ripple);
        assert!(!state.is_active());
        assert_eq!(state.current(), FunctionId::Ripple);
        assert_eq!(state.previous(), None);
        assert_eq!(state.progress(), 1.0);
    }

    #[test]
    fn advance_is_noop_when_idle() {
        let mut state = TransitionState::new(FunctionId::Sphere);
        let before = state;
        state.advance(0.5);
        assert_eq!(state, before);
    }

    #[test]
    fn fresh_transition_shows_previous_function() {
        let params = ShapeParameters::default();
        let mut state = TransitionState::new(FunctionId::SineWave);
        state.begin(FunctionId::Sphere, 1.0);
        assert!(state.is_active());
        assert_eq!(state.previous(), Some(FunctionId::SineWave));
        for (u, v, t) in POINTS {
            assert_eq!(
                state.evaluate(u, v, t, &params),
                FunctionId::SineWave.evaluate(u, v, t, &params)
            );
        }
    }

    #[test]
    fn completed_transition_shows_target_exactly() {
        let params = ShapeParameters::default();
        let mut state = TransitionState::new(FunctionId::MultiSineWave);
        state.begin(FunctionId::BandedStarTorus, 0.8);
        state.advance(0.8);
        assert!(!state.is_active());
        assert_eq!(state.previous(), None);
        for (u, v, t) in POINTS {
            assert_eq!(
                state.evaluate(u, v, t, &params),
                FunctionId::BandedStarTorus.evaluate(u, v, t, &params)
            );
        }
    }

    #[test]
    fn overshoot_completes() {
        let mut state = TransitionState::new(FunctionId::SineWave);
        state.begin(FunctionId::Ripple, 1.0);
        state.advance(0.3);
        assert!(state.is_active());
        state.advance(5.0);
        assert!(!state.is_active());
        assert_eq!(state.elapsed(), 1.0);
    }

    #[test]
    fn midway_blend_is_halfway() {
        let params = ShapeParameters::default();
        let mut state = TransitionState::new(FunctionId::SineWave);
        state.begin(FunctionId::Sphere, 2.0);
        state.advance(1.0);
        assert_eq!(state.progress(), 0.5);
        for (u, v, t) in POINTS {
            let a = FunctionId::SineWave.evaluate(u, v, t, &params);
            let b = FunctionId::Sphere.evaluate(u, v, t, &params);
            let p = state.evaluate(u, v, t, &params);
            assert!((p - (a + b) * 0.5).abs().max_element() < 1e-6);
        }
    }

    #[test]
    fn non_positive_duration_completes_on_next_advance() {
        for duration in [0.0, -1.0] {
            let mut state = TransitionState::new(FunctionId::SineWave);
            state.begin(FunctionId::Ripple, duration);
            assert!(state.is_active());
            assert_eq!(state.progress(), 0.0);
            state.advance(0.0);
            assert!(!state.is_active());
            assert_eq!(state.current(), FunctionId::Ripple);
            assert!(state.progress().is_finite());
        }
    }

    #[test]
    fn progress_is_eased() {
        let mut state = TransitionState::new(FunctionId::SineWave);
        state.begin(FunctionId::Ripple, 1.0);
        state.advance(0.25);
        assert!((state.progress() - smoothstep(0.0, 1.0, 0.25)).abs() < 1e-7);
        assert!(state.progress() < 0.25);
    }

    #[test]
    fn retarget_mid_transition() {
        let mut state = TransitionState::new(FunctionId::SineWave);
        state.begin(FunctionId::Ripple, 1.0);
        state.advance(0.5);
        state.begin(FunctionId::Sphere, 1.0);
        assert_eq!(state.previous(), Some(FunctionId::Ripple));
        assert_eq!(state.current(), FunctionId::Sphere);
        assert_eq!(state.elapsed(), 0.0);
        assert_eq!(state.progress(), 0.0);
    }

    #[test]
    fn kernel_index_pairs() {
        let mut state = TransitionState::new(FunctionId::Ripple);
        assert_eq!(state.kernel_index(), 7 * 3 + 3);
        state.begin(FunctionId::SineWave, 1.0);
        assert_eq!(state.kernel_index(), 7 * 3);
        state.advance(1.0);
        assert_eq!(state.kernel_index(), 0);
    }
}
