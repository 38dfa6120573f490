//=========================================================================
// Tweening
//=========================================================================
//
// Time-driven interpolation of a single scalar.
//
// Flow:
//   Tween::new(from, to, duration) → advance(dt) per tick → value()
//
// A zero-length tween is finished from the start and reports its end
// value immediately.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Module Declarations =================================================

mod easing;

//=== Public API ==========================================================

pub use easing::Easing;

//=== Tween ===============================================================

/// Interpolates `from → to` over a fixed duration with an easing curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl Tween {
    /// Creates a linear tween.
    pub fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing: Easing::Linear,
        }
    }

    /// Normalized 0→1 tween, the common driver for transitions.
    pub fn unit(duration: Duration) -> Self {
        Self::new(0.0, 1.0, duration)
    }

    /// Sets the easing curve.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    //--- Playback ---------------------------------------------------------

    /// Advances by `dt` and returns the new value.
    pub fn advance(&mut self, dt: Duration) -> f32 {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        self.value()
    }

    /// Jumps to the end.
    pub fn finish(&mut self) {
        self.elapsed = self.duration;
    }

    /// Rewinds to the start.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    //--- Queries ----------------------------------------------------------

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Eased value between `from` and `to`.
    pub fn value(&self) -> f32 {
        self.easing.lerp(self.from, self.to, self.progress())
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn advances_linearly() {
        let mut tween = Tween::new(0.0, 100.0, ms(1000));
        assert_eq!(tween.value(), 0.0);

        assert!((tween.advance(ms(250)) - 25.0).abs() < 1e-3);
        assert!((tween.advance(ms(250)) - 50.0).abs() < 1e-3);
        assert!(!tween.is_finished());
    }

    #[test]
    fn elapsed_saturates_at_duration() {
        let mut tween = Tween::unit(ms(100));
        tween.advance(ms(500));

        assert!(tween.is_finished());
        assert_eq!(tween.progress(), 1.0);
        assert_eq!(tween.value(), 1.0);
    }

    #[test]
    fn huge_steps_saturate_instead_of_overflowing() {
        let mut tween = Tween::unit(Duration::MAX);
        tween.advance(ms(16));
        assert!(!tween.is_finished());

        tween.advance(Duration::MAX);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 1.0);
    }

    #[test]
    fn zero_duration_is_finished_immediately() {
        let tween = Tween::new(3.0, 7.0, Duration::ZERO);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 7.0);
    }

    #[test]
    fn finish_and_reset() {
        let mut tween = Tween::new(1.0, 0.0, ms(300));
        tween.finish();
        assert_eq!(tween.value(), 0.0);

        tween.reset();
        assert_eq!(tween.value(), 1.0);
        assert!(!tween.is_finished());
    }

    #[test]
    fn easing_shapes_value() {
        let mut tween = Tween::unit(ms(100)).with_easing(Easing::QuadIn);
        let v = tween.advance(ms(50));
        assert!((v - 0.25).abs() < 1e-3);
        assert_eq!(tween.easing(), Easing::QuadIn);
    }
}
