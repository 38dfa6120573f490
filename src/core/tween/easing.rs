//=========================================================================
// Easing Curves
//=========================================================================
//
// Pure easing functions mapping normalized time to normalized progress.
//
// All curves satisfy f(0) = 0 and f(1) = 1. Back and Elastic overshoot
// in between.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::f32::consts::PI;

//=== Easing ==============================================================

/// Acceleration curve applied to a tween's linear progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant velocity.
    #[default]
    Linear,

    QuadIn,
    QuadOut,
    QuadInOut,

    CubicIn,
    CubicOut,
    CubicInOut,

    QuartIn,
    QuartOut,
    QuartInOut,

    SineIn,
    SineOut,
    SineInOut,

    ExpoIn,
    ExpoOut,
    ExpoInOut,

    /// Pulls back before moving forward.
    BackIn,
    /// Overshoots the target, then settles.
    BackOut,
    BackInOut,

    /// Bounces against the target.
    BounceOut,

    /// Spring-like oscillation around the target.
    ElasticOut,
}

impl Easing {
    /// Applies the curve to `t`, clamped to `[0, 1]`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,

            Self::QuadIn => t * t,
            Self::QuadOut => 1.0 - (1.0 - t).powi(2),
            Self::QuadInOut => in_out(t, 2),

            Self::CubicIn => t * t * t,
            Self::CubicOut => 1.0 - (1.0 - t).powi(3),
            Self::CubicInOut => in_out(t, 3),

            Self::QuartIn => t.powi(4),
            Self::QuartOut => 1.0 - (1.0 - t).powi(4),
            Self::QuartInOut => in_out(t, 4),

            Self::SineIn => 1.0 - (t * PI / 2.0).cos(),
            Self::SineOut => (t * PI / 2.0).sin(),
            Self::SineInOut => -((PI * t).cos() - 1.0) / 2.0,

            Self::ExpoIn if t == 0.0 => 0.0,
            Self::ExpoIn => 2.0_f32.powf(10.0 * t - 10.0),
            Self::ExpoOut if t == 1.0 => 1.0,
            Self::ExpoOut => 1.0 - 2.0_f32.powf(-10.0 * t),
            Self::ExpoInOut => expo_in_out(t),

            Self::BackIn => {
                const C1: f32 = 1.70158;
                (C1 + 1.0) * t * t * t - C1 * t * t
            }
            Self::BackOut => {
                const C1: f32 = 1.70158;
                let u = t - 1.0;
                1.0 + (C1 + 1.0) * u.powi(3) + C1 * u.powi(2)
            }
            Self::BackInOut => back_in_out(t),

            Self::BounceOut => bounce_out(t),

            Self::ElasticOut => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                const C4: f32 = (2.0 * PI) / 3.0;
                2.0_f32.powf(-10.0 * t) * ((t * 10.0 - 0.75) * C4).sin() + 1.0
            }
        }
    }

    /// Interpolates between `from` and `to` at eased time `t`.
    pub fn lerp(self, from: f32, to: f32, t: f32) -> f32 {
        from + (to - from) * self.apply(t)
    }
}

//--- Curve Helpers -------------------------------------------------------

/// Symmetric polynomial in-out of the given degree.
fn in_out(t: f32, degree: i32) -> f32 {
    if t < 0.5 {
        2.0_f32.powi(degree - 1) * t.powi(degree)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(degree) / 2.0
    }
}

fn expo_in_out(t: f32) -> f32 {
    if t == 0.0 || t == 1.0 {
        t
    } else if t < 0.5 {
        2.0_f32.powf(20.0 * t - 10.0) / 2.0
    } else {
        (2.0 - 2.0_f32.powf(-20.0 * t + 10.0)) / 2.0
    }
}

fn back_in_out(t: f32) -> f32 {
    const C2: f32 = 1.70158 * 1.525;
    if t < 0.5 {
        (2.0 * t).powi(2) * ((C2 + 1.0) * 2.0 * t - C2) / 2.0
    } else {
        ((2.0 * t - 2.0).powi(2) * ((C2 + 1.0) * (t * 2.0 - 2.0) + C2) + 2.0) / 2.0
    }
}

fn bounce_out(t: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;

    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
