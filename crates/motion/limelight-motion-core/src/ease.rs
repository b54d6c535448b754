#![allow(dead_code)]
//! Easing curves and interpolation helpers:
//! - polynomial ease-outs (quad through quint)
//! - cubic-bezier timing (x-inversion via binary search)
//! - linear

use serde::{Deserialize, Serialize};

/// Linear interpolation of scalars.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Timing curve applied to a tween's normalized progress.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum Ease {
    Linear,
    QuadOut,
    CubicOut,
    QuartOut,
    QuintOut,
    /// Cubic-bezier control points (x1, y1, x2, y2), as CSS timing functions.
    Bezier { ctrl: [f32; 4] },
}

impl Default for Ease {
    fn default() -> Self {
        Ease::QuartOut
    }
}

impl Ease {
    /// Evaluate the curve at normalized time t. Input is clamped to [0,1];
    /// every curve maps 0 -> 0 and 1 -> 1.
    pub fn eval(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::QuadOut => ease_out_pow(t, 2),
            Ease::CubicOut => ease_out_pow(t, 3),
            Ease::QuartOut => ease_out_pow(t, 4),
            Ease::QuintOut => ease_out_pow(t, 5),
            Ease::Bezier { ctrl } => bezier_ease_t(t, ctrl[0], ctrl[1], ctrl[2], ctrl[3]),
        }
    }
}

#[inline]
fn ease_out_pow(t: f32, n: i32) -> f32 {
    1.0 - (1.0 - t).powi(n)
}

/// Cubic Bezier basis function
#[inline]
fn cubic_bezier(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Given control points (x1, y1, x2, y2) and an input t in [0,1],
/// compute the eased y by inverting the x bezier via binary search.
#[inline]
fn bezier_ease_t(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    // Fast path: Bezier(0,0,1,1) is exactly linear -> eased t == t
    if x1 == 0.0 && y1 == 0.0 && x2 == 1.0 && y2 == 1.0 {
        return t;
    }
    // Monotonic X in [0,1] assumed for x1/x2 in [0,1]
    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    let mut mid = t;
    for _ in 0..24 {
        let x = cubic_bezier(0.0, x1, x2, 1.0, mid);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t {
            lo = mid;
        } else {
            hi = mid;
        }
        mid = 0.5 * (lo + hi);
    }
    cubic_bezier(0.0, y1, y2, 1.0, mid)
}
