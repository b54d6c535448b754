#![allow(dead_code)]
//! One-shot timed interpolation.
//!
//! A tween holds its `from` value while its start delay runs down, then
//! blends toward `to` over `duration` under an easing curve, clamps at the
//! end value, and reports start and completion exactly once each. There is
//! no reverse, repeat, or rewind: cancellation is the owner dropping the
//! tween, which suppresses future steps without reverting anything.

use crate::ease::{lerp, Ease};
use crate::value::TransformState;

/// Values a tween can blend. Componentwise linear mix at eased t.
pub trait Blend: Copy {
    fn mix(a: Self, b: Self, t: f32) -> Self;
}

impl Blend for f32 {
    #[inline]
    fn mix(a: Self, b: Self, t: f32) -> Self {
        lerp(a, b, t)
    }
}

impl Blend for TransformState {
    #[inline]
    fn mix(a: Self, b: Self, t: f32) -> Self {
        TransformState {
            translate: [
                lerp(a.translate[0], b.translate[0], t),
                lerp(a.translate[1], b.translate[1], t),
            ],
            scale: lerp(a.scale, b.scale, t),
            opacity: lerp(a.opacity, b.opacity, t),
        }
    }
}

/// Result of advancing a tween by one frame.
#[derive(Copy, Clone, Debug)]
pub struct TweenStep<T> {
    pub value: T,
    /// True on the single step where the delay elapsed and motion began.
    pub started: bool,
    /// True on the single step where the end value was reached.
    pub finished: bool,
}

#[derive(Clone, Debug)]
pub struct Tween<T: Blend> {
    from: T,
    to: T,
    delay: f32,
    duration: f32,
    ease: Ease,
    elapsed: f32,
    started: bool,
    done: bool,
}

impl<T: Blend> Tween<T> {
    pub fn new(from: T, to: T, delay: f32, duration: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            delay: delay.max(0.0),
            duration: duration.max(0.0),
            ease,
            elapsed: 0.0,
            started: false,
            done: false,
        }
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advance by dt seconds and return the current value plus edge flags.
    /// A zero-duration tween completes on the first step past its delay.
    pub fn advance(&mut self, dt: f32) -> TweenStep<T> {
        self.elapsed += dt.max(0.0);

        if self.elapsed < self.delay {
            return TweenStep {
                value: self.from,
                started: false,
                finished: false,
            };
        }

        let just_started = !self.started;
        self.started = true;

        let t = if self.duration > 0.0 {
            ((self.elapsed - self.delay) / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        };

        let just_finished = t >= 1.0 && !self.done;
        if t >= 1.0 {
            self.done = true;
        }

        TweenStep {
            value: T::mix(self.from, self.to, self.ease.eval(t)),
            started: just_started,
            finished: just_finished,
        }
    }
}
