//! Timed interpolation used by the reveal and gauge animations.
//!
//! A [`Tween`] is either resting at a value or animating between two values
//! over a fixed duration. Callers pass the current time explicitly, so the
//! state machine is driven by whatever frame source the view layer has
//! (animation frames, a timer loop, or a test harness).
//!
//! Retargeting an in-flight tween starts the new animation from the value
//! sampled at the moment of the call, which keeps successive animations
//! continuous.

/// Easing curve applied to the normalised time of an animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// CSS `ease-out`, i.e. `cubic-bezier(0, 0, 0.58, 1)`.
    EaseOut,
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    /// Curve used when the value line draws in after a data change.
    pub const REVEAL: Easing = Easing::CubicBezier(0.25, 0.46, 0.45, 0.94);

    /// Map normalised time `t` in `[0, 1]` to eased progress.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

fn bezier_axis(a1: f64, a2: f64, s: f64) -> f64 {
    // Endpoints are fixed at 0 and 1.
    let inv = 1.0 - s;
    3.0 * inv * inv * s * a1 + 3.0 * inv * s * s * a2 + s * s * s
}

fn bezier_axis_slope(a1: f64, a2: f64, s: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * a1 + 6.0 * inv * s * (a2 - a1) + 3.0 * s * s * (1.0 - a2)
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    // Newton first; fall back to bisection when the slope flattens out.
    let mut s = x;
    for _ in 0..8 {
        let err = bezier_axis(x1, x2, s) - x;
        if err.abs() < 1e-7 {
            return bezier_axis(y1, y2, s);
        }
        let slope = bezier_axis_slope(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= err / slope;
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    s = x;
    for _ in 0..50 {
        let value = bezier_axis(x1, x2, s);
        if (value - x).abs() < 1e-7 {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    bezier_axis(y1, y2, s)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tween {
    Idle {
        value: f64,
    },
    Animating {
        from: f64,
        to: f64,
        start_ms: f64,
        duration_ms: f64,
        easing: Easing,
    },
}

impl Tween {
    pub fn idle(value: f64) -> Self {
        Tween::Idle { value }
    }

    pub fn is_animating(&self) -> bool {
        matches!(self, Tween::Animating { .. })
    }

    pub fn value_at(&self, now_ms: f64) -> f64 {
        match *self {
            Tween::Idle { value } => value,
            Tween::Animating {
                from,
                to,
                start_ms,
                duration_ms,
                easing,
            } => {
                if duration_ms <= 0.0 || now_ms >= start_ms + duration_ms {
                    return to;
                }
                let t = ((now_ms - start_ms) / duration_ms).max(0.0);
                from + (to - from) * easing.apply(t)
            }
        }
    }

    /// Supersede whatever is running with an animation towards `to`,
    /// starting from the value sampled at `now_ms`.
    pub fn retarget(&mut self, to: f64, now_ms: f64, duration_ms: f64, easing: Easing) {
        let from = self.value_at(now_ms);
        *self = if duration_ms <= 0.0 {
            Tween::Idle { value: to }
        } else {
            Tween::Animating {
                from,
                to,
                start_ms: now_ms,
                duration_ms,
                easing,
            }
        };
    }

    /// Cancel any animation and rest at `value`.
    pub fn jump(&mut self, value: f64) {
        *self = Tween::Idle { value };
    }

    /// Sample at `now_ms`, settling into `Idle` once the animation finishes.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        let value = self.value_at(now_ms);
        if let Tween::Animating {
            start_ms,
            duration_ms,
            to,
            ..
        } = *self
        {
            if now_ms >= start_ms + duration_ms {
                *self = Tween::Idle { value: to };
            }
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints_are_fixed() {
        for easing in [Easing::Linear, Easing::EaseOut, Easing::REVEAL] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn ease_out_runs_ahead_of_linear() {
        for step in 1..10 {
            let t = step as f64 / 10.0;
            assert!(Easing::EaseOut.apply(t) > t, "t={t}");
            assert!(Easing::REVEAL.apply(t) > t, "t={t}");
        }
    }

    #[test]
    fn easing_is_monotonic() {
        let mut last = 0.0;
        for step in 0..=100 {
            let value = Easing::EaseOut.apply(step as f64 / 100.0);
            assert!(value >= last - 1e-9);
            last = value;
        }
    }

    #[test]
    fn tween_settles_after_duration() {
        let mut tween = Tween::idle(0.0);
        tween.retarget(10.0, 100.0, 500.0, Easing::Linear);
        assert!(tween.is_animating());
        assert!((tween.tick(350.0) - 5.0).abs() < 1e-9);
        assert_eq!(tween.tick(600.0), 10.0);
        assert_eq!(tween, Tween::Idle { value: 10.0 });
    }

    #[test]
    fn retarget_continues_from_current_value() {
        let mut tween = Tween::idle(0.0);
        tween.retarget(1.0, 0.0, 1000.0, Easing::Linear);
        let midway = tween.value_at(400.0);
        tween.retarget(0.2, 400.0, 1000.0, Easing::Linear);
        assert!((tween.value_at(400.0) - midway).abs() < 1e-9);
        assert_eq!(tween.value_at(1400.0), 0.2);
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let mut tween = Tween::idle(3.0);
        tween.retarget(7.0, 50.0, 0.0, Easing::EaseOut);
        assert_eq!(tween, Tween::Idle { value: 7.0 });
    }
}
