//! Easing functions for animations

/// Ease-in-out cubic function
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Ease-out cubic function
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Ease-in cubic function
#[inline]
pub fn ease_in_cubic(t: f32) -> f32 {
    t * t * t
}

/// Quadratic deceleration, used for slides that settle into place
#[inline]
pub fn decelerate(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Linear interpolation (no easing)
#[inline]
pub fn linear(t: f32) -> f32 {
    t
}

/// Easing curve selectable per animator
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    #[default]
    EaseInOut,
    EaseOutCubic,
    EaseInCubic,
    Decelerate,
}

impl Easing {
    /// Map linear progress to eased progress
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => linear(t),
            Easing::EaseInOut => ease_in_out(t),
            Easing::EaseOutCubic => ease_out_cubic(t),
            Easing::EaseInCubic => ease_in_cubic(t),
            Easing::Decelerate => decelerate(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_in_out() {
        assert!((ease_in_out(0.0) - 0.0).abs() < 0.001);
        assert!((ease_in_out(1.0) - 1.0).abs() < 0.001);
        assert!((ease_in_out(0.5) - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_decelerate_is_ahead_of_linear() {
        assert!(decelerate(0.5) > linear(0.5));
        assert!((decelerate(1.0) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_easing_clamps_input() {
        assert!((Easing::Linear.apply(1.5) - 1.0).abs() < 0.001);
        assert!((Easing::EaseOutCubic.apply(-0.5) - 0.0).abs() < 0.001);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const ALL: [Easing; 5] = [
        Easing::Linear,
        Easing::EaseInOut,
        Easing::EaseOutCubic,
        Easing::EaseInCubic,
        Easing::Decelerate,
    ];

    proptest! {
        /// Every curve maps [0,1] into [0,1]
        #[test]
        fn easing_bounded_output(t in 0.0f32..=1.0) {
            for easing in ALL {
                let result = easing.apply(t);
                prop_assert!((0.0..=1.0).contains(&result), "{:?}({}) = {}", easing, t, result);
            }
        }

        /// Every curve is monotonically increasing
        #[test]
        fn easing_monotonic(t1 in 0.0f32..=1.0, t2 in 0.0f32..=1.0) {
            let (lo, hi) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
            for easing in ALL {
                prop_assert!(
                    easing.apply(lo) <= easing.apply(hi) + 0.001,
                    "{:?} not monotonic: f({}) > f({})", easing, lo, hi
                );
            }
        }
    }
}
