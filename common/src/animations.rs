//! Time-based tweens for page animations.
//!
//! The wakeup page uses two animations:
//! - **Boot fade**: background, shadow, button and WiFi glyph go from fully
//!   transparent (0) to opaque (255) over 1.5 s
//! - **Button scale**: the wake button grows to 120% while held and shrinks
//!   back on release (150 ms each way)
//!
//! # FPS Independence
//!
//! Tweens advance by elapsed milliseconds handed in by the caller, so the
//! animation speed does not depend on how often the frame loop runs.
//!
//! # Easing
//!
//! Values follow a quadratic ease-out: fast start, gentle landing.
//! ```text
//! p = elapsed / duration
//! value = from + (to - from) * (1 - (1 - p)^2)
//! ```

/// A single running animation between two integer values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tween {
    from: i32,
    to: i32,
    duration_ms: u32,
    elapsed_ms: u32,
}

impl Tween {
    /// Create a tween that starts immediately.
    ///
    /// A zero duration completes on creation.
    pub const fn new(
        from: i32,
        to: i32,
        duration_ms: u32,
    ) -> Self {
        Self { from, to, duration_ms, elapsed_ms: 0 }
    }

    /// Advance by `elapsed_ms`.
    ///
    /// Returns `true` only on the call that completes the tween.
    pub fn advance(
        &mut self,
        elapsed_ms: u32,
    ) -> bool {
        if self.is_finished() {
            return false;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms).min(self.duration_ms);
        self.is_finished()
    }

    /// Jump straight to the end value.
    #[inline]
    pub fn finish(&mut self) { self.elapsed_ms = self.duration_ms; }

    /// Whether the end value has been reached.
    #[inline]
    pub const fn is_finished(&self) -> bool { self.elapsed_ms >= self.duration_ms }

    /// Current eased value.
    pub fn value(&self) -> i32 {
        if self.is_finished() {
            return self.to;
        }
        let p = self.elapsed_ms as f32 / self.duration_ms as f32;
        let inv = 1.0 - p;
        let eased = 1.0 - inv * inv;
        self.from + ((self.to - self.from) as f32 * eased) as i32
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_starts_at_from() {
        let tween = Tween::new(0, 255, 1500);
        assert_eq!(tween.value(), 0);
        assert!(!tween.is_finished());
    }

    #[test]
    fn test_tween_reports_completion_once() {
        let mut tween = Tween::new(0, 255, 100);
        assert!(!tween.advance(60));
        assert!(tween.advance(60));
        assert!(!tween.advance(60), "completion must only be reported once");
        assert_eq!(tween.value(), 255);
    }

    #[test]
    fn test_tween_is_monotonic() {
        let mut tween = Tween::new(100, 120, 150);
        let mut last = tween.value();
        for _ in 0..15 {
            tween.advance(10);
            let v = tween.value();
            assert!(v >= last, "value went backwards: {last} -> {v}");
            last = v;
        }
        assert_eq!(last, 120);
    }

    #[test]
    fn test_tween_ease_out_front_loads_motion() {
        let mut tween = Tween::new(0, 100, 100);
        tween.advance(50);
        assert!(tween.value() > 50, "ease-out should be past halfway at half time");
    }

    #[test]
    fn test_tween_descending() {
        let mut tween = Tween::new(120, 100, 150);
        tween.advance(75);
        let mid = tween.value();
        assert!(mid < 120 && mid > 100);
        tween.advance(75);
        assert_eq!(tween.value(), 100);
    }

    #[test]
    fn test_tween_zero_duration_finishes_immediately() {
        let tween = Tween::new(0, 10, 0);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 10);
    }

    #[test]
    fn test_tween_finish_snaps() {
        let mut tween = Tween::new(0, 255, 1500);
        tween.finish();
        assert_eq!(tween.value(), 255);
    }
}
