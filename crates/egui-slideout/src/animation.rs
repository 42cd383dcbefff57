use std::time::{Duration, Instant};

/// Duration of an open or close slide.
pub const SLIDE_DURATION: Duration = Duration::from_millis(200);

/// Ease-in-out cubic.
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// A time-based interpolation of the content offset toward a target.
#[derive(Debug, Clone, Copy)]
pub struct Slide {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl Slide {
    pub fn new(from: f32, to: f32, now: Instant) -> Self {
        Self {
            from,
            to,
            started: now,
            duration: SLIDE_DURATION,
        }
    }

    pub fn to(&self) -> f32 {
        self.to
    }

    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started).as_secs_f32();
        (elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, now: Instant) -> f32 {
        self.from + (self.to - self.from) * ease_in_out(self.progress(now))
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Redirects the slide toward a new target, starting from the value it
    /// has reached so far. Keeps an interrupted transition smooth instead
    /// of jumping.
    pub fn retarget(&mut self, to: f32, now: Instant) {
        self.from = self.value_at(now);
        self.to = to;
        self.started = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints_fixed() {
        assert!((ease_in_out(0.0)).abs() < 0.001);
        assert!((ease_in_out(1.0) - 1.0).abs() < 0.001);
        assert!((ease_in_out(0.5) - 0.5).abs() < 0.001);
    }

    #[test]
    fn slide_reaches_target() {
        let t0 = Instant::now();
        let slide = Slide::new(0.0, 260.0, t0);
        assert_eq!(slide.value_at(t0), 0.0);
        assert!(!slide.is_finished(t0));
        let end = t0 + SLIDE_DURATION;
        assert_eq!(slide.value_at(end), 260.0);
        assert!(slide.is_finished(end));
    }

    #[test]
    fn slide_value_is_monotonic_between_endpoints() {
        let t0 = Instant::now();
        let slide = Slide::new(0.0, 100.0, t0);
        let mut last = 0.0;
        for ms in (0..=200).step_by(20) {
            let value = slide.value_at(t0 + Duration::from_millis(ms));
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn retarget_starts_from_current_value() {
        let t0 = Instant::now();
        let mut slide = Slide::new(0.0, 260.0, t0);
        let mid = t0 + Duration::from_millis(100);
        let reached = slide.value_at(mid);
        slide.retarget(0.0, mid);
        assert_eq!(slide.value_at(mid), reached);
        assert_eq!(slide.to(), 0.0);
        assert_eq!(slide.value_at(mid + SLIDE_DURATION), 0.0);
    }

    #[test]
    fn time_before_start_clamps_to_from() {
        let t0 = Instant::now() + Duration::from_secs(1);
        let slide = Slide::new(10.0, 20.0, t0);
        assert_eq!(slide.value_at(Instant::now()), 10.0);
    }
}
