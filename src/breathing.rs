//! Breathing animation
//!
//! Computes the color for a slow fade in, hold, fade out, hold cycle. The
//! caller owns the timing loop and feeds [`Breathing::color`] into
//! [`NumberDisplay::set_color`](crate::NumberDisplay::set_color).

use embassy_time::{Duration, Instant};

use crate::color::Hsv;

/// Timing of one breathing cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreathingConfig {
    /// Duration of the fade in, and of the fade out
    pub ramp: Duration,
    /// Hold at full value
    pub top_pause: Duration,
    /// Hold at zero value
    pub bottom_pause: Duration,
}

impl BreathingConfig {
    pub const DEFAULT: Self = Self {
        ramp: Duration::from_millis(1000),
        top_pause: Duration::from_millis(200),
        bottom_pause: Duration::from_millis(400),
    };

    /// Length of a full cycle
    pub fn period(&self) -> Duration {
        self.ramp + self.top_pause + self.ramp + self.bottom_pause
    }
}

impl Default for BreathingConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Breathing animation state
#[derive(Debug, Clone)]
pub struct Breathing {
    base: Hsv,
    config: BreathingConfig,
    start_time: Instant,
}

impl Breathing {
    /// Start breathing with the hue and saturation of `base`
    pub const fn new(base: Hsv, config: BreathingConfig, now: Instant) -> Self {
        Self {
            base,
            config,
            start_time: now,
        }
    }

    /// Start a new cycle with another hue and saturation
    pub fn restart(&mut self, hue: f32, sat: f32, now: Instant) {
        self.base = Hsv::new(hue, sat, 0.0);
        self.start_time = now;
    }

    /// Value (brightness) at `now`, 0.0-1.0
    #[allow(clippy::cast_precision_loss)]
    pub fn value_at(&self, now: Instant) -> f32 {
        let period = self.config.period().as_micros();
        if period == 0 {
            return 0.0;
        }
        let ramp = self.config.ramp.as_micros();
        let top = self.config.top_pause.as_micros();
        let t = now.saturating_duration_since(self.start_time).as_micros() % period;

        if t < ramp {
            t as f32 / ramp as f32
        } else if t < ramp + top {
            1.0
        } else if t < 2 * ramp + top {
            1.0 - (t - ramp - top) as f32 / ramp as f32
        } else {
            0.0
        }
    }

    /// Color at `now`
    pub fn color(&self, now: Instant) -> Hsv {
        self.base.with_val(self.value_at(now))
    }

    /// Check if at least one full cycle has passed since the last start
    pub fn is_cycle_complete(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start_time) >= self.config.period()
    }

    pub const fn base(&self) -> Hsv {
        self.base
    }
}
