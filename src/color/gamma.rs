//! Gamma correction
//!
//! LEDs respond linearly to PWM while the eye does not. Correction is
//! applied to the 0.0-1.0 channel value before scaling to 8 bits, which
//! keeps more distinct levels near black than correcting the PWM byte.

use super::{Hsv, Rgb, hsv_to_rgb};

/// Per-channel gamma exponents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gamma {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl Gamma {
    /// Red needs slightly more correction than green and blue
    pub const DEFAULT: Self = Self {
        red: 2.5,
        green: 2.4,
        blue: 2.4,
    };

    /// Use the same exponent for every channel
    pub const fn uniform(exponent: f32) -> Self {
        Self {
            red: exponent,
            green: exponent,
            blue: exponent,
        }
    }

    /// Exponents in red, green, blue order
    pub const fn exponents(&self) -> [f32; 3] {
        [self.red, self.green, self.blue]
    }

    /// First exponent that is zero, negative or not finite
    pub fn invalid_exponent(&self) -> Option<f32> {
        self.exponents()
            .into_iter()
            .find(|exponent| !exponent.is_finite() || *exponent <= 0.0)
    }

    /// Apply the power curve to linear RGB
    pub fn correct(&self, rgb: [f32; 3]) -> [f32; 3] {
        let [red, green, blue] = self.exponents();
        [
            libm::powf(rgb[0], red),
            libm::powf(rgb[1], green),
            libm::powf(rgb[2], blue),
        ]
    }
}

impl Default for Gamma {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Scale linear RGB to PWM levels, rounding half up
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rgb_to_pwm(rgb: [f32; 3]) -> Rgb {
    let level = |value: f32| libm::floorf(value * 255.0 + 0.5).clamp(0.0, 255.0) as u8;
    Rgb {
        r: level(rgb[0]),
        g: level(rgb[1]),
        b: level(rgb[2]),
    }
}

/// Convert an HSV color to gamma-corrected PWM levels
pub fn hsv_to_pwm(hsv: Hsv, gamma: &Gamma) -> Rgb {
    rgb_to_pwm(gamma.correct(hsv_to_rgb(hsv)))
}
