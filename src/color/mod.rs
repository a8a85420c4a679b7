mod gamma;
mod hsv;
mod palette;

use smart_leds::RGB8;

pub use gamma::{Gamma, hsv_to_pwm, rgb_to_pwm};
pub use hsv::{Hsv, hsv_to_rgb};
pub use palette::{NAME_CAPACITY, PALETTE_CAPACITY, Palette};

/// 8-bit PWM levels of one segment, in red, green, blue order
pub type Rgb = RGB8;
