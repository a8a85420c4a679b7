#![no_std]

pub mod breathing;
pub mod color;
pub mod display;
pub mod driver;
pub mod error;
pub mod glyph;
pub mod segment;

pub use breathing::{Breathing, BreathingConfig};
pub use color::{Gamma, Hsv, Palette, Rgb};
pub use display::NumberDisplay;
pub use driver::{ChipAddress, Driver, DriverConfig, I2cRegisterBus, LedState};
pub use error::{ColorError, Error, PaletteError, Result};
pub use segment::{Segment, SegmentController, SegmentControllerConfig};
pub use embassy_time::{Duration, Instant};

/// Register-level bus transport
///
/// Implement this trait to drive the chip over something other than an
/// `embedded-hal` I2C bus. The driver is generic over this trait.
pub trait RegisterBus {
    /// Transfer error
    type Error;

    /// Write a single register
    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error>;

    /// Write consecutive registers starting at `start`
    fn write_block(&mut self, start: u8, values: &[u8]) -> core::result::Result<(), Self::Error>;
}
