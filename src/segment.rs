//! RGB segments of the numeral
//!
//! ```text
//!  |--A--|
//!  F     B
//!  |--G--|
//!  E     C
//!  |--D--| DP
//! ```
//!
//! Every segment is lit by three driver channels (red, green, blue). The
//! controller keeps one HSV color per segment and converts all of them to
//! gamma-corrected PWM levels on [`SegmentController::update`].

use enumset::{EnumSet, EnumSetType, enum_set};

use crate::RegisterBus;
use crate::color::{Gamma, Hsv, Rgb, hsv_to_pwm};
use crate::driver::{Driver, DriverConfig};
use crate::error::{Error, Result};

/// Number of segments, decimal point included
pub const SEGMENT_COUNT: usize = 8;

/// Segment of the numeral
#[derive(Debug, EnumSetType)]
pub enum Segment {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    /// Decimal point
    Dp,
}

/// Segments that make up glyphs (everything but the decimal point)
pub const GLYPH_SEGMENTS: EnumSet<Segment> = enum_set!(
    Segment::A | Segment::B | Segment::C | Segment::D | Segment::E | Segment::F | Segment::G
);

impl Segment {
    /// All segments in update order
    pub const ALL: [Self; SEGMENT_COUNT] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::Dp,
    ];

    /// Driver channels wired to this segment, in red, green, blue order
    pub const fn channels(self) -> [u8; 3] {
        match self {
            Self::A => [17, 16, 15],
            Self::B => [22, 21, 20],
            Self::C => [26, 27, 28],
            Self::D => [1, 2, 3],
            Self::E => [4, 5, 6],
            Self::F => [9, 7, 8],
            Self::G => [14, 13, 12],
            Self::Dp => [23, 24, 25],
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Segment controller configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentControllerConfig {
    /// Gamma exponents applied before PWM scaling
    pub gamma: Gamma,
    /// Passed to the driver; `driver.buffered` also batches segment updates
    pub driver: DriverConfig,
}

impl SegmentControllerConfig {
    pub const DEFAULT: Self = Self {
        gamma: Gamma::DEFAULT,
        driver: DriverConfig::DEFAULT,
    };
}

impl Default for SegmentControllerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Controls the color of the eight RGB segments
#[derive(Debug)]
pub struct SegmentController<B: RegisterBus> {
    driver: Driver<B>,
    gamma: Gamma,
    colors: [Hsv; SEGMENT_COUNT],
}

impl<B: RegisterBus> SegmentController<B> {
    /// Create the driver and the controller
    ///
    /// Gamma exponents are checked before the bus is touched.
    pub fn new(bus: B, config: SegmentControllerConfig) -> Result<Self, B::Error> {
        check_gamma(&config.gamma)?;
        let driver = Driver::new(bus, config.driver)?;
        Self::with_driver(driver, config.gamma)
    }

    /// Create a controller on top of an existing driver
    pub fn with_driver(driver: Driver<B>, gamma: Gamma) -> Result<Self, B::Error> {
        check_gamma(&gamma)?;
        Ok(Self {
            driver,
            gamma,
            colors: [Hsv::BLACK; SEGMENT_COUNT],
        })
    }

    /// Set the color of a segment
    ///
    /// Unless the driver is buffered, all segments are written right away.
    pub fn set_color(&mut self, segment: Segment, color: Hsv) -> Result<(), B::Error> {
        self.stage_color(segment, color)?;
        if self.driver.is_buffered() {
            return Ok(());
        }
        self.update()
    }

    /// Store the color of a segment without touching the bus
    pub fn stage_color(&mut self, segment: Segment, color: Hsv) -> Result<(), B::Error> {
        self.colors[segment.index()] = color.validate()?;
        Ok(())
    }

    /// Write every segment to the driver
    ///
    /// A buffered driver receives all 24 channels in a single block write
    /// followed by one latch. Otherwise every channel is written and latched
    /// on its own.
    pub fn update(&mut self) -> Result<(), B::Error> {
        if self.driver.is_buffered() {
            return self.update_batched();
        }
        for segment in Segment::ALL {
            let pwm = self.pwm(segment);
            for (channel, level) in segment.channels().into_iter().zip([pwm.r, pwm.g, pwm.b]) {
                self.driver.set_channel(channel, f32::from(level))?;
            }
        }
        Ok(())
    }

    /// Write every segment in one block write and one latch, whatever the
    /// driver's buffering mode
    pub fn update_batched(&mut self) -> Result<(), B::Error> {
        for segment in Segment::ALL {
            let pwm = self.pwm(segment);
            for (channel, level) in segment.channels().into_iter().zip([pwm.r, pwm.g, pwm.b]) {
                self.driver.stage_channel(channel, f32::from(level))?;
            }
        }
        self.driver.update()
    }

    /// Current color of a segment
    pub const fn color(&self, segment: Segment) -> Hsv {
        self.colors[segment.index()]
    }

    /// Gamma-corrected PWM levels for the current color of a segment
    pub fn pwm(&self, segment: Segment) -> Rgb {
        hsv_to_pwm(self.colors[segment.index()], &self.gamma)
    }

    pub const fn gamma(&self) -> &Gamma {
        &self.gamma
    }

    pub const fn is_buffered(&self) -> bool {
        self.driver.is_buffered()
    }

    pub const fn driver(&self) -> &Driver<B> {
        &self.driver
    }

    /// Direct access to the driver, e.g. for the global enable
    pub fn driver_mut(&mut self) -> &mut Driver<B> {
        &mut self.driver
    }

    /// Give the driver back
    pub fn release(self) -> Driver<B> {
        self.driver
    }
}

fn check_gamma<E>(gamma: &Gamma) -> Result<(), E> {
    match gamma.invalid_exponent() {
        Some(exponent) => Err(Error::InvalidGamma(exponent)),
        None => Ok(()),
    }
}
