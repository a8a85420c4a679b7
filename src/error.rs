//! Error types shared by all display layers.

use core::fmt;

use derive_more::{Display, Error as DeriveError};

use crate::color::NAME_CAPACITY;

/// A specialized `Result` where the error is this crate's [`Error`] type.
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// HSV component, used to report which part of a color was rejected
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    #[display("hue")]
    Hue,
    #[display("saturation")]
    Saturation,
    #[display("value")]
    Value,
}

/// Malformed color input
#[derive(Debug, Display, DeriveError, Clone, Copy, PartialEq)]
pub enum ColorError {
    /// A color needs exactly three components
    #[display("expected 3 color components, got {_0}")]
    Length(#[error(not(source))] usize),
    /// A component is outside `0.0..=1.0` (or not a number)
    #[display("{component} must be within 0..=1, got {value}")]
    OutOfRange { component: Component, value: f32 },
}

/// Rejected palette entry
#[derive(Debug, Display, DeriveError, Clone, Copy, PartialEq, Eq)]
pub enum PaletteError {
    /// Name longer than [`NAME_CAPACITY`] bytes
    #[display("color name is {_0} bytes long, the limit is {}", NAME_CAPACITY)]
    NameTooLong(#[error(not(source))] usize),
    /// No room for another name
    #[display("palette is full")]
    Full,
}

/// Display error
///
/// `E` is the error type of the underlying bus. Every variant except
/// [`Error::Bus`] is a validation failure raised before the bus is touched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error<E> {
    /// Channel index outside `1..=28`
    InvalidChannel(u8),
    /// Brightness outside `0.0..=255.0`
    BrightnessOutOfRange(f32),
    /// Invalid HSV color
    Color(ColorError),
    /// Gamma exponent that is zero, negative or not finite
    InvalidGamma(f32),
    /// Color name missing from the palette
    UnknownColor,
    /// Bus transfer failed, chip state is unknown
    Bus(E),
}

impl<E> From<ColorError> for Error<E> {
    fn from(err: ColorError) -> Self {
        Self::Color(err)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChannel(index) => write!(f, "{index} is not a valid LED channel"),
            Self::BrightnessOutOfRange(value) => {
                write!(f, "LED brightness must be between 0 and 255, got {value}")
            }
            Self::Color(err) => write!(f, "invalid color: {err}"),
            Self::InvalidGamma(exponent) => {
                write!(f, "gamma exponent must be positive, got {exponent}")
            }
            Self::UnknownColor => f.write_str("color is not in the palette"),
            Self::Bus(err) => write!(f, "bus transfer failed: {err:?}"),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Color(err) => Some(err),
            _ => None,
        }
    }
}
