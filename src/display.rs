//! Character rendering on the numeral
//!
//! [`NumberDisplay`] keeps which segments are lit and two colors: one for
//! lit segments and one for dark segments (normally black). Every change
//! re-renders all eight segments with one block write and one latch, also on
//! an unbuffered driver.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use enumset::EnumSet;

use crate::RegisterBus;
use crate::color::{Hsv, Palette};
use crate::error::{Error, Result};
use crate::glyph::{self, Glyph};
use crate::segment::{GLYPH_SEGMENTS, Segment, SegmentController};

const DEFAULT_COLOR: &str = "white";
const DEFAULT_OFF_COLOR: &str = "black";

/// Fallback when the palette has no "white"
const FALLBACK_COLOR: Hsv = Hsv::new(0.0, 0.0, 0.25);

/// Alphanumeric display on one RGB numeral
#[derive(Debug)]
pub struct NumberDisplay<B: RegisterBus> {
    controller: SegmentController<B>,
    enabled: EnumSet<Segment>,
    color: Hsv,
    color_off: Hsv,
    palette: Palette,
}

impl<B: RegisterBus> NumberDisplay<B> {
    /// Create a display using the HTML palette
    pub fn new(controller: SegmentController<B>) -> Self {
        Self::with_palette(controller, Palette::html())
    }

    /// Create a display with a custom palette
    ///
    /// The palette's "white" and "black" become the lit and dark colors.
    /// Nothing is written until the first character is shown.
    pub fn with_palette(controller: SegmentController<B>, palette: Palette) -> Self {
        Self {
            controller,
            enabled: EnumSet::empty(),
            color: palette.get(DEFAULT_COLOR).unwrap_or(FALLBACK_COLOR),
            color_off: palette.get(DEFAULT_OFF_COLOR).unwrap_or(Hsv::BLACK),
            palette,
        }
    }

    /// Show a character, optionally switching the lit color first
    ///
    /// Characters without a glyph are shown as blank. The decimal point is
    /// left as it is.
    pub fn display(&mut self, character: char, color: Option<Hsv>) -> Result<(), B::Error> {
        let glyph = match glyph::lookup(character) {
            Some(glyph) => glyph,
            None => {
                #[cfg(feature = "esp32-log")]
                println!(
                    "[NumberDisplay.display] no glyph for {:?}, showing blank",
                    character
                );
                &glyph::BLANK
            }
        };
        self.show(glyph, color)
    }

    /// Show a string of at most one character
    ///
    /// The empty string, or a longer one, is shown as blank.
    pub fn display_str(&mut self, text: &str, color: Option<Hsv>) -> Result<(), B::Error> {
        self.show(glyph::glyph_for_str(text), color)
    }

    /// Show a decimal digit, blank above 9
    pub fn display_digit(&mut self, value: u8, color: Option<Hsv>) -> Result<(), B::Error> {
        self.show(glyph::digit(value), color)
    }

    /// Turn off all glyph segments
    pub fn clear(&mut self) -> Result<(), B::Error> {
        self.show(&glyph::BLANK, None)
    }

    /// Set the color of lit segments and re-render
    pub fn set_color(&mut self, color: Hsv) -> Result<(), B::Error> {
        self.color = color.validate()?;
        self.render()
    }

    /// Set the color of lit segments from raw components
    ///
    /// Anything other than exactly three components is rejected.
    pub fn set_color_components(&mut self, components: &[f32]) -> Result<(), B::Error> {
        let color = Hsv::try_from(components)?;
        self.set_color(color)
    }

    /// Set the color of lit segments from the palette
    pub fn set_color_by_name(&mut self, name: &str) -> Result<(), B::Error> {
        let color = self.palette.get(name).ok_or(Error::UnknownColor)?;
        self.set_color(color)
    }

    /// Set the color of dark segments and re-render
    pub fn set_off_color(&mut self, color: Hsv) -> Result<(), B::Error> {
        self.color_off = color.validate()?;
        self.render()
    }

    /// Light or darken the decimal point
    pub fn set_decimal_point(&mut self, lit: bool) -> Result<(), B::Error> {
        if lit {
            self.enabled.insert(Segment::Dp);
        } else {
            self.enabled.remove(Segment::Dp);
        }
        self.render()
    }

    /// Replace the palette
    ///
    /// The current colors are kept.
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    /// Push the current pattern and colors to the segments
    pub fn render(&mut self) -> Result<(), B::Error> {
        for segment in Segment::ALL {
            let color = if self.enabled.contains(segment) {
                self.color
            } else {
                self.color_off
            };
            self.controller.stage_color(segment, color)?;
        }
        self.controller.update_batched()
    }

    /// Segments currently lit
    pub const fn enabled_segments(&self) -> EnumSet<Segment> {
        self.enabled
    }

    /// Color of lit segments
    pub const fn color(&self) -> Hsv {
        self.color
    }

    /// Color of dark segments
    pub const fn off_color(&self) -> Hsv {
        self.color_off
    }

    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    pub const fn controller(&self) -> &SegmentController<B> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SegmentController<B> {
        &mut self.controller
    }

    /// Give the segment controller back
    pub fn release(self) -> SegmentController<B> {
        self.controller
    }

    fn show(&mut self, glyph: &Glyph, color: Option<Hsv>) -> Result<(), B::Error> {
        if let Some(color) = color {
            self.color = color.validate()?;
        }
        self.enabled = (self.enabled - GLYPH_SEGMENTS) | *glyph;
        self.render()
    }
}
