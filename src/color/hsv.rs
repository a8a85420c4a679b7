use crate::error::{ColorError, Component};

/// HSV color with every component in `0.0..=1.0`
///
/// Hue wraps around: both `0.0` and `1.0` are red.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    pub hue: f32,
    pub sat: f32,
    pub val: f32,
}

impl Hsv {
    /// All channels off
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a color without range checks
    ///
    /// Meant for constants; values coming from callers go through
    /// [`Hsv::try_new`] or [`Hsv::validate`].
    pub const fn new(hue: f32, sat: f32, val: f32) -> Self {
        Self { hue, sat, val }
    }

    /// Create a color, rejecting components outside `0.0..=1.0`
    pub fn try_new(hue: f32, sat: f32, val: f32) -> Result<Self, ColorError> {
        Self::new(hue, sat, val).validate()
    }

    /// Check that every component is within `0.0..=1.0`
    pub fn validate(self) -> Result<Self, ColorError> {
        let components = [
            (Component::Hue, self.hue),
            (Component::Saturation, self.sat),
            (Component::Value, self.val),
        ];
        for (component, value) in components {
            if !(0.0..=1.0).contains(&value) {
                return Err(ColorError::OutOfRange { component, value });
            }
        }
        Ok(self)
    }

    /// Same hue and saturation with a different value
    #[must_use]
    pub const fn with_val(self, val: f32) -> Self {
        Self { val, ..self }
    }
}

impl TryFrom<&[f32]> for Hsv {
    type Error = ColorError;

    fn try_from(components: &[f32]) -> Result<Self, Self::Error> {
        match *components {
            [hue, sat, val] => Self::try_new(hue, sat, val),
            _ => Err(ColorError::Length(components.len())),
        }
    }
}

impl TryFrom<[f32; 3]> for Hsv {
    type Error = ColorError;

    fn try_from([hue, sat, val]: [f32; 3]) -> Result<Self, Self::Error> {
        Self::try_new(hue, sat, val)
    }
}

impl TryFrom<(f32, f32, f32)> for Hsv {
    type Error = ColorError;

    fn try_from((hue, sat, val): (f32, f32, f32)) -> Result<Self, Self::Error> {
        Self::try_new(hue, sat, val)
    }
}

/// Convert HSV to linear RGB (all channels are 0.0-1.0)
///
/// Six-sector conversion; a value of zero is black for any hue and
/// saturation.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hsv_to_rgb(hsv: Hsv) -> [f32; 3] {
    let Hsv { hue, sat, val } = hsv;
    if sat == 0.0 {
        return [val; 3];
    }

    let sector = libm::floorf(hue * 6.0);
    let fraction = hue * 6.0 - sector;
    let p = val * (1.0 - sat);
    let q = val * (1.0 - sat * fraction);
    let t = val * (1.0 - sat * (1.0 - fraction));

    match (sector as u32) % 6 {
        0 => [val, t, p],
        1 => [q, val, p],
        2 => [p, val, t],
        3 => [p, q, val],
        4 => [t, p, val],
        _ => [val, p, q],
    }
}
