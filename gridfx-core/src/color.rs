//! Clamped RGB color type and a small named palette.
//!
//! Channels are stored as `f64` so accumulation math (resampling, blending)
//! does not pick up rounding error, but every write clamps to [0, 255] and
//! every integer read rounds. A `Color` read back is always in range no
//! matter what arithmetic produced it; no operation here can fail.

/// An RGB color with f64 channels, each held in [0.0, 255.0].
///
/// Equality compares the rounded integer views, so two colors that would
/// serialize to the same truecolor triple compare equal even if their raw
/// channels differ below rounding.
#[derive(Clone, Copy, Debug)]
pub struct Color {
    red: f64,
    green: f64,
    blue: f64,
}

fn clamp_channel(value: f64) -> f64 {
    value.clamp(0.0, 255.0)
}

impl Color {
    /// Builds a color from three channel values, clamping each to [0, 255].
    pub fn new(red: f64, green: f64, blue: f64) -> Self {
        Self {
            red: clamp_channel(red),
            green: clamp_channel(green),
            blue: clamp_channel(blue),
        }
    }

    /// Red channel as a rounded 0..=255 integer, for serialization.
    pub fn red(&self) -> u8 {
        self.red.round() as u8
    }

    /// Green channel as a rounded 0..=255 integer.
    pub fn green(&self) -> u8 {
        self.green.round() as u8
    }

    /// Blue channel as a rounded 0..=255 integer.
    pub fn blue(&self) -> u8 {
        self.blue.round() as u8
    }

    /// Raw red channel, for accumulation math.
    pub fn r(&self) -> f64 {
        self.red
    }

    /// Raw green channel.
    pub fn g(&self) -> f64 {
        self.green
    }

    /// Raw blue channel.
    pub fn b(&self) -> f64 {
        self.blue
    }

    pub fn set(&mut self, other: Color) {
        *self = other;
    }

    pub fn set_rgb(&mut self, red: f64, green: f64, blue: f64) {
        *self = Self::new(red, green, blue);
    }

    pub fn set_red(&mut self, value: f64) {
        self.red = clamp_channel(value);
    }

    pub fn set_green(&mut self, value: f64) {
        self.green = clamp_channel(value);
    }

    pub fn set_blue(&mut self, value: f64) {
        self.blue = clamp_channel(value);
    }

    pub fn invert_red(&mut self) {
        self.red = clamp_channel(255.0 - self.red);
    }

    pub fn invert_green(&mut self) {
        self.green = clamp_channel(255.0 - self.green);
    }

    pub fn invert_blue(&mut self) {
        self.blue = clamp_channel(255.0 - self.blue);
    }

    /// Inverts all three channels (`255 - v` each).
    pub fn invert(&mut self) {
        self.invert_red();
        self.invert_green();
        self.invert_blue();
    }

    pub fn scale_red(&mut self, coefficient: f64) {
        self.red = clamp_channel(self.red * coefficient);
    }

    pub fn scale_green(&mut self, coefficient: f64) {
        self.green = clamp_channel(self.green * coefficient);
    }

    pub fn scale_blue(&mut self, coefficient: f64) {
        self.blue = clamp_channel(self.blue * coefficient);
    }

    /// Multiplies every channel by one coefficient.
    pub fn scale(&mut self, coefficient: f64) {
        self.scale_red(coefficient);
        self.scale_green(coefficient);
        self.scale_blue(coefficient);
    }

    /// Multiplies each channel by its own coefficient.
    pub fn scale_rgb(&mut self, red: f64, green: f64, blue: f64) {
        self.scale_red(red);
        self.scale_green(green);
        self.scale_blue(blue);
    }

    pub fn adjust_red(&mut self, increment: f64) {
        self.red = clamp_channel(self.red + increment);
    }

    pub fn adjust_green(&mut self, increment: f64) {
        self.green = clamp_channel(self.green + increment);
    }

    pub fn adjust_blue(&mut self, increment: f64) {
        self.blue = clamp_channel(self.blue + increment);
    }

    /// Adds one increment to every channel.
    pub fn adjust(&mut self, increment: f64) {
        self.adjust_red(increment);
        self.adjust_green(increment);
        self.adjust_blue(increment);
    }

    /// Adds a separate increment to each channel.
    pub fn adjust_rgb(&mut self, red: f64, green: f64, blue: f64) {
        self.adjust_red(red);
        self.adjust_green(green);
        self.adjust_blue(blue);
    }

    /// Replaces all channels with their arithmetic mean.
    pub fn to_grayscale(&mut self) {
        let gray = (self.red + self.green + self.blue) / 3.0;
        self.red = gray;
        self.green = gray;
        self.blue = gray;
    }

    /// Linear blend toward `other`: per channel `(1-f)*self + f*other`.
    /// The factor is clamped to [0, 1] before use.
    pub fn blend_with(&mut self, other: Color, factor: f64) {
        let f = factor.clamp(0.0, 1.0);
        self.red = clamp_channel((1.0 - f) * self.red + f * other.red);
        self.green = clamp_channel((1.0 - f) * self.green + f * other.green);
        self.blue = clamp_channel((1.0 - f) * self.blue + f * other.blue);
    }
}

impl Default for Color {
    fn default() -> Self {
        BLACK
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.red() == other.red() && self.green() == other.green() && self.blue() == other.blue()
    }
}

impl Eq for Color {}

const fn rgb(red: u8, green: u8, blue: u8) -> Color {
    Color {
        red: red as f64,
        green: green as f64,
        blue: blue as f64,
    }
}

pub const BLACK: Color = rgb(0, 0, 0);
pub const WHITE: Color = rgb(255, 255, 255);

pub const RED: Color = rgb(255, 0, 0);
pub const DARK_RED: Color = rgb(139, 0, 0);
pub const CORAL: Color = rgb(255, 127, 80);
pub const PINK: Color = rgb(255, 192, 203);

pub const GREEN: Color = rgb(0, 255, 0);
pub const DARK_GREEN: Color = rgb(0, 100, 0);
pub const LIGHT_GREEN: Color = rgb(144, 238, 144);
pub const FOREST_GREEN: Color = rgb(34, 139, 34);

pub const BLUE: Color = rgb(0, 0, 255);
pub const DARK_BLUE: Color = rgb(0, 0, 139);
pub const LIGHT_BLUE: Color = rgb(173, 216, 230);
pub const TURQUOISE: Color = rgb(64, 224, 208);
pub const TEAL: Color = rgb(0, 128, 128);

pub const YELLOW: Color = rgb(255, 255, 0);
pub const GOLD: Color = rgb(255, 215, 0);

pub const CYAN: Color = rgb(0, 255, 255);
pub const DARK_CYAN: Color = rgb(0, 139, 139);

pub const ORANGE: Color = rgb(255, 165, 0);
pub const DARK_ORANGE: Color = rgb(255, 140, 0);
pub const CHOCOLATE: Color = rgb(210, 105, 30);

pub const PURPLE: Color = rgb(128, 0, 128);
pub const INDIGO: Color = rgb(75, 0, 130);
pub const VIOLET: Color = rgb(238, 130, 238);
pub const FUCHSIA: Color = rgb(255, 0, 255);

pub const BROWN: Color = rgb(165, 42, 42);
pub const TAN: Color = rgb(210, 180, 140);
pub const SILVER: Color = rgb(192, 192, 192);
pub const GRAY: Color = rgb(169, 169, 169);
pub const LIGHT_GRAY: Color = rgb(211, 211, 211);
pub const OLIVE: Color = rgb(128, 128, 0);
