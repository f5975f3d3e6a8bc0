//! Color representation

use std::fmt;

/// Color representation
///
/// The sheet API reports colors as 0-1 float triples; everything downstream
/// works in 8-bit RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Automatic/default color
    #[default]
    Auto,

    /// RGB color (no alpha)
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Black
    pub const BLACK: Color = Color::Rgb { r: 0, g: 0, b: 0 };

    /// White
    pub const WHITE: Color = Color::Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Convert to RGB tuple
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Auto => (0, 0, 0),
            Color::Rgb { r, g, b } => (*r, *g, *b),
        }
    }

    /// Convert to hex string (without # prefix)
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb();
        format!("{:02X}{:02X}{:02X}", r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

/// A background/foreground color as reported by the sheet API: each channel
/// a 0-1 float, absent channels meaning zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColorTriple {
    /// Red channel (0.0 - 1.0)
    pub red: Option<f64>,
    /// Green channel (0.0 - 1.0)
    pub green: Option<f64>,
    /// Blue channel (0.0 - 1.0)
    pub blue: Option<f64>,
}

impl ColorTriple {
    /// Create a triple with all three channels present
    pub fn new(red: f64, green: f64, blue: f64) -> Self {
        Self {
            red: Some(red),
            green: Some(green),
            blue: Some(blue),
        }
    }

    /// True when no channel is reported at all
    pub fn is_empty(&self) -> bool {
        self.red.is_none() && self.green.is_none() && self.blue.is_none()
    }

    /// Convert to an 8-bit [`Color`]; a missing channel defaults to 0
    pub fn to_color(&self) -> Color {
        let channel = |c: Option<f64>| (c.unwrap_or(0.0).clamp(0.0, 1.0) * 255.0) as u8;
        Color::rgb(channel(self.red), channel(self.green), channel(self.blue))
    }
}
