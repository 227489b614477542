use std::fmt;

use super::constants::*;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("unrecognized color '{0}' (expected rgb(), rgba() or #rrggbb)")]
    Unrecognized(String),
    #[error("invalid color channel '{0}'")]
    InvalidChannel(String),
    #[error("color channel {0} is out of range 0..=255")]
    ChannelOutOfRange(u32),
}

/// 8-bit RGB triple used as the base color of a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for Rgb {
    fn default() -> Self {
        let [r, g, b] = DEFAULT_COLOR;
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `rgb(r, g, b)`, `rgba(r, g, b, a)` or `#rrggbb`. Alpha is ignored.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let s = input.trim().to_ascii_lowercase();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError::Unrecognized(input.to_string()));
        }
        let args = s
            .strip_prefix("rgba(")
            .or_else(|| s.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| ColorParseError::Unrecognized(input.to_string()))?;
        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        if parts.len() != 3 && parts.len() != 4 {
            return Err(ColorParseError::Unrecognized(input.to_string()));
        }
        Ok(Self {
            r: parse_channel(parts[0])?,
            g: parse_channel(parts[1])?,
            b: parse_channel(parts[2])?,
        })
    }

    /// Move each channel `amount` (0..=1) of the way toward white.
    pub fn toward_white(self, amount: f64) -> Self {
        let lift = |c: u8| -> u8 {
            let v = c as f64 + (255.0 - c as f64) * amount;
            v.round().clamp(0.0, 255.0) as u8
        };
        Self {
            r: lift(self.r),
            g: lift(self.g),
            b: lift(self.b),
        }
    }
}

fn parse_channel(text: &str) -> Result<u8, ColorParseError> {
    let v: u32 = text
        .parse()
        .map_err(|_| ColorParseError::InvalidChannel(text.to_string()))?;
    u8::try_from(v).map_err(|_| ColorParseError::ChannelOutOfRange(v))
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    match hex.len() {
        6 => Some(Rgb::new(byte(0)?, byte(2)?, byte(4)?)),
        3 => {
            let nibble = |i: usize| {
                let v = u8::from_str_radix(hex.get(i..i + 1)?, 16).ok()?;
                Some(v * 17)
            };
            Some(Rgb::new(nibble(0)?, nibble(1)?, nibble(2)?))
        }
        _ => None,
    }
}

/// Intensity band of a lit cell, brightest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Band {
    /// Strong shift toward white.
    Blaze,
    /// Lighter version of the base color.
    Glow,
    Bright,
    Medium,
    Dim,
}

impl Band {
    /// `None` when the cell is too faint to draw.
    pub fn classify(intensity: f64) -> Option<Band> {
        if intensity > BAND_BLAZE_EDGE {
            Some(Band::Blaze)
        } else if intensity > BAND_GLOW_EDGE {
            Some(Band::Glow)
        } else if intensity > BAND_BRIGHT_EDGE {
            Some(Band::Bright)
        } else if intensity > BAND_MEDIUM_EDGE {
            Some(Band::Medium)
        } else if intensity > SPARSITY_THRESHOLD {
            Some(Band::Dim)
        } else {
            None
        }
    }

    pub fn alpha_scale(self) -> f64 {
        match self {
            Band::Blaze | Band::Glow | Band::Bright => ALPHA_SCALE_HIGH,
            Band::Medium => ALPHA_SCALE_MEDIUM,
            Band::Dim => ALPHA_SCALE_DIM,
        }
    }

    /// Fraction of the way toward white for a cell at `intensity` in this band.
    pub fn white_blend(self, intensity: f64) -> f64 {
        match self {
            Band::Blaze => (intensity - BAND_BLAZE_EDGE) * BLAZE_BLEND_GAIN * BLAZE_WHITE_BLEND,
            Band::Glow => (intensity - BAND_GLOW_EDGE) / GLOW_BLEND_SPAN * GLOW_WHITE_BLEND,
            Band::Bright | Band::Medium | Band::Dim => 0.0,
        }
    }
}

/// Fill color and opacity for one glyph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    pub color: Rgb,
    pub alpha: f64,
}

impl Paint {
    pub fn for_intensity(base: Rgb, intensity: f64) -> Option<Paint> {
        let band = Band::classify(intensity)?;
        let color = match band {
            Band::Blaze | Band::Glow => base.toward_white(band.white_blend(intensity)),
            _ => base,
        };
        Some(Paint {
            color,
            alpha: intensity * band.alpha_scale(),
        })
    }

    /// Canvas fill style, e.g. `rgba(0, 255, 136, 0.12)`.
    pub fn css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.color.r, self.color.g, self.color.b, self.alpha
        )
    }
}
