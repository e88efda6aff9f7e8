//! Conversion between HEX, RGB and HSL color notations.
//!
//! HEX and RGB are both editable and always describe the same color; HSL is
//! derived from them and never parsed back.

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::error::ToolkitError;

/// Loose `rgb(r, g, b)` / `rgba(r, g, b, a)` form; only the first three integers count.
static RGB_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)rgba?\((\d+),\s*(\d+),\s*(\d+)").expect("static RGB pattern is valid")
});

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uppercase `#RRGGBB` notation.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// CSS `rgb(r, g, b)` notation.
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Convert to HSL.
    pub fn to_hsl(&self) -> Hsl {
        rgb_to_hsl(*self)
    }
}

/// Hue in degrees `[0, 360)`, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    /// CSS `hsl(h, s%, l%)` notation.
    pub fn to_css(&self) -> String {
        format!("hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

/// One color seen through all three notations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorValue {
    pub hex: String,
    pub rgb: Rgb,
    pub hsl: Hsl,
}

impl From<Rgb> for ColorValue {
    fn from(rgb: Rgb) -> Self {
        Self {
            hex: rgb.to_hex(),
            rgb,
            hsl: rgb.to_hsl(),
        }
    }
}

/// Parse a strict 6 digit hex color, with or without a leading `#`.
///
/// # Examples
///
/// ```
/// use devtoolkit::{parse_hex, Rgb};
///
/// assert_eq!(parse_hex("#FF0000").unwrap(), Rgb::new(255, 0, 0));
/// assert_eq!(parse_hex("00ff7f").unwrap(), Rgb::new(0, 255, 127));
/// assert!(parse_hex("#F00").is_err());
/// ```
pub fn parse_hex(input: &str) -> Result<Rgb, ToolkitError> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ToolkitError::InvalidColor(format!(
            "expected 6 hex digits, got {:?}",
            input
        )));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|e| ToolkitError::InvalidColor(e.to_string()))
    };

    Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Extract a color from loose `rgb(...)` or `rgba(...)` text.
///
/// Channels above 255 are rejected with [`ToolkitError::ChannelOutOfRange`].
///
/// # Examples
///
/// ```
/// use devtoolkit::{parse_rgb, Rgb};
///
/// assert_eq!(parse_rgb("rgb(10, 20, 30)").unwrap(), Rgb::new(10, 20, 30));
/// assert_eq!(parse_rgb("RGBA(1,2,3, 0.5)").unwrap(), Rgb::new(1, 2, 3));
/// assert!(parse_rgb("rgb(256, 0, 0)").is_err());
/// ```
pub fn parse_rgb(input: &str) -> Result<Rgb, ToolkitError> {
    let caps = RGB_PATTERN
        .captures(input)
        .ok_or_else(|| ToolkitError::InvalidColor(format!("expected rgb(r, g, b), got {:?}", input)))?;

    let mut channels = [0u8; 3];
    for (i, name) in ['r', 'g', 'b'].into_iter().enumerate() {
        let text = &caps[i + 1];
        let value: u32 = text.parse().unwrap_or(u32::MAX);
        channels[i] = u8::try_from(value)
            .map_err(|_| ToolkitError::ChannelOutOfRange { channel: name, value })?;
    }

    Ok(Rgb::new(channels[0], channels[1], channels[2]))
}

/// Convert RGB to HSL with integer rounding.
///
/// # Examples
///
/// ```
/// use devtoolkit::{rgb_to_hsl, Hsl, Rgb};
///
/// assert_eq!(rgb_to_hsl(Rgb::new(255, 0, 0)), Hsl { h: 0, s: 100, l: 50 });
/// assert_eq!(rgb_to_hsl(Rgb::new(0, 0, 0)), Hsl { h: 0, s: 0, l: 0 });
/// ```
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let sector = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (sector / 6.0, s)
    };

    Hsl {
        h: ((h * 360.0).round() as u16) % 360,
        s: (s * 100.0).round() as u8,
        l: (l * 100.0).round() as u8,
    }
}

/// Editable color state: the last valid color plus the parser for each notation.
///
/// Rejected edits leave the current color untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorState {
    current: ColorValue,
}

impl Default for ColorState {
    fn default() -> Self {
        Self {
            current: ColorValue::from(Rgb::new(0, 0, 0)),
        }
    }
}

impl ColorState {
    /// Start from black.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current color.
    pub fn current(&self) -> &ColorValue {
        &self.current
    }

    /// Apply a HEX edit.
    pub fn apply_hex(&mut self, input: &str) -> Result<&ColorValue, ToolkitError> {
        let rgb = parse_hex(input)?;
        self.current = ColorValue::from(rgb);
        debug!("color state updated from hex");
        Ok(&self.current)
    }

    /// Apply an RGB edit. Out of range channels are ignored with a warning.
    pub fn apply_rgb(&mut self, input: &str) -> Result<&ColorValue, ToolkitError> {
        match parse_rgb(input) {
            Ok(rgb) => {
                self.current = ColorValue::from(rgb);
                debug!("color state updated from rgb");
                Ok(&self.current)
            }
            Err(e) => {
                if let ToolkitError::ChannelOutOfRange { channel, value } = &e {
                    warn!("ignoring rgb edit: channel {} = {} exceeds 255", channel, value);
                }
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_colors() {
        let cases = [
            ("#FF0000", (255, 0, 0), Hsl { h: 0, s: 100, l: 50 }),
            ("#00FF00", (0, 255, 0), Hsl { h: 120, s: 100, l: 50 }),
            ("#0000FF", (0, 0, 255), Hsl { h: 240, s: 100, l: 50 }),
            ("#FFFFFF", (255, 255, 255), Hsl { h: 0, s: 0, l: 100 }),
            ("#000000", (0, 0, 0), Hsl { h: 0, s: 0, l: 0 }),
            ("#808080", (128, 128, 128), Hsl { h: 0, s: 0, l: 50 }),
            ("#FFFF00", (255, 255, 0), Hsl { h: 60, s: 100, l: 50 }),
            ("#FF00FF", (255, 0, 255), Hsl { h: 300, s: 100, l: 50 }),
        ];

        for (hex, (r, g, b), hsl) in cases {
            let rgb = parse_hex(hex).unwrap();
            assert_eq!(rgb, Rgb::new(r, g, b), "rgb for {}", hex);
            assert_eq!(rgb.to_hsl(), hsl, "hsl for {}", hex);
        }
    }

    #[test]
    fn test_hue_stays_below_360() {
        // Reds leaning towards magenta round up close to 360
        let hsl = rgb_to_hsl(Rgb::new(255, 0, 1));
        assert!(hsl.h < 360);
        assert_eq!(hsl.h, 0);
    }

    #[test]
    fn test_hex_rejects_other_shapes() {
        for bad in ["", "#", "#FFF", "#FFFFFFF", "GG0000", "#12345z", "##123456"] {
            assert!(parse_hex(bad).is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_hex_is_case_insensitive() {
        assert_eq!(parse_hex("#abcdef").unwrap(), parse_hex("ABCDEF").unwrap());
    }

    #[test]
    fn test_css_notations() {
        let rgb = Rgb::new(18, 52, 86);
        assert_eq!(rgb.to_hex(), "#123456");
        assert_eq!(rgb.to_css(), "rgb(18, 52, 86)");
        assert_eq!(Hsl { h: 210, s: 65, l: 20 }.to_css(), "hsl(210, 65%, 20%)");
    }

    #[test]
    fn test_rgb_overflow_keeps_previous_state() {
        let mut state = ColorState::new();
        state.apply_rgb("rgb(10, 20, 30)").unwrap();

        let err = state.apply_rgb("rgb(10, 300, 30)").unwrap_err();
        assert_eq!(err, ToolkitError::ChannelOutOfRange { channel: 'g', value: 300 });
        assert_eq!(state.current().rgb, Rgb::new(10, 20, 30));
        assert_eq!(state.current().hex, "#0A141E");
    }

    #[test]
    fn test_huge_channel_is_out_of_range() {
        assert!(matches!(
            parse_rgb("rgb(99999999999, 0, 0)"),
            Err(ToolkitError::ChannelOutOfRange { channel: 'r', .. })
        ));
    }

    #[test]
    fn test_hex_edit_updates_all_projections() {
        let mut state = ColorState::new();
        let value = state.apply_hex("#ff0000").unwrap().clone();
        assert_eq!(value.hex, "#FF0000");
        assert_eq!(value.rgb.to_css(), "rgb(255, 0, 0)");
        assert_eq!(value.hsl.to_css(), "hsl(0, 100%, 50%)");

        assert!(state.apply_hex("#ff00").is_err());
        assert_eq!(state.current(), &value);
    }
}
