//! Argument parsing for paint-state calls.
//!
//! Callers hand `fill`/`stroke`/`background` one of several logically
//! distinct shapes: a grayscale number, three or four raw channel numbers, an
//! array, a CSS-style string, or a previously built [`Color`]. [`ColorInput`]
//! is the tagged union those shapes funnel into; [`parse`] turns one of them
//! into a normalized [`Color`] under the supplied mode state, or fails with
//! [`PaintError::InvalidColor`] without producing any partial result.

use lazy_static::lazy_static;
use regex::Regex;

use crate::color::mode::{ColorModeState, ColorSpace};
use crate::color::named;
use crate::color::value::Color;
use crate::error::{PaintError, Result};

/// One caller-supplied color argument, in any supported shape.
///
/// Raw numeric shapes are interpreted through the active color mode. String
/// shapes are absolute CSS values. A prior [`Color`] passes through and keeps
/// its own captured interpretation context.
#[derive(Debug, Clone)]
pub enum ColorInput {
    /// A single grayscale number, optionally with a raw alpha.
    Gray { value: f64, alpha: Option<f64> },
    /// Three raw chroma channels, optionally with a raw alpha.
    Channels {
        v1: f64,
        v2: f64,
        v3: f64,
        alpha: Option<f64>,
    },
    /// An array of 1, 3, or 4 raw values. Other lengths fail to parse.
    Values(Vec<f64>),
    /// A CSS-style color string, optionally with a raw alpha override.
    Text { css: String, alpha: Option<f64> },
    /// A previously built color, optionally with a raw alpha override
    /// interpreted through the color's own captured ranges.
    Prior { color: Color, alpha: Option<f64> },
}

impl ColorInput {
    /// Attach a raw alpha to this input. An existing alpha is replaced.
    pub fn with_alpha(self, alpha: f64) -> Self {
        match self {
            ColorInput::Gray { value, .. } => ColorInput::Gray {
                value,
                alpha: Some(alpha),
            },
            ColorInput::Channels { v1, v2, v3, .. } => ColorInput::Channels {
                v1,
                v2,
                v3,
                alpha: Some(alpha),
            },
            ColorInput::Values(vals) => match vals.len() {
                1 => ColorInput::Gray {
                    value: vals[0],
                    alpha: Some(alpha),
                },
                3 | 4 => ColorInput::Channels {
                    v1: vals[0],
                    v2: vals[1],
                    v3: vals[2],
                    alpha: Some(alpha),
                },
                _ => ColorInput::Values(vals),
            },
            ColorInput::Text { css, .. } => ColorInput::Text {
                css,
                alpha: Some(alpha),
            },
            ColorInput::Prior { color, .. } => ColorInput::Prior {
                color,
                alpha: Some(alpha),
            },
        }
    }
}

impl From<f64> for ColorInput {
    fn from(value: f64) -> Self {
        ColorInput::Gray { value, alpha: None }
    }
}

impl From<(f64, f64)> for ColorInput {
    fn from((value, alpha): (f64, f64)) -> Self {
        ColorInput::Gray {
            value,
            alpha: Some(alpha),
        }
    }
}

impl From<(f64, f64, f64)> for ColorInput {
    fn from((v1, v2, v3): (f64, f64, f64)) -> Self {
        ColorInput::Channels {
            v1,
            v2,
            v3,
            alpha: None,
        }
    }
}

impl From<(f64, f64, f64, f64)> for ColorInput {
    fn from((v1, v2, v3, alpha): (f64, f64, f64, f64)) -> Self {
        ColorInput::Channels {
            v1,
            v2,
            v3,
            alpha: Some(alpha),
        }
    }
}

impl From<&str> for ColorInput {
    fn from(css: &str) -> Self {
        ColorInput::Text {
            css: css.to_string(),
            alpha: None,
        }
    }
}

impl From<String> for ColorInput {
    fn from(css: String) -> Self {
        ColorInput::Text { css, alpha: None }
    }
}

impl From<(&str, f64)> for ColorInput {
    fn from((css, alpha): (&str, f64)) -> Self {
        ColorInput::Text {
            css: css.to_string(),
            alpha: Some(alpha),
        }
    }
}

impl From<Color> for ColorInput {
    fn from(color: Color) -> Self {
        ColorInput::Prior { color, alpha: None }
    }
}

impl From<(Color, f64)> for ColorInput {
    fn from((color, alpha): (Color, f64)) -> Self {
        ColorInput::Prior {
            color,
            alpha: Some(alpha),
        }
    }
}

impl From<Vec<f64>> for ColorInput {
    fn from(vals: Vec<f64>) -> Self {
        ColorInput::Values(vals)
    }
}

impl From<&[f64]> for ColorInput {
    fn from(vals: &[f64]) -> Self {
        ColorInput::Values(vals.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for ColorInput {
    fn from(vals: [f64; N]) -> Self {
        ColorInput::Values(vals.to_vec())
    }
}

/// Resolve one input shape into a normalized color under `modes`.
pub fn parse(modes: &ColorModeState, input: &ColorInput) -> Result<Color> {
    match input {
        ColorInput::Gray { value, alpha } => Ok(Color::from_gray(modes, *value, *alpha)),
        ColorInput::Channels { v1, v2, v3, alpha } => {
            Ok(Color::from_channels(modes, *v1, *v2, *v3, *alpha))
        }
        ColorInput::Values(vals) => match vals.as_slice() {
            &[value] => Ok(Color::from_gray(modes, value, None)),
            &[v1, v2, v3] => Ok(Color::from_channels(modes, v1, v2, v3, None)),
            &[v1, v2, v3, alpha] => Ok(Color::from_channels(modes, v1, v2, v3, Some(alpha))),
            other => Err(PaintError::InvalidColor(format!(
                "expected 1, 3, or 4 color values, got {}",
                other.len()
            ))),
        },
        ColorInput::Text { css, alpha } => {
            let rgba = parse_css(css)?;
            let color = Color::from_normalized(modes, rgba);
            Ok(match alpha {
                Some(a) => color.with_alpha(*a),
                None => color,
            })
        }
        ColorInput::Prior { color, alpha } => Ok(match alpha {
            Some(a) => color.with_alpha(*a),
            None => *color,
        }),
    }
}

lazy_static! {
    static ref RGB_INT: Regex = Regex::new(
        r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)$"
    )
    .unwrap();
    static ref RGB_PCT: Regex = Regex::new(
        r"^rgba?\(\s*([0-9]*\.?[0-9]+)%\s*,\s*([0-9]*\.?[0-9]+)%\s*,\s*([0-9]*\.?[0-9]+)%\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)$"
    )
    .unwrap();
    static ref HSL_FN: Regex = Regex::new(
        r"^hsla?\(\s*([0-9]*\.?[0-9]+)\s*,\s*([0-9]*\.?[0-9]+)%\s*,\s*([0-9]*\.?[0-9]+)%\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)$"
    )
    .unwrap();
    static ref HSB_FN: Regex = Regex::new(
        r"^hsba?\(\s*([0-9]*\.?[0-9]+)\s*,\s*([0-9]*\.?[0-9]+)%\s*,\s*([0-9]*\.?[0-9]+)%\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)$"
    )
    .unwrap();
}

/// Parse a CSS-style color string into renderer-space RGBA.
///
/// Supported notations: named colors, `#rgb`, `#rgba`, `#rrggbb`,
/// `#rrggbbaa`, `rgb()`/`rgba()` with integer or percentage components, and
/// `hsl()`/`hsla()`/`hsb()`/`hsba()`. String channels are absolute CSS
/// values; they are not reinterpreted through the active color mode.
fn parse_css(s: &str) -> Result<[f64; 4]> {
    let lower = s.trim().to_ascii_lowercase();

    if lower.is_empty() {
        return Err(PaintError::InvalidColor("empty color string".to_string()));
    }

    if let Some(hex) = lower.strip_prefix('#') {
        return parse_hex(hex, s);
    }

    if let Some([r, g, b]) = named::lookup(&lower) {
        return Ok([
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            1.0,
        ]);
    }

    if let Some(caps) = RGB_INT.captures(&lower) {
        let r = channel_255(&caps[1], s)?;
        let g = channel_255(&caps[2], s)?;
        let b = channel_255(&caps[3], s)?;
        let a = opt_alpha(caps.get(4).map(|m| m.as_str()), s)?;
        return Ok([r, g, b, a]);
    }

    if let Some(caps) = RGB_PCT.captures(&lower) {
        let r = channel_percent(&caps[1], s)?;
        let g = channel_percent(&caps[2], s)?;
        let b = channel_percent(&caps[3], s)?;
        let a = opt_alpha(caps.get(4).map(|m| m.as_str()), s)?;
        return Ok([r, g, b, a]);
    }

    for (pattern, is_hsb) in [(&*HSL_FN, false), (&*HSB_FN, true)] {
        if let Some(caps) = pattern.captures(&lower) {
            let h: f64 = caps[1]
                .parse()
                .map_err(|_| PaintError::InvalidColor(format!("bad hue in {s:?}")))?;
            let sat = channel_percent(&caps[2], s)?;
            let third = channel_percent(&caps[3], s)?;
            let a = opt_alpha(caps.get(4).map(|m| m.as_str()), s)?;
            // Route through a fixed canonical mode state so the string keeps
            // its absolute CSS meaning regardless of the caller's ranges.
            let mut canonical = ColorModeState::new();
            let space = if is_hsb { ColorSpace::Hsb } else { ColorSpace::Hsl };
            canonical.set_mode(space, &[360.0, 1.0, 1.0, 1.0]);
            let rgb = Color::from_channels(&canonical, h, sat, third, Some(a));
            return Ok(rgb.normalized());
        }
    }

    Err(PaintError::InvalidColor(format!(
        "unrecognized color string {s:?}"
    )))
}

/// Parse the digits of a hex notation (the leading `#` already stripped).
fn parse_hex(hex: &str, original: &str) -> Result<[f64; 4]> {
    let nibble = |c: u8| -> Result<u8> {
        match c {
            b'0'..=b'9' => Ok(c - b'0'),
            b'a'..=b'f' => Ok(c - b'a' + 10),
            _ => Err(PaintError::InvalidColor(format!(
                "invalid hex digit in {original:?}"
            ))),
        }
    };
    let bytes = hex.as_bytes();
    let (r, g, b, a) = match bytes.len() {
        // Each nibble doubles: #fae reads as #ffaaee.
        3 => (
            nibble(bytes[0])? * 17,
            nibble(bytes[1])? * 17,
            nibble(bytes[2])? * 17,
            255,
        ),
        4 => (
            nibble(bytes[0])? * 17,
            nibble(bytes[1])? * 17,
            nibble(bytes[2])? * 17,
            nibble(bytes[3])? * 17,
        ),
        6 | 8 => {
            let pair = |hi: u8, lo: u8| -> Result<u8> { Ok((nibble(hi)? << 4) | nibble(lo)?) };
            (
                pair(bytes[0], bytes[1])?,
                pair(bytes[2], bytes[3])?,
                pair(bytes[4], bytes[5])?,
                if bytes.len() == 8 {
                    pair(bytes[6], bytes[7])?
                } else {
                    255
                },
            )
        }
        n => {
            return Err(PaintError::InvalidColor(format!(
                "hex color {original:?} has {n} digits, expected 3, 4, 6, or 8"
            )))
        }
    };
    Ok([
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
        f64::from(a) / 255.0,
    ])
}

fn channel_255(text: &str, original: &str) -> Result<f64> {
    let v: f64 = text
        .parse()
        .map_err(|_| PaintError::InvalidColor(format!("bad channel in {original:?}")))?;
    if v > 255.0 {
        return Err(PaintError::InvalidColor(format!(
            "channel {v} out of range in {original:?}"
        )));
    }
    Ok(v / 255.0)
}

fn channel_percent(text: &str, original: &str) -> Result<f64> {
    let v: f64 = text
        .parse()
        .map_err(|_| PaintError::InvalidColor(format!("bad percentage in {original:?}")))?;
    if v > 100.0 {
        return Err(PaintError::InvalidColor(format!(
            "percentage {v}% out of range in {original:?}"
        )));
    }
    Ok(v / 100.0)
}

fn opt_alpha(text: Option<&str>, original: &str) -> Result<f64> {
    let Some(text) = text else {
        return Ok(1.0);
    };
    let v: f64 = text
        .parse()
        .map_err(|_| PaintError::InvalidColor(format!("bad alpha in {original:?}")))?;
    if v > 1.0 {
        return Err(PaintError::InvalidColor(format!(
            "alpha {v} out of range in {original:?}"
        )));
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_modes() -> ColorModeState {
        ColorModeState::new()
    }

    #[test]
    fn test_short_hex_doubles_digits() {
        let modes = default_modes();
        let from_hex = parse(&modes, &"#fae".into()).unwrap();
        let from_channels = parse(&modes, &(255.0, 170.0, 238.0).into()).unwrap();
        assert_eq!(from_hex.normalized(), from_channels.normalized());
    }

    #[test]
    fn test_long_hex() {
        let modes = default_modes();
        let c = parse(&modes, &"#ff0080".into()).unwrap();
        let [r, g, b, a] = c.normalized();
        assert_eq!(r, 1.0);
        assert_eq!(g, 0.0);
        assert!((b - 128.0 / 255.0).abs() < 1e-12);
        assert_eq!(a, 1.0);
    }

    #[test]
    fn test_hex_with_alpha() {
        let modes = default_modes();
        let c = parse(&modes, &"#00000000".into()).unwrap();
        assert_eq!(c.normalized(), [0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_named_color() {
        let modes = default_modes();
        let c = parse(&modes, &"red".into()).unwrap();
        assert_eq!(c.normalized(), [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_named_color_case_and_whitespace() {
        let modes = default_modes();
        let c = parse(&modes, &"  ToMaTo ".into()).unwrap();
        let reference = parse(&modes, &"#ff6347".into()).unwrap();
        assert_eq!(c.normalized(), reference.normalized());
    }

    #[test]
    fn test_rgb_function() {
        let modes = default_modes();
        let c = parse(&modes, &"rgb(255, 0, 0)".into()).unwrap();
        assert_eq!(c.normalized(), [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_rgba_function() {
        let modes = default_modes();
        let c = parse(&modes, &"rgba(0, 255, 0, 0.5)".into()).unwrap();
        assert_eq!(c.normalized(), [0.0, 1.0, 0.0, 0.5]);
    }

    #[test]
    fn test_rgb_percent_function() {
        let modes = default_modes();
        let c = parse(&modes, &"rgb(100%, 0%, 50%)".into()).unwrap();
        assert_eq!(c.normalized(), [1.0, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_hsl_function() {
        let modes = default_modes();
        let c = parse(&modes, &"hsl(0, 100%, 50%)".into()).unwrap();
        assert_eq!(c.normalized(), [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_hsb_function() {
        let modes = default_modes();
        let c = parse(&modes, &"hsb(120, 100%, 100%)".into()).unwrap();
        let [r, g, b, a] = c.normalized();
        assert!(r.abs() < 1e-9);
        assert!((g - 1.0).abs() < 1e-9);
        assert!(b.abs() < 1e-9);
        assert_eq!(a, 1.0);
    }

    #[test]
    fn test_string_ignores_active_ranges() {
        let mut modes = default_modes();
        modes.set_mode(ColorSpace::Rgb, &[1.0]);
        let c = parse(&modes, &"rgb(255, 0, 0)".into()).unwrap();
        assert_eq!(c.normalized(), [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_string_alpha_override_uses_active_range() {
        let mut modes = default_modes();
        modes.set_mode(ColorSpace::Rgb, &[255.0, 255.0, 255.0, 100.0]);
        let c = parse(&modes, &("red", 50.0).into()).unwrap();
        assert_eq!(c.normalized(), [1.0, 0.0, 0.0, 0.5]);
    }

    #[test]
    fn test_values_arities() {
        let modes = default_modes();
        assert_eq!(
            parse(&modes, &[127.5].into()).unwrap().normalized(),
            [0.5, 0.5, 0.5, 1.0]
        );
        assert_eq!(
            parse(&modes, &[255.0, 0.0, 0.0].into()).unwrap().normalized(),
            [1.0, 0.0, 0.0, 1.0]
        );
        assert_eq!(
            parse(&modes, &[255.0, 0.0, 0.0, 127.5].into())
                .unwrap()
                .normalized(),
            [1.0, 0.0, 0.0, 0.5]
        );
    }

    #[test]
    fn test_two_values_rejected() {
        let modes = default_modes();
        let err = parse(&modes, &[1.0, 2.0].into()).unwrap_err();
        assert!(matches!(err, PaintError::InvalidColor(_)));
    }

    #[test]
    fn test_unrecognized_string_rejected() {
        let modes = default_modes();
        let err = parse(&modes, &"blurple".into()).unwrap_err();
        assert!(err.to_string().contains("blurple"));
    }

    #[test]
    fn test_bad_hex_rejected() {
        let modes = default_modes();
        assert!(parse(&modes, &"#12345".into()).is_err());
        assert!(parse(&modes, &"#ggg".into()).is_err());
    }

    #[test]
    fn test_out_of_range_rejected() {
        let modes = default_modes();
        assert!(parse(&modes, &"rgb(300, 0, 0)".into()).is_err());
        assert!(parse(&modes, &"rgb(110%, 0%, 0%)".into()).is_err());
        assert!(parse(&modes, &"rgba(0, 0, 0, 1.5)".into()).is_err());
    }

    #[test]
    fn test_prior_color_passes_through() {
        let mut modes = default_modes();
        modes.set_mode(ColorSpace::Hsb, &[]);
        let original = Color::from_channels(&modes, 0.0, 100.0, 100.0, None);

        // A later mode change must not affect reinterpretation.
        modes.set_mode(ColorSpace::Rgb, &[1.0]);
        let reparsed = parse(&modes, &original.into()).unwrap();
        assert_eq!(reparsed.normalized(), [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_prior_alpha_override_uses_captured_range() {
        let modes = default_modes();
        // Captured alpha range is 0-255 here, even if the registry later
        // moves to an alpha range of 0-1.
        let original = Color::from_channels(&modes, 255.0, 0.0, 0.0, None);
        let mut later = modes;
        later.set_mode(ColorSpace::Rgb, &[1.0]);
        let reparsed = parse(&later, &(original, 127.5).into()).unwrap();
        assert_eq!(reparsed.normalized()[3], 0.5);
    }

    #[test]
    fn test_with_alpha_on_values() {
        let modes = default_modes();
        let input = ColorInput::from([255.0, 0.0, 0.0]).with_alpha(127.5);
        assert_eq!(
            parse(&modes, &input).unwrap().normalized(),
            [1.0, 0.0, 0.0, 0.5]
        );
    }
}
