//! The normalized color value object.
//!
//! A [`Color`] holds four renderer-space channel values in `[0, 1]` (RGBA)
//! together with the color-mode state captured when it was built. Once
//! constructed, a color is decoupled from the registry: later `color_mode`
//! calls do not change how it reads back, and an alpha override applied to
//! it is interpreted through its own captured alpha range.

use crate::color::mode::{ColorModeState, ColorSpace};

/// A color, normalized to renderer space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// RGBA channel values in [0, 1].
    channels: [f64; 4],
    /// Mode state captured at construction time.
    modes: ColorModeState,
}

impl Color {
    /// Build a color from three raw chroma values and an optional raw alpha,
    /// interpreted through the active space and ranges of `modes`.
    ///
    /// RGB channels divide by their maxes and clamp to [0, 1]. HSB/HSL
    /// channels are scaled to canonical hue/saturation/value first and then
    /// converted to RGB; hue wraps instead of clamping, so 380 in a 0-360
    /// range reads as 20.
    pub fn from_channels(
        modes: &ColorModeState,
        v1: f64,
        v2: f64,
        v3: f64,
        alpha: Option<f64>,
    ) -> Self {
        let ranges = modes.ranges();
        let a = alpha.map_or(1.0, |a| (a / ranges.max_alpha).clamp(0.0, 1.0));
        let [r, g, b] = match modes.active() {
            ColorSpace::Rgb => [
                (v1 / ranges.max1).clamp(0.0, 1.0),
                (v2 / ranges.max2).clamp(0.0, 1.0),
                (v3 / ranges.max3).clamp(0.0, 1.0),
            ],
            ColorSpace::Hsb => hsb_to_rgb(
                v1 / ranges.max1,
                (v2 / ranges.max2).clamp(0.0, 1.0),
                (v3 / ranges.max3).clamp(0.0, 1.0),
            ),
            ColorSpace::Hsl => hsl_to_rgb(
                v1 / ranges.max1,
                (v2 / ranges.max2).clamp(0.0, 1.0),
                (v3 / ranges.max3).clamp(0.0, 1.0),
            ),
        };
        Self {
            channels: [r, g, b, a],
            modes: *modes,
        }
    }

    /// Build an RGB gray from a single raw value.
    ///
    /// The value normalizes against the third channel max, which reads as
    /// brightness in HSB and lightness in HSL, and maps straight to an RGB
    /// gray in every mode.
    pub fn from_gray(modes: &ColorModeState, value: f64, alpha: Option<f64>) -> Self {
        let ranges = modes.ranges();
        let g = (value / ranges.max3).clamp(0.0, 1.0);
        let a = alpha.map_or(1.0, |a| (a / ranges.max_alpha).clamp(0.0, 1.0));
        Self {
            channels: [g, g, g, a],
            modes: *modes,
        }
    }

    /// Build a color from channels already in renderer space, e.g. parsed
    /// from a CSS string.
    pub(crate) fn from_normalized(modes: &ColorModeState, rgba: [f64; 4]) -> Self {
        Self {
            channels: rgba.map(|c| c.clamp(0.0, 1.0)),
            modes: *modes,
        }
    }

    /// Opaque black under the default mode state.
    pub fn black() -> Self {
        Self::from_normalized(&ColorModeState::new(), [0.0, 0.0, 0.0, 1.0])
    }

    /// Opaque white under the default mode state.
    pub fn white() -> Self {
        Self::from_normalized(&ColorModeState::new(), [1.0, 1.0, 1.0, 1.0])
    }

    /// Replace the alpha channel with a raw value interpreted through this
    /// color's captured alpha range.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        let max_alpha = self.modes.ranges().max_alpha;
        self.channels[3] = (alpha / max_alpha).clamp(0.0, 1.0);
        self
    }

    /// RGBA channels in renderer space, each in [0, 1].
    pub fn normalized(&self) -> [f64; 4] {
        self.channels
    }

    /// The color space this color was built under.
    pub fn space(&self) -> ColorSpace {
        self.modes.active()
    }

    /// The mode state captured at construction time.
    pub fn captured_modes(&self) -> &ColorModeState {
        &self.modes
    }

    /// Red channel scaled through the captured RGB range.
    pub fn red(&self) -> f64 {
        self.channels[0] * self.modes.ranges_for(ColorSpace::Rgb).max1
    }

    /// Green channel scaled through the captured RGB range.
    pub fn green(&self) -> f64 {
        self.channels[1] * self.modes.ranges_for(ColorSpace::Rgb).max2
    }

    /// Blue channel scaled through the captured RGB range.
    pub fn blue(&self) -> f64 {
        self.channels[2] * self.modes.ranges_for(ColorSpace::Rgb).max3
    }

    /// Alpha scaled through the captured alpha range of the captured space.
    pub fn alpha(&self) -> f64 {
        self.channels[3] * self.modes.ranges().max_alpha
    }
}

/// Convert canonical HSB (all in [0, 1], hue wrapping) to RGB.
fn hsb_to_rgb(h: f64, s: f64, v: f64) -> [f64; 3] {
    let h = wrap_hue(h);
    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);
    match (i as i64).rem_euclid(6) {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, q, p],
    }
}

/// Convert canonical HSL (all in [0, 1], hue wrapping) to RGB.
fn hsl_to_rgb(h: f64, s: f64, l: f64) -> [f64; 3] {
    if s == 0.0 {
        return [l, l, l];
    }
    let h = wrap_hue(h);
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    [
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    ]
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn wrap_hue(h: f64) -> f64 {
    let h = h % 1.0;
    if h < 0.0 {
        h + 1.0
    } else {
        h
    }
}
