//! Color-mode bookkeeping for a drawing context.
//!
//! Every paint call interprets raw channel numbers through the currently
//! active [`ColorSpace`] and its [`ChannelRanges`]. Ranges are stored per
//! space and survive mode switches, so switching to HSB and back to RGB
//! restores whatever RGB ranges the caller configured earlier.

/// A color space for interpreting raw channel values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorSpace {
    /// Red, green, blue
    Rgb,
    /// Hue, saturation, brightness
    Hsb,
    /// Hue, saturation, lightness
    Hsl,
}

impl ColorSpace {
    /// Short lowercase name, as it appears in CSS-style notation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorSpace::Rgb => "rgb",
            ColorSpace::Hsb => "hsb",
            ColorSpace::Hsl => "hsl",
        }
    }
}

/// Maximum values for the three chroma channels and alpha.
///
/// A raw channel value `v` for channel `i` is interpreted as `v / max_i`.
/// Each max is expected to be a positive real number.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelRanges {
    pub max1: f64,
    pub max2: f64,
    pub max3: f64,
    pub max_alpha: f64,
}

impl ChannelRanges {
    pub fn new(max1: f64, max2: f64, max3: f64, max_alpha: f64) -> Self {
        Self {
            max1,
            max2,
            max3,
            max_alpha,
        }
    }

    /// All four channels share the same maximum.
    pub fn uniform(max: f64) -> Self {
        Self::new(max, max, max, max)
    }
}

/// The color-mode registry of one drawing context.
///
/// Holds the active color space and one range tuple per space. Mutated only
/// by [`set_mode`](Self::set_mode); read by every paint-state operation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorModeState {
    active: ColorSpace,
    rgb: ChannelRanges,
    hsb: ChannelRanges,
    hsl: ChannelRanges,
}

impl Default for ColorModeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorModeState {
    /// RGB mode with the conventional defaults: RGB channels 0-255,
    /// HSB/HSL hue 0-360, saturation and brightness/lightness 0-100,
    /// alpha 0-1.
    pub fn new() -> Self {
        Self {
            active: ColorSpace::Rgb,
            rgb: ChannelRanges::uniform(255.0),
            hsb: ChannelRanges::new(360.0, 100.0, 100.0, 1.0),
            hsl: ChannelRanges::new(360.0, 100.0, 100.0, 1.0),
        }
    }

    /// Activate `space` and optionally reconfigure its ranges.
    ///
    /// Accepted `maxes` lengths:
    /// - 0: switch the active space only, ranges unchanged
    /// - 1: all four channels set to the one value
    /// - 3: chroma channels set individually, alpha untouched
    /// - 4: all four set individually
    ///
    /// Any other length degrades to the 0-length case. Only the range tuple
    /// of `space` is ever touched; the other spaces keep their configuration.
    pub fn set_mode(&mut self, space: ColorSpace, maxes: &[f64]) {
        let ranges = self.ranges_for_mut(space);
        match maxes {
            &[max] => *ranges = ChannelRanges::uniform(max),
            &[max1, max2, max3] => {
                ranges.max1 = max1;
                ranges.max2 = max2;
                ranges.max3 = max3;
            }
            &[max1, max2, max3, max_alpha] => {
                *ranges = ChannelRanges::new(max1, max2, max3, max_alpha);
            }
            _ => {}
        }
        self.active = space;
    }

    /// The currently active color space.
    pub fn active(&self) -> ColorSpace {
        self.active
    }

    /// The range tuple of the currently active space.
    pub fn ranges(&self) -> ChannelRanges {
        self.ranges_for(self.active)
    }

    /// The range tuple of `space`, active or not.
    pub fn ranges_for(&self, space: ColorSpace) -> ChannelRanges {
        match space {
            ColorSpace::Rgb => self.rgb,
            ColorSpace::Hsb => self.hsb,
            ColorSpace::Hsl => self.hsl,
        }
    }

    fn ranges_for_mut(&mut self, space: ColorSpace) -> &mut ChannelRanges {
        match space {
            ColorSpace::Rgb => &mut self.rgb,
            ColorSpace::Hsb => &mut self.hsb,
            ColorSpace::Hsl => &mut self.hsl,
        }
    }
}
