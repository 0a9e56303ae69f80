//! The paint-state dispatcher.
//!
//! [`DrawingContext`] owns the color-mode registry, the paint-state flags,
//! the erase snapshot, and the rendering backend. Each operation normalizes
//! its arguments through the active color mode, mutates local state, and
//! forwards exactly one instruction to the backend. Every mutator hands the
//! context back for chaining, so call sites read fluently:
//!
//! ```
//! use inkpad::{ColorSpace, DrawingContext, RecordingRenderer, Result};
//!
//! # fn main() -> Result<()> {
//! let mut ctx = DrawingContext::new(RecordingRenderer::new(400, 400));
//! ctx.color_mode(ColorSpace::Hsb, &[360.0, 100.0, 100.0, 1.0])
//!     .background("#202020")?
//!     .no_stroke()
//!     .fill((0.0, 100.0, 100.0))?;
//! # Ok(())
//! # }
//! ```
//!
//! Failure is atomic: if an argument fails to parse, the call returns the
//! error before any flag is touched or any instruction is sent.

mod state;

pub use state::PaintState;
use state::EraseSnapshot;

use tracing::debug;

use crate::color::{parse, ColorInput, ColorModeState, ColorSpace};
use crate::error::Result;
use crate::image::Image;
use crate::renderer::Renderer;

const DEFAULT_ERASE_STRENGTH: f64 = 255.0;

/// A drawing context: one surface's color-mode and paint state, bound to a
/// rendering backend.
#[derive(Debug, Clone)]
pub struct DrawingContext<R: Renderer> {
    renderer: R,
    modes: ColorModeState,
    paint: PaintState,
    erase: Option<EraseSnapshot>,
}

impl<R: Renderer> DrawingContext<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            modes: ColorModeState::new(),
            paint: PaintState::new(),
            erase: None,
        }
    }

    /// The bound backend.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Consume the context and hand the backend back.
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// The color-mode registry.
    pub fn modes(&self) -> &ColorModeState {
        &self.modes
    }

    /// The current paint-state flags and colors.
    pub fn state(&self) -> &PaintState {
        &self.paint
    }

    /// Whether an erase snapshot is outstanding.
    pub fn is_erasing(&self) -> bool {
        self.erase.is_some()
    }

    /// Activate a color space and optionally reconfigure its ranges.
    ///
    /// `maxes` takes 0, 1, 3, or 4 values as described on
    /// [`ColorModeState::set_mode`]; any other length switches the space and
    /// leaves the ranges as configured. Ranges of the other spaces are never
    /// touched, so switching back later restores them exactly.
    pub fn color_mode(&mut self, space: ColorSpace, maxes: &[f64]) -> &mut Self {
        self.modes.set_mode(space, maxes);
        debug!(space = space.as_str(), "color mode");
        self
    }

    /// Set the fill color and enable filling.
    ///
    /// Accepts a grayscale number, `(gray, alpha)`, three or four raw
    /// channels, an array, a CSS string, or a prior color; raw numbers are
    /// interpreted through the active color mode.
    pub fn fill<I: Into<ColorInput>>(&mut self, input: I) -> Result<&mut Self> {
        let color = parse(&self.modes, &input.into())?;
        self.paint.fill_set = true;
        self.paint.do_fill = true;
        self.paint.fill_color = color;
        self.renderer.set_fill_color(&color)?;
        Ok(self)
    }

    /// Set the stroke color and enable stroking. Same shapes as [`fill`].
    ///
    /// [`fill`]: DrawingContext::fill
    pub fn stroke<I: Into<ColorInput>>(&mut self, input: I) -> Result<&mut Self> {
        let color = parse(&self.modes, &input.into())?;
        self.paint.stroke_set = true;
        self.paint.do_stroke = true;
        self.paint.stroke_color = color;
        self.renderer.set_stroke_color(&color)?;
        Ok(self)
    }

    /// Disable filling. The stored fill color and `fill_set` survive, so a
    /// later [`fill`](DrawingContext::fill) re-enables from a clean slate.
    pub fn no_fill(&mut self) -> &mut Self {
        self.paint.do_fill = false;
        self
    }

    /// Disable stroking. Counterpart of [`no_fill`](DrawingContext::no_fill).
    pub fn no_stroke(&mut self) -> &mut Self {
        self.paint.do_stroke = false;
        self
    }

    /// Paint the whole surface with a color. Takes the same shapes as
    /// [`fill`](DrawingContext::fill) and leaves the paint state untouched.
    pub fn background<I: Into<ColorInput>>(&mut self, input: I) -> Result<&mut Self> {
        let color = parse(&self.modes, &input.into())?;
        self.renderer.paint_background(&color)?;
        Ok(self)
    }

    /// Paint the whole surface with an image, optionally at a raw alpha
    /// interpreted through the active alpha range.
    ///
    /// No color parsing is involved; dimension checking is the backend's
    /// business, and a mismatch surfaces as
    /// [`PaintError::ImageSizeMismatch`](crate::PaintError::ImageSizeMismatch).
    pub fn background_image(&mut self, image: &Image, alpha: Option<f64>) -> Result<&mut Self> {
        let alpha = alpha.map(|a| (a / self.modes.ranges().max_alpha).clamp(0.0, 1.0));
        self.renderer.paint_background_image(image, alpha)?;
        Ok(self)
    }

    /// Clear the surface. Equivalent to `clear_to(0.0, 0.0, 0.0, 0.0)`.
    pub fn clear(&mut self) -> Result<&mut Self> {
        self.clear_to(0.0, 0.0, 0.0, 0.0)
    }

    /// Clear the surface with four raw renderer-space values.
    ///
    /// Unlike [`background`](DrawingContext::background), the values are
    /// forwarded as-is and never reinterpreted through the active color
    /// mode; what a backend does with them (including depth-buffer resets in
    /// 3D contexts) is its own contract.
    pub fn clear_to(&mut self, r: f64, g: f64, b: f64, a: f64) -> Result<&mut Self> {
        self.renderer.clear_buffer([r, g, b, a])?;
        Ok(self)
    }

    /// Enter erase mode at full strength. See
    /// [`erase_with`](DrawingContext::erase_with).
    pub fn erase(&mut self) -> Result<&mut Self> {
        self.erase_with(DEFAULT_ERASE_STRENGTH, DEFAULT_ERASE_STRENGTH)
    }

    /// Enter erase mode: subsequent fill/stroke draws subtract coverage from
    /// the surface instead of adding to it.
    ///
    /// Strengths are on a fixed 0-255 scale, independent of the active color
    /// mode. The paint state is snapshotted on first entry; calling again
    /// while erasing updates the strengths but keeps the original snapshot.
    /// Background and image paints issued while erasing bypass the
    /// subtractive composite per the [`Renderer`] contract.
    pub fn erase_with(&mut self, fill_strength: f64, stroke_strength: f64) -> Result<&mut Self> {
        if self.erase.is_none() {
            self.erase = Some(EraseSnapshot { paint: self.paint });
            debug!(fill_strength, stroke_strength, "enter erase");
        }
        self.renderer.begin_erase(fill_strength, stroke_strength)?;
        Ok(self)
    }

    /// Leave erase mode, restoring the paint state captured at the matching
    /// [`erase`](DrawingContext::erase). A no-op when not erasing.
    pub fn no_erase(&mut self) -> Result<&mut Self> {
        if let Some(snapshot) = self.erase.take() {
            self.paint = snapshot.paint;
            self.renderer.end_erase()?;
            debug!("exit erase");
        }
        Ok(self)
    }
}
