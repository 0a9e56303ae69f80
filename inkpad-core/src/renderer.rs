//! The rendering backend boundary.
//!
//! The paint-state layer normalizes caller arguments and forwards one
//! instruction per call to a [`Renderer`]. Backends own rasterization,
//! compositing, and blending; this module only fixes the instruction
//! vocabulary and ships [`RecordingRenderer`], an in-memory backend that
//! logs every instruction for tests and demos.

use crate::color::Color;
use crate::error::{PaintError, Result};
use crate::image::Image;

/// One normalized instruction as received by a backend.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Instruction {
    /// Subsequent fills use this RGBA color until changed.
    SetFillColor([f64; 4]),
    /// Subsequent strokes use this RGBA color until changed.
    SetStrokeColor([f64; 4]),
    /// Overwrite the entire surface with this RGBA color.
    PaintBackground([f64; 4]),
    /// Overwrite the entire surface with an image.
    PaintBackgroundImage {
        width: u32,
        height: u32,
        alpha: Option<f64>,
    },
    /// Reset the surface with four raw renderer-space values.
    ClearBuffer([f64; 4]),
    /// Switch to subtractive compositing for fill/stroke draws.
    BeginErase {
        fill_strength: f64,
        stroke_strength: f64,
    },
    /// Restore the compositing state from before the matching begin.
    EndErase,
}

/// A rendering backend.
///
/// Implementations are expected to honor two contracts beyond the obvious:
/// background and image paints issued between [`begin_erase`] and
/// [`end_erase`] bypass the subtractive composite and behave as normal
/// paints, and [`clear_buffer`] receives raw renderer-space values to apply
/// with the backend's own semantics (a 3D backend may clear its depth buffer
/// here, for example).
///
/// [`begin_erase`]: Renderer::begin_erase
/// [`end_erase`]: Renderer::end_erase
/// [`clear_buffer`]: Renderer::clear_buffer
pub trait Renderer {
    fn set_fill_color(&mut self, color: &Color) -> Result<()>;

    fn set_stroke_color(&mut self, color: &Color) -> Result<()>;

    fn paint_background(&mut self, color: &Color) -> Result<()>;

    /// Paint an image over the whole surface. Backends that cannot place a
    /// mismatched image report [`PaintError::ImageSizeMismatch`].
    fn paint_background_image(&mut self, image: &Image, alpha: Option<f64>) -> Result<()>;

    fn clear_buffer(&mut self, channels: [f64; 4]) -> Result<()>;

    /// Enter erase compositing. Strengths are on a fixed 0-255 scale; the
    /// fill strength governs fill-based draws, the stroke strength
    /// stroke-based ones.
    fn begin_erase(&mut self, fill_strength: f64, stroke_strength: f64) -> Result<()>;

    fn end_erase(&mut self) -> Result<()>;
}

/// A backend that records every instruction it receives.
///
/// Rejects background images whose dimensions differ from its surface,
/// which makes it a faithful stand-in for backends that cannot stretch.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    surface_width: u32,
    surface_height: u32,
    instructions: Vec<Instruction>,
}

impl RecordingRenderer {
    pub fn new(surface_width: u32, surface_height: u32) -> Self {
        Self {
            surface_width,
            surface_height,
            instructions: Vec::new(),
        }
    }

    /// Every instruction received so far, in order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// The most recent instruction, if any.
    pub fn last(&self) -> Option<&Instruction> {
        self.instructions.last()
    }

    /// Forget all recorded instructions.
    pub fn clear_log(&mut self) {
        self.instructions.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn set_fill_color(&mut self, color: &Color) -> Result<()> {
        self.instructions
            .push(Instruction::SetFillColor(color.normalized()));
        Ok(())
    }

    fn set_stroke_color(&mut self, color: &Color) -> Result<()> {
        self.instructions
            .push(Instruction::SetStrokeColor(color.normalized()));
        Ok(())
    }

    fn paint_background(&mut self, color: &Color) -> Result<()> {
        self.instructions
            .push(Instruction::PaintBackground(color.normalized()));
        Ok(())
    }

    fn paint_background_image(&mut self, image: &Image, alpha: Option<f64>) -> Result<()> {
        if image.width() != self.surface_width || image.height() != self.surface_height {
            return Err(PaintError::ImageSizeMismatch {
                image_width: image.width(),
                image_height: image.height(),
                surface_width: self.surface_width,
                surface_height: self.surface_height,
            });
        }
        self.instructions.push(Instruction::PaintBackgroundImage {
            width: image.width(),
            height: image.height(),
            alpha,
        });
        Ok(())
    }

    fn clear_buffer(&mut self, channels: [f64; 4]) -> Result<()> {
        self.instructions.push(Instruction::ClearBuffer(channels));
        Ok(())
    }

    fn begin_erase(&mut self, fill_strength: f64, stroke_strength: f64) -> Result<()> {
        self.instructions.push(Instruction::BeginErase {
            fill_strength,
            stroke_strength,
        });
        Ok(())
    }

    fn end_erase(&mut self) -> Result<()> {
        self.instructions.push(Instruction::EndErase);
        Ok(())
    }
}
