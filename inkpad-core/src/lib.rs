//! # inkpad
//!
//! The color-mode state machine and paint-state dispatcher of a 2D sketching
//! surface, decoupled from any particular rendering backend.
//!
//! ## Features
//!
//! - **Color modes**: RGB, HSB, and HSL interpretation with per-space,
//!   independently configurable channel ranges that persist across switches
//! - **Shape-polymorphic color arguments**: grayscale numbers, channel
//!   triplets, arrays, CSS-style strings, and previously built colors all
//!   funnel into one normalized representation
//! - **Paint state**: fill/stroke colors and toggles with explicit-set
//!   tracking
//! - **Erase mode**: subtractive compositing with a guaranteed-restorable
//!   paint-state snapshot
//! - **Backend-agnostic**: one small [`Renderer`] trait; the crate ships
//!   [`RecordingRenderer`] for tests and headless use
//!
//! ## Quick Start
//!
//! ```rust
//! use inkpad::{ColorSpace, DrawingContext, Instruction, RecordingRenderer, Result};
//!
//! # fn main() -> Result<()> {
//! let mut ctx = DrawingContext::new(RecordingRenderer::new(400, 400));
//!
//! // Work in HSB with hue 0-360 and percentages for the rest.
//! ctx.color_mode(ColorSpace::Hsb, &[360.0, 100.0, 100.0, 1.0]);
//!
//! // Pure red, expressed three ways.
//! ctx.fill((0.0, 100.0, 100.0))?
//!     .stroke("#f00")?
//!     .background("rgb(255, 0, 0)")?;
//!
//! assert_eq!(
//!     ctx.renderer().instructions(),
//!     &[
//!         Instruction::SetFillColor([1.0, 0.0, 0.0, 1.0]),
//!         Instruction::SetStrokeColor([1.0, 0.0, 0.0, 1.0]),
//!         Instruction::PaintBackground([1.0, 0.0, 0.0, 1.0]),
//!     ]
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`color`] - color spaces, range bookkeeping, argument parsing, and the
//!   normalized color value
//! - [`paint`] - the drawing context and its paint-state operations
//! - [`renderer`] - the backend boundary and the recording backend
//! - [`image`] - image handles for background painting

pub mod color;
pub mod error;
pub mod image;
pub mod paint;
pub mod renderer;

pub use color::{parse, ChannelRanges, Color, ColorInput, ColorModeState, ColorSpace};
pub use error::{PaintError, Result};
pub use image::Image;
pub use paint::{DrawingContext, PaintState};
pub use renderer::{Instruction, RecordingRenderer, Renderer};

/// Current version of inkpad
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context() {
        let ctx = DrawingContext::new(RecordingRenderer::new(100, 100));
        assert_eq!(ctx.modes().active(), ColorSpace::Rgb);
        assert!(ctx.state().do_fill);
        assert!(!ctx.is_erasing());
    }

    #[test]
    fn test_independent_contexts() {
        let mut a = DrawingContext::new(RecordingRenderer::new(10, 10));
        let b = DrawingContext::new(RecordingRenderer::new(10, 10));
        a.color_mode(ColorSpace::Hsb, &[1.0]);
        assert_eq!(b.modes().active(), ColorSpace::Rgb);
    }

    #[test]
    fn test_version_info() {
        assert!(!VERSION.is_empty());
    }
}
