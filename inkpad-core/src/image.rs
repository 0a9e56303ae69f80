//! Image handles for background painting.
//!
//! Decoding is a renderer concern; an [`Image`] carries already-decoded RGBA
//! bytes plus dimensions, which is all the paint-state layer needs to hand a
//! background instruction to the backend.

use crate::error::{PaintError, Result};

/// An RGBA image that can be painted as a background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Image {
    /// Create an image from raw RGBA bytes, 4 bytes per pixel.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(PaintError::InvalidImage(format!(
                "expected {expected} bytes for {width}x{height} RGBA, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A single-color image, useful for tests and demos.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let pixels = width as usize * height as usize;
        let mut data = Vec::with_capacity(pixels * 4);
        for _ in 0..pixels {
            data.extend_from_slice(&rgba);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgba_valid() {
        let img = Image::from_rgba(2, 2, vec![0; 16]).unwrap();
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 2);
        assert_eq!(img.data().len(), 16);
    }

    #[test]
    fn test_from_rgba_wrong_length() {
        let err = Image::from_rgba(2, 2, vec![0; 15]).unwrap_err();
        assert!(matches!(err, PaintError::InvalidImage(_)));
    }

    #[test]
    fn test_solid() {
        let img = Image::solid(3, 1, [255, 0, 0, 255]);
        assert_eq!(img.data(), &[255, 0, 0, 255, 255, 0, 0, 255, 255, 0, 0, 255]);
    }
}
