use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaintError {
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Image is {image_width}x{image_height} but the surface is {surface_width}x{surface_height}")]
    ImageSizeMismatch {
        image_width: u32,
        image_height: u32,
        surface_width: u32,
        surface_height: u32,
    },

    #[error("Render error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, PaintError>;
