//! Image preprocessing for model input.
//!
//! Decode, convert to RGB, resize to the model's 32x32 input, scale to
//! [0,1] and add the leading batch dimension.

use std::path::Path;

use image::imageops::FilterType;
use image::ImageReader;
use ndarray::Array4;

use crate::error::Result;

/// Spatial input size of the model (width == height).
pub const INPUT_SIZE: u32 = 32;

/// Build the (1, 32, 32, 3) NHWC input tensor for one image file.
///
/// The tensor is derived from the original file, never from a display
/// thumbnail.
pub fn image_to_input(path: &Path) -> Result<Array4<f32>> {
    let image = ImageReader::open(path)?.decode()?;

    let rgb = image.to_rgb8();
    let resized = image::imageops::resize(&rgb, INPUT_SIZE, INPUT_SIZE, FilterType::Triangle);

    let tensor = Array4::from_shape_fn(
        (1, INPUT_SIZE as usize, INPUT_SIZE as usize, 3),
        |(_, y, x, c)| resized.get_pixel(x as u32, y as u32)[c] as f32 / 255.0,
    );

    Ok(tensor)
}
