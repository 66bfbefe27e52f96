use anyhow::{Context, Result};
use std::path::Path;

use image::imageops::FilterType;
use image::ImageReader;

/// Longest side of the display thumbnail.
pub const THUMBNAIL_EDGE: u32 = 200;

/// Decode an image and produce display-only RGBA thumbnail pixels.
///
/// The thumbnail is bounded to THUMBNAIL_EDGE on its longest side and is
/// never used as model input. Images already within bounds are kept as is.
pub fn load_thumbnail(path: &Path) -> Result<([usize; 2], Vec<u8>)> {
    let image = ImageReader::open(path)
        .with_context(|| format!("read {}", path.display()))?
        .decode()
        .with_context(|| format!("decode {}", path.display()))?;

    let thumb = if image.width() <= THUMBNAIL_EDGE && image.height() <= THUMBNAIL_EDGE {
        image
    } else {
        image.resize(THUMBNAIL_EDGE, THUMBNAIL_EDGE, FilterType::Lanczos3)
    };

    let size = [thumb.width() as usize, thumb.height() as usize];
    Ok((size, thumb.to_rgba8().into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_landscape_thumbnail_bounded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.jpg");
        RgbImage::from_pixel(500, 375, Rgb([90, 90, 90])).save(&path).unwrap();

        let (size, pixels) = load_thumbnail(&path).unwrap();
        assert_eq!(size, [200, 150]);
        assert_eq!(pixels.len(), 200 * 150 * 4);
    }

    #[test]
    fn test_portrait_thumbnail_bounded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.png");
        RgbImage::from_pixel(300, 600, Rgb([12, 34, 56])).save(&path).unwrap();

        let (size, _) = load_thumbnail(&path).unwrap();
        assert_eq!(size, [100, 200]);
    }

    #[test]
    fn test_small_image_not_upscaled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.png");
        RgbImage::from_pixel(32, 32, Rgb([1, 2, 3])).save(&path).unwrap();

        let (size, _) = load_thumbnail(&path).unwrap();
        assert_eq!(size, [32, 32]);
    }

    #[test]
    fn test_renamed_text_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.jpg");
        std::fs::write(&path, "definitely not a jpeg").unwrap();

        assert!(load_thumbnail(&path).is_err());
    }
}
