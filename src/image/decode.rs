// Image decoding.
// Decodes fetched bytes into an RGBA buffer sized for the consuming view.

use image::imageops::FilterType;

use crate::error::ImageLoadError;

use super::reference::RequestOptions;

/// Raw RGBA image data, ready to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl DecodedImage {
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        debug_assert_eq!(
            rgba.len(),
            (width * height * 4) as usize,
            "RGBA buffer size mismatch"
        );
        Self {
            width,
            height,
            rgba,
        }
    }

    /// RGBA value at (x, y), or None outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        let px = self.rgba.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Decode image bytes, then scale and crop to the requested size if any.
pub fn decode(bytes: &[u8], options: &RequestOptions) -> Result<DecodedImage, ImageLoadError> {
    let img = image::load_from_memory(bytes)?;
    let img = match options.size {
        Some((w, h)) => img.resize_to_fill(w.max(1), h.max(1), FilterType::Triangle),
        None => img,
    };
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(DecodedImage::new(width, height, rgba.into_raw()))
}
