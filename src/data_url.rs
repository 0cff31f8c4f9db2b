//! Helpers that turn image bytes into base64 data URLs for multimodal inputs

use crate::error::{Result, VoyageError};
use base64::Engine;
use image::ImageFormat;
use std::io::{Cursor, Read};
use std::path::Path;

fn media_subtype(format: ImageFormat) -> Option<&'static str> {
    match format {
        ImageFormat::Png => Some("png"),
        ImageFormat::Jpeg => Some("jpeg"),
        ImageFormat::Gif => Some("gif"),
        _ => None,
    }
}

/// Decode an image and return it as `data:image/<fmt>;base64,<payload>`
///
/// The image is re-encoded in its detected format, so corrupt input fails
/// here rather than at the API. PNG, JPEG and GIF are supported.
pub fn from_bytes(bytes: &[u8]) -> Result<String> {
    let format = image::guess_format(bytes)?;
    let subtype = media_subtype(format)
        .ok_or_else(|| VoyageError::Image(format!("cannot encode image of type: {:?}", format)))?;

    let decoded = image::load_from_memory_with_format(bytes, format)?;

    let mut encoded = Cursor::new(Vec::new());
    decoded.write_to(&mut encoded, format)?;

    let payload = base64::engine::general_purpose::STANDARD.encode(encoded.into_inner());
    Ok(format!("data:image/{};base64,{}", subtype, payload))
}

/// Read all image data from `reader` and encode it as a data URL
pub fn from_reader<R: Read>(mut reader: R) -> Result<String> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| VoyageError::Image(format!("read image: {}", e)))?;
    from_bytes(&bytes)
}

pub fn from_path<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .map_err(|e| VoyageError::Image(format!("read {}: {}", path.display(), e)))?;
    from_bytes(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgba, RgbaImage};

    fn png_bytes() -> Vec<u8> {
        let img = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 255]));
        let mut out = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img)
            .write_to(&mut out, ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    #[test]
    fn test_png_data_url() {
        let url = from_bytes(&png_bytes()).unwrap();
        let payload = url.strip_prefix("data:image/png;base64,").unwrap();

        let raw = base64::engine::general_purpose::STANDARD.decode(payload).unwrap();
        assert_eq!(image::guess_format(&raw).unwrap(), ImageFormat::Png);
        assert_eq!(image::load_from_memory(&raw).unwrap().to_rgba8().width(), 4);
    }

    #[test]
    fn test_reader_matches_bytes() {
        let bytes = png_bytes();
        let from_reader = from_reader(Cursor::new(bytes.clone())).unwrap();
        assert_eq!(from_reader, from_bytes(&bytes).unwrap());
    }

    #[test]
    fn test_garbage_is_an_error() {
        let err = from_bytes(b"definitely not an image").unwrap_err();
        assert!(matches!(err, VoyageError::Image(_)));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = from_path("/nonexistent/cat.png").unwrap_err();
        assert!(matches!(err, VoyageError::Image(_)));
    }
}
