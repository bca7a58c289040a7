use std::{io::Cursor, path::Path};

use image::{DynamicImage, ImageDecoder, ImageReader, metadata::Orientation};

use crate::foundation::error::{TryOnError, TryOnResult};
use crate::foundation::raster::Image;

/// Decode encoded image bytes (PNG, JPEG, ...) into straight RGBA8.
///
/// EXIF orientation is applied so the result is upright, matching what a browser preview shows.
pub fn decode_image(bytes: &[u8]) -> TryOnResult<Image> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| TryOnError::decode(format!("guess image format: {e}")))?;
    let mut decoder = reader
        .into_decoder()
        .map_err(|e| TryOnError::decode(format!("open image decoder: {e}")))?;
    let orientation = decoder
        .orientation()
        .unwrap_or(Orientation::NoTransforms);

    let mut img = DynamicImage::from_decoder(decoder)
        .map_err(|e| TryOnError::decode(format!("decode image from memory: {e}")))?;
    img.apply_orientation(orientation);

    Image::from_dynamic(img).map_err(|e| TryOnError::decode(e.to_string()))
}

/// Read and decode an image file.
pub fn load_image(path: impl AsRef<Path>) -> TryOnResult<Image> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    decode_image(&bytes).map_err(|e| match e {
        TryOnError::Decode(msg) => TryOnError::decode(format!("{}: {msg}", path.display())),
        other => other,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
