use std::path::Path;

use image::{
    DynamicImage, ExtendedColorType, ImageEncoder,
    codecs::{jpeg::JpegEncoder, png::PngEncoder},
};

use crate::foundation::error::{TryOnError, TryOnResult};
use crate::foundation::raster::Image;

/// JPEG quality used when none is given.
pub const DEFAULT_JPEG_QUALITY: u8 = 92;

/// Output container for encoded results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Lossless, keeps alpha.
    #[default]
    Png,
    /// Lossy, alpha is dropped.
    Jpeg { quality: u8 },
}

impl OutputFormat {
    /// Pick a format from a file extension (`png`, `jpg`, `jpeg`; case-insensitive).
    pub fn from_path(path: &Path) -> TryOnResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg {
                quality: DEFAULT_JPEG_QUALITY,
            }),
            _ => Err(TryOnError::validation(format!(
                "unsupported output extension for '{}' (expected .png, .jpg or .jpeg)",
                path.display()
            ))),
        }
    }
}

/// Encode an image into the bytes of `format`.
pub fn encode_image(img: &Image, format: OutputFormat) -> TryOnResult<Vec<u8>> {
    let (width, height) = img.dimensions();
    let mut buf = Vec::new();
    match format {
        OutputFormat::Png => PngEncoder::new(&mut buf)
            .write_image(img.as_raw(), width, height, ExtendedColorType::Rgba8)
            .map_err(|e| TryOnError::encode(format!("encode png: {e}")))?,
        OutputFormat::Jpeg { quality } => {
            let quality = quality.clamp(1, 100);
            let rgb = DynamicImage::ImageRgba8(img.to_rgba_image()).into_rgb8();
            JpegEncoder::new_with_quality(&mut buf, quality)
                .write_image(rgb.as_raw(), width, height, ExtendedColorType::Rgb8)
                .map_err(|e| TryOnError::encode(format!("encode jpeg: {e}")))?
        }
    }
    Ok(buf)
}

/// Encode `img` according to the extension of `path` and write it, creating parent directories.
pub fn save_image(img: &Image, path: impl AsRef<Path>) -> TryOnResult<()> {
    let path = path.as_ref();
    let format = OutputFormat::from_path(path)?;
    let bytes = encode_image(img, format)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    tracing::debug!(path = %path.display(), ?format, "wrote image");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/encode.rs"]
mod tests;
