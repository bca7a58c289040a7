use std::{fmt, sync::Arc};

use image::{DynamicImage, Rgba, RgbaImage};

use crate::foundation::error::{TryOnError, TryOnResult};

/// Straight (non-premultiplied) RGBA8 pixel.
pub type Rgba8 = [u8; 4];

/// Immutable straight-alpha RGBA8 raster, row-major and tightly packed.
///
/// Cloning is cheap: pixel storage is shared. Every compositing operation produces a new `Image`
/// and never writes through an existing one.
#[derive(Clone, PartialEq, Eq)]
pub struct Image {
    buf: Arc<RgbaImage>,
}

impl Image {
    /// Wrap raw RGBA8 bytes. `data.len()` must equal `width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> TryOnResult<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| TryOnError::validation("image buffer size overflow"))?;
        if data.len() != expected {
            return Err(TryOnError::validation(format!(
                "rgba8 buffer is {} bytes, expected {expected} for {width}x{height}",
                data.len()
            )));
        }
        let buf = RgbaImage::from_raw(width, height, data)
            .ok_or_else(|| TryOnError::validation("rgba8 buffer does not match dimensions"))?;
        Self::from_rgba_image(buf)
    }

    /// Wrap an owned [`RgbaImage`]. Zero-area images are rejected.
    pub fn from_rgba_image(buf: RgbaImage) -> TryOnResult<Self> {
        if buf.width() == 0 || buf.height() == 0 {
            return Err(TryOnError::validation(format!(
                "image must have non-zero area (got {}x{})",
                buf.width(),
                buf.height()
            )));
        }
        Ok(Self { buf: Arc::new(buf) })
    }

    /// Wrap a buffer derived from an existing non-empty `Image`.
    pub(crate) fn from_composited(buf: RgbaImage) -> Self {
        debug_assert!(buf.width() > 0 && buf.height() > 0);
        Self { buf: Arc::new(buf) }
    }

    /// Convert any decoded image into straight RGBA8.
    pub fn from_dynamic(img: DynamicImage) -> TryOnResult<Self> {
        Self::from_rgba_image(img.into_rgba8())
    }

    /// Image of the given size filled with a single color.
    pub fn solid(width: u32, height: u32, rgba: Rgba8) -> TryOnResult<Self> {
        Self::from_rgba_image(RgbaImage::from_pixel(width, height, Rgba(rgba)))
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.buf.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.buf.height()
    }

    /// `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        self.buf.dimensions()
    }

    /// Pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        self.buf.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Raw RGBA8 bytes.
    pub fn as_raw(&self) -> &[u8] {
        self.buf.as_raw()
    }

    /// Borrow the underlying `image` buffer.
    pub fn as_rgba_image(&self) -> &RgbaImage {
        &self.buf
    }

    /// Owned copy of the underlying `image` buffer.
    pub fn to_rgba_image(&self) -> RgbaImage {
        (*self.buf).clone()
    }

    /// Whether both handles point at the same pixel storage.
    pub fn shares_pixels_with(&self, other: &Image) -> bool {
        Arc::ptr_eq(&self.buf, &other.buf)
    }
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/raster.rs"]
mod tests;
