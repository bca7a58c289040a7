use image::imageops::{self, FilterType};

use crate::foundation::error::{TryOnError, TryOnResult};
use crate::foundation::raster::Image;

/// Size bounds applied to uploads before compositing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct NormalizeOpts {
    /// Shorter side is upscaled to at least this.
    pub min_side: u32,
    /// Longer side is downscaled to at most this.
    pub target_max: u32,
    /// Upscaling never pushes the longer side past this.
    pub abs_cap: u32,
}

impl Default for NormalizeOpts {
    fn default() -> Self {
        Self {
            min_side: 320,
            target_max: 3072,
            abs_cap: 4096,
        }
    }
}

impl NormalizeOpts {
    pub fn validate(&self) -> TryOnResult<()> {
        if self.min_side == 0 {
            return Err(TryOnError::validation("normalize.min_side must be > 0"));
        }
        if self.min_side > self.target_max || self.target_max > self.abs_cap {
            return Err(TryOnError::validation(format!(
                "normalize bounds must satisfy min_side <= target_max <= abs_cap (got {} / {} / {})",
                self.min_side, self.target_max, self.abs_cap
            )));
        }
        Ok(())
    }

    /// Target size for a `width x height` input, aspect ratio preserved.
    pub fn target_size(&self, width: u32, height: u32) -> (u32, u32) {
        let mut w = f64::from(width);
        let mut h = f64::from(height);

        let long = w.max(h);
        if long > f64::from(self.target_max) {
            let k = f64::from(self.target_max) / long;
            w = (w * k).round().max(1.0);
            h = (h * k).round().max(1.0);
        }

        let short = w.min(h);
        if short < f64::from(self.min_side) {
            let k = f64::from(self.min_side) / short;
            let (mut nw, mut nh) = ((w * k).round(), (h * k).round());
            let long = nw.max(nh);
            if long > f64::from(self.abs_cap) {
                let k2 = f64::from(self.abs_cap) / long;
                nw = (nw * k2).round().max(1.0);
                nh = (nh * k2).round().max(1.0);
            }
            w = nw;
            h = nh;
        }

        (w as u32, h as u32)
    }
}

/// Resize `img` into the bounds of `opts` with Lanczos3 resampling.
///
/// In-range images come back as the same handle.
pub fn normalize_image(img: &Image, opts: NormalizeOpts) -> Image {
    let (width, height) = img.dimensions();
    let (tw, th) = opts.target_size(width, height);
    if (tw, th) == (width, height) {
        return img.clone();
    }

    tracing::debug!(from = ?(width, height), to = ?(tw, th), "normalizing image size");
    let resized = imageops::resize(img.as_rgba_image(), tw, th, FilterType::Lanczos3);
    Image::from_composited(resized)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/normalize.rs"]
mod tests;
