use image::imageops::FilterType;

use crate::foundation::error::{TryOnError, TryOnResult};

/// Where and how strongly the overlay is placed onto the base.
///
/// `x_offset`/`y_offset` anchor the top-left corner of the resized overlay on the base canvas and
/// may be negative or exceed the canvas; out-of-canvas parts are clipped.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlacementParams {
    pub x_offset: i32,
    pub y_offset: i32,
    pub scale: f32, // must be > 0
    pub opacity: f32,
}

impl Default for PlacementParams {
    fn default() -> Self {
        Self {
            x_offset: 0,
            y_offset: 0,
            scale: 1.0,
            opacity: 1.0,
        }
    }
}

impl PlacementParams {
    /// Build validated params. Opacity is clamped into `[0, 1]`.
    pub fn new(x_offset: i32, y_offset: i32, scale: f32, opacity: f32) -> TryOnResult<Self> {
        let p = Self {
            x_offset,
            y_offset,
            scale,
            opacity: opacity.clamp(0.0, 1.0),
        };
        p.validate()?;
        Ok(p)
    }

    /// Reject parameters a caller should fix instead of having silently ignored.
    pub fn validate(&self) -> TryOnResult<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(TryOnError::validation(format!(
                "scale must be a finite number > 0 (got {})",
                self.scale
            )));
        }
        if !self.opacity.is_finite() {
            return Err(TryOnError::validation("opacity must be finite"));
        }
        Ok(())
    }

    /// Opacity clamped into `[0, 1]`; NaN counts as fully transparent.
    pub fn clamped_opacity(&self) -> f32 {
        if self.opacity.is_nan() {
            return 0.0;
        }
        self.opacity.clamp(0.0, 1.0)
    }

    /// Opacity quantized to an 8-bit blend weight.
    pub(crate) fn opacity_u8(&self) -> u8 {
        (self.clamped_opacity() * 255.0).round() as u8
    }
}

/// Resampling filter used when scaling the overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResampleFilter {
    #[default]
    Nearest,
    Bilinear,
    Lanczos3,
}

impl From<ResampleFilter> for FilterType {
    fn from(f: ResampleFilter) -> Self {
        match f {
            ResampleFilter::Nearest => FilterType::Nearest,
            ResampleFilter::Bilinear => FilterType::Triangle,
            ResampleFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// How overlay pixels are mixed into the base.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// `base * (1 - opacity) + overlay * opacity` on all four channels. Overlay alpha is treated
    /// as ordinary channel data.
    #[default]
    Uniform,
    /// Porter-Duff source-over: the overlay's own alpha scales the blend weight, so transparent
    /// garment backgrounds leave the base visible.
    SourceOver,
}

/// Non-placement knobs for [`crate::compose_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ComposeOptions {
    pub filter: ResampleFilter,
    pub blend: BlendMode,
}

#[cfg(test)]
#[path = "../../tests/unit/compose/params.rs"]
mod tests;
