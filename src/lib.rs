//! tryon composites a garment image onto a person image for a mock virtual try-on preview.
//!
//! There is no fitting model here: the garment is resized, placed at an offset and alpha-blended
//! onto the person photo. The surrounding UI only has to collect two images and a
//! [`PlacementParams`], call [`compose`], and show the returned [`Image`].
//!
//! # Pipeline overview
//!
//! 1. **Decode**: bytes or files -> [`Image`] (EXIF orientation applied), see [`decode_image`]
//! 2. **Normalize** (optional): clamp sizes into a sane range, see [`normalize_image`]
//! 3. **Compose**: `base + overlay + PlacementParams -> Image`, see [`compose_with`]
//! 4. **Encode**: PNG or JPEG bytes, see [`encode_image`] / [`save_image`]
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure compositing**: [`compose`] never fails, never mutates its inputs and always returns an
//!   image with the base's dimensions. Off-canvas placement is clipped, not rejected.
//! - **Straight RGBA8** end-to-end; only decode/encode/config touch IO.
#![forbid(unsafe_code)]

mod assets;
mod compose;
mod foundation;

/// JSON run configuration.
pub mod config;

pub use assets::decode::{decode_image, load_image};
pub use assets::encode::{DEFAULT_JPEG_QUALITY, OutputFormat, encode_image, save_image};
pub use assets::normalize::{NormalizeOpts, normalize_image};
pub use assets::placeholder::{PLACEHOLDER_GRAY, PLACEHOLDER_SIDE, placeholder};
pub use compose::blend::{blend_row_in_place, lerp, over};
pub use compose::compositor::{FULL_RESAMPLE_MAX_PIXELS, compose, compose_with};
pub use compose::footprint::{Footprint, MAX_OVERLAY_SIDE, scaled_size};
pub use compose::params::{BlendMode, ComposeOptions, PlacementParams, ResampleFilter};
pub use config::{LoggingConfig, TryOnConfig};
pub use foundation::error::{TryOnError, TryOnResult};
pub use foundation::raster::{Image, Rgba8};
