use std::borrow::Cow;

use image::{RgbaImage, imageops};

use crate::compose::blend::blend_row_in_place;
use crate::compose::footprint::{Footprint, scaled_size};
use crate::compose::params::{ComposeOptions, PlacementParams, ResampleFilter};
use crate::foundation::raster::Image;

/// Blend `overlay` onto `base` with default [`ComposeOptions`].
///
/// See [`compose_with`].
pub fn compose(base: &Image, overlay: &Image, params: PlacementParams) -> Image {
    compose_with(base, overlay, params, ComposeOptions::default())
}

/// Blend `overlay` onto `base`, returning a new image with the dimensions of `base`.
///
/// The overlay is resized by `params.scale`, anchored at `(x_offset, y_offset)` and clipped to the
/// base canvas. Pixels inside the footprint become
/// `base * (1 - opacity) + overlay * opacity`; everything else is copied from `base`.
///
/// Never fails: a collapsed overlay, a fully off-canvas placement or zero opacity all return
/// `base` unchanged. Neither input is modified.
#[tracing::instrument(
    level = "debug",
    skip(base, overlay),
    fields(base = ?base.dimensions(), overlay = ?overlay.dimensions())
)]
pub fn compose_with(
    base: &Image,
    overlay: &Image,
    params: PlacementParams,
    opts: ComposeOptions,
) -> Image {
    let opacity = params.opacity_u8();
    if opacity == 0 {
        tracing::debug!("opacity is zero; returning base");
        return base.clone();
    }

    let Some((ow, oh)) = scaled_size(overlay.width(), overlay.height(), params.scale) else {
        tracing::debug!(scale = params.scale, "overlay collapses after scaling; returning base");
        return base.clone();
    };

    let Some(fp) = Footprint::clip(base.dimensions(), (ow, oh), params.x_offset, params.y_offset)
    else {
        tracing::debug!("overlay placed fully outside the canvas; returning base");
        return base.clone();
    };

    let window = visible_overlay(overlay, (ow, oh), fp, opts.filter);
    let mut out = base.to_rgba_image();
    blend_footprint(&mut out, &window, fp, opacity, opts);

    tracing::debug!(
        x = fp.x,
        y = fp.y,
        width = fp.width,
        height = fp.height,
        area = fp.area(),
        "composited overlay"
    );

    Image::from_composited(out)
}

/// Scaled overlays above this many pixels are never materialized in full; only the visible
/// window is sampled.
pub const FULL_RESAMPLE_MAX_PIXELS: u64 = 4_194_304;

/// The part of the resized overlay that lands inside a footprint.
///
/// `(x, y)` is where the footprint's top-left corner sits inside `pixels`.
pub(crate) struct OverlayWindow<'a> {
    pub pixels: Cow<'a, RgbaImage>,
    pub x: u32,
    pub y: u32,
}

/// Resample just the visible part of `overlay` scaled to `scaled`.
///
/// Nearest maps every visible pixel straight back to its source pixel. Bilinear and Lanczos3
/// resize the whole overlay while it stays under [`FULL_RESAMPLE_MAX_PIXELS`]; larger
/// magnifications are sampled bilinearly at the visible pixel centers.
pub(crate) fn visible_overlay(
    overlay: &Image,
    scaled: (u32, u32),
    fp: Footprint,
    filter: ResampleFilter,
) -> OverlayWindow<'_> {
    let src = overlay.as_rgba_image();
    if overlay.dimensions() == scaled {
        return OverlayWindow {
            pixels: Cow::Borrowed(src),
            x: fp.src_x,
            y: fp.src_y,
        };
    }

    let (ow, oh) = scaled;
    let pixels = match filter {
        ResampleFilter::Nearest => nearest_window(src, scaled, fp),
        _ if u64::from(ow) * u64::from(oh) <= FULL_RESAMPLE_MAX_PIXELS => {
            let full = imageops::resize(src, ow, oh, filter.into());
            imageops::crop_imm(&full, fp.src_x, fp.src_y, fp.width, fp.height).to_image()
        }
        _ => {
            tracing::debug!(?scaled, "overlay too large to resample in full; sampling window");
            bilinear_window(src, scaled, fp)
        }
    };
    OverlayWindow { pixels: Cow::Owned(pixels), x: 0, y: 0 }
}

/// Source index for destination index `dst` when `src_len` pixels are stretched to `dst_len`.
fn nearest_index(dst: u32, dst_len: u32, src_len: u32) -> u32 {
    let ratio = src_len as f32 / dst_len as f32;
    (((dst as f32 + 0.5) * ratio).floor() as u32).min(src_len - 1)
}

fn nearest_window(src: &RgbaImage, (ow, oh): (u32, u32), fp: Footprint) -> RgbaImage {
    let xs: Vec<u32> = (0..fp.width)
        .map(|i| nearest_index(fp.src_x + i, ow, src.width()))
        .collect();
    let ys: Vec<u32> = (0..fp.height)
        .map(|j| nearest_index(fp.src_y + j, oh, src.height()))
        .collect();
    RgbaImage::from_fn(fp.width, fp.height, |i, j| {
        *src.get_pixel(xs[i as usize], ys[j as usize])
    })
}

fn bilinear_window(src: &RgbaImage, (ow, oh): (u32, u32), fp: Footprint) -> RgbaImage {
    RgbaImage::from_fn(fp.width, fp.height, |i, j| {
        let u = (f64::from(fp.src_x + i) + 0.5) / f64::from(ow);
        let v = (f64::from(fp.src_y + j) + 0.5) / f64::from(oh);
        imageops::sample_bilinear(src, u as f32, v as f32).unwrap_or_else(|| {
            *src.get_pixel(
                nearest_index(fp.src_x + i, ow, src.width()),
                nearest_index(fp.src_y + j, oh, src.height()),
            )
        })
    })
}

fn blend_footprint(
    dst: &mut RgbaImage,
    src: &OverlayWindow<'_>,
    fp: Footprint,
    opacity: u8,
    opts: ComposeOptions,
) {
    let dst_stride = dst.width() as usize * 4;
    let src_stride = src.pixels.width() as usize * 4;
    let row_len = fp.width as usize * 4;
    let dst_x = fp.x as usize * 4;
    let src_x = src.x as usize * 4;

    let dst_raw: &mut [u8] = dst;
    let src_raw: &[u8] = &src.pixels;

    for row in 0..fp.height as usize {
        let d0 = (fp.y as usize + row) * dst_stride + dst_x;
        let s0 = (src.y as usize + row) * src_stride + src_x;
        blend_row_in_place(
            &mut dst_raw[d0..d0 + row_len],
            &src_raw[s0..s0 + row_len],
            opacity,
            opts.blend,
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/compositor.rs"]
mod tests;
