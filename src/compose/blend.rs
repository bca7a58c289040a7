use crate::compose::params::BlendMode;
use crate::foundation::raster::Rgba8;

/// `dst * (255 - w) / 255 + src * w / 255` per channel, rounded once.
///
/// `w == 255` yields `src` exactly and `w == 0` yields `dst` exactly.
pub fn lerp(dst: Rgba8, src: Rgba8, w: u8) -> Rgba8 {
    if w == 0 {
        return dst;
    }
    if w == 255 {
        return src;
    }
    let w = u32::from(w);
    let iw = 255 - w;
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = div255(u32::from(dst[i]) * iw + u32::from(src[i]) * w);
    }
    out
}

/// Straight-alpha source-over with an extra opacity weight.
pub fn over(dst: Rgba8, src: Rgba8, opacity: u8) -> Rgba8 {
    let sa = mul_div255(u16::from(src[3]), u16::from(opacity));
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return [src[0], src[1], src[2], 255];
    }

    let sa = u32::from(sa);
    let inv = 255 - sa;
    let da = u32::from(dst[3]);
    // Alpha of the result, scaled by 255.
    let out_a255 = sa * 255 + da * inv;
    if out_a255 == 0 {
        return [0, 0, 0, 0];
    }

    let mut out = [0u8; 4];
    for i in 0..3 {
        let num = u32::from(src[i]) * sa * 255 + u32::from(dst[i]) * da * inv;
        out[i] = ((num + out_a255 / 2) / out_a255).min(255) as u8;
    }
    out[3] = div255(out_a255);
    out
}

/// Blend one row of `src` pixels onto the same-length row of `dst`.
pub fn blend_row_in_place(dst: &mut [u8], src: &[u8], opacity: u8, mode: BlendMode) {
    debug_assert_eq!(dst.len(), src.len());
    debug_assert!(dst.len().is_multiple_of(4));

    if opacity == 255 && mode == BlendMode::Uniform {
        dst.copy_from_slice(src);
        return;
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let dp = [d[0], d[1], d[2], d[3]];
        let sp = [s[0], s[1], s[2], s[3]];
        let out = match mode {
            BlendMode::Uniform => lerp(dp, sp, opacity),
            BlendMode::SourceOver => over(dp, sp, opacity),
        };
        d.copy_from_slice(&out);
    }
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

fn div255(x: u32) -> u8 {
    ((x + 127) / 255).min(255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/compose/blend.rs"]
mod tests;
