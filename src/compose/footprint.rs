/// Longest side the resized overlay may have. Larger scales are clamped to it.
pub const MAX_OVERLAY_SIDE: u32 = 16_384;

/// Visible part of a placed overlay, in base-canvas and overlay coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Footprint {
    /// Top-left corner on the base canvas.
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Top-left corner inside the resized overlay that lands on `(x, y)`.
    pub src_x: u32,
    pub src_y: u32,
}

impl Footprint {
    /// Clip an overlay of `overlay` size placed at `(x_offset, y_offset)` against a `base` canvas.
    ///
    /// Returns `None` when nothing of the overlay is visible.
    pub fn clip(
        base: (u32, u32),
        overlay: (u32, u32),
        x_offset: i32,
        y_offset: i32,
    ) -> Option<Self> {
        let (x0, x1) = clip_axis(base.0, overlay.0, x_offset)?;
        let (y0, y1) = clip_axis(base.1, overlay.1, y_offset)?;
        Some(Self {
            x: x0 as u32,
            y: y0 as u32,
            width: (x1 - x0) as u32,
            height: (y1 - y0) as u32,
            src_x: (x0 - i64::from(x_offset)) as u32,
            src_y: (y0 - i64::from(y_offset)) as u32,
        })
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

fn clip_axis(base_len: u32, overlay_len: u32, offset: i32) -> Option<(i64, i64)> {
    let start = i64::from(offset).max(0);
    let end = (i64::from(offset) + i64::from(overlay_len)).min(i64::from(base_len));
    (end > start).then_some((start, end))
}

/// Overlay size after scaling by `scale`, or `None` when it collapses to nothing.
///
/// Each side is `round(side * scale)`. When the longer side would exceed [`MAX_OVERLAY_SIDE`]
/// both sides are shrunk proportionally.
pub fn scaled_size(width: u32, height: u32, scale: f32) -> Option<(u32, u32)> {
    if !scale.is_finite() || scale <= 0.0 {
        return None;
    }
    let scale = f64::from(scale);
    let mut w = (f64::from(width) * scale).round();
    let mut h = (f64::from(height) * scale).round();

    let long = w.max(h);
    let cap = f64::from(MAX_OVERLAY_SIDE);
    if long > cap {
        let k = cap / long;
        w = (w * k).round().min(cap);
        h = (h * k).round().min(cap);
    }

    if w < 1.0 || h < 1.0 {
        return None;
    }
    Some((w as u32, h as u32))
}

#[cfg(test)]
#[path = "../../tests/unit/compose/footprint.rs"]
mod tests;
