use crate::foundation::error::{TryOnError, TryOnResult};
use crate::foundation::raster::Image;

/// Side length of the empty-result preview.
pub const PLACEHOLDER_SIDE: u32 = 420;
/// Gray level of the empty-result preview.
pub const PLACEHOLDER_GRAY: u8 = 30;

/// Opaque `side x side` square of `gray`, shown where a composite has not been produced yet.
pub fn placeholder(side: u32, gray: u8) -> TryOnResult<Image> {
    if side == 0 {
        return Err(TryOnError::validation("placeholder side must be > 0"));
    }
    Image::solid(side, side, [gray, gray, gray, 255])
}
