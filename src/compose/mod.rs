//! Overlay compositing: resample, place, clip and blend.

pub(crate) mod blend;
pub(crate) mod compositor;
pub(crate) mod footprint;
pub(crate) mod params;
