//! Core value types shared by the compositor and the asset helpers.

pub(crate) mod error;
pub(crate) mod raster;
