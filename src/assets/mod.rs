//! IO edges: decoding uploads, normalizing their size and encoding results.

pub(crate) mod decode;
pub(crate) mod encode;
pub(crate) mod normalize;
pub(crate) mod placeholder;
