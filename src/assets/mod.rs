//! Loading of images and fonts from disk or the host.

pub(crate) mod decode;
pub(crate) mod fonts;
