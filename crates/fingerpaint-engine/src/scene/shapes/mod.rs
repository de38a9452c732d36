pub(crate) mod circle;
pub(crate) mod path;
