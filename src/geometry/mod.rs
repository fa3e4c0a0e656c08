pub(crate) mod circle;
pub(crate) mod direction;
pub(crate) mod rect;
