pub(crate) mod background;
pub(crate) mod focal;
pub(crate) mod text;
