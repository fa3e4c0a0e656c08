pub(crate) mod machine;
pub(crate) mod options;
pub(crate) mod sequence;
pub(crate) mod state;
