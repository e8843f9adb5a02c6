pub(crate) mod differ;
pub(crate) mod ops;
