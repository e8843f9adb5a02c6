pub(crate) mod color;
pub(crate) mod resolver;
pub(crate) mod table;
