pub(crate) mod builder;
pub(crate) mod classify;
pub(crate) mod record;
