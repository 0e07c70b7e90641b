pub(crate) mod add;
pub(crate) mod expenses;
pub(crate) mod summary;
