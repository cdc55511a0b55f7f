pub(crate) mod animator;
pub(crate) mod host;
pub(crate) mod sim;
