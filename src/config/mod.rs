pub(crate) mod widget;
