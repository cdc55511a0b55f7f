pub(crate) mod scene;
pub(crate) mod svg;
pub(crate) mod widget;
