pub(crate) mod anchors;
pub(crate) mod curve;
