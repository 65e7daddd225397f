/// Value-over-label group placement.
pub mod group;
