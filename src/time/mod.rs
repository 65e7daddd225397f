/// Remaining-duration decomposition into display fields.
pub mod breakdown;
/// Target/current instant handling.
pub mod target;
