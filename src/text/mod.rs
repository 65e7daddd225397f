/// Font-free fixed-advance engine.
pub mod boxes;
/// Text measurement/rasterization contract.
pub mod engine;
/// Font discovery and loading.
pub mod font;
/// Parley + vello_cpu engine.
pub mod parley_engine;
