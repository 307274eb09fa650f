pub mod classifier;
pub mod color;
pub mod geo;
pub mod legend;
pub mod sampler;
