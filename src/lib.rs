mod board;
mod common;
mod config;
mod fleet;
mod geometry;
mod grid;
mod logging;
mod normalize;
mod sampler;
mod scorer;
mod sim;
mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use fleet::*;
pub use geometry::*;
pub use grid::*;
pub use logging::init_logging;
pub use normalize::*;
pub use sampler::*;
pub use scorer::*;
pub use sim::*;
pub use ui::*;
