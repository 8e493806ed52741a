pub mod driver;
pub mod grid;
pub mod parse;
pub mod render;
pub mod rules;
pub mod simulation;
pub mod step;

pub use grid::Grid;
pub use grid::GridError;
pub use simulation::Simulation;
pub use step::step;
