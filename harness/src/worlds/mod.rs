//! Concrete search domains.

pub mod grid_maze;
pub mod racetrack;
