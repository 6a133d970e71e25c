//! Search heuristics.
//!
//! This module exports the ant colony path search and its pheromone table.

pub mod aco;
pub mod pheromone;

pub use aco::*;
pub use pheromone::*;
