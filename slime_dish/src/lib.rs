//! # slime_dish
//!
//! A petri dish for growing a slime mould.
//! The dish holds a lattice of cells seeded with food patches; a mould spreads
//! pheromone through it and links the food sources it reaches into a graph.

pub mod cell;
pub mod dish;
pub mod mould;
pub mod simulation;
pub use cell::{Cell, CellKind, Coord, FoodCell, FoodId, SlimeCell};
pub use config::SimulationConfig;
pub use dish::Dish;
pub use error::{DishError, DishResult};
pub use food::{food_table_from_json, FoodSource};
pub use food_graph::FoodGraph;
pub use lattice::Lattice;
pub use mould::{Mould, MouldParams, MouldStats, SlimeMould};
pub use pheromone::PheromoneField;
pub use simulation::Simulation;
pub use slime::Direction;

mod config;
mod error;
mod food;
mod food_graph;
mod lattice;
mod pheromone;
mod replay;
mod slime;
