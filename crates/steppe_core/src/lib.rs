//! Pure simulation engine for the `steppe` cellular automata.
//!
//! No terminal or CLI concerns live here; the root package owns those. The
//! engine is a double-buffered grid of value-typed cells advanced by a
//! [`Ruleset`] against an explicitly seeded RNG.

pub mod cell;
pub mod config;
pub mod ecosystem;
pub mod engine;
pub mod grid;
pub mod life;
pub mod neighborhood;

pub use cell::{Animal, CellView, EcoCell, LifeCell, Sex};
pub use config::{EcosystemConfig, LifeConfig};
pub use ecosystem::EcosystemRule;
pub use engine::{Automaton, Ruleset};
pub use grid::Grid;
pub use life::LifeRule;
