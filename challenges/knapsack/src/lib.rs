//! Iterative 0/1 knapsack: pick the most valuable subset of a catalog that
//! stays strictly under a capacity, take it out, and repeat until a budget of
//! slots has been filled.

pub mod catalog;
pub mod error;
pub mod item;
pub mod scheduler;
pub mod solver;

pub use catalog::Catalog;
pub use error::{KnapsackError, Result};
pub use item::Item;
pub use scheduler::{Batch, Scheduler, Solution, run_batches};
pub use solver::{MemoCache, Solver, solve, total_value};
