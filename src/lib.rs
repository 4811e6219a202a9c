//! 0/1 knapsack solvers: a best-first branch and bound guided by the
//! fractional relaxation, and an exact dynamic programming table.

mod error;
pub use error::Error;

mod problem;
pub use problem::{ratio, Item, Problem, Solution};

pub mod ioutils;
pub mod solvers;
