//! Exact 0/1 knapsack solving.
//!
//! This crate computes an optimal subset of items under a total-weight
//! constraint: given item values, positive integer item weights, and an
//! integer capacity, it returns the maximum achievable total value together
//! with the item indices achieving it.
//!
//! ## Core idea
//! 1. Validate the inputs once, up front, into a [`KnapsackInstance`].
//! 2. Fill the classic (item-prefix × weight-budget) value recurrence
//!    bottom-up, keeping only two value rows live at any time.
//! 3. Record every inclusion choice in a bit-packed decision table and walk
//!    it backward to recover the chosen set exactly.
//!
//! Time and space are O(N × capacity): exact, pseudo-polynomial.
//!
//! ## Quick start
//! ```
//! use knap_dp::{KnapsackInstance, KnapsackSolver};
//!
//! let instance = KnapsackInstance::new(
//!     vec![60.0, 100.0, 120.0],
//!     vec![10, 20, 30],
//!     50,
//! )
//! .unwrap();
//! let solution = KnapsackSolver::new(instance).solve();
//! assert_eq!(solution.value, 220.0);
//! assert_eq!(solution.items, vec![1, 2]);
//! ```
//!
//! ## Features
//! - `parallel`: fill each row across weight budgets with rayon.
//! - `tracing`: emit spans around the fill and reconstruction phases.
//! - `probe`: build the `scale_probe` and `random_sack` binaries.

pub mod builder;
pub mod error;
pub mod instance;
pub mod solver;
pub mod tables;
pub mod utils;

pub use crate::builder::KnapsackInstanceBuilder;
pub use crate::error::InvalidInput;
pub use crate::instance::KnapsackInstance;
pub use crate::solver::{solve, KnapsackSolver, Solution};
