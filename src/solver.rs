//! Dense 0/1 knapsack solver.
//!
//! The solver runs in two phases:
//! 1. A bottom-up fill over item rows. Only two value rows are live at any
//!    time; every inclusion choice is recorded in a bit-packed
//!    [`DecisionTable`] that is kept whole.
//! 2. A backward walk over the decision table, from the last item at full
//!    capacity, recovering the chosen item set exactly.
//!
//! Row `i` depends only on the fully-materialized row `i-1`, so within a row
//! every budget cell is independent. With the `parallel` feature each row is
//! computed with rayon in 64-budget strips; each strip owns exactly one
//! decision word, so no two tasks touch the same word. The parallel fill is
//! bit-identical to the serial one.

use crate::error::InvalidInput;
use crate::instance::KnapsackInstance;
use crate::tables::DecisionTable;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Optimal value and the item indices achieving it, in ascending order.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    pub value: f64,
    pub items: Vec<usize>,
}

impl Solution {
    /// Total weight of the chosen items in `instance`.
    pub fn total_weight(&self, instance: &KnapsackInstance) -> u64 {
        self.items
            .iter()
            .map(|&i| u64::from(instance.weights()[i]))
            .sum()
    }
}

/// Solver over a validated [`KnapsackInstance`].
///
/// Typical usage:
/// ```
/// use knap_dp::{KnapsackInstance, KnapsackSolver};
///
/// let instance = KnapsackInstance::from_items([(10.0, 7), (4.0, 3)], 7).unwrap();
/// let solution = KnapsackSolver::new(instance).solve();
/// assert_eq!(solution.value, 10.0);
/// assert_eq!(solution.items, vec![0]);
/// ```
pub struct KnapsackSolver {
    instance: KnapsackInstance,
}

impl KnapsackSolver {
    pub fn new(instance: KnapsackInstance) -> Self {
        Self { instance }
    }

    /// Expose immutable reference to the underlying instance.
    pub fn instance(&self) -> &KnapsackInstance {
        &self.instance
    }

    /// Run the fill and the reconstruction.
    ///
    /// Total for every validated instance: the working tables are allocated,
    /// populated in one pass, consumed by the backward walk, and dropped.
    pub fn solve(&self) -> Solution {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "knapsack_solve",
            items = self.instance.num_items(),
            capacity = self.instance.capacity()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let (value, keep) = self.fill_tables();
        let items = self.backtrack(&keep);
        Solution { value, items }
    }

    /// Phase 1: bottom-up fill.
    ///
    /// Returns the final row's entry at full capacity together with the
    /// complete decision table. The conceptual row before item 0 is all
    /// zeros, so every item, item 0 included, is decided uniformly.
    fn fill_tables(&self) -> (f64, DecisionTable) {
        let n = self.instance.num_items();
        let budgets = self.instance.capacity() as usize + 1;
        let mut keep = DecisionTable::new(n, budgets);
        let mut prev = vec![0.0f64; budgets];
        let mut curr = vec![0.0f64; budgets];

        for item in 0..n {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("fill_row", item);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            fill_row(&self.instance, item, &prev, &mut curr, &mut keep);
            std::mem::swap(&mut prev, &mut curr);
        }

        // After the final swap the last computed row lives in `prev`.
        (prev[budgets - 1], keep)
    }

    /// Phase 2: walk the decision table from the last item down, spending
    /// budget for every recorded inclusion. The walk starts by reading the
    /// decision at full capacity.
    fn backtrack(&self, keep: &DecisionTable) -> Vec<usize> {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("backtrack");
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let weights = self.instance.weights();
        let mut remaining = self.instance.capacity() as usize;
        let mut chosen = Vec::new();
        for item in (0..keep.items()).rev() {
            if keep.get(item, remaining) {
                // A set bit implies the item fit within this budget.
                debug_assert!(weights[item] as usize <= remaining);
                chosen.push(item);
                remaining -= weights[item] as usize;
            }
        }
        chosen.reverse();
        chosen
    }
}

/// Validate inputs and solve in one call.
///
/// Equivalent to [`KnapsackInstance::new`] followed by
/// [`KnapsackSolver::solve`]; validation failures surface before any table
/// allocation.
pub fn solve(values: Vec<f64>, weights: Vec<u32>, capacity: u32) -> Result<Solution, InvalidInput> {
    let instance = KnapsackInstance::new(values, weights, capacity)?;
    Ok(KnapsackSolver::new(instance).solve())
}

/// Decide one `(item, budget)` cell from the previous value row.
///
/// Inclusion requires the item to fit within the budget, exact fits
/// included, and to strictly improve on carrying the previous row's value
/// forward; ties leave the item out, so zero-value items are never selected.
#[inline]
fn decide(prev: &[f64], weight: usize, value: f64, budget: usize) -> (f64, bool) {
    let skip = prev[budget];
    if weight <= budget {
        let take = value + prev[budget - weight];
        if take > skip {
            return (take, true);
        }
    }
    (skip, false)
}

#[cfg(not(feature = "parallel"))]
fn fill_row(
    instance: &KnapsackInstance,
    item: usize,
    prev: &[f64],
    curr: &mut [f64],
    keep: &mut DecisionTable,
) {
    let weight = instance.weights()[item] as usize;
    let value = instance.values()[item];
    for (budget, slot) in curr.iter_mut().enumerate() {
        let (best, take) = decide(prev, weight, value, budget);
        *slot = best;
        if take {
            keep.set(item, budget);
        }
    }
}

#[cfg(feature = "parallel")]
fn fill_row(
    instance: &KnapsackInstance,
    item: usize,
    prev: &[f64],
    curr: &mut [f64],
    keep: &mut DecisionTable,
) {
    let weight = instance.weights()[item] as usize;
    let value = instance.values()[item];
    curr.par_chunks_mut(64)
        .zip(keep.row_mut(item).par_iter_mut())
        .enumerate()
        .for_each(|(strip, (chunk, word))| {
            let base = strip * 64;
            let mut bits = 0u64;
            for (offset, slot) in chunk.iter_mut().enumerate() {
                let (best, take) = decide(prev, weight, value, base + offset);
                *slot = best;
                if take {
                    bits |= 1 << offset;
                }
            }
            *word = bits;
        });
}
