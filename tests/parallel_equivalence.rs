#![cfg(feature = "parallel")]

use knap_dp::{KnapsackInstance, KnapsackSolver};
use proptest::prelude::*;

/// Full-table serial reference: classic (N+1) × (capacity+1) fill with the
/// same inclusion rule as the solver, reconstructed by comparing adjacent
/// rows.
fn full_table(values: &[f64], weights: &[u32], capacity: u32) -> (f64, Vec<usize>) {
    let n = values.len();
    let budgets = capacity as usize + 1;
    let mut table = vec![vec![0.0f64; budgets]; n + 1];
    for i in 1..=n {
        let weight = weights[i - 1] as usize;
        let value = values[i - 1];
        for w in 0..budgets {
            let skip = table[i - 1][w];
            table[i][w] = if weight <= w {
                let take = value + table[i - 1][w - weight];
                if take > skip {
                    take
                } else {
                    skip
                }
            } else {
                skip
            };
        }
    }

    let mut remaining = capacity as usize;
    let mut items = Vec::new();
    for i in (1..=n).rev() {
        if table[i][remaining] > table[i - 1][remaining] {
            items.push(i - 1);
            remaining -= weights[i - 1] as usize;
        }
    }
    items.reverse();
    (table[n][budgets - 1], items)
}

fn item_strategy() -> impl Strategy<Value = (f64, u32)> {
    (0.0f64..40.0, 1u32..25)
}

proptest! {
    #[test]
    fn parallel_fill_matches_full_table(
        items in prop::collection::vec(item_strategy(), 1..80),
        capacity in 1u32..300,
    ) {
        let (values, weights): (Vec<f64>, Vec<u32>) = items.into_iter().unzip();
        let instance = KnapsackInstance::new(values.clone(), weights.clone(), capacity).unwrap();
        let solution = KnapsackSolver::new(instance).solve();
        let (baseline_value, baseline_items) = full_table(&values, &weights, capacity);
        prop_assert!(
            (solution.value - baseline_value).abs() <= 1e-9,
            "expected {baseline_value}, got {}",
            solution.value
        );
        prop_assert_eq!(solution.items, baseline_items);
    }
}

#[test]
fn parallel_fill_spans_many_strips() {
    // Capacity past several 64-budget strips, so the strip decomposition is
    // actually exercised.
    let values: Vec<f64> = (0..50).map(|i| (i % 7) as f64 + 1.0).collect();
    let weights: Vec<u32> = (0..50).map(|i| (i % 11) as u32 + 1).collect();
    let capacity = 400;
    let instance = KnapsackInstance::new(values.clone(), weights.clone(), capacity).unwrap();
    let solution = KnapsackSolver::new(instance).solve();
    let (baseline_value, baseline_items) = full_table(&values, &weights, capacity);
    assert!((solution.value - baseline_value).abs() <= 1e-9);
    assert_eq!(solution.items, baseline_items);
}
