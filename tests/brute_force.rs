use knap_dp::{KnapsackInstance, KnapsackSolver};
use proptest::prelude::*;

/// Maximum over all feasible subsets, by enumeration.
fn brute_force(values: &[f64], weights: &[u32], capacity: u32) -> f64 {
    let n = values.len();
    let mut best = 0.0f64;
    for mask in 0usize..(1usize << n) {
        let mut weight = 0u64;
        let mut value = 0.0f64;
        for (i, (&v, &w)) in values.iter().zip(weights).enumerate() {
            if mask & (1 << i) != 0 {
                weight += u64::from(w);
                value += v;
            }
        }
        if weight <= u64::from(capacity) && value > best {
            best = value;
        }
    }
    best
}

fn item_strategy() -> impl Strategy<Value = (f64, u32)> {
    (0.0f64..30.0, 1u32..20)
}

proptest! {
    #[test]
    fn value_matches_exhaustive_search(
        items in prop::collection::vec(item_strategy(), 1..13),
        capacity in 1u32..120,
    ) {
        let (values, weights): (Vec<f64>, Vec<u32>) = items.into_iter().unzip();
        let instance = KnapsackInstance::new(values.clone(), weights.clone(), capacity).unwrap();
        let solution = KnapsackSolver::new(instance).solve();
        let expected = brute_force(&values, &weights, capacity);
        prop_assert!(
            (solution.value - expected).abs() <= 1e-6,
            "expected {expected}, got {}",
            solution.value
        );
    }

    #[test]
    fn chosen_set_reproduces_reported_value(
        items in prop::collection::vec(item_strategy(), 1..13),
        capacity in 1u32..120,
    ) {
        let (values, weights): (Vec<f64>, Vec<u32>) = items.into_iter().unzip();
        let instance = KnapsackInstance::new(values.clone(), weights.clone(), capacity).unwrap();
        let solver = KnapsackSolver::new(instance);
        let solution = solver.solve();

        let chosen_weight: u64 = solution.items.iter().map(|&i| u64::from(weights[i])).sum();
        prop_assert!(chosen_weight <= u64::from(capacity));

        let chosen_value: f64 = solution.items.iter().map(|&i| values[i]).sum();
        prop_assert!(
            (chosen_value - solution.value).abs() <= 1e-6,
            "chosen set sums to {chosen_value}, reported {}",
            solution.value
        );
        prop_assert_eq!(chosen_weight, solution.total_weight(solver.instance()));
    }
}
