use std::env;

use knap_dp::{KnapsackInstance, KnapsackSolver};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn main() {
    let (num_items, seed) = match parse_args(env::args().skip(1)) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("random_sack: {err}");
            eprintln!("Usage: cargo run --features probe --bin random_sack [-- <items> [seed]]");
            std::process::exit(2);
        }
    };

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let values: Vec<f64> = (0..num_items).map(|_| rng.gen_range(5.0..30.0)).collect();
    let weights: Vec<u32> = (0..num_items).map(|_| rng.gen_range(1..20)).collect();
    let capacity = (weights.iter().map(|&w| u64::from(w)).sum::<u64>() / 2).max(1) as u32;

    println!("items: {num_items}");
    println!("total allowable weight: {capacity}");

    let instance = match KnapsackInstance::new(values, weights, capacity) {
        Ok(instance) => instance,
        Err(err) => {
            eprintln!("random_sack: {err}");
            std::process::exit(1);
        }
    };
    let solver = KnapsackSolver::new(instance);
    let solution = solver.solve();

    println!("max value: {:.4}", solution.value);
    println!("chosen items: {:?}", solution.items);
    println!(
        "chosen weight: {}",
        solution.total_weight(solver.instance())
    );
}

fn parse_args<I, T>(mut args: I) -> Result<(usize, Option<u64>), String>
where
    I: Iterator<Item = T>,
    T: Into<String>,
{
    let num_items = match args.next() {
        Some(arg) => {
            let arg = arg.into();
            arg.parse::<usize>()
                .map_err(|_| format!("item count must be a positive integer, got '{arg}'"))?
        }
        None => 10,
    };
    if num_items == 0 {
        return Err("item count must be at least 1".to_string());
    }
    let seed = match args.next() {
        Some(arg) => {
            let arg = arg.into();
            Some(
                arg.parse::<u64>()
                    .map_err(|_| format!("seed must be an integer, got '{arg}'"))?,
            )
        }
        None => None,
    };
    if args.next().is_some() {
        return Err("too many arguments".to_string());
    }
    Ok((num_items, seed))
}
