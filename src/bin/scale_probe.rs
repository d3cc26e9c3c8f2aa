use std::env;
use std::time::Instant;

use knap_dp::utils::table_cells;
use knap_dp::{KnapsackInstance, KnapsackSolver};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sysinfo::{get_current_pid, ProcessExt, ProcessRefreshKind, System, SystemExt};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("scale_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Knapsack Scaling Probe: Performance and Correctness Testing");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("This probe runs the dense knapsack solver across increasing item counts");
    eprintln!("and capacities to verify:");
    eprintln!(
        "  • Correctness: results match exhaustive enumeration (up to {} items)",
        options.verify_limit
    );
    eprintln!("  • Performance: wall-clock time scales with item count × capacity");
    eprintln!("  • Memory: RSS delta stays proportional to the decision table");
    eprintln!();
    eprintln!("Metrics explained:");
    eprintln!("  • wall_s: wall-clock time in seconds (lower is better)");
    eprintln!("  • rss_delta_kib: memory delta in KiB");
    eprintln!("  • status: 'passed' = matches enumeration, 'not_checked' = too large to verify");
    eprintln!();
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/2] Scaling item count at proportional capacity...");
    measurements.extend(run_item_scaling(&options, &mut sys));
    eprintln!();

    eprintln!("[2/2] Scaling capacity at fixed item count...");
    measurements.extend(run_capacity_scaling(&options, &mut sys));
    eprintln!();

    print_summary(&measurements, &options);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("scale_probe output error: {err}");
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 16usize;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = parse_verify_limit(value)?;
            } else if arg == "--verify-limit" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --verify-limit".to_string())?
                    .into();
                verify_limit = parse_verify_limit(&value)?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            verify_limit,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --features probe --bin scale_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Maximum item count to verify via exhaustive
                                enumeration, at most 24 (default: 16)
  -h, --help                    Print this help message

Examples:
  cargo run --features probe --bin scale_probe
  cargo run --features probe --bin scale_probe -- --format table --verify-limit 12
"
        );
    }
}

fn parse_verify_limit(value: &str) -> Result<usize, String> {
    let limit = value
        .parse::<usize>()
        .map_err(|_| "verify limit must be a positive integer".to_string())?;
    // Enumeration is 2^N subsets; past 24 items it dominates the probe.
    if limit == 0 || limit > 24 {
        return Err("verify limit must be in 1..=24".to_string());
    }
    Ok(limit)
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

#[derive(Clone)]
struct Measurement {
    scenario: &'static str,
    size_desc: String,
    wall_s: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone, Copy)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

fn run_item_scaling(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const ITEM_COUNTS: &[usize] = &[12, 16, 64, 256, 1024, 4096];
    let total = ITEM_COUNTS.len();

    ITEM_COUNTS
        .iter()
        .enumerate()
        .map(|(idx, &n)| {
            eprint!("      [{}/{}] Testing {} items... ", idx + 1, total, n);
            let mut rng = StdRng::seed_from_u64(0xC0FFEE ^ n as u64);
            let (values, weights) = random_items(&mut rng, n);
            let capacity = half_weight_capacity(&weights);
            let cells = table_cells(n, capacity as usize + 1).expect("table size overflow");

            let mut value_result = 0.0f64;
            let mut chosen_result = 0usize;
            let m = measure(
                "knapsack_items",
                format!("items={n},capacity={capacity},cells={cells}"),
                sys,
                || {
                    let instance =
                        KnapsackInstance::new(values.clone(), weights.clone(), capacity)
                            .expect("probe instance must validate");
                    let solver = KnapsackSolver::new(instance);
                    let solution = solver.solve();
                    value_result = solution.value;
                    chosen_result = solution.items.len();
                    verify(options, &values, &weights, capacity, &solution)
                },
            );
            eprintln!(
                "{} value={:.2}, chosen={}, time={:.3}s, status={}",
                m.verification_status.icon(),
                value_result,
                chosen_result,
                m.wall_s,
                m.verification_status.label()
            );
            m
        })
        .collect()
}

fn run_capacity_scaling(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const CAPACITIES: &[u32] = &[1_000, 4_000, 16_000, 64_000, 256_000];
    const ITEMS: usize = 256;
    let total = CAPACITIES.len();
    let mut rng = StdRng::seed_from_u64(0x5ACC);
    let (values, weights) = random_items(&mut rng, ITEMS);

    CAPACITIES
        .iter()
        .enumerate()
        .map(|(idx, &capacity)| {
            eprint!(
                "      [{}/{}] Testing capacity {}... ",
                idx + 1,
                total,
                capacity
            );
            let cells =
                table_cells(ITEMS, capacity as usize + 1).expect("table size overflow");

            let mut value_result = 0.0f64;
            let mut chosen_result = 0usize;
            let m = measure(
                "knapsack_capacity",
                format!("items={ITEMS},capacity={capacity},cells={cells}"),
                sys,
                || {
                    let instance =
                        KnapsackInstance::new(values.clone(), weights.clone(), capacity)
                            .expect("probe instance must validate");
                    let solver = KnapsackSolver::new(instance);
                    let solution = solver.solve();
                    value_result = solution.value;
                    chosen_result = solution.items.len();
                    verify(options, &values, &weights, capacity, &solution)
                },
            );
            eprintln!(
                "{} value={:.2}, chosen={}, time={:.3}s, status={}",
                m.verification_status.icon(),
                value_result,
                chosen_result,
                m.wall_s,
                m.verification_status.label()
            );
            m
        })
        .collect()
}

fn verify(
    options: &Options,
    values: &[f64],
    weights: &[u32],
    capacity: u32,
    solution: &knap_dp::Solution,
) -> (VerificationStatus, Option<String>) {
    let chosen_weight: u64 = solution.items.iter().map(|&i| u64::from(weights[i])).sum();
    if chosen_weight > u64::from(capacity) {
        return (
            VerificationStatus::Failed,
            Some(format!(
                "chosen weight {chosen_weight} exceeds capacity {capacity}"
            )),
        );
    }
    if values.len() > options.verify_limit {
        return (VerificationStatus::NotChecked, None);
    }
    let baseline = brute_force(values, weights, capacity);
    if (solution.value - baseline).abs() <= 1e-6 {
        (VerificationStatus::Passed, None)
    } else {
        (
            VerificationStatus::Failed,
            Some(format!("expected {baseline}, got {}", solution.value)),
        )
    }
}

/// Maximum over all feasible subsets, by enumeration. Only callable for
/// small item counts.
fn brute_force(values: &[f64], weights: &[u32], capacity: u32) -> f64 {
    let n = values.len();
    assert!(n < usize::BITS as usize);
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

fn random_items(rng: &mut StdRng, n: usize) -> (Vec<f64>, Vec<u32>) {
    let values = (0..n).map(|_| rng.gen_range(5.0..30.0)).collect();
    let weights = (0..n).map(|_| rng.gen_range(1..20)).collect();
    (values, weights)
}

fn half_weight_capacity(weights: &[u32]) -> u32 {
    let total: u64 = weights.iter().map(|&w| u64::from(w)).sum();
    ((total / 2).max(1)).min(u64::from(u32::MAX)) as u32
}

fn print_summary(measurements: &[Measurement], options: &Options) {
    let mut passed = 0;
    let mut failed = 0;
    let mut not_checked = 0;
    for m in measurements {
        match m.verification_status {
            VerificationStatus::Passed => passed += 1,
            VerificationStatus::Failed => failed += 1,
            VerificationStatus::NotChecked => not_checked += 1,
        }
    }

    eprintln!("{}", "=".repeat(80));
    eprintln!("Summary");
    eprintln!("{}", "=".repeat(80));
    eprintln!("  Total runs: {}", measurements.len());
    eprintln!("  ✓ Passed: {passed}");
    eprintln!("  ✗ Failed: {failed}");
    eprintln!(
        "  ○ Not checked (more than {} items): {not_checked}",
        options.verify_limit
    );

    if failed > 0 {
        eprintln!();
        eprintln!("Failed runs:");
        for m in measurements {
            if matches!(m.verification_status, VerificationStatus::Failed) {
                eprintln!("  ✗ {} ({})", m.scenario, m.size_desc);
                if let Some(ref detail) = m.verification_detail {
                    eprintln!("     Error: {detail}");
                }
            }
        }
    }
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

fn measure<F>(
    scenario: &'static str,
    size_desc: String,
    sys: &mut System,
    compute: F,
) -> Measurement
where
    F: FnOnce() -> (VerificationStatus, Option<String>),
{
    let before = rss_kib(sys);
    let start = Instant::now();
    let (status, detail) = compute();
    let duration = start.elapsed();
    let after = rss_kib(sys);

    Measurement {
        scenario,
        size_desc,
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        verification_status: status,
        verification_detail: detail,
    }
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,size_desc,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .verification_detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{:.3},{},{},\"{}\"",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let mut col1 = "scenario".len();
    let mut col2 = "size".len();
    for m in measurements {
        col1 = col1.max(m.scenario.len());
        col2 = col2.max(m.size_desc.len());
    }

    println!(
        "{:<col1$}  {:<col2$}  {:>12}  {:>14}  {:>12}  {}",
        "scenario",
        "size",
        "wall_s",
        "rss_delta_kib",
        "status",
        "detail",
        col1 = col1,
        col2 = col2
    );
    println!(
        "{:-<col1$}  {:-<col2$}  {:-<12}  {:-<14}  {:-<12}  {:-<12}",
        "",
        "",
        "",
        "",
        "",
        "",
        col1 = col1,
        col2 = col2
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:<col2$}  {:>12.3}  {:>14}  {:>12}  {}",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            m.verification_detail
                .as_ref()
                .map(|s| s.as_str())
                .unwrap_or(""),
            col1 = col1,
            col2 = col2
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = m.verification_detail.as_ref().map(|s| s.replace('"', "'"));
        println!(
            "  {{\"scenario\":\"{}\",\"size\":\"{}\",\"wall_s\":{:.3},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            match detail {
                Some(ref d) => format!("\"{d}\""),
                None => "null".to_string(),
            },
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}
