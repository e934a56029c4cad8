//! fastArrayops Reduction Benchmark Examples
//!
//! This example compares sequential and parallel execution of the
//! reduction kernels on uniform random integer buffers:
//! - Average of 50_000 small values
//! - Min/max search over 1_000_000 values
//! - Average of 5_000_000 values (sum far beyond `i32` range)
//!
//! Timings are wall-clock and intentionally rough; the point is the
//! comparison and the result equality, not a rigorous benchmark (see
//! `benches/kernels.rs` for that).

use fastArrayops::prelude::*;
use rand::prelude::*;
use std::time::Instant;

fn main() -> Result<(), KernelError> {
    println!("{}", "=".repeat(80));
    println!("fastArrayops Reduction Benchmarks");
    println!("{}", "=".repeat(80));
    println!("Host-reported parallelism: {} workers", rayon::current_num_threads());
    println!();

    example_1_average()?;
    example_2_min_max()?;
    example_3_large_average()?;

    Ok(())
}

/// Uniform random fill over `lo..hi`, reproducible across runs.
fn random_buffer(n: usize, lo: i32, hi: i32, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(lo..hi)).collect()
}

fn report(label: &str, seq_ms: f64, par_ms: f64) {
    if par_ms < seq_ms {
        println!("Conclusion: parallel {label} is faster ({par_ms:.3} ms vs {seq_ms:.3} ms).");
    } else {
        println!(
            "Conclusion: sequential {label} is faster ({seq_ms:.3} ms vs {par_ms:.3} ms); \
             the parallel overhead exceeds the gain at this size."
        );
    }
    println!();
}

/// Example 1: Average of a small buffer
fn example_1_average() -> Result<(), KernelError> {
    println!("Example 1: Average (50_000 values in 1..=100)");
    println!("{}", "-".repeat(80));

    let data = random_buffer(50_000, 1, 101, 7);

    let seq = Reduction::new().mode(Sequential).build()?;
    let par = Reduction::new().build()?;

    let start = Instant::now();
    let avg_seq = seq.average(&data)?;
    let seq_ms = start.elapsed().as_secs_f64() * 1e3;

    let start = Instant::now();
    let avg_par = par.average(&data)?;
    let par_ms = start.elapsed().as_secs_f64() * 1e3;

    println!("Sequential: average = {avg_seq}, time = {seq_ms:.3} ms");
    println!("Parallel  : average = {avg_par}, time = {par_ms:.3} ms");
    assert_eq!(avg_seq, avg_par, "integer accumulation makes both averages exact");
    report("average", seq_ms, par_ms);
    Ok(())
}

/// Example 2: Min/max over a large buffer
fn example_2_min_max() -> Result<(), KernelError> {
    println!("Example 2: Min/Max (1_000_000 values in 0..100_000)");
    println!("{}", "-".repeat(80));

    let data = random_buffer(1_000_000, 0, 100_000, 11);

    let seq = Reduction::new().mode(Sequential).build()?;
    let par = Reduction::new().build()?;

    let start = Instant::now();
    let mm_seq = seq.min_max(&data)?;
    let seq_ms = start.elapsed().as_secs_f64() * 1e3;

    let start = Instant::now();
    let mm_par = par.min_max(&data)?;
    let par_ms = start.elapsed().as_secs_f64() * 1e3;

    println!("Sequential: {mm_seq}, time = {seq_ms:.3} ms");
    println!("Parallel  : {mm_par}, time = {par_ms:.3} ms");
    assert_eq!(mm_seq, mm_par, "both modes must agree on min and max");
    println!("Both modes agree on min and max.");
    report("min/max", seq_ms, par_ms);
    Ok(())
}

/// Example 3: Average of 5_000_000 values
///
/// The sum here overflows a 32-bit accumulator many times over; the wide
/// accumulator keeps it exact.
fn example_3_large_average() -> Result<(), KernelError> {
    println!("Example 3: Average (5_000_000 values in 0..100_000)");
    println!("{}", "-".repeat(80));

    let data = random_buffer(5_000_000, 0, 100_000, 13);

    let seq = Reduction::new().mode(Sequential).build()?;
    let par = Reduction::new().build()?;

    let start = Instant::now();
    let out_seq = seq.summarize(&data)?;
    let seq_ms = start.elapsed().as_secs_f64() * 1e3;

    let start = Instant::now();
    let out_par = par.summarize(&data)?;
    let par_ms = start.elapsed().as_secs_f64() * 1e3;

    println!("Sequential: sum = {}, average = {}, time = {seq_ms:.3} ms", out_seq.sum, out_seq.average);
    println!("Parallel  : sum = {}, average = {}, time = {par_ms:.3} ms", out_par.sum, out_par.average);
    assert_eq!(out_seq, out_par);
    report("average", seq_ms, par_ms);
    Ok(())
}
