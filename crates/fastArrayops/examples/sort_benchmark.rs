//! fastArrayops Selection-Sort Benchmark Example
//!
//! Compares sequential selection sort against the variant whose per-pass
//! minimum scan runs on a worker team, at two buffer sizes. Selection
//! sort is O(n^2) either way; the parallel scan only pays off once the
//! unsorted suffix is long enough to amortize the fork-join overhead.

use fastArrayops::prelude::*;
use rand::prelude::*;
use std::time::Instant;

fn main() -> Result<(), KernelError> {
    println!("{}", "=".repeat(80));
    println!("fastArrayops Selection-Sort Benchmarks");
    println!("{}", "=".repeat(80));
    println!("Host-reported parallelism: {} workers", rayon::current_num_threads());

    benchmark(1_000)?;
    benchmark(10_000)?;

    Ok(())
}

fn benchmark(n: usize) -> Result<(), KernelError> {
    let mut rng = StdRng::seed_from_u64(n as u64);
    let data: Vec<i32> = (0..n).map(|_| rng.random_range(0..100_000)).collect();

    let mut seq_buf = data.clone();
    let mut par_buf = data;

    let start = Instant::now();
    SelectionSort::new().mode(Sequential).build()?.sort(&mut seq_buf);
    let seq_ms = start.elapsed().as_secs_f64() * 1e3;

    let start = Instant::now();
    SelectionSort::new().build()?.sort(&mut par_buf);
    let par_ms = start.elapsed().as_secs_f64() * 1e3;

    assert_eq!(seq_buf, par_buf, "both modes must produce the same order");

    println!();
    println!("Buffer size: {n}");
    println!("Sequential sort time: {seq_ms:.3} ms");
    println!("Parallel sort time  : {par_ms:.3} ms");
    if par_ms < seq_ms {
        println!("Conclusion: the parallel scan is faster at size {n}.");
    } else {
        println!(
            "Conclusion: the sequential sort is faster at size {n}; \
             per-pass fork-join overhead exceeds the gain."
        );
    }

    Ok(())
}
