//! Single-threaded matrix-multiply benchmark driver.
//!
//! Multiplies the embedded input matrices with the CPU kernel and verifies
//! the product against the embedded reference. One deterministic pass:
//! allocate, multiply, verify, exit. The exit status is the result
//! (0 = all elements match, 1 = mismatch, 2 = usage error).

use std::process::ExitCode;
use std::time::Instant;

use stmm_dataset::Dataset;
use stmm_matrix::{MatmulKernel, NaiveKernel};
use stmm_verify::verify;

fn usage() -> ExitCode {
    eprintln!("usage: st-matmul [dim]");
    eprintln!(
        "  dim: dataset dimension, one of {:?} (default 8)",
        Dataset::available_dims()
    );
    ExitCode::from(2)
}

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let dim = match args.next() {
        None => 8,
        Some(arg) => match arg.parse::<usize>() {
            Ok(d) => d,
            Err(_) => return usage(),
        },
    };
    if args.next().is_some() {
        return usage();
    }

    let dataset = match Dataset::for_dim(dim) {
        Ok(ds) => ds,
        Err(err) => {
            eprintln!("st-matmul: {err}");
            return usage();
        }
    };

    let kernel = NaiveKernel;
    // The kernel writes every element; the initial contents are immaterial.
    let mut output = vec![0i32; dataset.numel()];

    let start = Instant::now();
    kernel.matmul(
        dataset.dim(),
        dataset.input_a(),
        dataset.input_b(),
        &mut output,
    );
    let elapsed = start.elapsed();

    let report = verify(&output, dataset.expected());
    println!(
        "st-matmul: dim={} kernel={} time={:.3}ms {}",
        dataset.dim(),
        kernel.name(),
        elapsed.as_secs_f64() * 1e3,
        report
    );

    ExitCode::from(report.status() as u8)
}
