//! End-to-end checks: kernel output against the embedded reference data,
//! for every dataset and kernel, mirroring what the driver binary does.

use stmm_dataset::Dataset;
use stmm_matrix::{MatmulKernel, Matrix, NaiveKernel, RowMajorKernel};
use stmm_verify::verify;

fn run_pipeline(dim: usize, kernel: &dyn MatmulKernel) {
    let dataset = Dataset::for_dim(dim).unwrap();
    let mut output = vec![0i32; dataset.numel()];
    kernel.matmul(
        dataset.dim(),
        dataset.input_a(),
        dataset.input_b(),
        &mut output,
    );

    let report = verify(&output, dataset.expected());
    assert!(
        report.passed(),
        "dim={} kernel={}: {}",
        dim,
        kernel.name(),
        report
    );
    assert_eq!(report.status(), 0);
    assert_eq!(report.checked(), dataset.numel());
}

#[test]
fn dataset_8_verifies() {
    run_pipeline(8, &NaiveKernel);
    run_pipeline(8, &RowMajorKernel);
}

#[test]
fn dataset_32_verifies() {
    run_pipeline(32, &NaiveKernel);
    run_pipeline(32, &RowMajorKernel);
}

#[test]
fn dataset_8_known_corners() {
    let dataset = Dataset::for_dim(8).unwrap();
    let a = Matrix::from_vec(8, dataset.input_a().to_vec()).unwrap();
    let b = Matrix::from_vec(8, dataset.input_b().to_vec()).unwrap();
    let c = a.multiply(&b, &NaiveKernel).unwrap();
    assert_eq!(c.get(0, 0), 5);
    assert_eq!(c.get(7, 7), 12);
    assert_eq!(c.data(), dataset.expected());
}

#[test]
fn corrupted_output_is_caught() {
    let dataset = Dataset::for_dim(8).unwrap();
    let mut output = vec![0i32; dataset.numel()];
    NaiveKernel.matmul(
        dataset.dim(),
        dataset.input_a(),
        dataset.input_b(),
        &mut output,
    );
    output[17] ^= 1;

    let report = verify(&output, dataset.expected());
    assert!(!report.passed());
    assert_eq!(report.status(), 1);
    assert_eq!(report.mismatches(), 1);
    assert_eq!(report.first_mismatch().unwrap().index, 17);
}
