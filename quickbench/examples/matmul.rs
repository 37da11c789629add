//! Matrix Chain Ordering
//!
//! Three ways to compute `A · B · C` for an N×N `A`, N×1 `B` and 1×N `C`.
//! The results agree up to rounding, but the association order changes the
//! cost from O(N²) to O(N³).
//!
//! Run with:
//!   cargo run --example matmul --release
//!   RUST_LOG=quickbench=debug cargo run --example matmul --release

use quickbench::prelude::*;
use quickbench::{CheckOptions, QuickConfig};
use rand::Rng;

const N: usize = 200;

/// Dense row-major matrix
#[derive(Debug, Clone, PartialEq)]
struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    fn random(rows: usize, cols: usize, rng: &mut impl Rng) -> Self {
        let data = (0..rows * cols).map(|_| rng.gen_range(-1.0..1.0)).collect();
        Self { rows, cols, data }
    }

    fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    fn at(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    fn matmul(&self, other: &Matrix) -> Matrix {
        assert_eq!(self.cols, other.rows, "shape mismatch");
        let mut out = Matrix::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                let lhs = self.at(i, k);
                for j in 0..other.cols {
                    out.data[i * other.cols + j] += lhs * other.at(k, j);
                }
            }
        }
        out
    }
}

impl AsRef<[f64]> for Matrix {
    fn as_ref(&self) -> &[f64] {
        &self.data
    }
}

/// (A · B) · C: two cheap products
#[candidate]
fn good(a: &Matrix, b: &Matrix, c: &Matrix) -> Matrix {
    a.matmul(b).matmul(c)
}

/// A · (B · C): materializes an N×N intermediate
#[candidate]
fn bad(a: &Matrix, b: &Matrix, c: &Matrix) -> Matrix {
    a.matmul(&b.matmul(c))
}

/// Fused loop over the contraction
#[candidate]
fn einsum(a: &Matrix, b: &Matrix, c: &Matrix) -> Matrix {
    let mut out = Matrix::zeros(a.rows, c.cols);
    for i in 0..a.rows {
        let ab: f64 = (0..a.cols).map(|j| a.at(i, j) * b.at(j, 0)).sum();
        for l in 0..c.cols {
            out.data[i * c.cols + l] = ab * c.at(0, l);
        }
    }
    out
}

fn main() -> anyhow::Result<()> {
    let config = QuickConfig::discover().unwrap_or_default();
    quickbench::init_logging(&config.logging)?;

    let mut rng = rand::thread_rng();
    let args = args! {
        "a" => Matrix::random(N, N, &mut rng),
        "b" => Matrix::random(N, 1, &mut rng),
        "c" => Matrix::random(1, N, &mut rng),
    };

    let mut funcs = candidates![good_candidate(), bad_candidate(), einsum_candidate()];
    let close = all_close_default::<Matrix>();

    // Labels derived from the function names
    quickbench::check(&mut funcs, &args, &close, &CheckOptions::from_config(&config))?;
    quickbench::bench(&mut funcs, &args, &BenchOptions::from_config(&config))?;

    // Display names for prettier output
    let names = ["naive1", "naive2", "fused"];
    quickbench::check(
        &mut funcs,
        &args,
        &close,
        &CheckOptions::from_config(&config).names(names),
    )?;
    quickbench::bench(
        &mut funcs,
        &args,
        &BenchOptions::from_config(&config).names(names),
    )?;

    // Anonymous closures work too
    let mut closures = candidates![
        FnCandidate::new(&["a", "b", "c"], |args| {
            let (a, b, c) = (
                args.get::<Matrix>("a")?,
                args.get::<Matrix>("b")?,
                args.get::<Matrix>("c")?,
            );
            Ok(a.matmul(b).matmul(c))
        }),
        FnCandidate::new(&["a", "b", "c"], |args| {
            let (a, b, c) = (
                args.get::<Matrix>("a")?,
                args.get::<Matrix>("b")?,
                args.get::<Matrix>("c")?,
            );
            Ok(a.matmul(&b.matmul(c)))
        }),
    ];
    quickbench::check(&mut closures, &args, &close, &CheckOptions::default())?;
    quickbench::bench(&mut closures, &args, &BenchOptions::default().iterations(3))?;

    Ok(())
}
