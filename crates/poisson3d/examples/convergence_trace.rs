//! Residual trace over 50 iterations on a small grid.
//!
//! Run with: `cargo run --example convergence_trace -p poisson3d --release`

use poisson3d::{GridSize, JacobiSolver3D, Timer};

fn main() {
    let size = GridSize::new(33, 33, 33).unwrap();
    let mut solver = JacobiSolver3D::new(size);

    println!(
        "Grid: {}x{}x{} ({} interior cells)",
        size.nx(),
        size.ny(),
        size.nz(),
        size.interior_cells()
    );
    println!("{:>6} {:>14}", "iter", "residual");

    let timer = Timer::start();
    let mut residual = 0.0;
    for n in 1..=50 {
        residual = solver.step();
        assert!(residual.is_finite(), "residual diverged at iteration {}", n);
        if n % 5 == 0 || n == 1 {
            println!("{:>6} {:>14.6e}", n, residual);
        }
    }

    println!("\nFinal residual: {:e}", residual);
    println!("Elapsed: {:.3} s", timer.elapsed_secs());
}
