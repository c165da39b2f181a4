//! Command-line harness for the relaxation benchmark.
//!
//! Runs a short rehearsal first, then the timed measurement, and prints the
//! residual and MFLOPS figures.
//!
//! Usage: `poisson-bench [SIZE] [ITERATIONS]`
//! where SIZE is `tiny`, `small`, `medium`, `large`, `xlarge` or an explicit
//! `NXxNYxNZ` triple (e.g. `65x65x129`).

use std::process::ExitCode;

use poisson3d::{metrics, BenchConfig, BenchReport, GridSize, JacobiSolver3D, Timer};

const DEFAULT_ITERATIONS: usize = 2000;
const REHEARSAL_ITERATIONS: usize = 3;

fn parse_size(arg: &str) -> Result<GridSize, String> {
    match arg {
        "tiny" => return Ok(GridSize::tiny()),
        "small" => return Ok(GridSize::small()),
        "medium" => return Ok(GridSize::medium()),
        "large" => return Ok(GridSize::large()),
        "xlarge" => return Ok(GridSize::extra_large()),
        _ => {}
    }

    let dims: Vec<usize> = arg
        .split('x')
        .map(|part| part.parse::<usize>())
        .collect::<Result<_, _>>()
        .map_err(|_| format!("unrecognized size '{}'", arg))?;
    match dims.as_slice() {
        [nx, ny, nz] => GridSize::new(*nx, *ny, *nz).map_err(|e| e.to_string()),
        _ => Err(format!("unrecognized size '{}'", arg)),
    }
}

fn parse_args() -> Result<BenchConfig, String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() > 2 {
        return Err("too many arguments".into());
    }

    let size = match args.first() {
        Some(arg) => parse_size(arg)?,
        None => GridSize::small(),
    };
    let iterations = match args.get(1) {
        Some(arg) => arg
            .parse::<usize>()
            .map_err(|_| format!("invalid iteration count '{}'", arg))?,
        None => DEFAULT_ITERATIONS,
    };

    BenchConfig::new(size, iterations).map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    let config = match parse_args() {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {}", message);
            eprintln!("usage: poisson-bench [tiny|small|medium|large|xlarge|NXxNYxNZ] [ITERATIONS]");
            return ExitCode::FAILURE;
        }
    };
    let size = config.size;

    println!(
        "Grid size: {} x {} x {} ({} cells, {} interior)",
        size.nx(),
        size.ny(),
        size.nz(),
        size.cells(),
        size.interior_cells()
    );

    let mut solver = JacobiSolver3D::new(size);

    println!("\nRehearsal: {} iterations", REHEARSAL_ITERATIONS);
    let timer = Timer::start();
    let residual = solver.run(REHEARSAL_ITERATIONS);
    let rehearsal_secs = timer.elapsed_secs();
    println!(
        "  {:.3} MFLOPS  time: {:.6} s  residual: {:e}",
        metrics::mflops(
            REHEARSAL_ITERATIONS,
            rehearsal_secs,
            metrics::flop_per_iteration(size)
        ),
        rehearsal_secs,
        residual
    );

    println!("\nMeasurement: {} iterations", config.iterations);
    solver.reinitialize();
    let timer = Timer::start();
    let residual = solver.run(config.iterations);
    let elapsed = timer.elapsed_secs();

    let report = BenchReport::new(size, config.iterations, elapsed, residual);
    println!("\n{}", report);

    ExitCode::SUCCESS
}
