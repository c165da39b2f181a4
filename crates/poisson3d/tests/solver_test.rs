//! End-to-end solver tests: initialization properties, the golden residual
//! for a small grid, relaxation stability and worker-count equivalence.

use poisson3d::{metrics, GridSize, JacobiSolver3D};

/// Residual of the first iteration on a 9^3 grid, derived by hand from the
/// seed field: with all borders zero and p = i^2/49 in the interior, the
/// squared residuals sum to 517804 / 294^2.
const GOLDEN_RESIDUAL_9: f64 = 517_804.0 / 86_436.0;

#[test]
fn test_shape_invariant_after_init() {
    let size = GridSize::new(9, 11, 13).unwrap();
    let solver = JacobiSolver3D::new(size);
    let g = &solver.grid;
    let cells = 9 * 11 * 13;
    assert_eq!(g.p.len(), cells);
    assert_eq!(g.bnd.len(), cells);
    assert_eq!(g.wrk1.len(), cells);
    assert_eq!(g.wrk2.len(), cells);
    assert_eq!(g.a.len(), 4 * cells);
    assert_eq!(g.b.len(), 3 * cells);
    assert_eq!(g.c.len(), 3 * cells);

    // Every cell on a border face keeps its zero-pass values.
    for i in 0..9 {
        for j in 0..11 {
            for k in 0..13 {
                if i != 0 && i != 8 && j != 0 && j != 10 && k != 0 && k != 12 {
                    continue;
                }
                let idx = g.cell_index(i, j, k);
                assert_eq!(g.p[idx], 0.0);
                assert_eq!(g.bnd[idx], 0.0);
                assert_eq!(g.a[3 * cells + idx], 0.0);
            }
        }
    }
}

#[test]
fn test_seed_gradient_property() {
    let size = GridSize::new(9, 9, 9).unwrap();
    let solver = JacobiSolver3D::new(size);
    let g = &solver.grid;
    for i in 1..8 {
        let expected = (i * i) as f32 / 49.0;
        for j in 1..8 {
            for k in 1..8 {
                assert_eq!(
                    g.p[g.cell_index(i, j, k)],
                    expected,
                    "seed at ({},{},{})",
                    i,
                    j,
                    k
                );
            }
        }
    }
}

#[test]
fn test_single_iteration_golden_residual() {
    let mut solver = JacobiSolver3D::new(GridSize::new(9, 9, 9).unwrap());
    let gosa = solver.step();
    let rel = (gosa - GOLDEN_RESIDUAL_9).abs() / GOLDEN_RESIDUAL_9;
    assert!(
        rel < 1e-4,
        "gosa = {}, expected {} (rel err {})",
        gosa,
        GOLDEN_RESIDUAL_9,
        rel
    );
}

#[test]
fn test_relaxation_stays_bounded() {
    let mut solver = JacobiSolver3D::new(GridSize::new(17, 17, 17).unwrap());
    let first = solver.step();
    let mut last = first;
    for _ in 0..49 {
        last = solver.step();
        assert!(last.is_finite(), "residual diverged: {}", last);
    }
    assert!(
        last < first,
        "residual should shrink over 50 iterations: first {}, last {}",
        first,
        last
    );
}

#[test]
fn test_initializer_is_idempotent() {
    let mut solver = JacobiSolver3D::new(GridSize::new(9, 9, 9).unwrap());
    let once = solver.grid.clone();
    solver.reinitialize();
    assert_eq!(solver.grid.a, once.a);
    assert_eq!(solver.grid.b, once.b);
    assert_eq!(solver.grid.c, once.c);
    assert_eq!(solver.grid.p, once.p);
    assert_eq!(solver.grid.bnd, once.bnd);
    assert_eq!(solver.grid.wrk1, once.wrk1);
    assert_eq!(solver.grid.wrk2, once.wrk2);
}

#[test]
fn test_reinitialize_after_run_restores_seed() {
    let mut solver = JacobiSolver3D::new(GridSize::new(9, 9, 9).unwrap());
    let seeded = solver.grid.p.clone();
    solver.run(5);
    assert_ne!(solver.grid.p, seeded);
    solver.reinitialize();
    assert_eq!(solver.grid.p, seeded);
}

#[test]
fn test_throughput_formula() {
    let size = GridSize::new(9, 9, 9).unwrap();
    let flop = metrics::flop_per_iteration(size);
    assert_eq!(flop, 34.0 * 343.0);
    let value = metrics::mflops(10, 2.0, flop);
    assert!((value - 0.05831).abs() < 1e-9, "got {}", value);
}

#[test]
fn test_parallel_sequential_equivalence() {
    let residual_with_threads = |threads: usize| -> f64 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .unwrap();
        pool.install(|| {
            let mut solver = JacobiSolver3D::new(GridSize::new(17, 17, 17).unwrap());
            solver.run(3)
        })
    };

    let sequential = residual_with_threads(1);
    for threads in [2, 4] {
        let parallel = residual_with_threads(threads);
        let rel = (parallel - sequential).abs() / sequential.abs();
        assert!(
            rel < 1e-4,
            "{} workers: {} vs sequential {} (rel err {})",
            threads,
            parallel,
            sequential,
            rel
        );
    }
}
