//! Solver property tests.
//!
//! Verifies the solution invariants on fixed and randomly generated
//! instances: the assignment is a bijection, the duals are feasible and
//! certify the cost, and the optimum matches an exhaustive permutation
//! search for every small instance.

use lap_core::{solve, CostFn, CostMatrix, CostSource, Solution};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn random_matrix(rng: &mut StdRng, dim: usize) -> CostMatrix {
    let rows: Vec<Vec<f64>> = (0..dim)
        .map(|_| (0..dim).map(|_| rng.gen_range(0.0..100.0)).collect())
        .collect();
    CostMatrix::from_rows(&rows).unwrap()
}

/// Exhaustive minimum over all dim! assignments. Only viable for dim <= 8.
fn brute_force_min(m: &CostMatrix) -> f64 {
    fn recurse(m: &CostMatrix, row: usize, used: &mut [bool], acc: f64, best: &mut f64) {
        if row == m.dim() {
            if acc < *best {
                *best = acc;
            }
            return;
        }
        for j in 0..m.dim() {
            if !used[j] {
                used[j] = true;
                recurse(m, row + 1, used, acc + m.cost(row, j), best);
                used[j] = false;
            }
        }
    }
    let mut used = vec![false; m.dim()];
    let mut best = f64::INFINITY;
    recurse(m, 0, &mut used, 0.0, &mut best);
    best
}

fn assert_bijection(sol: &Solution) {
    let dim = sol.row_to_col.len();
    let mut seen = vec![false; dim];
    for i in 0..dim {
        let j = sol.row_to_col[i];
        assert!(j < dim, "row {} assigned out-of-range column {}", i, j);
        assert!(!seen[j], "column {} assigned twice", j);
        seen[j] = true;
        assert_eq!(
            sol.col_to_row[j], i,
            "col_to_row[{}] = {} does not invert row_to_col[{}] = {}",
            j, sol.col_to_row[j], i, j
        );
    }
}

/// Tolerance at the scale the solver itself works to: the input-derived
/// epsilon (mean cost / 10⁴), with headroom for its stacked use across the
/// reduction phases.
fn feasibility_tolerance(m: &CostMatrix) -> f64 {
    let dim = m.dim();
    let mut sum = 0.0;
    for i in 0..dim {
        for j in 0..dim {
            sum += m.cost(i, j);
        }
    }
    3.0 * (sum / dim as f64 / 10_000.0) + 1e-9
}

// ── Fixed instances ──────────────────────────────────────────────────────────

#[test]
fn test_degenerate_single_row() {
    let m = CostMatrix::from_rows(&[vec![13.5]]).unwrap();
    let sol = m.solve().unwrap();
    assert_eq!(sol.row_to_col, vec![0]);
    assert_eq!(sol.col_to_row, vec![0]);
    assert_eq!(sol.cost, 13.5);
}

#[test]
fn test_uniform_matrix_total_is_pinned() {
    for dim in 1..=6 {
        let m = CostMatrix::from_rows(&vec![vec![2.5; dim]; dim]).unwrap();
        let sol = m.solve().unwrap();
        assert_bijection(&sol);
        assert!(
            (sol.cost - 2.5 * dim as f64).abs() < 1e-9,
            "dim={} cost={}",
            dim,
            sol.cost
        );
    }
}

#[test]
fn test_known_3x3_against_brute_force() {
    let m = CostMatrix::from_rows(&[
        vec![7.0, 5.0, 9.0],
        vec![2.0, 8.0, 3.0],
        vec![6.0, 4.0, 1.0],
    ])
    .unwrap();
    let sol = m.solve().unwrap();
    assert_eq!(sol.cost, brute_force_min(&m));
    assert_eq!(sol.cost, 8.0, "5 + 2 + 1 via 0→1, 1→0, 2→2");
    assert_eq!(sol.row_to_col, vec![1, 0, 2]);
}

#[test]
fn test_closure_source_equivalent_to_matrix() {
    let mut rng = StdRng::seed_from_u64(7);
    let m = random_matrix(&mut rng, 12);
    let by_matrix = solve(12, &m).unwrap();
    let by_closure = solve(12, &CostFn::new(|i, j| m.cost(i, j))).unwrap();
    assert_eq!(by_matrix.cost, by_closure.cost);
    assert_eq!(by_matrix.row_to_col, by_closure.row_to_col);
    assert_eq!(by_matrix.col_duals, by_closure.col_duals);
}

// ── Randomised properties ────────────────────────────────────────────────────

#[test]
fn test_bijection_on_random_instances() {
    let mut rng = StdRng::seed_from_u64(0xA55);
    for dim in [1, 2, 3, 5, 8, 13, 21, 34] {
        let m = random_matrix(&mut rng, dim);
        let sol = m.solve().unwrap();
        assert_bijection(&sol);
    }
}

#[test]
fn test_brute_force_cross_check() {
    let mut rng = StdRng::seed_from_u64(0xBEEF);
    for dim in 2..=8 {
        for _ in 0..20 {
            let m = random_matrix(&mut rng, dim);
            let sol = m.solve().unwrap();
            let exact = brute_force_min(&m);
            assert!(
                (sol.cost - exact).abs() < 1e-6,
                "dim={}: solver found {}, brute force found {}",
                dim,
                sol.cost,
                exact
            );
        }
    }
}

#[test]
fn test_dual_feasibility() {
    let mut rng = StdRng::seed_from_u64(0xD0A1);
    for dim in [2, 4, 7, 16, 25] {
        let m = random_matrix(&mut rng, dim);
        let sol = m.solve().unwrap();
        let tol = feasibility_tolerance(&m);

        for i in 0..dim {
            for j in 0..dim {
                let reduced = m.cost(i, j) - sol.row_duals[i] - sol.col_duals[j];
                assert!(
                    reduced >= -tol,
                    "dim={}: reduced cost of ({}, {}) is {} < -{}",
                    dim,
                    i,
                    j,
                    reduced,
                    tol
                );
            }
        }
        // Equality on assigned pairs: u is defined from the assignment.
        for i in 0..dim {
            let j = sol.row_to_col[i];
            let reduced = m.cost(i, j) - sol.row_duals[i] - sol.col_duals[j];
            assert!(
                reduced.abs() < 1e-9,
                "assigned pair ({}, {}) has reduced cost {}",
                i,
                j,
                reduced
            );
        }
    }
}

#[test]
fn test_cost_consistency_and_lp_duality() {
    let mut rng = StdRng::seed_from_u64(0xCAFE);
    for dim in [3, 6, 10, 20] {
        let m = random_matrix(&mut rng, dim);
        let sol = m.solve().unwrap();

        let primal: f64 = (0..dim).map(|i| m.cost(i, sol.row_to_col[i])).sum();
        assert!(
            (sol.cost - primal).abs() < 1e-9,
            "reported cost {} != primal sum {}",
            sol.cost,
            primal
        );

        let dual: f64 =
            sol.row_duals.iter().sum::<f64>() + sol.col_duals.iter().sum::<f64>();
        assert!(
            (sol.cost - dual).abs() < 1e-6 * (1.0 + sol.cost.abs()),
            "duality gap: primal={} dual={}",
            sol.cost,
            dual
        );
    }
}

#[test]
fn test_symmetry_under_relabeling() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let dim = 9;
    let m = random_matrix(&mut rng, dim);

    // A fixed pair of permutations: p relabels rows, q relabels columns.
    let p = [4, 0, 7, 2, 8, 1, 5, 3, 6];
    let q = [3, 6, 0, 8, 5, 2, 7, 1, 4];

    let original = m.solve().unwrap();
    let permuted = solve(dim, &CostFn::new(|i, j| m.cost(p[i], q[j]))).unwrap();

    assert!(
        (original.cost - permuted.cost).abs() < 1e-6,
        "relabeling changed the optimum: {} vs {}",
        original.cost,
        permuted.cost
    );

    // Mapping the permuted assignment back through (p, q) must price out to
    // the same total under the original costs.
    let mapped_back: f64 = (0..dim)
        .map(|i| m.cost(p[i], q[permuted.row_to_col[i]]))
        .sum();
    assert!(
        (mapped_back - original.cost).abs() < 1e-6,
        "mapped-back assignment costs {} vs optimum {}",
        mapped_back,
        original.cost
    );
}

// ── Error paths ──────────────────────────────────────────────────────────────

#[test]
fn test_empty_problem_is_rejected() {
    let err = solve(0, &CostFn::new(|_, _| 0.0)).unwrap_err();
    assert_eq!(err, lap_core::Error::EmptyProblem);
}

#[test]
fn test_non_finite_cost_is_rejected_before_solving() {
    let err = solve(
        4,
        &CostFn::new(|i, j| if (i, j) == (2, 3) { f64::NEG_INFINITY } else { 1.0 }),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        lap_core::Error::NonFiniteCost { row: 2, col: 3, .. }
    ));
}
