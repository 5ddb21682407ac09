//! Random graph generators used by the experiments and tests.

use rand::Rng;

/// Samples an Erdős–Rényi graph `G(n, p)`: each of the `n * (n - 1) / 2`
/// unordered vertex pairs becomes an edge independently with probability `p`.
///
/// `p` must lie in `[0, 1]`.
pub fn erdos_renyi<R: Rng>(n: usize, p: f64, rng: &mut R) -> Vec<(usize, usize)> {
    let mut edges = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen_bool(p) {
                edges.push((i, j));
            }
        }
    }
    edges
}

/// Builds two cliques on `floor(n / 2)` and `ceil(n / 2)` vertices joined by
/// `k` uniformly random bridge edges.
///
/// Bridges may repeat; duplicates count as multiplicity. With `k = 1` the
/// global minimum cut is exactly 1 (the bridge), which makes this family a
/// useful stress test for the randomized estimators. Returns an empty edge
/// list for `n < 2`.
pub fn two_cliques_with_bridges<R: Rng>(n: usize, k: usize, rng: &mut R) -> Vec<(usize, usize)> {
    if n < 2 {
        return Vec::new();
    }
    let half = n / 2;
    let mut edges = Vec::new();

    for i in 0..half {
        for j in (i + 1)..half {
            edges.push((i, j));
        }
    }
    for i in half..n {
        for j in (i + 1)..n {
            edges.push((i, j));
        }
    }
    for _ in 0..k {
        edges.push((rng.gen_range(0..half), rng.gen_range(half..n)));
    }

    edges
}
