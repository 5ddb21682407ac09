use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rayon::prelude::*;

use super::union_find::UnionFind;
use super::validate_edges;
use crate::error::{GraphError, Result};

/// Runs a single trial of Karger's randomized contraction algorithm.
///
/// Contracts uniformly random edges until two super-vertices remain (or the
/// edge list runs out on a disconnected input), then reports how many of the
/// *original* edges cross the final two-way partition. Counting against the
/// original list makes the result insensitive to edges dropped as self-loops
/// along the way.
///
/// A single trial finds the true minimum cut with probability at least
/// `2 / (n * (n - 1))`; callers wanting reliable accuracy should repeat via
/// [`karger_min_cut`] or use [`super::karger_stein`].
///
/// # Arguments
/// - `n`: number of vertices; endpoints must lie in `0..n`.
/// - `edges`: undirected edge list, duplicates meaningful as multiplicity.
/// - `rng`: caller-owned random generator.
///
/// # Returns
/// The size of the cut found by this trial.
pub fn karger_once<R: Rng>(n: usize, edges: &[(usize, usize)], rng: &mut R) -> Result<usize> {
    validate_edges(n, edges)?;

    let mut dsu = UnionFind::new(n);
    let mut working = edges.to_vec();

    while dsu.components() > 2 && !working.is_empty() {
        let idx = rng.gen_range(0..working.len());
        let (u, v) = working[idx];
        let ru = dsu.find(u);
        let rv = dsu.find(v);
        if ru == rv {
            working.swap_remove(idx);
            continue;
        }

        dsu.union(ru, rv);
        let mut filtered = Vec::with_capacity(working.len());
        for &(a, b) in &working {
            let ra = dsu.find(a);
            let rb = dsu.find(b);
            if ra != rb {
                filtered.push((ra, rb));
            }
        }
        working = filtered;
    }

    Ok(edges
        .iter()
        .filter(|&&(u, v)| dsu.find(u) != dsu.find(v))
        .count())
}

/// Estimates the minimum cut as the smallest value seen over `trials`
/// independent runs of [`karger_once`].
///
/// # Examples
/// ```
/// use mincut::cut::karger_min_cut;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
///
/// // Triangle: contracting any edge leaves two vertices joined by two
/// // parallel edges, so every trial reports the true cut of 2.
/// let edges = vec![(0, 1), (1, 2), (2, 0)];
/// let mut rng = ChaCha20Rng::seed_from_u64(42);
/// assert_eq!(karger_min_cut(3, &edges, 10, &mut rng).unwrap(), 2);
/// ```
pub fn karger_min_cut<R: Rng>(
    n: usize,
    edges: &[(usize, usize)],
    trials: usize,
    rng: &mut R,
) -> Result<usize> {
    if trials == 0 {
        return Err(GraphError::invalid_input("trial count must be at least 1"));
    }
    let mut best = usize::MAX;
    for _ in 0..trials {
        let cut = karger_once(n, edges, rng)?;
        if cut < best {
            best = cut;
        }
    }
    Ok(best)
}

/// Parallel variant of [`karger_min_cut`].
///
/// Trials are embarrassingly parallel: each one owns its own copy of the edge
/// list and its own generator, seeded from a fresh 32-bit value drawn up
/// front from a master generator built from `seed`. The result is therefore
/// reproducible for a fixed `seed` and `trials`, independent of scheduling.
pub fn karger_min_cut_parallel(
    n: usize,
    edges: &[(usize, usize)],
    trials: usize,
    seed: u64,
) -> Result<usize> {
    if trials == 0 {
        return Err(GraphError::invalid_input("trial count must be at least 1"));
    }
    validate_edges(n, edges)?;

    let mut master = ChaCha20Rng::seed_from_u64(seed);
    let seeds: Vec<u32> = (0..trials).map(|_| master.next_u32()).collect();

    seeds
        .par_iter()
        .map(|&s| {
            let mut rng = ChaCha20Rng::seed_from_u64(u64::from(s));
            karger_once(n, edges, &mut rng)
        })
        .try_reduce(|| usize::MAX, |a, b| Ok(a.min(b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle(n: usize) -> Vec<(usize, usize)> {
        (0..n).map(|i| (i, (i + 1) % n)).collect()
    }

    #[test]
    fn test_triangle_min_cut() {
        // Every contraction order on a triangle ends with two parallel edges.
        let edges = vec![(0, 1), (1, 2), (2, 0)];
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        assert_eq!(karger_min_cut(3, &edges, 50, &mut rng).unwrap(), 2);
    }

    #[test]
    fn test_single_run_on_a_cycle_is_always_exact() {
        // Contracting a cycle edge yields a smaller cycle, so a single run
        // ends with exactly the two cycle edges crossing.
        for seed in 0..10 {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            assert_eq!(karger_once(8, &cycle(8), &mut rng).unwrap(), 2);
        }
    }

    #[test]
    fn test_square_with_diagonal() {
        let edges = vec![(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)];
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let cut = karger_min_cut(4, &edges, 200, &mut rng).unwrap();
        assert!((2..=3).contains(&cut));
    }

    #[test]
    fn test_disconnected_graph_reports_zero() {
        // Two triangles with no connection; the partition falls along the
        // components and no original edge crosses it.
        let edges = vec![(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)];
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        assert_eq!(karger_min_cut(6, &edges, 20, &mut rng).unwrap(), 0);
    }

    #[test]
    fn test_converges_to_bridge_cut_with_enough_trials() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let edges = crate::generate::two_cliques_with_bridges(16, 1, &mut rng);
        let cut = karger_min_cut(16, &edges, 2000, &mut rng).unwrap();
        assert_eq!(cut, 1);
    }

    #[test]
    fn test_parallel_matches_fixed_seed() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let edges = crate::generate::two_cliques_with_bridges(16, 1, &mut rng);
        let a = karger_min_cut_parallel(16, &edges, 500, 77).unwrap();
        let b = karger_min_cut_parallel(16, &edges, 500, 77).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, 1);
    }

    #[test]
    fn test_invalid_inputs_are_rejected() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        assert!(karger_once(2, &[(0, 2)], &mut rng).is_err());
        assert!(karger_min_cut(3, &[(0, 1)], 0, &mut rng).is_err());
    }
}
