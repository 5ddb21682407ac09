//! Recursive Karger-Stein minimum cut estimator.
//!
//! Plain Karger contraction succeeds with probability `Omega(1/n^2)` because
//! most of the risk of destroying the minimum cut is concentrated in the last
//! few contractions. Karger-Stein only contracts down to `ceil(n / sqrt(2))`
//! vertices, then recurses twice with independent randomness and keeps the
//! smaller of the two answers. The doubling amplifies the success
//! probability to `Omega(1/log n)` per top-level run.
//!
//! Each branch owns its own generator, seeded from a fresh draw of its
//! parent's generator. Branches never share a random stream or any mutable
//! state, which is what makes their success probabilities independent (and
//! would make them safe to evaluate in parallel).

use rand::{Rng, SeedableRng};

use super::contract::contract_until;
use super::stoer_wagner::stoer_wagner;
use super::validate_edges;
use crate::error::{GraphError, Result};

/// At or below this many vertices the recursion hands off to the exact
/// Stoer-Wagner solver. The threshold trades `O(n^3)` base-case work
/// against recursion depth and base-case accuracy; see DESIGN.md for why
/// 20 rather than a smaller cutoff.
pub const EXACT_THRESHOLD: usize = 20;

/// Runs one pass of the recursive Karger-Stein algorithm.
///
/// # Arguments
/// - `n`: number of vertices; endpoints must lie in `0..n`.
/// - `edges`: undirected edge list, duplicates meaningful as multiplicity.
/// - `rng`: caller-owned generator; child branches are seeded from it, so a
///   fixed seed reproduces the whole recursion tree.
///
/// # Returns
/// The smallest cut found across the recursion tree. Exact for graphs at or
/// below [`EXACT_THRESHOLD`] vertices; a probabilistic estimate above it.
///
/// # Examples
/// ```
/// use mincut::cut::karger_stein;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
///
/// let square = vec![(0, 1), (1, 2), (2, 3), (3, 0)];
/// let mut rng = ChaCha20Rng::seed_from_u64(7);
/// assert_eq!(karger_stein(4, &square, &mut rng).unwrap(), 2);
/// ```
pub fn karger_stein<R>(n: usize, edges: &[(usize, usize)], rng: &mut R) -> Result<usize>
where
    R: Rng + SeedableRng,
{
    validate_edges(n, edges)?;
    karger_stein_rec(n, edges, rng)
}

fn karger_stein_rec<R>(n: usize, edges: &[(usize, usize)], rng: &mut R) -> Result<usize>
where
    R: Rng + SeedableRng,
{
    // An empty edge list means the graph is already split; both delegations
    // below also guarantee the recursion makes progress.
    if n <= EXACT_THRESHOLD || edges.is_empty() {
        return stoer_wagner(n, edges);
    }

    let target = (n as f64 / std::f64::consts::SQRT_2).ceil() as usize;
    log::trace!("karger-stein: n={n}, contracting two branches to {target}");

    // Fresh 32-bit seeds for the two branches; reusing the parent stream in
    // both would correlate their failures.
    let mut left_rng = R::seed_from_u64(u64::from(rng.next_u32()));
    let mut right_rng = R::seed_from_u64(u64::from(rng.next_u32()));

    let (left_n, left_edges) = contract_until(n, edges, target, &mut left_rng)?;
    let (right_n, right_edges) = contract_until(n, edges, target, &mut right_rng)?;

    let left_cut = karger_stein_rec(left_n, &left_edges, &mut left_rng)?;
    let right_cut = karger_stein_rec(right_n, &right_edges, &mut right_rng)?;

    Ok(left_cut.min(right_cut))
}

/// Takes the minimum over `reps` independent top-level runs of
/// [`karger_stein`], squeezing the failure probability geometrically.
pub fn karger_stein_min_cut<R>(
    n: usize,
    edges: &[(usize, usize)],
    reps: usize,
    rng: &mut R,
) -> Result<usize>
where
    R: Rng + SeedableRng,
{
    if reps == 0 {
        return Err(GraphError::invalid_input(
            "repetition count must be at least 1",
        ));
    }
    let mut best = usize::MAX;
    for _ in 0..reps {
        let cut = karger_stein(n, edges, rng)?;
        if cut < best {
            best = cut;
        }
    }
    Ok(best)
}
