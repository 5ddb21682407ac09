use rand::Rng;

use super::union_find::UnionFind;
use super::validate_edges;
use crate::error::{GraphError, Result};

/// Contracts uniformly random edges until at most `target` super-vertices
/// remain, then renumbers the survivors onto a dense range.
///
/// After every merge the working edge list is rebuilt against the current
/// representatives and self-loops are dropped, so each draw is uniform over
/// the live cross-component edges. That keeps every surviving edge sampled
/// with probability proportional to its true multiplicity, which Karger's
/// success bound depends on.
///
/// If the edge list runs out before `target` components are reached the input
/// was disconnected; contraction stops there and the reached component count
/// is reported. A `target >= n` is a no-op returning the graph unchanged.
///
/// # Arguments
/// - `n`: number of vertices; endpoints must lie in `0..n`.
/// - `edges`: undirected edge list, duplicates meaningful as multiplicity.
/// - `target`: component count to contract down to, at least 1.
/// - `rng`: caller-owned random generator.
///
/// # Returns
/// `(new_n, new_edges)`: the number of components actually reached and the
/// surviving edges rewritten over vertex ids `0..new_n`.
pub fn contract_until<R: Rng>(
    n: usize,
    edges: &[(usize, usize)],
    target: usize,
    rng: &mut R,
) -> Result<(usize, Vec<(usize, usize)>)> {
    validate_edges(n, edges)?;
    if target == 0 {
        return Err(GraphError::invalid_input(
            "contraction target must be at least 1",
        ));
    }
    if target >= n {
        return Ok((n, edges.to_vec()));
    }

    let mut working = edges.to_vec();
    let mut dsu = UnionFind::new(n);

    while dsu.components() > target && !working.is_empty() {
        let idx = rng.gen_range(0..working.len());
        let (u, v) = working[idx];
        let ru = dsu.find(u);
        let rv = dsu.find(v);
        if ru == rv {
            // Stale self-loop; drop it and resample.
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
    if dsu.components() > target {
        log::debug!(
            "contract_until: edges exhausted at {} components (target {target})",
            dsu.components()
        );
    }

    // Renumber surviving representatives onto 0..new_n.
    let mut remap = vec![usize::MAX; n];
    let mut new_n = 0;
    for v in 0..n {
        let root = dsu.find(v);
        if remap[root] == usize::MAX {
            remap[root] = new_n;
            new_n += 1;
        }
    }

    let mut new_edges = Vec::with_capacity(working.len());
    for &(a, b) in &working {
        let ra = remap[dsu.find(a)];
        let rb = remap[dsu.find(b)];
        if ra != rb {
            new_edges.push((ra, rb));
        }
    }

    Ok((new_n, new_edges))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn cycle(n: usize) -> Vec<(usize, usize)> {
        (0..n).map(|i| (i, (i + 1) % n)).collect()
    }

    #[test]
    fn test_target_at_least_n_is_a_noop() {
        let edges = vec![(0, 1), (1, 2)];
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let (n, out) = contract_until(3, &edges, 3, &mut rng).unwrap();
        assert_eq!(n, 3);
        assert_eq!(out, edges);
        let (n, out) = contract_until(3, &edges, 10, &mut rng).unwrap();
        assert_eq!(n, 3);
        assert_eq!(out, edges);
    }

    #[test]
    fn test_single_vertex_is_a_noop() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let (n, out) = contract_until(1, &[], 1, &mut rng).unwrap();
        assert_eq!(n, 1);
        assert!(out.is_empty());
    }

    #[test]
    fn test_cycle_contracts_to_two_cross_edges() {
        // Contracting a cycle always leaves a smaller cycle, so exactly two
        // cross edges survive at two components.
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let (n, out) = contract_until(8, &cycle(8), 2, &mut rng).unwrap();
        assert_eq!(n, 2);
        assert_eq!(out.len(), 2);
        for &(a, b) in &out {
            assert!(a < 2 && b < 2);
            assert_ne!(a, b);
        }
    }

    #[test]
    fn test_output_vertices_are_densely_renumbered() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let (n, out) = contract_until(12, &cycle(12), 5, &mut rng).unwrap();
        assert_eq!(n, 5);
        for &(a, b) in &out {
            assert!(a < n && b < n);
            assert_ne!(a, b);
        }
    }

    #[test]
    fn test_same_seed_is_reproducible() {
        let edges = cycle(20);
        let mut a = ChaCha20Rng::seed_from_u64(99);
        let mut b = ChaCha20Rng::seed_from_u64(99);
        let out_a = contract_until(20, &edges, 4, &mut a).unwrap();
        let out_b = contract_until(20, &edges, 4, &mut b).unwrap();
        assert_eq!(out_a, out_b);
    }

    #[test]
    fn test_disconnected_graph_stops_at_edge_exhaustion() {
        // Two components, no way to reach a single one.
        let edges = vec![(0, 1), (2, 3)];
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let (n, out) = contract_until(4, &edges, 1, &mut rng).unwrap();
        assert_eq!(n, 2);
        assert!(out.is_empty());
    }

    #[test]
    fn test_out_of_range_endpoint_is_rejected() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        assert!(contract_until(3, &[(0, 3)], 2, &mut rng).is_err());
    }

    #[test]
    fn test_zero_target_is_rejected() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        assert!(contract_until(3, &[(0, 1)], 0, &mut rng).is_err());
    }
}
