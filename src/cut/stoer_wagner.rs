//! Exact global minimum cut via the Stoer-Wagner algorithm.
//!
//! Works on a dense weight matrix where `w[i][j]` counts the parallel edges
//! between `i` and `j`. Each minimum-cut phase grows a maximum-adjacency
//! ordering over the active vertices; the cut separating the last-added
//! vertex from the rest ("cut of the phase") is either the global minimum or
//! the last two vertices can be merged without losing it. Repeating until a
//! single vertex remains and taking the smallest phase cut yields the exact
//! answer in `O(n^3)`.
//!
//! Deterministic and total over all valid inputs, so it doubles as the
//! correctness oracle for the randomized estimators and as the base case of
//! the Karger-Stein recursion.

use super::validate_edges;
use crate::error::Result;

/// Computes the exact global minimum cut of an undirected multigraph.
///
/// Ties in the maximum-adjacency selection go to the lowest index, so the
/// sequence of phases (not just the final answer) is reproducible.
///
/// # Arguments
/// - `n`: number of vertices; endpoints must lie in `0..n`.
/// - `edges`: undirected edge list, duplicates meaningful as multiplicity.
///
/// # Returns
/// The minimum number of edges crossing any two-way partition; 0 when
/// `n <= 1` or the graph is disconnected.
///
/// # Examples
/// ```
/// use mincut::cut::stoer_wagner;
///
/// // Square with one diagonal: isolating a degree-2 corner cuts 2 edges.
/// let edges = vec![(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)];
/// assert_eq!(stoer_wagner(4, &edges).unwrap(), 2);
/// ```
pub fn stoer_wagner(n: usize, edges: &[(usize, usize)]) -> Result<usize> {
    validate_edges(n, edges)?;
    if n <= 1 {
        return Ok(0);
    }

    let mut w = vec![vec![0usize; n]; n];
    for &(u, v) in edges {
        w[u][v] += 1;
        w[v][u] += 1;
    }

    // Active vertices, shrinking by one per phase.
    let mut active: Vec<usize> = (0..n).collect();
    let mut best = usize::MAX;

    while active.len() > 1 {
        let m = active.len();
        let mut added = vec![false; m];
        let mut weights = vec![0usize; m];
        let mut prev = 0;
        let mut last = 0;

        for i in 0..m {
            // Unvisited vertex with the largest weight to the selected set;
            // strict comparison keeps ties on the lowest index.
            let mut sel = m;
            for j in 0..m {
                if !added[j] && (sel == m || weights[j] > weights[sel]) {
                    sel = j;
                }
            }

            added[sel] = true;
            prev = last;
            last = sel;

            if i == m - 1 {
                break;
            }
            for j in 0..m {
                if !added[j] {
                    weights[j] += w[active[sel]][active[j]];
                }
            }
        }

        // Cut of the phase: the last-added vertex against everything else.
        let cut: usize = (0..m)
            .filter(|&j| j != last)
            .map(|j| w[active[last]][active[j]])
            .sum();
        if cut < best {
            best = cut;
        }

        // Merge the last vertex into the second-to-last and drop it.
        let s = active[prev];
        let t = active[last];
        for j in 0..m {
            let node = active[j];
            w[s][node] += w[t][node];
            w[node][s] = w[s][node];
        }
        active.swap_remove(last);
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle(n: usize) -> Vec<(usize, usize)> {
        (0..n).map(|i| (i, (i + 1) % n)).collect()
    }

    fn complete(n: usize) -> Vec<(usize, usize)> {
        let mut edges = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                edges.push((i, j));
            }
        }
        edges
    }

    #[test]
    fn test_trivial_graphs_have_zero_cut() {
        assert_eq!(stoer_wagner(0, &[]).unwrap(), 0);
        assert_eq!(stoer_wagner(1, &[]).unwrap(), 0);
    }

    #[test]
    fn test_disconnected_graph_has_zero_cut() {
        assert_eq!(stoer_wagner(2, &[]).unwrap(), 0);
        let two_triangles = vec![(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)];
        assert_eq!(stoer_wagner(6, &two_triangles).unwrap(), 0);
    }

    #[test]
    fn test_cycles_have_cut_two() {
        for n in 3..12 {
            assert_eq!(stoer_wagner(n, &cycle(n)).unwrap(), 2, "cycle on {n}");
        }
    }

    #[test]
    fn test_four_cycle_scenario() {
        let edges = vec![(0, 1), (1, 2), (2, 3), (3, 0)];
        assert_eq!(stoer_wagner(4, &edges).unwrap(), 2);
    }

    #[test]
    fn test_complete_graphs_have_cut_n_minus_one() {
        for n in 2..10 {
            assert_eq!(stoer_wagner(n, &complete(n)).unwrap(), n - 1, "K_{n}");
        }
    }

    #[test]
    fn test_parallel_edges_accumulate() {
        // Doubling every edge of a triangle doubles the cut.
        let edges = vec![(0, 1), (0, 1), (1, 2), (1, 2), (2, 0), (2, 0)];
        assert_eq!(stoer_wagner(3, &edges).unwrap(), 4);
    }

    #[test]
    fn test_single_bridge_between_cliques() {
        let mut edges = complete(4);
        edges.extend([(4, 5), (4, 6), (4, 7), (5, 6), (5, 7), (6, 7)]);
        edges.push((0, 4));
        assert_eq!(stoer_wagner(8, &edges).unwrap(), 1);
    }

    #[test]
    fn test_cut_never_exceeds_edge_count() {
        let edges = complete(6);
        assert!(stoer_wagner(6, &edges).unwrap() <= edges.len());
    }

    #[test]
    fn test_out_of_range_endpoint_is_rejected() {
        assert!(stoer_wagner(2, &[(0, 5)]).is_err());
    }
}
