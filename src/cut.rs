//! Minimum cut estimators and the contraction machinery they share.

pub mod contract;
pub mod karger;
pub mod karger_stein;
pub mod stoer_wagner;
pub mod union_find;

pub use contract::contract_until;
pub use karger::{karger_min_cut, karger_min_cut_parallel, karger_once};
pub use karger_stein::{karger_stein, karger_stein_min_cut, EXACT_THRESHOLD};
pub use stoer_wagner::stoer_wagner;
pub use union_find::UnionFind;

use crate::error::{GraphError, Result};

/// Checks that every edge endpoint lies in `0..n`.
pub(crate) fn validate_edges(n: usize, edges: &[(usize, usize)]) -> Result<()> {
    for &(u, v) in edges {
        if u >= n || v >= n {
            return Err(GraphError::invalid_input(format!(
                "edge ({u}, {v}) references a vertex outside 0..{n}"
            )));
        }
    }
    Ok(())
}
