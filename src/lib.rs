//! Global minimum cut of undirected, unweighted multigraphs.
//!
//! Three interchangeable estimators are provided:
//!
//! - [`cut::karger_min_cut`]: Karger's single-pass randomized contraction,
//!   repeated over independent trials.
//! - [`cut::karger_stein`]: the recursive Karger-Stein algorithm, which
//!   contracts along two independent branches per level and falls back to
//!   the exact solver on small graphs.
//! - [`cut::stoer_wagner`]: the deterministic, exact Stoer-Wagner algorithm,
//!   usable both standalone and as a correctness oracle for the randomized
//!   estimators.
//!
//! Graphs are plain edge lists: a vertex count `n` and a slice of
//! `(usize, usize)` pairs with endpoints in `0..n`. Parallel edges are
//! represented by repeated entries, not by weights.
//!
//! All randomized entry points take a caller-owned generator, so results are
//! reproducible from a fixed seed and independent runs never share a random
//! stream.

pub mod cut;
pub mod error;
pub mod generate;

pub use cut::{contract_until, karger_min_cut, karger_once, karger_stein, stoer_wagner, UnionFind};
pub use error::{GraphError, Result};
