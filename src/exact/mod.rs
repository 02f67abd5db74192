//! Exact TSP solving.
//!
//! - [`branch_and_bound`]: Depth-first enumeration with cost-bound pruning, O(V!) worst case

mod branch_bound;

pub use branch_bound::{backtracking, branch_and_bound};
