//! Weighted graph stores and associated functionality

#[cfg(test)]
mod tests;

mod adjacency_list;
mod graph_traits;
mod weight_table;

// Re-export all public items
pub use adjacency_list::*;
pub use graph_traits::{CostT, IndexT, MutableWeightedGraph, TotalCostT, WeightedGraph};
pub use weight_table::*;
