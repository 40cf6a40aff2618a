//! Traits for weighted graph interfaces

use crate::error::{MstError, Result};

pub type IndexT = u32;

/// cost of a single edge; negative costs are rejected on insertion
pub type CostT = i32;

/// sum of edge costs, wide enough that `n - 1` maximal edges never overflow
pub type TotalCostT = i64;

/// Read access to an undirected weighted graph with dense node indices `0..n`.
///
/// `weight(i, i)` is `Some(0)` by convention; `None` means no edge and orders
/// above every valid cost wherever keys are compared.
pub trait WeightedGraph {
    fn n(&self) -> usize;

    fn weight(&self, i: IndexT, j: IndexT) -> Option<CostT>;

    fn has_edge(&self, i: IndexT, j: IndexT) -> bool {
        self.weight(i, j).is_some()
    }

    /// every `(neighbor, cost)` incident to `i`, excluding `i` itself
    fn neighbors(&self, i: IndexT) -> impl Iterator<Item = (IndexT, CostT)> + '_;
}

pub trait MutableWeightedGraph {
    /// sets the cost of the undirected edge `{i, j}`, replacing any previous cost
    fn add_edge(&mut self, i: IndexT, j: IndexT, cost: CostT) -> Result<()>;
}

pub(crate) fn check_node_count(n: usize) -> Result<()> {
    if n < 1 {
        return Err(MstError::invalid("num_nodes", "a graph needs at least one node"));
    }
    if n > IndexT::MAX as usize {
        return Err(MstError::invalid(
            "num_nodes",
            format!("{n} nodes cannot be addressed by a {}-bit index", IndexT::BITS),
        ));
    }
    Ok(())
}

pub(crate) fn check_edge(n: usize, i: IndexT, j: IndexT, cost: CostT) -> Result<()> {
    for index in [i, j] {
        if index as usize >= n {
            return Err(MstError::IndexOutOfRange { index, n });
        }
    }
    if i == j {
        return Err(MstError::invalid("j", format!("self-loop on node {i}")));
    }
    if cost < 0 {
        return Err(MstError::invalid("cost", format!("negative cost {cost}")));
    }
    Ok(())
}
