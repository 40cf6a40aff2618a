//! the result of a spanning tree computation

use crate::graph::{CostT, IndexT, TotalCostT};

/// the node every tree is grown from
pub const ROOT: IndexT = 0;

/// a tree edge attaching `to` to the tree through its parent `from`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreeEdge {
    pub from: IndexT,
    pub to: IndexT,
    pub cost: CostT,
}

/// A minimum spanning tree as parent pointers plus the edges in the order
/// their child nodes joined the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    parents: Box<[Option<IndexT>]>,
    edges: Vec<TreeEdge>,
    total_cost: TotalCostT,
}

impl SpanningTree {
    pub(crate) fn new(parents: Box<[Option<IndexT>]>, edges: Vec<TreeEdge>) -> SpanningTree {
        debug_assert_eq!(edges.len() + 1, parents.len());
        let total_cost: TotalCostT = edges.iter().map(|e| e.cost as TotalCostT).sum();
        SpanningTree {
            parents,
            edges,
            total_cost,
        }
    }

    pub fn root(&self) -> IndexT {
        ROOT
    }

    /// number of nodes spanned
    pub fn n(&self) -> usize {
        self.parents.len()
    }

    /// tree predecessor of `v`, `None` for the root
    pub fn parent(&self, v: IndexT) -> Option<IndexT> {
        assert!((v as usize) < self.n());
        self.parents[v as usize]
    }

    pub fn parents(&self) -> &[Option<IndexT>] {
        &self.parents
    }

    /// tree edges in join order
    pub fn edges(&self) -> &[TreeEdge] {
        &self.edges
    }

    /// number of tree edges, always `n() - 1`
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn total_cost(&self) -> TotalCostT {
        self.total_cost
    }

    /// the root followed by every other node in the order it joined the tree
    pub fn join_order(&self) -> impl Iterator<Item = IndexT> + '_ {
        std::iter::once(ROOT).chain(self.edges.iter().map(|e| e.to))
    }
}
