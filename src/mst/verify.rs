//! independent checks that a tree really spans a graph at the cost it claims

use crate::graph::{IndexT, TotalCostT, WeightedGraph};
use crate::util::DSU;

use super::spanning_tree::{SpanningTree, ROOT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeDefect {
    NodeCountMismatch { graph: usize, tree: usize },
    EdgeCount { expected: usize, found: usize },
    MissingEdge { from: IndexT, to: IndexT },
    CostMismatch { from: IndexT, to: IndexT },
    ParentMismatch { node: IndexT },
    Cycle { from: IndexT, to: IndexT },
    NotSpanning { components: usize },
    TotalMismatch { claimed: TotalCostT, recomputed: TotalCostT },
}

/// Checks `tree` against `graph`: `n - 1` edges that all exist in the graph
/// at the recorded cost, agree with the parent pointers, close no cycle,
/// connect every node, and sum to the claimed total.
///
/// Returns every defect found, empty when the tree is valid.
pub fn verify_spanning_tree<G: WeightedGraph>(graph: &G, tree: &SpanningTree) -> Vec<TreeDefect> {
    let n = graph.n();
    if tree.n() != n {
        return vec![TreeDefect::NodeCountMismatch {
            graph: n,
            tree: tree.n(),
        }];
    }

    let mut defects = Vec::new();
    if tree.len() + 1 != n {
        defects.push(TreeDefect::EdgeCount {
            expected: n.saturating_sub(1),
            found: tree.len(),
        });
    }

    let mut dsu = DSU::new(n);
    let mut recomputed: TotalCostT = 0;
    for edge in tree.edges() {
        let (from, to) = (edge.from, edge.to);
        if from as usize >= n || to as usize >= n || from == to {
            defects.push(TreeDefect::MissingEdge { from, to });
            continue;
        }
        match graph.weight(from, to) {
            None => defects.push(TreeDefect::MissingEdge { from, to }),
            Some(cost) => {
                if cost != edge.cost {
                    defects.push(TreeDefect::CostMismatch { from, to });
                }
                recomputed += cost as TotalCostT;
            }
        }
        if tree.parent(to) != Some(from) {
            defects.push(TreeDefect::ParentMismatch { node: to });
        }
        if !dsu.union(from as usize, to as usize) {
            defects.push(TreeDefect::Cycle { from, to });
        }
    }

    if (0..n).any(|v| !dsu.same(ROOT as usize, v)) {
        let components = dsu.components().len();
        defects.push(TreeDefect::NotSpanning { components });
    }
    if recomputed != tree.total_cost() {
        defects.push(TreeDefect::TotalMismatch {
            claimed: tree.total_cost(),
            recomputed,
        });
    }

    defects
}
