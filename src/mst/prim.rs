//! Prim's algorithm with a dense linear scan for the next vertex.
//!
//! Each round selects the outside node with the smallest key, breaking ties
//! on the lowest index, adds it to the tree and relaxes the keys of the
//! remaining outside nodes through it. Runs in O(n^2) time and O(n) space on
//! top of the graph, which is never mutated.

use log::{debug, trace, warn};

use crate::error::{MstError, Result};
use crate::graph::{CostT, IndexT, WeightedGraph};

use super::spanning_tree::{SpanningTree, TreeEdge, ROOT};

/// Per-call working state shared by both selectors. `None` keys are
/// infinite and lose every comparison against a real cost.
pub(super) struct GrowthState {
    pub keys: Vec<Option<CostT>>,
    pub parents: Vec<Option<IndexT>>,
    pub in_tree: Vec<bool>,
    pub edges: Vec<TreeEdge>,
    joined: Vec<IndexT>,
}

impl GrowthState {
    pub fn new(n: usize) -> Result<GrowthState> {
        if n == 0 {
            return Err(MstError::invalid("graph", "cannot span a graph with no nodes"));
        }

        let mut keys = vec![None; n];
        keys[ROOT as usize] = Some(0);

        Ok(GrowthState {
            keys,
            parents: vec![None; n],
            in_tree: vec![false; n],
            edges: Vec::with_capacity(n - 1),
            joined: Vec::with_capacity(n),
        })
    }

    /// marks `u` as part of the tree and records the edge that attached it
    pub fn join(&mut self, u: IndexT) {
        let ui = u as usize;
        self.in_tree[ui] = true;
        self.joined.push(u);

        if let (Some(from), Some(cost)) = (self.parents[ui], self.keys[ui]) {
            debug!("node {u} joins through {from} at cost {cost}");
            self.edges.push(TreeEdge { from, to: u, cost });
        } else {
            debug!("node {u} starts the tree");
        }
    }

    /// lowers the key of `v` to `cost` if that is strictly cheaper; returns whether it did
    pub fn relax(&mut self, u: IndexT, v: IndexT, cost: CostT) -> bool {
        let vi = v as usize;
        if self.in_tree[vi] || self.keys[vi].is_some_and(|key| cost >= key) {
            return false;
        }
        trace!("key of {v} lowered to {cost} via {u}");
        self.keys[vi] = Some(cost);
        self.parents[vi] = Some(u);
        true
    }

    pub fn disconnected(self) -> MstError {
        let n = self.in_tree.len();
        warn!(
            "spanning tree stalled after {} of {} nodes",
            self.joined.len(),
            n
        );
        MstError::Disconnected {
            connected: self.joined,
            n,
        }
    }

    pub fn finish(self) -> SpanningTree {
        SpanningTree::new(self.parents.into_boxed_slice(), self.edges)
    }
}

/// scans for the outside node with the smallest finite key, lowest index first
fn select_min_key(state: &GrowthState) -> Option<IndexT> {
    let mut best: Option<(CostT, usize)> = None;
    for (v, key) in state.keys.iter().enumerate() {
        if state.in_tree[v] {
            continue;
        }
        if let Some(key) = *key {
            if best.map_or(true, |(min, _)| key < min) {
                best = Some((key, v));
            }
        }
    }
    best.map(|(_, v)| v as IndexT)
}

/// Computes the minimum spanning tree of `graph` rooted at node 0.
///
/// Fails with `InvalidArgument` for a graph with no nodes and with
/// `Disconnected` as soon as no outside node can be reached.
pub fn minimum_spanning_tree<G: WeightedGraph>(graph: &G) -> Result<SpanningTree> {
    let n = graph.n();
    let mut state = GrowthState::new(n)?;

    // one selection per node, so an unreachable last node is still caught
    for _ in 0..n {
        let Some(u) = select_min_key(&state) else {
            return Err(state.disconnected());
        };
        state.join(u);

        for v in 0..n as IndexT {
            if state.in_tree[v as usize] {
                continue;
            }
            if let Some(cost) = graph.weight(u, v) {
                state.relax(u, v, cost);
            }
        }
    }

    Ok(state.finish())
}
