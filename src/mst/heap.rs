//! Prim's algorithm driven by a binary heap, for sparse graphs.
//!
//! Heap entries are ordered by `(key, index)`, so the node popped next is the
//! one the dense scan would select and both produce identical trees. Stale
//! entries are skipped lazily: keys only decrease, so a stale entry always
//! surfaces after its node has already joined.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::Result;
use crate::graph::{CostT, IndexT, WeightedGraph};

use super::prim::GrowthState;
use super::spanning_tree::{SpanningTree, ROOT};

pub fn minimum_spanning_tree_heap<G: WeightedGraph>(graph: &G) -> Result<SpanningTree> {
    let n = graph.n();
    let mut state = GrowthState::new(n)?;

    let mut frontier: BinaryHeap<Reverse<(CostT, IndexT)>> = BinaryHeap::with_capacity(n);
    frontier.push(Reverse((0, ROOT)));
    let mut joined = 0;

    while joined < n {
        let Some(Reverse((_, u))) = frontier.pop() else {
            return Err(state.disconnected());
        };
        if state.in_tree[u as usize] {
            continue;
        }
        state.join(u);
        joined += 1;

        for (v, cost) in graph.neighbors(u) {
            if state.relax(u, v, cost) {
                frontier.push(Reverse((cost, v)));
            }
        }
    }

    Ok(state.finish())
}
