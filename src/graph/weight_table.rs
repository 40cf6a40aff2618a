//! dense symmetric weight table stored as one flattened `n * n` slice

use itertools::Itertools;

use crate::error::{MstError, Result};

use super::graph_traits::{check_edge, check_node_count};
use super::{CostT, IndexT, MutableWeightedGraph, WeightedGraph};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightTable {
    weights: Box<[Option<CostT>]>,
    n: usize,
}

impl WeightTable {
    /// a table of `n` nodes with no edges, `weight(i, i) = 0` on the diagonal
    pub fn new(n: usize) -> Result<WeightTable> {
        check_node_count(n)?;
        let cells = n
            .checked_mul(n)
            .ok_or_else(|| MstError::invalid("num_nodes", format!("{n} x {n} table overflows")))?;

        let mut weights = vec![None; cells].into_boxed_slice();
        for i in 0..n {
            weights[i * n + i] = Some(0);
        }

        Ok(WeightTable { weights, n })
    }

    /// builds a table from `(i, j, cost)` triples, failing on the first bad one
    pub fn from_edges<E>(n: usize, edges: E) -> Result<WeightTable>
    where
        E: IntoIterator<Item = (IndexT, IndexT, CostT)>,
    {
        let mut table = WeightTable::new(n)?;
        for (i, j, cost) in edges {
            table.add_edge(i, j, cost)?;
        }
        Ok(table)
    }

    /// returns the number of nodes in the graph
    pub fn n(&self) -> usize {
        self.n
    }

    /// returns the row of node `i`, indexed by the other endpoint
    pub fn row(&self, i: IndexT) -> &[Option<CostT>] {
        assert!((i as usize) < self.n);
        let start = i as usize * self.n;
        &self.weights[start..start + self.n]
    }

    pub fn get_weight(&self, i: IndexT, j: IndexT) -> Option<CostT> {
        assert!((i as usize) < self.n && (j as usize) < self.n);
        self.weights[i as usize * self.n + j as usize]
    }

    /// every present edge once, as `(i, j, cost)` with `i < j`, in ascending order
    pub fn edges(&self) -> impl Iterator<Item = (IndexT, IndexT, CostT)> + '_ {
        (0..self.n as IndexT)
            .tuple_combinations()
            .filter_map(|(i, j)| self.get_weight(i, j).map(|cost| (i, j, cost)))
    }

    /// number of undirected edges present
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }
}

impl WeightedGraph for WeightTable {
    fn n(&self) -> usize {
        self.n
    }

    fn weight(&self, i: IndexT, j: IndexT) -> Option<CostT> {
        self.get_weight(i, j)
    }

    fn neighbors(&self, i: IndexT) -> impl Iterator<Item = (IndexT, CostT)> + '_ {
        self.row(i)
            .iter()
            .enumerate()
            .filter(move |&(j, _)| j != i as usize)
            .filter_map(|(j, w)| w.map(|cost| (j as IndexT, cost)))
    }
}

impl MutableWeightedGraph for WeightTable {
    fn add_edge(&mut self, i: IndexT, j: IndexT, cost: CostT) -> Result<()> {
        check_edge(self.n, i, j, cost)?;
        let (i, j) = (i as usize, j as usize);
        self.weights[i * self.n + j] = Some(cost);
        self.weights[j * self.n + i] = Some(cost);
        Ok(())
    }
}
