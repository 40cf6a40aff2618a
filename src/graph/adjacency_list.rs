//! a sparse weighted graph using a vector of neighbor lists

use crate::error::Result;

use super::graph_traits::{check_edge, check_node_count};
use super::{CostT, IndexT, MutableWeightedGraph, WeightTable, WeightedGraph};

#[derive(Debug, Clone)]
pub struct AdjacencyList {
    neighborhoods: Vec<Vec<(IndexT, CostT)>>,
}

impl AdjacencyList {
    /// constructs a new AdjacencyList with `n` nodes and no edges
    pub fn new(n: usize) -> Result<AdjacencyList> {
        check_node_count(n)?;
        Ok(AdjacencyList {
            neighborhoods: vec![Vec::new(); n],
        })
    }

    /// returns the number of nodes in the graph
    pub fn n(&self) -> usize {
        self.neighborhoods.len()
    }

    /// returns the `(neighbor, cost)` pairs of a node in insertion order
    pub fn get_neighborhood(&self, i: IndexT) -> &[(IndexT, CostT)] {
        assert!((i as usize) < self.n());
        &self.neighborhoods[i as usize]
    }

    /// sum of degrees of all nodes
    pub fn total_edges(&self) -> usize {
        self.neighborhoods.iter().map(|n| n.len()).sum()
    }

    /// maximum degree of the graph
    pub fn max_degree(&self) -> usize {
        self.neighborhoods
            .iter()
            .map(|n| n.len())
            .max()
            .unwrap_or(0)
    }

    fn set_directed(&mut self, from: IndexT, to: IndexT, cost: CostT) {
        let neighborhood = &mut self.neighborhoods[from as usize];
        match neighborhood.iter_mut().find(|(j, _)| *j == to) {
            Some(entry) => entry.1 = cost,
            None => neighborhood.push((to, cost)),
        }
    }
}

impl WeightedGraph for AdjacencyList {
    fn n(&self) -> usize {
        self.neighborhoods.len()
    }

    fn weight(&self, i: IndexT, j: IndexT) -> Option<CostT> {
        assert!((j as usize) < self.n());
        if i == j {
            return Some(0);
        }
        self.get_neighborhood(i)
            .iter()
            .find(|(neighbor, _)| *neighbor == j)
            .map(|&(_, cost)| cost)
    }

    fn neighbors(&self, i: IndexT) -> impl Iterator<Item = (IndexT, CostT)> + '_ {
        self.get_neighborhood(i).iter().copied()
    }
}

impl MutableWeightedGraph for AdjacencyList {
    fn add_edge(&mut self, i: IndexT, j: IndexT, cost: CostT) -> Result<()> {
        check_edge(self.n(), i, j, cost)?;
        self.set_directed(i, j, cost);
        self.set_directed(j, i, cost);
        Ok(())
    }
}

impl From<&WeightTable> for AdjacencyList {
    fn from(table: &WeightTable) -> AdjacencyList {
        let neighborhoods = (0..table.n() as IndexT)
            .map(|i| table.neighbors(i).collect())
            .collect();
        AdjacencyList { neighborhoods }
    }
}
