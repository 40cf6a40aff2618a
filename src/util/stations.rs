//! the ten station charging network used by the planner binary, benches and tests
//!
//! Costs are cable installation costs in thousands of dollars.

use crate::error::{MstError, Result};
use crate::graph::{CostT, IndexT, TotalCostT, WeightTable};

pub const STATION_NAMES: [&str; 10] = [
    "Downtown Hub",
    "Airport Terminal",
    "University Campus",
    "Medical District",
    "Tech Park",
    "Shopping Center",
    "Stadium Complex",
    "Harbor District",
    "Residential North",
    "Industrial South",
];

pub const CABLE_ROUTES: [(IndexT, IndexT, CostT); 19] = [
    (0, 1, 45),
    (0, 2, 32),
    (0, 3, 28),
    (0, 5, 25),
    (1, 4, 38),
    (1, 9, 52),
    (2, 3, 22),
    (2, 4, 35),
    (2, 8, 40),
    (3, 5, 18),
    (3, 6, 30),
    (4, 8, 33),
    (4, 9, 41),
    (5, 6, 27),
    (5, 7, 36),
    (6, 7, 29),
    (6, 8, 44),
    (7, 9, 48),
    (8, 9, 55),
];

/// cost of the optimal plan for the full network
pub const OPTIMAL_COST: TotalCostT = 268;

pub fn charging_network() -> Result<WeightTable> {
    WeightTable::from_edges(STATION_NAMES.len(), CABLE_ROUTES)
}

/// the network with every route touching `station` left out
pub fn charging_network_without(station: IndexT) -> Result<WeightTable> {
    if station as usize >= STATION_NAMES.len() {
        return Err(MstError::IndexOutOfRange {
            index: station,
            n: STATION_NAMES.len(),
        });
    }
    WeightTable::from_edges(
        STATION_NAMES.len(),
        CABLE_ROUTES
            .iter()
            .copied()
            .filter(|&(i, j, _)| i != station && j != station),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::WeightedGraph;

    #[test]
    fn removing_a_station_drops_its_routes() {
        let table = charging_network_without(7).unwrap();
        assert_eq!(table.edge_count(), CABLE_ROUTES.len() - 3);
        assert!(table.neighbors(7).next().is_none());
    }

    #[test]
    fn unknown_station_is_rejected() {
        assert_eq!(
            charging_network_without(15),
            Err(MstError::IndexOutOfRange { index: 15, n: 10 })
        );
        assert!(charging_network_without(10).is_err());
        assert!(charging_network_without(9).is_ok());
    }
}
