use super::*;
use crate::error::MstError;

// Helper to create the four node graph used throughout the builder tests
fn create_test_table() -> WeightTable {
    WeightTable::from_edges(
        4,
        [(0, 1, 10), (0, 2, 6), (0, 3, 5), (1, 3, 15), (2, 3, 4)],
    )
    .unwrap()
}

#[test]
fn test_new_table_has_only_diagonal() {
    let table = WeightTable::new(3).unwrap();

    for i in 0..3 {
        for j in 0..3 {
            if i == j {
                assert_eq!(table.weight(i, j), Some(0));
            } else {
                assert!(!table.has_edge(i, j), "unexpected edge {} - {}", i, j);
            }
        }
    }
    assert_eq!(table.edge_count(), 0);
}

#[test]
fn test_zero_nodes_rejected() {
    assert!(matches!(
        WeightTable::new(0),
        Err(MstError::InvalidArgument { arg: "num_nodes", .. })
    ));
    assert!(matches!(
        AdjacencyList::new(0),
        Err(MstError::InvalidArgument { arg: "num_nodes", .. })
    ));
}

#[test]
fn test_add_edge_is_symmetric() {
    let mut table = WeightTable::new(5).unwrap();
    table.add_edge(1, 3, 42).unwrap();

    assert!(table.has_edge(3, 1));
    assert_eq!(table.weight(3, 1), Some(42));
    assert_eq!(table.weight(1, 3), Some(42));
    assert_eq!(table.row(3)[1], Some(42));
}

#[test]
fn test_add_edge_last_write_wins() {
    let mut table = create_test_table();
    table.add_edge(3, 0, 7).unwrap();

    assert_eq!(table.weight(0, 3), Some(7));
    assert_eq!(table.edge_count(), 5);

    let mut list = AdjacencyList::from(&create_test_table());
    list.add_edge(3, 0, 7).unwrap();
    assert_eq!(list.weight(0, 3), Some(7));
    assert_eq!(list.total_edges(), 10);
}

#[test]
fn test_zero_cost_is_an_edge() {
    let mut table = WeightTable::new(2).unwrap();
    table.add_edge(0, 1, 0).unwrap();
    assert!(table.has_edge(0, 1));
    assert_eq!(table.weight(1, 0), Some(0));
}

#[test]
fn test_add_edge_rejects_bad_input() {
    let mut table = WeightTable::new(3).unwrap();

    assert_eq!(
        table.add_edge(0, 3, 1),
        Err(MstError::IndexOutOfRange { index: 3, n: 3 })
    );
    assert_eq!(
        table.add_edge(7, 1, 1),
        Err(MstError::IndexOutOfRange { index: 7, n: 3 })
    );
    assert!(matches!(
        table.add_edge(0, 1, -1),
        Err(MstError::InvalidArgument { arg: "cost", .. })
    ));
    assert!(matches!(
        table.add_edge(2, 2, 1),
        Err(MstError::InvalidArgument { arg: "j", .. })
    ));

    // rejected edges leave the table untouched
    assert_eq!(table.edge_count(), 0);
}

#[test]
fn test_from_edges_stops_at_first_error() {
    let result = WeightTable::from_edges(2, [(0, 1, 3), (1, 2, 3)]);
    assert_eq!(result, Err(MstError::IndexOutOfRange { index: 2, n: 2 }));
}

#[test]
fn test_edges_listed_in_ascending_order() {
    let table = create_test_table();
    let edges: Vec<_> = table.edges().collect();

    assert_eq!(
        edges,
        vec![(0, 1, 10), (0, 2, 6), (0, 3, 5), (1, 3, 15), (2, 3, 4)]
    );
}

#[test]
fn test_neighbors_skip_diagonal() {
    let table = create_test_table();
    let neighbors: Vec<_> = table.neighbors(3).collect();
    assert_eq!(neighbors, vec![(0, 5), (1, 15), (2, 4)]);
}

#[test]
fn test_adjacency_list_matches_table() {
    let table = create_test_table();
    let list = AdjacencyList::from(&table);

    assert_eq!(list.n(), table.n());
    assert_eq!(list.total_edges(), 2 * table.edge_count());
    assert_eq!(list.max_degree(), 3);

    for i in 0..4 {
        for j in 0..4 {
            assert_eq!(
                list.weight(i, j),
                table.weight(i, j),
                "weights differ for {} - {}",
                i,
                j
            );
        }
    }
}

#[test]
fn test_adjacency_list_add_edge() {
    let mut list = AdjacencyList::new(3).unwrap();
    list.add_edge(2, 0, 9).unwrap();

    assert_eq!(list.get_neighborhood(0), &[(2, 9)]);
    assert_eq!(list.get_neighborhood(2), &[(0, 9)]);
    assert!(list.get_neighborhood(1).is_empty());
    assert_eq!(
        list.add_edge(0, 5, 1),
        Err(MstError::IndexOutOfRange { index: 5, n: 3 })
    );
}
