//! Minimum spanning trees grown from node 0 with Prim's algorithm

mod heap;
mod prim;
mod spanning_tree;
mod verify;


pub use heap::minimum_spanning_tree_heap;
pub use prim::minimum_spanning_tree;
pub use spanning_tree::{SpanningTree, TreeEdge, ROOT};
pub use verify::{verify_spanning_tree, TreeDefect};
