pub mod error;
pub mod graph;
pub mod mst;
pub mod report;
pub mod util;
