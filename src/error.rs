//! error type shared by the graph stores and the spanning tree builders

use thiserror::Error;

use crate::graph::IndexT;

pub type Result<T> = std::result::Result<T, MstError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MstError {
    #[error("invalid argument `{arg}`: {reason}")]
    InvalidArgument { arg: &'static str, reason: String },

    #[error("node index {index} is out of range for a graph of {n} nodes")]
    IndexOutOfRange { index: IndexT, n: usize },

    /// Raised when the growing tree can no longer reach any outside node.
    /// `connected` lists the nodes that joined the tree, in join order.
    #[error("graph is disconnected: only {} of {n} nodes are reachable from the root", .connected.len())]
    Disconnected { connected: Vec<IndexT>, n: usize },
}

impl MstError {
    pub(crate) fn invalid(arg: &'static str, reason: impl Into<String>) -> Self {
        MstError::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}
