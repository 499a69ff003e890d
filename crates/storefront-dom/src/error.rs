use thiserror::Error;

use crate::document::NodeId;

#[derive(Error, Debug, PartialEq)]
pub enum DomError {
    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),

    #[error("Cannot attach {child} to {parent}: would create a cycle")]
    Cycle { parent: NodeId, child: NodeId },
}
