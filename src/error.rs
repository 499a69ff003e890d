use thiserror::Error;

use storefront_dom::{DomError, NodeId};

#[derive(Error, Debug, PartialEq)]
pub enum AppError {
    #[error("App has not been initialized")]
    NotInitialized,

    #[error("App is already initialized")]
    AlreadyInitialized,

    #[error("Mount container not found: {0}")]
    MountNotFound(String),

    #[error("No product at position {0}")]
    NoSuchProduct(usize),

    #[error("No element with class: {0}")]
    MissingSection(&'static str),

    #[error("No button inside element {0}")]
    MissingButton(NodeId),

    #[error("Document error: {0}")]
    Dom(#[from] DomError),
}
