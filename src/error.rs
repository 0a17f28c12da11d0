//! Error types for rendering operations.

use thiserror::Error;

use crate::model::NodeId;

/// Errors that can occur while transforming a document tree.
#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed input node at {path}: element has no name")]
    MalformedNode { path: String },

    #[error("render root {0:?} is not an element of the document")]
    InvalidRoot(NodeId),
}

pub type Result<T> = std::result::Result<T, Error>;
