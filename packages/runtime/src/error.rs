use thiserror::Error;
use xyfy_common::CommonError;

pub type RuntimeResult<T> = Result<T, RuntimeError>;

#[derive(Error, Debug)]
pub enum RuntimeError {
    /// A named component with no entry in the intrinsic table, reported when invoked
    #[error("'{name}' is not callable: no intrinsic element is registered under that name")]
    UnresolvedComponent { name: String },

    #[error("Null child at position {position} (null children are rejected by configuration)")]
    NullChild { position: usize },

    #[error("Configuration error: {0}")]
    Config(#[from] CommonError),
}
