use thiserror::Error;

use crate::functions::FunctionId;

/// Errors raised at the engine boundary.
///
/// Everything inside the evaluation path is pure, so these only come from
/// rejected inputs (resolution, parameter names) or from loading configuration.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("resolution {resolution} outside of [{min}, {max}]")]
    InvalidResolution { resolution: u32, min: u32, max: u32 },

    #[error("invalid resolution bounds [{min}, {max}]")]
    InvalidBounds { min: u32, max: u32 },

    #[error("unknown function `{0}`")]
    UnknownFunction(String),

    #[error("unknown shape parameter `{key}` for {function}")]
    UnknownParameter { function: FunctionId, key: String },

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GraphError>;
