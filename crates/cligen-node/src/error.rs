use cligen_core::error::CollisionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error(transparent)]
    Collision(#[from] CollisionError),

    #[error("failed to serialize manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}
