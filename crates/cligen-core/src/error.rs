use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed spec: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("invalid spec: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
#[error("failed to write {}: {source}", path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

#[derive(Debug, Error)]
pub enum CollisionError {
    #[error("command `{name}` is derived from more than one route ({first} and {second})")]
    Command {
        name: String,
        first: String,
        second: String,
    },

    #[error("flag `{flag}` on command `{command}` is claimed by `{first}` and `{second}`")]
    Flag {
        command: String,
        flag: String,
        first: String,
        second: String,
    },
}
