//! Errors raised by the runtime layer. Per the harness's error policy,
//! none of these are fatal on their own; the service loop logs and
//! continues.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SaveIoError {
    #[error("failed to write snapshot to {path}: {source}")]
    Write { path: String, source: std::io::Error },
    #[error("failed to rotate backup {path}: {source}")]
    Rotate { path: String, source: std::io::Error },
}

#[derive(Debug, Error)]
pub enum LoadIoError {
    #[error("failed to read snapshot from {path}: {source}")]
    Read { path: String, source: std::io::Error },
}

#[derive(Debug, Error)]
pub enum BusError {
    #[error("bus transport error: {0}")]
    Transport(String),
    #[error("malformed command payload: {0}")]
    Payload(String),
}
