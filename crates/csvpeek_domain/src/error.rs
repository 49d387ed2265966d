use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("The file '{}' does not exist", .0.display())]
    FileNotFound(PathBuf),

    #[error("Starting line {start} is outside the available data range 1..={available}")]
    InvalidStartLine { start: u64, available: u64 },
}
