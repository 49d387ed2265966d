mod count;
mod error;
mod extract;
mod meta;

pub use error::Error;

/// File system operations for line-oriented access to large files.
///
/// All operations stream through the file instead of loading it whole, so
/// peeking at a handful of lines stays cheap even for multi-gigabyte inputs.
pub struct PeekFS;
