use std::path::Path;

use csvpeek_domain::{CsvFormat, DataTable};

/// Provides metadata about paths on the file system.
#[async_trait::async_trait]
pub trait FileInfoInfra: Send + Sync {
    async fn is_file(&self, path: &Path) -> anyhow::Result<bool>;
    async fn exists(&self, path: &Path) -> anyhow::Result<bool>;
}

/// Counts physical lines in a file.
#[async_trait::async_trait]
pub trait LineCounterInfra: Send + Sync {
    /// Returns the total number of physical lines in the file. A trailing
    /// line without a final newline counts as a line.
    async fn count_lines(&self, path: &Path) -> anyhow::Result<u64>;
}

/// Extracts a contiguous range of physical lines from a file.
#[async_trait::async_trait]
pub trait LineExtractorInfra: Send + Sync {
    /// Returns lines `start_line..=end_line` (1-based, inclusive) joined
    /// with `\n` and without a trailing newline. A range past the end of the
    /// file yields whatever the file holds, possibly the empty string.
    async fn extract_lines(
        &self,
        path: &Path,
        start_line: u64,
        end_line: u64,
    ) -> anyhow::Result<String>;
}

/// Parses raw header and data text into a typed table.
///
/// Purely CPU-bound work on in-memory text, so the contract is synchronous.
pub trait TableParserInfra: Send + Sync {
    /// Builds a [`DataTable`] from an optional raw header line and a block
    /// of newline-joined data lines. An empty or missing header line is
    /// treated as no header even when `has_header` is set.
    fn parse_table(
        &self,
        header_text: Option<&str>,
        data_text: &str,
        has_header: bool,
        format: &CsvFormat,
    ) -> anyhow::Result<DataTable>;
}

/// Umbrella over every capability the read services need.
pub trait Infrastructure:
    FileInfoInfra + LineCounterInfra + LineExtractorInfra + TableParserInfra + Send + Sync + 'static
{
}
