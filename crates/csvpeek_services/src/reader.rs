use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use csvpeek_domain::{DataTable, Error, LineWindow, ReadOptions};
use tracing::debug;

use crate::infra::Infrastructure;
use crate::window::{self, HeadTailWindows};

/// Reads bounded views of large delimited files without loading them whole.
///
/// Every operation checks that the path names an existing regular file,
/// counts the file's physical lines, resolves the requested view to line
/// windows, extracts only those lines, and hands the text to the table
/// parser. Empty views produce an empty table, never an error.
pub struct PeekCsvRead<F>(Arc<F>);

impl<F> PeekCsvRead<F> {
    pub fn new(infra: Arc<F>) -> Self {
        Self(infra)
    }
}

impl<F: Infrastructure> PeekCsvRead<F> {
    /// Reads the first `n_rows` data rows of the file.
    pub async fn read_head(
        &self,
        path: &Path,
        n_rows: u64,
        options: &ReadOptions,
    ) -> Result<DataTable> {
        let total_lines = self.prepare(path).await?;
        let window =
            window::resolve_head(total_lines, options.header, options.skip_first_rows, n_rows);
        debug!(path = %path.display(), total_lines, ?window, "Resolved head window");

        let header_text = self.fetch_header(path, options).await?;
        let data_text = self.fetch_window(path, window).await?;
        self.0
            .parse_table(header_text.as_deref(), &data_text, options.header, &options.format)
    }

    /// Reads the last `n_rows` data rows of the file.
    pub async fn read_tail(
        &self,
        path: &Path,
        n_rows: u64,
        options: &ReadOptions,
    ) -> Result<DataTable> {
        let total_lines = self.prepare(path).await?;
        let window =
            window::resolve_tail(total_lines, options.header, options.skip_first_rows, n_rows);
        debug!(path = %path.display(), total_lines, ?window, "Resolved tail window");

        let header_text = self.fetch_header(path, options).await?;
        let data_text = self.fetch_window(path, window).await?;
        self.0
            .parse_table(header_text.as_deref(), &data_text, options.header, &options.format)
    }

    /// Reads the first `n_rows_head` and last `n_rows_tail` data rows in one
    /// table. When the two views would overlap, the tail shrinks so no row
    /// appears twice.
    pub async fn read_head_tail(
        &self,
        path: &Path,
        n_rows_head: u64,
        n_rows_tail: u64,
        options: &ReadOptions,
    ) -> Result<DataTable> {
        let total_lines = self.prepare(path).await?;
        let HeadTailWindows { head, tail } = window::resolve_head_tail(
            total_lines,
            options.header,
            options.skip_first_rows,
            n_rows_head,
            n_rows_tail,
        );
        debug!(path = %path.display(), total_lines, ?head, ?tail, "Resolved head and tail windows");

        // The three fetches are independent, so dispatch them together
        let (header_text, head_text, tail_text) = tokio::try_join!(
            self.fetch_header(path, options),
            self.fetch_window(path, head),
            self.fetch_window(path, tail),
        )?;

        let data_text = join_blocks(&head_text, &tail_text);
        self.0
            .parse_table(header_text.as_deref(), &data_text, options.header, &options.format)
    }

    /// Reads `rows_after` extra data rows starting at the 1-based data row
    /// `start_line`. The start must fall inside the available data; the row
    /// count is clamped to the end of the file and a negative count reads
    /// the single starting row.
    pub async fn read_line_range(
        &self,
        path: &Path,
        start_line: u64,
        rows_after: i64,
        options: &ReadOptions,
    ) -> Result<DataTable> {
        let total_lines = self.prepare(path).await?;
        let window = window::resolve_line_range(
            total_lines,
            options.header,
            options.skip_first_rows,
            start_line,
            rows_after,
        )?;
        debug!(path = %path.display(), total_lines, ?window, "Resolved line range window");

        let header_text = self.fetch_header(path, options).await?;
        let data_text = self.fetch_window(path, Some(window)).await?;
        self.0
            .parse_table(header_text.as_deref(), &data_text, options.header, &options.format)
    }

    /// Ensures the path names an existing regular file and counts its lines.
    /// The existence check runs before any other work.
    async fn prepare(&self, path: &Path) -> Result<u64> {
        if !self.0.is_file(path).await? {
            return Err(Error::FileNotFound(path.to_path_buf()).into());
        }
        self.0
            .count_lines(path)
            .await
            .with_context(|| format!("Failed to count lines in {}", path.display()))
    }

    /// Fetches the text for a resolved window. An absent window
    /// short-circuits to the empty string without touching the extractor.
    async fn fetch_window(&self, path: &Path, window: Option<LineWindow>) -> Result<String> {
        match window {
            Some(window) => self
                .0
                .extract_lines(path, window.start, window.end)
                .await
                .with_context(|| format!("Failed to extract lines from {}", path.display())),
            None => Ok(String::new()),
        }
    }

    /// Fetches the raw header line when the options call for one. The header
    /// occupies the first physical line after the skip offset; past EOF the
    /// extractor yields an empty string, which downstream treats as no
    /// header.
    async fn fetch_header(&self, path: &Path, options: &ReadOptions) -> Result<Option<String>> {
        if !options.header {
            return Ok(None);
        }
        let window = LineWindow::single(options.skip_first_rows.saturating_add(1));
        let text = self
            .0
            .extract_lines(path, window.start, window.end)
            .await
            .with_context(|| format!("Failed to read header line from {}", path.display()))?;
        Ok(Some(text))
    }
}

/// Joins the head and tail blocks with a newline, dropping empty parts.
fn join_blocks(head: &str, tail: &str) -> String {
    match (head.is_empty(), tail.is_empty()) {
        (false, false) => format!("{head}\n{tail}"),
        (false, true) => head.to_string(),
        (true, false) => tail.to_string(),
        (true, true) => String::new(),
    }
}
