use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use csvpeek_domain::{DataTable, ReadOptions};
use csvpeek_infra::PeekInfra;
use csvpeek_services::{Infrastructure, PeekCsvRead};

/// Facade over the read services, wired to a concrete infrastructure.
pub struct CsvPeekAPI<F> {
    reader: PeekCsvRead<F>,
}

impl<F: Infrastructure> CsvPeekAPI<F> {
    pub fn new(infra: Arc<F>) -> Self {
        Self { reader: PeekCsvRead::new(infra) }
    }

    /// Reads the first `n_rows` data rows of the file at `path`.
    pub async fn read_head<P: AsRef<Path>>(
        &self,
        path: P,
        n_rows: u64,
        options: &ReadOptions,
    ) -> Result<DataTable> {
        self.reader.read_head(path.as_ref(), n_rows, options).await
    }

    /// Reads the last `n_rows` data rows of the file at `path`.
    pub async fn read_tail<P: AsRef<Path>>(
        &self,
        path: P,
        n_rows: u64,
        options: &ReadOptions,
    ) -> Result<DataTable> {
        self.reader.read_tail(path.as_ref(), n_rows, options).await
    }

    /// Reads the first `n_rows_head` and last `n_rows_tail` data rows in a
    /// single table, with no row appearing twice.
    pub async fn read_head_tail<P: AsRef<Path>>(
        &self,
        path: P,
        n_rows_head: u64,
        n_rows_tail: u64,
        options: &ReadOptions,
    ) -> Result<DataTable> {
        self.reader
            .read_head_tail(path.as_ref(), n_rows_head, n_rows_tail, options)
            .await
    }

    /// Reads `rows_after` extra data rows starting at the 1-based data row
    /// `start_line`.
    pub async fn read_line_range<P: AsRef<Path>>(
        &self,
        path: P,
        start_line: u64,
        rows_after: i64,
        options: &ReadOptions,
    ) -> Result<DataTable> {
        self.reader
            .read_line_range(path.as_ref(), start_line, rows_after, options)
            .await
    }
}

impl CsvPeekAPI<PeekInfra> {
    /// Builds the API over the default file-system backed infrastructure.
    pub fn init() -> Self {
        CsvPeekAPI::new(Arc::new(PeekInfra::new()))
    }
}
