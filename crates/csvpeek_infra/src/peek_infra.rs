use std::path::Path;
use std::sync::Arc;

use csvpeek_domain::{CsvFormat, DataTable};
use csvpeek_services::{
    FileInfoInfra, Infrastructure, LineCounterInfra, LineExtractorInfra, TableParserInfra,
};

use crate::extract::PeekLineExtractService;
use crate::fs_meta::PeekFileMetaService;
use crate::line_count::PeekLineCountService;
use crate::parser::PeekTableParserService;

/// Concrete infrastructure wiring every collaborator to its default
/// implementation.
#[derive(Clone)]
pub struct PeekInfra {
    file_meta_service: Arc<PeekFileMetaService>,
    line_count_service: Arc<PeekLineCountService>,
    line_extract_service: Arc<PeekLineExtractService>,
    table_parser_service: Arc<PeekTableParserService>,
}

impl PeekInfra {
    pub fn new() -> Self {
        Self {
            file_meta_service: Arc::new(PeekFileMetaService),
            line_count_service: Arc::new(PeekLineCountService::new()),
            line_extract_service: Arc::new(PeekLineExtractService::new()),
            table_parser_service: Arc::new(PeekTableParserService::new()),
        }
    }
}

impl Default for PeekInfra {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl FileInfoInfra for PeekInfra {
    async fn is_file(&self, path: &Path) -> anyhow::Result<bool> {
        self.file_meta_service.is_file(path).await
    }

    async fn exists(&self, path: &Path) -> anyhow::Result<bool> {
        self.file_meta_service.exists(path).await
    }
}

#[async_trait::async_trait]
impl LineCounterInfra for PeekInfra {
    async fn count_lines(&self, path: &Path) -> anyhow::Result<u64> {
        self.line_count_service.count_lines(path).await
    }
}

#[async_trait::async_trait]
impl LineExtractorInfra for PeekInfra {
    async fn extract_lines(
        &self,
        path: &Path,
        start_line: u64,
        end_line: u64,
    ) -> anyhow::Result<String> {
        self.line_extract_service
            .extract_lines(path, start_line, end_line)
            .await
    }
}

impl TableParserInfra for PeekInfra {
    fn parse_table(
        &self,
        header_text: Option<&str>,
        data_text: &str,
        has_header: bool,
        format: &CsvFormat,
    ) -> anyhow::Result<DataTable> {
        self.table_parser_service
            .parse_table(header_text, data_text, has_header, format)
    }
}

impl Infrastructure for PeekInfra {}
