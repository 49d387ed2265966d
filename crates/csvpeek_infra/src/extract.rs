use std::path::Path;

use anyhow::Result;
use csvpeek_services::LineExtractorInfra;

pub struct PeekLineExtractService;

impl Default for PeekLineExtractService {
    fn default() -> Self {
        Self
    }
}

impl PeekLineExtractService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl LineExtractorInfra for PeekLineExtractService {
    async fn extract_lines(&self, path: &Path, start_line: u64, end_line: u64) -> Result<String> {
        csvpeek_fs::PeekFS::extract_lines(path, start_line, end_line).await
    }
}
