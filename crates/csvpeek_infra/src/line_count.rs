use std::path::Path;

use anyhow::Result;
use csvpeek_services::LineCounterInfra;

pub struct PeekLineCountService;

impl Default for PeekLineCountService {
    fn default() -> Self {
        Self
    }
}

impl PeekLineCountService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl LineCounterInfra for PeekLineCountService {
    async fn count_lines(&self, path: &Path) -> Result<u64> {
        csvpeek_fs::PeekFS::count_lines(path).await
    }
}
