use std::path::Path;

use anyhow::Result;
use csvpeek_services::FileInfoInfra;

pub struct PeekFileMetaService;
#[async_trait::async_trait]
impl FileInfoInfra for PeekFileMetaService {
    async fn is_file(&self, path: &Path) -> Result<bool> {
        Ok(csvpeek_fs::PeekFS::is_file(path))
    }

    async fn exists(&self, path: &Path) -> Result<bool> {
        Ok(csvpeek_fs::PeekFS::exists(path))
    }
}
