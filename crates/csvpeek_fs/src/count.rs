use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs::File;
use tokio::io::AsyncReadExt;
use tracing::debug;

const CHUNK_SIZE: usize = 64 * 1024;

impl crate::PeekFS {
    /// Counts the number of lines in a file.
    ///
    /// The file is streamed in fixed-size chunks and newline bytes are
    /// counted, so memory use stays constant regardless of file size. A
    /// trailing line without a final newline still counts as a line.
    pub async fn count_lines<T: AsRef<Path>>(path: T) -> Result<u64> {
        let path_ref = path.as_ref();
        let mut file = File::open(path_ref)
            .await
            .with_context(|| format!("Failed to open file {}", path_ref.display()))?;

        let mut buf = vec![0u8; CHUNK_SIZE];
        let mut count: u64 = 0;
        let mut last_byte = None;

        loop {
            let read = file
                .read(&mut buf)
                .await
                .with_context(|| format!("Failed to read file {}", path_ref.display()))?;
            if read == 0 {
                break;
            }
            count += buf[..read].iter().filter(|&&byte| byte == b'\n').count() as u64;
            last_byte = Some(buf[read - 1]);
        }

        // An unterminated final line is still a line
        if let Some(byte) = last_byte {
            if byte != b'\n' {
                count += 1;
            }
        }

        debug!(path = %path_ref.display(), total_lines = count, "Counted file lines");
        Ok(count)
    }
}

#[cfg(test)]
mod test {
    use anyhow::Result;
    use pretty_assertions::assert_eq;
    use tokio::fs;

    // Helper to create a temporary file with test content
    async fn create_test_file(content: &str) -> Result<tempfile::NamedTempFile> {
        let file = tempfile::NamedTempFile::new()?;
        fs::write(file.path(), content).await?;
        Ok(file)
    }

    #[tokio::test]
    async fn test_count_lines() -> Result<()> {
        let file = create_test_file("Line 1\nLine 2\nLine 3\n").await?;
        let actual = crate::PeekFS::count_lines(file.path()).await?;
        assert_eq!(actual, 3);
        Ok(())
    }

    #[tokio::test]
    async fn test_count_lines_without_trailing_newline() -> Result<()> {
        let file = create_test_file("Line 1\nLine 2\nLine 3").await?;
        let actual = crate::PeekFS::count_lines(file.path()).await?;
        assert_eq!(actual, 3);
        Ok(())
    }

    #[tokio::test]
    async fn test_count_lines_empty_file() -> Result<()> {
        let file = create_test_file("").await?;
        let actual = crate::PeekFS::count_lines(file.path()).await?;
        assert_eq!(actual, 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_count_lines_single_newline() -> Result<()> {
        let file = create_test_file("\n").await?;
        let actual = crate::PeekFS::count_lines(file.path()).await?;
        assert_eq!(actual, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_count_lines_larger_than_one_chunk() -> Result<()> {
        let content = "x\n".repeat(100_000);
        let file = create_test_file(&content).await?;
        let actual = crate::PeekFS::count_lines(file.path()).await?;
        assert_eq!(actual, 100_000);
        Ok(())
    }

    #[tokio::test]
    async fn test_count_lines_missing_file() {
        let actual = crate::PeekFS::count_lines("/nonexistent/file.csv").await;
        assert!(actual.is_err());
    }
}
