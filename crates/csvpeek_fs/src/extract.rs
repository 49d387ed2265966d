use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::error::Error;

impl crate::PeekFS {
    /// Extracts an inclusive range of lines from a file as newline-joined
    /// text.
    ///
    /// # Arguments
    /// * `path` - Path to the file to read
    /// * `start_line` - Starting line number (1-based, inclusive)
    /// * `end_line` - Ending line number (1-based, inclusive)
    ///
    /// Reading stops as soon as `end_line` has been consumed, so the tail of
    /// a large file is never touched. Line numbers past the end of the file
    /// are silently dropped. The result carries no trailing newline, and line
    /// endings (`\n` or `\r\n`) are normalized away from each line.
    pub async fn extract_lines<T: AsRef<Path>>(
        path: T,
        start_line: u64,
        end_line: u64,
    ) -> Result<String> {
        if start_line == 0 || end_line == 0 {
            return Err(Error::ZeroLine { start: start_line, end: end_line }.into());
        }
        if start_line > end_line {
            return Err(Error::StartGreaterThanEnd { start: start_line, end: end_line }.into());
        }

        let path_ref = path.as_ref();
        let file = File::open(path_ref)
            .await
            .with_context(|| format!("Failed to open file {}", path_ref.display()))?;

        let mut reader = BufReader::new(file);
        let mut buf = Vec::new();
        let mut line_no: u64 = 0;
        let mut out = String::new();
        let mut first = true;

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .await
                .with_context(|| format!("Failed to read file {}", path_ref.display()))?;
            if read == 0 {
                break;
            }
            line_no += 1;
            if line_no < start_line {
                continue;
            }
            if line_no > end_line {
                break;
            }

            if buf.last() == Some(&b'\n') {
                buf.pop();
                if buf.last() == Some(&b'\r') {
                    buf.pop();
                }
            }
            let line = std::str::from_utf8(&buf)
                .with_context(|| format!("File {} is not valid UTF-8", path_ref.display()))?;

            if first {
                first = false;
            } else {
                out.push('\n');
            }
            out.push_str(line);
        }

        Ok(out)
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
    async fn test_extract_lines() -> Result<()> {
        let content = "Line 1\nLine 2\nLine 3\nLine 4\nLine 5";
        let file = create_test_file(content).await?;

        // Middle range
        let actual = crate::PeekFS::extract_lines(file.path(), 2, 4).await?;
        assert_eq!(actual, "Line 2\nLine 3\nLine 4");

        // From start
        let actual = crate::PeekFS::extract_lines(file.path(), 1, 2).await?;
        assert_eq!(actual, "Line 1\nLine 2");

        // To end
        let actual = crate::PeekFS::extract_lines(file.path(), 4, 5).await?;
        assert_eq!(actual, "Line 4\nLine 5");

        // Single line
        let actual = crate::PeekFS::extract_lines(file.path(), 3, 3).await?;
        assert_eq!(actual, "Line 3");

        Ok(())
    }

    #[tokio::test]
    async fn test_extract_lines_past_end_of_file() -> Result<()> {
        let file = create_test_file("Line 1\nLine 2\nLine 3").await?;

        // End overshoots: returns what the file holds
        let actual = crate::PeekFS::extract_lines(file.path(), 2, 10).await?;
        assert_eq!(actual, "Line 2\nLine 3");

        // Whole range past the end: empty result
        let actual = crate::PeekFS::extract_lines(file.path(), 5, 10).await?;
        assert_eq!(actual, "");

        Ok(())
    }

    #[tokio::test]
    async fn test_extract_lines_preserves_empty_lines() -> Result<()> {
        let file = create_test_file("\nLine 2\n\nLine 4").await?;
        let actual = crate::PeekFS::extract_lines(file.path(), 1, 4).await?;
        assert_eq!(actual, "\nLine 2\n\nLine 4");
        Ok(())
    }

    #[tokio::test]
    async fn test_extract_lines_crlf_endings() -> Result<()> {
        let file = create_test_file("Line 1\r\nLine 2\r\nLine 3\r\n").await?;
        let actual = crate::PeekFS::extract_lines(file.path(), 1, 2).await?;
        assert_eq!(actual, "Line 1\nLine 2");
        Ok(())
    }

    #[tokio::test]
    async fn test_extract_lines_invalid_ranges() -> Result<()> {
        let file = create_test_file("Line 1\nLine 2").await?;

        assert!(crate::PeekFS::extract_lines(file.path(), 0, 2).await.is_err());
        assert!(crate::PeekFS::extract_lines(file.path(), 1, 0).await.is_err());
        assert!(crate::PeekFS::extract_lines(file.path(), 4, 2).await.is_err());

        Ok(())
    }
}
