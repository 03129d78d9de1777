//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;

pub mod info;
pub mod score;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod stats;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Markdown files are scored on their prose only.
pub fn is_markdown(path: &Utf8Path) -> bool {
    matches!(path.extension(), Some("md" | "markdown"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    #[test]
    fn oversized_input_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("big.txt")).unwrap();
        std::fs::write(&path, "x".repeat(64)).unwrap();

        let err = read_input_file(&path, Some(10)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
        assert_eq!(read_input_file(&path, None).unwrap().len(), 64);
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_input_file(Utf8Path::new("/nonexistent/file.txt"), None).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/file.txt"));
    }

    #[test]
    fn markdown_detection() {
        assert!(is_markdown(Utf8Path::new("README.md")));
        assert!(is_markdown(Utf8Path::new("notes.markdown")));
        assert!(!is_markdown(Utf8Path::new("essay.txt")));
    }
}
