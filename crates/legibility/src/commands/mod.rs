//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;

use legibility_core::markdown;

pub mod info;
pub mod score;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod words;

/// Path argument meaning "read standard input".
pub const STDIN_PATH: &str = "-";

/// Read a file (or stdin for `-`) and validate its size against the
/// configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    if path.as_str() == STDIN_PATH {
        return read_limited(std::io::stdin().lock(), max_bytes, "standard input");
    }

    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len();
        if size > max as u64 {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}

/// Read a stream to a string, failing once it exceeds `max_bytes`.
fn read_limited<R: Read>(
    reader: R,
    max_bytes: Option<usize>,
    name: &str,
) -> anyhow::Result<String> {
    let mut bytes = Vec::new();
    match max_bytes {
        Some(max) => {
            let limit = u64::try_from(max).unwrap_or(u64::MAX).saturating_add(1);
            reader
                .take(limit)
                .read_to_end(&mut bytes)
                .with_context(|| format!("failed to read {name}"))?;
            // Size first: the cut may split a multi-byte character
            if bytes.len() > max {
                anyhow::bail!("input too large: {name} exceeds {max} bytes");
            }
        }
        None => {
            let mut reader = reader;
            reader
                .read_to_end(&mut bytes)
                .with_context(|| format!("failed to read {name}"))?;
        }
    }
    String::from_utf8(bytes).with_context(|| format!("{name} is not valid UTF-8"))
}

/// Whether the input should be treated as Markdown.
pub fn is_markdown(path: &Utf8Path) -> bool {
    matches!(path.extension(), Some("md" | "markdown"))
}

/// Read input and reduce Markdown files to their prose.
pub fn read_prose(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let content = read_input_file(path, max_bytes)?;
    if is_markdown(path) {
        tracing::debug!(%path, "stripping markdown");
        Ok(markdown::strip_to_prose(&content))
    } else {
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use std::fs;
    use tempfile::TempDir;

    fn temp_file(dir: &TempDir, name: &str, contents: &str) -> Utf8PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        Utf8PathBuf::try_from(path).unwrap()
    }

    #[test]
    fn reads_file_within_limit() {
        let tmp = TempDir::new().unwrap();
        let path = temp_file(&tmp, "a.txt", "hello");
        assert_eq!(read_input_file(&path, Some(5)).unwrap(), "hello");
        assert_eq!(read_input_file(&path, None).unwrap(), "hello");
    }

    #[test]
    fn rejects_file_over_limit() {
        let tmp = TempDir::new().unwrap();
        let path = temp_file(&tmp, "a.txt", "hello world");
        let err = read_input_file(&path, Some(5)).unwrap_err();
        assert!(err.to_string().contains("input too large"), "{err}");
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_input_file(Utf8Path::new("/nonexistent/x.txt"), None).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/x.txt"));
    }

    #[test]
    fn limited_stream_reads() {
        let out = read_limited("abc".as_bytes(), Some(3), "stdin").unwrap();
        assert_eq!(out, "abc");
        assert!(read_limited("abcd".as_bytes(), Some(3), "stdin").is_err());
        assert_eq!(read_limited("abcd".as_bytes(), None, "stdin").unwrap(), "abcd");
    }

    #[test]
    fn over_limit_multibyte_stream_reports_size() {
        // The limit cuts "é" in half
        let err = read_limited("aé".as_bytes(), Some(1), "standard input").unwrap_err();
        assert!(err.to_string().contains("input too large"), "{err}");

        assert_eq!(read_limited("aé".as_bytes(), Some(3), "stdin").unwrap(), "aé");
    }

    #[test]
    fn invalid_utf8_stream_is_an_error() {
        let err = read_limited(&[0xff, 0xfe][..], None, "standard input").unwrap_err();
        assert!(err.to_string().contains("not valid UTF-8"), "{err}");
    }

    #[test]
    fn markdown_inputs_are_stripped() {
        let tmp = TempDir::new().unwrap();
        let path = temp_file(&tmp, "doc.md", "# Title\n\nPlain words.\n\n```\ncode\n```\n");
        assert_eq!(read_prose(&path, None).unwrap(), "Plain words.");

        let txt = temp_file(&tmp, "doc.txt", "# Title");
        assert_eq!(read_prose(&txt, None).unwrap(), "# Title");
    }
}
