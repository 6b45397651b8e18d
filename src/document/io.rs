//! Reading lines from text and writing them back.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::Document;

/// Failure talking to the file a document is loaded from or saved to.
///
/// These are always recoverable: the in-memory document is left as it was.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DocumentError {
    /// Whether the failure was a read of a file that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Read { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Terminator written after every line on save.
#[derive(clap::ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    #[default]
    Lf,
    Crlf,
}

impl LineEnding {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
        }
    }

    /// Name as accepted on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lf => "lf",
            Self::Crlf => "crlf",
        }
    }
}

/// Split raw text into lines with their terminators stripped.
///
/// Both `\n` and `\r\n` end a line. A terminator at the very end does not
/// open another line, and empty text yields a single empty line.
///
/// Only one `\r` is stripped per line, so `"a\r\r\n"` loads as `"a\r"`.
/// Saving that line with [`LineEnding::Lf`] writes `"a\r\n"`, which the
/// next load reads as `"a"`: a trailing carriage return inside a line does
/// not survive a round trip.
pub fn parse_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text
        .split_terminator('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect();
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Join lines into text, writing `ending` after every line.
pub fn serialize_lines<I, S>(lines: I, ending: LineEnding) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for line in lines {
        out.push_str(line.as_ref());
        out.push_str(ending.as_str());
    }
    out
}

/// Read a file into lines.
///
/// Invalid UTF-8 is replaced with U+FFFD rather than rejected.
///
/// # Errors
/// Returns [`DocumentError::Read`] if the file cannot be read.
pub fn read_lines(path: &Path) -> Result<Vec<String>, DocumentError> {
    let bytes = fs::read(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(path = %path.display(), "file is not valid UTF-8; decoding lossily");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    };
    let lines = parse_lines(&text);
    tracing::info!(path = %path.display(), lines = lines.len(), "loaded file");
    Ok(lines)
}

/// Write every line of `document` to `path`, replacing its contents.
///
/// # Errors
/// Returns [`DocumentError::Write`] if the file cannot be written. The
/// document itself is never touched.
pub fn write_lines(
    path: &Path,
    document: &Document,
    ending: LineEnding,
) -> Result<(), DocumentError> {
    let text = serialize_lines(document.lines(), ending);
    fs::write(path, text).map_err(|source| DocumentError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(
        path = %path.display(),
        lines = document.line_count(),
        ending = ending.name(),
        "saved file"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_empty_text_is_one_empty_line() {
        assert_eq!(parse_lines(""), vec![String::new()]);
    }

    #[test]
    fn test_parse_strips_terminators() {
        assert_eq!(parse_lines("ab\ncd\n"), vec!["ab", "cd"]);
    }

    #[test]
    fn test_parse_without_final_terminator() {
        assert_eq!(parse_lines("ab\ncd"), vec!["ab", "cd"]);
    }

    #[test]
    fn test_parse_crlf() {
        assert_eq!(parse_lines("ab\r\n\r\ncd\r\n"), vec!["ab", "", "cd"]);
    }

    #[test]
    fn test_parse_strips_only_one_carriage_return() {
        assert_eq!(parse_lines("a\r\r\n"), vec!["a\r"]);
        assert_eq!(parse_lines("a\rb\n"), vec!["a\rb"]);
    }

    #[test]
    fn test_parse_lone_terminator_is_one_empty_line() {
        assert_eq!(parse_lines("\n"), vec![String::new()]);
    }

    #[test]
    fn test_serialize_writes_one_terminator_per_line() {
        let text = serialize_lines(["x", "", "y"], LineEnding::Lf);
        assert_eq!(text, "x\n\ny\n");
    }

    #[test]
    fn test_serialize_crlf() {
        let text = serialize_lines(["x", "y"], LineEnding::Crlf);
        assert_eq!(text, "x\r\ny\r\n");
    }

    #[test]
    fn test_write_then_read_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        let doc = Document::from_lines(["héllo", "", "wörld"]);

        write_lines(&path, &doc, LineEnding::Lf).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "héllo\n\nwörld\n");
        assert_eq!(read_lines(&path).unwrap(), vec!["héllo", "", "wörld"]);
    }

    #[test]
    fn test_read_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let err = read_lines(&dir.path().join("missing.txt")).unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_read_invalid_utf8_is_lossy() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bin.txt");
        std::fs::write(&path, b"ok\n\xff\n").unwrap();
        assert_eq!(read_lines(&path).unwrap(), vec!["ok", "\u{fffd}"]);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.txt");
        let err = write_lines(&path, &Document::new(), LineEnding::Lf).unwrap_err();
        assert!(matches!(err, DocumentError::Write { .. }));
        assert!(!err.is_not_found());
    }
}
