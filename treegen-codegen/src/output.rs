//! Output writing.
//!
//! A document is only meaningful as a whole, so it is written in a single
//! step: streams get one `write_all`, files are written to a temporary file
//! next to the destination and renamed over it.

use crate::error::CodegenError;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes a document to a stream in one call.
///
/// # Errors
/// Returns `CodegenError::Io` if the stream rejects the write.
pub fn write_to<W: Write>(writer: &mut W, contents: &str) -> Result<(), CodegenError> {
    writer.write_all(contents.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Atomically replaces the file at `path` with `contents`.
///
/// Readers see either the previous file or the complete new one. The parent
/// directory must already exist.
///
/// # Errors
/// Returns `CodegenError::OutputWrite` if the destination cannot be written.
pub fn write_file_atomic(path: &Path, contents: &str) -> Result<(), CodegenError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file =
        NamedTempFile::new_in(dir).map_err(|e| CodegenError::output_write(path, e))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| CodegenError::output_write(path, e))?;
    file.as_file()
        .sync_all()
        .map_err(|e| CodegenError::output_write(path, e))?;
    file.persist(path)
        .map_err(|e| CodegenError::output_write(path, e.error))?;

    tracing::info!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_to_stream() {
        let mut buf = Vec::new();
        write_to(&mut buf, "abstract class Expr {}\n").unwrap();
        assert_eq!(buf, b"abstract class Expr {}\n");
    }

    #[test]
    fn test_write_file_atomic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Expr.java");

        write_file_atomic(&path, "first\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\n");

        write_file_atomic(&path, "second\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second\n");

        // Only the destination remains; the temporary file was renamed.
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("Expr.java");

        let err = write_file_atomic(&path, "abstract class Expr {}\n").unwrap_err();
        assert!(matches!(err, CodegenError::OutputWrite { path: ref p, .. } if p == &path));
        assert!(!path.exists());
    }
}
