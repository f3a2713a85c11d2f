use std::io;
use std::path::{Path, PathBuf};

/// Failure to build a lookup table from its backing resource.
///
/// Only constructors return this. Once a table is loaded, queries report
/// misses as `None` instead.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Resource not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Read a whole resource into memory, mapping a missing file to
/// [`LoadError::FileNotFound`].
pub fn read_resource(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::FileNotFound(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("absent.txt");

        match read_resource(&path) {
            Err(LoadError::FileNotFound(p)) => assert_eq!(p, path),
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_directory_is_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = read_resource(dir.path());
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn test_reads_contents() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("codes.txt");
        std::fs::write(&path, "header\n").unwrap();
        assert_eq!(read_resource(&path).unwrap(), "header\n");
    }
}
