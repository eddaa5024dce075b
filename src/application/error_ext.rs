//! Error conversion helpers for common I/O operations
//!
//! Provides extension traits for cleaner error handling with path context.

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    ///
    /// # Example
    /// ```ignore
    /// self.fs.create(&path)
    ///     .with_path_context("create grid file", &path)?;
    /// ```
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T>;

    /// Like `with_path_context`, for failures while writing an already created file.
    fn with_write_context(self, action: &str, path: &Path) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::OperationFailed {
            context: format!("{}: {}", action, path.display()),
            source: Box::new(e),
        })
    }

    fn with_write_context(self, action: &str, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::WriteFailed {
            context: format!("{}: {}", action, path.display()),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_path_context_keeps_action_and_path() {
        let result: io::Result<()> = Err(io::Error::new(io::ErrorKind::Other, "boom"));

        let err = result
            .with_path_context("write grid file", Path::new("/tmp/grid_3.satisfied"))
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "operation failed: write grid file: /tmp/grid_3.satisfied"
        );
    }

    #[test]
    fn test_with_write_context_keeps_io_kind() {
        let result: io::Result<()> = Err(io::Error::new(io::ErrorKind::StorageFull, "full"));

        let err = result
            .with_write_context("write grid file", Path::new("grid_3.satisfied"))
            .unwrap_err();

        match err {
            ApplicationError::WriteFailed { context, source } => {
                assert_eq!(context, "write grid file: grid_3.satisfied");
                assert_eq!(source.kind(), io::ErrorKind::StorageFull);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
