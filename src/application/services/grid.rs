//! Grid file generation service
//!
//! Writes one `grid_<n>.satisfied` scene per call.

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{GridLayout, GridSize, GridSummary};
use crate::infrastructure::traits::FileSystem;

/// Outcome of a generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridReport {
    /// Where the scene was written
    pub path: PathBuf,
    pub summary: GridSummary,
    /// Lines written, header included
    pub lines_written: u64,
}

/// Service writing grid scenes through the filesystem abstraction.
pub struct GridService {
    fs: Arc<dyn FileSystem>,
}

impl GridService {
    /// Create a new grid service.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Generate the grid of the given size into `output_dir`.
    ///
    /// An existing file with the same name is overwritten. The file handle is
    /// flushed before returning and closed on every path out of this function.
    #[instrument(skip(self))]
    pub fn generate(&self, size: GridSize, output_dir: &Path) -> ApplicationResult<GridReport> {
        self.prepare_output_dir(output_dir)?;

        let path = Self::output_path(output_dir, size);
        if self.fs.exists(&path) {
            debug!("generate: overwriting {}", path.display());
        }

        let layout = GridLayout::new(size);
        let file = self
            .fs
            .create(&path)
            .with_path_context("create grid file", &path)?;
        let mut writer = BufWriter::new(file);
        let lines_written =
            Self::write_scene(&layout, &mut writer).with_write_context("write grid file", &path)?;
        writer
            .flush()
            .with_write_context("flush grid file", &path)?;

        info!(
            "generate: wrote {} lines for {}x{} grid to {}",
            lines_written,
            size,
            size,
            path.display()
        );

        Ok(GridReport {
            path,
            summary: layout.summary(),
            lines_written,
        })
    }

    /// Write header and body of `layout` to `out`, returning the line count.
    pub fn write_scene<W: Write>(layout: &GridLayout, out: &mut W) -> io::Result<u64> {
        writeln!(out, "{}", layout.header())?;
        let mut lines = 1;
        for entity in layout.entities() {
            writeln!(out, "{}", entity)?;
            lines += 1;
        }
        Ok(lines)
    }

    /// Target path for a grid of `size` in `output_dir`.
    ///
    /// The current directory yields the bare file name.
    pub fn output_path(output_dir: &Path, size: GridSize) -> PathBuf {
        if output_dir.as_os_str().is_empty() || output_dir == Path::new(".") {
            PathBuf::from(size.file_name())
        } else {
            output_dir.join(size.file_name())
        }
    }

    fn prepare_output_dir(&self, output_dir: &Path) -> ApplicationResult<()> {
        if output_dir.as_os_str().is_empty() {
            return Ok(());
        }
        if !self.fs.exists(output_dir) {
            debug!("prepare_output_dir: creating {}", output_dir.display());
            return self
                .fs
                .create_dir_all(output_dir)
                .with_path_context("create output directory", output_dir);
        }
        if !self.fs.is_dir(output_dir) {
            return Err(ApplicationError::NotADirectory(output_dir.to_path_buf()));
        }
        Ok(())
    }
}
