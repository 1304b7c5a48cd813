use printable_core::domain::Format;
use printable_core::error::Error;
use printable_core::ports::{OutputStream, Result, StreamOpener};
use printable_core::utils::output_file_name;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File opened in append mode; earlier content is never truncated
pub struct AppendFileStream {
    path: PathBuf,
    file: File,
    healthy: bool,
}

impl AppendFileStream {
    /// Opens `path` for appending, creating it if it does not exist
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| Error::Open {
                path: path.clone(),
                source,
            })?;
        debug!(path = %path.display(), "opened output file");

        Ok(Self {
            path,
            file,
            healthy: true,
        })
    }

    /// File the stream appends to
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputStream for AppendFileStream {
    fn is_healthy(&self) -> bool {
        self.healthy
    }

    fn write_str(&mut self, text: &str) -> Result<()> {
        if let Err(e) = self.file.write_all(text.as_bytes()) {
            self.healthy = false;
            return Err(e.into());
        }
        Ok(())
    }

    fn target(&self) -> String {
        self.path.display().to_string()
    }
}

/// Opens `<output_folder>/<stem>.<extension>` for each format
pub struct AppendFileOpener {
    output_folder: PathBuf,
    stem: String,
}

impl AppendFileOpener {
    pub fn new(output_folder: impl Into<PathBuf>, stem: impl Into<String>) -> Self {
        Self {
            output_folder: output_folder.into(),
            stem: stem.into(),
        }
    }

    /// Path the given format is written to
    pub fn path_for(&self, format: Format) -> PathBuf {
        self.output_folder.join(output_file_name(&self.stem, format))
    }
}

impl StreamOpener for AppendFileOpener {
    fn open(&self, format: Format) -> Result<Box<dyn OutputStream>> {
        // Create output directory if it doesn't exist
        fs::create_dir_all(&self.output_folder).map_err(|source| Error::Open {
            path: self.output_folder.clone(),
            source,
        })?;

        let stream = AppendFileStream::open(self.path_for(format))?;
        Ok(Box::new(stream))
    }
}
