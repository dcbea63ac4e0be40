use crate::ports::outbound::ReportWriter;
use crate::shared::error::ReportError;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// FileSystemReportWriter adapter for writing reports into a directory
///
/// The output directory (and any missing parents) is created on first
/// write. Existing reports with the same name are overwritten.
pub struct FileSystemReportWriter {
    output_dir: PathBuf,
}

impl FileSystemReportWriter {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    fn ensure_output_dir(&self) -> Result<()> {
        if self.output_dir.is_dir() {
            return Ok(());
        }

        fs::create_dir_all(&self.output_dir).map_err(|e| ReportError::FileWrite {
            path: self.output_dir.clone(),
            details: format!("Failed to create output directory: {}", e),
        })?;
        Ok(())
    }

    /// Refuses to follow a symbolic link sitting at the report path
    fn validate_target(&self, path: &Path) -> Result<()> {
        if let Ok(metadata) = fs::symlink_metadata(path) {
            if metadata.is_symlink() {
                return Err(ReportError::FileWrite {
                    path: path.to_path_buf(),
                    details: "Security: Output path is a symbolic link. For security reasons, writing to symbolic links is not allowed.".to_string(),
                }
                .into());
            }
            if metadata.is_dir() {
                return Err(ReportError::FileWrite {
                    path: path.to_path_buf(),
                    details: "Output path is a directory".to_string(),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl ReportWriter for FileSystemReportWriter {
    fn write_report(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        self.ensure_output_dir()?;

        let path = self.output_dir.join(file_name);
        self.validate_target(&path)?;

        fs::write(&path, content).map_err(|e| ReportError::FileWrite {
            path: path.clone(),
            details: e.to_string(),
        })?;

        Ok(path)
    }
}
