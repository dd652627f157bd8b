use crate::utils::error::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Where a rendered export ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    Stdout,
    File(PathBuf),
}

impl OutputSink {
    pub fn new(output: Option<&str>) -> Self {
        match output {
            Some(path) if path != "-" => OutputSink::File(PathBuf::from(path)),
            _ => OutputSink::Stdout,
        }
    }

    pub fn write(&self, data: &str) -> Result<()> {
        match self {
            OutputSink::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(data.as_bytes())?;
                if !data.ends_with('\n') {
                    stdout.write_all(b"\n")?;
                }
                stdout.flush()?;
            }
            OutputSink::File(path) => write_file(path, data)?,
        }
        Ok(())
    }
}

fn write_file(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, data)?;
    tracing::info!("📁 Export saved to: {}", path.display());
    Ok(())
}
