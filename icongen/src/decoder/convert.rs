use super::ImageDecoder;
use anyhow::Context;
use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};
use tempfile::NamedTempFile;

/// Runs an external converter as `<program> <input> <output.rgba>` and reads the dump back.
/// The dump lives in a uniquely named temporary file which is removed once read.
pub struct ConvertDecoder {
    program: String,
    scratch_dir: Option<PathBuf>,
}

impl ConvertDecoder {
    pub fn new(program: &str, scratch_dir: Option<PathBuf>) -> Self {
        Self {
            program: program.to_string(),
            scratch_dir,
        }
    }

    fn intermediate(&self) -> anyhow::Result<NamedTempFile> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("icon").suffix(".rgba");

        let file = if let Some(dir) = &self.scratch_dir {
            builder.tempfile_in(dir)
        } else {
            builder.tempfile()
        };
        file.with_context(|| "Failed to create a temporary pixel dump")
    }
}

impl ImageDecoder for ConvertDecoder {
    fn decode(&self, path: &Path) -> anyhow::Result<Vec<u8>> {
        let dump = self.intermediate()?;
        trace!("Temporary pixel dump at {}", dump.path().display());

        debug!(
            "Running {} {} {}",
            self.program,
            path.display(),
            dump.path().display()
        );
        let status = Command::new(&self.program)
            .arg(path)
            .arg(dump.path())
            .status()
            .with_context(|| format!("Failed to run {}", self.program))?;
        if !status.success() {
            anyhow::bail!(
                "{} could not convert {}: {status}",
                self.program,
                path.display()
            );
        }

        fs::read(dump.path())
            .with_context(|| format!("Failed to read the pixel dump of {}", path.display()))
    }
}
