use super::ImageDecoder;
use anyhow::Context;
use std::{fs::File, io::BufReader, path::Path};

/// Decodes PNG files in-process.
pub struct PngDecoder;

impl ImageDecoder for PngDecoder {
    fn decode(&self, path: &Path) -> anyhow::Result<Vec<u8>> {
        let file =
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
        let img = image::load(BufReader::new(file), image::ImageFormat::Png)
            .with_context(|| format!("Failed to decode {}", path.display()))?;

        Ok(img.to_rgba8().into_raw())
    }
}
