use crate::{
    config::Config,
    decoder::{self, ImageDecoder},
    header::{Header, HeaderWriter},
    pixel::BYTES_PER_PIXEL,
};
use anyhow::Context;
use std::{fs, path::Path};

pub const ICON_SIZES: [u32; 2] = [16, 32];
pub const OUTPUT_FILE: &str = "wm_icon.h";

fn input_file_name(size: u32) -> String {
    format!("icon{size}.png")
}

pub fn generate(config: &Config) -> anyhow::Result<Header> {
    let decoder = decoder::create(config);

    generate_with(decoder.as_ref(), &config.directory)
}

/// Decodes every icon size in order, then overwrites the header in `directory`.
/// Nothing is written unless all icons decode to the expected dimensions.
pub fn generate_with(decoder: &dyn ImageDecoder, directory: &Path) -> anyhow::Result<Header> {
    let mut writer = HeaderWriter::new();

    for size in ICON_SIZES {
        let input = directory.join(input_file_name(size));
        let raw = decoder
            .decode(&input)
            .with_context(|| format!("Failed to load the {size}x{size} icon"))?;
        debug!("Decoded {} into {} bytes", input.display(), raw.len());

        let expected_len = pixel_data_len(size);
        if raw.len() != expected_len {
            anyhow::bail!(
                "{} is not a {size}x{size} image: expected {expected_len} bytes of pixels, got {}",
                input.display(),
                raw.len()
            );
        }
        writer.push_image(size, &raw);
    }

    let header = writer.finish();
    let output = directory.join(OUTPUT_FILE);
    fs::write(&output, &header.text)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!("Wrote {} entries to {}", header.entries, output.display());

    Ok(header)
}

fn pixel_data_len(size: u32) -> usize {
    let side = size as usize;
    side * side * BYTES_PER_PIXEL
}
