pub mod defaults;
mod file_config;

use crate::decoder::DecoderKind;
pub use file_config::{default_config, FileConfig};
use std::path::PathBuf;

pub struct Config {
    /// Holds the `icon<size>.png` inputs and receives the generated header.
    pub directory: PathBuf,
    pub decoder: DecoderKind,
    pub convert_program: String,
}

impl Config {
    pub fn new(directory: PathBuf, file_config: FileConfig) -> Self {
        Self {
            directory,
            decoder: file_config.decoder.kind,
            convert_program: file_config.decoder.convert_program,
        }
    }
}
