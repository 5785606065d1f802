mod convert;
mod png;

pub use convert::ConvertDecoder;
pub use png::PngDecoder;

use crate::config::Config;
use serde::Deserialize;
use std::{fmt::Display, path::Path, str::FromStr};

/// Turns an image file into raw RGBA bytes, 4 per pixel, row-major.
pub trait ImageDecoder {
    fn decode(&self, path: &Path) -> anyhow::Result<Vec<u8>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecoderKind {
    Png,
    Convert,
}

impl Display for DecoderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecoderKind::Png => write!(f, "png"),
            DecoderKind::Convert => write!(f, "convert"),
        }
    }
}

impl FromStr for DecoderKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "png" => Ok(DecoderKind::Png),
            "convert" => Ok(DecoderKind::Convert),
            _ => anyhow::bail!("Unknown decoder \"{s}\", expected \"png\" or \"convert\""),
        }
    }
}

pub fn create(config: &Config) -> Box<dyn ImageDecoder> {
    info!("Selected decoder: {}", config.decoder);
    match config.decoder {
        DecoderKind::Png => Box::new(PngDecoder),
        DecoderKind::Convert => Box::new(ConvertDecoder::new(&config.convert_program, None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("png", DecoderKind::Png)]
    #[case("convert", DecoderKind::Convert)]
    fn parses_and_displays(#[case] name: &str, #[case] kind: DecoderKind) {
        assert_eq!(kind, name.parse::<DecoderKind>().unwrap());
        assert_eq!(name, kind.to_string());
    }

    #[cfg(unix)]
    #[rstest]
    fn creates_external_decoder() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("icon16.png");
        std::fs::write(&input, [9, 8, 7, 6]).unwrap();
        let config = Config {
            directory: dir.path().to_path_buf(),
            decoder: DecoderKind::Convert,
            convert_program: "cp".to_string(),
        };

        let raw = create(&config).decode(&input).unwrap();

        assert_eq!(vec![9, 8, 7, 6], raw);
    }

    #[rstest]
    fn creates_png_decoder() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("icon16.png");
        std::fs::write(&input, [9, 8, 7, 6]).unwrap();
        let config = Config {
            directory: dir.path().to_path_buf(),
            decoder: DecoderKind::Png,
            convert_program: "cp".to_string(),
        };

        assert!(create(&config).decode(&input).is_err());
    }

    #[rstest]
    fn unknown_kind() {
        let kind = "magick".parse::<DecoderKind>();

        assert_eq!(
            "Unknown decoder \"magick\", expected \"png\" or \"convert\"",
            kind.unwrap_err().to_string()
        );
    }
}
