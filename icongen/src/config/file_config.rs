use anyhow::{anyhow, Context};
use serde::Deserialize;
use serde_default::DefaultFromSerde;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{config::defaults, decoder::DecoderKind};

pub fn default_config() -> String {
    format!(
        r#"# The commented values are the defaults
[decoder]
# "png" decodes in-process, "convert" runs an external tool
# kind = "{}"
# Invoked as `<program> <input.png> <output.rgba>` by the "convert" decoder
# convert-program = "{}"
"#,
        defaults::decoder(),
        defaults::convert_program(),
    )
}

#[derive(Deserialize, DefaultFromSerde)]
#[serde(rename_all = "kebab-case")]
pub struct DecoderConfig {
    #[serde(default = "defaults::decoder")]
    pub kind: DecoderKind,
    #[serde(default = "defaults::convert_program")]
    pub convert_program: String,
}

#[derive(Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub decoder: DecoderConfig,
}

impl FileConfig {
    /// Reads the overridden file, which must exist, or the user config if there is one.
    pub fn new(config_override: Option<PathBuf>) -> anyhow::Result<Self> {
        if let Some(config_override) = config_override {
            let config_path = match config_override.strip_prefix("~/") {
                Ok(relative) => dirs::home_dir()
                    .ok_or(anyhow!("Home directory is not found"))?
                    .join(relative),
                Err(_) => config_override,
            };
            if fs::metadata(&config_path).is_err() {
                anyhow::bail!("Config file is not accessible at {}", config_path.display());
            }

            return Self::read(&config_path);
        }

        Self::from_config_dir(dirs::config_dir())
    }

    fn from_config_dir(config_dir: Option<PathBuf>) -> anyhow::Result<Self> {
        let Some(mut config_path) = config_dir else {
            debug!("Config directory is unknown, using defaults");
            return Ok(Self::default());
        };
        config_path.push("wmicon");
        config_path.push("config.toml");

        if fs::metadata(&config_path).is_err() {
            debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        Self::read(&config_path)
    }

    fn read(config_path: &Path) -> anyhow::Result<Self> {
        debug!("Reading config at {}", config_path.display());
        let config_content = fs::read_to_string(config_path).with_context(|| {
            format!("Impossible to read config file {}", config_path.display())
        })?;

        toml::from_str(&config_content)
            .with_context(|| format!("Invalid config file {}", config_path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[rstest]
    fn all() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[decoder]
kind = "convert"
convert-program = "/usr/local/bin/magick"
        "#
        )
        .unwrap();

        let config = FileConfig::new(Some(file.path().to_path_buf())).unwrap();

        assert_eq!(DecoderKind::Convert, config.decoder.kind);
        assert_eq!("/usr/local/bin/magick", config.decoder.convert_program);
    }

    #[rstest]
    fn empty() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[decoder]").unwrap();

        let config = FileConfig::new(Some(file.path().to_path_buf())).unwrap();

        assert_eq!(defaults::decoder(), config.decoder.kind);
        assert_eq!(defaults::convert_program(), config.decoder.convert_program);
    }

    #[rstest]
    fn commented_default_is_valid() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", default_config()).unwrap();

        let config = FileConfig::new(Some(file.path().to_path_buf())).unwrap();

        assert_eq!(defaults::decoder(), config.decoder.kind);
        assert_eq!(defaults::convert_program(), config.decoder.convert_program);
    }

    #[rstest]
    fn unknown_decoder() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[decoder]\nkind = \"magick\"").unwrap();

        let config = FileConfig::new(Some(file.path().to_path_buf()));

        assert!(config.is_err());
    }

    #[rstest]
    fn unknown_config_dir() {
        let config = FileConfig::from_config_dir(None).unwrap();

        assert_eq!(defaults::decoder(), config.decoder.kind);
        assert_eq!(defaults::convert_program(), config.decoder.convert_program);
    }

    #[rstest]
    fn config_dir_without_file() {
        let dir = tempdir().unwrap();

        let config = FileConfig::from_config_dir(Some(dir.path().to_path_buf())).unwrap();

        assert_eq!(defaults::decoder(), config.decoder.kind);
    }

    #[rstest]
    fn config_dir_with_file() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("wmicon")).unwrap();
        fs::write(
            dir.path().join("wmicon").join("config.toml"),
            "[decoder]\nkind = \"convert\"",
        )
        .unwrap();

        let config = FileConfig::from_config_dir(Some(dir.path().to_path_buf())).unwrap();

        assert_eq!(DecoderKind::Convert, config.decoder.kind);
    }

    #[rstest]
    fn wrong_file() {
        let file = PathBuf::new();

        let config = FileConfig::new(Some(file));

        assert!(config.is_err());
        assert_eq!(
            "Config file is not accessible at ",
            config.err().unwrap().to_string()
        );
    }
}
