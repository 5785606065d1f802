use clap::{arg, parser::ValueSource, value_parser, Arg, ArgAction, ArgMatches, Command};
use icongen::{
    config::{defaults, Config, FileConfig},
    decoder::DecoderKind,
};
use log::LevelFilter;
use std::path::PathBuf;

pub struct RunConfig {
    pub verbosity: LevelFilter,
    pub print_config: bool,
    matches: ArgMatches,
}

impl RunConfig {
    pub fn from_cli() -> Self {
        Self::from_matches(command().get_matches())
    }

    fn from_matches(matches: ArgMatches) -> Self {
        let verbosity = match matches.get_count("verbosity") {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            3 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };

        Self {
            verbosity,
            print_config: matches.get_flag("print-config"),
            matches,
        }
    }

    /// Loads the config file and applies the options given on the command line over it.
    pub fn generator_config(&self) -> anyhow::Result<Config> {
        let mut config = FileConfig::new(self.matches.get_one::<PathBuf>("config").cloned())?;
        merge_cli(&mut config, &self.matches);

        let directory = self
            .matches
            .get_one::<PathBuf>("directory")
            .cloned()
            .unwrap_or_default();

        Ok(Config::new(directory, config))
    }
}

fn command() -> Command {
    Command::new("wmicon")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generates wm_icon.h from icon16.png and icon32.png")
        .args([
            arg!(-C --directory <DIR> "Directory with the icons and the generated header")
                .value_parser(value_parser!(PathBuf))
                .default_value("."),
            arg!(-c --config <FILE> "Custom config file").value_parser(value_parser!(PathBuf)),
            arg!(--decoder <DECODER> "Image decoder: \"png\" or \"convert\"")
                .value_parser(value_parser!(DecoderKind))
                .default_value(defaults::decoder().to_string()),
            arg!(--"convert-program" <PROGRAM> "External converter for the \"convert\" decoder")
                .value_parser(value_parser!(String))
                .default_value(defaults::convert_program()),
            arg!(--"print-config" "Print the default config file and exit")
                .action(ArgAction::SetTrue),
            Arg::new("verbosity")
                .short('v')
                .help("Verbosity level: -v for warnings, -vv for info, -vvv for debug, -vvvv for trace")
                .action(ArgAction::Count),
        ])
}

fn merge_cli(config: &mut FileConfig, matches: &ArgMatches) {
    get_arg_value("decoder", matches, &mut config.decoder.kind);
    get_arg_value(
        "convert-program",
        matches,
        &mut config.decoder.convert_program,
    );
}

fn get_arg_value<T>(id: &str, matches: &ArgMatches, config_value: &mut T)
where
    T: Clone + Send + Sync + 'static,
{
    if let Some(ValueSource::CommandLine) = matches.value_source(id) {
        if let Some(value) = matches.get_one::<T>(id) {
            *config_value = value.clone();
        }
    }
}
