#[macro_use]
extern crate log;

mod config;

use config::RunConfig;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

fn setup_logger(verbosity: LevelFilter) -> Result<(), fern::InitError> {
    let colors = ColoredLevelConfig::new()
        .info(Color::Green)
        .debug(Color::Blue)
        .trace(Color::Cyan);
    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                colors.color(record.level()),
                record.target(),
                message
            ));
        })
        .level(LevelFilter::Error)
        .level_for("wmicon", verbosity)
        .level_for("icongen", verbosity)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = RunConfig::from_cli();
    if config.print_config {
        print!("{}", icongen::config::default_config());
        return Ok(());
    }
    setup_logger(config.verbosity)?;

    let generator_config = config.generator_config()?;
    debug!(
        "Generating in {} with the {} decoder",
        generator_config.directory.display(),
        generator_config.decoder
    );
    icongen::generate(&generator_config)?;

    Ok(())
}
