#[macro_use]
extern crate log;

pub mod config;
pub mod decoder;
mod generator;
mod header;
mod pixel;

pub use generator::{generate, generate_with, ICON_SIZES, OUTPUT_FILE};
pub use header::Header;
