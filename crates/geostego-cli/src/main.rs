use clap::Parser;
use geostego_core::GeoStegoError;

use crate::cli::{CliArgs, Commands};

mod cli;
mod commands;

pub type CliResult<T> = Result<T, GeoStegoError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let options = args.codec_options();

    match args.command {
        Commands::Hide(hide) => hide.run(options),
        Commands::Unveil(unveil) => unveil.run(options),
        Commands::Capacity(capacity) => capacity.run(options),
        Commands::DeriveKey(derive_key) => derive_key.run(),
    }
}
