use std::path::PathBuf;

use clap::Args;
use geostego_core::CodecOptions;

use crate::cli::KeyArgs;
use crate::CliResult;

/// Estimates how long a message an image can carry
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// Carrier image
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub media: PathBuf,

    #[command(flatten)]
    pub key: KeyArgs,
}

impl CapacityArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let key = self.key.into_location_key()?;
        let report = geostego_core::commands::capacity(&self.media, key, options)?;

        println!(
            "{} bits, up to {} characters",
            report.capacity_bits, report.max_message_chars
        );

        Ok(())
    }
}
