use std::path::PathBuf;

use clap::Args;
use geostego_core::CodecOptions;

use crate::cli::KeyArgs;
use crate::CliResult;

/// Unveils a text message from an image and prints it
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source image that contains the secret message
    #[arg(
        short = 'i',
        long = "in",
        value_name = "image source file",
        required = true
    )]
    pub media: PathBuf,

    /// The message is stored in that file instead of being printed
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output_file: Option<PathBuf>,

    #[command(flatten)]
    pub key: KeyArgs,
}

impl UnveilArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let key = self.key.into_location_key()?;
        let print = self.output_file.is_none();
        let message = geostego_core::commands::unveil(&self.media, self.output_file, key, options)?;

        if message.is_empty() {
            eprintln!("No message found for this key.");
        } else if print {
            println!("{message}");
        }

        Ok(())
    }
}
