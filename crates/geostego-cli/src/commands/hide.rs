use std::path::PathBuf;

use clap::Args;
use geostego_core::CodecOptions;

use crate::cli::KeyArgs;
use crate::CliResult;

/// Hides a text message in an image, the result is stored as PNG or BMP
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Carrier image such as a PNG or JPEG, used readonly.
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as file, must be a .png or .bmp
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// A text message that will be hidden
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,

    #[command(flatten)]
    pub key: KeyArgs,
}

impl HideArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let key = self.key.into_location_key()?;

        geostego_core::commands::hide(&self.media, &self.write_to_file, &self.message, key, options)
    }
}
