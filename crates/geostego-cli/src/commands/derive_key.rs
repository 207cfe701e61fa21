use clap::Args;

use crate::CliResult;

/// Prints the location key of the ~100 m grid cell around a coordinate
#[derive(Args, Debug)]
pub struct DeriveKeyArgs {
    /// Latitude in degrees
    #[arg(long, value_name = "degrees", required = true, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude in degrees
    #[arg(long, value_name = "degrees", required = true, allow_negative_numbers = true)]
    pub lon: f64,
}

impl DeriveKeyArgs {
    pub fn run(self) -> CliResult<()> {
        println!("{}", geostego_core::commands::derive_key(self.lat, self.lon)?);

        Ok(())
    }
}
