use clap::{Args, Parser, Subcommand};
use dialoguer::Password;
use geostego_core::api::LocationKey;
use geostego_core::{CarrierChannel, CodecOptions, GeoStegoError};
use log::error;

use crate::commands::*;
use crate::CliResult;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Color channel that carries the hidden bits, must match when unveiling
    #[arg(
        long,
        global = true,
        value_name = "red|green|blue",
        default_value_t = CarrierChannel::Blue
    )]
    pub channel: CarrierChannel,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn codec_options(&self) -> CodecOptions {
        CodecOptions::default().with_carrier_channel(self.channel)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    Capacity(capacity::CapacityArgs),
    DeriveKey(derive_key::DeriveKeyArgs),
}

/// Either a key or the coordinates to derive it from, prompted for when both are missing
#[derive(Args, Debug)]
pub struct KeyArgs {
    /// Location key that selects the pixels carrying the message
    #[arg(short, long, value_name = "key", conflicts_with_all = ["lat", "lon"])]
    pub key: Option<String>,

    /// Latitude to derive the location key from
    #[arg(long, value_name = "degrees", requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude to derive the location key from
    #[arg(long, value_name = "degrees", requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,
}

impl KeyArgs {
    pub fn into_location_key(self) -> CliResult<LocationKey> {
        match (self.key, self.lat, self.lon) {
            (Some(key), _, _) => Ok(key.into()),
            (None, Some(lat), Some(lon)) => Ok(LocationKey::at(lat, lon)),
            _ => ask_for_key(),
        }
    }
}

pub fn ask_for_key() -> CliResult<LocationKey> {
    Password::new()
        .with_prompt("Location key")
        .interact()
        .map(LocationKey::from)
        .map_err(|e| {
            error!("Reading the key failed: {e}");
            GeoStegoError::MissingParameter("key")
        })
}
