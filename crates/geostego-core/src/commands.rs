use std::path::{Path, PathBuf};

use crate::api::LocationKey;
use crate::codec::CapacityReport;
use crate::{derive_key_from_coordinates, CodecOptions, GeoStegoError, Media, PvdCodec};

pub fn hide(
    media: &Path,
    write_to_file: &Path,
    message: &str,
    key: LocationKey,
    options: CodecOptions,
) -> Result<(), GeoStegoError> {
    crate::api::hide::prepare()
        .with_options(options)
        .with_image(media)
        .with_output(write_to_file)
        .with_message(message)
        .with_key(key)
        .execute()
}

pub fn unveil(
    secret_media: &Path,
    output_file: Option<PathBuf>,
    key: LocationKey,
    options: CodecOptions,
) -> Result<String, GeoStegoError> {
    crate::api::unveil::prepare()
        .with_options(options)
        .from_secret_file(secret_media)
        .use_output_file(output_file)
        .with_key(key)
        .execute()
}

/// Estimates how many message characters fit into an image for a given key.
pub fn capacity(
    media: &Path,
    key: LocationKey,
    options: CodecOptions,
) -> Result<CapacityReport, GeoStegoError> {
    let media = Media::from_file(media)?;

    PvdCodec::with_options(options).estimate_capacity(media.image(), &key.resolve()?)
}

pub fn derive_key(lat: f64, lon: f64) -> Result<String, GeoStegoError> {
    derive_key_from_coordinates(lat, lon)
}
