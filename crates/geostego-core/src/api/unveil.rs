use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use log::{debug, error};

use crate::progress::NoProgress;
use crate::{CodecOptions, GeoStegoError, Media, PvdCodec};

use super::LocationKey;

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    output_file: Option<PathBuf>,
    key: LocationKey,
    options: CodecOptions,
}

impl UnveilApi {
    /// Use the given codec options
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the secret image that contains the message to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// The unveiled message is written to this file as well
    pub fn into_output_file(mut self, output_file: impl AsRef<Path>) -> Self {
        self.output_file = Some(output_file.as_ref().to_path_buf());
        self
    }

    /// If `None` is passed, the message is only returned
    pub fn use_output_file(mut self, output_file: Option<PathBuf>) -> Self {
        self.output_file = output_file;
        self
    }

    /// Set the location key, a plain string or [`LocationKey::at`] coordinates
    pub fn with_key<K: Into<LocationKey>>(mut self, key: K) -> Self {
        self.key = key.into();
        self
    }

    /// Derive the location key from coordinates
    pub fn at_location(mut self, lat: f64, lon: f64) -> Self {
        self.key = LocationKey::at(lat, lon);
        self
    }

    /// Execute the unveil process and blocks until it is finished.
    ///
    /// An empty message means the image carries nothing for this key.
    pub fn execute(self) -> Result<String, GeoStegoError> {
        let Some(secret_media) = self.secret_media else {
            return Err(GeoStegoError::CarrierNotSet);
        };
        let key = self.key.resolve()?;

        let codec = PvdCodec::with_options(self.options);
        let message =
            Media::from_file(&secret_media)?.unveil_message(&key, &codec, &mut NoProgress)?;
        debug!("unveiled {} chars from {secret_media:?}", message.len());

        if let Some(output_file) = self.output_file {
            let mut target_file = File::create(&output_file).map_err(|source| {
                error!("Error creating {output_file:?}: {source}");
                GeoStegoError::WriteError { source }
            })?;

            target_file
                .write_all(message.as_bytes())
                .map_err(|source| GeoStegoError::WriteError { source })?;
        }

        Ok(message)
    }
}
