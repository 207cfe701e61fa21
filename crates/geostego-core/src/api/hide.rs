use std::path::{Path, PathBuf};

use log::debug;

use crate::media::{OutputFormat, Persist};
use crate::progress::NoProgress;
use crate::{CodecOptions, GeoStegoError, Media, PvdCodec};

use super::LocationKey;

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    key: LocationKey,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// Where the image carrying the message is written to, must be a `.png` or `.bmp`
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
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

    pub fn execute(self) -> Result<(), GeoStegoError> {
        let Some(message) = self.message else {
            return Err(GeoStegoError::MissingParameter("message"));
        };
        let Some(image) = self.image else {
            return Err(GeoStegoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(GeoStegoError::TargetNotSet);
        };
        let key = self.key.resolve()?;
        // refuse lossy targets before spending time on the embedding
        OutputFormat::from_path(&output)?;

        let codec = PvdCodec::with_options(self.options);
        let mut media = Media::from_file(&image)?;
        media
            .hide_message(&message, &key, &codec, &mut NoProgress)?
            .save_as(&output)?;
        debug!("message hidden in {output:?}");

        Ok(())
    }
}
