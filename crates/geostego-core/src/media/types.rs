use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;

pub use image::RgbaImage;
use image::{ImageError, ImageFormat};
use log::error;

use crate::codec::PvdCodec;
use crate::error::GeoStegoError;
use crate::progress::Progress;
use crate::result::Result;

use super::Persist;

/// Lossless raster formats the hidden bits survive in
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum OutputFormat {
    #[default]
    Png,
    Bmp,
}

impl OutputFormat {
    /// derives the format from the file extension, lossy formats are refused
    pub fn from_path(f: &Path) -> Result<Self> {
        let Some(ext) = f.extension().and_then(|e| e.to_str()) else {
            return Err(GeoStegoError::UnsupportedMedia);
        };
        match ext.to_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "bmp" => Ok(Self::Bmp),
            "jpg" | "jpeg" | "webp" | "gif" | "avif" => {
                Err(GeoStegoError::LossyOutputFormat(ext.to_string()))
            }
            _ => Err(GeoStegoError::UnsupportedMedia),
        }
    }

    fn image_format(&self) -> ImageFormat {
        match self {
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::Bmp => ImageFormat::Bmp,
        }
    }
}

/// a carrier image for steganography
#[derive(Debug, Clone)]
pub struct Media {
    image: RgbaImage,
}

impl Media {
    pub fn from_image(img: RgbaImage) -> Self {
        Self { image: img }
    }

    /// loads any image format the `image` crate can decode
    pub fn from_file(f: &Path) -> Result<Self> {
        let image = image::open(f).map_err(|e| match e {
            ImageError::IoError(source) => {
                error!("Error reading image {f:?}: {source}");
                GeoStegoError::ReadError { source }
            }
            e => {
                error!("Error decoding image {f:?}: {e}");
                GeoStegoError::UnsupportedOrCorruptImage
            }
        })?;

        Ok(Self::from_image(image.to_rgba8()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(GeoStegoError::MissingParameter("image"));
        }
        let image = image::load_from_memory(bytes).map_err(|e| {
            error!("Error decoding image buffer: {e}");
            GeoStegoError::UnsupportedOrCorruptImage
        })?;

        Ok(Self::from_image(image.to_rgba8()))
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Hides a text message, the media is only changed when hiding succeeds.
    pub fn hide_message(
        &mut self,
        message: &str,
        key: &str,
        codec: &PvdCodec,
        progress: &mut dyn Progress,
    ) -> Result<&mut Self> {
        self.image = codec.encode(&self.image, message, key, progress)?;

        Ok(self)
    }

    /// Unveils a text message, empty when there is none for this key.
    pub fn unveil_message(
        &self,
        key: &str,
        codec: &PvdCodec,
        progress: &mut dyn Progress,
    ) -> Result<String> {
        codec.decode(&self.image, key, progress)
    }

    pub fn save_to_writer<W: Write + Seek>(
        &self,
        mut writer: W,
        format: OutputFormat,
    ) -> Result<()> {
        self.image
            .write_to(&mut writer, format.image_format())
            .map_err(|e| {
                error!("Error saving image: {e}");
                GeoStegoError::ImageEncodingError
            })
    }

    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Cursor::new(Vec::new());
        self.save_to_writer(&mut buf, OutputFormat::Png)?;

        Ok(buf.into_inner())
    }
}

impl Persist for Media {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let format = OutputFormat::from_path(file)?;
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            GeoStegoError::WriteError { source: e }
        })?;
        let mut writer = BufWriter::new(f);
        self.save_to_writer(&mut writer, format)?;

        writer
            .flush()
            .map_err(|source| GeoStegoError::WriteError { source })
    }
}
