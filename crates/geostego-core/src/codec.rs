//! Hides text messages in and unveils them from RGBA images.
//!
//! [`PvdCodec`] ties the pieces of the [`pvd`](crate::pvd) module together:
//! the key selects the pixel pair sequence, the frame is spread over it and
//! on decode the same sequence is walked again.

use image::RgbaImage;
use log::{debug, error};

use crate::media::image::{PixelBuffer, PixelView};
use crate::media::{Algorithm, CodecOptions, Media};
use crate::progress::{Progress, ProgressTracker};
use crate::pvd::{
    build_frame, embed_frame, estimate_capacity_bits, estimated_chars, extract_frame, generate,
    header_bits, payload_bits,
};
use crate::{GeoStegoError, Result};

/// images need to be at least this wide to carry a message
pub const MIN_IMAGE_WIDTH: u32 = 100;
/// images need to be at least this high to carry a message
pub const MIN_IMAGE_HEIGHT: u32 = 100;

/// Estimated capacity of an image for a given key
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct CapacityReport {
    /// bits the whole pixel pair sequence is estimated to carry
    pub capacity_bits: usize,
    /// longest message that passes the pre-flight check
    pub max_message_chars: usize,
}

#[derive(Debug, Clone, Default)]
pub struct PvdCodec {
    options: CodecOptions,
}

impl PvdCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CodecOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Returns a copy of `image` with the message hidden in it.
    ///
    /// A failing encode leaves no trace, the input is never modified.
    /// Messages must be printable ASCII, decode would drop anything else.
    pub fn encode(
        &self,
        image: &RgbaImage,
        message: &str,
        key: &str,
        progress: &mut dyn Progress,
    ) -> Result<RgbaImage> {
        if image.width() == 0 || image.height() == 0 {
            return Err(GeoStegoError::MissingParameter("image"));
        }
        if message.is_empty() {
            return Err(GeoStegoError::MissingParameter("message"));
        }
        if key.is_empty() {
            return Err(GeoStegoError::MissingParameter("key"));
        }
        let (width, height) = image.dimensions();
        if width < MIN_IMAGE_WIDTH || height < MIN_IMAGE_HEIGHT {
            error!("Image of {width}x{height} is too small to carry a message");
            return Err(GeoStegoError::ImageTooSmall { width, height });
        }

        match self.options.algorithm {
            Algorithm::Pvd => {
                let frame = build_frame(&header_bits(), &payload_bits(message)?)?;
                let pairs = generate(key, width, height)?;

                let mut stego = image.clone();
                let mut tracker = ProgressTracker::new(progress, self.options.progress_interval);
                let mut buffer = PixelBuffer::new(&mut stego, self.options.carrier_channel);
                match embed_frame(&pairs, &mut buffer, &frame, &mut tracker) {
                    Ok(()) => {}
                    Err(GeoStegoError::PartialEmbed { unembedded_bits }) => {
                        let view = PixelView::new(image, self.options.carrier_channel);
                        let estimate = estimate_capacity_bits(&pairs, &view);
                        error!("Message did not fit, {unembedded_bits} bits were left over");
                        return Err(GeoStegoError::CapacityExceeded {
                            estimated_chars: estimated_chars(estimate),
                        });
                    }
                    Err(e) => return Err(e),
                }
                debug!("hid {} message chars in {} bits", message.len(), frame.len());

                Ok(stego)
            }
        }
    }

    /// Unveils the message hidden with `key`, an empty string when there is none.
    pub fn decode(
        &self,
        image: &RgbaImage,
        key: &str,
        progress: &mut dyn Progress,
    ) -> Result<String> {
        if image.width() == 0 || image.height() == 0 {
            return Err(GeoStegoError::MissingParameter("image"));
        }
        if key.is_empty() {
            return Err(GeoStegoError::MissingParameter("key"));
        }
        if image.width() < 2 {
            debug!("an image of width {} holds no pixel pairs", image.width());
            return Ok(String::new());
        }

        match self.options.algorithm {
            Algorithm::Pvd => {
                let pairs = generate(key, image.width(), image.height())?;
                let mut tracker = ProgressTracker::new(progress, self.options.progress_interval);
                let view = PixelView::new(image, self.options.carrier_channel);

                extract_frame(&pairs, &view, &mut tracker)
            }
        }
    }

    /// The same estimate `encode` checks a message against before touching any pixel.
    pub fn estimate_capacity(&self, image: &RgbaImage, key: &str) -> Result<CapacityReport> {
        if key.is_empty() {
            return Err(GeoStegoError::MissingParameter("key"));
        }
        let pairs = generate(key, image.width(), image.height())?;
        let capacity_bits =
            estimate_capacity_bits(&pairs, &PixelView::new(image, self.options.carrier_channel));

        Ok(CapacityReport {
            capacity_bits,
            max_message_chars: estimated_chars(capacity_bits),
        })
    }
}

/// Hides `message` with the default options.
pub fn encode(
    image: &RgbaImage,
    message: &str,
    key: &str,
    mut on_progress: impl FnMut(u8),
) -> Result<RgbaImage> {
    PvdCodec::new().encode(image, message, key, &mut on_progress)
}

/// Unveils a message with the default options.
pub fn decode(image: &RgbaImage, key: &str, mut on_progress: impl FnMut(u8)) -> Result<String> {
    PvdCodec::new().decode(image, key, &mut on_progress)
}

/// Like [`encode`] on an encoded image buffer of any supported format, the result is a PNG.
pub fn encode_bytes(
    bytes: &[u8],
    message: &str,
    key: &str,
    mut on_progress: impl FnMut(u8),
) -> Result<Vec<u8>> {
    let mut media = Media::from_bytes(bytes)?;
    media.hide_message(message, key, &PvdCodec::new(), &mut on_progress)?;

    media.to_png_bytes()
}

pub fn decode_bytes(bytes: &[u8], key: &str, mut on_progress: impl FnMut(u8)) -> Result<String> {
    Media::from_bytes(bytes)?.unveil_message(key, &PvdCodec::new(), &mut on_progress)
}

pub fn estimate_capacity(image: &RgbaImage, key: &str) -> Result<CapacityReport> {
    PvdCodec::new().estimate_capacity(image, key)
}
