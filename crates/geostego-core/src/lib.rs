//! # GeoStego Core API
//!
//! Hides a text message inside an image by Pixel Value Differencing (PVD).
//! A location key decides which pixel pairs carry the message, so only
//! someone with the same key finds it again.
//!
//! - [`encode`] and [`decode`] work on decoded [`RgbaImage`]s
//! - [`encode_bytes`] and [`decode_bytes`] work on encoded image buffers
//! - [`api::hide`] and [`api::unveil`] are builders working on image files
//! - [`derive_key_from_coordinates`] turns a location into a key
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image
//!
//! ```rust
//! use geostego_core::{decode, encode, RgbaImage};
//!
//! let carrier = RgbaImage::from_pixel(200, 200, image::Rgba([128, 128, 128, 255]));
//!
//! let secret = encode(&carrier, "hi", "OFFICE42", |_percent| {})
//!     .expect("Failed to hide message in image");
//!
//! assert_eq!(decode(&secret, "OFFICE42", |_| {}).unwrap(), "hi");
//! assert_eq!(decode(&secret, "OFFICE43", |_| {}).unwrap(), "");
//! ```
//!
//! ## Unveil a message hidden at a location
//!
//! ```rust
//! use tempfile::tempdir;
//! use geostego_core::media::Persist;
//! use geostego_core::{Media, RgbaImage};
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.png");
//! let secret = temp_dir.path().join("secret.png");
//! Media::from_image(RgbaImage::from_pixel(300, 200, image::Rgba([90, 140, 60, 255])))
//!     .save_as(&carrier)
//!     .expect("Failed to write carrier image");
//!
//! geostego_core::api::hide::prepare()
//!     .with_message("Meet me at the fountain")
//!     .with_image(&carrier)
//!     .at_location(48.8584, 2.2945)
//!     .with_output(&secret)
//!     .execute()
//!     .expect("Failed to hide message in image");
//!
//! let message = geostego_core::api::unveil::prepare()
//!     .from_secret_file(&secret)
//!     .at_location(48.8584, 2.2945)
//!     .execute()
//!     .expect("Failed to unveil message from image");
//!
//! assert_eq!(message, "Meet me at the fountain");
//! ```

#![warn(
    // clippy::unwrap_used,
    // clippy::expect_used,
    // clippy::cast_lossless,
    // clippy::match_bool,
    clippy::redundant_else,
)]

pub mod api;
pub mod codec;
pub mod commands;
pub mod error;
pub mod geo;
pub mod media;
pub mod progress;
pub mod pvd;
pub mod result;

pub use crate::codec::{
    decode, decode_bytes, encode, encode_bytes, estimate_capacity, CapacityReport, PvdCodec,
};
pub use crate::error::GeoStegoError;
pub use crate::geo::derive_key_from_coordinates;
pub use crate::media::{Algorithm, CarrierChannel, CodecOptions, Media, OutputFormat, RgbaImage};
pub use crate::progress::{CancelFlag, Cancellable, NoProgress, Progress};
pub use crate::result::Result;
