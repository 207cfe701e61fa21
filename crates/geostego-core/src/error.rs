use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeoStegoError {
    /// Represents an empty input, for example an empty message or key
    #[error("API Error: Missing {0}")]
    MissingParameter(&'static str),

    /// Represents a carrier image that is below the minimum size for hiding a message
    #[error("The image with the dimensions {width}x{height} is too small, at least 100x100 is required")]
    ImageTooSmall { width: u32, height: u32 },

    /// Represents dimensions that cannot hold a single horizontal pixel pair
    #[error("Invalid image dimensions {width}x{height} for pixel pair sequencing")]
    InvalidDimensions { width: u32, height: u32 },

    /// Represents a message that does not fit into the carrier image
    #[error("Capacity Error: The message does not fit into the image, about {estimated_chars} characters would fit")]
    CapacityExceeded { estimated_chars: usize },

    /// Represents a frame that ran out of pixel pairs while embedding
    #[error("Capacity Error: {unembedded_bits} bits of the frame could not be embedded")]
    PartialEmbed { unembedded_bits: usize },

    /// Represents a message with characters outside of printable ASCII, such as `\n`
    #[error("Only printable ASCII text messages can be hidden")]
    NonAsciiMessage,

    /// Represents a bit chunk that does not match the capacity of the pixel pair tier
    #[error("Bit chunk of width {actual} does not match the tier capacity of {expected}")]
    BitWidthMismatch { expected: usize, actual: usize },

    /// Represents an input buffer that could not be decoded as image
    #[error("Image media is unsupported or corrupt")]
    UnsupportedOrCorruptImage,

    /// Represents an output format that would destroy the hidden bits by lossy compression
    #[error("Output format '{0}' is lossy, use PNG or BMP instead")]
    LossyOutputFormat(String),

    /// Represents an unsupported or missing output format
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents coordinates that cannot be turned into a location key
    #[error("Invalid coordinates lat={lat}, lon={lon}")]
    InvalidCoordinates { lat: f64, lon: f64 },

    /// Represents a cancellation request observed between two pixel pairs
    #[error("Operation cancelled")]
    Cancelled,

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}
