use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Codec configuration for hiding and unveiling
///
/// Encoder and decoder must use the same options, the carrier channel in
/// particular decides which values form a pixel pair difference.
#[derive(Debug, Clone)]
pub struct CodecOptions {
    /// The embedding algorithm, PVD is the only complete one
    pub algorithm: Algorithm,

    /// The color channel whose values carry the data
    pub carrier_channel: CarrierChannel,

    /// Number of pixel pairs between two progress reports.
    /// Values below 1 are treated as 1.
    pub progress_interval: usize,
}

/// pairs between progress reports unless configured otherwise
pub const DEFAULT_PROGRESS_INTERVAL: usize = 50;

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Pvd,
            carrier_channel: CarrierChannel::Blue,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl CodecOptions {
    pub fn with_carrier_channel(mut self, channel: CarrierChannel) -> Self {
        self.carrier_channel = channel;
        self
    }
}

/// Embedding algorithm
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum Algorithm {
    /// Pixel Value Differencing on horizontally adjacent pixel pairs
    #[default]
    Pvd,
}

/// Color channel of an RGBA pixel
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum CarrierChannel {
    Red,
    Green,
    #[default]
    Blue,
}

impl CarrierChannel {
    /// position of the channel inside an RGBA pixel
    pub fn index(&self) -> usize {
        match self {
            CarrierChannel::Red => 0,
            CarrierChannel::Green => 1,
            CarrierChannel::Blue => 2,
        }
    }
}

impl Display for CarrierChannel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            CarrierChannel::Red => "red",
            CarrierChannel::Green => "green",
            CarrierChannel::Blue => "blue",
        };
        write!(f, "{name}")
    }
}

impl FromStr for CarrierChannel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "red" | "r" => Ok(CarrierChannel::Red),
            "green" | "g" => Ok(CarrierChannel::Green),
            "blue" | "b" => Ok(CarrierChannel::Blue),
            other => Err(format!("unknown color channel '{other}'")),
        }
    }
}
