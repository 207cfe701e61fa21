//! Pixel Value Differencing codec.
//!
//! Leaves first:
//! - [`sequencer`] derives the ordered pixel pairs from a key
//! - [`range_table`] classifies a pair difference into a capacity tier
//! - [`pair_codec`] hides and reads bits in a single pair
//! - [`frame`] spreads the self describing frame over the whole sequence

pub mod bits;
pub mod frame;
pub mod pair_codec;
pub mod range_table;
pub mod sequencer;

pub use bits::BitString;
pub use frame::{build_frame, estimate_capacity_bits, estimated_chars, header_bits, payload_bits};
pub use pair_codec::{embed, extract};
pub use range_table::{classify, Tier, RANGE_TABLE};
pub use sequencer::{generate, PixelCoordinate, PixelPair, PixelPairSequence};
pub(crate) use frame::{embed_frame, extract_frame};
