mod buffer;

pub use buffer::{PairSink, PairSource, PixelBuffer, PixelView};
