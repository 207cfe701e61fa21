//! Key driven selection of the pixel pairs that carry the frame.
//!
//! The image is split into a grid of square cells which are visited in
//! row-major order. Each cell contributes one horizontal pixel pair at a
//! jittered position inside the cell. The jitter comes from a linear
//! congruential generator seeded by the key, so encoder and decoder derive
//! the very same sequence from `(key, width, height)` alone.
//!
//! A pair always stays inside its own cell, hence no two pairs of a
//! sequence share a pixel.

use log::debug;

use crate::{GeoStegoError, Result};

/// upper bound of pairs in a sequence, regardless of the image size
pub const MAX_PAIRS: usize = 10_000;

const LCG_MULTIPLIER: u64 = 9301;
const LCG_INCREMENT: u64 = 49297;
const LCG_MODULUS: u64 = 233_280;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct PixelCoordinate {
    pub x: u32,
    pub y: u32,
}

/// Two horizontally adjacent pixels, `second` is always right of `first`
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct PixelPair {
    pub first: PixelCoordinate,
    pub second: PixelCoordinate,
}

impl PixelPair {
    pub fn anchored_at(x: u32, y: u32) -> Self {
        Self {
            first: PixelCoordinate { x, y },
            second: PixelCoordinate { x: x + 1, y },
        }
    }
}

pub type PixelPairSequence = Vec<PixelPair>;

/// Keyed PRNG, constructed fresh for every sequence
#[derive(Debug, Clone)]
pub struct KeyedRng {
    seed: u64,
}

impl KeyedRng {
    /// seeds with the sum of the key's UTF-16 code units
    pub fn from_key(key: &str) -> Self {
        let seed = key.encode_utf16().map(u64::from).sum::<u64>();
        Self {
            seed: seed % LCG_MODULUS,
        }
    }

    /// next value in `[0, 1)`
    pub fn next_unit(&mut self) -> f64 {
        self.seed = (self.seed * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        self.seed as f64 / LCG_MODULUS as f64
    }

    /// next value in `[0, bound)`, `bound` of zero or one always gives zero
    pub fn next_below(&mut self, bound: u32) -> u32 {
        let unit = self.next_unit();
        ((unit * f64::from(bound)) as u32).min(bound.saturating_sub(1))
    }
}

/// Derives the ordered pixel pair sequence for a key and image dimensions.
pub fn generate(key: &str, width: u32, height: u32) -> Result<PixelPairSequence> {
    if width < 2 || height < 1 {
        return Err(GeoStegoError::InvalidDimensions { width, height });
    }

    let pixel_count = u64::from(width) * u64::from(height);
    let max_pairs = ((pixel_count / 3) as usize).clamp(1, MAX_PAIRS);
    let grid_size = ((pixel_count as f64 / max_pairs as f64).sqrt().floor() as u32).max(2);

    let cell_span_x = grid_size.min(width);
    let columns = (width / grid_size).max(1);
    let rows = height.div_ceil(grid_size);

    debug!(
        "{width}x{height}: grid {grid_size}, {columns}x{rows} cells, up to {max_pairs} pairs"
    );

    let mut rng = KeyedRng::from_key(key);
    let mut pairs = Vec::with_capacity(max_pairs);
    'rows: for row in 0..rows {
        for column in 0..columns {
            if pairs.len() >= max_pairs {
                break 'rows;
            }
            let offset_x = rng.next_below(cell_span_x - 1);
            let offset_y = rng.next_below(grid_size);

            let x = (column * grid_size + offset_x).min(width - 2);
            let y = (row * grid_size + offset_y).min(height - 1);
            pairs.push(PixelPair::anchored_at(x, y));
        }
    }

    Ok(pairs)
}
