//! Location keys derived from geographic coordinates.
//!
//! Coordinates are snapped to a grid of a thousandth of a degree, roughly
//! 100 m cells, so everybody standing in the same cell derives the same key.

use log::debug;

use crate::{GeoStegoError, Result};

/// characters of a derived key
pub const KEY_LENGTH: usize = 16;

const KEY_ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const CELLS_PER_DEGREE: f64 = 1000.0;

/// Derives the 16 character location key of the grid cell containing `(lat, lon)`.
///
/// ## Example of usage
/// ```rust
/// use geostego_core::derive_key_from_coordinates;
///
/// let key = derive_key_from_coordinates(52.5200, 13.4050).unwrap();
/// assert_eq!(key.len(), 16);
/// assert_eq!(key, derive_key_from_coordinates(52.52004, 13.40501).unwrap());
/// ```
pub fn derive_key_from_coordinates(lat: f64, lon: f64) -> Result<String> {
    if !lat.is_finite() || !lon.is_finite() || lat.abs() > 90.0 || lon.abs() > 180.0 {
        return Err(GeoStegoError::InvalidCoordinates { lat, lon });
    }
    let cell = format!("{}:{}", to_cell(lat), to_cell(lon));
    debug!("deriving key for grid cell {cell}");

    let mut state = cell
        .bytes()
        .fold(0u32, |hash, b| hash.wrapping_mul(31).wrapping_add(u32::from(b)));

    Ok((0..KEY_LENGTH)
        .map(|_| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            char::from(KEY_ALPHABET[(state >> 16) as usize % KEY_ALPHABET.len()])
        })
        .collect())
}

/// integer thousandths, `-0.0004` and `0.0004` both land in cell `0`
fn to_cell(degrees: f64) -> i64 {
    (degrees * CELLS_PER_DEGREE).round() as i64
}
