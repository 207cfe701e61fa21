use std::fmt::{self, Debug, Formatter};

use crate::geo::derive_key_from_coordinates;
use crate::{GeoStegoError, Result};

/// The secret that selects the pixel pairs, either given as is or derived from a location
#[derive(Default, Clone, PartialEq)]
pub enum LocationKey {
    #[default]
    Unset,
    Key(String),
    Coordinates {
        lat: f64,
        lon: f64,
    },
}

impl LocationKey {
    pub fn at(lat: f64, lon: f64) -> Self {
        Self::Coordinates { lat, lon }
    }

    /// the key string the codec is seeded with
    pub fn resolve(&self) -> Result<String> {
        match self {
            LocationKey::Unset => Err(GeoStegoError::MissingParameter("key")),
            LocationKey::Key(key) => Ok(key.clone()),
            LocationKey::Coordinates { lat, lon } => derive_key_from_coordinates(*lat, *lon),
        }
    }
}

impl Debug for LocationKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LocationKey::Unset => write!(f, "LocationKey(None)"),
            LocationKey::Key(key) => write!(f, "LocationKey({})", "*".repeat(key.len())),
            LocationKey::Coordinates { .. } => write!(f, "LocationKey(<coordinates>)"),
        }
    }
}

impl From<Option<String>> for LocationKey {
    fn from(key: Option<String>) -> Self {
        key.map_or(LocationKey::Unset, LocationKey::Key)
    }
}

impl From<String> for LocationKey {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<&str> for LocationKey {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}
