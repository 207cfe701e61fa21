use crate::error::GeoStegoError;

pub type Result<T> = std::result::Result<T, GeoStegoError>;
