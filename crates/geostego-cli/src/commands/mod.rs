pub mod capacity;
pub mod derive_key;
pub mod hide;
pub mod unveil;
