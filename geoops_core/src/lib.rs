//! Foundational types shared by the geoops crates: point algebra, a lexicographic
//! point key for ordered collections, and the geometry configuration.

pub mod config;
pub mod point;

pub use config::*;
pub use point::*;
