//! Reading and writing the well-known text subset used to talk to offset engines.
//!
//! Supported are `LINESTRING`, `POLYGON`, `MULTILINESTRING` and `MULTIPOLYGON`, each
//! optionally `EMPTY`. Rings and boxes are written as polygons.

mod read;
mod write;

pub use read::*;
pub use write::*;
