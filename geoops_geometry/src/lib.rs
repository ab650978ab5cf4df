//! Robust polygon algebra on top of the `geo` kernel.
//!
//! The crate wraps the kernel's boolean operations and buffering with the guards
//! real-world input needs: degenerate operands short-circuit to identity or empty
//! results, unions of shapes that merely touch are inflated before they reach the
//! kernel, and multi-linestrings are decomposed into trails before they are offset.

pub mod buffer;
mod guard;
mod kernel;
mod ops;
mod shape;
pub mod wkt;

pub use buffer::{BufferPipeline, OffsetEngine, buffer, buffer_polygonal};
pub use guard::*;
pub use ops::*;
pub use shape::*;

#[cfg(feature = "exact-offset")]
pub use buffer::ExactOffsetEngine;

pub use geoops_core::{GeometryConfig, OffsetBackend};
