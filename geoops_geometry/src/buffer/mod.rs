//! Offsetting shapes outward (positive distance) or inward (negative distance).
//!
//! Areal shapes go straight to the kernel. Linear shapes are first decomposed into
//! trails that cover every segment once, because the kernel's buffer of overlapping
//! or doubled-back paths is unreliable. The trails are then offset by an
//! [`OffsetEngine`] in one pass or, without an engine, path by path with the partial
//! results joined by [`union_with`](crate::union_with).

mod engine;
mod polygonal;

pub use engine::*;
pub use polygonal::buffer_polygonal;

use crate::{Shape, union_with, wkt};
use anyhow::{Context, Result, bail};
use geo::{MultiLineString, MultiPolygon};
use geoops_core::{GeometryConfig, OffsetBackend};
use geoops_paths::{DecomposeOptions, make_eulerian_paths};
use log::{debug, trace};
use polygonal::buffer_path;

/// Buffers `shape` by `distance` with the default configuration.
pub fn buffer(shape: &Shape, distance: f64) -> Result<MultiPolygon<f64>> {
	BufferPipeline::new(GeometryConfig::default())?.buffer(shape, distance)
}

/// Buffers shapes according to a [`GeometryConfig`].
#[derive(Debug)]
pub struct BufferPipeline {
	config: GeometryConfig,
	engine: Option<Box<dyn OffsetEngine>>,
}

impl BufferPipeline {
	/// Creates a pipeline with the offset backend chosen in `config`.
	pub fn new(config: GeometryConfig) -> Result<Self> {
		config.verify()?;
		let engine = match config.offset_backend {
			OffsetBackend::Exact => Some(exact_engine()?),
			OffsetBackend::Piecewise => None,
		};
		debug!(
			"buffer pipeline uses the {} backend",
			engine.as_ref().map_or("piecewise", |e| e.name())
		);
		Ok(Self { config, engine })
	}

	/// Creates a pipeline that offsets linear shapes with `engine`.
	#[must_use]
	pub fn with_engine(config: GeometryConfig, engine: Box<dyn OffsetEngine>) -> Self {
		Self {
			config,
			engine: Some(engine),
		}
	}

	/// Offsets every boundary of `shape` by `distance`.
	///
	/// A zero distance returns the areal content of `shape` unchanged, so linear
	/// shapes give an empty result.
	pub fn buffer(&self, shape: &Shape, distance: f64) -> Result<MultiPolygon<f64>> {
		if distance == 0.0 {
			trace!("buffer: zero distance, returning {} as is", shape.kind());
			return Ok(shape.to_multi_polygon());
		}
		if shape.is_empty() {
			trace!("buffer: {} is empty", shape.kind());
			return Ok(MultiPolygon::new(vec![]));
		}
		match shape {
			Shape::LineString(path) => self.buffer_paths(&MultiLineString::new(vec![path.clone()]), distance),
			Shape::MultiLineString(paths) => self.buffer_paths(paths, distance),
			_ => Ok(buffer_polygonal(
				&shape.to_multi_polygon(),
				distance,
				self.config.points_per_circle,
			)),
		}
	}

	fn buffer_paths(&self, paths: &MultiLineString<f64>, distance: f64) -> Result<MultiPolygon<f64>> {
		let paths = make_eulerian_paths(
			paths,
			DecomposeOptions {
				prefer_closed: true,
				minimize_edges: true,
			},
		);
		if paths.0.is_empty() {
			return Ok(MultiPolygon::new(vec![]));
		}

		match &self.engine {
			Some(engine) => offset_with_engine(engine.as_ref(), &paths, distance, self.config.quadrant_segments()),
			None => Ok(self.offset_piecewise(&paths, distance)),
		}
	}

	fn offset_piecewise(&self, paths: &MultiLineString<f64>, distance: f64) -> MultiPolygon<f64> {
		trace!("buffer: offsetting {} paths one by one", paths.0.len());
		let mut result = Shape::empty_area();
		for path in paths {
			let piece = Shape::MultiPolygon(buffer_path(path, distance, self.config.points_per_circle));
			result = union_with(&result, &piece, &self.config);
		}
		result.into_multi_polygon()
	}
}

fn offset_with_engine(
	engine: &dyn OffsetEngine,
	paths: &MultiLineString<f64>,
	distance: f64,
	quadrant_segments: u32,
) -> Result<MultiPolygon<f64>> {
	trace!("buffer: offsetting {} paths with the {} engine", paths.0.len(), engine.name());
	let boundary = wkt::write_multi_line_string(paths);
	let result = engine
		.offset(&boundary, distance, quadrant_segments)
		.with_context(|| format!("offset engine '{}' failed", engine.name()))?;

	match wkt::parse_wkt(&result).with_context(|| format!("reading the result of offset engine '{}'", engine.name()))? {
		Shape::MultiPolygon(multi) => Ok(multi),
		Shape::Polygon(polygon) if polygon.exterior().0.is_empty() => Ok(MultiPolygon::new(vec![])),
		Shape::Polygon(polygon) => Ok(MultiPolygon::new(vec![polygon])),
		other => bail!("offset engine '{}' returned a {}", engine.name(), other.kind()),
	}
}

#[cfg(feature = "exact-offset")]
fn exact_engine() -> Result<Box<dyn OffsetEngine>> {
	Ok(Box::new(ExactOffsetEngine))
}

#[cfg(not(feature = "exact-offset"))]
fn exact_engine() -> Result<Box<dyn OffsetEngine>> {
	bail!("the exact offset backend requires the 'exact-offset' feature")
}
