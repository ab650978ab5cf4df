use anyhow::Result;
use std::fmt::Debug;

/// An offset engine buffers a set of paths given as well-known text.
///
/// The input is a `LINESTRING` or `MULTILINESTRING`; the output must be a `POLYGON`
/// or `MULTIPOLYGON` (possibly `EMPTY`). `quadrant_segments` is the number of
/// segments used to approximate a quarter circle.
pub trait OffsetEngine: Debug + Send + Sync {
	fn name(&self) -> &str;

	fn offset(&self, boundary: &str, distance: f64, quadrant_segments: u32) -> Result<String>;
}

#[cfg(feature = "exact-offset")]
pub use exact::ExactOffsetEngine;

#[cfg(feature = "exact-offset")]
mod exact {
	use super::OffsetEngine;
	use crate::{
		Shape,
		buffer::polygonal::point_of,
		kernel, union,
		wkt::{parse_wkt, write_wkt},
	};
	use anyhow::{Result, bail};
	use geo::{MultiLineString, MultiPolygon};

	/// Offsets the whole path set in one kernel pass, so crossings and shared
	/// vertices are resolved by a single boolean union rather than pairwise.
	#[derive(Debug, Default, Clone, Copy)]
	pub struct ExactOffsetEngine;

	impl OffsetEngine for ExactOffsetEngine {
		fn name(&self) -> &str {
			"exact"
		}

		fn offset(&self, boundary: &str, distance: f64, quadrant_segments: u32) -> Result<String> {
			let paths = match parse_wkt(boundary)? {
				Shape::MultiLineString(paths) => paths,
				Shape::LineString(path) => MultiLineString::new(vec![path]),
				other => bail!("expected a LINESTRING or MULTILINESTRING, got {}", other.kind()),
			};

			let arc_step = std::f64::consts::FRAC_PI_2 / f64::from(quadrant_segments.max(1));
			let (points, lines): (Vec<_>, Vec<_>) = paths.into_iter().partition(|path| point_of(path).is_some());

			let mut result = Shape::MultiPolygon(kernel::buffer(&MultiLineString::new(lines), distance, arc_step));
			for point in points.iter().filter_map(point_of) {
				let disc = Shape::MultiPolygon(kernel::buffer(&point, distance, arc_step));
				result = union(&result, &disc);
			}

			Ok(write_wkt(&polygon_or_multi(result.into_multi_polygon())))
		}
	}

	/// Single polygons are reported as `POLYGON`, everything else as `MULTIPOLYGON`.
	fn polygon_or_multi(mut multi: MultiPolygon<f64>) -> Shape {
		if multi.0.len() == 1 {
			if let Some(polygon) = multi.0.pop() {
				return Shape::Polygon(polygon);
			}
		}
		Shape::MultiPolygon(multi)
	}

}
