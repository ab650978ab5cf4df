//! Every call into the `geo` kernel goes through here.

use geo::{Area, BooleanOps, BoundingRect, Buffer, MultiLineString, MultiPolygon, Polygon, Rect};
use geo::algorithm::buffer::{BufferStyle, LineCap, LineJoin};
use log::trace;

pub fn area(polygon: &Polygon<f64>) -> f64 {
	polygon.unsigned_area()
}

pub fn multi_area(multi: &MultiPolygon<f64>) -> f64 {
	multi.unsigned_area()
}

pub fn envelope(multi: &MultiPolygon<f64>) -> Option<Rect<f64>> {
	multi.bounding_rect()
}

pub fn union(lhs: &MultiPolygon<f64>, rhs: &MultiPolygon<f64>) -> MultiPolygon<f64> {
	trace!("kernel union of {} and {} polygons", lhs.0.len(), rhs.0.len());
	lhs.union(rhs)
}

pub fn intersection(lhs: &MultiPolygon<f64>, rhs: &MultiPolygon<f64>) -> MultiPolygon<f64> {
	trace!("kernel intersection of {} and {} polygons", lhs.0.len(), rhs.0.len());
	lhs.intersection(rhs)
}

pub fn difference(lhs: &MultiPolygon<f64>, rhs: &MultiPolygon<f64>) -> MultiPolygon<f64> {
	trace!("kernel difference of {} and {} polygons", lhs.0.len(), rhs.0.len());
	lhs.difference(rhs)
}

pub fn xor(lhs: &MultiPolygon<f64>, rhs: &MultiPolygon<f64>) -> MultiPolygon<f64> {
	trace!("kernel xor of {} and {} polygons", lhs.0.len(), rhs.0.len());
	lhs.xor(rhs)
}

/// Clips `lines` against `region`, keeping the parts inside or, with `outside`, the
/// parts outside of it.
pub fn clip(region: &MultiPolygon<f64>, lines: &MultiLineString<f64>, outside: bool) -> MultiLineString<f64> {
	trace!("kernel clip of {} linestrings (outside: {outside})", lines.0.len());
	region.clip(lines, outside)
}

/// Symmetric buffer with straight sides and round joins and caps, `arc_step` being
/// the angle in radians between consecutive arc points.
pub fn buffer<G>(geometry: &G, distance: f64, arc_step: f64) -> MultiPolygon<f64>
where
	G: Buffer<Scalar = f64>,
{
	trace!("kernel buffer by {distance} (arc step {arc_step:.4} rad)");
	let style = BufferStyle::new(distance)
		.line_join(LineJoin::Round(arc_step))
		.line_cap(LineCap::Round(arc_step));
	geometry.buffer_with_style(style)
}
