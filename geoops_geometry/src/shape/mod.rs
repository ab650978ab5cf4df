//! The closed set of geometry kinds the set operations dispatch over.

mod convert;
mod kind;

pub use kind::*;

use crate::kernel;
use geo::{LineString, MultiLineString, MultiPolygon, Polygon, Rect};

/// A geometry operand or result.
///
/// Operations take shapes by reference and always return a fresh value, normalised
/// to a multi kind: [`Shape::MultiPolygon`] for areal results and
/// [`Shape::MultiLineString`] for linear ones.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
	Polygon(Polygon<f64>),
	MultiPolygon(MultiPolygon<f64>),
	LineString(LineString<f64>),
	MultiLineString(MultiLineString<f64>),
	/// A closed linestring treated as the boundary of an area.
	Ring(LineString<f64>),
	/// An axis-aligned rectangle.
	Box(Rect<f64>),
}

impl Shape {
	#[must_use]
	pub fn kind(&self) -> ShapeKind {
		match self {
			Shape::Polygon(_) => ShapeKind::Polygon,
			Shape::MultiPolygon(_) => ShapeKind::MultiPolygon,
			Shape::LineString(_) => ShapeKind::LineString,
			Shape::MultiLineString(_) => ShapeKind::MultiLineString,
			Shape::Ring(_) => ShapeKind::Ring,
			Shape::Box(_) => ShapeKind::Box,
		}
	}

	#[must_use]
	pub fn is_linear(&self) -> bool {
		self.kind().is_linear()
	}

	#[must_use]
	pub fn is_areal(&self) -> bool {
		self.kind().is_areal()
	}

	/// An empty multi-polygon.
	#[must_use]
	pub fn empty_area() -> Self {
		Shape::MultiPolygon(MultiPolygon::new(vec![]))
	}

	/// An empty multi-linestring.
	#[must_use]
	pub fn empty_lines() -> Self {
		Shape::MultiLineString(MultiLineString::new(vec![]))
	}

	/// True if the shape holds no coordinates at all.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		match self {
			Shape::Polygon(g) => g.exterior().0.is_empty(),
			Shape::MultiPolygon(g) => g.0.iter().all(|p| p.exterior().0.is_empty()),
			Shape::LineString(g) | Shape::Ring(g) => g.0.is_empty(),
			Shape::MultiLineString(g) => g.0.iter().all(|l| l.0.is_empty()),
			Shape::Box(_) => false,
		}
	}

	/// Promotes single kinds to their multi counterpart; rings and boxes become
	/// multi-polygons.
	#[must_use]
	pub fn into_multi(self) -> Self {
		match self {
			Shape::MultiPolygon(_) | Shape::MultiLineString(_) => self,
			Shape::LineString(g) => Shape::MultiLineString(MultiLineString::new(vec![g])),
			Shape::Polygon(_) | Shape::Ring(_) | Shape::Box(_) => Shape::MultiPolygon(self.into_multi_polygon()),
		}
	}

	/// The areal content as a multi-polygon. Linear kinds have none and yield an
	/// empty multi-polygon.
	#[must_use]
	pub fn to_multi_polygon(&self) -> MultiPolygon<f64> {
		self.clone().into_multi_polygon()
	}

	#[must_use]
	pub fn into_multi_polygon(self) -> MultiPolygon<f64> {
		match self {
			Shape::Polygon(g) => MultiPolygon::new(vec![g]),
			Shape::MultiPolygon(g) => g,
			Shape::Ring(g) => MultiPolygon::new(vec![Polygon::new(g, vec![])]),
			Shape::Box(g) => MultiPolygon::new(vec![g.to_polygon()]),
			Shape::LineString(_) | Shape::MultiLineString(_) => MultiPolygon::new(vec![]),
		}
	}

	/// The linear content as a multi-linestring. Areal kinds have none and yield an
	/// empty multi-linestring.
	#[must_use]
	pub fn to_multi_line_string(&self) -> MultiLineString<f64> {
		match self {
			Shape::LineString(g) => MultiLineString::new(vec![g.clone()]),
			Shape::MultiLineString(g) => g.clone(),
			_ => MultiLineString::new(vec![]),
		}
	}

	/// Axis-aligned envelope, `None` for empty shapes.
	#[must_use]
	pub fn bounding_rect(&self) -> Option<Rect<f64>> {
		use geo::BoundingRect;
		match self {
			Shape::Box(g) => Some(*g),
			Shape::LineString(g) | Shape::Ring(g) => g.bounding_rect(),
			Shape::MultiLineString(g) => g.bounding_rect(),
			_ => kernel::envelope(&self.to_multi_polygon()),
		}
	}
}

impl std::fmt::Display for Shape {
	/// Well-known text.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&crate::wkt::write_wkt(self))
	}
}
