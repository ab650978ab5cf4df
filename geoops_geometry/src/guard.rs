//! Degenerate-input predicates consulted before any kernel call.

use crate::{Shape, kernel};
use geo::{LineString, MultiLineString, MultiPolygon, Polygon, Rect};

/// Size queries the guards are based on.
///
/// Areas are unsigned, so ring orientation does not matter. `length` measures the
/// linear content of a geometry and is zero for areal kinds.
pub trait Measure {
	fn area(&self) -> f64;

	fn length(&self) -> f64 {
		0.0
	}
}

/// True if `geometry` has no positive area: empty, collapsed, linear, or NaN.
pub fn is_degenerate_area<G: Measure + ?Sized>(geometry: &G) -> bool {
	let area = geometry.area();
	area.is_nan() || area <= 0.0
}

/// True if `geometry` has no positive length: empty, point-only, or areal.
pub fn is_degenerate_length<G: Measure + ?Sized>(geometry: &G) -> bool {
	let length = geometry.length();
	length.is_nan() || length <= 0.0
}

impl Measure for Polygon<f64> {
	fn area(&self) -> f64 {
		kernel::area(self)
	}
}

impl Measure for MultiPolygon<f64> {
	fn area(&self) -> f64 {
		kernel::multi_area(self)
	}
}

impl Measure for Rect<f64> {
	fn area(&self) -> f64 {
		self.width() * self.height()
	}
}

impl Measure for LineString<f64> {
	fn area(&self) -> f64 {
		0.0
	}

	fn length(&self) -> f64 {
		self.lines().map(|line| line.dx().hypot(line.dy())).sum()
	}
}

impl Measure for MultiLineString<f64> {
	fn area(&self) -> f64 {
		0.0
	}

	fn length(&self) -> f64 {
		self.0.iter().map(Measure::length).sum()
	}
}

impl Measure for Shape {
	fn area(&self) -> f64 {
		match self {
			Shape::Polygon(g) => g.area(),
			Shape::MultiPolygon(g) => g.area(),
			Shape::Ring(g) => Polygon::new(g.clone(), vec![]).area(),
			Shape::Box(g) => g.area(),
			Shape::LineString(_) | Shape::MultiLineString(_) => 0.0,
		}
	}

	fn length(&self) -> f64 {
		match self {
			Shape::LineString(g) => g.length(),
			Shape::MultiLineString(g) => g.length(),
			_ => 0.0,
		}
	}
}
