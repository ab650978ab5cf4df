use super::Shape;
use geo::{LineString, MultiLineString, MultiPolygon, Polygon, Rect};

macro_rules! impl_from_geo {
	($($geo:ty => $variant:ident),*) => {$(
		impl From<$geo> for Shape {
			fn from(value: $geo) -> Self {
				Shape::$variant(value)
			}
		}
	)*};
}

impl_from_geo!(
	Polygon<f64> => Polygon,
	MultiPolygon<f64> => MultiPolygon,
	LineString<f64> => LineString,
	MultiLineString<f64> => MultiLineString,
	Rect<f64> => Box
);

impl Shape {
	/// Wraps a closed linestring as a ring. An open linestring is closed by the
	/// kernel when the ring is converted to a polygon.
	#[must_use]
	pub fn ring(boundary: LineString<f64>) -> Self {
		Shape::Ring(boundary)
	}
}

impl From<Shape> for MultiPolygon<f64> {
	fn from(value: Shape) -> Self {
		value.into_multi_polygon()
	}
}
