use crate::Shape;
use geo::{Coord, LineString, MultiLineString, MultiPolygon, Polygon};
use std::fmt::Write;

/// Renders `shape` as well-known text.
#[must_use]
pub fn write_wkt(shape: &Shape) -> String {
	match shape {
		Shape::Polygon(g) => write_polygon(g),
		Shape::MultiPolygon(g) => write_multi_polygon(g),
		Shape::LineString(g) => write_line_string(g),
		Shape::MultiLineString(g) => write_multi_line_string(g),
		Shape::Ring(g) => write_polygon(&Polygon::new(g.clone(), vec![])),
		Shape::Box(g) => write_polygon(&g.to_polygon()),
	}
}

#[must_use]
pub fn write_line_string(line: &LineString<f64>) -> String {
	if line.0.is_empty() {
		return String::from("LINESTRING EMPTY");
	}
	let mut s = String::from("LINESTRING");
	push_coords(&mut s, &line.0);
	s
}

#[must_use]
pub fn write_multi_line_string(lines: &MultiLineString<f64>) -> String {
	if lines.0.is_empty() {
		return String::from("MULTILINESTRING EMPTY");
	}
	let mut s = String::from("MULTILINESTRING(");
	push_joined(&mut s, &lines.0, |s, line| push_coords(s, &line.0));
	s.push(')');
	s
}

#[must_use]
pub fn write_polygon(polygon: &Polygon<f64>) -> String {
	if polygon.exterior().0.is_empty() {
		return String::from("POLYGON EMPTY");
	}
	let mut s = String::from("POLYGON");
	push_rings(&mut s, polygon);
	s
}

#[must_use]
pub fn write_multi_polygon(multi: &MultiPolygon<f64>) -> String {
	if multi.0.is_empty() {
		return String::from("MULTIPOLYGON EMPTY");
	}
	let mut s = String::from("MULTIPOLYGON(");
	push_joined(&mut s, &multi.0, push_rings);
	s.push(')');
	s
}

fn push_rings(s: &mut String, polygon: &Polygon<f64>) {
	s.push('(');
	push_coords(s, &polygon.exterior().0);
	for interior in polygon.interiors() {
		s.push(',');
		push_coords(s, &interior.0);
	}
	s.push(')');
}

fn push_coords(s: &mut String, coords: &[Coord<f64>]) {
	s.push('(');
	push_joined(s, coords, |s, c| {
		let _ = write!(s, "{} {}", c.x, c.y);
	});
	s.push(')');
}

fn push_joined<T>(s: &mut String, items: &[T], mut push: impl FnMut(&mut String, &T)) {
	for (i, item) in items.iter().enumerate() {
		if i > 0 {
			s.push(',');
		}
		push(s, item);
	}
}
