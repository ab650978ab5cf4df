use geo::{Coord, CoordNum};
use std::cmp::Ordering;

/// Component-wise sum `a + b`.
#[must_use]
pub fn add<T: CoordNum>(a: Coord<T>, b: Coord<T>) -> Coord<T> {
	Coord {
		x: a.x + b.x,
		y: a.y + b.y,
	}
}

/// Component-wise difference `a - b`.
#[must_use]
pub fn subtract<T: CoordNum>(a: Coord<T>, b: Coord<T>) -> Coord<T> {
	Coord {
		x: a.x - b.x,
		y: a.y - b.y,
	}
}

/// Multiplies both components by `k`.
#[must_use]
pub fn scale<T: CoordNum>(a: Coord<T>, k: T) -> Coord<T> {
	Coord { x: a.x * k, y: a.y * k }
}

/// Divides both components by `k`.
///
/// Division by zero behaves like the underlying number type: floats yield
/// infinity or NaN, integers panic.
#[must_use]
pub fn divide<T: CoordNum>(a: Coord<T>, k: T) -> Coord<T> {
	Coord { x: a.x / k, y: a.y / k }
}

/// Lexicographic comparison, x first, then y.
///
/// Returns `None` if a component is not comparable (NaN).
#[must_use]
pub fn compare<T: CoordNum>(a: &Coord<T>, b: &Coord<T>) -> Option<Ordering> {
	match a.x.partial_cmp(&b.x)? {
		Ordering::Equal => a.y.partial_cmp(&b.y),
		ordering => Some(ordering),
	}
}

/// Strict lexicographic "less than".
#[must_use]
pub fn less_than<T: CoordNum>(a: &Coord<T>, b: &Coord<T>) -> bool {
	compare(a, b) == Some(Ordering::Less)
}

/// Numeric equality of both components.
#[must_use]
pub fn equals<T: CoordNum>(a: &Coord<T>, b: &Coord<T>) -> bool {
	a.x == b.x && a.y == b.y
}

/// Formats a coordinate as a WKT point, e.g. `POINT(1 2)`.
#[must_use]
pub fn format_point<T: CoordNum + std::fmt::Display>(c: &Coord<T>) -> String {
	format!("POINT({} {})", c.x, c.y)
}
