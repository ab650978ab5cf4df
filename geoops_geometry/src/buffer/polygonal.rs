use crate::kernel;
use geo::{LineString, MultiPolygon, Point};

/// Angle in radians between two consecutive points of a round join or cap.
fn arc_step(points_per_circle: u32) -> f64 {
	std::f64::consts::TAU / f64::from(points_per_circle.max(1))
}

/// Buffers an areal geometry by `distance` with round joins approximated by
/// `points_per_circle` points per full circle.
///
/// A zero distance returns the input unchanged without calling the kernel.
#[must_use]
pub fn buffer_polygonal(multi: &MultiPolygon<f64>, distance: f64, points_per_circle: u32) -> MultiPolygon<f64> {
	if distance == 0.0 {
		return multi.clone();
	}
	kernel::buffer(multi, distance, arc_step(points_per_circle))
}

/// Buffers a single path with round joins and caps. A path that collapses to one
/// point becomes a disc.
pub(crate) fn buffer_path(path: &LineString<f64>, distance: f64, points_per_circle: u32) -> MultiPolygon<f64> {
	let step = arc_step(points_per_circle);
	match point_of(path) {
		Some(point) => kernel::buffer(&point, distance, step),
		None => kernel::buffer(path, distance, step),
	}
}

/// The single point a path consists of, if all of its coordinates are equal.
pub(crate) fn point_of(path: &LineString<f64>) -> Option<Point<f64>> {
	let first = path.0.first()?;
	path.0.iter().all(|c| c == first).then(|| Point::from(*first))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Measure;
	use approx::assert_abs_diff_eq;
	use geo::{Coord, Rect};

	fn unit_square() -> MultiPolygon<f64> {
		MultiPolygon::new(vec![Rect::new(Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 }).to_polygon()])
	}

	#[test]
	fn arc_step_divides_the_full_circle() {
		assert_abs_diff_eq!(arc_step(32), std::f64::consts::PI / 16.0, epsilon = 1e-12);
		assert_abs_diff_eq!(arc_step(0), std::f64::consts::TAU, epsilon = 1e-12);
	}

	#[test]
	fn zero_distance_is_identity() {
		assert_eq!(buffer_polygonal(&unit_square(), 0.0, 32), unit_square());
	}

	#[test]
	fn grows_by_distance() {
		let grown = buffer_polygonal(&unit_square(), 1.0, 32);
		// square + four 1x1 strips + four rounded quarter circles of radius 1
		assert_abs_diff_eq!(grown.area(), 5.0 + std::f64::consts::PI, epsilon = 0.05);
	}

	#[test]
	fn shrinks_by_negative_distance() {
		let big = MultiPolygon::new(vec![Rect::new(Coord { x: 0.0, y: 0.0 }, Coord { x: 4.0, y: 4.0 }).to_polygon()]);
		let shrunk = buffer_polygonal(&big, -1.0, 32);
		assert_abs_diff_eq!(shrunk.area(), 4.0, epsilon = 1e-6);
	}

	#[test]
	fn point_paths_become_discs() {
		let path = LineString::from(vec![(3.0, 3.0), (3.0, 3.0)]);
		assert_eq!(point_of(&path), Some(Point::new(3.0, 3.0)));
		let disc = buffer_path(&path, 1.0, 32);
		assert_abs_diff_eq!(disc.area(), std::f64::consts::PI, epsilon = 0.05);
	}

	#[test]
	fn straight_path() {
		let path = LineString::from(vec![(0.0, 0.0), (4.0, 0.0)]);
		assert_eq!(point_of(&path), None);
		let stroke = buffer_path(&path, 1.0, 32);
		assert_abs_diff_eq!(stroke.area(), 8.0 + std::f64::consts::PI, epsilon = 0.05);
	}
}
