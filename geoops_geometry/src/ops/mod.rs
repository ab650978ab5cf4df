//! Set operations over every pair of [`Shape`] kinds.
//!
//! Each operation consults the degenerate-input guards first and only calls into
//! the kernel when both operands can contribute. Results are always multi kinds.

mod operators;
mod union;

pub use union::*;

use crate::{Shape, is_degenerate_area, is_degenerate_length, kernel};
use log::trace;

/// `lhs` minus `rhs`.
///
/// A subtrahend without area removes nothing, so `lhs` is returned as is (promoted
/// to its multi kind). Linear minuends keep the parts of their lines outside `rhs`.
#[must_use]
pub fn difference(lhs: &Shape, rhs: &Shape) -> Shape {
	if is_degenerate_area(rhs) {
		trace!("difference: {} subtrahend has no area", rhs.kind());
		return lhs.clone().into_multi();
	}
	if lhs.is_linear() {
		Shape::MultiLineString(kernel::clip(&rhs.to_multi_polygon(), &lhs.to_multi_line_string(), true))
	} else {
		Shape::MultiPolygon(kernel::difference(&lhs.to_multi_polygon(), &rhs.to_multi_polygon()))
	}
}

/// The common part of `lhs` and `rhs`.
///
/// Two areal operands give a multi-polygon, empty if either has no area. A linear
/// operand (on either side) against an areal one gives the parts of the lines
/// inside the area, empty if the area has no area or the lines have no length.
/// Two linear operands have no area in common.
#[must_use]
pub fn intersection(lhs: &Shape, rhs: &Shape) -> Shape {
	match (lhs.is_linear(), rhs.is_linear()) {
		(false, false) => area_intersection(lhs, rhs),
		(true, false) => line_intersection(lhs, rhs),
		(false, true) => line_intersection(rhs, lhs),
		(true, true) => {
			trace!("intersection: both operands are linear");
			Shape::empty_lines()
		}
	}
}

fn area_intersection(lhs: &Shape, rhs: &Shape) -> Shape {
	if is_degenerate_area(rhs) || is_degenerate_area(lhs) {
		trace!("intersection: degenerate operand");
		return Shape::empty_area();
	}
	Shape::MultiPolygon(kernel::intersection(&lhs.to_multi_polygon(), &rhs.to_multi_polygon()))
}

fn line_intersection(lines: &Shape, area: &Shape) -> Shape {
	if is_degenerate_area(area) || is_degenerate_length(lines) {
		trace!("intersection: degenerate area or line operand");
		return Shape::empty_lines();
	}
	Shape::MultiLineString(kernel::clip(&area.to_multi_polygon(), &lines.to_multi_line_string(), false))
}

/// Everything covered by exactly one of `lhs` and `rhs`.
///
/// If one operand has no area the other one is returned.
#[must_use]
pub fn sym_difference(lhs: &Shape, rhs: &Shape) -> Shape {
	if is_degenerate_area(rhs) {
		trace!("sym_difference: {} rhs has no area", rhs.kind());
		return lhs.clone().into_multi();
	}
	if is_degenerate_area(lhs) {
		trace!("sym_difference: {} lhs has no area", lhs.kind());
		return rhs.clone().into_multi();
	}
	Shape::MultiPolygon(kernel::xor(&lhs.to_multi_polygon(), &rhs.to_multi_polygon()))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Measure, ShapeKind};
	use approx::assert_abs_diff_eq;
	use geo::{Coord, LineString, MultiLineString, Rect};
	use rstest::rstest;

	fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Shape {
		Shape::Box(Rect::new(Coord { x: x0, y: y0 }, Coord { x: x1, y: y1 }))
	}

	fn line(coords: &[(f64, f64)]) -> Shape {
		Shape::LineString(LineString::from(coords.to_vec()))
	}

	fn collapsed() -> Shape {
		Shape::Ring(LineString::from(vec![(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (0.0, 0.0)]))
	}

	#[test]
	fn difference_of_overlapping_boxes() {
		let result = difference(&rect(0.0, 0.0, 2.0, 2.0), &rect(1.0, 0.0, 3.0, 2.0));
		assert_eq!(result.kind(), ShapeKind::MultiPolygon);
		assert_abs_diff_eq!(result.area(), 2.0, epsilon = 1e-9);
	}

	#[rstest]
	#[case(collapsed())]
	#[case(Shape::empty_area())]
	#[case(line(&[(0.0, 0.0), (5.0, 5.0)]))]
	fn difference_with_degenerate_rhs_is_lhs(#[case] rhs: Shape) {
		let lhs = rect(0.0, 0.0, 2.0, 2.0);
		assert_eq!(difference(&lhs, &rhs), lhs.clone().into_multi());
	}

	#[test]
	fn difference_of_line_keeps_outside() {
		let result = difference(&line(&[(-1.0, 0.5), (3.0, 0.5)]), &rect(0.0, 0.0, 2.0, 1.0));
		assert_eq!(result.kind(), ShapeKind::MultiLineString);
		assert_abs_diff_eq!(result.length(), 2.0, epsilon = 1e-9);
	}

	#[test]
	fn intersection_of_boxes() {
		let result = intersection(&rect(0.0, 0.0, 2.0, 2.0), &rect(1.0, 1.0, 3.0, 3.0));
		assert_abs_diff_eq!(result.area(), 1.0, epsilon = 1e-9);
	}

	#[rstest]
	#[case(collapsed(), rect(0.0, 0.0, 2.0, 2.0))]
	#[case(rect(0.0, 0.0, 2.0, 2.0), collapsed())]
	#[case(Shape::empty_area(), Shape::empty_area())]
	fn intersection_with_degenerate_operand_is_empty(#[case] lhs: Shape, #[case] rhs: Shape) {
		assert_eq!(intersection(&lhs, &rhs), Shape::empty_area());
	}

	#[rstest]
	#[case(true)]
	#[case(false)]
	fn intersection_of_line_and_area(#[case] line_first: bool) {
		let lines = line(&[(-1.0, 0.5), (3.0, 0.5)]);
		let area = rect(0.0, 0.0, 2.0, 1.0);
		let result = if line_first {
			intersection(&lines, &area)
		} else {
			intersection(&area, &lines)
		};
		assert_eq!(result.kind(), ShapeKind::MultiLineString);
		assert_abs_diff_eq!(result.length(), 2.0, epsilon = 1e-9);
	}

	#[test]
	fn intersection_of_degenerate_line_is_empty() {
		let point_line = line(&[(1.0, 0.5), (1.0, 0.5)]);
		assert_eq!(intersection(&point_line, &rect(0.0, 0.0, 2.0, 1.0)), Shape::empty_lines());
		let lines = Shape::MultiLineString(MultiLineString::new(vec![]));
		assert_eq!(intersection(&rect(0.0, 0.0, 2.0, 1.0), &lines), Shape::empty_lines());
	}

	#[test]
	fn intersection_of_two_lines_is_empty() {
		let a = line(&[(0.0, 0.0), (1.0, 1.0)]);
		let b = line(&[(0.0, 1.0), (1.0, 0.0)]);
		assert_eq!(intersection(&a, &b), Shape::empty_lines());
	}

	#[test]
	fn sym_difference_of_overlapping_boxes() {
		let result = sym_difference(&rect(0.0, 0.0, 2.0, 2.0), &rect(1.0, 0.0, 3.0, 2.0));
		assert_abs_diff_eq!(result.area(), 4.0, epsilon = 1e-9);
	}

	#[test]
	fn sym_difference_with_degenerate_operand() {
		let a = rect(0.0, 0.0, 2.0, 2.0);
		assert_eq!(sym_difference(&a, &collapsed()), a.clone().into_multi());
		assert_eq!(sym_difference(&collapsed(), &a), a.clone().into_multi());
	}

	#[test]
	fn sym_difference_with_itself_is_empty() {
		let a = rect(0.0, 0.0, 2.0, 2.0);
		assert!(is_degenerate_area(&sym_difference(&a, &a)));
	}

	#[test]
	fn inputs_are_not_mutated() {
		let a = rect(0.0, 0.0, 2.0, 2.0);
		let b = rect(1.0, 1.0, 3.0, 3.0);
		let (a0, b0) = (a.clone(), b.clone());
		let _ = difference(&a, &b);
		let _ = intersection(&a, &b);
		let _ = sym_difference(&a, &b);
		let _ = union(&a, &b);
		assert_eq!((a, b), (a0, b0));
	}
}
