use crate::{Shape, buffer_polygonal, is_degenerate_area, kernel};
use geo::MultiPolygon;
use geoops_core::GeometryConfig;
use log::{debug, trace};

/// Everything covered by `lhs` or `rhs`, with the default configuration.
///
/// See [`union_with`].
#[must_use]
pub fn union(lhs: &Shape, rhs: &Shape) -> Shape {
	union_with(lhs, rhs, &GeometryConfig::default())
}

/// Everything covered by `lhs` or `rhs`.
///
/// If one operand has no area the other one is returned. The kernel's union goes
/// wrong on shapes that share a boundary without overlapping, e.g. adjoining
/// rectangles. When the bounding boxes of the operands line up exactly along an
/// edge, both operands are therefore inflated by `config.touch_epsilon` first, which
/// makes them overlap. The result overstates the area by roughly the perimeter times
/// the epsilon.
///
/// Touching is only detected through the bounding boxes. Shapes touching along an
/// edge that is not part of either box, or whose coordinates are merely close, go to
/// the kernel unchanged.
#[must_use]
pub fn union_with(lhs: &Shape, rhs: &Shape, config: &GeometryConfig) -> Shape {
	union_attempt(lhs, rhs, config, config.max_touch_retries)
}

fn union_attempt(lhs: &Shape, rhs: &Shape, config: &GeometryConfig, retries: u8) -> Shape {
	if is_degenerate_area(rhs) {
		trace!("union: {} rhs has no area", rhs.kind());
		return lhs.clone().into_multi();
	}
	if is_degenerate_area(lhs) {
		trace!("union: {} lhs has no area", lhs.kind());
		return Shape::MultiPolygon(rhs.to_multi_polygon());
	}

	let lhs = lhs.to_multi_polygon();
	let rhs = rhs.to_multi_polygon();

	if retries > 0 && touches_on_envelope(&lhs, &rhs) {
		debug!(
			"union: operands touch along their bounding boxes, inflating both by {}",
			config.touch_epsilon
		);
		let lhs = buffer_polygonal(&lhs, config.touch_epsilon, config.points_per_circle);
		let rhs = buffer_polygonal(&rhs, config.touch_epsilon, config.points_per_circle);
		return union_attempt(&Shape::MultiPolygon(lhs), &Shape::MultiPolygon(rhs), config, retries - 1);
	}

	Shape::MultiPolygon(kernel::union(&lhs, &rhs))
}

/// True if an edge of one bounding box lies exactly on the opposite edge of the other.
#[must_use]
pub fn touches_on_envelope(lhs: &MultiPolygon<f64>, rhs: &MultiPolygon<f64>) -> bool {
	let (Some(a), Some(b)) = (kernel::envelope(lhs), kernel::envelope(rhs)) else {
		return false;
	};
	a.max().x == b.min().x || b.max().x == a.min().x || a.max().y == b.min().y || b.max().y == a.min().y
}
