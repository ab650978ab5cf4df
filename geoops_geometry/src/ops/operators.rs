//! Operator sugar on shape references: `+` union, `-` difference, `&` intersection
//! and `^` symmetric difference.

use super::{difference, intersection, sym_difference, union};
use crate::Shape;
use std::ops::{Add, BitAnd, BitXor, Sub};

macro_rules! impl_operator {
	($op_trait:ident, $method:ident, $function:ident) => {
		impl $op_trait<&Shape> for &Shape {
			type Output = Shape;

			fn $method(self, rhs: &Shape) -> Shape {
				$function(self, rhs)
			}
		}
	};
}

impl_operator!(Add, add, union);
impl_operator!(Sub, sub, difference);
impl_operator!(BitAnd, bitand, intersection);
impl_operator!(BitXor, bitxor, sym_difference);

#[cfg(test)]
mod tests {
	use crate::{Measure, Shape};
	use approx::assert_abs_diff_eq;
	use geo::{Coord, Rect};

	#[test]
	fn operators_dispatch_to_set_operations() {
		let a = Shape::Box(Rect::new(Coord { x: 0.0, y: 0.0 }, Coord { x: 2.0, y: 2.0 }));
		let b = Shape::Box(Rect::new(Coord { x: 1.0, y: 1.0 }, Coord { x: 3.0, y: 3.0 }));
		assert_abs_diff_eq!((&a + &b).area(), 7.0, epsilon = 1e-9);
		assert_abs_diff_eq!((&a - &b).area(), 3.0, epsilon = 1e-9);
		assert_abs_diff_eq!((&a & &b).area(), 1.0, epsilon = 1e-9);
		assert_abs_diff_eq!((&a ^ &b).area(), 6.0, epsilon = 1e-9);
	}
}
