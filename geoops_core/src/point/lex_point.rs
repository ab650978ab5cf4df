use geo::{Coord, CoordNum};
use std::{cmp::Ordering, fmt::Debug};

/// Total ordering over a scalar coordinate type.
///
/// Floats use [`f64::total_cmp`] after folding `-0.0` into `0.0`, so every value
/// (including NaN) has a fixed place, the ordering is usable as a map key, and it
/// agrees with numeric equality on zeros.
pub trait TotalOrder: CoordNum {
	fn total_order(&self, other: &Self) -> Ordering;
}

macro_rules! impl_total_order {
	(float: $($t:ty),*) => {$(
		impl TotalOrder for $t {
			fn total_order(&self, other: &Self) -> Ordering {
				(*self + 0.0).total_cmp(&(*other + 0.0))
			}
		}
	)*};
	(int: $($t:ty),*) => {$(
		impl TotalOrder for $t {
			fn total_order(&self, other: &Self) -> Ordering {
				self.cmp(other)
			}
		}
	)*};
}

impl_total_order!(float: f32, f64);
impl_total_order!(int: i16, i32, i64, isize);

/// A coordinate wrapped with a lexicographic total order (x first, then y).
///
/// Use it as the key of a `BTreeMap`/`BTreeSet` or as a sort key:
///
/// ```
/// use geo::Coord;
/// use geoops_core::LexPoint;
///
/// let mut points = vec![Coord { x: 1.0, y: 2.0 }, Coord { x: 0.0, y: 5.0 }, Coord { x: 1.0, y: 0.0 }];
/// points.sort_by_key(|c| LexPoint(*c));
/// assert_eq!(points[0], Coord { x: 0.0, y: 5.0 });
/// assert_eq!(points[1], Coord { x: 1.0, y: 0.0 });
/// ```
#[derive(Clone, Copy)]
pub struct LexPoint<T: TotalOrder>(pub Coord<T>);

impl<T: TotalOrder> LexPoint<T> {
	#[must_use]
	pub fn new(x: T, y: T) -> Self {
		Self(Coord { x, y })
	}

	#[must_use]
	pub fn coord(&self) -> Coord<T> {
		self.0
	}
}

impl<T: TotalOrder> Ord for LexPoint<T> {
	fn cmp(&self, other: &Self) -> Ordering {
		self
			.0
			.x
			.total_order(&other.0.x)
			.then_with(|| self.0.y.total_order(&other.0.y))
	}
}

impl<T: TotalOrder> PartialOrd for LexPoint<T> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl<T: TotalOrder> PartialEq for LexPoint<T> {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl<T: TotalOrder> Eq for LexPoint<T> {}

impl<T: TotalOrder> From<Coord<T>> for LexPoint<T> {
	fn from(value: Coord<T>) -> Self {
		Self(value)
	}
}

impl<T: TotalOrder + Debug> Debug for LexPoint<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		[self.0.x, self.0.y].fmt(f)
	}
}
