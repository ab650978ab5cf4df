/// Tag of a [`Shape`](super::Shape) variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
	Polygon,
	MultiPolygon,
	LineString,
	MultiLineString,
	Ring,
	Box,
}

impl ShapeKind {
	#[must_use]
	pub fn is_linear(self) -> bool {
		matches!(self, ShapeKind::LineString | ShapeKind::MultiLineString)
	}

	#[must_use]
	pub fn is_areal(self) -> bool {
		!self.is_linear()
	}

	/// The kind results are normalised to when this kind takes part in an operation.
	#[must_use]
	pub fn multi(self) -> ShapeKind {
		if self.is_linear() {
			ShapeKind::MultiLineString
		} else {
			ShapeKind::MultiPolygon
		}
	}

	#[must_use]
	pub fn name(self) -> &'static str {
		match self {
			ShapeKind::Polygon => "Polygon",
			ShapeKind::MultiPolygon => "MultiPolygon",
			ShapeKind::LineString => "LineString",
			ShapeKind::MultiLineString => "MultiLineString",
			ShapeKind::Ring => "Ring",
			ShapeKind::Box => "Box",
		}
	}
}

impl std::fmt::Display for ShapeKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}
