use crate::Shape;
use anyhow::{Result, anyhow, bail};
use geo::{Coord, LineString, MultiLineString, MultiPolygon, Polygon};

/// Parses well-known text into a [`Shape`].
///
/// Keywords are case-insensitive and whitespace is free-form, so both
/// `MULTIPOLYGON(((0 0,1 0,1 1,0 0)))` and `MultiPolygon (((0 0, 1 0, 1 1, 0 0)))`
/// are accepted. A third coordinate per point is skipped.
pub fn parse_wkt(text: &str) -> Result<Shape> {
	let mut reader = WktReader::new(text);
	let shape = reader.parse_geometry()?;
	reader.skip_whitespace();
	if reader.peek().is_some() {
		return Err(reader.format_error("unexpected trailing characters"));
	}
	Ok(shape)
}

struct WktReader<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> WktReader<'a> {
	fn new(text: &'a str) -> Self {
		Self {
			bytes: text.as_bytes(),
			pos: 0,
		}
	}

	fn format_error(&self, message: &str) -> anyhow::Error {
		anyhow!("{message} at byte {} of WKT", self.pos)
	}

	fn peek(&self) -> Option<u8> {
		self.bytes.get(self.pos).copied()
	}

	fn skip_whitespace(&mut self) {
		while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
			self.pos += 1;
		}
	}

	fn peek_significant(&mut self) -> Option<u8> {
		self.skip_whitespace();
		self.peek()
	}

	fn expect(&mut self, byte: u8) -> Result<()> {
		if self.peek_significant() == Some(byte) {
			self.pos += 1;
			Ok(())
		} else {
			Err(self.format_error(&format!("expected '{}'", byte as char)))
		}
	}

	fn parse_keyword(&mut self) -> String {
		self.skip_whitespace();
		let start = self.pos;
		while self.peek().is_some_and(|b| b.is_ascii_alphabetic()) {
			self.pos += 1;
		}
		String::from_utf8_lossy(&self.bytes[start..self.pos]).to_ascii_uppercase()
	}

	/// Consumes `EMPTY` if it is the next word.
	fn parse_empty(&mut self) -> Result<bool> {
		if self.peek_significant() == Some(b'(') {
			return Ok(false);
		}
		match self.parse_keyword().as_str() {
			"EMPTY" => Ok(true),
			_ => Err(self.format_error("expected '(' or EMPTY")),
		}
	}

	fn parse_geometry(&mut self) -> Result<Shape> {
		let keyword = self.parse_keyword();
		match keyword.as_str() {
			"LINESTRING" => Ok(Shape::LineString(if self.parse_empty()? {
				LineString::new(vec![])
			} else {
				self.parse_line_string()?
			})),
			"POLYGON" => Ok(Shape::Polygon(if self.parse_empty()? {
				Polygon::new(LineString::new(vec![]), vec![])
			} else {
				self.parse_polygon()?
			})),
			"MULTILINESTRING" => Ok(Shape::MultiLineString(MultiLineString::new(if self.parse_empty()? {
				vec![]
			} else {
				self.parse_list(Self::parse_line_string)?
			}))),
			"MULTIPOLYGON" => Ok(Shape::MultiPolygon(MultiPolygon::new(if self.parse_empty()? {
				vec![]
			} else {
				self.parse_list(Self::parse_polygon)?
			}))),
			"" => Err(self.format_error("expected a geometry keyword")),
			_ => bail!("unsupported WKT geometry type '{keyword}'"),
		}
	}

	/// `( item, item, ... )`
	fn parse_list<T>(&mut self, mut item: impl FnMut(&mut Self) -> Result<T>) -> Result<Vec<T>> {
		self.expect(b'(')?;
		let mut list = vec![item(self)?];
		loop {
			match self.peek_significant() {
				Some(b',') => {
					self.pos += 1;
					list.push(item(self)?);
				}
				Some(b')') => {
					self.pos += 1;
					return Ok(list);
				}
				_ => return Err(self.format_error("expected ',' or ')'")),
			}
		}
	}

	fn parse_line_string(&mut self) -> Result<LineString<f64>> {
		Ok(LineString::new(self.parse_list(Self::parse_coord)?))
	}

	fn parse_polygon(&mut self) -> Result<Polygon<f64>> {
		let mut rings = self.parse_list(Self::parse_line_string)?.into_iter();
		let exterior = rings.next().unwrap_or_else(|| LineString::new(vec![]));
		Ok(Polygon::new(exterior, rings.collect()))
	}

	fn parse_coord(&mut self) -> Result<Coord<f64>> {
		let x = self.parse_number()?;
		let y = self.parse_number()?;
		while matches!(self.peek_significant(), Some(b) if is_number_byte(b)) {
			self.parse_number()?;
		}
		Ok(Coord { x, y })
	}

	fn parse_number(&mut self) -> Result<f64> {
		self.skip_whitespace();
		let start = self.pos;
		while self.peek().is_some_and(is_number_byte) {
			self.pos += 1;
		}
		let text = std::str::from_utf8(&self.bytes[start..self.pos]).map_err(|_| self.format_error("invalid number"))?;
		if text.is_empty() {
			return Err(self.format_error("expected a number"));
		}
		text
			.parse::<f64>()
			.map_err(|_| self.format_error(&format!("invalid number '{text}'")))
	}
}

fn is_number_byte(b: u8) -> bool {
	b.is_ascii_digit() || matches!(b, b'-' | b'+' | b'.' | b'e' | b'E')
}
