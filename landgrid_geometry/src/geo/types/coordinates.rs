use serde_json::Value;
use std::fmt::Debug;

/// A single `[lng, lat]` position in degrees.
#[derive(Clone, PartialEq)]
pub struct Coordinates([f64; 2]);

impl Coordinates {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self([x, y])
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.0[0]
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.0[1]
	}

	/// Longitude in degrees, same as [`x`](Self::x).
	#[must_use]
	pub fn lng(&self) -> f64 {
		self.0[0]
	}

	/// Latitude in degrees, same as [`y`](Self::y).
	#[must_use]
	pub fn lat(&self) -> f64 {
		self.0[1]
	}

	#[must_use]
	pub fn to_json(&self) -> Value {
		Value::from(vec![self.0[0], self.0[1]])
	}
}

impl<'a, T> From<&'a [T; 2]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Coordinates([value[0].into(), value[1].into()])
	}
}

impl From<[f64; 2]> for Coordinates {
	fn from(value: [f64; 2]) -> Self {
		Coordinates(value)
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from(value: (f64, f64)) -> Self {
		Coordinates([value.0, value.1])
	}
}

impl From<&(f64, f64)> for Coordinates {
	fn from(value: &(f64, f64)) -> Self {
		Coordinates([value.0, value.1])
	}
}

impl From<Coordinates> for [f64; 2] {
	fn from(value: Coordinates) -> Self {
		[value.0[0], value.0[1]]
	}
}

impl From<geo::Coord> for Coordinates {
	fn from(value: geo::Coord) -> Self {
		Coordinates([value.x, value.y])
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_and_accessors() {
		let c = Coordinates::new(13.404954, 52.520008);
		assert_eq!(c.x(), 13.404954);
		assert_eq!(c.y(), 52.520008);
		assert_eq!(c.lng(), c.x());
		assert_eq!(c.lat(), c.y());
	}

	#[test]
	fn debug_formats_like_array() {
		let c = Coordinates::new(1.0, 2.0);
		assert_eq!(format!("{c:?}"), "[1.0, 2.0]");
	}

	#[test]
	fn to_json() {
		let c = Coordinates::new(1.25, -9.5);
		assert_eq!(c.to_json(), Value::from(vec![1.25, -9.5]));
	}

	#[test]
	fn from_array_ref() {
		let a = [7.0f64, 8.0f64];
		let c = Coordinates::from(&a);
		assert_eq!(c.x(), 7.0);
		assert_eq!(c.y(), 8.0);
	}

	#[test]
	fn from_tuple_and_ref_tuple() {
		let c1 = Coordinates::from((3.0f64, 4.0f64));
		let t = (5.0f64, 6.0f64);
		let c2 = Coordinates::from(&t);
		assert_eq!(c1.x(), 3.0);
		assert_eq!(c1.y(), 4.0);
		assert_eq!(c2.x(), 5.0);
		assert_eq!(c2.y(), 6.0);
	}

	#[test]
	fn into_array() {
		let c = Coordinates::new(10.25, -20.5);
		let arr: [f64; 2] = c.into();
		assert_eq!(arr, [10.25, -20.5]);
	}

	#[test]
	fn from_geo_coord() {
		let gc = geo::Coord { x: 11.0, y: 22.0 };
		let c = Coordinates::from(gc);
		assert_eq!(c.x(), 11.0);
		assert_eq!(c.y(), 22.0);
	}

	#[test]
	fn clone_and_eq() {
		let a = Coordinates::new(1.0, 2.0);
		let b = a.clone();
		assert_eq!(a, b);
	}
}
