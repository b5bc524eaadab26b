use super::GeoBBox;
use anyhow::Result;
use serde_json::Value;
use std::fmt::Debug;

/// Defines the basic interface for geometric primitives, providing common
/// functionality for all geometry types.
pub trait GeometryTrait: Debug + Clone + Sized {
	/// Returns the planar area of the geometry in squared degrees.
	///
	/// Rings report a signed area; polygons and multi-polygons report the
	/// absolute area of their outer rings, without subtracting holes.
	fn area(&self) -> f64;

	/// Verifies the geometric validity of the geometry, for example whether
	/// rings carry enough positions. Returns an error if it is invalid.
	fn verify(&self) -> Result<()>;

	/// Converts the geometry into a JSON representation of its coordinates.
	fn to_coord_json(&self) -> Value;

	/// Checks if a position is inside this geometry.
	///
	/// The closing edge of a ring is implied, so implicitly closed rings
	/// behave like their closed copies. Positions exactly on a boundary may
	/// return either value, but the answer is the same on every call.
	fn contains_point(&self, lng: f64, lat: f64) -> bool;

	/// Computes the bounding box of this geometry, or `None` if it has no
	/// coordinates.
	fn compute_bounds(&self) -> Option<GeoBBox>;
}

/// Represents composite geometries that are collections of simpler elements.
/// For example, a polygon is made of rings.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	/// Creates a new, empty composite geometry.
	fn new() -> Self;

	/// Returns an immutable reference to the inner collection of elements.
	fn as_vec(&self) -> &Vec<Item>;

	/// Returns a mutable reference to the inner collection of elements.
	fn as_mut_vec(&mut self) -> &mut Vec<Item>;

	/// Consumes the composite geometry and returns the inner collection.
	fn into_inner(self) -> Vec<Item>;

	/// Returns an iterator over owned elements of the composite geometry.
	fn into_iter(self) -> impl Iterator<Item = Item> {
		self.into_inner().into_iter()
	}

	/// Checks whether the composite geometry contains no elements.
	fn is_empty(&self) -> bool {
		self.as_vec().is_empty()
	}

	/// Returns the number of elements contained in the composite geometry.
	fn len(&self) -> usize {
		self.as_vec().len()
	}

	/// Adds a new element to the composite geometry.
	fn push(&mut self, item: Item) {
		self.as_mut_vec().push(item);
	}

	/// Returns a reference to the first element, if any.
	fn first(&self) -> Option<&Item> {
		self.as_vec().first()
	}

	/// Returns a reference to the last element, if any.
	fn last(&self) -> Option<&Item> {
		self.as_vec().last()
	}
}
