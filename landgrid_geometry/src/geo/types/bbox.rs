use super::Coordinates;
use anyhow::{Result, ensure};
use std::fmt::Debug;

/// A rectangular area defined by its minimum and maximum longitude (x) and
/// latitude (y) coordinates in degrees.
///
/// Bounding boxes are derived from geometry and used to bound rejection
/// sampling; they are never persisted.
///
/// # Examples
///
/// ## Creating a new `GeoBBox`
/// ```
/// use landgrid_geometry::GeoBBox;
///
/// let bbox = GeoBBox::new(-10.0, -5.0, 10.0, 5.0).unwrap();
/// assert_eq!(bbox.as_tuple(), (-10.0, -5.0, 10.0, 5.0));
/// ```
///
/// ## Expanding a bounding box
/// ```
/// use landgrid_geometry::GeoBBox;
///
/// let mut bbox1 = GeoBBox::new(-10.0, -5.0, 10.0, 5.0).unwrap();
/// let bbox2 = GeoBBox::new(-12.0, -3.0, 8.0, 6.0).unwrap();
/// bbox1.extend(&bbox2);
/// assert_eq!(bbox1.as_tuple(), (-12.0, -5.0, 10.0, 6.0));
/// ```
#[derive(Clone, Copy, PartialEq)]
#[allow(clippy::manual_non_exhaustive)]
pub struct GeoBBox {
	pub x_min: f64,
	pub y_min: f64,
	pub x_max: f64,
	pub y_max: f64,
	phantom: (),
}

impl GeoBBox {
	/// Creates a new `GeoBBox` from four `f64` values:
	/// `west, south, east, north`.
	///
	/// Fails if a value is not finite or a minimum exceeds its maximum.
	/// Values are usually degrees of longitude and latitude, but any planar
	/// coordinates are accepted.
	///
	/// # Examples
	/// ```
	/// use landgrid_geometry::GeoBBox;
	///
	/// let bbox = GeoBBox::new(-10.0, -5.0, 10.0, 5.0).unwrap();
	/// assert_eq!(bbox.x_min, -10.0);
	/// assert_eq!(bbox.y_max, 5.0);
	/// assert!(GeoBBox::new(10.0, -5.0, -10.0, 5.0).is_err());
	/// ```
	pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<GeoBBox> {
		GeoBBox {
			x_min,
			y_min,
			x_max,
			y_max,
			phantom: (),
		}
		.checked()
	}

	/// Computes the bounding box of a set of positions, or `None` if the set
	/// is empty.
	///
	/// # Examples
	/// ```
	/// use landgrid_geometry::{Coordinates, GeoBBox};
	///
	/// let coords = vec![Coordinates::new(3.0, -1.0), Coordinates::new(-2.0, 4.0)];
	/// let bbox = GeoBBox::from_coords(&coords).unwrap();
	/// assert_eq!(bbox.as_array(), [-2.0, -1.0, 3.0, 4.0]);
	/// ```
	pub fn from_coords<'a>(coords: impl IntoIterator<Item = &'a Coordinates>) -> Option<GeoBBox> {
		let mut iter = coords.into_iter();
		let first = iter.next()?;

		let mut bbox = GeoBBox {
			x_min: first.x(),
			y_min: first.y(),
			x_max: first.x(),
			y_max: first.y(),
			phantom: (),
		};
		for coord in iter {
			bbox.x_min = bbox.x_min.min(coord.x());
			bbox.y_min = bbox.y_min.min(coord.y());
			bbox.x_max = bbox.x_max.max(coord.x());
			bbox.y_max = bbox.y_max.max(coord.y());
		}
		Some(bbox)
	}

	/// Returns the bounding box as a `Vec<f64>` in the form
	/// `[west, south, east, north]`.
	#[must_use]
	pub fn as_vec(&self) -> Vec<f64> {
		vec![self.x_min, self.y_min, self.x_max, self.y_max]
	}

	/// Returns the bounding box as a fixed-size array `[f64; 4]` in the order
	/// `[west, south, east, north]`.
	///
	/// # Examples
	/// ```
	/// use landgrid_geometry::GeoBBox;
	///
	/// let bbox = GeoBBox::new(-10.0, -5.0, 10.0, 5.0).unwrap();
	/// assert_eq!(bbox.as_array(), [-10.0, -5.0, 10.0, 5.0]);
	/// ```
	#[must_use]
	pub fn as_array(&self) -> [f64; 4] {
		[self.x_min, self.y_min, self.x_max, self.y_max]
	}

	/// Returns the bounding box as a tuple `(x_min, y_min, x_max, y_max)`.
	#[must_use]
	pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
		(self.x_min, self.y_min, self.x_max, self.y_max)
	}

	/// Extent along the x axis.
	#[must_use]
	pub fn width(&self) -> f64 {
		self.x_max - self.x_min
	}

	/// Extent along the y axis.
	#[must_use]
	pub fn height(&self) -> f64 {
		self.y_max - self.y_min
	}

	/// Extends the bounding box in place so that it also covers `other`.
	pub fn extend(&mut self, other: &GeoBBox) {
		self.x_min = self.x_min.min(other.x_min);
		self.y_min = self.y_min.min(other.y_min);
		self.x_max = self.x_max.max(other.x_max);
		self.y_max = self.y_max.max(other.y_max);
	}

	/// Returns a new `GeoBBox` that is the result of extending `self` to
	/// include the area covered by `other`.
	///
	/// This is the non-mutating version of [`extend`](Self::extend).
	#[must_use]
	pub fn extended(mut self, other: &GeoBBox) -> GeoBBox {
		self.extend(other);
		self
	}

	fn checked(self) -> Result<Self> {
		ensure!(self.x_min.is_finite(), "x_min ({}) must be finite", self.x_min);
		ensure!(self.y_min.is_finite(), "y_min ({}) must be finite", self.y_min);
		ensure!(self.x_max.is_finite(), "x_max ({}) must be finite", self.x_max);
		ensure!(self.y_max.is_finite(), "y_max ({}) must be finite", self.y_max);
		ensure!(
			self.x_min <= self.x_max,
			"x_min ({}) must be <= x_max ({})",
			self.x_min,
			self.x_max
		);
		ensure!(
			self.y_min <= self.y_max,
			"y_min ({}) must be <= y_max ({})",
			self.y_min,
			self.y_max
		);
		Ok(self)
	}
}

impl Debug for GeoBBox {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"GeoBBox[{}, {}, {}, {}]",
			self.x_min, self.y_min, self.x_max, self.y_max
		)
	}
}
