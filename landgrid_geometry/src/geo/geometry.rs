use super::types::{GeoBBox, GeometryTrait, MultiPolygonGeometry, PolygonGeometry};
use anyhow::Result;
use serde_json::{Value, json};
use std::fmt::Debug;

/// The geometry of a feature.
///
/// Only polygonal kinds take part in sampling, containment and masking.
/// Every other GeoJSON geometry (and `null` geometry) is kept as
/// [`Geometry::Unsupported`] with its original type tag, so a collection
/// containing points or lines still loads; such features just measure an
/// area of zero and contain nothing.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Polygon(PolygonGeometry),
	MultiPolygon(MultiPolygonGeometry),
	Unsupported(String),
}

impl Geometry {
	/// Returns the GeoJSON type tag of this geometry.
	pub fn type_name(&self) -> &str {
		match self {
			Geometry::Polygon(_) => "Polygon",
			Geometry::MultiPolygon(_) => "MultiPolygon",
			Geometry::Unsupported(kind) => kind,
		}
	}

	/// Returns the polygons of this geometry: one for a `Polygon`, all parts
	/// for a `MultiPolygon`, none for anything else.
	pub fn polygons(&self) -> &[PolygonGeometry] {
		match self {
			Geometry::Polygon(polygon) => std::slice::from_ref(polygon),
			Geometry::MultiPolygon(multi) => &multi.0,
			Geometry::Unsupported(_) => &[],
		}
	}

	/// Serializes to a GeoJSON geometry object. Unsupported geometry
	/// serializes as `null`.
	pub fn to_json(&self) -> Value {
		match self {
			Geometry::Polygon(polygon) => json!({
				"type": "Polygon",
				"coordinates": polygon.to_coord_json()
			}),
			Geometry::MultiPolygon(multi) => json!({
				"type": "MultiPolygon",
				"coordinates": multi.to_coord_json()
			}),
			Geometry::Unsupported(_) => Value::Null,
		}
	}

	/// Builds a small multipolygon (a triangle and a rectangle, each with a
	/// hole) for docs and tests.
	pub fn new_example() -> Geometry {
		Geometry::MultiPolygon(MultiPolygonGeometry::from(&[
			vec![
				vec![[0.0, 0.0], [5.0, 0.0], [2.5, 4.0], [0.0, 0.0]],
				vec![[1.0, 1.0], [4.0, 1.0], [2.5, 3.0], [1.0, 1.0]],
			],
			vec![
				vec![[6.0, 0.0], [9.0, 0.0], [9.0, 4.0], [6.0, 4.0], [6.0, 0.0]],
				vec![[7.0, 1.0], [8.0, 1.0], [8.0, 3.0], [7.0, 3.0], [7.0, 1.0]],
			],
		]))
	}
}

impl GeometryTrait for Geometry {
	fn area(&self) -> f64 {
		match self {
			Geometry::Polygon(polygon) => polygon.area(),
			Geometry::MultiPolygon(multi) => multi.area(),
			Geometry::Unsupported(_) => 0.0,
		}
	}

	fn verify(&self) -> Result<()> {
		match self {
			Geometry::Polygon(polygon) => polygon.verify(),
			Geometry::MultiPolygon(multi) => multi.verify(),
			Geometry::Unsupported(_) => Ok(()),
		}
	}

	fn to_coord_json(&self) -> Value {
		match self {
			Geometry::Polygon(polygon) => polygon.to_coord_json(),
			Geometry::MultiPolygon(multi) => multi.to_coord_json(),
			Geometry::Unsupported(_) => Value::Null,
		}
	}

	/// Hole-aware containment. The classifier in [`crate::locate`] uses
	/// outer rings only and behaves differently for points inside holes.
	fn contains_point(&self, lng: f64, lat: f64) -> bool {
		match self {
			Geometry::Polygon(polygon) => polygon.contains_point(lng, lat),
			Geometry::MultiPolygon(multi) => multi.contains_point(lng, lat),
			Geometry::Unsupported(_) => false,
		}
	}

	fn compute_bounds(&self) -> Option<GeoBBox> {
		match self {
			Geometry::Polygon(polygon) => polygon.compute_bounds(),
			Geometry::MultiPolygon(multi) => multi.compute_bounds(),
			Geometry::Unsupported(_) => None,
		}
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Geometry::Polygon(polygon) => f.debug_tuple("Polygon").field(polygon).finish(),
			Geometry::MultiPolygon(multi) => f.debug_tuple("MultiPolygon").field(multi).finish(),
			Geometry::Unsupported(kind) => f.debug_tuple("Unsupported").field(kind).finish(),
		}
	}
}

impl From<PolygonGeometry> for Geometry {
	fn from(polygon: PolygonGeometry) -> Self {
		Geometry::Polygon(polygon)
	}
}

impl From<MultiPolygonGeometry> for Geometry {
	fn from(multi: MultiPolygonGeometry) -> Self {
		Geometry::MultiPolygon(multi)
	}
}

impl From<geo::Polygon<f64>> for Geometry {
	fn from(geometry: geo::Polygon<f64>) -> Self {
		Geometry::Polygon(PolygonGeometry::from(geometry))
	}
}

impl From<geo::MultiPolygon<f64>> for Geometry {
	fn from(geometry: geo::MultiPolygon<f64>) -> Self {
		Geometry::MultiPolygon(MultiPolygonGeometry::from(geometry))
	}
}
