use super::{CompositeGeometryTrait, GeoBBox, GeometryTrait, PolygonGeometry};
use anyhow::Result;
use serde_json::Value;
use std::fmt::Debug;

/// A collection of polygons treated as one geometry, e.g. an archipelago or
/// a region split by an exclave.
#[derive(Clone, PartialEq)]
pub struct MultiPolygonGeometry(pub Vec<PolygonGeometry>);

impl GeometryTrait for MultiPolygonGeometry {
	/// The area of a multipolygon is the sum of the areas of its parts.
	fn area(&self) -> f64 {
		self.0.iter().map(GeometryTrait::area).sum()
	}

	fn verify(&self) -> Result<()> {
		for polygon in &self.0 {
			polygon.verify()?;
		}
		Ok(())
	}

	fn to_coord_json(&self) -> Value {
		Value::from(self.0.iter().map(PolygonGeometry::to_coord_json).collect::<Vec<_>>())
	}

	/// A point is contained if any part contains it.
	fn contains_point(&self, lng: f64, lat: f64) -> bool {
		self.0.iter().any(|polygon| polygon.contains_point(lng, lat))
	}

	fn compute_bounds(&self) -> Option<GeoBBox> {
		let mut bounds: Option<GeoBBox> = None;
		for polygon in &self.0 {
			if let Some(polygon_bounds) = polygon.compute_bounds() {
				match &mut bounds {
					Some(b) => b.extend(&polygon_bounds),
					None => bounds = Some(polygon_bounds),
				}
			}
		}
		bounds
	}
}

impl CompositeGeometryTrait<PolygonGeometry> for MultiPolygonGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<PolygonGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<PolygonGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<PolygonGeometry> {
		self.0
	}
}

impl Debug for MultiPolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiPolygonGeometry, PolygonGeometry);

impl From<geo::MultiPolygon<f64>> for MultiPolygonGeometry {
	fn from(geometry: geo::MultiPolygon<f64>) -> Self {
		MultiPolygonGeometry(geometry.0.into_iter().map(PolygonGeometry::from).collect())
	}
}
