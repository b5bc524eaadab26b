use super::{CompositeGeometryTrait, GeoBBox, GeometryTrait, RingGeometry};
use anyhow::{Result, ensure};
use serde_json::Value;
use std::fmt::Debug;

/// A polygon as a list of rings: the first ring is the outer boundary, any
/// further rings are holes.
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

impl PolygonGeometry {
	/// Returns the outer ring, if the polygon has one.
	pub fn outer(&self) -> Option<&RingGeometry> {
		self.0.first()
	}
}

impl GeometryTrait for PolygonGeometry {
	/// Computes the area of the polygon as the absolute area of its outer
	/// ring. Holes are not subtracted.
	fn area(&self) -> f64 {
		self.0.first().map_or(0.0, |outer| outer.area().abs())
	}

	fn verify(&self) -> Result<()> {
		ensure!(!self.0.is_empty(), "polygon must have an outer ring");
		for ring in &self.0 {
			ring.verify()?;
		}
		Ok(())
	}

	fn to_coord_json(&self) -> Value {
		Value::from(self.0.iter().map(RingGeometry::to_coord_json).collect::<Vec<_>>())
	}

	/// Even-odd rule over all rings: a point inside the outer ring but also
	/// inside a hole is outside the polygon.
	fn contains_point(&self, lng: f64, lat: f64) -> bool {
		let crossings = self.0.iter().filter(|ring| ring.contains_point(lng, lat)).count();
		crossings % 2 == 1
	}

	fn compute_bounds(&self) -> Option<GeoBBox> {
		let mut bounds: Option<GeoBBox> = None;
		for ring in &self.0 {
			if let Some(ring_bounds) = ring.compute_bounds() {
				match &mut bounds {
					Some(b) => b.extend(&ring_bounds),
					None => bounds = Some(ring_bounds),
				}
			}
		}
		bounds
	}
}

impl CompositeGeometryTrait<RingGeometry> for PolygonGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<RingGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<RingGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<RingGeometry> {
		self.0
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(PolygonGeometry, RingGeometry);

impl From<geo::Polygon<f64>> for PolygonGeometry {
	fn from(geometry: geo::Polygon<f64>) -> Self {
		let (exterior, interiors) = geometry.into_inner();
		let mut rings = Vec::with_capacity(1 + interiors.len());
		rings.push(RingGeometry::from(exterior));
		rings.extend(interiors.into_iter().map(RingGeometry::from));
		PolygonGeometry(rings)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn square_with_hole() -> PolygonGeometry {
		PolygonGeometry::from(&[
			vec![[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]],
			vec![[4, 4], [6, 4], [6, 6], [4, 6], [4, 4]],
		])
	}

	// ── area ────────────────────────────────────────────────────────────

	#[test]
	fn area_is_outer_ring_only() {
		// the 2x2 hole does not reduce the area
		assert_eq!(square_with_hole().area(), 100.0);
	}

	#[test]
	fn area_ignores_winding() {
		let cw = PolygonGeometry::from(&[vec![[0, 0], [0, 10], [10, 10], [10, 0], [0, 0]]]);
		assert_eq!(cw.area(), 100.0);
	}

	#[test]
	fn area_empty() {
		assert_eq!(PolygonGeometry::new().area(), 0.0);
	}

	// ── verify ──────────────────────────────────────────────────────────

	#[test]
	fn verify_valid() {
		assert!(square_with_hole().verify().is_ok());
	}

	#[test]
	fn verify_no_rings() {
		assert!(PolygonGeometry::new().verify().is_err());
	}

	#[test]
	fn verify_bad_ring() {
		let polygon = PolygonGeometry::from(&[vec![[0, 0], [1, 1]]]);
		assert!(polygon.verify().is_err());
	}

	// ── contains_point ──────────────────────────────────────────────────

	#[test]
	fn contains_point_respects_holes() {
		let polygon = square_with_hole();
		assert!(polygon.contains_point(2.0, 2.0));
		assert!(!polygon.contains_point(5.0, 5.0));
		assert!(!polygon.contains_point(11.0, 5.0));
	}

	#[test]
	fn contains_point_without_holes() {
		let polygon = PolygonGeometry::from(&[vec![[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]]]);
		assert!(polygon.contains_point(5.0, 5.0));
		assert!(!polygon.contains_point(-1.0, 5.0));
	}

	// ── compute_bounds ──────────────────────────────────────────────────

	#[test]
	fn compute_bounds_covers_all_rings() {
		let bounds = square_with_hole().compute_bounds().unwrap();
		assert_eq!(bounds.as_array(), [0.0, 0.0, 10.0, 10.0]);
	}

	#[test]
	fn compute_bounds_empty() {
		assert!(PolygonGeometry::new().compute_bounds().is_none());
	}

	// ── accessors / conversions ─────────────────────────────────────────

	#[test]
	fn outer_ring() {
		let polygon = square_with_hole();
		assert_eq!(polygon.outer().unwrap().len(), 5);
		assert!(PolygonGeometry::new().outer().is_none());
	}

	#[test]
	fn to_coord_json_nests_rings() {
		let json = square_with_hole().to_coord_json();
		let rings = json.as_array().unwrap();
		assert_eq!(rings.len(), 2);
		assert_eq!(rings[0].as_array().unwrap().len(), 5);
	}

	#[test]
	fn from_geo_polygon() {
		let geo_polygon = geo::Polygon::new(
			geo::LineString::from(vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 0.0)]),
			vec![geo::LineString::from(vec![(2.0, 1.0), (3.0, 1.0), (3.0, 2.0), (2.0, 1.0)])],
		);
		let polygon = PolygonGeometry::from(geo_polygon);
		assert_eq!(polygon.len(), 2);
	}

	#[test]
	fn debug_format() {
		let polygon = PolygonGeometry::from(&[vec![[1, 2], [3, 4], [5, 6]]]);
		assert!(format!("{polygon:?}").starts_with("[["));
	}
}
