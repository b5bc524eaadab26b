//! Inverse world overlay.
//!
//! The marketplace map darkens everything that is not purchasable. The
//! overlay is a single polygon covering the whole world with one hole per
//! mapped region, so the regions show through while the rest stays shaded.

use crate::{GeoCollection, GeoFeature, Geometry, PolygonGeometry, RingGeometry};

/// Outer boundary of the mask. Latitudes beyond 85 degrees are left out,
/// matching the visible extent of the map projection.
fn world_ring() -> RingGeometry {
	RingGeometry::from(&[
		[-180.0, -85.0],
		[180.0, -85.0],
		[180.0, 85.0],
		[-180.0, 85.0],
		[-180.0, -85.0],
	])
}

/// Builds the overlay feature: a world-spanning polygon whose holes are the
/// outer rings of every polygon in the collection, in input order, with
/// coordinates untouched. Features without polygonal geometry contribute
/// nothing. The result has no id and empty properties, and serializes
/// byte-identically for identical input.
pub fn world_mask(collection: &GeoCollection) -> GeoFeature {
	let mut rings = vec![world_ring()];
	for feature in collection {
		for polygon in feature.geometry.polygons() {
			if let Some(outer) = polygon.outer() {
				rings.push(outer.clone());
			}
		}
	}
	GeoFeature::new(Geometry::Polygon(PolygonGeometry(rings)))
}
