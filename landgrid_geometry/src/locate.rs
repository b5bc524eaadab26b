//! Point-in-region lookup for map clicks.
//!
//! Lookup matches the map's hit testing: only outer boundaries count, so a
//! point inside a hole still resolves to the surrounding region. The
//! sampler uses the hole-aware [`GeometryTrait::contains_point`] instead.

use crate::{GeoCollection, GeoFeature, Geometry, GeometryTrait, PolygonGeometry};

fn outer_contains(polygon: &PolygonGeometry, lng: f64, lat: f64) -> bool {
	polygon.outer().is_some_and(|ring| ring.contains_point(lng, lat))
}

/// Tests whether the outer boundary of a feature contains the point. Parts
/// of a multipolygon are ORed; non-polygonal geometry contains nothing.
pub fn point_in_feature(feature: &GeoFeature, lng: f64, lat: f64) -> bool {
	match &feature.geometry {
		Geometry::Polygon(polygon) => outer_contains(polygon, lng, lat),
		Geometry::MultiPolygon(multi) => multi.0.iter().any(|polygon| outer_contains(polygon, lng, lat)),
		Geometry::Unsupported(_) => false,
	}
}

/// Returns the first feature whose outer boundary contains the point.
pub fn locate(collection: &GeoCollection, lng: f64, lat: f64) -> Option<&GeoFeature> {
	collection.iter().find(|feature| point_in_feature(feature, lng, lat))
}

/// Returns the region key of the first containing feature that has one.
/// Containing features without a key do not stop the scan.
pub fn resolve_region_key(collection: &GeoCollection, lng: f64, lat: f64) -> Option<&str> {
	collection
		.iter()
		.filter(|feature| point_in_feature(feature, lng, lat))
		.find_map(GeoFeature::region_key)
}
