//! Spherical projection of geographic coordinates.
//!
//! The formula matches the classic globe parameterization used by WebGL
//! renderers: latitude becomes the polar angle phi measured from the north
//! pole, longitude is shifted by 180 degrees, and the x axis is negated so
//! the texture seam lands in the Pacific.

use crate::Coordinates;
use std::f64::consts::PI;

/// Default sphere radius, matching the globe the points are rendered on.
pub const DEFAULT_RADIUS: f64 = 2.0;

/// Converts a (lat, lng) pair in degrees to cartesian coordinates on a
/// sphere of the given radius.
pub fn lat_lng_to_xyz(lat: f64, lng: f64, radius: f64) -> [f64; 3] {
	let phi = (90.0 - lat) * PI / 180.0;
	let theta = (lng + 180.0) * PI / 180.0;

	let x = -radius * phi.sin() * theta.cos();
	let y = radius * phi.cos();
	let z = radius * phi.sin() * theta.sin();

	[x, y, z]
}

/// Projects sampled points onto the sphere, flattened to an x,y,z buffer of
/// `3 * points.len()` values.
pub fn project_points(points: &[Coordinates], radius: f64) -> Vec<f64> {
	let mut buffer = Vec::with_capacity(points.len() * 3);
	for point in points {
		buffer.extend(lat_lng_to_xyz(point.lat(), point.lng(), radius));
	}
	buffer
}
