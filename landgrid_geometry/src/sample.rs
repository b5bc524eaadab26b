//! Area-weighted random point sampling.
//!
//! Turns a feature collection into a point cloud whose density is roughly
//! uniform across the map: every polygon receives a number of points
//! proportional to its planar area, with a floor so tiny regions stay
//! visible, and candidates are rejection-sampled inside each polygon's
//! bounding box.

use crate::{Coordinates, GeoCollection, GeoFeature, GeometryTrait};
use log::{debug, trace};
use rand::Rng;

/// Attempt budget per polygon, as a multiple of its point target. Thin or
/// hole-riddled polygons whose bounding box is mostly empty stop after this
/// many rejections instead of looping forever.
const MAX_ATTEMPT_FACTOR: usize = 80;

/// Density controls for the sampler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampleOptions {
	/// Total number of points to spread across all features.
	pub total_points: usize,
	/// Minimum number of points every polygon receives regardless of its
	/// area share.
	pub min_points_per_polygon: usize,
}

impl Default for SampleOptions {
	fn default() -> Self {
		Self {
			total_points: 18_000,
			min_points_per_polygon: 12,
		}
	}
}

/// Samples random points across all features of a collection, weighted by
/// planar area.
pub fn sample_collection<R: Rng>(
	collection: &GeoCollection,
	options: &SampleOptions,
	rng: &mut R,
) -> Vec<Coordinates> {
	sample_features(&collection.features, options, |_| false, rng)
}

/// Samples random points across `features`, skipping those for which
/// `exclude` returns `true`.
///
/// Each polygon (parts of a multipolygon count separately) gets a target of
/// `max(min_points_per_polygon, floor(area_share * total_points))` points,
/// where `area_share` is its outer-ring area divided by the kept total.
/// Candidates are drawn uniformly from the polygon's outer-ring bounding box
/// and accepted when the owning feature's full geometry contains them, so
/// holes stay empty. A polygon that exhausts its attempt budget keeps
/// whatever it accepted; the shortfall is not an error.
///
/// The output follows feature and polygon order and is a pure function of
/// the inputs and the RNG state. Collections with no positive-area polygons
/// yield an empty vector.
pub fn sample_features<R, F>(
	features: &[GeoFeature],
	options: &SampleOptions,
	exclude: F,
	rng: &mut R,
) -> Vec<Coordinates>
where
	R: Rng,
	F: Fn(&GeoFeature) -> bool,
{
	let kept: Vec<&GeoFeature> = features.iter().filter(|feature| !exclude(feature)).collect();

	let total_area: f64 = kept.iter().map(|feature| feature.area()).sum();
	if total_area <= 0.0 {
		debug!("nothing to sample, total area is {total_area}");
		return Vec::new();
	}

	let mut points = Vec::with_capacity(options.total_points);

	for feature in kept {
		for polygon in feature.geometry.polygons() {
			let area = polygon.area();
			if area <= 0.0 {
				continue;
			}
			let Some(bounds) = polygon.outer().and_then(|outer| outer.compute_bounds()) else {
				continue;
			};

			let share = area / total_area;
			let target = (share * options.total_points as f64).floor() as usize;
			let target = target.max(options.min_points_per_polygon);
			let max_attempts = target * MAX_ATTEMPT_FACTOR;

			let mut accepted = 0;
			let mut attempts = 0;
			while accepted < target && attempts < max_attempts {
				attempts += 1;
				let lng = rng.random_range(bounds.x_min..=bounds.x_max);
				let lat = rng.random_range(bounds.y_min..=bounds.y_max);
				if feature.geometry.contains_point(lng, lat) {
					points.push(Coordinates::new(lng, lat));
					accepted += 1;
				}
			}

			trace!("accepted {accepted}/{target} points in {attempts} attempts");
			if accepted < target {
				debug!(
					"polygon of {} exhausted its attempt budget at {accepted}/{target} points",
					feature.name().unwrap_or("unnamed feature")
				);
			}
		}
	}

	points
}
