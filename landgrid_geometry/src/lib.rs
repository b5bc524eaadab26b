//! Geometry engine for a map of purchasable regions.
//!
//! The crate parses GeoJSON worlds and answers the three questions the
//! marketplace map asks: where to draw the point cloud (area-weighted
//! [`sample`]), which region a click landed in ([`locate`]), and what to
//! shade outside the mapped regions ([`mask`]). Sampled points can be
//! placed on a globe with [`projection`].
//!
//! ```rust
//! use landgrid_geometry::{GeometryTrait, SampleOptions, parse_geojson, sample_collection};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! # fn main() -> anyhow::Result<()> {
//! let collection = parse_geojson(
//! 	r#"{
//! 		"type": "FeatureCollection",
//! 		"features": [{
//! 			"type": "Feature",
//! 			"properties": {"NAME": "Alpha", "stateKey": "alpha"},
//! 			"geometry": {
//! 				"type": "Polygon",
//! 				"coordinates": [[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]]]
//! 			}
//! 		}]
//! 	}"#,
//! )?;
//!
//! let options = SampleOptions { total_points: 100, min_points_per_polygon: 12 };
//! let mut rng = StdRng::seed_from_u64(42);
//! let points = sample_collection(&collection, &options, &mut rng);
//!
//! assert_eq!(points.len(), 100);
//! assert!(points.iter().all(|p| collection.features[0].geometry.contains_point(p.x(), p.y())));
//! # Ok(())
//! # }
//! ```

mod geo;
pub mod geojson;
pub mod locate;
pub mod mask;
pub mod projection;
pub mod sample;

pub use geo::*;
pub use geojson::*;
pub use sample::{SampleOptions, sample_collection, sample_features};
