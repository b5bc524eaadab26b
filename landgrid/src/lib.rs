//! # Landgrid
//!
//! Landgrid turns a GeoJSON world into the data a land-marketplace map
//! needs.
//!
//! ## Features
//! - **Sample**: area-weighted random point clouds, so region density
//!   matches region size.
//! - **Locate**: resolve a clicked coordinate to its purchasable region.
//! - **Mask**: build the inverse world overlay that frames the mapped
//!   regions.
//! - **Selection**: a typed handoff slot carrying the chosen region from
//!   the map to the purchase flow.
//!
//! ## Usage Example
//!
//! ```rust
//! use landgrid::geometry::{SampleOptions, locate::resolve_region_key, parse_geojson, sample_collection};
//! use landgrid::selection::{RegionSelection, SelectionStore};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! # fn main() -> anyhow::Result<()> {
//! let world = parse_geojson(
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
//! // point cloud for the map
//! let options = SampleOptions { total_points: 500, min_points_per_polygon: 12 };
//! let points = sample_collection(&world, &options, &mut StdRng::seed_from_u64(7));
//! assert_eq!(points.len(), 500);
//!
//! // a click lands at (5, 5) and the chosen region is handed over
//! let store = SelectionStore::new();
//! if let Some(key) = resolve_region_key(&world, 5.0, 5.0) {
//! 	store.publish(RegionSelection { region_key: key.to_string() });
//! }
//! assert_eq!(store.take().unwrap().region_key, "alpha");
//! assert!(store.take().is_none());
//! # Ok(())
//! # }
//! ```

pub mod selection;

pub use landgrid_geometry as geometry;
