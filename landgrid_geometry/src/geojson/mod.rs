//! Reading GeoJSON `FeatureCollection` documents.

mod parse;
mod read;

pub use parse::parse_geojson;
pub use read::{read_geojson, read_geojson_file};
