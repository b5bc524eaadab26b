use super::parse_geojson;
use crate::GeoCollection;
use anyhow::{Context, Result};
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

/// Reads a GeoJSON `FeatureCollection` from any reader.
pub fn read_geojson(mut reader: impl Read) -> Result<GeoCollection> {
	let mut text = String::new();
	reader
		.read_to_string(&mut text)
		.context("failed to read GeoJSON input")?;
	parse_geojson(&text)
}

/// Reads a GeoJSON `FeatureCollection` from a file.
pub fn read_geojson_file(path: &Path) -> Result<GeoCollection> {
	let file = File::open(path).with_context(|| format!("failed to open \"{}\"", path.display()))?;
	read_geojson(BufReader::new(file)).with_context(|| format!("failed to load \"{}\"", path.display()))
}
