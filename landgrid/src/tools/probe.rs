use anyhow::Result;
use clap::Args;
use itertools::Itertools;
use landgrid_geometry::{CompositeGeometryTrait, GeoFeature, GeometryTrait, geojson::read_geojson_file};
use log::warn;
use std::path::PathBuf;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON file with the purchasable regions
	#[arg(required = true)]
	input: PathBuf,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	eprintln!("probing \"{}\"", arguments.input.display());

	let collection = read_geojson_file(&arguments.input)?;

	let mut polygon_total = 0;
	let mut ring_total = 0;
	let mut area_total = 0.0;

	for (index, feature) in collection.iter().enumerate() {
		if let Err(error) = feature.geometry.verify() {
			warn!("feature {index} has invalid geometry: {error:#}");
		}

		let polygons = feature.geometry.polygons();
		let rings: usize = polygons.iter().map(|polygon| polygon.len()).sum();
		let vertices: usize = polygons
			.iter()
			.flat_map(|polygon| polygon.as_vec())
			.map(|ring| ring.len())
			.sum();
		let area = feature.area();
		let bounds = feature
			.geometry
			.compute_bounds()
			.map_or_else(|| String::from("none"), |bbox| format!("{bbox:?}"));

		println!(
			"#{index} {} [{}]: {}, {} polygons, {rings} rings, {vertices} vertices, area {area}, bounds {bounds}",
			feature.name().unwrap_or("<unnamed>"),
			feature.region_key().unwrap_or("-"),
			feature.geometry.type_name(),
			polygons.len(),
		);

		polygon_total += polygons.len();
		ring_total += rings;
		area_total += area;
	}

	println!(
		"{} features, {polygon_total} polygons, {ring_total} rings, total area {area_total}",
		collection.len()
	);

	let keys = collection.iter().filter_map(GeoFeature::region_key).unique().join(", ");
	if !keys.is_empty() {
		println!("region keys: {keys}");
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;

	#[test]
	fn probes_fixture() {
		run_command(vec!["landgrid", "probe", "-q", "../testdata/regions.geojson"]).unwrap();
	}

	#[test]
	fn missing_file_fails() {
		assert!(run_command(vec!["landgrid", "probe", "-q", "no_such_file.geojson"]).is_err());
	}
}
