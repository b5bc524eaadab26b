use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use landgrid_geometry::{
	Coordinates, GeoFeature, SampleOptions,
	geojson::read_geojson_file,
	projection::{DEFAULT_RADIUS, project_points},
	sample_features,
};
use rand::{SeedableRng, rngs::StdRng};
use serde_json::Value;
use std::{
	fs::File,
	io::{BufWriter, Write, stdout},
	path::PathBuf,
};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
	Csv,
	Json,
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON file with the regions to cover
	#[arg(required = true)]
	input: PathBuf,

	/// total number of points to spread across all regions
	#[arg(long, short = 'n', value_name = "int", default_value_t = SampleOptions::default().total_points, display_order = 1)]
	points: usize,

	/// minimum number of points each polygon receives regardless of its area
	#[arg(long, value_name = "int", default_value_t = SampleOptions::default().min_points_per_polygon, display_order = 1)]
	min_per_polygon: usize,

	/// seed for reproducible output; omit for a fresh point cloud per run
	#[arg(long, value_name = "int", display_order = 2)]
	seed: Option<u64>,

	/// skip features with this NAME, e.g. Antarctica; can be repeated
	#[arg(long, value_name = "NAME", display_order = 2)]
	exclude_name: Vec<String>,

	/// radius of the globe the points are projected onto
	#[arg(long, value_name = "float", default_value_t = DEFAULT_RADIUS, display_order = 3)]
	radius: f64,

	/// emit raw lng,lat pairs instead of projected x,y,z triples
	#[arg(long, display_order = 3)]
	raw: bool,

	/// output format
	#[arg(long, value_enum, default_value = "csv", display_order = 4)]
	format: Format,

	/// write to this file instead of stdout
	#[arg(long, short, value_name = "file", display_order = 4)]
	output: Option<PathBuf>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	eprintln!("sampling points from \"{}\"", arguments.input.display());

	let collection = read_geojson_file(&arguments.input)?;

	let options = SampleOptions {
		total_points: arguments.points,
		min_points_per_polygon: arguments.min_per_polygon,
	};
	let exclude = |feature: &GeoFeature| {
		feature
			.name()
			.is_some_and(|name| arguments.exclude_name.iter().any(|excluded| excluded == name))
	};

	let points = match arguments.seed {
		Some(seed) => sample_features(&collection.features, &options, exclude, &mut StdRng::seed_from_u64(seed)),
		None => sample_features(&collection.features, &options, exclude, &mut rand::rng()),
	};

	match &arguments.output {
		Some(path) => {
			let file = File::create(path).with_context(|| format!("failed to create \"{}\"", path.display()))?;
			write_points(arguments, &points, BufWriter::new(file))?;
		}
		None => write_points(arguments, &points, stdout().lock())?,
	}

	eprintln!("sampled {} points", points.len());

	Ok(())
}

fn write_points(arguments: &Subcommand, points: &[Coordinates], mut writer: impl Write) -> Result<()> {
	let rows: Vec<Vec<f64>> = if arguments.raw {
		points.iter().map(|point| vec![point.x(), point.y()]).collect()
	} else {
		project_points(points, arguments.radius)
			.chunks(3)
			.map(<[f64]>::to_vec)
			.collect()
	};

	match arguments.format {
		Format::Csv => {
			let mut csv_writer = csv::Writer::from_writer(writer);
			if arguments.raw {
				csv_writer.write_record(["lng", "lat"])?;
			} else {
				csv_writer.write_record(["x", "y", "z"])?;
			}
			for row in &rows {
				csv_writer.write_record(row.iter().map(ToString::to_string))?;
			}
			csv_writer.flush()?;
		}
		Format::Json => {
			writeln!(writer, "{}", Value::from(rows))?;
			writer.flush()?;
		}
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;

	#[test]
	fn samples_to_csv_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("points.csv");

		run_command(vec![
			"landgrid",
			"sample",
			"-q",
			"../testdata/regions.geojson",
			"--points",
			"48",
			"--seed",
			"7",
			"-o",
			path.to_str().unwrap(),
		])
		.unwrap();

		let content = std::fs::read_to_string(&path).unwrap();
		let mut lines = content.lines();
		assert_eq!(lines.next(), Some("x,y,z"));
		// three polygons with exact area shares of 1/4, 1/4 and 1/2
		assert_eq!(lines.count(), 48);
	}

	#[test]
	fn samples_raw_json() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("points.json");

		run_command(vec![
			"landgrid",
			"sample",
			"-q",
			"../testdata/regions.geojson",
			"--points",
			"48",
			"--seed",
			"7",
			"--raw",
			"--format",
			"json",
			"-o",
			path.to_str().unwrap(),
		])
		.unwrap();

		let content = std::fs::read_to_string(&path).unwrap();
		let value: serde_json::Value = serde_json::from_str(&content).unwrap();
		let rows = value.as_array().unwrap();
		assert_eq!(rows.len(), 48);
		assert_eq!(rows[0].as_array().unwrap().len(), 2);
	}

	#[test]
	fn excluded_features_get_no_points() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("points.json");

		run_command(vec![
			"landgrid",
			"sample",
			"-q",
			"../testdata/regions.geojson",
			"--points",
			"40",
			"--seed",
			"7",
			"--exclude-name",
			"Beta",
			"--raw",
			"--format",
			"json",
			"-o",
			path.to_str().unwrap(),
		])
		.unwrap();

		let content = std::fs::read_to_string(&path).unwrap();
		let value: serde_json::Value = serde_json::from_str(&content).unwrap();
		for row in value.as_array().unwrap() {
			// all points fall in Alpha, the only remaining region
			let lng = row[0].as_f64().unwrap();
			assert!((0.0..=10.0).contains(&lng));
		}
	}

	#[test]
	fn missing_input_fails() {
		let result = run_command(vec!["landgrid", "sample", "-q", "../testdata/absent.geojson"]);
		assert!(result.is_err());
	}
}
