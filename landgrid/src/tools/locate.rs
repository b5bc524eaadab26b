use anyhow::Result;
use clap::Args;
use landgrid_geometry::{
	GeoFeature,
	geojson::read_geojson_file,
	locate::{locate, point_in_feature, resolve_region_key},
};
use std::path::PathBuf;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON file with the purchasable regions
	#[arg(required = true)]
	input: PathBuf,

	/// longitude of the point, in degrees
	#[arg(long, value_name = "float", allow_hyphen_values = true)]
	lng: f64,

	/// latitude of the point, in degrees
	#[arg(long, value_name = "float", allow_hyphen_values = true)]
	lat: f64,
}

/// Resolves a coordinate the way a map click does. A miss is an answer, not
/// an error, so the exit code stays zero.
pub fn run(arguments: &Subcommand) -> Result<()> {
	eprintln!(
		"locating lng {}, lat {} in \"{}\"",
		arguments.lng,
		arguments.lat,
		arguments.input.display()
	);

	let collection = read_geojson_file(&arguments.input)?;

	match resolve_region_key(&collection, arguments.lng, arguments.lat) {
		Some(key) => {
			let name = collection
				.iter()
				.filter(|feature| point_in_feature(feature, arguments.lng, arguments.lat))
				.find(|feature| feature.region_key() == Some(key))
				.and_then(GeoFeature::name);
			match name {
				Some(name) => println!("{key} ({name})"),
				None => println!("{key}"),
			}
		}
		None => match locate(&collection, arguments.lng, arguments.lat) {
			Some(feature) => println!("{} has no region key", feature.name().unwrap_or("the region here")),
			None => println!("no region at lng {}, lat {}", arguments.lng, arguments.lat),
		},
	}

	Ok(())
}
