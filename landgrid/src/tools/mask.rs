use anyhow::{Context, Result};
use clap::Args;
use landgrid_geometry::{GeoCollection, geojson::read_geojson_file, mask::world_mask};
use std::path::PathBuf;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON file with the purchasable regions
	#[arg(required = true)]
	input: PathBuf,

	/// pretty-print the GeoJSON output
	#[arg(long)]
	pretty: bool,

	/// write to this file instead of stdout
	#[arg(long, short, value_name = "file")]
	output: Option<PathBuf>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	eprintln!("building the world mask for \"{}\"", arguments.input.display());

	let collection = read_geojson_file(&arguments.input)?;
	let document = GeoCollection::from(vec![world_mask(&collection)]).to_json();

	let mut text = if arguments.pretty {
		serde_json::to_string_pretty(&document)?
	} else {
		document.to_string()
	};
	text.push('\n');

	match &arguments.output {
		Some(path) => {
			std::fs::write(path, text).with_context(|| format!("failed to write \"{}\"", path.display()))?;
		}
		None => print!("{text}"),
	}

	Ok(())
}
