mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true, // version flag also works on subcommands
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	#[clap(alias = "dots")]
	/// Sample an area-weighted point cloud from a GeoJSON world
	Sample(tools::sample::Subcommand),

	/// Find the region containing a coordinate
	Locate(tools::locate::Subcommand),

	/// Build the inverse world mask that frames the mapped regions
	Mask(tools::mask::Subcommand),

	/// Show information about a GeoJSON world
	Probe(tools::probe::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	// log level comes from the -q/-v flags
	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::Sample(arguments) => tools::sample::run(arguments),
		Commands::Locate(arguments) => tools::locate::run(arguments),
		Commands::Mask(arguments) => tools::mask::run(arguments),
		Commands::Probe(arguments) => tools::probe::run(arguments),
	}
}

#[cfg(test)]
mod tests {
	use crate::{Cli, run};
	use anyhow::Result;
	use clap::Parser;

	// Parses and runs command-line arguments as the binary would.
	pub fn run_command(arg_vec: Vec<&str>) -> Result<String> {
		let cli = Cli::try_parse_from(arg_vec)?;
		let msg = format!("{cli:?}");
		run(cli)?;
		Ok(msg)
	}

	#[test]
	fn help() {
		let err = run_command(vec!["landgrid"]).unwrap_err().to_string();
		assert!(err.starts_with(
			"Geometry engine for a virtual-land marketplace: area-weighted point sampling, region lookup and map overlays for GeoJSON worlds."
		));
		assert!(err.contains("\nUsage: landgrid [OPTIONS] <COMMAND>"));
	}

	#[test]
	fn version() {
		let err = run_command(vec!["landgrid", "-V"]).unwrap_err().to_string();
		assert!(err.starts_with("landgrid "));
	}

	#[test]
	fn sample_subcommand() {
		let output = run_command(vec!["landgrid", "sample"]).unwrap_err().to_string();
		assert!(output.starts_with("Sample an area-weighted point cloud from a GeoJSON world"));
	}

	#[test]
	fn locate_subcommand() {
		let output = run_command(vec!["landgrid", "locate"]).unwrap_err().to_string();
		assert!(output.starts_with("Find the region containing a coordinate"));
	}

	#[test]
	fn mask_subcommand() {
		let output = run_command(vec!["landgrid", "mask"]).unwrap_err().to_string();
		assert!(output.starts_with("Build the inverse world mask that frames the mapped regions"));
	}

	#[test]
	fn probe_subcommand() {
		let output = run_command(vec!["landgrid", "probe"]).unwrap_err().to_string();
		assert!(output.starts_with("Show information about a GeoJSON world"));
	}
}
