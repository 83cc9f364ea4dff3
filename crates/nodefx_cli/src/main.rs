#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "nodefx", about = "NodeFX effect parameter decoding tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Decode a scalar curve parameter string.
	Curve(cmd::curve::Args),
	/// Decode a color gradient parameter string.
	Gradient(cmd::gradient::Args),
	/// Decode a burst list parameter string.
	Bursts(cmd::bursts::Args),
	/// Decode every known parameter of a JSON effect definition.
	Inspect(cmd::inspect::Args),
}

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nodefx=warn")))
		.with_writer(std::io::stderr)
		.init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> nodefx::param::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Curve(args) => cmd::curve::run(args),
		Commands::Gradient(args) => cmd::gradient::run(args),
		Commands::Bursts(args) => cmd::bursts::run(args),
		Commands::Inspect(args) => cmd::inspect::run(args),
	}
}
