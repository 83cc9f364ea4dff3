use nodefx::param::{ColorGradient, Result, decode_gradient};

use crate::cmd::util::{DecodeArgs, emit_json, render_color};

#[derive(clap::Args)]
pub struct Args {
	/// Raw parameter string, for example `gradient;;2;0;{1,0,0,1};{0,0,1,1}`.
	pub raw: String,
	#[command(flatten)]
	pub decode: DecodeArgs,
	#[arg(long)]
	pub json: bool,
}

/// Decode and print one color gradient.
pub fn run(args: Args) -> Result<()> {
	let Args { raw, decode, json } = args;

	let gradient = decode_gradient(&raw, &decode.options())?;
	if json {
		return emit_json(&gradient);
	}

	println!("mode: {}", gradient.mode_label());
	match &gradient {
		ColorGradient::SingleColor { color } => println!("color: {}", render_color(*color)),
		ColorGradient::Gradient { gradient } => {
			println!("blend: {:?}", gradient.mode);
			println!("keys:");
			for key in &gradient.keys {
				println!("  {:.4}: {}", key.position, render_color(key.color));
			}
		}
		ColorGradient::RandomBetweenColors | ColorGradient::RandomBetweenGradients => println!("note: mode carries no data"),
	}

	Ok(())
}
