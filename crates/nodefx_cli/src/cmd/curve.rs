use nodefx::param::{Result, SampledCurve, ScalarCurve, decode_scalar_curve};

use crate::cmd::util::{DecodeArgs, emit_json};

#[derive(clap::Args)]
pub struct Args {
	/// Raw parameter string, for example `curve;float;2;1.0;0;1`.
	pub raw: String,
	#[command(flatten)]
	pub decode: DecodeArgs,
	#[arg(long)]
	pub json: bool,
}

/// Decode and print one scalar curve.
pub fn run(args: Args) -> Result<()> {
	let Args { raw, decode, json } = args;

	let curve = decode_scalar_curve(&raw, &decode.options())?;
	if json {
		return emit_json(&curve);
	}

	println!("mode: {}", curve.mode_label());
	match &curve {
		ScalarCurve::Constant { value } => println!("value: {}", value.as_f32()),
		ScalarCurve::RandomBetweenConstants { min, max } => {
			println!("min: {}", min.as_f32());
			println!("max: {}", max.as_f32());
		}
		ScalarCurve::Curve { curve, multiplier } => {
			println!("multiplier: {multiplier}");
			print_samples("samples", curve);
		}
		ScalarCurve::RandomBetweenCurves { min, max, multiplier } => {
			println!("multiplier: {multiplier}");
			print_samples("min", min);
			print_samples("max", max);
		}
	}

	Ok(())
}

fn print_samples(label: &str, curve: &SampledCurve) {
	println!("{label}:");
	for key in &curve.keys {
		println!("  {:.4}: {}", key.position, key.value);
	}
}
