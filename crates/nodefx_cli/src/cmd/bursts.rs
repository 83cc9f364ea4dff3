use nodefx::param::{Result, decode_bursts, decode_legacy_bursts};

use crate::cmd::util::{DecodeArgs, curve_summary, emit_json};

#[derive(clap::Args)]
pub struct Args {
	/// Raw parameter string, for example `0:1:0:constant;int;10`.
	pub raw: String,
	/// Parse the older `;`-delimited five-field layout.
	#[arg(long = "legacy-format")]
	pub legacy_format: bool,
	#[command(flatten)]
	pub decode: DecodeArgs,
	#[arg(long)]
	pub json: bool,
}

/// Decode and print one burst list.
pub fn run(args: Args) -> Result<()> {
	let Args {
		raw,
		legacy_format,
		decode,
		json,
	} = args;

	let opt = decode.options();
	let bursts = if legacy_format { decode_legacy_bursts(&raw, &opt)? } else { decode_bursts(&raw, &opt)? };
	if json {
		return emit_json(&bursts);
	}

	println!("bursts: {}", bursts.len());
	for (idx, event) in bursts.events.iter().enumerate() {
		println!(
			"  [{idx}] time={} cycles={} interval={} count={}",
			event.time,
			event.cycle_count,
			event.repeat_interval,
			curve_summary(&event.count)
		);
	}
	if bursts.dropped_fields > 0 {
		println!("dropped_fields: {}", bursts.dropped_fields);
	}

	Ok(())
}
