use std::path::PathBuf;

use nodefx::param::{EmitterReport, FieldOutcome, MemorySource, ParamValue, ParameterSource, Result, inspect_emitter};

use crate::cmd::util::{DecodeArgs, curve_summary, emit_json, gradient_summary};

#[derive(clap::Args)]
pub struct Args {
	/// JSON effect definition.
	pub file: PathBuf,
	/// Inspect a single emitter instead of all of them.
	#[arg(long)]
	pub emitter: Option<usize>,
	/// Include parameters missing from the definition.
	#[arg(long = "show-missing")]
	pub show_missing: bool,
	#[command(flatten)]
	pub decode: DecodeArgs,
	#[arg(long)]
	pub json: bool,
}

/// Decode every known parameter of one or all emitters and print the results.
pub fn run(args: Args) -> Result<()> {
	let Args {
		file: path,
		emitter,
		show_missing,
		decode,
		json,
	} = args;

	let source = MemorySource::open(&path)?;
	tracing::debug!(path = %path.display(), emitters = source.emitter_count(), "loaded effect definition");
	let opt = decode.options();
	let indices: Vec<usize> = match emitter {
		Some(idx) => vec![idx],
		None => (0..source.emitter_count()).collect(),
	};

	let mut reports = Vec::with_capacity(indices.len());
	for idx in indices {
		reports.push(inspect_emitter(&source, idx, &opt)?);
	}

	if json {
		return emit_json(&InspectJson {
			path: path.display().to_string(),
			emitter_count: source.emitter_count(),
			emitters: reports.iter().map(|report| emitter_json(report, show_missing)).collect(),
		});
	}

	println!("path: {}", path.display());
	println!("emitter_count: {}", source.emitter_count());
	for report in &reports {
		print_report(report, show_missing);
	}

	Ok(())
}

fn print_report(report: &EmitterReport, show_missing: bool) {
	println!("emitter {}:", report.emitter);
	for row in &report.fields {
		match &row.outcome {
			FieldOutcome::Decoded(value) => println!("  {} = {}", row.spec.name, value_summary(value)),
			FieldOutcome::Missing if show_missing => println!("  {} (missing)", row.spec.name),
			FieldOutcome::Missing => {}
			FieldOutcome::Failed(err) => println!("  {} ! {err}", row.spec.name),
		}
	}

	let failed = report.failed_modules();
	if !failed.is_empty() {
		let names: Vec<&str> = failed.into_iter().collect();
		println!("  disabled modules: {}", names.join(", "));
	}
}

fn value_summary(value: &ParamValue) -> String {
	match value {
		ParamValue::Float(v) => v.to_string(),
		ParamValue::Int(v) => v.to_string(),
		ParamValue::Bool(v) => v.to_string(),
		ParamValue::Vector(items) => format!("{items:?}"),
		ParamValue::Curve(curve) => curve_summary(curve),
		ParamValue::Gradient(gradient) => gradient_summary(gradient),
		ParamValue::Bursts(bursts) => format!("{} burst(s)", bursts.len()),
	}
}

fn emitter_json(report: &EmitterReport, show_missing: bool) -> EmitterJson<'_> {
	let fields = report
		.fields
		.iter()
		.filter_map(|row| {
			let (status, value, error) = match &row.outcome {
				FieldOutcome::Decoded(value) => ("decoded", Some(value), None),
				FieldOutcome::Missing if show_missing => ("missing", None, None),
				FieldOutcome::Missing => return None,
				FieldOutcome::Failed(err) => ("failed", None, Some(err.to_string())),
			};
			Some(FieldJson {
				name: row.spec.name,
				status,
				value,
				error,
			})
		})
		.collect();

	EmitterJson {
		emitter: report.emitter,
		disabled_modules: report.failed_modules().into_iter().collect(),
		fields,
	}
}

#[derive(serde::Serialize)]
struct InspectJson<'a> {
	path: String,
	emitter_count: usize,
	emitters: Vec<EmitterJson<'a>>,
}

#[derive(serde::Serialize)]
struct EmitterJson<'a> {
	emitter: usize,
	disabled_modules: Vec<&'static str>,
	fields: Vec<FieldJson<'a>>,
}

#[derive(serde::Serialize)]
struct FieldJson<'a> {
	name: &'static str,
	status: &'static str,
	#[serde(skip_serializing_if = "Option::is_none")]
	value: Option<&'a ParamValue>,
	#[serde(skip_serializing_if = "Option::is_none")]
	error: Option<String>,
}
