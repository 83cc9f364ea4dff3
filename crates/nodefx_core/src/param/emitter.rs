use std::collections::BTreeSet;

use serde::Serialize;

use crate::param::{BurstList, ColorGradient, DecodeOptions, ParamError, ParameterSource, Result, ScalarCurve};

/// How a named parameter is stored and decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
	/// Plain float value.
	Float,
	/// Plain integer value, usually an enumeration index.
	Int,
	/// Integer or boolean flag.
	Bool,
	/// Fixed number of float components.
	Vector(usize),
	/// Scalar curve string.
	Curve,
	/// Color gradient string.
	Gradient,
	/// Burst list string.
	Bursts,
}

/// Known parameter of an emitter definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
	/// Attribute name, `<module>_<field>`.
	pub name: &'static str,
	/// Storage kind.
	pub kind: ParamKind,
}

impl ParamSpec {
	const fn new(name: &'static str, kind: ParamKind) -> Self {
		Self { name, kind }
	}

	/// Module prefix of the parameter name.
	pub fn module(&self) -> &'static str {
		module_of(self.name)
	}
}

/// Parameters the effect builder maps onto a particle system, module by module.
pub const EMITTER_PARAMS: &[ParamSpec] = &[
	ParamSpec::new("main_duration", ParamKind::Float),
	ParamSpec::new("main_looping", ParamKind::Bool),
	ParamSpec::new("main_prewarm", ParamKind::Bool),
	ParamSpec::new("main_startDelay", ParamKind::Float),
	ParamSpec::new("main_startLifetime", ParamKind::Curve),
	ParamSpec::new("main_startSpeed", ParamKind::Curve),
	ParamSpec::new("main_startSize", ParamKind::Curve),
	ParamSpec::new("main_3DStartRotation", ParamKind::Bool),
	ParamSpec::new("main_startRotation", ParamKind::Curve),
	ParamSpec::new("main_rotationVariance", ParamKind::Float),
	ParamSpec::new("main_startColor", ParamKind::Gradient),
	ParamSpec::new("main_gravityModifier", ParamKind::Curve),
	ParamSpec::new("main_simulationSpace", ParamKind::Int),
	ParamSpec::new("main_simulationSpeed", ParamKind::Float),
	ParamSpec::new("main_deltaTime", ParamKind::Bool),
	ParamSpec::new("main_scalingMode", ParamKind::Int),
	ParamSpec::new("main_playOnAwake", ParamKind::Bool),
	ParamSpec::new("main_emitterVelocity", ParamKind::Int),
	ParamSpec::new("main_maxParticles", ParamKind::Int),
	ParamSpec::new("emission_enabled", ParamKind::Bool),
	ParamSpec::new("emission_rateOverTime", ParamKind::Curve),
	ParamSpec::new("emission_rateOverDistance", ParamKind::Curve),
	ParamSpec::new("emission_bursts", ParamKind::Bursts),
	ParamSpec::new("shape_enabled", ParamKind::Bool),
	ParamSpec::new("shape_shape", ParamKind::Int),
	ParamSpec::new("shape_radius", ParamKind::Float),
	ParamSpec::new("shape_radiusThickness", ParamKind::Float),
	ParamSpec::new("shape_position", ParamKind::Vector(3)),
	ParamSpec::new("shape_rotation", ParamKind::Vector(3)),
	ParamSpec::new("shape_scale", ParamKind::Vector(3)),
	ParamSpec::new("velocityOverLifetime_enabled", ParamKind::Bool),
	ParamSpec::new("velocityOverLifetime_velocity", ParamKind::Vector(3)),
	ParamSpec::new("limitVelocityOverLifetime_enabled", ParamKind::Bool),
	ParamSpec::new("limitVelocityOverLifetime_separateAxes", ParamKind::Bool),
	ParamSpec::new("limitVelocityOverLifetime_limit", ParamKind::Curve),
	ParamSpec::new("limitVelocityOverLifetime_dampen", ParamKind::Float),
	ParamSpec::new("inheritVelocity_enabled", ParamKind::Bool),
	ParamSpec::new("inheritVelocity_mode", ParamKind::Int),
	ParamSpec::new("inheritVelocity_multiplier", ParamKind::Curve),
	ParamSpec::new("forceOverLifetime_enabled", ParamKind::Bool),
	ParamSpec::new("forceOverLifetime_force", ParamKind::Vector(3)),
	ParamSpec::new("forceOverLifetime_randomized", ParamKind::Bool),
	ParamSpec::new("colorOverLifetime_enabled", ParamKind::Bool),
	ParamSpec::new("colorOverLifetime_color", ParamKind::Gradient),
	ParamSpec::new("colorBySpeed_enabled", ParamKind::Bool),
	ParamSpec::new("colorBySpeed_color", ParamKind::Gradient),
	ParamSpec::new("colorBySpeed_range", ParamKind::Vector(2)),
	ParamSpec::new("sizeOverLifetime_enabled", ParamKind::Bool),
	ParamSpec::new("sizeOverLifetime_separateAxes", ParamKind::Bool),
	ParamSpec::new("sizeOverLifetime_size", ParamKind::Curve),
	ParamSpec::new("sizeBySpeed_enabled", ParamKind::Bool),
	ParamSpec::new("sizeBySpeed_separateAxes", ParamKind::Bool),
	ParamSpec::new("sizeBySpeed_size", ParamKind::Curve),
	ParamSpec::new("sizeBySpeed_range", ParamKind::Vector(2)),
	ParamSpec::new("rotationOverLifetime_enabled", ParamKind::Bool),
	ParamSpec::new("rotationOverLifetime_separateAxes", ParamKind::Bool),
	ParamSpec::new("rotationOverLifetime_angularVelocity", ParamKind::Vector(3)),
	ParamSpec::new("rotationBySpeed_enabled", ParamKind::Bool),
	ParamSpec::new("rotationBySpeed_separateAxes", ParamKind::Bool),
	ParamSpec::new("rotationBySpeed_angularVelocity", ParamKind::Vector(3)),
	ParamSpec::new("rotationBySpeed_range", ParamKind::Vector(2)),
	ParamSpec::new("textureSheetAnimation_enabled", ParamKind::Bool),
	ParamSpec::new("textureSheetAnimation_mode", ParamKind::Int),
	ParamSpec::new("textureSheetAnimation_animation", ParamKind::Int),
	ParamSpec::new("textureSheetAnimation_frame", ParamKind::Curve),
	ParamSpec::new("textureSheetAnimation_startFrame", ParamKind::Curve),
	ParamSpec::new("textureSheetAnimation_cycles", ParamKind::Int),
	ParamSpec::new("textureSheetAnimation_flipU", ParamKind::Float),
	ParamSpec::new("textureSheetAnimation_flipV", ParamKind::Float),
];

/// Decoded value of one parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ParamValue {
	/// Float value.
	Float(f32),
	/// Integer value.
	Int(i32),
	/// Flag value.
	Bool(bool),
	/// Vector components.
	Vector(Vec<f32>),
	/// Scalar curve.
	Curve(ScalarCurve),
	/// Color gradient.
	Gradient(ColorGradient),
	/// Burst list.
	Bursts(BurstList),
}

/// Result of decoding one parameter.
#[derive(Debug)]
pub enum FieldOutcome {
	/// Parameter decoded.
	Decoded(ParamValue),
	/// Parameter not present in the definition.
	Missing,
	/// Parameter present but not decodable.
	Failed(ParamError),
}

/// One row of an emitter report.
#[derive(Debug)]
pub struct FieldReport {
	/// Parameter name and kind.
	pub spec: ParamSpec,
	/// Decode outcome.
	pub outcome: FieldOutcome,
}

/// Per-field decode results for one emitter.
#[derive(Debug)]
pub struct EmitterReport {
	/// Emitter index.
	pub emitter: usize,
	/// One row per entry of [`EMITTER_PARAMS`], in table order.
	pub fields: Vec<FieldReport>,
}

impl EmitterReport {
	/// Outcome for a parameter name.
	pub fn get(&self, name: &str) -> Option<&FieldOutcome> {
		self.fields.iter().find(|row| row.spec.name == name).map(|row| &row.outcome)
	}

	/// Decoded value for a parameter name.
	pub fn value(&self, name: &str) -> Option<&ParamValue> {
		match self.get(name)? {
			FieldOutcome::Decoded(value) => Some(value),
			FieldOutcome::Missing | FieldOutcome::Failed(_) => None,
		}
	}

	/// Rows that failed to decode.
	pub fn failures(&self) -> impl Iterator<Item = (&'static str, &ParamError)> {
		self.fields.iter().filter_map(|row| match &row.outcome {
			FieldOutcome::Failed(err) => Some((row.spec.name, err)),
			FieldOutcome::Decoded(_) | FieldOutcome::Missing => None,
		})
	}

	/// Modules owning at least one failed field, sorted. Callers disable these.
	pub fn failed_modules(&self) -> BTreeSet<&'static str> {
		self.fields
			.iter()
			.filter(|row| matches!(row.outcome, FieldOutcome::Failed(_)))
			.map(|row| row.spec.module())
			.collect()
	}
}

/// Decode every known parameter of `emitter` independently.
///
/// A failing field is recorded and never stops its siblings; only an
/// out-of-range emitter index fails the call.
pub fn inspect_emitter<S: ParameterSource + ?Sized>(source: &S, emitter: usize, opt: &DecodeOptions) -> Result<EmitterReport> {
	let count = source.emitter_count();
	if emitter >= count {
		return Err(ParamError::EmitterOutOfRange { emitter, count });
	}

	let fields = EMITTER_PARAMS
		.iter()
		.map(|spec| {
			let outcome = match read_value(source, emitter, spec, opt) {
				Ok(value) => FieldOutcome::Decoded(value),
				Err(err) if err.is_missing() => FieldOutcome::Missing,
				Err(err) => {
					tracing::warn!(emitter, param = spec.name, error = %err, "parameter failed to decode");
					FieldOutcome::Failed(err)
				}
			};
			FieldReport { spec: *spec, outcome }
		})
		.collect();

	Ok(EmitterReport { emitter, fields })
}

fn read_value<S: ParameterSource + ?Sized>(source: &S, emitter: usize, spec: &ParamSpec, opt: &DecodeOptions) -> Result<ParamValue> {
	let name = spec.name;
	Ok(match spec.kind {
		ParamKind::Float => ParamValue::Float(source.read_f32(emitter, name, 0)?),
		ParamKind::Int => ParamValue::Int(source.read_i32(emitter, name, 0)?),
		ParamKind::Bool => ParamValue::Bool(source.read_bool(emitter, name, 0)?),
		ParamKind::Vector(len) => ParamValue::Vector(source.read_vector(emitter, name, len)?),
		ParamKind::Curve => ParamValue::Curve(read_curve_or_float(source, emitter, name, opt)?),
		ParamKind::Gradient => ParamValue::Gradient(source.read_gradient(emitter, name, opt)?),
		ParamKind::Bursts => ParamValue::Bursts(source.read_bursts(emitter, name, opt)?),
	})
}

// Some exporters write curve-capable parameters as a bare number.
fn read_curve_or_float<S: ParameterSource + ?Sized>(source: &S, emitter: usize, name: &str, opt: &DecodeOptions) -> Result<ScalarCurve> {
	let raw = source.read_parameter(emitter, name, 0)?;
	if let Ok(value) = raw.trim().parse::<f32>() {
		return Ok(ScalarCurve::constant(value));
	}
	source.read_curve(emitter, name, opt)
}

fn module_of(name: &'static str) -> &'static str {
	name.split_once('_').map_or(name, |(module, _)| module)
}
