use crate::param::{ColorGradient, DecodeOptions, EmitterDefinition, MemorySource, ParamError, ParameterSource, ScalarCurve};

fn source() -> MemorySource {
	MemorySource::new().with_emitter(
		EmitterDefinition::new()
			.with("main_duration", ["5.0"])
			.with("main_looping", ["1"])
			.with("main_prewarm", ["false"])
			.with("main_maxParticles", ["1000"])
			.with("shape_position", ["1", "", "3"])
			.with("main_startLifetime", ["randomConstant;float;1;2"])
			.with("main_startColor", ["constant;vector;{1,1,1,1}"])
			.with("emission_bursts", ["0:1:0:constant;int;30"]),
	)
}

#[test]
fn scalar_reads_parse_text_values() {
	let source = source();
	assert_eq!(source.emitter_count(), 1);
	assert_eq!(source.parameter_count(0).expect("emitter exists"), 8);
	assert_eq!(source.read_f32(0, "main_duration", 0).expect("float reads"), 5.0);
	assert_eq!(source.read_i32(0, "main_maxParticles", 0).expect("int reads"), 1000);
	assert!(source.read_bool(0, "main_looping", 0).expect("flag reads"));
	assert!(!source.read_bool(0, "main_prewarm", 0).expect("flag reads"));
}

#[test]
fn vector_reads_fill_gaps_with_zero() {
	let source = source();
	assert_eq!(source.read_vector(0, "shape_position", 4).expect("vector reads"), [1.0, 0.0, 3.0, 0.0]);
}

#[test]
fn vector_read_requires_first_component() {
	let err = source().read_vector(0, "shape_scale", 3).expect_err("absent vector should fail");
	assert!(err.is_missing());
}

#[test]
fn decoder_reads_delegate_to_decoders() {
	let source = source();
	let opt = DecodeOptions::default();
	assert!(matches!(
		source.read_curve(0, "main_startLifetime", &opt).expect("curve reads"),
		ScalarCurve::RandomBetweenConstants { .. }
	));
	assert!(matches!(
		source.read_gradient(0, "main_startColor", &opt).expect("gradient reads"),
		ColorGradient::SingleColor { .. }
	));
	assert_eq!(source.read_bursts(0, "emission_bursts", &opt).expect("bursts read").len(), 1);
}

#[test]
fn missing_parameter_and_emitter_are_reported() {
	let source = source();
	let err = source.read_parameter(0, "noise_strength", 0).expect_err("missing parameter should fail");
	assert!(matches!(err, ParamError::ParameterNotFound { emitter: 0, index: 0, .. }));

	let err = source.read_parameter(3, "main_duration", 0).expect_err("missing emitter should fail");
	assert!(matches!(err, ParamError::EmitterOutOfRange { emitter: 3, count: 1 }));
}

#[test]
fn json_definition_accepts_text_numbers_and_flags() {
	let json = br#"{
		"emitters": [
			{ "attributes": { "main_duration": [2.5], "main_looping": [true], "main_startSpeed": ["constant;float;4"] } },
			{}
		]
	}"#;
	let source = MemorySource::from_json_slice(json).expect("definition parses");

	assert_eq!(source.emitter_count(), 2);
	assert_eq!(source.read_parameter(0, "main_duration", 0).expect("value exists"), "2.5");
	assert!(source.read_bool(0, "main_looping", 0).expect("flag reads"));
	assert_eq!(source.parameter_count(1).expect("emitter exists"), 0);
}

#[test]
fn json_definition_rejects_bad_layout() {
	let err = MemorySource::from_json_slice(br#"{"emitters": 3}"#).expect_err("bad layout should fail");
	assert!(matches!(err, ParamError::Json(_)));
}

#[test]
fn fixture_definition_opens() {
	let source = MemorySource::open(nodefx_testkit::fixture_path("fountain.json")).expect("fixture opens");
	assert!(source.emitter_count() >= 1);
}

#[test]
fn bad_typed_value_names_the_parameter() {
	let source = MemorySource::new().with_emitter(EmitterDefinition::new().with("main_duration", ["long"]).with("shape_scale", ["1", "wide"]));

	let err = source.read_f32(0, "main_duration", 0).expect_err("text is not a float");
	match &err {
		ParamError::InvalidParameter { emitter, name, index, found, .. } => {
			assert_eq!(*emitter, 0);
			assert_eq!(name, "main_duration");
			assert_eq!(*index, 0);
			assert_eq!(&**found, "long");
		}
		other => panic!("unexpected error: {other}"),
	}
	assert!(err.to_string().contains("main_duration"), "message should name the parameter: {err}");

	let err = source.read_vector(0, "shape_scale", 3).expect_err("second component is not a float");
	assert!(matches!(err, ParamError::InvalidParameter { index: 1, .. }));
}
