use crate::param::{DecodeOptions, Number, ParamError, RandomCurveLayout, SampledCurve, ScalarCurve, decode_scalar_curve};

fn decode(raw: &str) -> ScalarCurve {
	decode_scalar_curve(raw, &DecodeOptions::default()).expect("curve decodes")
}

fn values(curve: &SampledCurve) -> Vec<f32> {
	curve.keys.iter().map(|key| key.value).collect()
}

fn positions(curve: &SampledCurve) -> Vec<f32> {
	curve.keys.iter().map(|key| key.position).collect()
}

#[test]
fn float_constant_round_trips_value() {
	assert_eq!(decode("constant;float;3.25"), ScalarCurve::Constant { value: Number::Float(3.25) });
}

#[test]
fn int_constant_stays_integer() {
	assert_eq!(decode("constant;int;-7"), ScalarCurve::Constant { value: Number::Int(-7) });
}

#[test]
fn int_random_constants_are_exact() {
	assert_eq!(
		decode("randomConstant;int;2;9"),
		ScalarCurve::RandomBetweenConstants {
			min: Number::Int(2),
			max: Number::Int(9),
		}
	);
}

#[test]
fn random_constants_do_not_require_ordered_bounds() {
	assert_eq!(
		decode("randomConstant;float;5;1.5"),
		ScalarCurve::RandomBetweenConstants {
			min: Number::Float(5.0),
			max: Number::Float(1.5),
		}
	);
}

#[test]
fn int_constant_rejects_fractional_text() {
	let err = decode_scalar_curve("constant;int;2.5", &DecodeOptions::default()).expect_err("fractional int should fail");
	assert!(matches!(err, ParamError::MalformedValue { field: 2, .. }));
}

#[test]
fn sampled_curve_keeps_values_and_spans_unit_range() {
	let ScalarCurve::Curve { curve, multiplier } = decode("curve;float;4;1.0;0.0;0.3;0.6;1.0") else {
		panic!("expected sampled curve");
	};
	assert_eq!(multiplier, 1.0);
	assert_eq!(values(&curve), [0.0, 0.3, 0.6, 1.0]);
	let positions = positions(&curve);
	assert_eq!(positions.first().copied(), Some(0.0));
	assert_eq!(positions.last().copied(), Some(1.0));
	assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "positions must increase: {positions:?}");
}

#[test]
fn single_sample_curve_sits_at_zero() {
	let ScalarCurve::Curve { curve, .. } = decode("curve;float;1;2.0;0.5") else {
		panic!("expected sampled curve");
	};
	assert_eq!(positions(&curve), [0.0]);
	assert_eq!(curve.evaluate(0.7), 0.5);
}

#[test]
fn int_curve_samples_widen_to_float() {
	let ScalarCurve::Curve { curve, .. } = decode("curve;int;3;1;1;2;3") else {
		panic!("expected sampled curve");
	};
	assert_eq!(values(&curve), [1.0, 2.0, 3.0]);
}

#[test]
fn extra_trailing_samples_are_ignored() {
	let ScalarCurve::Curve { curve, .. } = decode("curve;float;2;1;0;1;9;9") else {
		panic!("expected sampled curve");
	};
	assert_eq!(values(&curve), [0.0, 1.0]);
}

#[test]
fn curve_with_too_few_samples_names_missing_field() {
	let err = decode_scalar_curve("curve;float;4;1.0;0.0;0.3", &DecodeOptions::default()).expect_err("short curve should fail");
	assert!(matches!(err, ParamError::MalformedValue { field: 6, found: None, .. }));
}

#[test]
fn curve_rejects_zero_samples() {
	let err = decode_scalar_curve("curve;float;0;1.0", &DecodeOptions::default()).expect_err("zero samples should fail");
	assert!(matches!(err, ParamError::MalformedValue { field: 2, .. }));
}

#[test]
fn curve_honors_sample_limit() {
	let opt = DecodeOptions {
		max_samples: 2,
		..DecodeOptions::default()
	};
	let err = decode_scalar_curve("curve;float;3;1;0;0;0", &opt).expect_err("oversized curve should fail");
	assert!(matches!(err, ParamError::SampleCountTooLarge { count: 3, max: 2 }));
}

#[test]
fn packed_random_curves_read_consecutive_blocks() {
	let ScalarCurve::RandomBetweenCurves { min, max, multiplier } = decode("randomCurve;float;2;0.5;0.1;0.2;0.8;0.9") else {
		panic!("expected random curves");
	};
	assert_eq!(multiplier, 0.5);
	assert_eq!(values(&min), [0.1, 0.2]);
	assert_eq!(values(&max), [0.8, 0.9]);
}

#[test]
fn legacy_random_curves_read_max_block_at_fixed_offset() {
	let mut fields = vec!["randomCurve".to_owned(), "float".to_owned(), "2".to_owned(), "2.0".to_owned()];
	fields.resize(RandomCurveLayout::LEGACY_MAX_OFFSET + 2, "0".to_owned());
	fields[4] = "0.1".to_owned();
	fields[5] = "0.2".to_owned();
	fields[68] = "0.7".to_owned();
	fields[69] = "0.9".to_owned();
	let raw = fields.join(";");

	let curve = decode_scalar_curve(&raw, &DecodeOptions::legacy()).expect("legacy random curve decodes");
	let ScalarCurve::RandomBetweenCurves { min, max, multiplier } = curve else {
		panic!("expected random curves");
	};
	assert_eq!(multiplier, 2.0);
	assert_eq!(values(&min), [0.1, 0.2]);
	assert_eq!(values(&max), [0.7, 0.9]);
}

#[test]
fn legacy_layout_fails_on_short_packed_data() {
	let err = decode_scalar_curve("randomCurve;float;2;0.5;0.1;0.2;0.8;0.9", &DecodeOptions::legacy()).expect_err("packed data is too short for legacy layout");
	assert!(matches!(err, ParamError::MalformedValue { field: 68, found: None, .. }));
}

#[test]
fn vector_kind_is_not_implemented() {
	for raw in ["constant;vector;{1,2,3}", "randomConstant;vector;1;2", "curve;vector;1;1;1"] {
		let err = decode_scalar_curve(raw, &DecodeOptions::default()).expect_err("vector kind should fail");
		assert!(matches!(err, ParamError::NotImplemented { .. }), "unexpected error for {raw}: {err}");
	}
}

#[test]
fn unknown_kind_is_malformed_field_one() {
	let err = decode_scalar_curve("constant;double;1", &DecodeOptions::default()).expect_err("unknown kind should fail");
	assert!(matches!(err, ParamError::MalformedValue { field: 1, .. }));
}

#[test]
fn unknown_tag_is_reported() {
	let err = decode_scalar_curve("spline;float;1", &DecodeOptions::default()).expect_err("unknown tag should fail");
	assert!(matches!(err, ParamError::UnknownVariant { ref tag } if tag == "spline"));
}

#[test]
fn empty_input_is_unknown_variant() {
	let err = decode_scalar_curve("", &DecodeOptions::default()).expect_err("empty input should fail");
	assert!(matches!(err, ParamError::UnknownVariant { ref tag } if tag.is_empty()));
}

#[test]
fn decoding_twice_yields_equal_values() {
	let raw = "randomCurve;float;3;1.5;0;0.5;1;1;0.5;0";
	assert_eq!(decode(raw), decode(raw));
}

#[test]
fn evaluate_interpolates_and_scales() {
	let curve = decode("curve;float;3;2.0;0;1;0");
	assert_eq!(curve.evaluate(0.0, 0.0), 0.0);
	assert_eq!(curve.evaluate(0.25, 0.0), 1.0);
	assert_eq!(curve.evaluate(0.5, 0.0), 2.0);
	assert_eq!(curve.evaluate(2.0, 0.0), 0.0);
}

#[test]
fn evaluate_blends_random_bounds() {
	let constants = decode("randomConstant;int;2;10");
	assert_eq!(constants.evaluate(0.3, 0.0), 2.0);
	assert_eq!(constants.evaluate(0.3, 0.5), 6.0);
	assert_eq!(constants.evaluate(0.3, 4.0), 10.0);

	let curves = decode("randomCurve;float;2;1;0;0;1;1");
	assert_eq!(curves.evaluate(0.5, 0.5), 0.5);
}

#[test]
fn unbounded_sample_limit_fails_cleanly_on_short_input() {
	let opt = DecodeOptions {
		max_samples: usize::MAX,
		..DecodeOptions::default()
	};
	let huge = usize::MAX.to_string();
	for tag in ["curve", "randomCurve"] {
		let raw = format!("{tag};float;{huge};1");
		let err = decode_scalar_curve(&raw, &opt).expect_err("declared count exceeds available fields");
		assert!(matches!(err, ParamError::MalformedValue { field: 4, found: None, .. }), "unexpected error for {tag}: {err}");
	}
}

#[test]
fn legacy_layout_rejects_overlapping_blocks() {
	let samples = RandomCurveLayout::LEGACY_MAX_SAMPLES + 1;
	let values = vec!["0"; samples * 2].join(";");
	let raw = format!("randomCurve;float;{samples};1;{values}");

	let err = decode_scalar_curve(&raw, &DecodeOptions::legacy()).expect_err("legacy blocks would overlap");
	assert!(matches!(err, ParamError::MalformedValue { field: 2, .. }));

	decode_scalar_curve(&raw, &DecodeOptions::default()).expect("packed layout has no overlap");
}
