use uawire_json::{EncodingContext, EncodingError, EncodingLimits, EncodingResult, JsonEncoder};
use uawire_types::localized_text::LocalizedText;
use uawire_types::node_id::NodeId;
use uawire_types::status_code::StatusCode;
use uawire_types::variant::{Variant, VariantArray, VariantTypeId};

fn encode_with(
    ctx: &EncodingContext,
    reversible: bool,
    f: impl FnOnce(&mut JsonEncoder<'_>) -> EncodingResult<()>,
) -> String {
    let mut out = Vec::new();
    let mut encoder = JsonEncoder::new(&mut out, ctx);
    encoder.set_reversible(reversible);
    f(&mut encoder).unwrap();
    encoder.finish().unwrap();
    drop(encoder);
    String::from_utf8(out).unwrap()
}

fn reversible(ctx: &EncodingContext, value: &Variant) -> String {
    encode_with(ctx, true, |e| e.write_variant(value))
}

fn non_reversible(ctx: &EncodingContext, value: &Variant) -> String {
    encode_with(ctx, false, |e| e.write_variant(value))
}

fn int32_matrix() -> Variant {
    VariantArray::new_matrix(
        VariantTypeId::Int32,
        [0, 2, 3, 1, 3, 4].into_iter().map(Variant::Int32).collect(),
        vec![2, 3],
    )
    .unwrap()
    .into()
}

#[test]
fn scalar_variants_reversible() {
    let ctx = EncodingContext::default();
    assert_eq!(
        reversible(&ctx, &Variant::Boolean(true)),
        r#"{"Type":1,"Body":true}"#
    );
    assert_eq!(reversible(&ctx, &Variant::SByte(-1)), r#"{"Type":2,"Body":-1}"#);
    assert_eq!(
        reversible(&ctx, &Variant::Int64(-1)),
        r#"{"Type":8,"Body":"-1"}"#
    );
    assert_eq!(
        reversible(&ctx, &Variant::Float(0.0)),
        r#"{"Type":10,"Body":0.0}"#
    );
    assert_eq!(
        reversible(&ctx, &Variant::from("abc")),
        r#"{"Type":12,"Body":"abc"}"#
    );
    assert_eq!(
        reversible(&ctx, &Variant::StatusCode(StatusCode::GOOD)),
        r#"{"Type":19,"Body":0}"#
    );
    assert_eq!(
        reversible(&ctx, &Variant::from(LocalizedText::new("en", "Running"))),
        r#"{"Type":21,"Body":{"Locale":"en","Text":"Running"}}"#
    );
    assert_eq!(
        reversible(&ctx, &Variant::from(NodeId::new(1, "foo"))),
        r#"{"Type":17,"Body":{"IdType":1,"Id":"foo","Namespace":1}}"#
    );
}

#[test]
fn scalar_variants_non_reversible() {
    let ctx = EncodingContext::default();
    assert_eq!(non_reversible(&ctx, &Variant::Boolean(true)), "true");
    assert_eq!(non_reversible(&ctx, &Variant::UInt64(1000)), r#""1000""#);
    // Composites keep their own non-reversible forms.
    assert_eq!(
        non_reversible(&ctx, &Variant::from(LocalizedText::new("en", "Running"))),
        r#""Running""#
    );
    assert_eq!(
        non_reversible(&ctx, &Variant::StatusCode(StatusCode::GOOD)),
        r#"{"Code":0,"Symbol":"Good"}"#
    );
}

#[test]
fn empty_variant() {
    let ctx = EncodingContext::default();
    assert_eq!(reversible(&ctx, &Variant::Empty), "null");
    assert_eq!(non_reversible(&ctx, &Variant::Empty), "null");

    // Keyed empty variants vanish.
    let json = encode_with(&ctx, true, |e| {
        e.writer().begin_object()?;
        e.write_variant_field("Value", &Variant::Empty)?;
        e.writer().end_object()
    });
    assert_eq!(json, "{}");
}

#[test]
fn one_dimensional_array() {
    let ctx = EncodingContext::default();
    let array: Variant = VariantArray::new(
        VariantTypeId::Int32,
        vec![Variant::Int32(1), Variant::Int32(2), Variant::Int32(3)],
    )
    .into();
    assert_eq!(reversible(&ctx, &array), r#"{"Type":6,"Body":[1,2,3]}"#);
    assert_eq!(non_reversible(&ctx, &array), "[1,2,3]");
}

#[test]
fn matrix_flattens_reversible() {
    let ctx = EncodingContext::default();
    assert_eq!(
        reversible(&ctx, &int32_matrix()),
        r#"{"Type":6,"Body":[0,2,3,1,3,4],"Dimensions":[2,3]}"#
    );
}

#[test]
fn matrix_nests_non_reversible() {
    let ctx = EncodingContext::default();
    assert_eq!(non_reversible(&ctx, &int32_matrix()), "[[0,2,3],[1,3,4]]");
}

#[test]
fn three_dimensional_matrix() {
    let ctx = EncodingContext::default();
    let matrix: Variant = VariantArray::new_matrix(
        VariantTypeId::Byte,
        (0u8..8).map(Variant::Byte).collect(),
        vec![2, 2, 2],
    )
    .unwrap()
    .into();
    assert_eq!(
        reversible(&ctx, &matrix),
        r#"{"Type":3,"Body":[0,1,2,3,4,5,6,7],"Dimensions":[2,2,2]}"#
    );
    assert_eq!(
        non_reversible(&ctx, &matrix),
        "[[[0,1],[2,3]],[[4,5],[6,7]]]"
    );
}

#[test]
fn nested_variant_array() {
    let ctx = EncodingContext::default();
    let array: Variant = VariantArray::new(
        VariantTypeId::Variant,
        vec![
            Variant::Variant(Box::new(Variant::Int32(1))),
            Variant::Variant(Box::new(Variant::from("x"))),
        ],
    )
    .into();
    // Each element is a full variant in reversible mode.
    assert_eq!(
        reversible(&ctx, &array),
        r#"{"Type":24,"Body":[{"Type":6,"Body":1},{"Type":12,"Body":"x"}]}"#
    );
    // And its bare form otherwise.
    assert_eq!(non_reversible(&ctx, &array), r#"[1,"x"]"#);
}

#[test]
fn standalone_matrix_has_no_envelope() {
    let ctx = EncodingContext::default();
    let Variant::Array(matrix) = int32_matrix() else {
        unreachable!();
    };
    assert_eq!(
        encode_with(&ctx, true, |e| e.write_matrix(&matrix)),
        "[[0,2,3],[1,3,4]]"
    );
    assert_eq!(
        encode_with(&ctx, false, |e| e.write_matrix(&matrix)),
        "[[0,2,3],[1,3,4]]"
    );
}

#[test]
fn array_length_limit() {
    let ctx = EncodingContext {
        limits: EncodingLimits {
            max_array_length: 2,
            ..EncodingLimits::default()
        },
        ..EncodingContext::default()
    };
    let array: Variant = VariantArray::new(
        VariantTypeId::Int32,
        vec![Variant::Int32(1), Variant::Int32(2), Variant::Int32(3)],
    )
    .into();

    let mut out = Vec::new();
    let mut encoder = JsonEncoder::new(&mut out, &ctx);
    let err = encoder.write_variant(&array).unwrap_err();
    assert!(matches!(err, EncodingError::LimitExceeded("array length")));
}

#[test]
fn string_length_limit() {
    let ctx = EncodingContext {
        limits: EncodingLimits {
            max_string_length: 4,
            ..EncodingLimits::default()
        },
        ..EncodingContext::default()
    };

    let mut out = Vec::new();
    let mut encoder = JsonEncoder::new(&mut out, &ctx);
    let err = encoder.write_string("too long").unwrap_err();
    assert!(matches!(err, EncodingError::LimitExceeded("string length")));
}

#[test]
fn recursion_depth_limit() {
    let ctx = EncodingContext::default();
    let nested = (0..200).fold(Variant::Boolean(true), |inner, _| {
        Variant::Variant(Box::new(inner))
    });

    let mut out = Vec::new();
    let mut encoder = JsonEncoder::new(&mut out, &ctx);
    let err = encoder.write_variant(&nested).unwrap_err();
    assert!(matches!(err, EncodingError::LimitExceeded("recursion depth")));
}

#[test]
fn array_recursion_depth_limit() {
    let ctx = EncodingContext::default();
    // Arrays nested inside arrays are bounded like nested variants.
    let nested = (0..200).fold(Variant::Boolean(true), |inner, _| {
        VariantArray::new(VariantTypeId::Variant, vec![inner]).into()
    });

    let mut out = Vec::new();
    let mut encoder = JsonEncoder::new(&mut out, &ctx);
    let err = encoder.write_variant(&nested).unwrap_err();
    assert!(matches!(err, EncodingError::LimitExceeded("recursion depth")));
}

#[test]
fn message_size_limit() {
    let ctx = EncodingContext {
        limits: EncodingLimits {
            max_message_size: 8,
            ..EncodingLimits::default()
        },
        ..EncodingContext::default()
    };

    let mut out = Vec::new();
    let mut encoder = JsonEncoder::new(&mut out, &ctx);
    let err = encoder
        .write_variant(&Variant::from("spills over the cap"))
        .unwrap_err();
    assert!(matches!(err, EncodingError::LimitExceeded("message size")));
}

#[test]
fn unlimited_limits_disable_caps() {
    let ctx = EncodingContext {
        limits: EncodingLimits::unlimited(),
        ..EncodingContext::default()
    };
    let nested = (0..200).fold(Variant::Boolean(true), |inner, _| {
        Variant::Variant(Box::new(inner))
    });
    let json = encode_with(&ctx, true, |e| e.write_variant(&nested));
    assert_eq!(json.matches(r#"{"Type":24,"Body":"#).count(), 200);
    assert!(json.ends_with(&"}".repeat(201)));
}
