use std::str::FromStr;

use uawire_common::date_time::UaDateTime;
use uawire_common::guid::Guid;
use uawire_json::{EncodingContext, EncodingResult, JsonEncoder};
use uawire_types::byte_string::ByteString;
use uawire_types::data_value::DataValue;
use uawire_types::diagnostic_info::DiagnosticInfo;
use uawire_types::extension_object::ExtensionObject;
use uawire_types::localized_text::LocalizedText;
use uawire_types::node_id::{ExpandedNodeId, NodeId};
use uawire_types::qualified_name::QualifiedName;
use uawire_types::status_code::StatusCode;
use uawire_types::variant::Variant;

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

fn reversible(
    ctx: &EncodingContext,
    f: impl FnOnce(&mut JsonEncoder<'_>) -> EncodingResult<()>,
) -> String {
    encode_with(ctx, true, f)
}

fn non_reversible(
    ctx: &EncodingContext,
    f: impl FnOnce(&mut JsonEncoder<'_>) -> EncodingResult<()>,
) -> String {
    encode_with(ctx, false, f)
}

fn ctx_with_namespaces() -> EncodingContext {
    let mut ctx = EncodingContext::default();
    ctx.namespaces.push("urn:factory:devices");
    ctx.namespaces.push("urn:factory:sensors");
    ctx.servers.push("urn:east:server");
    ctx.servers.push("urn:west:server");
    ctx
}

#[test]
fn node_id_numeric() {
    let ctx = EncodingContext::default();
    assert_eq!(
        reversible(&ctx, |e| e.write_node_id(&NodeId::new(0, 1u32))),
        r#"{"Id":1}"#
    );
    assert_eq!(
        reversible(&ctx, |e| e.write_node_id(&NodeId::new(10, 5u32))),
        r#"{"Id":5,"Namespace":10}"#
    );
}

#[test]
fn node_id_string() {
    let ctx = EncodingContext::default();
    assert_eq!(
        reversible(&ctx, |e| e.write_node_id(&NodeId::new(1, "foo"))),
        r#"{"IdType":1,"Id":"foo","Namespace":1}"#
    );
}

#[test]
fn node_id_guid_and_opaque() {
    let ctx = EncodingContext::default();
    let guid = Guid::from_str("995a9546-cd91-4393-b1c8-a83851f88d6a").unwrap();
    assert_eq!(
        reversible(&ctx, |e| e.write_node_id(&NodeId::new(1, guid))),
        r#"{"IdType":2,"Id":"995A9546-CD91-4393-B1C8-A83851F88D6A","Namespace":1}"#
    );

    let opaque = ByteString::from_base64("aGVsbG8gd29ybGQ=").unwrap();
    assert_eq!(
        reversible(&ctx, |e| e.write_node_id(&NodeId::new(1, opaque))),
        r#"{"IdType":3,"Id":"aGVsbG8gd29ybGQ=","Namespace":1}"#
    );
}

#[test]
fn node_id_namespace_resolution() {
    let ctx = ctx_with_namespaces();

    // Index 2 resolves to a URI in non-reversible mode.
    assert_eq!(
        non_reversible(&ctx, |e| e.write_node_id(&NodeId::new(2, "foo"))),
        r#"{"IdType":1,"Id":"foo","Namespace":"urn:factory:sensors"}"#
    );
    // Index 1 is always numeric.
    assert_eq!(
        non_reversible(&ctx, |e| e.write_node_id(&NodeId::new(1, "foo"))),
        r#"{"IdType":1,"Id":"foo","Namespace":1}"#
    );
    // An index missing from the table falls back to the number.
    assert_eq!(
        non_reversible(&ctx, |e| e.write_node_id(&NodeId::new(9, "foo"))),
        r#"{"IdType":1,"Id":"foo","Namespace":9}"#
    );
    // Reversible mode never resolves.
    assert_eq!(
        reversible(&ctx, |e| e.write_node_id(&NodeId::new(2, "foo"))),
        r#"{"IdType":1,"Id":"foo","Namespace":2}"#
    );
}

#[test]
fn expanded_node_id() {
    let ctx = ctx_with_namespaces();

    assert_eq!(
        reversible(&ctx, |e| e.write_expanded_node_id(&ExpandedNodeId::new(
            NodeId::new(0, 1u32)
        ))),
        r#"{"Id":1}"#
    );

    // An attached URI overrides the numeric index in both modes.
    let id = ExpandedNodeId::new(NodeId::new(1, 1u32)).with_namespace_uri("urn:own:namespace");
    assert_eq!(
        reversible(&ctx, |e| e.write_expanded_node_id(&id)),
        r#"{"Id":1,"Namespace":"urn:own:namespace"}"#
    );
    assert_eq!(
        non_reversible(&ctx, |e| e.write_expanded_node_id(&id)),
        r#"{"Id":1,"Namespace":"urn:own:namespace"}"#
    );
}

#[test]
fn expanded_node_id_server_index() {
    let ctx = ctx_with_namespaces();

    let id = ExpandedNodeId::new(NodeId::new(0, 7u32)).with_server_index(1);
    assert_eq!(
        reversible(&ctx, |e| e.write_expanded_node_id(&id)),
        r#"{"Id":7,"ServerUri":1}"#
    );
    assert_eq!(
        non_reversible(&ctx, |e| e.write_expanded_node_id(&id)),
        r#"{"Id":7,"ServerUri":"urn:west:server"}"#
    );

    let unresolved = ExpandedNodeId::new(NodeId::new(0, 7u32)).with_server_index(6);
    assert_eq!(
        non_reversible(&ctx, |e| e.write_expanded_node_id(&unresolved)),
        r#"{"Id":7,"ServerUri":6}"#
    );
}

#[test]
fn status_code_reversible_is_bare_number() {
    let ctx = EncodingContext::default();
    assert_eq!(reversible(&ctx, |e| e.write_status_code(StatusCode::GOOD)), "0");
    assert_eq!(
        reversible(&ctx, |e| e.write_status_code(StatusCode::BAD_DECODING_ERROR)),
        "2147942400"
    );
    // Keyed Good is still written in reversible mode.
    assert_eq!(
        reversible(&ctx, |e| {
            e.writer().begin_object()?;
            e.write_status_code_field("Status", StatusCode::GOOD)?;
            e.writer().end_object()
        }),
        r#"{"Status":0}"#
    );
}

#[test]
fn status_code_non_reversible() {
    let ctx = EncodingContext::default();
    assert_eq!(
        non_reversible(&ctx, |e| e
            .write_status_code(StatusCode::UNCERTAIN_INITIAL_VALUE)),
        r#"{"Code":1083310080,"Symbol":"Uncertain_InitialValue"}"#
    );
    // A code missing from the table writes no Symbol.
    assert_eq!(
        non_reversible(&ctx, |e| e.write_status_code(StatusCode::new(0x8FFF_0000))),
        r#"{"Code":2415853568}"#
    );
    // Keyed Good vanishes entirely.
    assert_eq!(
        non_reversible(&ctx, |e| {
            e.writer().begin_object()?;
            e.write_status_code_field("Status", StatusCode::GOOD)?;
            e.writer().end_object()
        }),
        "{}"
    );
}

#[test]
fn qualified_name() {
    let ctx = ctx_with_namespaces();
    assert_eq!(
        reversible(&ctx, |e| e.write_qualified_name(&QualifiedName::new(0, "Pump"))),
        r#"{"Name":"Pump"}"#
    );
    assert_eq!(
        reversible(&ctx, |e| e.write_qualified_name(&QualifiedName::new(2, "Pump"))),
        r#"{"Name":"Pump","Uri":2}"#
    );
    assert_eq!(
        non_reversible(&ctx, |e| e.write_qualified_name(&QualifiedName::new(2, "Pump"))),
        r#"{"Name":"Pump","Uri":"urn:factory:sensors"}"#
    );
    assert_eq!(
        non_reversible(&ctx, |e| e.write_qualified_name(&QualifiedName::new(1, "Pump"))),
        r#"{"Name":"Pump","Uri":1}"#
    );
    assert_eq!(
        reversible(&ctx, |e| e.write_qualified_name(&QualifiedName::null())),
        "{}"
    );
}

#[test]
fn localized_text() {
    let ctx = EncodingContext::default();
    let text = LocalizedText::new("en", "Running");
    assert_eq!(
        reversible(&ctx, |e| e.write_localized_text(&text)),
        r#"{"Locale":"en","Text":"Running"}"#
    );
    assert_eq!(
        reversible(&ctx, |e| e.write_localized_text(&LocalizedText::from("Running"))),
        r#"{"Text":"Running"}"#
    );
    assert_eq!(
        reversible(&ctx, |e| e.write_localized_text(&LocalizedText::null())),
        "{}"
    );

    // The non-reversible form sheds the locale.
    assert_eq!(
        non_reversible(&ctx, |e| e.write_localized_text(&text)),
        r#""Running""#
    );
    assert_eq!(
        non_reversible(&ctx, |e| e.write_localized_text(&LocalizedText::null())),
        "null"
    );
}

#[test]
fn extension_object_json_body() {
    let ctx = EncodingContext::default();
    let object = ExtensionObject::json(NodeId::new(2, 42u32), r#"{"Low":0.0,"High":9.5}"#);
    assert_eq!(
        reversible(&ctx, |e| e.write_extension_object(&object)),
        r#"{"TypeId":{"Id":42,"Namespace":2},"Body":{"Low":0.0,"High":9.5}}"#
    );
    assert_eq!(
        non_reversible(&ctx, |e| e.write_extension_object(&object)),
        r#"{"Low":0.0,"High":9.5}"#
    );
}

#[test]
fn extension_object_xml_and_binary_bodies() {
    let ctx = EncodingContext::default();
    let xml = ExtensionObject::xml(NodeId::new(2, 42u32), "<Range><Low>0</Low></Range>");
    assert_eq!(
        reversible(&ctx, |e| e.write_extension_object(&xml)),
        r#"{"TypeId":{"Id":42,"Namespace":2},"Encoding":2,"Body":"<Range><Low>0</Low></Range>"}"#
    );
    assert_eq!(
        non_reversible(&ctx, |e| e.write_extension_object(&xml)),
        r#""<Range><Low>0</Low></Range>""#
    );

    let binary = ExtensionObject::binary(NodeId::new(2, 42u32), vec![1, 2, 3, 4]);
    assert_eq!(
        reversible(&ctx, |e| e.write_extension_object(&binary)),
        r#"{"TypeId":{"Id":42,"Namespace":2},"Encoding":1,"Body":"AQIDBA=="}"#
    );
    assert_eq!(
        non_reversible(&ctx, |e| e.write_extension_object(&binary)),
        r#""AQIDBA==""#
    );
}

#[test]
fn null_extension_object() {
    let ctx = EncodingContext::default();
    assert_eq!(
        reversible(&ctx, |e| e.write_extension_object(&ExtensionObject::null())),
        "null"
    );
    assert_eq!(
        non_reversible(&ctx, |e| e.write_extension_object(&ExtensionObject::null())),
        "null"
    );
}

#[test]
fn data_value_full() {
    let ctx = EncodingContext::default();
    let value = DataValue {
        value: Some(Variant::UInt16(100)),
        status: Some(StatusCode::UNCERTAIN_INITIAL_VALUE),
        source_timestamp: Some(UaDateTime::parse_rfc3339("2024-06-01T08:30:00Z").unwrap()),
        source_picoseconds: Some(123),
        server_timestamp: Some(UaDateTime::parse_rfc3339("2024-06-01T08:30:01Z").unwrap()),
        server_picoseconds: Some(456),
    };
    assert_eq!(
        reversible(&ctx, |e| e.write_data_value(&value)),
        concat!(
            r#"{"Value":{"Type":5,"Body":100},"#,
            r#""Status":1083310080,"#,
            r#""SourceTimestamp":"2024-06-01T08:30:00Z","SourcePicoseconds":123,"#,
            r#""ServerTimestamp":"2024-06-01T08:30:01Z","ServerPicoseconds":456}"#
        )
    );
}

#[test]
fn data_value_omits_defaults() {
    let ctx = EncodingContext::default();
    let value = DataValue {
        value: Some(Variant::Empty),
        status: Some(StatusCode::UNCERTAIN_INITIAL_VALUE),
        source_picoseconds: Some(0),
        ..DataValue::default()
    };
    // The empty variant is dropped; zero picoseconds are not.
    assert_eq!(
        reversible(&ctx, |e| e.write_data_value(&value)),
        r#"{"Status":1083310080,"SourcePicoseconds":0}"#
    );

    // Good status is dropped in both modes.
    let good = DataValue {
        value: Some(Variant::Boolean(true)),
        status: Some(StatusCode::GOOD),
        ..DataValue::default()
    };
    assert_eq!(
        reversible(&ctx, |e| e.write_data_value(&good)),
        r#"{"Value":{"Type":1,"Body":true}}"#
    );
}

#[test]
fn empty_data_value() {
    let ctx = EncodingContext::default();
    // Unkeyed: the empty string.
    assert_eq!(
        reversible(&ctx, |e| e.write_data_value(&DataValue::default())),
        ""
    );

    // Keyed: the whole pair is omitted.
    assert_eq!(
        reversible(&ctx, |e| {
            e.writer().begin_object()?;
            e.write_data_value_field("DataValue", &DataValue::default())?;
            e.writer().end_object()
        }),
        "{}"
    );
}

#[test]
fn diagnostic_info_nesting() {
    let ctx = EncodingContext::default();
    let info = DiagnosticInfo {
        symbolic_id: 3,
        locale: 0,
        additional_info: Some("inner detail".into()),
        inner_status_code: Some(StatusCode::BAD_UNEXPECTED_ERROR),
        inner_diagnostic_info: Some(Box::new(DiagnosticInfo {
            symbolic_id: 5,
            ..DiagnosticInfo::default()
        })),
        ..DiagnosticInfo::default()
    };
    assert_eq!(
        reversible(&ctx, |e| e.write_diagnostic_info(&info)),
        concat!(
            r#"{"SymbolicId":3,"Locale":0,"AdditionalInfo":"inner detail","#,
            r#""InnerStatusCode":2147549184,"#,
            r#""InnerDiagnosticInfo":{"SymbolicId":5}}"#
        )
    );

    // Negative indices are sentinels and stay off the wire.
    assert_eq!(
        reversible(&ctx, |e| e.write_diagnostic_info(&DiagnosticInfo::default())),
        "{}"
    );
}
