use std::any::Any;
use std::io::Write;

use tracing::warn;

use uawire_common::date_time::UaDateTime;
use uawire_common::guid::Guid;
use uawire_types::byte_string::ByteString;
use uawire_types::data_value::DataValue;
use uawire_types::diagnostic_info::DiagnosticInfo;
use uawire_types::enumeration::UaEnum;
use uawire_types::extension_object::{ExtensionObject, ExtensionObjectBody};
use uawire_types::localized_text::LocalizedText;
use uawire_types::node_id::{ExpandedNodeId, Identifier, NodeId};
use uawire_types::qualified_name::QualifiedName;
use uawire_types::status_code::StatusCode;
use uawire_types::variant::{Variant, VariantArray};
use uawire_types::xml_element::XmlElement;

use crate::context::EncodingContext;
use crate::error::{EncodingError, EncodingResult};
use crate::writer::JsonWriter;

/// Streaming encoder producing the OPC UA JSON data encoding.
///
/// Bound at construction to one output sink and one [`EncodingContext`].
/// Every typed emitter comes as a pair: the unkeyed form writes the value
/// alone, the keyed `_field` form writes `"key":value` inside an open
/// object and owns the field-omission decision — when the value is to be
/// omitted, no key is written either.
///
/// The encoder starts in reversible mode. After an error the output is
/// unspecified and the encoder must be [`reset`](Self::reset).
pub struct JsonEncoder<'a> {
    writer: JsonWriter<'a>,
    ctx: &'a EncodingContext,
    reversible: bool,
    depth: u32,
}

macro_rules! impl_integer_emitters {
    ($($write:ident, $write_field:ident: $ty:ty),* $(,)?) => {$(
        pub fn $write(&mut self, value: $ty) -> EncodingResult<()> {
            self.writer.number_value(value)
        }

        pub fn $write_field(&mut self, field: &str, value: $ty) -> EncodingResult<()> {
            self.writer.name(field)?;
            self.$write(value)
        }
    )*};
}

impl<'a> JsonEncoder<'a> {
    pub fn new(sink: &'a mut dyn Write, ctx: &'a EncodingContext) -> Self {
        Self {
            writer: JsonWriter::new(sink, ctx.limits.max_message_size),
            ctx,
            reversible: true,
            depth: 0,
        }
    }

    /// Switches between the reversible and the non-reversible form. Must
    /// only change between top-level encodings.
    pub fn set_reversible(&mut self, reversible: bool) {
        self.reversible = reversible;
    }

    #[must_use]
    pub fn is_reversible(&self) -> bool {
        self.reversible
    }

    /// Rebinds the output sink, discarding any in-flight state, and opens
    /// a fresh top-level context.
    pub fn reset(&mut self, sink: &'a mut dyn Write) {
        self.writer = JsonWriter::new(sink, self.ctx.limits.max_message_size);
        self.depth = 0;
    }

    /// The inner token writer, for callers assembling enclosing objects
    /// themselves.
    pub fn writer(&mut self) -> &mut JsonWriter<'a> {
        &mut self.writer
    }

    #[must_use]
    pub fn context(&self) -> &EncodingContext {
        self.ctx
    }

    /// Verifies the document is complete and flushes the sink.
    pub fn finish(&mut self) -> EncodingResult<()> {
        self.writer.finish()
    }

    pub fn write_bool(&mut self, value: bool) -> EncodingResult<()> {
        self.writer.bool_value(value)
    }

    pub fn write_bool_field(&mut self, field: &str, value: bool) -> EncodingResult<()> {
        self.writer.name(field)?;
        self.write_bool(value)
    }

    impl_integer_emitters!(
        write_sbyte, write_sbyte_field: i8,
        write_byte, write_byte_field: u8,
        write_int16, write_int16_field: i16,
        write_uint16, write_uint16_field: u16,
        write_int32, write_int32_field: i32,
        write_uint32, write_uint32_field: u32,
    );

    /// 64-bit integers travel as quoted decimal strings so consumers that
    /// lose precision beyond 2^53 can still round-trip them.
    pub fn write_int64(&mut self, value: i64) -> EncodingResult<()> {
        self.writer.string_value(&value.to_string())
    }

    pub fn write_int64_field(&mut self, field: &str, value: i64) -> EncodingResult<()> {
        self.writer.name(field)?;
        self.write_int64(value)
    }

    pub fn write_uint64(&mut self, value: u64) -> EncodingResult<()> {
        self.writer.string_value(&value.to_string())
    }

    pub fn write_uint64_field(&mut self, field: &str, value: u64) -> EncodingResult<()> {
        self.writer.name(field)?;
        self.write_uint64(value)
    }

    pub fn write_float(&mut self, value: f32) -> EncodingResult<()> {
        if value.is_finite() {
            self.writer.raw_value(&finite_literal(value.to_string()))
        } else {
            self.writer.string_value(nonfinite_literal(f64::from(value)))
        }
    }

    pub fn write_float_field(&mut self, field: &str, value: f32) -> EncodingResult<()> {
        self.writer.name(field)?;
        self.write_float(value)
    }

    pub fn write_double(&mut self, value: f64) -> EncodingResult<()> {
        if value.is_finite() {
            self.writer.raw_value(&finite_literal(value.to_string()))
        } else {
            self.writer.string_value(nonfinite_literal(value))
        }
    }

    pub fn write_double_field(&mut self, field: &str, value: f64) -> EncodingResult<()> {
        self.writer.name(field)?;
        self.write_double(value)
    }

    pub fn write_string(&mut self, value: &str) -> EncodingResult<()> {
        self.check_string(value)?;
        self.writer.string_value(value)
    }

    pub fn write_string_field(&mut self, field: &str, value: &str) -> EncodingResult<()> {
        self.writer.name(field)?;
        self.write_string(value)
    }

    /// ISO 8601 with seconds precision and a trailing `Z`. Values outside
    /// the printable range clamp to the nearest bound.
    pub fn write_date_time(&mut self, value: UaDateTime) -> EncodingResult<()> {
        let literal = value
            .format_rfc3339()
            .map_err(|_| EncodingError::InvalidState("date time formatting failed"))?;
        self.writer.string_value(&literal)
    }

    pub fn write_date_time_field(&mut self, field: &str, value: UaDateTime) -> EncodingResult<()> {
        self.writer.name(field)?;
        self.write_date_time(value)
    }

    pub fn write_guid(&mut self, value: &Guid) -> EncodingResult<()> {
        self.writer.string_value(&value.to_string())
    }

    pub fn write_guid_field(&mut self, field: &str, value: &Guid) -> EncodingResult<()> {
        self.writer.name(field)?;
        self.write_guid(value)
    }

    pub fn write_byte_string(&mut self, value: &ByteString) -> EncodingResult<()> {
        match value.as_base64() {
            Some(encoded) => self.writer.string_value(&encoded),
            None => self.writer.null_value(),
        }
    }

    pub fn write_byte_string_field(
        &mut self,
        field: &str,
        value: &ByteString,
    ) -> EncodingResult<()> {
        self.writer.name(field)?;
        self.write_byte_string(value)
    }

    pub fn write_xml_element(&mut self, value: &XmlElement) -> EncodingResult<()> {
        self.writer.string_value(value.as_str())
    }

    pub fn write_xml_element_field(
        &mut self,
        field: &str,
        value: &XmlElement,
    ) -> EncodingResult<()> {
        self.writer.name(field)?;
        self.write_xml_element(value)
    }

    pub fn write_node_id(&mut self, value: &NodeId) -> EncodingResult<()> {
        self.writer.begin_object()?;
        self.write_identifier(&value.identifier)?;
        self.write_index_or_uri("Namespace", value.namespace)?;
        self.writer.end_object()
    }

    pub fn write_node_id_field(&mut self, field: &str, value: &NodeId) -> EncodingResult<()> {
        self.writer.name(field)?;
        self.write_node_id(value)
    }

    pub fn write_expanded_node_id(&mut self, value: &ExpandedNodeId) -> EncodingResult<()> {
        self.writer.begin_object()?;
        self.write_identifier(&value.node_id.identifier)?;
        match &value.namespace_uri {
            // An explicit URI overrides the numeric index in both modes.
            Some(uri) => {
                self.writer.name("Namespace")?;
                self.writer.string_value(uri)?;
            }
            None => self.write_index_or_uri("Namespace", value.node_id.namespace)?,
        }
        if value.server_index != 0 {
            self.writer.name("ServerUri")?;
            if !self.reversible {
                match self.ctx.servers.uri(value.server_index) {
                    Some(uri) => self.writer.string_value(uri)?,
                    None => {
                        warn!(
                            server_index = value.server_index,
                            "server index not in table, writing numeric index"
                        );
                        self.writer.number_value(value.server_index)?;
                    }
                }
            } else {
                self.writer.number_value(value.server_index)?;
            }
        }
        self.writer.end_object()
    }

    pub fn write_expanded_node_id_field(
        &mut self,
        field: &str,
        value: &ExpandedNodeId,
    ) -> EncodingResult<()> {
        self.writer.name(field)?;
        self.write_expanded_node_id(value)
    }

    /// Reversible: the bare 32-bit code. Non-reversible: an object with the
    /// code and, when the code resolves in the specification table, its
    /// symbolic name.
    pub fn write_status_code(&mut self, value: StatusCode) -> EncodingResult<()> {
        if self.reversible {
            return self.writer.number_value(value.value());
        }
        self.writer.begin_object()?;
        self.writer.name("Code")?;
        self.writer.number_value(value.value())?;
        if let Some(symbol) = value.name() {
            self.writer.name("Symbol")?;
            self.writer.string_value(symbol)?;
        }
        self.writer.end_object()
    }

    /// Omits the pair entirely for a Good code in non-reversible mode; a
    /// Good code in reversible mode is still written.
    pub fn write_status_code_field(
        &mut self,
        field: &str,
        value: StatusCode,
    ) -> EncodingResult<()> {
        if !self.reversible && value == StatusCode::GOOD {
            return Ok(());
        }
        self.writer.name(field)?;
        self.write_status_code(value)
    }

    pub fn write_qualified_name(&mut self, value: &QualifiedName) -> EncodingResult<()> {
        self.writer.begin_object()?;
        if let Some(name) = &value.name {
            self.check_string(name)?;
            self.writer.name("Name")?;
            self.writer.string_value(name)?;
        }
        self.write_index_or_uri("Uri", value.namespace_index)?;
        self.writer.end_object()
    }

    pub fn write_qualified_name_field(
        &mut self,
        field: &str,
        value: &QualifiedName,
    ) -> EncodingResult<()> {
        self.writer.name(field)?;
        self.write_qualified_name(value)
    }

    /// Reversible: an object with `Locale` and `Text`, either omitted when
    /// absent. Non-reversible: the bare text, the locale is discarded.
    pub fn write_localized_text(&mut self, value: &LocalizedText) -> EncodingResult<()> {
        if !self.reversible {
            return match &value.text {
                Some(text) => {
                    self.check_string(text)?;
                    self.writer.string_value(text)
                }
                None => self.writer.null_value(),
            };
        }
        self.writer.begin_object()?;
        if let Some(locale) = &value.locale {
            self.writer.name("Locale")?;
            self.writer.string_value(locale)?;
        }
        if let Some(text) = &value.text {
            self.check_string(text)?;
            self.writer.name("Text")?;
            self.writer.string_value(text)?;
        }
        self.writer.end_object()
    }

    pub fn write_localized_text_field(
        &mut self,
        field: &str,
        value: &LocalizedText,
    ) -> EncodingResult<()> {
        self.writer.name(field)?;
        self.write_localized_text(value)
    }

    pub fn write_extension_object(&mut self, value: &ExtensionObject) -> EncodingResult<()> {
        if value.is_null() {
            return self.writer.null_value();
        }
        self.enter()?;
        if self.reversible {
            self.writer.begin_object()?;
            self.writer.name("TypeId")?;
            self.write_node_id(&value.type_id)?;
            match &value.body {
                ExtensionObjectBody::Null => {}
                // A JSON body is already in the target encoding and goes
                // out verbatim, without an Encoding field.
                ExtensionObjectBody::Json(raw) => {
                    self.writer.name("Body")?;
                    self.writer.raw_value(raw)?;
                }
                ExtensionObjectBody::Xml(xml) => {
                    self.writer.name("Encoding")?;
                    self.writer.number_value(2)?;
                    self.writer.name("Body")?;
                    self.write_xml_element(xml)?;
                }
                ExtensionObjectBody::Binary(bytes) => {
                    self.writer.name("Encoding")?;
                    self.writer.number_value(1)?;
                    self.writer.name("Body")?;
                    self.write_byte_string(bytes)?;
                }
            }
            self.writer.end_object()?;
        } else {
            match &value.body {
                ExtensionObjectBody::Null => self.writer.null_value()?,
                ExtensionObjectBody::Json(raw) => self.writer.raw_value(raw)?,
                ExtensionObjectBody::Xml(xml) => self.write_xml_element(xml)?,
                ExtensionObjectBody::Binary(bytes) => self.write_byte_string(bytes)?,
            }
        }
        self.leave();
        Ok(())
    }

    pub fn write_extension_object_field(
        &mut self,
        field: &str,
        value: &ExtensionObject,
    ) -> EncodingResult<()> {
        self.writer.name(field)?;
        self.write_extension_object(value)
    }

    /// A data value whose fields are all at their defaults produces no
    /// output at all when unkeyed; the keyed form omits the pair.
    pub fn write_data_value(&mut self, value: &DataValue) -> EncodingResult<()> {
        if data_value_is_default(value) {
            return Ok(());
        }
        self.enter()?;
        self.writer.begin_object()?;
        if let Some(variant) = &value.value {
            self.write_variant_field("Value", variant)?;
        }
        if let Some(status) = value.status {
            self.write_status_code_data_value_field(status)?;
        }
        if let Some(timestamp) = value.source_timestamp {
            self.write_date_time_field("SourceTimestamp", timestamp)?;
        }
        if let Some(picoseconds) = value.source_picoseconds {
            self.write_uint16_field("SourcePicoseconds", picoseconds)?;
        }
        if let Some(timestamp) = value.server_timestamp {
            self.write_date_time_field("ServerTimestamp", timestamp)?;
        }
        if let Some(picoseconds) = value.server_picoseconds {
            self.write_uint16_field("ServerPicoseconds", picoseconds)?;
        }
        self.writer.end_object()?;
        self.leave();
        Ok(())
    }

    pub fn write_data_value_field(&mut self, field: &str, value: &DataValue) -> EncodingResult<()> {
        if data_value_is_default(value) {
            return Ok(());
        }
        self.writer.name(field)?;
        self.write_data_value(value)
    }

    pub fn write_variant(&mut self, value: &Variant) -> EncodingResult<()> {
        self.enter()?;
        match value {
            Variant::Empty => self.writer.null_value()?,
            Variant::Array(array) => self.write_variant_array(array)?,
            scalar if self.reversible => {
                let Some(type_id) = scalar.type_id() else {
                    return Err(EncodingError::UnknownType("variant without a type".into()));
                };
                self.writer.begin_object()?;
                self.writer.name("Type")?;
                self.writer.number_value(type_id.id())?;
                self.writer.name("Body")?;
                self.write_variant_value(scalar)?;
                self.writer.end_object()?;
            }
            scalar => self.write_variant_value(scalar)?,
        }
        self.leave();
        Ok(())
    }

    /// Omits the pair for the empty variant.
    pub fn write_variant_field(&mut self, field: &str, value: &Variant) -> EncodingResult<()> {
        if value.is_empty() {
            return Ok(());
        }
        self.writer.name(field)?;
        self.write_variant(value)
    }

    /// A matrix outside a variant: nested arrays of the logical shape, no
    /// envelope, no dimensions field.
    pub fn write_matrix(&mut self, array: &VariantArray) -> EncodingResult<()> {
        self.check_array(array.values.len())?;
        match &array.dimensions {
            Some(dimensions) if dimensions.len() > 1 => {
                let mut index = 0;
                self.write_nested_array(&array.values, dimensions, &mut index)
            }
            _ => self.write_flat_array(&array.values),
        }
    }

    pub fn write_matrix_field(&mut self, field: &str, array: &VariantArray) -> EncodingResult<()> {
        self.writer.name(field)?;
        self.write_matrix(array)
    }

    pub fn write_diagnostic_info(&mut self, value: &DiagnosticInfo) -> EncodingResult<()> {
        self.enter()?;
        self.writer.begin_object()?;
        if value.symbolic_id >= 0 {
            self.write_int32_field("SymbolicId", value.symbolic_id)?;
        }
        if value.namespace_uri >= 0 {
            self.write_int32_field("NamespaceUri", value.namespace_uri)?;
        }
        if value.locale >= 0 {
            self.write_int32_field("Locale", value.locale)?;
        }
        if value.localized_text >= 0 {
            self.write_int32_field("LocalizedText", value.localized_text)?;
        }
        if let Some(info) = &value.additional_info {
            self.write_string_field("AdditionalInfo", info)?;
        }
        if let Some(code) = value.inner_status_code {
            self.write_status_code_field("InnerStatusCode", code)?;
        }
        if let Some(inner) = &value.inner_diagnostic_info {
            self.writer.name("InnerDiagnosticInfo")?;
            self.write_diagnostic_info(inner)?;
        }
        self.writer.end_object()?;
        self.leave();
        Ok(())
    }

    pub fn write_diagnostic_info_field(
        &mut self,
        field: &str,
        value: &DiagnosticInfo,
    ) -> EncodingResult<()> {
        self.writer.name(field)?;
        self.write_diagnostic_info(value)
    }

    /// Reversible: the bare ordinal. Non-reversible: the `"Name_Value"`
    /// string.
    pub fn write_enum<E: UaEnum>(&mut self, value: &E) -> EncodingResult<()> {
        if self.reversible {
            self.writer.number_value(value.value())
        } else {
            self.writer
                .string_value(&format!("{}_{}", value.name(), value.value()))
        }
    }

    pub fn write_enum_field<E: UaEnum>(&mut self, field: &str, value: &E) -> EncodingResult<()> {
        self.writer.name(field)?;
        self.write_enum(value)
    }

    /// Encodes a structure through the codec registered for its encoding
    /// id. The encoder writes the enclosing object; the codec emits the
    /// fields in declaration order.
    pub fn write_struct(
        &mut self,
        encoding_id: &ExpandedNodeId,
        value: &dyn Any,
    ) -> EncodingResult<()> {
        let Some(codec) = self.ctx.codec_for(encoding_id) else {
            return Err(EncodingError::UnknownType(format!(
                "no codec registered for {encoding_id}"
            )));
        };
        self.enter()?;
        self.writer.begin_object()?;
        codec.encode(self, value)?;
        self.writer.end_object()?;
        self.leave();
        Ok(())
    }

    pub fn write_struct_field(
        &mut self,
        field: &str,
        encoding_id: &ExpandedNodeId,
        value: &dyn Any,
    ) -> EncodingResult<()> {
        self.writer.name(field)?;
        self.write_struct(encoding_id, value)
    }

    /// Wraps a top-level request or response as
    /// `{"TypeId": <encoding id>, "Body": <structure>}`.
    pub fn write_message(&mut self, encoding_id: &NodeId, body: &dyn Any) -> EncodingResult<()> {
        self.writer.begin_object()?;
        self.writer.name("TypeId")?;
        self.write_node_id(encoding_id)?;
        self.writer.name("Body")?;
        self.write_struct(&ExpandedNodeId::new(encoding_id.clone()), body)?;
        self.writer.end_object()
    }

    fn write_identifier(&mut self, identifier: &Identifier) -> EncodingResult<()> {
        match identifier {
            // IdType 0 is the default and stays off the wire.
            Identifier::Numeric(id) => {
                self.writer.name("Id")?;
                self.writer.number_value(*id)?;
            }
            Identifier::String(id) => {
                self.writer.name("IdType")?;
                self.writer.number_value(1)?;
                self.check_string(id)?;
                self.writer.name("Id")?;
                self.writer.string_value(id)?;
            }
            Identifier::Guid(id) => {
                self.writer.name("IdType")?;
                self.writer.number_value(2)?;
                self.writer.name("Id")?;
                self.writer.string_value(&id.to_string())?;
            }
            Identifier::ByteString(id) => {
                self.writer.name("IdType")?;
                self.writer.number_value(3)?;
                self.writer.name("Id")?;
                self.write_byte_string(id)?;
            }
        }
        Ok(())
    }

    /// Namespace-index field shared by NodeId and QualifiedName: omitted
    /// at index 0, numeric in reversible mode and at index 1, the table
    /// URI otherwise when it resolves.
    fn write_index_or_uri(&mut self, key: &str, index: u16) -> EncodingResult<()> {
        if index == 0 {
            return Ok(());
        }
        if !self.reversible && index > 1 {
            match self.ctx.namespaces.uri(index) {
                Some(uri) => {
                    self.writer.name(key)?;
                    return self.writer.string_value(uri);
                }
                None => {
                    warn!(
                        namespace = index,
                        "namespace index not in table, writing numeric index"
                    );
                }
            }
        }
        self.writer.name(key)?;
        self.writer.number_value(index)
    }

    /// Status inside a data value: omitted when Good in either mode.
    fn write_status_code_data_value_field(&mut self, status: StatusCode) -> EncodingResult<()> {
        if status == StatusCode::GOOD {
            return Ok(());
        }
        self.writer.name("Status")?;
        self.write_status_code(status)
    }

    fn write_variant_array(&mut self, array: &VariantArray) -> EncodingResult<()> {
        self.check_array(array.values.len())?;
        // Elements may themselves be arrays, so this counts towards the
        // recursion depth like every other composite.
        self.enter()?;
        if self.reversible {
            self.writer.begin_object()?;
            self.writer.name("Type")?;
            self.writer.number_value(array.value_type.id())?;
            self.writer.name("Body")?;
            self.writer.begin_array()?;
            for value in &array.values {
                self.write_variant_value(value)?;
            }
            self.writer.end_array()?;
            if let Some(dimensions) = &array.dimensions {
                if dimensions.len() > 1 {
                    self.writer.name("Dimensions")?;
                    self.writer.begin_array()?;
                    for dimension in dimensions {
                        self.writer.number_value(*dimension)?;
                    }
                    self.writer.end_array()?;
                }
            }
            self.writer.end_object()?;
        } else {
            match &array.dimensions {
                Some(dimensions) if dimensions.len() > 1 => {
                    let mut index = 0;
                    self.write_nested_array(&array.values, dimensions, &mut index)?;
                }
                _ => self.write_flat_array(&array.values)?,
            }
        }
        self.leave();
        Ok(())
    }

    fn write_flat_array(&mut self, values: &[Variant]) -> EncodingResult<()> {
        self.writer.begin_array()?;
        for value in values {
            self.write_variant_value(value)?;
        }
        self.writer.end_array()
    }

    fn write_nested_array(
        &mut self,
        values: &[Variant],
        remaining_dims: &[u32],
        index: &mut usize,
    ) -> EncodingResult<()> {
        self.enter()?;
        self.writer.begin_array()?;
        if remaining_dims.len() == 1 {
            for _ in 0..remaining_dims[0] {
                self.write_variant_value(values.get(*index).unwrap_or(&Variant::Empty))?;
                *index += 1;
            }
        } else {
            for _ in 0..remaining_dims[0] {
                self.write_nested_array(values, &remaining_dims[1..], index)?;
            }
        }
        self.writer.end_array()?;
        self.leave();
        Ok(())
    }

    /// Payload dispatch for variant bodies and array elements. A nested
    /// variant recurses through [`Self::write_variant`], giving the full
    /// envelope in reversible mode and the bare form otherwise.
    fn write_variant_value(&mut self, value: &Variant) -> EncodingResult<()> {
        match value {
            Variant::Empty => self.writer.null_value(),
            Variant::Boolean(v) => self.write_bool(*v),
            Variant::SByte(v) => self.write_sbyte(*v),
            Variant::Byte(v) => self.write_byte(*v),
            Variant::Int16(v) => self.write_int16(*v),
            Variant::UInt16(v) => self.write_uint16(*v),
            Variant::Int32(v) => self.write_int32(*v),
            Variant::UInt32(v) => self.write_uint32(*v),
            Variant::Int64(v) => self.write_int64(*v),
            Variant::UInt64(v) => self.write_uint64(*v),
            Variant::Float(v) => self.write_float(*v),
            Variant::Double(v) => self.write_double(*v),
            Variant::String(v) => self.write_string(v),
            Variant::DateTime(v) => self.write_date_time(*v),
            Variant::Guid(v) => self.write_guid(v),
            Variant::ByteString(v) => self.write_byte_string(v),
            Variant::XmlElement(v) => self.write_xml_element(v),
            Variant::NodeId(v) => self.write_node_id(v),
            Variant::ExpandedNodeId(v) => self.write_expanded_node_id(v),
            Variant::StatusCode(v) => self.write_status_code(*v),
            Variant::QualifiedName(v) => self.write_qualified_name(v),
            Variant::LocalizedText(v) => self.write_localized_text(v),
            Variant::ExtensionObject(v) => self.write_extension_object(v),
            Variant::DataValue(v) => self.write_data_value(v),
            Variant::Variant(v) => self.write_variant(v),
            Variant::DiagnosticInfo(v) => self.write_diagnostic_info(v),
            Variant::Array(v) => self.write_variant_array(v),
        }
    }

    fn check_string(&self, value: &str) -> EncodingResult<()> {
        let max = self.ctx.limits.max_string_length;
        if max != 0 && value.len() > max {
            return Err(EncodingError::LimitExceeded("string length"));
        }
        Ok(())
    }

    fn check_array(&self, len: usize) -> EncodingResult<()> {
        let max = self.ctx.limits.max_array_length;
        if max != 0 && len > max {
            return Err(EncodingError::LimitExceeded("array length"));
        }
        Ok(())
    }

    fn enter(&mut self) -> EncodingResult<()> {
        self.depth += 1;
        let max = self.ctx.limits.max_recursion_depth;
        if max != 0 && self.depth > max {
            return Err(EncodingError::LimitExceeded("recursion depth"));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }
}

/// Finite floats keep a fractional component so `0.0` stays distinct from
/// the integer `0` downstream.
fn finite_literal(mut literal: String) -> String {
    if !literal.contains(['.', 'e', 'E']) {
        literal.push_str(".0");
    }
    literal
}

fn nonfinite_literal(value: f64) -> &'static str {
    if value.is_nan() {
        "NaN"
    } else if value > 0.0 {
        "Infinity"
    } else {
        "-Infinity"
    }
}

fn data_value_is_default(value: &DataValue) -> bool {
    value.value.as_ref().is_none_or(Variant::is_empty)
        && value.status.is_none_or(|s| s == StatusCode::GOOD)
        && value.source_timestamp.is_none()
        && value.source_picoseconds.is_none()
        && value.server_timestamp.is_none()
        && value.server_picoseconds.is_none()
}
