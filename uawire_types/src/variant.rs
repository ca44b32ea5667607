use std::fmt::{self, Display, Formatter};
use thiserror::Error;

use uawire_common::date_time::UaDateTime;
use uawire_common::guid::Guid;

use crate::byte_string::ByteString;
use crate::data_value::DataValue;
use crate::diagnostic_info::DiagnosticInfo;
use crate::extension_object::ExtensionObject;
use crate::localized_text::LocalizedText;
use crate::node_id::{ExpandedNodeId, NodeId};
use crate::qualified_name::QualifiedName;
use crate::status_code::StatusCode;
use crate::xml_element::XmlElement;

/// The built-in type id carried by a [`Variant`], in the closed range 1..25.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum VariantTypeId {
    Boolean = 1,
    SByte = 2,
    Byte = 3,
    Int16 = 4,
    UInt16 = 5,
    Int32 = 6,
    UInt32 = 7,
    Int64 = 8,
    UInt64 = 9,
    Float = 10,
    Double = 11,
    String = 12,
    DateTime = 13,
    Guid = 14,
    ByteString = 15,
    XmlElement = 16,
    NodeId = 17,
    ExpandedNodeId = 18,
    StatusCode = 19,
    QualifiedName = 20,
    LocalizedText = 21,
    ExtensionObject = 22,
    DataValue = 23,
    Variant = 24,
    DiagnosticInfo = 25,
}

impl VariantTypeId {
    #[must_use]
    pub const fn id(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for VariantTypeId {
    type Error = u32;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => Self::Boolean,
            2 => Self::SByte,
            3 => Self::Byte,
            4 => Self::Int16,
            5 => Self::UInt16,
            6 => Self::Int32,
            7 => Self::UInt32,
            8 => Self::Int64,
            9 => Self::UInt64,
            10 => Self::Float,
            11 => Self::Double,
            12 => Self::String,
            13 => Self::DateTime,
            14 => Self::Guid,
            15 => Self::ByteString,
            16 => Self::XmlElement,
            17 => Self::NodeId,
            18 => Self::ExpandedNodeId,
            19 => Self::StatusCode,
            20 => Self::QualifiedName,
            21 => Self::LocalizedText,
            22 => Self::ExtensionObject,
            23 => Self::DataValue,
            24 => Self::Variant,
            25 => Self::DiagnosticInfo,
            other => return Err(other),
        })
    }
}

impl Display for VariantTypeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Boolean => "Boolean",
            Self::SByte => "SByte",
            Self::Byte => "Byte",
            Self::Int16 => "Int16",
            Self::UInt16 => "UInt16",
            Self::Int32 => "Int32",
            Self::UInt32 => "UInt32",
            Self::Int64 => "Int64",
            Self::UInt64 => "UInt64",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::String => "String",
            Self::DateTime => "DateTime",
            Self::Guid => "Guid",
            Self::ByteString => "ByteString",
            Self::XmlElement => "XmlElement",
            Self::NodeId => "NodeId",
            Self::ExpandedNodeId => "ExpandedNodeId",
            Self::StatusCode => "StatusCode",
            Self::QualifiedName => "QualifiedName",
            Self::LocalizedText => "LocalizedText",
            Self::ExtensionObject => "ExtensionObject",
            Self::DataValue => "DataValue",
            Self::Variant => "Variant",
            Self::DiagnosticInfo => "DiagnosticInfo",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    #[error("matrix dimensions are empty")]
    EmptyDimensions,
    #[error("matrix dimensions cover {expected} elements, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// A one- or multi-dimensional array of variants sharing one element type.
///
/// Elements are stored flat in row-major order. `dimensions` is present for
/// matrices; a plain array leaves it `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantArray {
    pub value_type: VariantTypeId,
    pub values: Vec<Variant>,
    pub dimensions: Option<Vec<u32>>,
}

impl VariantArray {
    #[must_use]
    pub const fn new(value_type: VariantTypeId, values: Vec<Variant>) -> Self {
        Self {
            value_type,
            values,
            dimensions: None,
        }
    }

    /// Creates a matrix after validating that the dimensions cover exactly
    /// the number of elements.
    pub fn new_matrix(
        value_type: VariantTypeId,
        values: Vec<Variant>,
        dimensions: Vec<u32>,
    ) -> Result<Self, ArrayError> {
        if dimensions.is_empty() {
            return Err(ArrayError::EmptyDimensions);
        }
        let expected = dimensions
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d as usize))
            .ok_or(ArrayError::EmptyDimensions)?;
        if expected != values.len() {
            return Err(ArrayError::DimensionMismatch {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self {
            value_type,
            values,
            dimensions: Some(dimensions),
        })
    }

    /// True for arrays of rank two or higher.
    #[must_use]
    pub fn is_matrix(&self) -> bool {
        self.dimensions.as_ref().is_some_and(|d| d.len() > 1)
    }
}

/// A discriminated value over the OPC UA built-in types: one of 25 scalar
/// kinds, an array/matrix of one of them, or empty.
#[derive(Debug, Clone, PartialEq)]
pub enum Variant {
    Empty,
    Boolean(bool),
    SByte(i8),
    Byte(u8),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Float(f32),
    Double(f64),
    String(String),
    DateTime(UaDateTime),
    Guid(Guid),
    ByteString(ByteString),
    XmlElement(XmlElement),
    NodeId(Box<NodeId>),
    ExpandedNodeId(Box<ExpandedNodeId>),
    StatusCode(StatusCode),
    QualifiedName(Box<QualifiedName>),
    LocalizedText(Box<LocalizedText>),
    ExtensionObject(Box<ExtensionObject>),
    DataValue(Box<DataValue>),
    Variant(Box<Variant>),
    DiagnosticInfo(Box<DiagnosticInfo>),
    Array(Box<VariantArray>),
}

impl Variant {
    /// The built-in type id, or `None` for the empty variant. Arrays and
    /// matrices report their element type.
    #[must_use]
    pub fn type_id(&self) -> Option<VariantTypeId> {
        Some(match self {
            Variant::Empty => return None,
            Variant::Boolean(_) => VariantTypeId::Boolean,
            Variant::SByte(_) => VariantTypeId::SByte,
            Variant::Byte(_) => VariantTypeId::Byte,
            Variant::Int16(_) => VariantTypeId::Int16,
            Variant::UInt16(_) => VariantTypeId::UInt16,
            Variant::Int32(_) => VariantTypeId::Int32,
            Variant::UInt32(_) => VariantTypeId::UInt32,
            Variant::Int64(_) => VariantTypeId::Int64,
            Variant::UInt64(_) => VariantTypeId::UInt64,
            Variant::Float(_) => VariantTypeId::Float,
            Variant::Double(_) => VariantTypeId::Double,
            Variant::String(_) => VariantTypeId::String,
            Variant::DateTime(_) => VariantTypeId::DateTime,
            Variant::Guid(_) => VariantTypeId::Guid,
            Variant::ByteString(_) => VariantTypeId::ByteString,
            Variant::XmlElement(_) => VariantTypeId::XmlElement,
            Variant::NodeId(_) => VariantTypeId::NodeId,
            Variant::ExpandedNodeId(_) => VariantTypeId::ExpandedNodeId,
            Variant::StatusCode(_) => VariantTypeId::StatusCode,
            Variant::QualifiedName(_) => VariantTypeId::QualifiedName,
            Variant::LocalizedText(_) => VariantTypeId::LocalizedText,
            Variant::ExtensionObject(_) => VariantTypeId::ExtensionObject,
            Variant::DataValue(_) => VariantTypeId::DataValue,
            Variant::Variant(_) => VariantTypeId::Variant,
            Variant::DiagnosticInfo(_) => VariantTypeId::DiagnosticInfo,
            Variant::Array(a) => a.value_type,
        })
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Variant::Empty)
    }
}

impl Default for Variant {
    fn default() -> Self {
        Variant::Empty
    }
}

macro_rules! impl_variant_from {
    ($($variant:ident: $ty:ty),* $(,)?) => {$(
        impl From<$ty> for Variant {
            fn from(value: $ty) -> Self {
                Variant::$variant(value)
            }
        }
    )*};
}

macro_rules! impl_variant_from_boxed {
    ($($variant:ident: $ty:ty),* $(,)?) => {$(
        impl From<$ty> for Variant {
            fn from(value: $ty) -> Self {
                Variant::$variant(Box::new(value))
            }
        }
    )*};
}

impl_variant_from!(
    Boolean: bool,
    SByte: i8,
    Byte: u8,
    Int16: i16,
    UInt16: u16,
    Int32: i32,
    UInt32: u32,
    Int64: i64,
    UInt64: u64,
    Float: f32,
    Double: f64,
    String: String,
    DateTime: UaDateTime,
    Guid: Guid,
    ByteString: ByteString,
    XmlElement: XmlElement,
    StatusCode: StatusCode,
);

impl_variant_from_boxed!(
    NodeId: NodeId,
    ExpandedNodeId: ExpandedNodeId,
    QualifiedName: QualifiedName,
    LocalizedText: LocalizedText,
    ExtensionObject: ExtensionObject,
    DataValue: DataValue,
    DiagnosticInfo: DiagnosticInfo,
);

impl From<&str> for Variant {
    fn from(value: &str) -> Self {
        Variant::String(value.into())
    }
}

impl From<VariantArray> for Variant {
    fn from(value: VariantArray) -> Self {
        Variant::Array(Box::new(value))
    }
}
