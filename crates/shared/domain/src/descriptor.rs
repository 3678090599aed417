//! Operator schemas and the identifiers hosts resolve them by.

use crate::constants::OP_DOMAIN;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tensor element type of an operator input or output.
///
/// Discriminants are the ONNX `TensorProto.DataType` codes, so a C host can read
/// the values straight out of a descriptor record as `int32_t`.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Float = 1,
    Uint8 = 2,
    Int8 = 3,
    Uint16 = 4,
    Int16 = 5,
    Int32 = 6,
    Int64 = 7,
    String = 8,
    Bool = 9,
    Float16 = 10,
    Double = 11,
    Uint32 = 12,
    Uint64 = 13,
}

impl ElementType {
    pub const ALL: [Self; 13] = [
        Self::Float,
        Self::Uint8,
        Self::Int8,
        Self::Uint16,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::String,
        Self::Bool,
        Self::Float16,
        Self::Double,
        Self::Uint32,
        Self::Uint64,
    ];

    /// The ONNX data type code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Looks up an element type by its ONNX data type code.
    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.code() == code)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Float => "float",
            Self::Uint8 => "uint8",
            Self::Int8 => "int8",
            Self::Uint16 => "uint16",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::String => "string",
            Self::Bool => "bool",
            Self::Float16 => "float16",
            Self::Double => "double",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown element type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownElementType(pub String);

impl fmt::Display for UnknownElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown element type '{}'", self.0)
    }
}

impl std::error::Error for UnknownElementType {}

impl FromStr for ElementType {
    type Err = UnknownElementType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownElementType(s.to_owned()))
    }
}

/// Identity of an operator as seen by the host: `(domain, name, since_version)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OpKey {
    pub domain: String,
    pub name: String,
    pub since_version: u32,
}

impl OpKey {
    pub fn new(domain: impl Into<String>, name: impl Into<String>, since_version: u32) -> Self {
        Self { domain: domain.into(), name: name.into(), since_version }
    }

    /// Key of an operator in this library's domain.
    pub fn contrib(name: impl Into<String>, since_version: u32) -> Self {
        Self::new(OP_DOMAIN, name, since_version)
    }

    /// Whether a node requesting `name` from `domain` at `opset` is served by this operator.
    ///
    /// An operator introduced at version `v` serves every opset from `v` onwards.
    #[must_use]
    pub fn resolves(&self, domain: &str, name: &str, opset: u32) -> bool {
        self.domain == domain && self.name == name && opset >= self.since_version
    }
}

impl fmt::Display for OpKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}@{}", self.domain, self.name, self.since_version)
    }
}

/// Declaration of a scripting-backed operator, as handed over by an interpreter adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OpSchema {
    pub name: String,
    #[serde(default = "default_since_version")]
    pub since_version: u32,
    #[serde(default)]
    pub inputs: Vec<ElementType>,
    #[serde(default)]
    pub outputs: Vec<ElementType>,
}

const fn default_since_version() -> u32 {
    1
}

impl OpSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            since_version: default_since_version(),
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    #[must_use]
    pub const fn since_version(mut self, version: u32) -> Self {
        self.since_version = version;
        self
    }

    #[must_use]
    pub fn input(mut self, ty: ElementType) -> Self {
        self.inputs.push(ty);
        self
    }

    #[must_use]
    pub fn inputs(mut self, types: impl IntoIterator<Item = ElementType>) -> Self {
        self.inputs.extend(types);
        self
    }

    #[must_use]
    pub fn output(mut self, ty: ElementType) -> Self {
        self.outputs.push(ty);
        self
    }

    #[must_use]
    pub fn outputs(mut self, types: impl IntoIterator<Item = ElementType>) -> Self {
        self.outputs.extend(types);
        self
    }

    /// The key this schema registers under.
    #[must_use]
    pub fn key(&self) -> OpKey {
        OpKey::contrib(self.name.clone(), self.since_version)
    }
}
