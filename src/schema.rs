// Output model: one inferred schema fragment per JSON value.
//
// Nodes are built bottom-up by the converters and never mutated afterwards;
// fields are private so the kind/field pairing can only come from the
// constructors below.
use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Null,
    Boolean,
    Integer,
    Number,
    String,
    Array,
    Object,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Format {
    #[serde(rename = "int32")]
    Int32,
    #[serde(rename = "int64")]
    Int64,
    #[serde(rename = "date")]
    Date,
    #[serde(rename = "date-time")]
    DateTime,
}

/// Element schema of an array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Items {
    /// Every element has the same shape.
    Single(Box<SchemaNode>),
    /// Distinct element shapes in first-occurrence order (always ≥ 2).
    OneOf {
        #[serde(rename = "oneOf")]
        one_of: Vec<SchemaNode>,
    },
}

pub type Properties = IndexMap<String, SchemaNode>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaNode {
    #[serde(rename = "type")]
    kind: Kind,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<Format>,
    #[serde(skip_serializing_if = "Option::is_none")]
    items: Option<Items>,
    #[serde(skip_serializing_if = "Option::is_none")]
    examples: Option<[Value; 1]>,
    #[serde(skip_serializing_if = "no_properties")]
    properties: Option<Properties>,
}

fn no_properties(properties: &Option<Properties>) -> bool {
    properties.as_ref().is_none_or(|p| p.is_empty())
}

// ————————————————————————————————————————————————————————————————————————————
// CONSTRUCTORS
// ————————————————————————————————————————————————————————————————————————————

impl SchemaNode {
    fn bare(kind: Kind) -> Self {
        Self { kind, format: None, items: None, examples: None, properties: None }
    }

    pub fn null() -> Self {
        Self::bare(Kind::Null)
    }

    pub fn boolean(example: bool) -> Self {
        Self { examples: Some([Value::Bool(example)]), ..Self::bare(Kind::Boolean) }
    }

    pub fn integer(format: Option<Format>, example: Value) -> Self {
        Self { format, examples: Some([example]), ..Self::bare(Kind::Integer) }
    }

    /// Non-integral numbers never carry a width format.
    pub fn number(example: Value) -> Self {
        Self { examples: Some([example]), ..Self::bare(Kind::Number) }
    }

    pub fn string(format: Option<Format>, example: impl Into<String>) -> Self {
        Self {
            format,
            examples: Some([Value::String(example.into())]),
            ..Self::bare(Kind::String)
        }
    }

    /// `items` is `None` only for an empty array.
    pub fn array(items: Option<Items>) -> Self {
        Self { items, ..Self::bare(Kind::Array) }
    }

    pub fn object(properties: Properties) -> Self {
        Self { properties: Some(properties), ..Self::bare(Kind::Object) }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// ACCESSORS
// ————————————————————————————————————————————————————————————————————————————

impl SchemaNode {
    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn format(&self) -> Option<Format> {
        self.format
    }

    pub fn items(&self) -> Option<&Items> {
        self.items.as_ref()
    }

    /// Empty for array, object and null nodes.
    pub fn examples(&self) -> &[Value] {
        match &self.examples {
            Some(examples) => examples.as_slice(),
            None => &[],
        }
    }

    pub fn properties(&self) -> Option<&Properties> {
        self.properties.as_ref()
    }

    /// Shortcut for `properties().and_then(|p| p.get(name))`.
    pub fn property(&self, name: &str) -> Option<&SchemaNode> {
        self.properties.as_ref().and_then(|p| p.get(name))
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self.kind, Kind::Boolean | Kind::Integer | Kind::Number | Kind::String)
    }
}

impl Items {
    /// The homogeneous element schema, if there is exactly one.
    pub fn single(&self) -> Option<&SchemaNode> {
        match self {
            Items::Single(node) => Some(node),
            Items::OneOf { .. } => None,
        }
    }

    pub fn one_of(&self) -> Option<&[SchemaNode]> {
        match self {
            Items::Single(_) => None,
            Items::OneOf { one_of } => Some(one_of),
        }
    }
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Boolean => "boolean",
            Kind::Integer => "integer",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl Format {
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Int32 => "int32",
            Format::Int64 => "int64",
            Format::Date => "date",
            Format::DateTime => "date-time",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ------------------------------- Tests ------------------------------------ //
