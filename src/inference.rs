//! Single-sample schema inference.
//!
//! One decoded JSON value in, one `SchemaNode` out. The value is classified by
//! variant and handed to the matching converter; containers recurse through
//! the same dispatch. Nothing is shared between calls, so a `Converter` can
//! be used from many threads at once.
//!
//! Submodules hold one converter each:
//! - `num`: integer/number classification and width formats
//! - `str`: `date` / `date-time` detection
//! - `arr`: element conversion, de-duplication, `oneOf` assembly
//! - `obj`: property conversion
//! - `shape`: the pluggable "same shape" predicate used by `arr`
pub mod arr;
pub mod num;
pub mod obj;
pub mod shape;
pub mod str;

use serde_json::{Map, Value};

use crate::error::{ConversionError, Result};
use crate::schema::SchemaNode;

pub use num::convert_number;
pub use shape::{LooseShape, ShapeEquivalence, StructuralShape};
pub use str::convert_string;

// ------------------------------- Policy ---------------------------------- //

/// Default nesting limit; matches serde_json's own parser recursion limit.
pub const DEFAULT_MAX_DEPTH: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Deepest container nesting followed before failing the call.
    pub max_depth: usize,
    /// Compare array elements structurally instead of by kind/format/key set.
    pub strict_shapes: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH, strict_shapes: false }
    }
}

impl ConvertOptions {
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_strict_shapes(mut self, strict: bool) -> Self {
        self.strict_shapes = strict;
        self
    }
}

// ------------------------------ Converter --------------------------------- //

pub struct Converter {
    options: ConvertOptions,
    shapes: Box<dyn ShapeEquivalence + Send + Sync>,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(ConvertOptions::default())
    }
}

impl std::fmt::Debug for Converter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Converter")
            .field("options", &self.options)
            .field("shapes", &self.shapes.name())
            .finish()
    }
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        let shapes: Box<dyn ShapeEquivalence + Send + Sync> = if options.strict_shapes {
            Box::new(StructuralShape)
        } else {
            Box::new(LooseShape)
        };
        Self { options, shapes }
    }

    /// Replace the array de-duplication predicate.
    #[must_use]
    pub fn with_shape_equivalence<S>(mut self, shapes: S) -> Self
    where
        S: ShapeEquivalence + Send + Sync + 'static,
    {
        self.shapes = Box::new(shapes);
        self
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    pub fn convert(&self, value: &Value) -> Result<SchemaNode> {
        self.convert_at(value, 0)
    }

    /// Decode `text` and convert the root value.
    pub fn convert_json_text(&self, text: &str) -> Result<SchemaNode> {
        let value = parse_json_text(text)?;
        if !value.is_object() {
            tracing::debug!(root = kind_name(&value), "root value is not an object");
        }
        self.convert(&value)
    }

    pub fn convert_array(&self, elements: &[Value]) -> Result<SchemaNode> {
        self.convert_array_at(elements, 0)
    }

    pub fn convert_object(&self, fields: &Map<String, Value>) -> Result<SchemaNode> {
        self.convert_object_at(fields, 0)
    }

    fn convert_at(&self, value: &Value, depth: usize) -> Result<SchemaNode> {
        if depth > self.options.max_depth {
            return Err(ConversionError::DepthLimitExceeded { limit: self.options.max_depth });
        }
        match value {
            Value::Null => Ok(SchemaNode::null()),
            Value::Bool(b) => Ok(SchemaNode::boolean(*b)),
            Value::Number(n) => {
                let f = n.as_f64().ok_or_else(|| ConversionError::UnsupportedType {
                    found: format!("number without an f64 representation ({n})"),
                })?;
                Ok(num::number_node(f, value.clone()))
            }
            Value::String(s) => Ok(convert_string(s)),
            Value::Array(xs) => self.convert_array_at(xs, depth),
            Value::Object(m) => self.convert_object_at(m, depth),
        }
    }
}

// ------------------------------- Front API -------------------------------- //

/// Convert with default options (loose shape matching, default depth limit).
pub fn convert(value: &Value) -> Result<SchemaNode> {
    Converter::default().convert(value)
}

pub fn convert_json_text(text: &str) -> Result<SchemaNode> {
    Converter::default().convert_json_text(text)
}

pub fn convert_array(elements: &[Value]) -> Result<SchemaNode> {
    Converter::default().convert_array(elements)
}

pub fn convert_object(fields: &Map<String, Value>) -> Result<SchemaNode> {
    Converter::default().convert_object(fields)
}

/// Decode JSON text, reporting the JSON path of the failure. Trailing data
/// after the root value is rejected.
pub fn parse_json_text(text: &str) -> Result<Value> {
    crate::path_de::from_str_with_path(text)
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ------------------------------- Tests ------------------------------------ //
