//! Infer an OpenAPI-style JSON Schema fragment from a sample JSON value.
//!
//! ```
//! use json_oas::{convert_json_text, render, OutputFormat};
//!
//! let schema = convert_json_text(r#"{"id": 7, "created": "2023-06-15"}"#).unwrap();
//! let yaml = render(&schema, OutputFormat::Yaml).unwrap();
//! assert!(yaml.contains("format: int32"));
//! assert!(yaml.contains("format: date"));
//! ```
pub mod cli;
pub mod error;
pub mod inference;
pub mod jq_exec;
pub mod operation_id;
pub mod path_de;
pub mod render;
pub mod schema;

pub use error::{ConversionError, RenderError};
pub use inference::{
    convert, convert_array, convert_json_text, convert_number, convert_object, convert_string, ConvertOptions,
    Converter, LooseShape, ShapeEquivalence, StructuralShape,
};
pub use operation_id::summary_to_operation_id;
pub use render::{render, OutputFormat};
pub use schema::{Format, Items, Kind, SchemaNode};
