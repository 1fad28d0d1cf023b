//! Text rendering of an inferred schema.
use crate::error::RenderError;
use crate::schema::SchemaNode;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// pretty-printed JSON, two-space indent
    Json,
    #[default]
    Yaml,
}

pub fn render(node: &SchemaNode, format: OutputFormat) -> Result<String, RenderError> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(node)?,
        OutputFormat::Yaml => serde_yaml::to_string(node)?,
    };
    Ok(text)
}

/// Render several schemas as one text: YAML documents are separated by `---`,
/// JSON documents by a newline.
pub fn render_all<'a, I>(nodes: I, format: OutputFormat) -> Result<String, RenderError>
where
    I: IntoIterator<Item = &'a SchemaNode>,
{
    let rendered = nodes
        .into_iter()
        .map(|node| render(node, format))
        .collect::<Result<Vec<_>, _>>()?;
    let joined = match format {
        OutputFormat::Json => rendered.join("\n"),
        OutputFormat::Yaml => rendered
            .iter()
            .map(|doc| doc.trim_end())
            .collect::<Vec<_>>()
            .join("\n---\n"),
    };
    Ok(joined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::convert;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn json_output_is_indented_and_sparse() {
        let node = convert(&json!({"on": true})).unwrap();
        let text = render(&node, OutputFormat::Json).unwrap();
        assert_eq!(
            text,
            "{\n  \"type\": \"object\",\n  \"properties\": {\n    \"on\": {\n      \"type\": \"boolean\",\n      \"examples\": [\n        true\n      ]\n    }\n  }\n}"
        );
    }

    #[test]
    fn yaml_output_uses_schema_keys() {
        let node = convert(&json!({"when": "2023-06-15T10:30:00Z", "xs": [1, "a"]})).unwrap();
        let text = render(&node, OutputFormat::Yaml).unwrap();
        let back: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();
        assert_eq!(back["type"], serde_yaml::Value::from("object"));
        assert_eq!(back["properties"]["when"]["format"], serde_yaml::Value::from("date-time"));
        assert_eq!(back["properties"]["xs"]["items"]["oneOf"][1]["type"], serde_yaml::Value::from("string"));
        assert!(!text.contains("null"), "{text}");
    }

    #[test]
    fn yaml_documents_are_separated() {
        let a = convert(&json!(1)).unwrap();
        let b = convert(&json!("b")).unwrap();
        let text = render_all([&a, &b], OutputFormat::Yaml).unwrap();
        assert_eq!(text.matches("\n---\n").count(), 1, "{text}");
    }

    #[test]
    fn default_format_is_yaml() {
        assert_eq!(OutputFormat::default(), OutputFormat::Yaml);
    }
}
