//! Minimal CLI: infer → (yaml | json), plus the operationId helper
use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use rayon::prelude::*;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use crate::inference::{ConvertOptions, Converter, DEFAULT_MAX_DEPTH};
use crate::render::{render_all, OutputFormat};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// infer an OpenAPI-style schema (with examples and formats) from sample JSON
#[derive(Parser, Debug)]
#[command(name = "json-oas", version)]
pub struct CommandLineInterface {
    /// more log output on stderr (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// infer and print the schema of each input document
    Schema(SchemaOut),
    /// turn an operation summary into a camelCase operationId
    OperationId(OperationIdOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// JSON Pointer to select a subnode in each document (e.g. /data/items/0/payload)
    #[arg(long)]
    json_pointer: Option<String>,

    /// JQ pre-process filter for each document; every output is a document.
    #[arg(long)]
    jq_expr: Option<String>,

    /// One or more inputs. May be literal paths or quoted glob patterns or '-' for stdin
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(Args, Debug, Clone, Copy)]
struct ConversionSettings {
    /// deepest container nesting to follow
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// de-duplicate array elements by full structure instead of kind/format/keys
    #[arg(long, default_value_t = false)]
    strict_shapes: bool,
}

#[derive(clap::Parser, Debug)]
struct SchemaOut {
    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    conversion: ConversionSettings,

    /// output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    format: OutputFormat,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

#[derive(clap::Parser, Debug)]
struct OperationIdOut {
    /// summary words, e.g. `Get the user by ID`
    #[arg(required = true, num_args = 1..)]
    summary: Vec<String>,
}

/// One decoded input, after pointer/jq selection.
#[derive(Debug)]
struct Document {
    source: String,
    value: Value,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn load_documents(&self) -> Result<Vec<Document>> {
        let mut documents = Vec::new();
        for source in resolve_inputs(&self.input)? {
            let text = read_source(&source)?;
            let value = crate::inference::parse_json_text(&text)
                .with_context(|| format!("failed to parse JSON source ({source})"))?;
            let value = self.select(value, &source)?;
            match self.jq_expr.as_ref() {
                None => documents.push(Document { source, value }),
                Some(jq_expr) => {
                    let outputs = crate::jq_exec::run_jaq(jq_expr, &value)
                        .with_context(|| format!("failed to apply jq expression to ({source})"))?;
                    for (i, value) in outputs.into_iter().enumerate() {
                        documents.push(Document { source: format!("{source}#{i}"), value });
                    }
                }
            }
        }
        tracing::debug!(documents = documents.len(), "loaded input documents");
        Ok(documents)
    }

    fn select(&self, value: Value, source: &str) -> Result<Value> {
        let Some(pointer) = self.json_pointer.as_deref() else {
            return Ok(value);
        };
        match value.pointer(pointer) {
            Some(selected) => Ok(selected.clone()),
            None => bail!("JSON pointer {pointer} matched nothing in ({source})"),
        }
    }
}

impl ConversionSettings {
    fn options(self) -> ConvertOptions {
        ConvertOptions::default()
            .with_max_depth(self.max_depth)
            .with_strict_shapes(self.strict_shapes)
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    /// Log to stderr; stdout is reserved for the rendered schema.
    pub fn init_logging(&self) {
        let level = match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::Schema(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(());
                }

                // 1) load every document up front
                let documents = target.input_settings.load_documents()?;

                // 2) convert independently; order of the output follows the input
                let converter = Converter::new(target.conversion.options());
                tracing::debug!(?converter, "converting");
                let schemas = documents
                    .par_iter()
                    .map(|doc| {
                        converter
                            .convert(&doc.value)
                            .with_context(|| format!("failed to infer schema for ({})", doc.source))
                    })
                    .collect::<Result<Vec<_>>>()?;

                // 3) render
                let schema_src = render_all(&schemas, target.format)?;
                write_output(target.out.as_ref(), &schema_src)
            }
            Command::OperationId(target) => {
                let summary = target.summary.join(" ");
                println!("{}", crate::operation_id::summary_to_operation_id(&summary));
                Ok(())
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

const STDIN: &str = "-";

fn read_source(source: &str) -> Result<String> {
    if source == STDIN {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(source).with_context(|| format!("failed to read source file ({source})"))
}

fn write_output(out: Option<&PathBuf>, text: &str) -> Result<()> {
    let Some(out) = out else {
        println!("{text}");
        return Ok(());
    };
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    std::fs::write(out, format!("{text}\n")).with_context(|| format!("failed to write {}", out.display()))?;
    tracing::debug!(path = %out.display(), "wrote schema");
    Ok(())
}

/// Expand globs, keep literal paths and `-` as given.
fn resolve_inputs<I>(patterns: I) -> Result<Vec<String>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
    }

    let mut out = Vec::<String>::new();
    let mut stdin_seen = false;

    for raw in patterns {
        let pattern = raw.as_ref();

        if pattern == STDIN {
            if stdin_seen {
                bail!("stdin ('-') may only be given once");
            }
            stdin_seen = true;
            out.push(STDIN.to_string());
        } else if has_glob_chars(pattern) {
            let mut matched_any = false;
            let entries = glob::glob(pattern).with_context(|| format!("invalid glob pattern: {pattern}"))?;
            for entry in entries {
                let path = entry.with_context(|| format!("unreadable glob match for {pattern}"))?;
                matched_any = true;
                out.push(path.to_string_lossy().into_owned());
            }
            if !matched_any {
                // Pattern was explicitly a glob but matched nothing -> surface as an error
                bail!("glob pattern matched no files: {pattern}");
            }
        } else {
            out.push(pattern.to_string());
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(pointer: Option<&str>) -> InputSettings {
        InputSettings {
            json_pointer: pointer.map(str::to_string),
            jq_expr: None,
            input: vec![],
        }
    }

    #[test]
    fn parses_schema_command() {
        let cli = CommandLineInterface::try_parse_from([
            "json-oas", "schema", "-i", "a.json", "b.json", "--format", "json", "--strict-shapes",
        ])
        .unwrap();
        let Command::Schema(target) = cli.cmd else { panic!("expected schema command") };
        assert_eq!(target.input_settings.input, vec!["a.json", "b.json"]);
        assert_eq!(target.format, OutputFormat::Json);
        assert!(target.conversion.strict_shapes);
        assert_eq!(target.conversion.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn schema_defaults_to_yaml() {
        let cli = CommandLineInterface::try_parse_from(["json-oas", "schema", "-i", "-"]).unwrap();
        let Command::Schema(target) = cli.cmd else { panic!("expected schema command") };
        assert_eq!(target.format, OutputFormat::Yaml);
    }

    #[test]
    fn parses_operation_id_command() {
        let cli = CommandLineInterface::try_parse_from(["json-oas", "-v", "operation-id", "Get", "the", "user"])
            .unwrap();
        assert_eq!(cli.verbose, 1);
        let Command::OperationId(target) = cli.cmd else { panic!("expected operation-id command") };
        assert_eq!(target.summary.join(" "), "Get the user");
    }

    #[test]
    fn input_is_required() {
        assert!(CommandLineInterface::try_parse_from(["json-oas", "schema"]).is_err());
    }

    #[test]
    fn json_pointer_selects_subnode() {
        let value = serde_json::json!({"data": {"items": [{"id": 1}]}});
        let selected = settings(Some("/data/items/0")).select(value.clone(), "t").unwrap();
        assert_eq!(selected, serde_json::json!({"id": 1}));
        assert!(settings(Some("/nope")).select(value.clone(), "t").is_err());
        assert_eq!(settings(None).select(value.clone(), "t").unwrap(), value);
    }

    #[test]
    fn literal_paths_and_stdin_pass_through() {
        let got = resolve_inputs(["x.json", "-"]).unwrap();
        assert_eq!(got, vec!["x.json".to_string(), "-".to_string()]);
        assert!(resolve_inputs(["-", "-"]).is_err());
    }

    #[test]
    fn unmatched_glob_is_an_error() {
        assert!(resolve_inputs(["/definitely/not/here/*.json"]).is_err());
    }
}
