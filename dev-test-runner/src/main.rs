//! Runs the fixture payloads through the library and checks the inferred
//! kinds and formats. Exits non-zero if any check fails.
use colored::Colorize;
use json_oas::{convert_json_text, render, Format, Kind, OutputFormat, SchemaNode};

const SAMPLE: &str = include_str!("../fixtures/sample.json");

struct Check {
    path: &'static [&'static str],
    kind: Kind,
    format: Option<Format>,
}

const CHECKS: &[Check] = &[
    Check { path: &[], kind: Kind::Object, format: None },
    Check { path: &["stringsMock", "stringTest"], kind: Kind::String, format: None },
    Check { path: &["stringsMock", "isoDate"], kind: Kind::String, format: Some(Format::Date) },
    Check { path: &["stringsMock", "isoDateTime"], kind: Kind::String, format: Some(Format::DateTime) },
    Check { path: &["numbersMock", "smallInt"], kind: Kind::Integer, format: Some(Format::Int32) },
    Check { path: &["numbersMock", "boundaryInt"], kind: Kind::Integer, format: Some(Format::Int64) },
    Check { path: &["numbersMock", "bigInt"], kind: Kind::Integer, format: Some(Format::Int64) },
    Check { path: &["numbersMock", "float"], kind: Kind::Number, format: None },
    Check { path: &["booleansMock", "on"], kind: Kind::Boolean, format: None },
    Check { path: &["arraysMock", "homogeneous"], kind: Kind::Array, format: None },
    Check { path: &["nullMock"], kind: Kind::Null, format: None },
];

fn lookup<'a>(root: &'a SchemaNode, path: &[&str]) -> Option<&'a SchemaNode> {
    path.iter().try_fold(root, |node, key| node.property(key))
}

fn main() -> anyhow::Result<()> {
    let schema = convert_json_text(SAMPLE)?;
    let mut failures = 0usize;

    let mut report = |label: String, ok: bool| {
        if ok {
            eprintln!("✅ {label}");
        } else {
            failures += 1;
            eprintln!("{} {label}", "❌".red());
        }
    };

    for check in CHECKS {
        let label = format!("/{} is {} {:?}", check.path.join("/"), check.kind, check.format);
        let ok = lookup(&schema, check.path)
            .is_some_and(|node| node.kind() == check.kind && node.format() == check.format);
        report(label, ok);
    }

    let arrays = lookup(&schema, &["arraysMock"]);
    let items = |name: &str| arrays.and_then(|a| a.property(name)).and_then(SchemaNode::items);
    report(
        "homogeneous array has single items".into(),
        items("homogeneous").and_then(|i| i.single()).is_some(),
    );
    report(
        "mixed array is a oneOf of three".into(),
        items("mixed").and_then(|i| i.one_of()).is_some_and(|arms| arms.len() == 3),
    );
    report(
        "same-key records collapse".into(),
        items("records").and_then(|i| i.single()).is_some(),
    );
    report("empty array has no items".into(), items("empty").is_none());

    println!("{}", render(&schema, OutputFormat::Yaml)?);

    if failures > 0 {
        anyhow::bail!("{failures} check(s) failed");
    }
    Ok(())
}
