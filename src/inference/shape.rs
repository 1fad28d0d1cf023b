use crate::schema::{Items, Properties, SchemaNode};

/// Decides whether two element schemas of one array describe the same shape.
/// The array converter keeps the first of each group of equivalent schemas.
pub trait ShapeEquivalence {
    fn same_shape(&self, a: &SchemaNode, b: &SchemaNode) -> bool;

    fn name(&self) -> &'static str;
}

/// Shallow matching: equal kind and format, or equal non-empty property key
/// sets. Nested shapes are not inspected, so any two objects (or any two
/// arrays) match through kind alone, and value types under shared keys are
/// never compared.
#[derive(Debug, Clone, Copy, Default)]
pub struct LooseShape;

impl ShapeEquivalence for LooseShape {
    fn same_shape(&self, a: &SchemaNode, b: &SchemaNode) -> bool {
        let same_kind_and_format = a.kind() == b.kind() && a.format() == b.format();
        let same_keys = match (a.properties(), b.properties()) {
            (Some(pa), Some(pb)) if !pa.is_empty() && !pb.is_empty() => same_key_set(pa, pb),
            _ => false,
        };
        same_kind_and_format || same_keys
    }

    fn name(&self) -> &'static str {
        "loose"
    }
}

/// Full structural equality, ignoring `examples`. Property order does not
/// matter; union member order does.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralShape;

impl ShapeEquivalence for StructuralShape {
    fn same_shape(&self, a: &SchemaNode, b: &SchemaNode) -> bool {
        structurally_equal(a, b)
    }

    fn name(&self) -> &'static str {
        "structural"
    }
}

pub fn same_key_set(a: &Properties, b: &Properties) -> bool {
    a.len() == b.len() && a.keys().all(|k| b.contains_key(k))
}

fn structurally_equal(a: &SchemaNode, b: &SchemaNode) -> bool {
    if a.kind() != b.kind() || a.format() != b.format() {
        return false;
    }
    let items_equal = match (a.items(), b.items()) {
        (None, None) => true,
        (Some(Items::Single(x)), Some(Items::Single(y))) => structurally_equal(x, y),
        (Some(Items::OneOf { one_of: xs }), Some(Items::OneOf { one_of: ys })) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| structurally_equal(x, y))
        }
        _ => false,
    };
    let properties_equal = match (a.properties(), b.properties()) {
        (None, None) => true,
        (Some(pa), Some(pb)) => {
            same_key_set(pa, pb)
                && pa.iter().all(|(k, x)| pb.get(k).is_some_and(|y| structurally_equal(x, y)))
        }
        _ => false,
    };
    items_equal && properties_equal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::convert;
    use serde_json::json;

    fn node(v: serde_json::Value) -> SchemaNode {
        convert(&v).unwrap()
    }

    #[test]
    fn loose_matches_kind_and_format() {
        assert!(LooseShape.same_shape(&node(json!(1)), &node(json!(99))));
        assert!(!LooseShape.same_shape(&node(json!(1)), &node(json!(5_000_000_000i64))));
        assert!(!LooseShape.same_shape(&node(json!("x")), &node(json!("2023-06-15"))));
        assert!(LooseShape.same_shape(&node(json!(null)), &node(json!(null))));
    }

    #[test]
    fn loose_ignores_nested_shapes() {
        assert!(LooseShape.same_shape(&node(json!([1])), &node(json!(["a"]))));
        assert!(LooseShape.same_shape(&node(json!({"a": 1})), &node(json!({"b": "x"}))));
        assert!(LooseShape.same_shape(&node(json!({"a": 1})), &node(json!({"a": "x"}))));
    }

    #[test]
    fn structural_compares_everything_but_examples() {
        assert!(StructuralShape.same_shape(&node(json!({"a": 1, "b": "x"})), &node(json!({"b": "y", "a": 2}))));
        assert!(!StructuralShape.same_shape(&node(json!({"a": 1})), &node(json!({"a": "x"}))));
        assert!(!StructuralShape.same_shape(&node(json!({"a": 1})), &node(json!({"b": 1}))));
        assert!(!StructuralShape.same_shape(&node(json!([1])), &node(json!(["a"]))));
        assert!(!StructuralShape.same_shape(&node(json!([])), &node(json!([1]))));
        assert!(StructuralShape.same_shape(&node(json!([1, "a"])), &node(json!([2, "b"]))));
    }

    #[test]
    fn key_set_comparison_is_order_free() {
        let a = node(json!({"x": 1, "y": 2}));
        let b = node(json!({"y": true, "x": null}));
        assert!(same_key_set(a.properties().unwrap(), b.properties().unwrap()));
        let c = node(json!({"x": 1}));
        assert!(!same_key_set(a.properties().unwrap(), c.properties().unwrap()));
    }
}
