use serde_json::Value;

use super::Converter;
use crate::error::Result;
use crate::schema::{Items, SchemaNode};

impl Converter {
    pub(super) fn convert_array_at(&self, xs: &[Value], depth: usize) -> Result<SchemaNode> {
        let mut distinct: Vec<SchemaNode> = Vec::new();
        for el in xs {
            let node = self.convert_at(el, depth + 1)?;
            if !distinct.iter().any(|seen| self.shapes.same_shape(seen, &node)) {
                distinct.push(node);
            }
        }
        tracing::trace!(
            elements = xs.len(),
            distinct = distinct.len(),
            shapes = self.shapes.name(),
            "array element shapes"
        );
        Ok(SchemaNode::array(items_from(distinct)))
    }
}

/// No elements → no `items`; one shape → that shape; several → `oneOf`.
fn items_from(mut distinct: Vec<SchemaNode>) -> Option<Items> {
    match distinct.len() {
        0 => None,
        1 => distinct.pop().map(|node| Items::Single(Box::new(node))),
        _ => Some(Items::OneOf { one_of: distinct }),
    }
}

#[cfg(test)]
mod tests {
    use crate::inference::{convert_array, ConvertOptions, Converter, ShapeEquivalence};
    use crate::schema::{Format, Kind, SchemaNode};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn elements(v: serde_json::Value) -> Vec<serde_json::Value> {
        v.as_array().cloned().unwrap()
    }

    #[test]
    fn homogeneous_array_has_single_items() {
        let node = convert_array(&elements(json!([1, 2, 3]))).unwrap();
        assert_eq!(node.kind(), Kind::Array);
        let item = node.items().unwrap().single().unwrap();
        assert_eq!(item.kind(), Kind::Integer);
        assert_eq!(item.format(), Some(Format::Int32));
        // first occurrence wins
        assert_eq!(item.examples(), &[json!(1)]);
    }

    #[test]
    fn heterogeneous_array_is_one_of_in_first_occurrence_order() {
        let node = convert_array(&elements(json!([1, "a", true, 2, "b"]))).unwrap();
        let arms = node.items().unwrap().one_of().unwrap();
        let kinds: Vec<Kind> = arms.iter().map(SchemaNode::kind).collect();
        assert_eq!(kinds, vec![Kind::Integer, Kind::String, Kind::Boolean]);
    }

    #[test]
    fn same_key_objects_collapse() {
        let node = convert_array(&elements(json!([{"a": 1, "b": 2}, {"a": 9, "b": 8}]))).unwrap();
        let item = node.items().unwrap().single().unwrap();
        assert_eq!(item.kind(), Kind::Object);
        assert_eq!(item.property("a").unwrap().examples(), &[json!(1)]);
    }

    #[test]
    fn loose_matching_merges_objects_with_different_value_types() {
        let node = convert_array(&elements(json!([{"a": 1}, {"a": "x"}, {"z": null}]))).unwrap();
        let item = node.items().unwrap().single().unwrap();
        assert_eq!(item.property("a").unwrap().kind(), Kind::Integer);
    }

    #[test]
    fn width_formats_split_integers() {
        let node = convert_array(&elements(json!([1, 5_000_000_000i64, 2]))).unwrap();
        let arms = node.items().unwrap().one_of().unwrap();
        assert_eq!(arms.len(), 2);
        assert_eq!(arms[0].format(), Some(Format::Int32));
        assert_eq!(arms[1].format(), Some(Format::Int64));
    }

    #[test]
    fn date_and_plain_strings_are_distinct() {
        let node = convert_array(&elements(json!(["2023-06-15", "hello", "2024-01-01"]))).unwrap();
        let arms = node.items().unwrap().one_of().unwrap();
        assert_eq!(arms.iter().map(SchemaNode::format).collect::<Vec<_>>(), vec![Some(Format::Date), None]);
    }

    // An empty array yields no element schema at all; `items` is left out.
    #[test]
    fn empty_array_omits_items() {
        let node = convert_array(&[]).unwrap();
        assert_eq!(node.kind(), Kind::Array);
        assert!(node.items().is_none());
        assert_eq!(serde_json::to_value(&node).unwrap(), json!({ "type": "array" }));
    }

    #[test]
    fn nested_arrays_compare_shallowly() {
        let node = convert_array(&elements(json!([[1], ["a"]]))).unwrap();
        let inner = node.items().unwrap().single().unwrap();
        assert_eq!(inner.items().unwrap().single().unwrap().kind(), Kind::Integer);
    }

    #[test]
    fn nulls_dedupe_alongside_values() {
        let node = convert_array(&elements(json!([null, 1, null]))).unwrap();
        let arms = node.items().unwrap().one_of().unwrap();
        assert_eq!(arms.iter().map(SchemaNode::kind).collect::<Vec<_>>(), vec![Kind::Null, Kind::Integer]);
    }

    struct EveryElementDistinct;

    impl ShapeEquivalence for EveryElementDistinct {
        fn same_shape(&self, _: &SchemaNode, _: &SchemaNode) -> bool {
            false
        }

        fn name(&self) -> &'static str {
            "never"
        }
    }

    #[test]
    fn custom_equivalence_is_used() {
        let converter = Converter::new(ConvertOptions::default()).with_shape_equivalence(EveryElementDistinct);
        let node = converter.convert_array(&elements(json!([1, 1, 1]))).unwrap();
        assert_eq!(node.items().unwrap().one_of().unwrap().len(), 3);
    }

    #[test]
    fn element_errors_fail_the_whole_array() {
        let converter = Converter::new(ConvertOptions::default().with_max_depth(1));
        assert!(converter.convert_array(&elements(json!([1, [2]]))).is_err());
    }
}
