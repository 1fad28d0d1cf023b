use serde_json::{Map, Value};

use super::Converter;
use crate::error::Result;
use crate::schema::{Properties, SchemaNode};

impl Converter {
    pub(super) fn convert_object_at(&self, map: &Map<String, Value>, depth: usize) -> Result<SchemaNode> {
        let mut properties = Properties::with_capacity(map.len());
        for (k, v) in map {
            properties.insert(k.clone(), self.convert_at(v, depth + 1)?);
        }
        Ok(SchemaNode::object(properties))
    }
}
