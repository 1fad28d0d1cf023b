use serde_json::Value;

use crate::schema::{Format, SchemaNode};

/// Exclusive bound for `int32`. The exact 32-bit limits fall through to
/// `int64`; the lower bound is symmetric rather than `i32::MIN`.
const INT32_BOUND: f64 = 2147483647.0;

const INT64_BOUND: f64 = i64::MAX as f64;

/// `integer` when `n` has no fractional part, else `number`.
pub fn convert_number(n: f64) -> SchemaNode {
    number_node(n, json_num_pref_i64(n))
}

/// Classify `n`, keeping `example` verbatim (the decoded number when called
/// from the classifier).
pub(super) fn number_node(n: f64, example: Value) -> SchemaNode {
    if is_integer(n) {
        SchemaNode::integer(integer_format(n), example)
    } else {
        SchemaNode::number(example)
    }
}

pub fn integer_format(n: f64) -> Option<Format> {
    if n > -INT32_BOUND && n < INT32_BOUND {
        Some(Format::Int32)
    } else if (-INT64_BOUND..=INT64_BOUND).contains(&n) {
        Some(Format::Int64)
    } else {
        None
    }
}

pub fn is_integer(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0
}

// prefer emitting integers when exact
fn json_num_pref_i64(n: f64) -> Value {
    if is_integer(n) && n >= i64::MIN as f64 && n < INT64_BOUND {
        Value::from(n as i64)
    } else {
        Value::from(n)
    }
}
