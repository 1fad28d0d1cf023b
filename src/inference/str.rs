use once_cell::sync::Lazy;
use regex::Regex;

use crate::schema::{Format, SchemaNode};

// ------- Format detection -------
//
// Calendar-shape checks only: years 1900–2099, month 01–12, day 01–31 with no
// per-month or leap-year correction, so `2021-02-30` is a `date`. Date-times
// need a literal UTC `Z` and whole seconds.

static DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(19|20)\d{2}-(0[1-9]|1[0-2])-(0[1-9]|[12][0-9]|3[01])$")
        .expect("date pattern compiles")
});

static DATE_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(19|20)\d{2}-(0[1-9]|1[0-2])-(0[1-9]|[12][0-9]|3[01])T([01][0-9]|2[0-3]):[0-5][0-9]:[0-5][0-9]Z$",
    )
    .expect("date-time pattern compiles")
});

pub fn convert_string(s: &str) -> SchemaNode {
    SchemaNode::string(detect_format(s), s)
}

/// `date-time` is tried first; the first matching pattern wins.
pub fn detect_format(s: &str) -> Option<Format> {
    if DATE_TIME.is_match(s) {
        Some(Format::DateTime)
    } else if DATE.is_match(s) {
        Some(Format::Date)
    } else {
        None
    }
}
