// Thu Feb 12 2026 - Alex

use crate::scan::pattern::STRUCT_FIELD_PATTERN;

/// One parsed field line. The repetition token is a single overloaded slot:
/// the grammar cannot tell an array length from a bit-field width, so the
/// value is "repetition count, kind unknown".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub type_token: String,
    pub pointer: bool,
    pub repetition: Option<String>,
    pub struct_keyword: bool,
}

/// Parses field lines out of a brace-delimited struct body.
pub struct FieldParser;

impl FieldParser {
    pub fn parse(body: &str) -> Vec<FieldDescriptor> {
        STRUCT_FIELD_PATTERN
            .captures_iter(body)
            .map(|caps| FieldDescriptor {
                struct_keyword: caps.get(1).is_some(),
                type_token: caps[2].to_string(),
                pointer: !caps[3].is_empty(),
                name: caps[4].to_string(),
                repetition: caps.get(5).map(|m| m.as_str().to_string()),
            })
            .collect()
    }
}
