use serde::{Deserialize, Serialize};

use super::TagSet;

/// A struct type: either a named top-level declaration or an anonymous
/// struct reached through a field's type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Declared name; empty for anonymous structs.
    pub name: String,
    /// Comment groups associated with the enclosing `type` declaration.
    pub comments: Vec<String>,
    pub fields: Vec<Field>,
    pub start_line: u32,
    pub end_line: u32,
}

/// One field declaration of a struct.
///
/// `A, B int` is a single field named `"A, B"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    /// Canonical rendering of the declared type, e.g. `map[string]*[SZ]int`.
    #[serde(rename = "type")]
    pub type_rendering: String,
    /// Comments on the lines directly above the field.
    pub doc: Vec<String>,
    /// Comments trailing the field on its last line.
    pub comments: Vec<String>,
    pub tag: Option<TagSet>,
    /// Tag literal exactly as written, delimiters included.
    pub raw_tag: Option<String>,
    /// Embedded (anonymous) field such as `io.Reader`; `name` then holds the
    /// implicit field name.
    pub embedded: bool,
    /// Inline struct type behind the field, after stripping pointers.
    pub record: Option<Box<Record>>,
    pub line: u32,
}

impl Record {
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }

    /// First field whose (possibly grouped) name list contains `name`.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.names().any(|n| n == name))
    }
}

impl Field {
    /// Individual names of a grouped field declaration.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.name.split(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouped_field_names_split() {
        let field = Field {
            name: "A, B".to_string(),
            type_rendering: "string".to_string(),
            ..Field::default()
        };
        assert_eq!(field.names().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn lookup_by_grouped_name() {
        let record = Record {
            name: "Point".to_string(),
            fields: vec![
                Field {
                    name: "X, Y".to_string(),
                    ..Field::default()
                },
                Field {
                    name: "Label".to_string(),
                    ..Field::default()
                },
            ],
            ..Record::default()
        };
        assert_eq!(record.field("Y").map(|f| f.name.as_str()), Some("X, Y"));
        assert!(record.field("Z").is_none());
        assert!(!record.is_anonymous());
    }

    #[test]
    fn type_serializes_under_type_key() {
        let field = Field {
            name: "X".to_string(),
            type_rendering: "int".to_string(),
            ..Field::default()
        };
        let value = serde_json::to_value(&field).expect("serialize field");
        assert_eq!(value["type"], "int");
        assert!(value["record"].is_null());
    }
}
