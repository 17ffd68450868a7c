use serde::{Deserialize, Serialize};

/// Parsed struct field tag: ordered `key:"value"` pairs.
///
/// Built with [`TagSet::parse`] from the raw tag literal, delimiters included.
/// Follows the `reflect.StructTag` conventions of the Go standard library:
/// pairs are separated by spaces, keys are unquoted, values are Go
/// double-quoted strings. Parsing stops at the first malformed pair and keeps
/// whatever came before it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet {
    pairs: Vec<TagPair>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagPair {
    pub key: String,
    pub value: String,
}

impl TagSet {
    /// Parse a raw tag literal such as `` `json:"id" db:"user_id"` ``.
    ///
    /// Literals shorter than two characters have no interior and yield an
    /// empty set.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut chars = raw.chars();
        if chars.next().is_none() || chars.next_back().is_none() {
            return Self::default();
        }
        Self::parse_interior(chars.as_str())
    }

    /// Parse tag text that has already had its delimiters removed.
    #[must_use]
    pub fn parse_interior(mut tag: &str) -> Self {
        let mut pairs = Vec::new();

        loop {
            tag = tag.trim_start_matches(' ');
            if tag.is_empty() {
                break;
            }

            let key_len = tag
                .char_indices()
                .find(|&(_, c)| c <= ' ' || c == ':' || c == '"' || c == '\u{7f}')
                .map_or(tag.len(), |(i, _)| i);
            if key_len == 0 || !tag[key_len..].starts_with(":\"") {
                break;
            }
            let key = &tag[..key_len];
            tag = &tag[key_len + 1..];

            let Some(end) = closing_quote(tag) else {
                break;
            };
            let Some(value) = unquote(&tag[1..end]) else {
                break;
            };
            tag = &tag[end + 1..];

            pairs.push(TagPair {
                key: key.to_string(),
                value,
            });
        }

        Self { pairs }
    }

    /// Value of the first pair with `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .map(|p| (p.key.as_str(), p.value.as_str()))
    }
}

/// Byte index of the quote closing the string that opens at `s[0]`.
fn closing_quote(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut i = 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return Some(i),
            _ => i += 1,
        }
    }
    None
}

/// Decode the escapes of a Go interpreted string body.
fn unquote(body: &str) -> Option<String> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let escaped = match chars.next()? {
            'a' => '\u{7}',
            'b' => '\u{8}',
            'f' => '\u{c}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'v' => '\u{b}',
            '\\' => '\\',
            '"' => '"',
            '\'' => '\'',
            'x' => hex_escape(&mut chars, 2)?,
            'u' => hex_escape(&mut chars, 4)?,
            'U' => hex_escape(&mut chars, 8)?,
            d @ '0'..='7' => {
                let mut value = d.to_digit(8)?;
                for _ in 0..2 {
                    value = value * 8 + chars.next()?.to_digit(8)?;
                }
                char::from_u32(value).filter(|_| value <= 0xff)?
            }
            _ => return None,
        };
        out.push(escaped);
    }
    Some(out)
}

fn hex_escape(chars: &mut std::str::Chars<'_>, digits: usize) -> Option<char> {
    let mut value = 0u32;
    for _ in 0..digits {
        value = value.checked_mul(16)? + chars.next()?.to_digit(16)?;
    }
    char::from_u32(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lookup_by_key() {
        let tags = TagSet::parse(r#"`k1:"v1" k2:"v2"`"#);
        assert_eq!(tags.get("k1"), Some("v1"));
        assert_eq!(tags.get("k2"), Some("v2"));
        assert_eq!(tags.get("missing"), None);
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn first_duplicate_wins() {
        let tags = TagSet::parse(r#"`k:"first" k:"second"`"#);
        assert_eq!(tags.get("k"), Some("first"));
    }

    #[test]
    fn values_keep_commas_and_spaces() {
        let tags = TagSet::parse(r#"`json:"name,omitempty" doc:"a b  c"`"#);
        assert_eq!(tags.get("json"), Some("name,omitempty"));
        assert_eq!(tags.get("doc"), Some("a b  c"));
    }

    #[test]
    fn escapes_are_decoded() {
        let tags = TagSet::parse(r#"`re:"a\"b\\c\tz"`"#);
        assert_eq!(tags.get("re"), Some("a\"b\\c\tz"));
    }

    #[test]
    fn short_literals_yield_empty_set() {
        assert!(TagSet::parse("").is_empty());
        assert!(TagSet::parse("`").is_empty());
        assert!(TagSet::parse("``").is_empty());
    }

    #[test]
    fn malformed_pair_keeps_prefix() {
        let tags = TagSet::parse(r#"`ok:"yes" broken:novalue later:"x"`"#);
        assert_eq!(tags.get("ok"), Some("yes"));
        assert_eq!(tags.get("broken"), None);
        assert_eq!(tags.get("later"), None);
    }

    #[test]
    fn unterminated_value_is_dropped() {
        let tags = TagSet::parse(r#"`a:"1" b:"2`"#);
        assert_eq!(tags.iter().collect::<Vec<_>>(), vec![("a", "1")]);
    }

    #[test]
    fn serializes_as_ordered_pairs() {
        let tags = TagSet::parse(r#"`z:"1" a:"2"`"#);
        let json = serde_json::to_string(&tags).expect("serialize tags");
        assert_eq!(json, r#"[{"key":"z","value":"1"},{"key":"a","value":"2"}]"#);
    }
}
