//! Canonical rendering of Go type expressions.
//!
//! A type node is first lowered into [`TypeExpr`], a closed set of the shapes
//! the extractor understands, then rendered through `Display`. Shapes outside
//! that set become [`TypeExpr::Unknown`] and render as `?`.

use std::fmt;

use ast_grep_core::Node;

use super::helpers::{normalize_whitespace, significant_children};

/// Lowered Go type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// `int`, `Point`
    Name(String),
    /// `io.Reader`
    Qualified { package: String, name: String },
    /// `*T`
    Pointer(Box<TypeExpr>),
    /// `[N]T`; `len` is empty for slices.
    Array { len: String, elem: Box<TypeExpr> },
    /// `map[K]V`
    Map {
        key: Box<TypeExpr>,
        value: Box<TypeExpr>,
    },
    /// `chan T`, `<-chan T`, `chan<- T`
    Chan { dir: ChanDir, elem: Box<TypeExpr> },
    /// `List[T]`, `Pair[K, V]`
    Generic {
        base: Box<TypeExpr>,
        args: Vec<TypeExpr>,
    },
    /// `A | B` inside a type argument list.
    Union(Vec<TypeExpr>),
    /// Inline struct; the body is exposed separately as an embedded record.
    Struct { empty: bool },
    Interface { empty: bool },
    /// Any other node kind.
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChanDir {
    Both,
    Send,
    Recv,
}

/// Placeholder rendering of a non-empty inline struct.
pub const STRUCT_PLACEHOLDER: &str = "struct{...}";

impl TypeExpr {
    /// Lower a tree-sitter Go type node.
    pub fn from_node<D: ast_grep_core::Doc>(node: &Node<D>) -> Self {
        let kind = node.kind();
        match kind.as_ref() {
            "type_identifier" | "identifier" | "package_identifier" => {
                Self::Name(node.text().to_string())
            }
            "qualified_type" => match (node.field("package"), node.field("name")) {
                (Some(package), Some(name)) => Self::Qualified {
                    package: package.text().to_string(),
                    name: name.text().to_string(),
                },
                _ => Self::Unknown(kind.to_string()),
            },
            "pointer_type" => Self::Pointer(Box::new(inner(node))),
            "parenthesized_type" => inner(node),
            "array_type" => Self::Array {
                len: node
                    .field("length")
                    .map(|len| normalize_whitespace(&len.text()))
                    .unwrap_or_default(),
                elem: Box::new(field_or_unknown(node, "element")),
            },
            "slice_type" => Self::Array {
                len: String::new(),
                elem: Box::new(field_or_unknown(node, "element")),
            },
            "map_type" => Self::Map {
                key: Box::new(field_or_unknown(node, "key")),
                value: Box::new(field_or_unknown(node, "value")),
            },
            "channel_type" => Self::Chan {
                dir: chan_dir(node),
                elem: Box::new(field_or_unknown(node, "value")),
            },
            "generic_type" => Self::Generic {
                base: Box::new(field_or_unknown(node, "type")),
                args: node
                    .field("type_arguments")
                    .map(|args| significant_children(&args).map(|a| Self::from_elem(&a)).collect())
                    .unwrap_or_default(),
            },
            "struct_type" => Self::Struct {
                empty: !node.children().any(|list| {
                    list.kind().as_ref() == "field_declaration_list"
                        && list
                            .children()
                            .any(|f| f.kind().as_ref() == "field_declaration")
                }),
            },
            "interface_type" => Self::Interface {
                empty: significant_children(node).all(|c| c.kind().as_ref() == "interface"),
            },
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Lower one entry of a type argument list, which may be a union.
    fn from_elem<D: ast_grep_core::Doc>(node: &Node<D>) -> Self {
        if node.kind().as_ref() != "type_elem" {
            return Self::from_node(node);
        }
        let mut terms: Vec<Self> = significant_children(node)
            .map(|t| Self::from_node(&t))
            .collect();
        if terms.len() == 1 {
            terms.remove(0)
        } else {
            Self::Union(terms)
        }
    }

    /// The type behind any number of pointers.
    #[must_use]
    pub fn pointee(&self) -> &Self {
        match self {
            Self::Pointer(inner) => inner.pointee(),
            other => other,
        }
    }

    /// Whether the expression, or anything inside it, failed to lower.
    #[must_use]
    pub fn has_unknown(&self) -> bool {
        match self {
            Self::Unknown(_) => true,
            Self::Pointer(t) | Self::Array { elem: t, .. } | Self::Chan { elem: t, .. } => {
                t.has_unknown()
            }
            Self::Map { key, value } => key.has_unknown() || value.has_unknown(),
            Self::Generic { base, args } => base.has_unknown() || args.iter().any(Self::has_unknown),
            Self::Union(terms) => terms.iter().any(Self::has_unknown),
            Self::Name(_) | Self::Qualified { .. } | Self::Struct { .. } | Self::Interface { .. } => {
                false
            }
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Qualified { package, name } => write!(f, "{package}.{name}"),
            Self::Pointer(inner) => write!(f, "*{inner}"),
            Self::Array { len, elem } => write!(f, "[{len}]{elem}"),
            Self::Map { key, value } => write!(f, "map[{key}]{value}"),
            Self::Chan { dir, elem } => match dir {
                ChanDir::Both => write!(f, "chan {elem}"),
                ChanDir::Send => write!(f, "chan<- {elem}"),
                ChanDir::Recv => write!(f, "<-chan {elem}"),
            },
            Self::Generic { base, args } => {
                write!(f, "{base}[")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str("]")
            }
            Self::Union(terms) => {
                for (i, term) in terms.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{term}")?;
                }
                Ok(())
            }
            Self::Struct { empty: true } => f.write_str("struct{}"),
            Self::Struct { empty: false } => f.write_str(STRUCT_PLACEHOLDER),
            Self::Interface { empty: true } => f.write_str("interface{}"),
            Self::Interface { empty: false } => f.write_str("interface{...}"),
            Self::Unknown(_) => f.write_str("?"),
        }
    }
}

/// The single type operand of a pointer or parenthesized type.
fn inner<D: ast_grep_core::Doc>(node: &Node<D>) -> TypeExpr {
    significant_children(node)
        .next()
        .map_or_else(|| TypeExpr::Unknown(node.kind().to_string()), |t| TypeExpr::from_node(&t))
}

fn field_or_unknown<D: ast_grep_core::Doc>(node: &Node<D>, field: &str) -> TypeExpr {
    node.field(field).map_or_else(
        || TypeExpr::Unknown(format!("{}.{field}", node.kind())),
        |t| TypeExpr::from_node(&t),
    )
}

fn chan_dir<D: ast_grep_core::Doc>(node: &Node<D>) -> ChanDir {
    let tokens: Vec<String> = node
        .children()
        .map(|c| c.kind().to_string())
        .filter(|k| k == "chan" || k == "<-")
        .collect();
    match tokens.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["<-", "chan", ..] => ChanDir::Recv,
        ["chan", "<-", ..] => ChanDir::Send,
        _ => ChanDir::Both,
    }
}
