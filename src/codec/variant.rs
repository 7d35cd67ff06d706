// Firewalld Zones - Wire Values
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Dynamically typed wire values.

use std::collections::HashMap;

/// Type tag of a wire value, rendered as a D-Bus signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    Str,
    Bool,
    I32,
    /// A nested variant (`v`).
    Variant,
    Seq(Box<Kind>),
    Struct(Vec<Kind>),
    /// A `a{sv}` dictionary.
    Map,
    Other(String),
}

impl Kind {
    /// D-Bus signature string for this kind.
    pub fn signature(&self) -> String {
        match self {
            Kind::Str => "s".to_string(),
            Kind::Bool => "b".to_string(),
            Kind::I32 => "i".to_string(),
            Kind::Variant => "v".to_string(),
            Kind::Seq(inner) => format!("a{}", inner.signature()),
            Kind::Struct(fields) => {
                let inner: String = fields.iter().map(Kind::signature).collect();
                format!("({inner})")
            }
            Kind::Map => "a{sv}".to_string(),
            Kind::Other(sig) => sig.clone(),
        }
    }

    /// Parse a single complete signature. Anything the codec never reads
    /// comes back as [`Kind::Other`].
    pub fn parse(signature: &str) -> Kind {
        match signature {
            "s" | "o" => Kind::Str,
            "b" => Kind::Bool,
            "i" => Kind::I32,
            "v" => Kind::Variant,
            "a{sv}" => Kind::Map,
            sig if sig.starts_with('a') && !sig.starts_with("a{") => {
                Kind::Seq(Box::new(Kind::parse(&sig[1..])))
            }
            other => Kind::Other(other.to_string()),
        }
    }
}

/// A wire value whose concrete type is only known at decode time.
#[derive(Debug, Clone, PartialEq)]
pub enum Variant {
    Str(String),
    Bool(bool),
    I32(i32),
    /// Homogeneous array. The element kind is kept so that an empty array
    /// still carries its signature.
    Seq(Kind, Vec<Variant>),
    Struct(Vec<Variant>),
    Map(HashMap<String, Variant>),
    /// A value of a type the codec never reads, tagged with its signature.
    Other(String),
}

impl Variant {
    /// An `as` array.
    pub fn strings<S: AsRef<str>>(items: &[S]) -> Self {
        Variant::Seq(
            Kind::Str,
            items.iter().map(|s| Variant::Str(s.as_ref().to_string())).collect(),
        )
    }

    /// An `aas` array.
    pub fn string_tuples(tuples: &[Vec<String>]) -> Self {
        Variant::Seq(
            Kind::Seq(Box::new(Kind::Str)),
            tuples.iter().map(|t| Variant::strings(t)).collect(),
        )
    }

    /// An `av` array holding values of mixed types.
    pub fn dynamic(items: Vec<Variant>) -> Self {
        Variant::Seq(Kind::Variant, items)
    }

    pub fn kind(&self) -> Kind {
        match self {
            Variant::Str(_) => Kind::Str,
            Variant::Bool(_) => Kind::Bool,
            Variant::I32(_) => Kind::I32,
            Variant::Seq(kind, _) => Kind::Seq(Box::new(kind.clone())),
            Variant::Struct(fields) => Kind::Struct(fields.iter().map(Variant::kind).collect()),
            Variant::Map(_) => Kind::Map,
            Variant::Other(sig) => Kind::Other(sig.clone()),
        }
    }

    pub fn signature(&self) -> String {
        self.kind().signature()
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Variant::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Variant::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Variant::I32(i) => Some(*i),
            _ => None,
        }
    }

    /// Elements of an array, or fields of a struct.
    pub fn as_seq(&self) -> Option<&[Variant]> {
        match self {
            Variant::Seq(_, items) => Some(items),
            Variant::Struct(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&HashMap<String, Variant>> {
        match self {
            Variant::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<&str> for Variant {
    fn from(value: &str) -> Self {
        Variant::Str(value.to_string())
    }
}

impl From<String> for Variant {
    fn from(value: String) -> Self {
        Variant::Str(value)
    }
}

impl From<bool> for Variant {
    fn from(value: bool) -> Self {
        Variant::Bool(value)
    }
}

impl From<i32> for Variant {
    fn from(value: i32) -> Self {
        Variant::I32(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signatures() {
        assert_eq!(Variant::strings(&["a"]).signature(), "as");
        assert_eq!(Variant::string_tuples(&[]).signature(), "aas");
        assert_eq!(Variant::dynamic(vec![]).signature(), "av");
        assert_eq!(
            Variant::Struct(vec!["x".into(), true.into(), 3.into()]).signature(),
            "(sbi)"
        );
    }

    #[test]
    fn test_parse_signature() {
        assert_eq!(Kind::parse("as"), Kind::Seq(Box::new(Kind::Str)));
        assert_eq!(Kind::parse("ao"), Kind::Seq(Box::new(Kind::Str)));
        assert_eq!(Kind::parse("a{sv}"), Kind::Map);
        assert_eq!(Kind::parse("(ss)"), Kind::Other("(ss)".to_string()));
        assert_eq!(Kind::parse("a(ss)").signature(), "a(ss)");
    }

    #[test]
    fn test_struct_reads_as_sequence() {
        let tuple = Variant::Struct(vec!["22".into(), "tcp".into()]);
        assert_eq!(tuple.as_seq().map(|s| s.len()), Some(2));
        assert!(Variant::Bool(true).as_seq().is_none());
    }
}
