// Firewalld Zones - Collection Coercion
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Coercion of loosely typed collections into string sequences.

use super::Variant;
use crate::error::DecodeError;

/// Lenient coercion of collection values.
///
/// Never fails. Anything that is not the expected shape is silently
/// dropped:
///
/// - a value that is not a sequence coerces to an empty list;
/// - non-string elements of a string list are skipped;
/// - inner tuples that end up empty are skipped entirely, so positions
///   in the result do not line up with positions on the wire.
///
/// Firewalld relies on this looseness for `icmp_blocks` and the port
/// tuple fields, so it has to stay for wire compatibility.
#[derive(Debug, Clone, Copy, Default)]
pub struct LenientCoercion;

impl LenientCoercion {
    /// Interpret `value` as a sequence of strings.
    pub fn strings(value: &Variant) -> Vec<String> {
        let Some(items) = value.as_seq() else {
            return Vec::new();
        };
        items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect()
    }

    /// Interpret `value` as a sequence of string tuples.
    pub fn string_tuples(value: &Variant) -> Vec<Vec<String>> {
        let Some(items) = value.as_seq() else {
            return Vec::new();
        };
        items
            .iter()
            .map(Self::strings)
            .filter(|tuple| !tuple.is_empty())
            .collect()
    }
}

/// Strict string list: every element must be a string.
pub(crate) fn expect_strings(field: &'static str, value: &Variant) -> Result<Vec<String>, DecodeError> {
    let mismatch = || DecodeError::mismatch(field, "array of strings", value.signature());
    let items = match value {
        Variant::Seq(_, items) => items,
        _ => return Err(mismatch()),
    };
    items
        .iter()
        .map(|item| item.as_str().map(str::to_string).ok_or_else(mismatch))
        .collect()
}

pub(crate) fn expect_str(field: &'static str, value: &Variant) -> Result<String, DecodeError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| DecodeError::mismatch(field, "string", value.signature()))
}

pub(crate) fn expect_bool(field: &'static str, value: &Variant) -> Result<bool, DecodeError> {
    value
        .as_bool()
        .ok_or_else(|| DecodeError::mismatch(field, "boolean", value.signature()))
}

pub(crate) fn expect_i32(field: &'static str, value: &Variant) -> Result<i32, DecodeError> {
    value
        .as_i32()
        .ok_or_else(|| DecodeError::mismatch(field, "int32", value.signature()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Port;

    #[test]
    fn test_non_sequence_coerces_to_empty() {
        assert!(LenientCoercion::strings(&Variant::Bool(true)).is_empty());
        assert!(LenientCoercion::string_tuples(&Variant::from("80/tcp")).is_empty());
    }

    #[test]
    fn test_non_string_elements_dropped() {
        let value = Variant::dynamic(vec!["a".into(), 3.into(), "b".into()]);
        assert_eq!(LenientCoercion::strings(&value), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_tuples_dropped_short_tuples_kept() {
        let value = Variant::dynamic(vec![
            Variant::strings(&["80", "tcp"]),
            Variant::strings::<&str>(&[]),
            Variant::strings(&["443"]),
        ]);
        let tuples = LenientCoercion::string_tuples(&value);
        assert_eq!(tuples, vec![vec!["80", "tcp"], vec!["443"]]);
    }

    #[test]
    #[should_panic(expected = "port tuple needs 2 fields")]
    fn test_short_tuple_faults_at_port_decode() {
        let value = Variant::dynamic(vec![Variant::strings(&["443"])]);
        let tuples = LenientCoercion::string_tuples(&value);
        Port::from_fields(&tuples[0]);
    }

    #[test]
    fn test_struct_tuples_are_read() {
        let value = Variant::dynamic(vec![Variant::Struct(vec!["53".into(), "udp".into()])]);
        assert_eq!(LenientCoercion::string_tuples(&value), vec![vec!["53", "udp"]]);
    }

    #[test]
    fn test_tuple_of_only_non_strings_dropped() {
        let value = Variant::dynamic(vec![Variant::dynamic(vec![1.into(), 2.into()]), Variant::from(7)]);
        assert!(LenientCoercion::string_tuples(&value).is_empty());
    }

    #[test]
    fn test_strict_strings_reject_mixed_elements() {
        let value = Variant::dynamic(vec!["ssh".into(), false.into()]);
        let err = expect_strings("services", &value).unwrap_err();
        assert_eq!(
            err,
            DecodeError::TypeMismatch {
                field: "services",
                expected: "array of strings",
                found: "av".to_string(),
            }
        );
        assert_eq!(expect_strings("services", &Variant::strings(&["ssh"])).unwrap(), vec!["ssh"]);
    }
}
