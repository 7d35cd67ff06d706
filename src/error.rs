// Firewalld Zones - Errors
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Decode errors for malformed wire data.

use thiserror::Error;

/// A wire value did not have the shape its slot or key requires.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("field `{field}`: expected {expected}, found `{found}`")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        found: String,
    },

    #[error("positional zone settings need {expected} slots, got {found}")]
    MissingSlots { expected: usize, found: usize },

    #[error("unsupported wire signature `{0}`")]
    Unsupported(String),
}

impl DecodeError {
    pub(crate) fn mismatch(field: &'static str, expected: &'static str, found: String) -> Self {
        DecodeError::TypeMismatch { field, expected, found }
    }
}
