// Firewalld Zones - Codec Module
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Zone settings wire codecs.
//!
//! Firewalld exposes the same settings in two incompatible shapes: a
//! fixed 16-slot tuple ([`positional`]) and a sparse `a{sv}` dictionary
//! ([`named`]). Both decode into [`ZoneSettings`](crate::models::ZoneSettings).

mod coerce;
pub mod named;
pub mod positional;
mod variant;

pub use coerce::LenientCoercion;
pub use variant::{Kind, Variant};

use crate::models::{ForwardPort, Port};

pub(crate) fn ports_from_variant(value: &Variant) -> Vec<Port> {
    LenientCoercion::string_tuples(value)
        .iter()
        .map(|fields| Port::from_fields(fields))
        .collect()
}

pub(crate) fn forward_ports_from_variant(value: &Variant) -> Vec<ForwardPort> {
    LenientCoercion::string_tuples(value)
        .iter()
        .map(|fields| ForwardPort::from_fields(fields))
        .collect()
}

pub(crate) fn ports_to_variant(ports: &[Port]) -> Variant {
    let tuples: Vec<Vec<String>> = ports.iter().map(Port::to_fields).collect();
    Variant::string_tuples(&tuples)
}

pub(crate) fn forward_ports_to_variant(ports: &[ForwardPort]) -> Variant {
    let tuples: Vec<Vec<String>> = ports.iter().map(ForwardPort::to_fields).collect();
    Variant::string_tuples(&tuples)
}
