// Firewalld Zones - Named Codec
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Dictionary encoding used by `getSettings2`, `update2` and `addZone2`.
//!
//! Decoding is sparse: a missing key leaves the field at its zero value.
//! Encoding is not: every key is always written, so a partial update has
//! to start from fetched settings rather than from an empty value.

use std::collections::HashMap;

use super::coerce::{expect_bool, expect_i32, expect_str, expect_strings};
use super::{forward_ports_from_variant, forward_ports_to_variant, ports_from_variant, ports_to_variant};
use super::{LenientCoercion, Variant};
use crate::error::DecodeError;
use crate::models::ZoneSettings;

/// Dictionary keys as firewalld names them.
pub mod keys {
    pub const VERSION: &str = "version";
    pub const SHORT: &str = "short";
    pub const DESCRIPTION: &str = "description";
    pub const TARGET: &str = "target";
    pub const SERVICES: &str = "services";
    pub const PORTS: &str = "ports";
    pub const ICMP_BLOCKS: &str = "icmp_blocks";
    pub const MASQUERADE: &str = "masquerade";
    pub const FORWARD_PORTS: &str = "forward_ports";
    pub const INTERFACES: &str = "interfaces";
    pub const SOURCES: &str = "sources";
    pub const RULES_STR: &str = "rules_str";
    pub const PROTOCOLS: &str = "protocols";
    pub const SOURCE_PORTS: &str = "source_ports";
    pub const ICMP_BLOCK_INVERSION: &str = "icmp_block_inversion";
    pub const FORWARD: &str = "forward";
    pub const EGRESS_PRIORITY: &str = "egress_priority";
    pub const INGRESS_PRIORITY: &str = "ingress_priority";

    /// Every key the codec reads and writes.
    pub const ALL: [&str; 18] = [
        VERSION,
        SHORT,
        DESCRIPTION,
        TARGET,
        SERVICES,
        PORTS,
        ICMP_BLOCKS,
        MASQUERADE,
        FORWARD_PORTS,
        INTERFACES,
        SOURCES,
        RULES_STR,
        PROTOCOLS,
        SOURCE_PORTS,
        ICMP_BLOCK_INVERSION,
        FORWARD,
        EGRESS_PRIORITY,
        INGRESS_PRIORITY,
    ];
}

impl ZoneSettings {
    /// Decode the named encoding. Unknown keys are ignored.
    ///
    /// # Panics
    ///
    /// Panics if a port or forward-port tuple has the wrong number of fields.
    pub fn from_mapping(map: &HashMap<String, Variant>) -> Result<Self, DecodeError> {
        let mut settings = Self::default();

        if let Some(v) = map.get(keys::VERSION) {
            settings.version = expect_str(keys::VERSION, v)?;
        }
        if let Some(v) = map.get(keys::SHORT) {
            settings.name = expect_str(keys::SHORT, v)?;
        }
        if let Some(v) = map.get(keys::DESCRIPTION) {
            settings.description = expect_str(keys::DESCRIPTION, v)?;
        }
        if let Some(v) = map.get(keys::TARGET) {
            settings.target = expect_str(keys::TARGET, v)?;
        }
        if let Some(v) = map.get(keys::SERVICES) {
            settings.services = expect_strings(keys::SERVICES, v)?;
        }
        if let Some(v) = map.get(keys::PORTS) {
            settings.ports = ports_from_variant(v);
        }
        if let Some(v) = map.get(keys::ICMP_BLOCKS) {
            settings.icmp_blocks = LenientCoercion::strings(v);
        }
        if let Some(v) = map.get(keys::MASQUERADE) {
            settings.masquerade = expect_bool(keys::MASQUERADE, v)?;
        }
        if let Some(v) = map.get(keys::FORWARD_PORTS) {
            settings.forward_ports = forward_ports_from_variant(v);
        }
        if let Some(v) = map.get(keys::INTERFACES) {
            settings.interfaces = expect_strings(keys::INTERFACES, v)?;
        }
        if let Some(v) = map.get(keys::SOURCES) {
            settings.source_addresses = expect_strings(keys::SOURCES, v)?;
        }
        if let Some(v) = map.get(keys::RULES_STR) {
            settings.rich_rules = expect_strings(keys::RULES_STR, v)?;
        }
        if let Some(v) = map.get(keys::PROTOCOLS) {
            settings.protocols = expect_strings(keys::PROTOCOLS, v)?;
        }
        if let Some(v) = map.get(keys::SOURCE_PORTS) {
            settings.source_ports = ports_from_variant(v);
        }
        if let Some(v) = map.get(keys::ICMP_BLOCK_INVERSION) {
            settings.icmp_block_inversion = expect_bool(keys::ICMP_BLOCK_INVERSION, v)?;
        }
        if let Some(v) = map.get(keys::FORWARD) {
            settings.forwarded = expect_bool(keys::FORWARD, v)?;
        }
        if let Some(v) = map.get(keys::EGRESS_PRIORITY) {
            settings.egress_priority = expect_i32(keys::EGRESS_PRIORITY, v)?;
        }
        if let Some(v) = map.get(keys::INGRESS_PRIORITY) {
            settings.ingress_priority = expect_i32(keys::INGRESS_PRIORITY, v)?;
        }

        Ok(settings)
    }

    /// Encode to the named encoding. Every key in [`keys::ALL`] is present.
    pub fn to_mapping(&self) -> HashMap<String, Variant> {
        let entries = [
            (keys::VERSION, Variant::from(self.version.as_str())),
            (keys::SHORT, Variant::from(self.name.as_str())),
            (keys::DESCRIPTION, Variant::from(self.description.as_str())),
            (keys::TARGET, Variant::from(self.target.as_str())),
            (keys::SERVICES, Variant::strings(&self.services)),
            (keys::PORTS, ports_to_variant(&self.ports)),
            (keys::ICMP_BLOCKS, Variant::strings(&self.icmp_blocks)),
            (keys::MASQUERADE, Variant::Bool(self.masquerade)),
            (keys::FORWARD_PORTS, forward_ports_to_variant(&self.forward_ports)),
            (keys::INTERFACES, Variant::strings(&self.interfaces)),
            (keys::SOURCES, Variant::strings(&self.source_addresses)),
            (keys::RULES_STR, Variant::strings(&self.rich_rules)),
            (keys::PROTOCOLS, Variant::strings(&self.protocols)),
            (keys::SOURCE_PORTS, ports_to_variant(&self.source_ports)),
            (keys::ICMP_BLOCK_INVERSION, Variant::Bool(self.icmp_block_inversion)),
            (keys::FORWARD, Variant::Bool(self.forwarded)),
            (keys::EGRESS_PRIORITY, Variant::I32(self.egress_priority)),
            (keys::INGRESS_PRIORITY, Variant::I32(self.ingress_priority)),
        ];

        entries
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect()
    }
}
