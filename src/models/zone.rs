// Firewalld Zones - Zone Settings Model
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Permanent configuration of a single firewalld zone.

use super::{ForwardPort, Port};

/// Permanent settings of a zone.
///
/// Collections keep the order and duplicates they were received with.
/// The codecs live in [`crate::codec`]: `from_sequence`/`to_sequence` for
/// the legacy `getSettings` tuple and `from_mapping`/`to_mapping` for the
/// `getSettings2` dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneSettings {
    pub version: String,
    /// Short name of the zone (`short` on the wire).
    pub name: String,
    pub description: String,
    /// `default`, `ACCEPT`, `%%REJECT%%` or `DROP`.
    pub target: String,
    pub services: Vec<String>,
    pub ports: Vec<Port>,
    pub icmp_blocks: Vec<String>,
    pub masquerade: bool,
    pub forward_ports: Vec<ForwardPort>,
    pub interfaces: Vec<String>,
    pub source_addresses: Vec<String>,
    pub rich_rules: Vec<String>,
    pub protocols: Vec<String>,
    pub source_ports: Vec<Port>,

    // Only carried by the named encoding.
    pub icmp_block_inversion: bool,
    pub forwarded: bool,
    pub egress_priority: i32,
    pub ingress_priority: i32,
}

impl ZoneSettings {
    /// Create settings for a zone with the given short name.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }
}
