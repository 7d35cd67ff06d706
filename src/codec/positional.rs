// Firewalld Zones - Positional Codec
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Legacy fixed-order encoding used by `getSettings`, `update` and `addZone`.
//!
//! | slot | field            | slot | field             |
//! |------|------------------|------|-------------------|
//! | 0    | version          | 8    | masquerade        |
//! | 1    | short            | 9    | forward_ports     |
//! | 2    | description      | 10   | interfaces        |
//! | 3    | unused (bool)    | 11   | sources           |
//! | 4    | target           | 12   | rules_str         |
//! | 5    | services         | 13   | protocols         |
//! | 6    | ports            | 14   | source_ports      |
//! | 7    | icmp_blocks      | 15   | trailing (bool)   |
//!
//! Slot 15 is only written. Firewalld uses it for ICMP block inversion,
//! which the codec carries through the named encoding instead.

use super::coerce::{expect_bool, expect_str, expect_strings};
use super::{ports_to_variant, forward_ports_to_variant, ports_from_variant, forward_ports_from_variant};
use super::{LenientCoercion, Variant};
use crate::error::DecodeError;
use crate::models::ZoneSettings;

/// Slots read when decoding.
pub const DECODED_SLOTS: usize = 15;
/// Slots written when encoding.
pub const ENCODED_SLOTS: usize = 16;

impl ZoneSettings {
    /// Decode the positional encoding.
    ///
    /// The first [`DECODED_SLOTS`] values must all be present and typed as
    /// the table above says; anything after them is ignored.
    ///
    /// # Panics
    ///
    /// Panics if a port or forward-port tuple has the wrong number of fields.
    pub fn from_sequence(slots: &[Variant]) -> Result<Self, DecodeError> {
        if slots.len() < DECODED_SLOTS {
            return Err(DecodeError::MissingSlots {
                expected: DECODED_SLOTS,
                found: slots.len(),
            });
        }

        // Slot 3 carries nothing but must still be well typed.
        expect_bool("unused", &slots[3])?;

        Ok(Self {
            version: expect_str("version", &slots[0])?,
            name: expect_str("short", &slots[1])?,
            description: expect_str("description", &slots[2])?,
            target: expect_str("target", &slots[4])?,
            services: expect_strings("services", &slots[5])?,
            ports: ports_from_variant(&slots[6]),
            icmp_blocks: LenientCoercion::strings(&slots[7]),
            masquerade: expect_bool("masquerade", &slots[8])?,
            forward_ports: forward_ports_from_variant(&slots[9]),
            interfaces: expect_strings("interfaces", &slots[10])?,
            source_addresses: expect_strings("sources", &slots[11])?,
            rich_rules: expect_strings("rules_str", &slots[12])?,
            protocols: expect_strings("protocols", &slots[13])?,
            source_ports: ports_from_variant(&slots[14]),
            ..Default::default()
        })
    }

    /// Encode to the positional encoding, always [`ENCODED_SLOTS`] long.
    pub fn to_sequence(&self) -> Vec<Variant> {
        vec![
            Variant::from(self.version.as_str()),
            Variant::from(self.name.as_str()),
            Variant::from(self.description.as_str()),
            Variant::Bool(false),
            Variant::from(self.target.as_str()),
            Variant::strings(&self.services),
            ports_to_variant(&self.ports),
            Variant::strings(&self.icmp_blocks),
            Variant::Bool(self.masquerade),
            forward_ports_to_variant(&self.forward_ports),
            Variant::strings(&self.interfaces),
            Variant::strings(&self.source_addresses),
            Variant::strings(&self.rich_rules),
            Variant::strings(&self.protocols),
            ports_to_variant(&self.source_ports),
            Variant::Bool(false),
        ]
    }
}
