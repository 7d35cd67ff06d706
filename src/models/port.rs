// Firewalld Zones - Port Models
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Port and forward-port tuples.
//!
//! On the wire both are plain string sequences in a fixed field order:
//! `[port, protocol]` and `[port, protocol, to_port, to_address]`.

/// A port rule, e.g. `22/tcp` or `1025-2000/udp`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Port {
    pub port: String,
    pub protocol: String,
}

impl Port {
    /// Number of fields in the wire tuple.
    pub const ARITY: usize = 2;

    /// Create a new port.
    pub fn new(port: &str, protocol: &str) -> Self {
        Self {
            port: port.to_string(),
            protocol: protocol.to_string(),
        }
    }

    /// Build a port from its wire fields.
    ///
    /// # Panics
    ///
    /// Panics unless `fields` holds exactly [`Port::ARITY`] entries. Callers
    /// must not hand partially shaped tuples to the decoder.
    pub fn from_fields(fields: &[String]) -> Self {
        match fields {
            [port, protocol] => Self {
                port: port.clone(),
                protocol: protocol.clone(),
            },
            _ => panic!(
                "port tuple needs {} fields, got {}: {:?}",
                Self::ARITY,
                fields.len(),
                fields
            ),
        }
    }

    /// Wire fields in order.
    pub fn to_fields(&self) -> Vec<String> {
        vec![self.port.clone(), self.protocol.clone()]
    }
}

/// A forwarded port: traffic hitting `port/protocol` is sent to
/// `to_address:to_port`. Empty `to_address` means the local host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ForwardPort {
    pub port: String,
    pub protocol: String,
    pub to_port: String,
    pub to_address: String,
}

impl ForwardPort {
    /// Number of fields in the wire tuple.
    pub const ARITY: usize = 4;

    pub fn new(port: &str, protocol: &str, to_port: &str, to_address: &str) -> Self {
        Self {
            port: port.to_string(),
            protocol: protocol.to_string(),
            to_port: to_port.to_string(),
            to_address: to_address.to_string(),
        }
    }

    /// Build a forward port from its wire fields.
    ///
    /// # Panics
    ///
    /// Panics unless `fields` holds exactly [`ForwardPort::ARITY`] entries.
    pub fn from_fields(fields: &[String]) -> Self {
        match fields {
            [port, protocol, to_port, to_address] => Self {
                port: port.clone(),
                protocol: protocol.clone(),
                to_port: to_port.clone(),
                to_address: to_address.clone(),
            },
            _ => panic!(
                "forward-port tuple needs {} fields, got {}: {:?}",
                Self::ARITY,
                fields.len(),
                fields
            ),
        }
    }

    /// Wire fields in order.
    pub fn to_fields(&self) -> Vec<String> {
        vec![
            self.port.clone(),
            self.protocol.clone(),
            self.to_port.clone(),
            self.to_address.clone(),
        ]
    }
}
