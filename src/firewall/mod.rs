// Firewalld Zones - Firewall Module
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Firewalld D-Bus call layer for the permanent configuration.

mod bus;
mod call;
mod config_client;
mod zone;

pub use bus::BusConnection;
pub use call::{CallContext, Caller, Connection, MethodCall};
pub use config_client::ConfigClient;
pub use zone::Zone;

/// D-Bus bus name for firewalld.
pub const BUS_NAME: &str = "org.fedoraproject.FirewallD1";

/// D-Bus object paths.
pub mod paths {
    pub const CONFIG: &str = "/org/fedoraproject/FirewallD1/config";
}

/// D-Bus interface names.
pub mod interfaces {
    /// Permanent configuration (zone lookup and creation).
    pub const CONFIG: &str = "org.fedoraproject.FirewallD1.config";
    /// A single zone in the permanent configuration.
    pub const CONFIG_ZONE: &str = "org.fedoraproject.FirewallD1.config.zone";
}

/// Fully qualified method name under `interface`.
pub(crate) fn method_name(interface: &str, member: &str) -> String {
    format!("{interface}.{member}")
}

#[cfg(test)]
pub(crate) mod testing;
