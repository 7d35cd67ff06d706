// Firewalld Zones - Library Root
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! # Firewalld Zones
//!
//! Client for the permanent zone configuration of firewalld:
//!
//! - **Models**: zone settings, port and forward-port tuples
//! - **Codec**: positional (`getSettings`) and named (`getSettings2`) wire encodings
//! - **Firewall**: the D-Bus call layer, config client and zone handles
//! - **Config**: client settings stored as JSON

pub mod codec;
pub mod config;
pub mod error;
pub mod firewall;
pub mod models;

pub use codec::{Kind, LenientCoercion, Variant};
pub use config::{BusKind, ClientConfig};
pub use error::DecodeError;
pub use firewall::{BusConnection, CallContext, Caller, ConfigClient, Connection, MethodCall, Zone};
pub use models::{ForwardPort, Port, ZoneSettings};
