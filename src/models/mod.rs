// Firewalld Zones - Models
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Data models for permanent zone configuration.

mod port;
mod zone;

pub use port::{ForwardPort, Port};
pub use zone::ZoneSettings;
