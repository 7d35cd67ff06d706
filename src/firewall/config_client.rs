// Firewalld Zones - Config Client
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Client for `org.fedoraproject.FirewallD1.config`.

use std::fmt;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use super::call::{reply_str, reply_strings, CallContext, Caller, Connection, MethodCall};
use super::zone::Zone;
use super::{interfaces, method_name, paths, BUS_NAME};
use crate::codec::Variant;
use crate::config::ClientConfig;
use crate::models::ZoneSettings;

/// Lookup and creation of zones in the permanent configuration.
#[derive(Clone)]
pub struct ConfigClient {
    connection: Arc<dyn Connection>,
    destination: String,
    config: Arc<dyn Caller>,
}

impl fmt::Debug for ConfigClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigClient")
            .field("destination", &self.destination)
            .field("path", &self.config.path())
            .finish()
    }
}

impl ConfigClient {
    /// Create a client for firewalld on its well-known bus name.
    pub fn new(connection: Arc<dyn Connection>) -> Self {
        Self::with_destination(connection, BUS_NAME)
    }

    /// Create a client for a firewalld instance on another bus name.
    pub fn with_destination(connection: Arc<dyn Connection>, destination: &str) -> Self {
        let config = connection.object(destination, paths::CONFIG);
        Self {
            connection,
            destination: destination.to_string(),
            config,
        }
    }

    /// Create a client for the bus name set in `config`.
    pub fn from_config(connection: Arc<dyn Connection>, config: &ClientConfig) -> Self {
        Self::with_destination(connection, &config.destination)
    }

    async fn call(&self, ctx: &CallContext, member: &str, args: Vec<Variant>) -> Result<Vec<Variant>> {
        let method = method_name(interfaces::CONFIG, member);
        self.config
            .call(ctx, MethodCall::new(method.as_str()).with_arguments(args))
            .await
            .with_context(|| format!("{} failed", method))
    }

    fn zone_at(&self, path: &str) -> Zone {
        Zone::new(self.connection.object(&self.destination, path))
    }

    /// Names of all zones in the permanent configuration.
    pub async fn get_zone_names(&self, ctx: &CallContext) -> Result<Vec<String>> {
        let reply = self.call(ctx, "getZoneNames", Vec::new()).await?;
        reply_strings("getZoneNames", reply)
    }

    /// Names of all services in the permanent configuration.
    pub async fn get_service_names(&self, ctx: &CallContext) -> Result<Vec<String>> {
        let reply = self.call(ctx, "getServiceNames", Vec::new()).await?;
        reply_strings("getServiceNames", reply)
    }

    /// Object paths of all zones in the permanent configuration.
    pub async fn list_zones(&self, ctx: &CallContext) -> Result<Vec<String>> {
        let reply = self.call(ctx, "listZones", Vec::new()).await?;
        reply_strings("listZones", reply)
    }

    /// Resolve a zone name to a handle.
    pub async fn get_zone_by_name(&self, ctx: &CallContext, name: &str) -> Result<Zone> {
        let reply = self.call(ctx, "getZoneByName", vec![name.into()]).await?;
        let path = reply_str("getZoneByName", reply)?;
        Ok(self.zone_at(&path))
    }

    /// Object path of the service with the given name.
    pub async fn get_service_by_name(&self, ctx: &CallContext, name: &str) -> Result<String> {
        let reply = self.call(ctx, "getServiceByName", vec![name.into()]).await?;
        reply_str("getServiceByName", reply)
    }

    /// Name of the zone an interface is bound to, empty if none.
    pub async fn get_zone_of_interface(&self, ctx: &CallContext, interface: &str) -> Result<String> {
        let reply = self.call(ctx, "getZoneOfInterface", vec![interface.into()]).await?;
        reply_str("getZoneOfInterface", reply)
    }

    /// Name of the zone a source is bound to, empty if none.
    pub async fn get_zone_of_source(&self, ctx: &CallContext, source: &str) -> Result<String> {
        let reply = self.call(ctx, "getZoneOfSource", vec![source.into()]).await?;
        reply_str("getZoneOfSource", reply)
    }

    /// Add a zone using the positional encoding.
    #[deprecated(note = "use `add_zone2`, which also carries priorities and forwarding")]
    pub async fn add_zone(&self, ctx: &CallContext, name: &str, settings: &ZoneSettings) -> Result<Zone> {
        let args = vec![name.into(), Variant::Struct(settings.to_sequence())];
        let reply = self.call(ctx, "addZone", args).await?;
        let path = reply_str("addZone", reply)?;
        info!("Added zone {} at {}", name, path);
        Ok(self.zone_at(&path))
    }

    /// Add a zone using the named encoding.
    pub async fn add_zone2(&self, ctx: &CallContext, name: &str, settings: &ZoneSettings) -> Result<Zone> {
        let args = vec![name.into(), Variant::Map(settings.to_mapping())];
        let reply = self.call(ctx, "addZone2", args).await?;
        let path = reply_str("addZone2", reply)?;
        info!("Added zone {} at {}", name, path);
        Ok(self.zone_at(&path))
    }
}
