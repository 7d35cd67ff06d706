// Firewalld Zones - Zone Handle
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Handle on one zone of the permanent configuration.

use std::fmt;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use tracing::info;

use super::call::{single_reply, CallContext, Caller, MethodCall};
use super::{interfaces, method_name};
use crate::codec::Variant;
use crate::models::{ForwardPort, Port, ZoneSettings};

/// A zone object at `org.fedoraproject.FirewallD1.config.zone`.
///
/// Every method is a single call: arguments go out as given and failures
/// come back unchanged, with the method name attached as context.
#[derive(Clone)]
pub struct Zone {
    caller: Arc<dyn Caller>,
}

impl fmt::Debug for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Zone").field("path", &self.path()).finish()
    }
}

impl Zone {
    pub(crate) fn new(caller: Arc<dyn Caller>) -> Self {
        Self { caller }
    }

    /// Object path of the zone.
    pub fn path(&self) -> &str {
        self.caller.path()
    }

    async fn call(&self, ctx: &CallContext, member: &str, args: Vec<Variant>) -> Result<Vec<Variant>> {
        let method = method_name(interfaces::CONFIG_ZONE, member);
        self.caller
            .call(ctx, MethodCall::new(method.as_str()).with_arguments(args))
            .await
            .with_context(|| format!("{} failed", method))
    }

    async fn call_void(&self, ctx: &CallContext, member: &str, args: Vec<Variant>) -> Result<()> {
        self.call(ctx, member, args).await.map(|_| ())
    }

    /// Permanent settings in the positional encoding.
    #[deprecated(note = "use `get_settings2`, which also carries priorities and forwarding")]
    pub async fn get_settings(&self, ctx: &CallContext) -> Result<ZoneSettings> {
        let reply = self.call(ctx, "getSettings", Vec::new()).await?;
        let value = single_reply("getSettings", reply)?;
        let slots = value
            .as_seq()
            .ok_or_else(|| anyhow!("getSettings returned `{}`, not a tuple", value.signature()))?;
        Ok(ZoneSettings::from_sequence(slots)?)
    }

    /// Permanent settings in the named encoding.
    pub async fn get_settings2(&self, ctx: &CallContext) -> Result<ZoneSettings> {
        let reply = self.call(ctx, "getSettings2", Vec::new()).await?;
        let value = single_reply("getSettings2", reply)?;
        let map = value
            .as_map()
            .ok_or_else(|| anyhow!("getSettings2 returned `{}`, not a dictionary", value.signature()))?;
        Ok(ZoneSettings::from_mapping(map)?)
    }

    /// Replace the zone's settings using the positional encoding.
    pub async fn update(&self, ctx: &CallContext, settings: &ZoneSettings) -> Result<()> {
        self.call_void(ctx, "update", vec![Variant::Struct(settings.to_sequence())])
            .await
    }

    /// Replace the zone's settings using the named encoding.
    pub async fn update2(&self, ctx: &CallContext, settings: &ZoneSettings) -> Result<()> {
        self.call_void(ctx, "update2", vec![Variant::Map(settings.to_mapping())])
            .await
    }

    /// Remove the zone from the permanent configuration.
    pub async fn remove(&self, ctx: &CallContext) -> Result<()> {
        self.call_void(ctx, "remove", Vec::new()).await?;
        info!("Removed zone {}", self.path());
        Ok(())
    }

    pub async fn rename(&self, ctx: &CallContext, name: &str) -> Result<()> {
        self.call_void(ctx, "rename", vec![name.into()]).await?;
        info!("Renamed zone {} to {}", self.path(), name);
        Ok(())
    }

    pub async fn set_description(&self, ctx: &CallContext, description: &str) -> Result<()> {
        self.call_void(ctx, "setDescription", vec![description.into()]).await
    }

    /// Set the short name.
    pub async fn set_name(&self, ctx: &CallContext, short: &str) -> Result<()> {
        self.call_void(ctx, "setShort", vec![short.into()]).await
    }

    pub async fn set_target(&self, ctx: &CallContext, target: &str) -> Result<()> {
        self.call_void(ctx, "setTarget", vec![target.into()]).await
    }

    pub async fn set_version(&self, ctx: &CallContext, version: &str) -> Result<()> {
        self.call_void(ctx, "setVersion", vec![version.into()]).await
    }

    pub async fn add_service(&self, ctx: &CallContext, service: &str) -> Result<()> {
        self.call_void(ctx, "addService", vec![service.into()]).await
    }

    pub async fn remove_service(&self, ctx: &CallContext, service: &str) -> Result<()> {
        self.call_void(ctx, "removeService", vec![service.into()]).await
    }

    pub async fn add_port(&self, ctx: &CallContext, port: &Port) -> Result<()> {
        self.call_void(ctx, "addPort", tuple_args(port.to_fields())).await
    }

    pub async fn remove_port(&self, ctx: &CallContext, port: &Port) -> Result<()> {
        self.call_void(ctx, "removePort", tuple_args(port.to_fields())).await
    }

    pub async fn add_source_port(&self, ctx: &CallContext, port: &Port) -> Result<()> {
        self.call_void(ctx, "addSourcePort", tuple_args(port.to_fields())).await
    }

    pub async fn remove_source_port(&self, ctx: &CallContext, port: &Port) -> Result<()> {
        self.call_void(ctx, "removeSourcePort", tuple_args(port.to_fields())).await
    }

    pub async fn add_forward_port(&self, ctx: &CallContext, forward: &ForwardPort) -> Result<()> {
        self.call_void(ctx, "addForwardPort", tuple_args(forward.to_fields())).await
    }

    pub async fn remove_forward_port(&self, ctx: &CallContext, forward: &ForwardPort) -> Result<()> {
        self.call_void(ctx, "removeForwardPort", tuple_args(forward.to_fields())).await
    }

    pub async fn add_protocol(&self, ctx: &CallContext, protocol: &str) -> Result<()> {
        self.call_void(ctx, "addProtocol", vec![protocol.into()]).await
    }

    pub async fn remove_protocol(&self, ctx: &CallContext, protocol: &str) -> Result<()> {
        self.call_void(ctx, "removeProtocol", vec![protocol.into()]).await
    }

    pub async fn add_interface(&self, ctx: &CallContext, interface: &str) -> Result<()> {
        self.call_void(ctx, "addInterface", vec![interface.into()]).await
    }

    pub async fn remove_interface(&self, ctx: &CallContext, interface: &str) -> Result<()> {
        self.call_void(ctx, "removeInterface", vec![interface.into()]).await
    }

    /// Bind a source address or network (`192.168.0.0/24`, `ipset:name`).
    pub async fn add_source(&self, ctx: &CallContext, source: &str) -> Result<()> {
        self.call_void(ctx, "addSource", vec![source.into()]).await
    }

    pub async fn remove_source(&self, ctx: &CallContext, source: &str) -> Result<()> {
        self.call_void(ctx, "removeSource", vec![source.into()]).await
    }

    pub async fn add_rich_rule(&self, ctx: &CallContext, rule: &str) -> Result<()> {
        self.call_void(ctx, "addRichRule", vec![rule.into()]).await
    }

    pub async fn remove_rich_rule(&self, ctx: &CallContext, rule: &str) -> Result<()> {
        self.call_void(ctx, "removeRichRule", vec![rule.into()]).await
    }

    pub async fn add_icmp_block(&self, ctx: &CallContext, icmp_type: &str) -> Result<()> {
        self.call_void(ctx, "addIcmpBlock", vec![icmp_type.into()]).await
    }

    pub async fn remove_icmp_block(&self, ctx: &CallContext, icmp_type: &str) -> Result<()> {
        self.call_void(ctx, "removeIcmpBlock", vec![icmp_type.into()]).await
    }

    pub async fn add_icmp_block_inversion(&self, ctx: &CallContext) -> Result<()> {
        self.call_void(ctx, "addIcmpBlockInversion", Vec::new()).await
    }

    pub async fn remove_icmp_block_inversion(&self, ctx: &CallContext) -> Result<()> {
        self.call_void(ctx, "removeIcmpBlockInversion", Vec::new()).await
    }

    pub async fn add_masquerade(&self, ctx: &CallContext) -> Result<()> {
        self.call_void(ctx, "addMasquerade", Vec::new()).await
    }

    pub async fn remove_masquerade(&self, ctx: &CallContext) -> Result<()> {
        self.call_void(ctx, "removeMasquerade", Vec::new()).await
    }
}

fn tuple_args(fields: Vec<String>) -> Vec<Variant> {
    fields.into_iter().map(Variant::Str).collect()
}
