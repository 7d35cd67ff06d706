// Firewalld Zones - Call Mechanism
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Transport-independent contract for dispatching method calls.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::codec::Variant;
use crate::error::DecodeError;

/// Per-call options supplied by the caller.
///
/// Each forwarding operation hands its context to exactly one underlying
/// call. Cancelling means dropping the returned future.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallContext {
    /// Give up if no reply arrives within this time. `None` defers to the
    /// transport's default.
    pub timeout: Option<Duration>,
}

impl CallContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }
}

/// A method call ready to be dispatched.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodCall {
    /// Fully qualified `interface.member` name.
    pub method: String,
    pub args: Vec<Variant>,
}

impl MethodCall {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            args: Vec::new(),
        }
    }

    pub fn with_arguments(mut self, args: Vec<Variant>) -> Self {
        self.args.extend(args);
        self
    }

    pub fn with_arg(mut self, arg: impl Into<Variant>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Interface and member, split at the last dot.
    pub fn interface_and_member(&self) -> (Option<&str>, &str) {
        match self.method.rsplit_once('.') {
            Some((interface, member)) => (Some(interface), member),
            None => (None, self.method.as_str()),
        }
    }
}

/// A remote object methods can be called on.
#[async_trait]
pub trait Caller: Send + Sync {
    /// Object path this caller addresses.
    fn path(&self) -> &str;

    /// Dispatch `call` and return the reply arguments.
    async fn call(&self, ctx: &CallContext, call: MethodCall) -> Result<Vec<Variant>>;
}

/// Resolves remote objects to callers.
pub trait Connection: Send + Sync {
    fn object(&self, destination: &str, path: &str) -> Arc<dyn Caller>;
}

/// The single return value of `method`.
pub(crate) fn single_reply(method: &str, reply: Vec<Variant>) -> Result<Variant> {
    reply
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("{method} returned no value"))
}

pub(crate) fn reply_str(method: &'static str, reply: Vec<Variant>) -> Result<String> {
    let value = single_reply(method, reply)?;
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| anyhow::Error::from(DecodeError::mismatch(method, "string", value.signature())))
}

pub(crate) fn reply_strings(method: &'static str, reply: Vec<Variant>) -> Result<Vec<String>> {
    let value = single_reply(method, reply)?;
    let items = value
        .as_seq()
        .ok_or_else(|| DecodeError::mismatch(method, "array of strings", value.signature()))?;
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| anyhow::Error::from(DecodeError::mismatch(method, "array of strings", value.signature())))
        })
        .collect()
}
