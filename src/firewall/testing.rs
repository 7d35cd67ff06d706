// Firewalld Zones - Test Transport
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! In-memory connection that records calls and serves canned replies.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use super::call::{CallContext, Caller, Connection, MethodCall};
use crate::codec::Variant;

/// A call as seen by the fake transport.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub destination: String,
    pub path: String,
    pub ctx: CallContext,
    pub call: MethodCall,
}

#[derive(Default)]
struct State {
    calls: Vec<Recorded>,
    replies: HashMap<String, Result<Vec<Variant>, String>>,
}

/// Fake connection shared by every object it hands out.
#[derive(Clone, Default)]
pub struct FakeConnection {
    state: Arc<Mutex<State>>,
}

impl FakeConnection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply to `method` (fully qualified) with `reply`.
    pub fn reply(&self, method: &str, reply: Vec<Variant>) {
        let mut state = self.state.lock().unwrap();
        state.replies.insert(method.to_string(), Ok(reply));
    }

    /// Fail `method` with `message`.
    pub fn fail(&self, method: &str, message: &str) {
        let mut state = self.state.lock().unwrap();
        state.replies.insert(method.to_string(), Err(message.to_string()));
    }

    pub fn calls(&self) -> Vec<Recorded> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn last_call(&self) -> Recorded {
        self.calls().pop().expect("no call recorded")
    }
}

impl Connection for FakeConnection {
    fn object(&self, destination: &str, path: &str) -> Arc<dyn Caller> {
        Arc::new(FakeObject {
            destination: destination.to_string(),
            path: path.to_string(),
            state: self.state.clone(),
        })
    }
}

struct FakeObject {
    destination: String,
    path: String,
    state: Arc<Mutex<State>>,
}

#[async_trait]
impl Caller for FakeObject {
    fn path(&self) -> &str {
        &self.path
    }

    async fn call(&self, ctx: &CallContext, call: MethodCall) -> Result<Vec<Variant>> {
        let mut state = self.state.lock().unwrap();
        let reply = state.replies.get(&call.method).cloned();
        state.calls.push(Recorded {
            destination: self.destination.clone(),
            path: self.path.clone(),
            ctx: *ctx,
            call,
        });
        match reply {
            Some(Ok(values)) => Ok(values),
            Some(Err(message)) => Err(anyhow!(message)),
            None => Ok(Vec::new()),
        }
    }
}
