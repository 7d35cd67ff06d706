// Firewalld Zones - D-Bus Transport
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! zbus implementation of the call mechanism.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use tracing::{debug, info};
use zbus::zvariant::{Array, Dict, Signature, Structure, StructureBuilder, Value};

use super::call::{CallContext, Caller, Connection, MethodCall};
use crate::codec::{Kind, Variant};
use crate::config::{BusKind, ClientConfig};
use crate::error::DecodeError;

/// Connection to firewalld over the system or session bus.
#[derive(Debug, Clone)]
pub struct BusConnection {
    connection: zbus::Connection,
    default_timeout: Option<Duration>,
}

impl BusConnection {
    /// Connect to the bus named in `config`.
    pub async fn connect(config: &ClientConfig) -> Result<Self> {
        info!("Connecting to the {:?} bus...", config.bus);

        let connection = match config.bus {
            BusKind::System => zbus::Connection::system().await,
            BusKind::Session => zbus::Connection::session().await,
        }
        .context("Failed to connect to D-Bus")?;

        info!("Connected to D-Bus");
        Ok(Self {
            connection,
            default_timeout: config.call_timeout(),
        })
    }

    /// Wrap an existing zbus connection.
    pub fn from_connection(connection: zbus::Connection, default_timeout: Option<Duration>) -> Self {
        Self {
            connection,
            default_timeout,
        }
    }
}

impl Connection for BusConnection {
    fn object(&self, destination: &str, path: &str) -> Arc<dyn Caller> {
        Arc::new(BusObject {
            connection: self.connection.clone(),
            destination: destination.to_string(),
            path: path.to_string(),
            default_timeout: self.default_timeout,
        })
    }
}

/// A remote object on the bus.
struct BusObject {
    connection: zbus::Connection,
    destination: String,
    path: String,
    default_timeout: Option<Duration>,
}

#[async_trait]
impl Caller for BusObject {
    fn path(&self) -> &str {
        &self.path
    }

    async fn call(&self, ctx: &CallContext, call: MethodCall) -> Result<Vec<Variant>> {
        let (interface, member) = call.interface_and_member();
        let args = call
            .args
            .iter()
            .map(to_value)
            .collect::<Result<Vec<_>>>()?;

        debug!("{} on {} ({} args)", call.method, self.path, args.len());

        let pending = async {
            if args.is_empty() {
                self.connection
                    .call_method(Some(self.destination.as_str()), self.path.as_str(), interface, member, &())
                    .await
            } else {
                let body = args
                    .into_iter()
                    .fold(StructureBuilder::new(), |builder, arg| builder.append_field(arg))
                    .build();
                self.connection
                    .call_method(Some(self.destination.as_str()), self.path.as_str(), interface, member, &body)
                    .await
            }
        };

        let reply = match ctx.timeout.or(self.default_timeout) {
            Some(limit) => tokio::time::timeout(limit, pending)
                .await
                .map_err(|_| anyhow!("no reply within {:?}", limit))??,
            None => pending.await?,
        };

        decode_body(&reply)
    }
}

fn decode_body(reply: &zbus::Message) -> Result<Vec<Variant>> {
    let body = reply.body();
    let Some(sig) = body.signature() else {
        return Ok(Vec::new());
    };
    if sig.as_str().is_empty() {
        return Ok(Vec::new());
    }

    // A lone struct argument deserializes as that struct, not as the
    // argument list wrapping it.
    let single_struct = is_single_struct(sig.as_str());
    let args: Structure<'_> = body.deserialize()?;
    let fields = args.fields().iter().map(from_value).collect::<Result<Vec<_>>>()?;
    if single_struct {
        Ok(vec![Variant::Struct(fields)])
    } else {
        Ok(fields)
    }
}

/// Whether `signature` is exactly one complete struct type.
fn is_single_struct(signature: &str) -> bool {
    if !signature.starts_with('(') {
        return false;
    }
    let mut depth = 0usize;
    for (i, c) in signature.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return i == signature.len() - 1;
                }
            }
            _ => {}
        }
    }
    false
}

fn signature(kind: &Kind) -> Result<Signature<'static>> {
    Ok(Signature::try_from(kind.signature())?)
}

fn to_value(variant: &Variant) -> Result<Value<'static>> {
    let value = match variant {
        Variant::Str(s) => Value::from(s.clone()),
        Variant::Bool(b) => Value::Bool(*b),
        Variant::I32(i) => Value::I32(*i),
        Variant::Seq(kind, items) => {
            let mut array = Array::new(signature(kind)?);
            for item in items {
                let element = to_value(item)?;
                if *kind == Kind::Variant {
                    array.append(Value::Value(Box::new(element)))?;
                } else {
                    array.append(element)?;
                }
            }
            Value::Array(array)
        }
        Variant::Struct(fields) => {
            if fields.is_empty() {
                bail!("cannot encode an empty structure");
            }
            let mut builder = StructureBuilder::new();
            for field in fields {
                builder = builder.append_field(to_value(field)?);
            }
            Value::Structure(builder.build())
        }
        Variant::Map(map) => {
            let mut dict = Dict::new(signature(&Kind::Str)?, signature(&Kind::Variant)?);
            for (key, value) in map {
                dict.append(Value::from(key.clone()), Value::Value(Box::new(to_value(value)?)))?;
            }
            Value::Dict(dict)
        }
        Variant::Other(sig) => bail!("cannot encode opaque wire value `{}`", sig),
    };
    Ok(value)
}

fn from_value(value: &Value<'_>) -> Result<Variant> {
    let variant = match value {
        Value::Str(s) => Variant::Str(s.to_string()),
        Value::ObjectPath(path) => Variant::Str(path.to_string()),
        Value::Bool(b) => Variant::Bool(*b),
        Value::I32(i) => Variant::I32(*i),
        Value::Value(inner) => from_value(inner)?,
        Value::Array(array) => Variant::Seq(
            Kind::parse(array.element_signature().as_str()),
            array.iter().map(from_value).collect::<Result<_>>()?,
        ),
        Value::Structure(structure) => {
            Variant::Struct(structure.fields().iter().map(from_value).collect::<Result<_>>()?)
        }
        Value::Dict(dict) => {
            let mut map = HashMap::new();
            for (key, value) in dict.iter() {
                let key = match key {
                    Value::Str(s) => s.to_string(),
                    other => return Err(DecodeError::Unsupported(other.value_signature().to_string()).into()),
                };
                map.insert(key, from_value(value)?);
            }
            Variant::Map(map)
        }
        other => Variant::Other(other.value_signature().to_string()),
    };
    Ok(variant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::LenientCoercion;
    use crate::models::{ForwardPort, Port, ZoneSettings};

    #[test]
    fn test_string_array_signature() {
        let value = to_value(&Variant::strings(&["ssh", "http"])).unwrap();
        assert_eq!(value.value_signature().as_str(), "as");
        assert_eq!(from_value(&value).unwrap(), Variant::strings(&["ssh", "http"]));
    }

    #[test]
    fn test_empty_tuple_array_keeps_signature() {
        let value = to_value(&Variant::string_tuples(&[])).unwrap();
        assert_eq!(value.value_signature().as_str(), "aas");
    }

    #[test]
    fn test_settings_mapping_through_zvariant() {
        let mut settings = ZoneSettings::new("trusted");
        settings.ports = vec![Port::new("22", "tcp")];
        settings.egress_priority = 4;

        let value = to_value(&Variant::Map(settings.to_mapping())).unwrap();
        assert_eq!(value.value_signature().as_str(), "a{sv}");

        let decoded = from_value(&value).unwrap();
        let map = decoded.as_map().unwrap();
        assert_eq!(ZoneSettings::from_mapping(map).unwrap(), settings);
    }

    #[test]
    fn test_positional_settings_through_zvariant() {
        let mut settings = ZoneSettings::new("work");
        settings.services = vec!["ssh".to_string()];
        settings.masquerade = true;

        let value = to_value(&Variant::Struct(settings.to_sequence())).unwrap();
        assert_eq!(
            value.value_signature().as_str(),
            "(sssbsasaasasbaasasasasasaasb)"
        );

        let decoded = from_value(&value).unwrap();
        assert_eq!(ZoneSettings::from_sequence(decoded.as_seq().unwrap()).unwrap(), settings);
    }

    fn firewalld_settings_tuple() -> Value<'static> {
        let strings = |items: &[&str]| to_value(&Variant::strings(items)).unwrap();
        let tuple = |items: &[&'static str]| -> zbus::zvariant::Structure<'static> {
            items
                .iter()
                .fold(StructureBuilder::new(), |builder, item| builder.append_field(Value::from(*item)))
                .build()
        };

        let mut ports = Array::new(Signature::try_from("(ss)").unwrap());
        ports.append(Value::Structure(tuple(&["22", "tcp"]))).unwrap();
        let mut forward_ports = Array::new(Signature::try_from("(ssss)").unwrap());
        forward_ports
            .append(Value::Structure(tuple(&["80", "tcp", "8080", ""])))
            .unwrap();
        let source_ports = Array::new(Signature::try_from("(ss)").unwrap());

        let fields = vec![
            Value::from("1"),
            Value::from("public"),
            Value::from("For use in public areas."),
            Value::Bool(false),
            Value::from("default"),
            strings(&["ssh", "dhcpv6-client"]),
            Value::Array(ports),
            strings(&[]),
            Value::Bool(true),
            Value::Array(forward_ports),
            strings(&["eth0"]),
            strings(&[]),
            strings(&[]),
            strings(&[]),
            Value::Array(source_ports),
            Value::Bool(false),
        ];
        let settings = fields
            .into_iter()
            .fold(StructureBuilder::new(), |builder, field| builder.append_field(field))
            .build();
        Value::Structure(settings)
    }

    #[test]
    fn test_get_settings_reply_is_one_struct() {
        let body = StructureBuilder::new()
            .append_field(firewalld_settings_tuple())
            .build();
        let reply = zbus::Message::method("/org/fedoraproject/FirewallD1/config/zone/0", "getSettings")
            .unwrap()
            .build(&body)
            .unwrap();
        assert_eq!(
            reply.body().signature().unwrap().as_str(),
            "(sssbsasa(ss)asba(ssss)asasasasa(ss)b)"
        );

        let args = decode_body(&reply).unwrap();
        assert_eq!(args.len(), 1);
        let slots = args[0].as_seq().unwrap();
        assert_eq!(slots.len(), 16);

        let settings = ZoneSettings::from_sequence(slots).unwrap();
        assert_eq!(settings.name, "public");
        assert_eq!(settings.services, vec!["ssh", "dhcpv6-client"]);
        assert_eq!(settings.ports, vec![Port::new("22", "tcp")]);
        assert_eq!(settings.forward_ports, vec![ForwardPort::new("80", "tcp", "8080", "")]);
        assert!(settings.masquerade);
        assert_eq!(settings.interfaces, vec!["eth0"]);
    }

    #[test]
    fn test_multi_argument_reply_is_split() {
        let reply = zbus::Message::method("/org/fedoraproject/FirewallD1/config/zone/0", "addPort")
            .unwrap()
            .build(&("443", "tcp"))
            .unwrap();
        let args = decode_body(&reply).unwrap();
        assert_eq!(args, vec![Variant::from("443"), Variant::from("tcp")]);
    }

    #[test]
    fn test_single_struct_signature() {
        assert!(is_single_struct("(ss)"));
        assert!(is_single_struct("(sa(ss)b)"));
        assert!(!is_single_struct("(ss)(ss)"));
        assert!(!is_single_struct("(ss)s"));
        assert!(!is_single_struct("sa(ss)"));
        assert!(!is_single_struct("a{sv}"));
    }

    #[test]
    fn test_dynamic_array_wraps_elements() {
        let value = to_value(&Variant::dynamic(vec!["a".into(), 3.into()])).unwrap();
        assert_eq!(value.value_signature().as_str(), "av");
        let decoded = from_value(&value).unwrap();
        assert_eq!(LenientCoercion::strings(&decoded), vec!["a"]);
    }

    #[test]
    fn test_opaque_value_not_encodable() {
        assert!(to_value(&Variant::Other("h".to_string())).is_err());
    }
}
