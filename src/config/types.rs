//! Build variant types and defaults for project configuration.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Entrypoint used when none is configured, relative to root.
pub const DEFAULT_ENTRYPOINT: &str = "index.html";

/// Source globs used when none are configured.
pub fn default_sources() -> Vec<String> {
    vec!["src/**/*".to_string()]
}

/// One named build variant.
///
/// Only `name` is interpreted here. The flags are handed to the build
/// pipeline as-is: a well-known flag is lifted into its typed field only
/// when its value has the expected type, and every other key (mistyped
/// flags included) lands in `extra`, so nothing is lost on a round trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    /// Build name. Required once more than one build is defined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether the build bundles fragments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle: Option<bool>,

    /// Whether prefetch links are inserted into each fragment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_prefetch_links: Option<bool>,

    /// Whether a service worker is generated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_service_worker: Option<bool>,

    /// Path to a service-worker precache config file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sw_precache_config: Option<String>,

    /// Unknown or mistyped fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl BuildConfig {
    /// Build a record from one `builds` entry.
    ///
    /// Never fails. A non-object entry becomes a build without a name.
    pub fn from_value(value: Value) -> Self {
        let Value::Object(mut fields) = value else {
            return Self::default();
        };

        Self {
            name: take_field(&mut fields, "name", |v| v.as_str().map(str::to_owned)),
            bundle: take_field(&mut fields, "bundle", Value::as_bool),
            insert_prefetch_links: take_field(&mut fields, "insertPrefetchLinks", Value::as_bool),
            add_service_worker: take_field(&mut fields, "addServiceWorker", Value::as_bool),
            sw_precache_config: take_field(&mut fields, "swPrecacheConfig", |v| {
                v.as_str().map(str::to_owned)
            }),
            extra: fields.into_iter().collect(),
        }
    }
}

impl<'de> Deserialize<'de> for BuildConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

/// Remove `key` from `fields` only if `convert` accepts its value.
fn take_field<T>(
    fields: &mut Map<String, Value>,
    key: &str,
    convert: impl Fn(&Value) -> Option<T>,
) -> Option<T> {
    let converted = fields.get(key).and_then(convert)?;
    fields.remove(key);
    Some(converted)
}

/// The `builds` option as supplied by the user.
///
/// Anything that is not a JSON array is kept verbatim in `Malformed` so
/// validation can report it instead of parsing failing. Array elements are
/// never rejected here; see [`BuildConfig::from_value`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Builds {
    List(Vec<BuildConfig>),
    Malformed(Value),
}

impl Builds {
    /// Classify a raw `builds` value by its JSON shape.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Array(entries) => {
                Builds::List(entries.into_iter().map(BuildConfig::from_value).collect())
            }
            other => Builds::Malformed(other),
        }
    }

    /// The build list, if well-formed.
    pub fn as_list(&self) -> Option<&[BuildConfig]> {
        match self {
            Builds::List(builds) => Some(builds),
            Builds::Malformed(_) => None,
        }
    }
}

impl<'de> Deserialize<'de> for Builds {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}
