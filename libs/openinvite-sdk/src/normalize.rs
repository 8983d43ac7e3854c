//! Maps raw backend payloads into the canonical [`Entitlements`] shape.
//!
//! Older backend builds and billing webhooks report "is this user premium"
//! under different keys. The plan is read from the first key present, in
//! this order:
//!
//! 1. `plan` (string)
//! 2. `tier` (string)
//! 3. `subscription.tier` (string)
//! 4. `isPro` (bool)
//! 5. `isPremium` (bool)
//!
//! Missing limits, features and usage fall back to the restrictive FREE values.

use openinvite_types::{
    Entitlements, PayloadError, Plan, PlanFeatures, PlanLimits, UsageCounts,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

const BODY_KEYS: [&str; 4] = ["plan", "limits", "features", "usage"];

/// Normalize a raw `GET /api/entitlements` body.
pub fn normalize_entitlements(raw: &Value) -> Result<Entitlements, PayloadError> {
    let root = raw
        .as_object()
        .ok_or_else(|| PayloadError::NotAnObject(json_kind(raw)))?;
    let body = unwrap_envelope(root);

    Ok(Entitlements {
        plan: detect_plan(body),
        limits: section::<PlanLimits>(body, "limits")?.unwrap_or_else(PlanLimits::free),
        features: section::<PlanFeatures>(body, "features")?.unwrap_or_else(PlanFeatures::free),
        usage: section::<UsageCounts>(body, "usage")?.unwrap_or_default(),
    })
}

/// `{"entitlements": {...}}` is accepted as an envelope when the inner
/// object looks like an entitlements body.
fn unwrap_envelope(root: &Map<String, Value>) -> &Map<String, Value> {
    match root.get("entitlements").and_then(Value::as_object) {
        Some(inner) if BODY_KEYS.iter().any(|k| inner.contains_key(*k)) => inner,
        _ => root,
    }
}

fn detect_plan(body: &Map<String, Value>) -> Plan {
    let as_plan = |v: Option<&Value>| v.and_then(Value::as_str).map(Plan::from_raw);
    let as_flag = |v: Option<&Value>| {
        v.and_then(Value::as_bool)
            .map(|pro| if pro { Plan::Pro } else { Plan::Free })
    };

    as_plan(body.get("plan"))
        .or_else(|| as_plan(body.get("tier")))
        .or_else(|| as_plan(body.get("subscription").and_then(|s| s.get("tier"))))
        .or_else(|| as_flag(body.get("isPro")))
        .or_else(|| as_flag(body.get("isPremium")))
        .unwrap_or_default()
}

fn section<T: DeserializeOwned>(
    body: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<T>, PayloadError> {
    match body.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|source| PayloadError::InvalidField { field, source }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
