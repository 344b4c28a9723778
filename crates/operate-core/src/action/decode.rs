//! Decoding of model replies into typed actions
//!
//! The wire shape is a JSON object per action with an `operation` key
//! (case-insensitive) and a `thought`, plus kind-specific keys:
//! `keys` for press/hotkey, `content` for write, `x`/`y` for click and
//! `summary` for done. Unrecognised operations become `ActionKind::Unknown`
//! so the turn can stop on them. Within a batch, an entry that fails to decode
//! becomes `ActionKind::Malformed` and is only a fault if the turn reaches it.

use super::{Action, ActionKind, ClickPoint};
use crate::error::{OperateError, OperateResult};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

static CODE_FENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(?:json|JSON)?\s*(.*?)```").expect("valid code fence regex"));

/// Pull the JSON document out of a model reply.
///
/// Models often wrap the operations in a fenced code block; anything outside
/// the first fence is ignored.
pub fn extract_json_payload(content: &str) -> &str {
    match CODE_FENCE_RE.captures(content).and_then(|c| c.get(1)) {
        Some(inner) => inner.as_str().trim(),
        None => content.trim(),
    }
}

/// Decode a full model reply into an ordered batch of actions.
///
/// Only an unparseable reply is an error here; per-entry failures are kept
/// in place as `ActionKind::Malformed`.
pub fn decode_batch(content: &str) -> OperateResult<Vec<Action>> {
    let payload = extract_json_payload(content);
    let value: Value = serde_json::from_str(payload).map_err(|e| {
        OperateError::action_decode_with_payload(
            format!("model reply is not valid JSON: {}", e),
            payload,
        )
    })?;

    match value {
        Value::Array(items) => Ok(items.iter().map(decode_entry).collect()),
        Value::Object(_) => Ok(vec![decode_entry(&value)]),
        other => Err(OperateError::action_decode_with_payload(
            "expected a list of operations",
            other.to_string(),
        )),
    }
}

fn decode_entry(value: &Value) -> Action {
    decode_action(value).unwrap_or_else(|err| {
        let message = match err {
            OperateError::ActionDecode { message, .. } => message,
            other => other.to_string(),
        };
        Action {
            thought: value
                .get("thought")
                .and_then(Value::as_str)
                .map(str::to_string),
            kind: ActionKind::Malformed {
                operation: value
                    .get("operation")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                message,
                payload: value.clone(),
            },
        }
    })
}

/// Decode a single operation object
pub fn decode_action(value: &Value) -> OperateResult<Action> {
    let object = value.as_object().ok_or_else(|| {
        OperateError::action_decode_with_payload("operation must be an object", value.to_string())
    })?;

    let operation = object
        .get("operation")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            OperateError::action_decode_with_payload(
                "missing `operation` field",
                value.to_string(),
            )
        })?;

    let thought = object
        .get("thought")
        .and_then(Value::as_str)
        .map(str::to_string);

    let kind = match operation.trim().to_lowercase().as_str() {
        "press" => ActionKind::Press {
            keys: decode_keys(object, value)?,
        },
        "hotkey" => ActionKind::Hotkey {
            keys: decode_keys(object, value)?,
        },
        "write" => ActionKind::Write {
            content: required_str(object, "content", value)?.to_string(),
        },
        "click" => ActionKind::Click {
            point: ClickPoint::new(
                decode_coordinate(object, "x", value)?,
                decode_coordinate(object, "y", value)?,
            ),
        },
        "done" => ActionKind::Done {
            summary: object
                .get("summary")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        },
        _ => ActionKind::Unknown {
            operation: operation.to_string(),
            payload: value.clone(),
        },
    };

    Ok(Action { thought, kind })
}

fn required_str<'a>(
    object: &'a Map<String, Value>,
    field: &str,
    value: &Value,
) -> OperateResult<&'a str> {
    object.get(field).and_then(Value::as_str).ok_or_else(|| {
        OperateError::action_decode_with_payload(
            format!("missing string field `{}`", field),
            value.to_string(),
        )
    })
}

fn decode_keys(object: &Map<String, Value>, value: &Value) -> OperateResult<Vec<String>> {
    let keys = match object.get("keys") {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    OperateError::action_decode_with_payload(
                        "`keys` must contain only strings",
                        value.to_string(),
                    )
                })
            })
            .collect::<OperateResult<Vec<_>>>()?,
        Some(Value::String(key)) => vec![key.clone()],
        _ => {
            return Err(OperateError::action_decode_with_payload(
                "missing `keys` field",
                value.to_string(),
            ));
        }
    };

    if keys.is_empty() {
        return Err(OperateError::action_decode_with_payload(
            "`keys` must not be empty",
            value.to_string(),
        ));
    }
    Ok(keys)
}

fn decode_coordinate(object: &Map<String, Value>, field: &str, value: &Value) -> OperateResult<f64> {
    let parsed = match object.get(field) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed
        .filter(|v| v.is_finite())
        .ok_or_else(|| {
            OperateError::action_decode_with_payload(
                format!("missing or non-numeric coordinate `{}`", field),
                value.to_string(),
            )
        })
}
