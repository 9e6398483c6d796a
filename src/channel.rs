//! Method channel for host bindings.
//!
//! Hosts that bridge into the engine through named method calls (for
//! example a UI toolkit's platform channel) forward each call here
//! unchanged. Supported methods:
//!
//! - `shouldBlockUrl` with `{"url": "..."}` → `bool`
//! - `getBlockedResponse` → `{mimeType, encoding, statusCode, reasonPhrase}`
//! - `getPatternCount` → integer
//! - `explainUrl` with `{"url": "..."}` → decision object

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::classifier::Classifier;
use crate::error::Result;
use crate::response::build_blocked_response;

/// A method call coming from the host.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub arguments: Value,
}

impl MethodCall {
    /// Create a method call.
    pub fn new(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }

    /// Parse a method call from a JSON string.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Get a string argument. Missing or non-string values are `None`.
    pub fn argument_str(&self, name: &str) -> Option<&str> {
        self.arguments.get(name).and_then(Value::as_str)
    }
}

/// Result of a method call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "camelCase")]
pub enum MethodResult {
    Success(Value),
    NotImplemented,
}

/// MethodChannel dispatches host method calls to a classifier.
#[derive(Debug, Clone)]
pub struct MethodChannel {
    classifier: Classifier,
}

impl MethodChannel {
    /// Create a channel over a classifier.
    pub fn new(classifier: Classifier) -> Self {
        Self { classifier }
    }

    /// Handle a single method call.
    pub fn handle(&self, call: &MethodCall) -> MethodResult {
        match call.method.as_str() {
            "shouldBlockUrl" => {
                let url = call.argument_str("url");
                MethodResult::Success(Value::Bool(self.classifier.should_block(url)))
            }
            "explainUrl" => {
                let decision = self.classifier.explain(call.argument_str("url"));
                MethodResult::Success(json!(decision))
            }
            "getBlockedResponse" => {
                let resp = build_blocked_response();
                MethodResult::Success(json!({
                    "mimeType": resp.mime_type,
                    "encoding": resp.encoding,
                    "statusCode": resp.status_code,
                    "reasonPhrase": resp.reason_phrase,
                }))
            }
            "getPatternCount" => {
                MethodResult::Success(json!(self.classifier.store().pattern_count()))
            }
            other => {
                log::debug!("Method not implemented: {}", other);
                MethodResult::NotImplemented
            }
        }
    }

    /// Handle a call encoded as one JSON line and encode the reply.
    pub fn handle_json(&self, line: &str) -> Result<String> {
        let call = MethodCall::from_json(line)?;
        Ok(serde_json::to_string(&self.handle(&call))?)
    }
}
