use serde::{Deserialize, Serialize};

/// Ordering directive attached to every request. The service is always asked
/// for an ascending permutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
}

/// Payload serialized into the single user message of a sort request.
#[derive(Debug, Clone, Serialize)]
pub struct SortRequest {
    pub array: Vec<f64>,
    pub order: SortOrder,
}

impl SortRequest {
    pub fn ascending(array: Vec<f64>) -> Self {
        Self {
            array,
            order: SortOrder::Asc,
        }
    }
}

/// Reply contract: an object with exactly one field, "sorted". Decoding is
/// strict; a missing or mistyped field fails instead of being coerced.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SortReply {
    pub sorted: Vec<f64>,
}

impl SortReply {
    /// JSON schema sent alongside each request so the service is constrained
    /// to the reply contract.
    pub fn schema() -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "sorted": {
                    "type": "array",
                    "items": { "type": "number" }
                }
            },
            "required": ["sorted"],
            "additionalProperties": false
        })
    }
}
