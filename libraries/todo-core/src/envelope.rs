//! Standard `{status, timestamp, data}` wrapper for JSON API responses.

use chrono::{SecondsFormat, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{json, Value};
use std::fmt;

/// Outcome marker carried by every envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    /// Status code below 300
    Success,
    /// Status code 300 and above
    Error,
}

impl EnvelopeStatus {
    /// Classify an HTTP status code
    pub fn from_status_code(status_code: u16) -> Self {
        if status_code < 300 {
            EnvelopeStatus::Success
        } else {
            EnvelopeStatus::Error
        }
    }

    /// Wire name of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvelopeStatus::Success => "success",
            EnvelopeStatus::Error => "error",
        }
    }
}

impl fmt::Display for EnvelopeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response envelope, constructed fresh per response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T = Value> {
    /// `success` or `error`
    pub status: EnvelopeStatus,
    /// ISO-8601 UTC timestamp with millisecond precision
    pub timestamp: String,
    /// Wrapped payload
    pub data: T,
}

impl Envelope<Value> {
    /// Wrap `data` for a response with `status_code`.
    ///
    /// Never panics: values with no JSON form become `null`, and a payload
    /// that cannot be serialized at all is replaced by a placeholder object.
    pub fn wrap<T>(data: &T, status_code: u16) -> Self
    where
        T: Serialize + fmt::Debug + ?Sized,
    {
        Self {
            status: EnvelopeStatus::from_status_code(status_code),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            data: to_safe_value(data),
        }
    }
}

impl<T> Envelope<T> {
    /// Whether the envelope reports success
    pub fn is_success(&self) -> bool {
        self.status == EnvelopeStatus::Success
    }
}

/// Convert `data` to JSON, substituting a placeholder on failure.
pub fn to_safe_value<T>(data: &T) -> Value
where
    T: Serialize + fmt::Debug + ?Sized,
{
    match serde_json::to_value(data) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Response payload could not be serialized: {}", e);
            json!({
                "error": "Unserializable data",
                "originalData": format!("{:?}", data),
            })
        }
    }
}

/// Regular expression that serializes as its `/source/` literal.
#[derive(Debug, Clone)]
pub struct Pattern(pub Regex);

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Self(regex)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.0.as_str())
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Debug, Serialize)]
    struct Payload {
        name: &'static str,
        missing: Option<u32>,
        ratio: f64,
        matcher: Pattern,
    }

    #[test]
    fn test_status_follows_status_code() {
        assert_eq!(Envelope::wrap(&1, 200).status, EnvelopeStatus::Success);
        assert_eq!(Envelope::wrap(&1, 299).status, EnvelopeStatus::Success);
        assert_eq!(Envelope::wrap(&1, 302).status, EnvelopeStatus::Error);
        assert_eq!(Envelope::wrap(&1, 500).status, EnvelopeStatus::Error);
    }

    #[test]
    fn test_envelope_has_exactly_three_keys() {
        let value = serde_json::to_value(Envelope::wrap(&json!({"a": 1}), 200)).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();

        assert_eq!(keys.len(), 3);
        assert!(value.get("status").is_some());
        assert!(value.get("timestamp").is_some());
        assert!(value.get("data").is_some());
        assert_eq!(value["status"], "success");
    }

    #[test]
    fn test_timestamp_is_iso_8601() {
        let envelope = Envelope::wrap(&"x", 200);
        assert!(envelope.timestamp.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&envelope.timestamp).is_ok());
    }

    #[test]
    fn test_values_without_json_form_become_null() {
        let payload = Payload {
            name: "health",
            missing: None,
            ratio: f64::NAN,
            matcher: Pattern(Regex::new("^/api/v\\d+$").unwrap()),
        };

        let envelope = Envelope::wrap(&payload, 200);
        assert_eq!(envelope.data["name"], "health");
        assert!(envelope.data["missing"].is_null());
        assert!(envelope.data["ratio"].is_null());
        assert_eq!(envelope.data["matcher"], "/^/api/v\\d+$/");
    }

    #[test]
    fn test_unserializable_payload_is_replaced() {
        let mut map = HashMap::new();
        map.insert((1u8, 2u8), "tuple keys have no JSON form");

        let envelope = Envelope::wrap(&map, 200);
        assert_eq!(envelope.data["error"], "Unserializable data");
        assert!(envelope.data["originalData"]
            .as_str()
            .unwrap()
            .contains("tuple keys"));
    }

    #[test]
    fn test_round_trips_through_json() {
        let envelope = Envelope::wrap(&json!({"message": "hi"}), 404);
        let text = serde_json::to_string(&envelope).unwrap();
        let parsed: Envelope = serde_json::from_str(&text).unwrap();

        assert_eq!(parsed.status, EnvelopeStatus::Error);
        assert!(!parsed.is_success());
        assert_eq!(parsed.data["message"], "hi");
    }
}
