//! Request and response types for the public HTTP API, plus the shape of the
//! generated `sounds.json` document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Generated document
// ---------------------------------------------------------------------------

/// Prefix applied to every key to build its sound resource path.
pub const CUSTOM_SOUND_PREFIX: &str = "custom/";

/// Metadata record for a single derived key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundEntry {
    /// Resource paths played for this key. Always a single `custom/<key>` entry.
    pub sounds: Vec<String>,
}

impl SoundEntry {
    /// Build the record that references `key` as a custom sound.
    pub fn custom(key: &str) -> Self {
        Self {
            sounds: vec![format!("{CUSTOM_SOUND_PREFIX}{key}")],
        }
    }
}

/// Key → record mapping, iterated and serialised in ascending key order.
pub type SoundMap = BTreeMap<String, SoundEntry>;

// ---------------------------------------------------------------------------
// Generate endpoint
// ---------------------------------------------------------------------------

/// Request body for `POST /generate`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Filesystem path of the directory to scan.
    #[serde(default)]
    pub directory: Option<String>,
}

impl GenerateRequest {
    /// Parse a request body without ever failing.
    ///
    /// An empty, malformed, or wrongly-typed body yields a request with no
    /// directory, which the handler rejects like any other missing path.
    /// Only JSON objects are considered; serde would otherwise accept a
    /// positional array for a struct.
    pub fn from_slice_lenient(body: &[u8]) -> Self {
        match serde_json::from_slice::<serde_json::Value>(body) {
            Ok(value @ serde_json::Value::Object(_)) => {
                serde_json::from_value(value).unwrap_or_default()
            }
            _ => Self::default(),
        }
    }

    /// The requested directory with surrounding whitespace removed, or `None`
    /// when nothing usable was provided.
    pub fn trimmed_directory(&self) -> Option<&str> {
        self.directory
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}

/// Successful response body for `POST /generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    /// Pretty-printed [`SoundMap`] ready to be saved as `sounds.json`.
    pub json_text: String,
    /// Number of entries in the map.
    pub count: usize,
}

// ---------------------------------------------------------------------------
// Error response
// ---------------------------------------------------------------------------

/// Error response body returned on any non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable description safe to show to the user.
    pub error: String,
}

impl ErrorResponse {
    /// Construct an [`ErrorResponse`] from a message.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

/// Response body for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process is serving.
    pub status: String,
    /// Crate version of the running binary.
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sound_entry_shape() {
        let value = serde_json::to_value(SoundEntry::custom("kick")).unwrap();
        assert_eq!(value, json!({"sounds": ["custom/kick"]}));
    }

    #[test]
    fn lenient_parse_accepts_garbage() {
        assert!(GenerateRequest::from_slice_lenient(b"").directory.is_none());
        assert!(GenerateRequest::from_slice_lenient(b"{not json").directory.is_none());
        assert!(GenerateRequest::from_slice_lenient(b"[1, 2]").directory.is_none());
        assert!(GenerateRequest::from_slice_lenient(br#"["/tmp"]"#).directory.is_none());
        assert!(GenerateRequest::from_slice_lenient(b"null").directory.is_none());
        assert!(GenerateRequest::from_slice_lenient(br#"{"directory": 42}"#)
            .directory
            .is_none());
        assert!(GenerateRequest::from_slice_lenient(br#"{"other": "x"}"#)
            .directory
            .is_none());
    }

    #[test]
    fn trimmed_directory() {
        let req = GenerateRequest::from_slice_lenient(br#"{"directory": "  /tmp/sfx \n"}"#);
        assert_eq!(req.trimmed_directory(), Some("/tmp/sfx"));

        let blank = GenerateRequest::from_slice_lenient(br#"{"directory": "   "}"#);
        assert_eq!(blank.trimmed_directory(), None);

        let null = GenerateRequest::from_slice_lenient(br#"{"directory": null}"#);
        assert_eq!(null.trimmed_directory(), None);
    }

    #[test]
    fn generate_response_uses_camel_case() {
        let resp = GenerateResponse {
            json_text: "{}".into(),
            count: 0,
        };
        let value = serde_json::to_value(resp).unwrap();
        assert_eq!(value, json!({"jsonText": "{}", "count": 0}));
    }

    #[test]
    fn error_response_new() {
        let e = ErrorResponse::new("Informe um caminho de diretório.");
        assert_eq!(
            serde_json::to_value(e).unwrap(),
            json!({"error": "Informe um caminho de diretório."})
        );
    }
}
