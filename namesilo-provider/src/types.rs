use serde::{Deserialize, Serialize};

// ============ Record ============

/// A single DNS resource record as seen by callers of the provider.
///
/// `id` is assigned by the registrar. An empty `id` means the record is not yet
/// known to the registrar and must be matched against existing records or created.
///
/// `ttl` and `priority` use `0` to mean "not specified": such values are left out
/// of registrar requests so the registrar applies its defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Registrar-assigned identifier, empty when unknown.
    #[serde(default)]
    pub id: String,
    /// Record type, e.g. `TXT` or `A`.
    #[serde(rename = "type")]
    pub record_type: String,
    /// Fully-qualified or zone-relative hostname.
    pub name: String,
    /// Record content.
    #[serde(default)]
    pub value: String,
    /// Time-to-live in seconds, `0` for the registrar default.
    #[serde(default)]
    pub ttl: u32,
    /// Priority / distance, `0` when not applicable.
    #[serde(default)]
    pub priority: u32,
}

impl Record {
    pub fn new(
        record_type: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            record_type: record_type.into(),
            name: name.into(),
            value: value.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    #[must_use]
    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the registrar identifier is known.
    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }

    /// TTL to send to the registrar, `None` when it should be omitted.
    pub fn ttl_param(&self) -> Option<u32> {
        (self.ttl != 0).then_some(self.ttl)
    }

    /// Priority to send to the registrar, `None` when it should be omitted.
    pub fn priority_param(&self) -> Option<u32> {
        (self.priority != 0).then_some(self.priority)
    }
}

// ============ Registrar requests ============

/// Create one record in a registrar domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRecordRequest {
    pub domain: String,
    pub record_type: String,
    /// Zone-relative hostname, empty for the apex.
    pub host: String,
    pub value: String,
    pub ttl: Option<u32>,
    pub priority: Option<u32>,
}

/// Update one existing record, addressed by its registrar ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRecordRequest {
    pub domain: String,
    pub record_id: String,
    /// Zone-relative hostname, empty for the apex.
    pub host: String,
    pub value: String,
    pub ttl: Option<u32>,
    pub priority: Option<u32>,
}

/// Delete one existing record, addressed by its registrar ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRecordRequest {
    pub domain: String,
    pub record_id: String,
}

/// Undecoded registrar reply: HTTP status plus body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_ttl_and_priority_are_omitted() {
        let record = Record::new("TXT", "_acme", "token");
        assert_eq!(record.ttl_param(), None);
        assert_eq!(record.priority_param(), None);

        let record = record.with_ttl(3600).with_priority(10);
        assert_eq!(record.ttl_param(), Some(3600));
        assert_eq!(record.priority_param(), Some(10));
    }

    #[test]
    fn has_id_tracks_empty_string() {
        let record = Record::new("A", "www", "192.0.2.1");
        assert!(!record.has_id());
        assert!(record.with_id("42").has_id());
    }

    #[test]
    fn deserialize_with_defaults() {
        let record: Record =
            serde_json::from_str(r#"{"type":"TXT","name":"_acme.example.com","value":"v"}"#)
                .unwrap();
        assert_eq!(record, Record::new("TXT", "_acme.example.com", "v"));
    }

    #[test]
    fn serialize_uses_type_key() {
        let json = serde_json::to_string(&Record::new("MX", "@", "mail.example.com")).unwrap();
        assert!(json.contains("\"type\":\"MX\""));
        assert!(!json.contains("recordType"));
    }
}
