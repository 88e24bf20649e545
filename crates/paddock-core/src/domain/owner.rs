//! The owner record.

use serde::{Deserialize, Serialize};

/// A person owning one or more horses.
///
/// Invariant: `email`, when present, is non-empty.  A blank email field in
/// a create form arrives here as `Some("")`; [`Owner::normalised`] folds it
/// to `None` so the serialized payload omits the field entirely instead of
/// sending an empty string to the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    /// Server-assigned identifier; absent until the owner is persisted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Owner {
    /// Returns a draft record for a create form: empty strings throughout.
    pub fn draft() -> Self {
        Self {
            id: None,
            first_name: String::new(),
            last_name: String::new(),
            email: Some(String::new()),
        }
    }

    /// Returns this owner with an empty email folded to "absent".
    ///
    /// Applied before submission so the server never receives an
    /// empty-string email.
    pub fn normalised(mut self) -> Self {
        if self.email.as_deref() == Some("") {
            self.email = None;
        }
        self
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalised_drops_empty_email() {
        let owner = Owner {
            id: None,
            first_name: "Wendy".to_string(),
            last_name: "Smith".to_string(),
            email: Some(String::new()),
        };
        assert_eq!(owner.normalised().email, None);
    }

    #[test]
    fn test_normalised_keeps_non_empty_email() {
        let owner = Owner {
            id: None,
            first_name: "Wendy".to_string(),
            last_name: "Smith".to_string(),
            email: Some("wendy@example.com".to_string()),
        };
        assert_eq!(
            owner.normalised().email.as_deref(),
            Some("wendy@example.com")
        );
    }

    #[test]
    fn test_normalised_owner_serializes_without_email_key() {
        let owner = Owner::draft().normalised();
        let json = serde_json::to_value(&owner).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("email"));
        assert!(!object.contains_key("id"));
    }

    #[test]
    fn test_owner_uses_camel_case_field_names() {
        let owner = Owner {
            id: Some(2),
            first_name: "Wendy".to_string(),
            last_name: "Smith".to_string(),
            email: None,
        };
        let json = serde_json::to_value(&owner).unwrap();
        assert_eq!(json["firstName"], "Wendy");
        assert_eq!(json["lastName"], "Smith");
    }
}
