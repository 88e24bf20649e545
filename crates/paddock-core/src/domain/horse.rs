//! The horse record and its sex enumeration.
//!
//! Field names follow the server's JSON (camelCase on the wire, snake_case
//! in Rust).  Optional fields are omitted from serialized payloads rather
//! than sent as `null`, matching what the registry API expects.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::owner::Owner;

/// Sex of a horse.
///
/// The wire representation is the server's uppercase discriminant
/// (`"FEMALE"` / `"MALE"`), which is also the value used for the `sex`
/// query parameter of the list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    /// The query-parameter value for this sex (`"FEMALE"` / `"MALE"`).
    pub fn as_param(self) -> &'static str {
        match self {
            Sex::Female => "FEMALE",
            Sex::Male => "MALE",
        }
    }
}

/// A horse record.
///
/// A horse fetched from the server always carries `Some(id)`; a draft built
/// by a create form has `id: None` until the server assigns one.  The
/// mother and father references are full (boxed) horse records as returned
/// by the detail endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Horse {
    /// Server-assigned identifier; absent until the horse is persisted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date_of_birth: NaiveDate,
    pub sex: Sex,
    /// Owning person, if any (many horses may share one owner).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,
    /// Dam of this horse.  The server rejects a mother that is not female.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mother: Option<Box<Horse>>,
    /// Sire of this horse.  The server rejects a father that is not male.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub father: Option<Box<Horse>>,
}

impl Horse {
    /// Returns a draft record for a create form: no identifier, empty
    /// name and description, and the given birth date and sex.
    pub fn draft(date_of_birth: NaiveDate, sex: Sex) -> Self {
        Self {
            id: None,
            name: String::new(),
            description: None,
            date_of_birth,
            sex,
            owner: None,
            mother: None,
            father: None,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_sex_serializes_as_uppercase_discriminant() {
        assert_eq!(serde_json::to_string(&Sex::Female).unwrap(), "\"FEMALE\"");
        assert_eq!(serde_json::to_string(&Sex::Male).unwrap(), "\"MALE\"");
    }

    #[test]
    fn test_sex_as_param_matches_wire_value() {
        assert_eq!(Sex::Female.as_param(), "FEMALE");
        assert_eq!(Sex::Male.as_param(), "MALE");
    }

    #[test]
    fn test_draft_serializes_without_absent_fields() {
        // A create payload must not contain "id" (or any other absent
        // optional field) at all -- the server assigns the identifier.
        let draft = Horse {
            name: "Bella".to_string(),
            ..Horse::draft(date(2015, 4, 1), Sex::Female)
        };

        let json = serde_json::to_value(&draft).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("id"));
        assert!(!object.contains_key("owner"));
        assert!(!object.contains_key("mother"));
        assert!(!object.contains_key("father"));
        assert_eq!(object["name"], "Bella");
        assert_eq!(object["dateOfBirth"], "2015-04-01");
        assert_eq!(object["sex"], "FEMALE");
    }

    #[test]
    fn test_detail_response_deserializes_with_nested_references() {
        // Shape of a detail response: camelCase fields, nested owner and
        // mother records, absent father.
        let json = r#"{
            "id": 7,
            "name": "Thunder",
            "description": "fast",
            "dateOfBirth": "2018-09-21",
            "sex": "MALE",
            "owner": {"id": 2, "firstName": "Wendy", "lastName": "Smith"},
            "mother": {
                "id": 3,
                "name": "Bella",
                "dateOfBirth": "2010-01-12",
                "sex": "FEMALE"
            }
        }"#;

        let horse: Horse = serde_json::from_str(json).unwrap();
        assert_eq!(horse.id, Some(7));
        assert_eq!(horse.sex, Sex::Male);
        assert_eq!(horse.owner.as_ref().unwrap().first_name, "Wendy");
        let mother = horse.mother.as_ref().unwrap();
        assert_eq!(mother.name, "Bella");
        assert_eq!(mother.sex, Sex::Female);
        assert!(horse.father.is_none());
    }
}
