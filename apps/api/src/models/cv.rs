//! The CV record — the single data contract shared by extraction and
//! enhancement. Both gateways produce this exact shape; a record is always
//! replaced whole, never patched field-by-field.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub email: String,
    /// Untrusted URL. Rendered as an external link with safe rel attributes.
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub years: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub year: String,
}

/// A structured CV. Sequence fields keep their supplied order (duplicates
/// allowed) — display order is source order, never re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvRecord {
    pub name: String,
    #[serde(default)]
    pub contact: ContactInfo,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
}

impl ContactInfo {
    pub fn is_empty(&self) -> bool {
        self.email.trim().is_empty()
            && self.linkedin.trim().is_empty()
            && self.phone.trim().is_empty()
    }
}

impl CvRecord {
    /// True when every field is empty. Submitting such a record is the
    /// "no data received" short-circuit, not an error.
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty()
            && self.contact.is_empty()
            && self.skills.is_empty()
            && self.technologies.is_empty()
            && self.experience.is_empty()
            && self.education.is_empty()
    }

    /// Serializes the record for the hidden form field that carries it back
    /// on submit. Inverse of [`CvRecord::from_form_json`].
    pub fn to_form_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Parses the hidden-field payload. `"null"` deserializes to `Ok(None)`
    /// (an absent record); anything unparseable is a malformed submission.
    pub fn from_form_json(raw: &str) -> Result<Option<CvRecord>, serde_json::Error> {
        serde_json::from_str::<Option<CvRecord>>(raw)
    }
}

/// Stored CV row. `extracted_cv` holds the JSONB record produced by the
/// (external) extraction pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserCvRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub extracted_cv: Value,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record() -> CvRecord {
        CvRecord {
            name: "Jane Doe".to_string(),
            contact: ContactInfo {
                email: "j@x.com".to_string(),
                linkedin: "https://li/jane".to_string(),
                phone: "555".to_string(),
            },
            skills: vec!["Go".to_string()],
            technologies: vec!["SQL".to_string()],
            experience: vec![ExperienceEntry {
                title: "Eng".to_string(),
                company: "Acme".to_string(),
                years: "2020-2023".to_string(),
            }],
            education: vec![EducationEntry {
                degree: "BSc".to_string(),
                school: "MIT".to_string(),
                year: "2019".to_string(),
            }],
        }
    }

    #[test]
    fn test_form_json_round_trip_is_deep_equal() {
        let record = make_record();
        let json = record.to_form_json();
        let parsed = CvRecord::from_form_json(&json).unwrap().unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_wire_field_names_match_contract() {
        let json = make_record().to_form_json();
        for key in [
            "\"name\"",
            "\"contact\"",
            "\"email\"",
            "\"linkedin\"",
            "\"phone\"",
            "\"skills\"",
            "\"technologies\"",
            "\"experience\"",
            "\"title\"",
            "\"company\"",
            "\"years\"",
            "\"education\"",
            "\"degree\"",
            "\"school\"",
            "\"year\"",
        ] {
            assert!(json.contains(key), "missing wire key {key} in {json}");
        }
    }

    #[test]
    fn test_deserializes_scenario_fixture() {
        let json = r#"{
            "name": "Jane Doe",
            "contact": {"email": "j@x.com", "linkedin": "https://li/jane", "phone": "555"},
            "skills": ["Go"],
            "technologies": ["SQL"],
            "experience": [{"title": "Eng", "company": "Acme", "years": "2020-2023"}],
            "education": [{"degree": "BSc", "school": "MIT", "year": "2019"}]
        }"#;
        let parsed = CvRecord::from_form_json(json).unwrap().unwrap();
        assert_eq!(parsed, make_record());
    }

    #[test]
    fn test_null_parses_to_absent() {
        assert_eq!(CvRecord::from_form_json("null").unwrap(), None);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(CvRecord::from_form_json("{not json").is_err());
    }

    #[test]
    fn test_missing_contact_and_sequences_default_to_empty() {
        let parsed = CvRecord::from_form_json(r#"{"name": "Jane Doe"}"#)
            .unwrap()
            .unwrap();
        assert_eq!(parsed.name, "Jane Doe");
        assert!(parsed.contact.is_empty());
        assert!(parsed.skills.is_empty());
        assert!(parsed.education.is_empty());
        assert!(!parsed.is_empty());
    }

    #[test]
    fn test_record_without_name_is_malformed() {
        assert!(CvRecord::from_form_json(r#"{"skills": ["Go"]}"#).is_err());
    }

    #[test]
    fn test_default_record_is_empty() {
        assert!(CvRecord::default().is_empty());
        assert!(!make_record().is_empty());
    }

    #[test]
    fn test_duplicate_skills_survive_round_trip_in_order() {
        let mut record = make_record();
        record.skills = vec!["Go".to_string(), "Rust".to_string(), "Go".to_string()];
        let parsed = CvRecord::from_form_json(&record.to_form_json())
            .unwrap()
            .unwrap();
        assert_eq!(parsed.skills, record.skills);
    }
}
