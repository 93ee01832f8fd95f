//! Submission records and the tolerant-reader input type.
//!
//! The wire schema had two historical spellings for two fields (`adress`
//! for `address`, `vivienda` for `property_type`). [`SubmissionInput`]
//! accepts both as deserialization aliases; everything past the intake
//! boundary uses the canonical names only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::IntakeError;

/// Value stored for `property_owner` when the client did not send one.
pub const DEFAULT_PROPERTY_OWNER: &str = "propietario";

/// Kind of property the lead is asking about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    #[default]
    Casa,
    Piso,
    Chalet,
    Atico,
    Otro,
}

impl PropertyType {
    /// Canonical lowercase names, in display order. The form schema offers
    /// exactly these as choices.
    pub const NAMES: &'static [&'static str] = &["casa", "piso", "chalet", "atico", "otro"];

    /// Parse a free-form value leniently. Unknown values map to [`Otro`]
    /// rather than failing — the original deployment stored whatever string
    /// the client sent, so rejecting here would drop real leads.
    ///
    /// [`Otro`]: PropertyType::Otro
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "casa" => Self::Casa,
            "piso" => Self::Piso,
            "chalet" => Self::Chalet,
            "atico" | "ático" => Self::Atico,
            _ => Self::Otro,
        }
    }

    /// The canonical lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Casa => "casa",
            Self::Piso => "piso",
            Self::Chalet => "chalet",
            Self::Atico => "atico",
            Self::Otro => "otro",
        }
    }
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored lead submission. Created once at intake with a server-generated
/// timestamp and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub postal_code: String,
    pub property_type: PropertyType,
    pub property_owner: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// An incoming submission payload, before validation.
///
/// Every field is optional at this stage; [`validate`](Self::validate)
/// enforces presence of the required ones. Unknown fields in the payload
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, alias = "adress", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, alias = "vivienda", skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SubmissionInput {
    /// Check that every required field is present and non-blank.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::MissingField`] naming the first absent field,
    /// checked in the order name, email, phone, address, `postal_code`.
    pub fn validate(&self) -> Result<(), IntakeError> {
        let required: [(&'static str, Option<&str>); 5] = [
            ("name", self.name.as_deref()),
            ("email", self.email.as_deref()),
            ("phone", self.phone.as_deref()),
            ("address", self.address.as_deref()),
            ("postal_code", self.postal_code.as_deref()),
        ];
        for (field, value) in required {
            if value.unwrap_or("").trim().is_empty() {
                return Err(IntakeError::MissingField { field });
            }
        }
        Ok(())
    }

    /// Convert into a [`Submission`], applying defaults for the optional
    /// fields and stamping `timestamp`. Call [`validate`](Self::validate)
    /// first; absent required fields degrade to empty strings here.
    #[must_use]
    pub fn into_submission(self, timestamp: DateTime<Utc>) -> Submission {
        let property_type = self
            .property_type
            .as_deref()
            .map_or(PropertyType::default(), PropertyType::parse);
        Submission {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            postal_code: self.postal_code.unwrap_or_default(),
            property_type,
            property_owner: self
                .property_owner
                .unwrap_or_else(|| DEFAULT_PROPERTY_OWNER.to_owned()),
            message: self.message,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_input() -> SubmissionInput {
        SubmissionInput {
            name: Some("Ana García".to_owned()),
            email: Some("ana@example.com".to_owned()),
            phone: Some("612345678".to_owned()),
            address: Some("Calle Mayor 1".to_owned()),
            postal_code: Some("28001".to_owned()),
            property_type: Some("piso".to_owned()),
            property_owner: None,
            message: None,
        }
    }

    #[test]
    fn validate_accepts_complete_input() {
        assert!(complete_input().validate().is_ok());
    }

    #[test]
    fn validate_reports_first_missing_field() {
        let mut input = complete_input();
        input.email = None;
        let err = input.validate().unwrap_err();
        assert!(matches!(err, IntakeError::MissingField { field: "email" }));
    }

    #[test]
    fn validate_treats_blank_as_missing() {
        let mut input = complete_input();
        input.phone = Some("   ".to_owned());
        let err = input.validate().unwrap_err();
        assert!(matches!(err, IntakeError::MissingField { field: "phone" }));
    }

    #[test]
    fn legacy_aliases_deserialize_to_canonical_fields() {
        let input: SubmissionInput = serde_json::from_str(
            r#"{"name":"Ana","adress":"Calle Mayor 1","vivienda":"chalet"}"#,
        )
        .unwrap();
        assert_eq!(input.address.as_deref(), Some("Calle Mayor 1"));
        assert_eq!(input.property_type.as_deref(), Some("chalet"));
    }

    #[test]
    fn canonical_serialization_skips_absent_fields() {
        let json = serde_json::to_string(&SubmissionInput {
            name: Some("Ana".to_owned()),
            ..SubmissionInput::default()
        })
        .unwrap();
        assert_eq!(json, r#"{"name":"Ana"}"#);
    }

    #[test]
    fn into_submission_applies_defaults() {
        let mut input = complete_input();
        input.property_type = None;
        let now = Utc::now();
        let submission = input.into_submission(now);
        assert_eq!(submission.property_type, PropertyType::Casa);
        assert_eq!(submission.property_owner, DEFAULT_PROPERTY_OWNER);
        assert_eq!(submission.timestamp, now);
    }

    #[test]
    fn property_type_parses_leniently() {
        assert_eq!(PropertyType::parse("Piso"), PropertyType::Piso);
        assert_eq!(PropertyType::parse("ático"), PropertyType::Atico);
        assert_eq!(PropertyType::parse("castillo"), PropertyType::Otro);
    }

    #[test]
    fn property_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&PropertyType::Atico).unwrap(),
            r#""atico""#
        );
    }
}
