//! Per-field validation rules.
//!
//! Pure functions over string values — no session state, no rendering.
//! Messages are the user-facing Spanish strings the landing page shows
//! inline next to the offending field.

use crate::form::{FieldKind, FieldSpec};

/// Message for a required field left empty (or a checkbox left unchecked).
pub const MSG_REQUIRED: &str = "Este campo es obligatorio";
/// Message for a malformed email address.
pub const MSG_EMAIL: &str = "Por favor, introduce un correo electrónico válido";
/// Message for a postal code that is not exactly 5 digits.
pub const MSG_POSTAL_CODE: &str = "Por favor, introduce un código postal válido de 5 dígitos";
/// Message for a phone number that is not exactly 9 digits.
pub const MSG_PHONE: &str = "Por favor, introduce un número de teléfono válido de 9 dígitos";
/// Message for a choice value outside the offered options.
pub const MSG_CHOICE: &str = "Por favor, selecciona una opción válida";

/// Validate a single field value against its spec.
///
/// Presence is checked first: a required field with no value (after
/// trimming) fails with [`MSG_REQUIRED`], and an optional empty field
/// passes unconditionally. Shape rules apply only to non-empty values.
///
/// # Errors
///
/// Returns the inline message to show next to the field.
pub fn validate_field(spec: &FieldSpec, value: Option<&str>) -> Result<(), &'static str> {
    let value = value.unwrap_or("").trim();
    if value.is_empty() {
        return if spec.required {
            Err(MSG_REQUIRED)
        } else {
            Ok(())
        };
    }
    match &spec.kind {
        FieldKind::Email => check(is_valid_email(value), MSG_EMAIL),
        FieldKind::PostalCode => check(is_postal_code(value), MSG_POSTAL_CODE),
        FieldKind::Phone => check(is_phone(value), MSG_PHONE),
        FieldKind::Choice { options } => check(options.contains(&value), MSG_CHOICE),
        FieldKind::Text | FieldKind::Checkbox => Ok(()),
    }
}

fn check(ok: bool, message: &'static str) -> Result<(), &'static str> {
    if ok { Ok(()) } else { Err(message) }
}

/// `local@domain.tld` shape: no whitespace, exactly one `@`, and a domain
/// with a non-empty label on each side of its last dot.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain
                    .rsplit_once('.')
                    .is_some_and(|(head, tld)| !head.is_empty() && !tld.is_empty())
        }
        _ => false,
    }
}

/// Exactly 5 ASCII digits.
#[must_use]
pub fn is_postal_code(value: &str) -> bool {
    value.len() == 5 && value.bytes().all(|b| b.is_ascii_digit())
}

/// Exactly 9 ASCII digits.
#[must_use]
pub fn is_phone(value: &str) -> bool {
    value.len() == 9 && value.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_accepts_minimal_valid_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("ana.garcia@correo.example.com"));
    }

    #[test]
    fn email_rejects_missing_tld() {
        assert!(!is_valid_email("a@b"));
    }

    #[test]
    fn email_rejects_double_at() {
        assert!(!is_valid_email("a@@b.com"));
    }

    #[test]
    fn email_rejects_whitespace_and_empty_parts() {
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b."));
    }

    #[test]
    fn postal_code_requires_exactly_five_digits() {
        assert!(is_postal_code("28001"));
        assert!(!is_postal_code("2800"));
        assert!(!is_postal_code("280011"));
        assert!(!is_postal_code("28A01"));
    }

    #[test]
    fn phone_requires_exactly_nine_digits() {
        assert!(is_phone("612345678"));
        assert!(!is_phone("61234567"));
        assert!(!is_phone("6123456789"));
        assert!(!is_phone("61234567a"));
    }

    #[test]
    fn optional_empty_field_passes() {
        let spec = FieldSpec {
            key: "address",
            label: "Dirección",
            required: false,
            kind: FieldKind::Text,
        };
        assert!(validate_field(&spec, None).is_ok());
        assert!(validate_field(&spec, Some("  ")).is_ok());
    }

    #[test]
    fn required_empty_field_fails_with_required_message() {
        let spec = FieldSpec {
            key: "name",
            label: "Nombre",
            required: true,
            kind: FieldKind::Text,
        };
        assert_eq!(validate_field(&spec, None), Err(MSG_REQUIRED));
        assert_eq!(validate_field(&spec, Some("")), Err(MSG_REQUIRED));
    }

    #[test]
    fn shape_rules_layer_on_presence() {
        let spec = FieldSpec {
            key: "email",
            label: "Correo electrónico",
            required: true,
            kind: FieldKind::Email,
        };
        assert_eq!(validate_field(&spec, Some("a@b")), Err(MSG_EMAIL));
        assert!(validate_field(&spec, Some("a@b.co")).is_ok());
    }

    #[test]
    fn choice_must_be_one_of_the_options() {
        let spec = FieldSpec {
            key: "property_type",
            label: "Tipo de vivienda",
            required: true,
            kind: FieldKind::Choice {
                options: &["casa", "piso"],
            },
        };
        assert!(validate_field(&spec, Some("piso")).is_ok());
        assert_eq!(validate_field(&spec, Some("barco")), Err(MSG_CHOICE));
    }
}
