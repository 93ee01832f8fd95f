//! Multi-step form schema and session.
//!
//! [`FormSession`] is the explicit session state the UI renders from:
//! which step is visible, what the user has typed, and which inline
//! errors are showing. Navigation is forward-gated — `next` only moves
//! when every required field on the current step validates. The session
//! has no terminal state; after a successful submission it is `reset`
//! and reused.

use std::collections::BTreeMap;

use crate::submission::PropertyType;
use crate::validate;

/// What kind of widget a field is, and which shape rule applies to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    PostalCode,
    Checkbox,
    Choice { options: &'static [&'static str] },
}

/// One field of one step.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub kind: FieldKind,
}

/// One step of the form.
#[derive(Debug, Clone)]
pub struct StepSpec {
    pub title: &'static str,
    pub fields: Vec<FieldSpec>,
}

/// An ordered sequence of steps.
#[derive(Debug, Clone)]
pub struct FormSchema {
    steps: Vec<StepSpec>,
}

impl FormSchema {
    /// Build a schema from explicit steps. A schema must have at least one
    /// step; sessions over an empty schema treat every operation as a no-op.
    #[must_use]
    pub fn new(steps: Vec<StepSpec>) -> Self {
        Self { steps }
    }

    /// The three-step property-lead form the landing page ships.
    #[must_use]
    pub fn property_lead() -> Self {
        Self::new(vec![
            StepSpec {
                title: "Vivienda",
                fields: vec![
                    FieldSpec {
                        key: "property_type",
                        label: "Tipo de vivienda",
                        required: true,
                        kind: FieldKind::Choice {
                            options: PropertyType::NAMES,
                        },
                    },
                    FieldSpec {
                        key: "postal_code",
                        label: "Código postal",
                        required: true,
                        kind: FieldKind::PostalCode,
                    },
                ],
            },
            StepSpec {
                title: "Dirección",
                fields: vec![FieldSpec {
                    key: "address",
                    label: "Dirección",
                    required: false,
                    kind: FieldKind::Text,
                }],
            },
            StepSpec {
                title: "Contacto",
                fields: vec![
                    FieldSpec {
                        key: "name",
                        label: "Nombre",
                        required: true,
                        kind: FieldKind::Text,
                    },
                    FieldSpec {
                        key: "phone",
                        label: "Teléfono",
                        required: true,
                        kind: FieldKind::Phone,
                    },
                    FieldSpec {
                        key: "email",
                        label: "Correo electrónico",
                        required: true,
                        kind: FieldKind::Email,
                    },
                    FieldSpec {
                        key: "privacy",
                        label: "Política de privacidad",
                        required: true,
                        kind: FieldKind::Checkbox,
                    },
                ],
            },
        ])
    }

    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn steps(&self) -> &[StepSpec] {
        &self.steps
    }

    /// Look up a field spec anywhere in the schema.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.steps
            .iter()
            .flat_map(|step| step.fields.iter())
            .find(|field| field.key == key)
    }
}

/// Live state of one user's pass through the form.
#[derive(Debug, Clone)]
pub struct FormSession {
    schema: FormSchema,
    current: usize,
    values: BTreeMap<String, String>,
    errors: BTreeMap<String, String>,
}

impl FormSession {
    /// Start a fresh session on step 0 with no values and no errors.
    #[must_use]
    pub fn new(schema: FormSchema) -> Self {
        Self {
            schema,
            current: 0,
            values: BTreeMap::new(),
            errors: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Index of the currently visible step.
    #[must_use]
    pub fn current_step(&self) -> usize {
        self.current
    }

    /// The value the user entered for `field`, if any.
    #[must_use]
    pub fn value(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Set a field value. Inline errors are only recomputed on navigation
    /// or submit, matching how the page behaves.
    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.values.insert(field.to_owned(), value.into());
    }

    /// Tick a checkbox field.
    pub fn check(&mut self, field: &str) {
        self.set(field, "on");
    }

    /// Untick a checkbox field.
    pub fn uncheck(&mut self, field: &str) {
        self.values.remove(field);
    }

    /// Inline error currently showing for `field`.
    #[must_use]
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// All inline errors currently showing, keyed by field.
    #[must_use]
    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    /// All values entered so far.
    #[must_use]
    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    /// Progress indicator state: one flag per step, `true` for every step
    /// up to and including the current one.
    #[must_use]
    pub fn progress(&self) -> Vec<bool> {
        (0..self.schema.step_count())
            .map(|index| index <= self.current)
            .collect()
    }

    /// Try to advance to the next step.
    ///
    /// The current step is validated first; on failure the session stays
    /// put with inline errors recorded and `false` is returned. On success
    /// the step index moves to `min(current + 1, last)` and `true` is
    /// returned. On the last step a successful validation returns `true`
    /// without moving.
    pub fn next(&mut self) -> bool {
        if !self.apply_step_validation(self.current) {
            return false;
        }
        let last = self.schema.step_count().saturating_sub(1);
        self.current = (self.current + 1).min(last);
        true
    }

    /// Go back one step. Always allowed above step 0; forward step values
    /// are kept. Returns whether the session moved.
    pub fn prev(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Forced return to step 0, discarding values and errors. Used after a
    /// successful submission.
    pub fn reset(&mut self) {
        self.current = 0;
        self.values.clear();
        self.errors.clear();
    }

    /// Re-validate every step in order, not just the visible one.
    ///
    /// # Errors
    ///
    /// On the first failing step, navigates the session there (inline
    /// errors recorded) and returns that step's index.
    pub fn validate_all(&mut self) -> Result<(), usize> {
        for index in 0..self.schema.step_count() {
            if !self.apply_step_validation(index) {
                self.current = index;
                return Err(index);
            }
        }
        Ok(())
    }

    /// Validate one step, updating inline errors: failures attach their
    /// message, passes clear any prior indicator for that field.
    fn apply_step_validation(&mut self, index: usize) -> bool {
        let Some(step) = self.schema.steps.get(index) else {
            return true;
        };
        let mut all_valid = true;
        let mut outcomes = Vec::with_capacity(step.fields.len());
        for field in &step.fields {
            let value = self.values.get(field.key).map(String::as_str);
            outcomes.push((field.key, validate::validate_field(field, value)));
        }
        for (key, outcome) in outcomes {
            match outcome {
                Ok(()) => {
                    self.errors.remove(key);
                }
                Err(message) => {
                    all_valid = false;
                    self.errors.insert(key.to_owned(), message.to_owned());
                }
            }
        }
        all_valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{MSG_PHONE, MSG_REQUIRED};

    fn session() -> FormSession {
        FormSession::new(FormSchema::property_lead())
    }

    fn fill_step_one(session: &mut FormSession) {
        session.set("property_type", "piso");
        session.set("postal_code", "28001");
    }

    fn fill_step_three(session: &mut FormSession) {
        session.set("name", "Ana García");
        session.set("phone", "612345678");
        session.set("email", "ana@example.com");
        session.check("privacy");
    }

    #[test]
    fn starts_on_step_zero_with_no_errors() {
        let session = session();
        assert_eq!(session.current_step(), 0);
        assert!(session.errors().is_empty());
    }

    #[test]
    fn next_is_blocked_while_required_fields_are_empty() {
        let mut session = session();
        assert!(!session.next());
        assert_eq!(session.current_step(), 0);
        assert_eq!(session.error("postal_code"), Some(MSG_REQUIRED));
        assert_eq!(session.error("property_type"), Some(MSG_REQUIRED));
    }

    #[test]
    fn next_advances_once_the_step_validates() {
        let mut session = session();
        fill_step_one(&mut session);
        assert!(session.next());
        assert_eq!(session.current_step(), 1);
        assert!(session.errors().is_empty());
    }

    #[test]
    fn next_clears_errors_once_the_field_is_fixed() {
        let mut session = session();
        session.set("property_type", "piso");
        assert!(!session.next());
        assert_eq!(session.error("postal_code"), Some(MSG_REQUIRED));
        session.set("postal_code", "28001");
        assert!(session.next());
        assert_eq!(session.error("postal_code"), None);
    }

    #[test]
    fn optional_step_advances_empty() {
        let mut session = session();
        fill_step_one(&mut session);
        session.next();
        // Step 1 only has the optional address field.
        assert!(session.next());
        assert_eq!(session.current_step(), 2);
    }

    #[test]
    fn next_clamps_at_the_last_step() {
        let mut session = session();
        fill_step_one(&mut session);
        fill_step_three(&mut session);
        session.next();
        session.next();
        assert_eq!(session.current_step(), 2);
        assert!(session.next());
        assert_eq!(session.current_step(), 2);
    }

    #[test]
    fn prev_moves_back_and_keeps_forward_values() {
        let mut session = session();
        fill_step_one(&mut session);
        session.next();
        session.set("address", "Calle Mayor 1");
        assert!(session.prev());
        assert_eq!(session.current_step(), 0);
        assert_eq!(session.value("address"), Some("Calle Mayor 1"));
    }

    #[test]
    fn prev_on_step_zero_is_a_noop() {
        let mut session = session();
        assert!(!session.prev());
        assert_eq!(session.current_step(), 0);
    }

    #[test]
    fn reset_returns_to_step_zero_and_clears_everything() {
        let mut session = session();
        fill_step_one(&mut session);
        session.next();
        session.set("address", "Calle Mayor 1");
        session.reset();
        assert_eq!(session.current_step(), 0);
        assert!(session.values().is_empty());
        assert!(session.errors().is_empty());
    }

    #[test]
    fn progress_marks_steps_up_to_current() {
        let mut session = session();
        assert_eq!(session.progress(), vec![true, false, false]);
        fill_step_one(&mut session);
        session.next();
        assert_eq!(session.progress(), vec![true, true, false]);
    }

    #[test]
    fn validate_all_navigates_to_first_failing_step() {
        let mut session = session();
        fill_step_one(&mut session);
        session.next();
        session.next();
        session.set("name", "Ana García");
        session.set("email", "ana@example.com");
        session.set("phone", "61234"); // wrong length
        session.check("privacy");
        assert_eq!(session.validate_all(), Err(2));
        assert_eq!(session.current_step(), 2);
        assert_eq!(session.error("phone"), Some(MSG_PHONE));
    }

    #[test]
    fn validate_all_passes_with_every_step_valid() {
        let mut session = session();
        fill_step_one(&mut session);
        fill_step_three(&mut session);
        assert_eq!(session.validate_all(), Ok(()));
    }

    #[test]
    fn unchecked_required_checkbox_blocks_submission() {
        let mut session = session();
        fill_step_one(&mut session);
        fill_step_three(&mut session);
        session.uncheck("privacy");
        assert_eq!(session.validate_all(), Err(2));
        assert_eq!(session.error("privacy"), Some(MSG_REQUIRED));
    }
}
