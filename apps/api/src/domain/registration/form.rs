use super::{
    entity::{FormField, FormValues},
    rules::{self, FieldErrors, RuleContext},
};
use crate::domain::shared::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A registration form being filled in: values plus which fields the user has
/// left (blurred) and whether a submit was attempted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    #[serde(default)]
    pub values: FormValues,
    #[serde(default)]
    pub touched: BTreeSet<FormField>,
    #[serde(default)]
    pub submit_attempted: bool,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn change(&mut self, field: FormField, value: impl Into<String>) -> Result<(), DomainError> {
        let slot = self.values.text_mut(field).ok_or_else(|| {
            DomainError::InvalidInput(format!("{} is not a text field", field.as_str()))
        })?;
        *slot = value.into();
        Ok(())
    }

    pub fn set_terms(&mut self, accepted: bool) {
        self.values.terms_and_conditions = accepted;
    }

    pub fn blur(&mut self, field: FormField) {
        self.touched.insert(field);
    }

    /// Errors the page should display right now.
    pub fn visible_errors(&self, ctx: &RuleContext<'_>) -> FieldErrors {
        let mut errors = rules::validate(&self.values, ctx);
        if !self.submit_attempted {
            errors.retain(|field, _| self.touched.contains(field));
        }
        errors
    }

    /// Marks every field visited and returns the values if all rules pass.
    pub fn submit(&mut self, ctx: &RuleContext<'_>) -> Result<FormValues, DomainError> {
        self.submit_attempted = true;
        self.touched.extend(FormField::ALL);

        let errors = rules::validate(&self.values, ctx);
        if errors.is_empty() {
            Ok(self.values.clone())
        } else {
            Err(DomainError::Validation(errors))
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
