use super::dto::{SubmissionReceipt, ValidationReport};
use crate::{
    domain::{
        registration::{
            entity::FormValues,
            form::RegistrationForm,
            rules::{self, RuleContext},
        },
        shared::errors::DomainError,
    },
    infrastructure::submission::FormSubmitter,
};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::instrument;

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Validates registration forms and forwards accepted ones.
pub struct RegisterUseCase {
    submitter: Option<Arc<dyn FormSubmitter>>,
    phone_prefixes: Vec<String>,
    today: fn() -> NaiveDate,
}

impl RegisterUseCase {
    pub fn new(submitter: Option<Arc<dyn FormSubmitter>>, phone_prefixes: Vec<String>) -> Self {
        Self {
            submitter,
            phone_prefixes,
            today: local_today,
        }
    }

    /// Overrides the calendar used for the date-of-birth rule.
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    fn context(&self) -> RuleContext<'_> {
        RuleContext::new((self.today)(), &self.phone_prefixes)
    }

    /// Errors visible for the form's current visited/submitted state.
    pub fn validate(&self, form: &RegistrationForm) -> ValidationReport {
        let ctx = self.context();
        let valid = rules::validate(&form.values, &ctx).is_empty();
        ValidationReport::new(form.visible_errors(&ctx), valid)
    }

    /// Validates every field and, when the form passes, forwards it once.
    ///
    /// The forwarding outcome is logged and reported but never retried.
    #[instrument(skip_all)]
    pub async fn execute(&self, values: FormValues) -> Result<SubmissionReceipt, DomainError> {
        let mut form = RegistrationForm {
            values,
            ..RegistrationForm::default()
        };
        let values = form.submit(&self.context()).inspect_err(|err| {
            if let DomainError::Validation(errors) = err {
                tracing::info!(invalid_fields = errors.len(), "registration blocked");
            }
        })?;

        let Some(submitter) = &self.submitter else {
            tracing::warn!("no submission endpoint configured, registration not forwarded");
            return Ok(SubmissionReceipt { forwarded: false });
        };

        match submitter.submit(&values).await {
            Ok(()) => {
                tracing::info!("registration forwarded");
                Ok(SubmissionReceipt { forwarded: true })
            }
            Err(err) => {
                tracing::error!(error = %err, "registration forwarding failed");
                Ok(SubmissionReceipt { forwarded: false })
            }
        }
    }
}
