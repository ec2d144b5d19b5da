use crate::domain::registration::{entity::FormField, rules::FieldErrors};
use serde::Serialize;
use std::collections::BTreeMap;
use ts_rs::TS;

/// Field errors the page should show next to each input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: BTreeMap<FormField, String>,
}

impl ValidationReport {
    pub fn new(visible: FieldErrors, valid: bool) -> Self {
        Self {
            valid,
            errors: visible,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct SubmissionReceipt {
    /// Whether the values reached the submission endpoint.
    pub forwarded: bool,
}
