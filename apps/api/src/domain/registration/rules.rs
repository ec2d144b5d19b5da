//! Field rules of the registration form.
//!
//! Each field owns an ordered list of rules; the first rule that fails
//! produces the field's message and later rules are not consulted.

use super::entity::{FormField, FormValues, Gender};
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;
use validator::ValidateEmail;

lazy_static! {
    static ref DIGITS_REGEX: Regex = Regex::new(r"^[0-9]+$").unwrap();
}

pub const NAME_MAX_CHARS: usize = 20;
pub const PHONE_MIN_DIGITS: usize = 10;
pub const PHONE_MAX_DIGITS: usize = 15;

pub const MSG_REQUIRED: &str = "Required";
pub const MSG_NAME_TOO_LONG: &str = "Must be 20 characters or less";
pub const MSG_INVALID_GENDER: &str = "Invalid gender";
pub const MSG_INVALID_EMAIL: &str = "Invalid email address";
pub const MSG_INVALID_DATE: &str = "Invalid date";
pub const MSG_FUTURE_DATE: &str = "Selected date should be less than current date";
pub const MSG_INVALID_CODE: &str = "Invalid code";
pub const MSG_PHONE_DIGITS: &str = "Invalid phone number (only digits are allowed)";
pub const MSG_PHONE_TOO_SHORT: &str = "Phone number must be at least 10 digits";
pub const MSG_PHONE_TOO_LONG: &str = "Phone number must be at most 15 digits";
pub const MSG_TERMS: &str = "Please accept the terms and conditions";

/// Field name → first failing rule's message.
pub type FieldErrors = BTreeMap<FormField, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    MaxChars(usize),
    MinChars(usize),
    Gender,
    Email,
    /// `YYYY-MM-DD`, not later than today.
    PastOrToday,
    PhonePrefix,
    Digits,
    Accepted,
}

pub const RULES: &[(FormField, &[Rule])] = &[
    (FormField::FirstName, &[Rule::Required, Rule::MaxChars(NAME_MAX_CHARS)]),
    (FormField::LastName, &[Rule::Required, Rule::MaxChars(NAME_MAX_CHARS)]),
    (FormField::Gender, &[Rule::Required, Rule::Gender]),
    (FormField::Email, &[Rule::Required, Rule::Email]),
    (FormField::DateOfBirth, &[Rule::Required, Rule::PastOrToday]),
    (FormField::StreetName, &[Rule::Required]),
    (FormField::AdditionalInfo, &[]),
    (FormField::ZipCode, &[Rule::Required]),
    (FormField::Place, &[Rule::Required]),
    (FormField::CountryName, &[Rule::Required]),
    (FormField::Code, &[Rule::Required, Rule::PhonePrefix]),
    (
        FormField::PhoneNumber,
        &[
            Rule::Required,
            Rule::Digits,
            Rule::MinChars(PHONE_MIN_DIGITS),
            Rule::MaxChars(PHONE_MAX_DIGITS),
        ],
    ),
    (FormField::TermsAndConditions, &[Rule::Accepted]),
];

/// Inputs a rule needs besides the form values.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub today: NaiveDate,
    pub phone_prefixes: &'a [String],
}

impl<'a> RuleContext<'a> {
    pub fn new(today: NaiveDate, phone_prefixes: &'a [String]) -> Self {
        Self {
            today,
            phone_prefixes,
        }
    }
}

fn rules_for(field: FormField) -> &'static [Rule] {
    RULES
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, rules)| *rules)
        .unwrap_or(&[])
}

fn length_message(field: FormField, rule: Rule) -> &'static str {
    match (field, rule) {
        (FormField::PhoneNumber, Rule::MinChars(_)) => MSG_PHONE_TOO_SHORT,
        (FormField::PhoneNumber, Rule::MaxChars(_)) => MSG_PHONE_TOO_LONG,
        _ => MSG_NAME_TOO_LONG,
    }
}

fn check_text(field: FormField, rule: Rule, value: &str, ctx: &RuleContext<'_>) -> Option<&'static str> {
    let chars = value.chars().count();
    match rule {
        Rule::Required if value.is_empty() => Some(MSG_REQUIRED),
        Rule::MaxChars(max) if chars > max => Some(length_message(field, rule)),
        Rule::MinChars(min) if chars < min => Some(length_message(field, rule)),
        Rule::Gender if Gender::parse(value).is_none() => Some(MSG_INVALID_GENDER),
        Rule::Email if !value.validate_email() => Some(MSG_INVALID_EMAIL),
        Rule::PastOrToday => match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            Err(_) => Some(MSG_INVALID_DATE),
            Ok(date) if date > ctx.today => Some(MSG_FUTURE_DATE),
            Ok(_) => None,
        },
        Rule::PhonePrefix if !ctx.phone_prefixes.iter().any(|p| p == value) => {
            Some(MSG_INVALID_CODE)
        }
        Rule::Digits if !DIGITS_REGEX.is_match(value) => Some(MSG_PHONE_DIGITS),
        _ => None,
    }
}

/// Message of the first failing rule for `field`, if any.
pub fn validate_field(values: &FormValues, field: FormField, ctx: &RuleContext<'_>) -> Option<String> {
    let rules = rules_for(field);
    match values.text(field) {
        Some(value) => rules
            .iter()
            .find_map(|rule| check_text(field, *rule, value, ctx))
            .map(str::to_string),
        None => rules
            .iter()
            .any(|rule| *rule == Rule::Accepted && !values.terms_and_conditions)
            .then(|| MSG_TERMS.to_string()),
    }
}

/// Errors for every field of the form. An empty map means the form may be submitted.
pub fn validate(values: &FormValues, ctx: &RuleContext<'_>) -> FieldErrors {
    FormField::ALL
        .into_iter()
        .filter_map(|field| validate_field(values, field, ctx).map(|msg| (field, msg)))
        .collect()
}
