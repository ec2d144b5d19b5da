use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Every input of the registration form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum FormField {
    FirstName,
    LastName,
    Gender,
    Email,
    DateOfBirth,
    StreetName,
    AdditionalInfo,
    ZipCode,
    Place,
    CountryName,
    Code,
    PhoneNumber,
    TermsAndConditions,
}

impl FormField {
    pub const ALL: [FormField; 13] = [
        FormField::FirstName,
        FormField::LastName,
        FormField::Gender,
        FormField::Email,
        FormField::DateOfBirth,
        FormField::StreetName,
        FormField::AdditionalInfo,
        FormField::ZipCode,
        FormField::Place,
        FormField::CountryName,
        FormField::Code,
        FormField::PhoneNumber,
        FormField::TermsAndConditions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Gender => "gender",
            Self::Email => "email",
            Self::DateOfBirth => "dateOfBirth",
            Self::StreetName => "streetName",
            Self::AdditionalInfo => "additionalInfo",
            Self::ZipCode => "zipCode",
            Self::Place => "place",
            Self::CountryName => "countryName",
            Self::Code => "code",
            Self::PhoneNumber => "phoneNumber",
            Self::TermsAndConditions => "termsAndConditions",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Raw form state as typed by the user. Text inputs hold exactly what the
/// browser reports (`dateOfBirth` is `YYYY-MM-DD` or empty).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub email: String,
    pub date_of_birth: String,
    pub street_name: String,
    pub additional_info: String,
    pub zip_code: String,
    pub place: String,
    pub country_name: String,
    pub code: String,
    pub phone_number: String,
    pub terms_and_conditions: bool,
}

impl FormValues {
    /// Text value of a field; `None` for the consent checkbox.
    pub fn text(&self, field: FormField) -> Option<&str> {
        let value = match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Gender => &self.gender,
            FormField::Email => &self.email,
            FormField::DateOfBirth => &self.date_of_birth,
            FormField::StreetName => &self.street_name,
            FormField::AdditionalInfo => &self.additional_info,
            FormField::ZipCode => &self.zip_code,
            FormField::Place => &self.place,
            FormField::CountryName => &self.country_name,
            FormField::Code => &self.code,
            FormField::PhoneNumber => &self.phone_number,
            FormField::TermsAndConditions => return None,
        };
        Some(value.as_str())
    }

    pub fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        let value = match field {
            FormField::FirstName => &mut self.first_name,
            FormField::LastName => &mut self.last_name,
            FormField::Gender => &mut self.gender,
            FormField::Email => &mut self.email,
            FormField::DateOfBirth => &mut self.date_of_birth,
            FormField::StreetName => &mut self.street_name,
            FormField::AdditionalInfo => &mut self.additional_info,
            FormField::ZipCode => &mut self.zip_code,
            FormField::Place => &mut self.place,
            FormField::CountryName => &mut self.country_name,
            FormField::Code => &mut self.code,
            FormField::PhoneNumber => &mut self.phone_number,
            FormField::TermsAndConditions => return None,
        };
        Some(value)
    }
}
