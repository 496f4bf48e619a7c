use sawari_shared::Masked;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

/// The booking form fields. Phone and email are contact PII and stay masked
/// in Debug output; age is free text exactly as the form collects it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PassengerDetails {
    pub name: String,
    pub age: String,
    pub gender: Gender,
    pub phone: Masked<String>,
    pub email: Option<Masked<String>>,
}

impl PassengerDetails {
    /// The submit guard only requires name and phone; age, gender and email
    /// are collected but never validated.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.phone.inner().trim().is_empty()
    }
}
