use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::errors::AppError;

/// Gender as stored on the wire: 0 unspecified, 1 male, 2 female.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Gender {
    #[default]
    Unspecified,
    Male,
    Female,
}

impl Gender {
    pub fn code(self) -> u8 {
        match self {
            Gender::Unspecified => 0,
            Gender::Male => 1,
            Gender::Female => 2,
        }
    }

    /// An unrecognized code falls back to `Unspecified` instead of failing.
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Gender::Male,
            2 => Gender::Female,
            _ => Gender::Unspecified,
        }
    }
}

fn serialize_gender<S>(gender: &Gender, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u8(gender.code())
}

fn deserialize_gender<'de, D>(deserializer: D) -> Result<Gender, D::Error>
where
    D: Deserializer<'de>,
{
    let code = i64::deserialize(deserializer)?;
    Ok(Gender::from_code(code))
}

/// Which name comes first in [`Contact::fullname`].
#[derive(Debug, Clone, Copy)]
pub enum NameOrder {
    LastFirst,
    FirstLast,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Contact {
    pub firstname: String,
    pub lastname: String,
    pub email: String,

    #[serde(
        serialize_with = "serialize_gender",
        deserialize_with = "deserialize_gender"
    )]
    pub gender: Gender,
}

impl Contact {
    pub fn new(firstname: &str, lastname: &str, email: &str, gender: Gender) -> Self {
        Contact {
            firstname: firstname.to_string(),
            lastname: lastname.to_string(),
            email: email.to_string(),
            gender,
        }
    }

    pub fn fullname(&self, order: NameOrder) -> String {
        match order {
            NameOrder::LastFirst => format!("{} {}", self.lastname, self.firstname),
            NameOrder::FirstLast => format!("{} {}", self.firstname, self.lastname),
        }
    }

    pub fn validate_email(&self) -> Result<bool, AppError> {
        // Email must contain '@' and a '.' somewhere after it.
        // Not more than 254 characters
        let re = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")?;
        Ok(re.is_match(&self.email) && self.email.len() <= 254)
    }

    /// Builds a contact from one raw record of the contacts document.
    /// A missing required field is a malformed record, not a parse error.
    pub fn from_value(value: &Value) -> Result<Self, AppError> {
        serde_json::from_value(value.clone())
            .map_err(|e| AppError::MalformedRecord(format!("contact: {e}")))
    }

    pub fn to_value(&self) -> Result<Value, AppError> {
        Ok(serde_json::to_value(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn round_trips_through_plain_form() -> Result<(), AppError> {
        let contact = Contact::new("Ada", "Lovelace", "ada@example.com", Gender::Female);

        let value = contact.to_value()?;
        assert_eq!(
            value,
            json!({
                "firstname": "Ada",
                "lastname": "Lovelace",
                "email": "ada@example.com",
                "gender": 2,
            })
        );

        assert_eq!(Contact::from_value(&value)?, contact);
        Ok(())
    }

    #[test]
    fn unknown_gender_code_defaults_to_unspecified() -> Result<(), AppError> {
        let value = json!({
            "firstname": "Ada",
            "lastname": "Lovelace",
            "email": "ada@example.com",
            "gender": 9,
        });

        let contact = Contact::from_value(&value)?;
        assert_eq!(contact.gender, Gender::Unspecified);
        Ok(())
    }

    #[test]
    fn missing_field_is_malformed_record() {
        let value = json!({
            "firstname": "Ada",
            "gender": 0,
        });

        let err = Contact::from_value(&value).unwrap_err();
        assert!(matches!(err, AppError::MalformedRecord(_)));
    }

    #[test]
    fn fullname_respects_order() {
        let contact = Contact::new("Ada", "Lovelace", "ada@example.com", Gender::Unspecified);

        assert_eq!(contact.fullname(NameOrder::LastFirst), "Lovelace Ada");
        assert_eq!(contact.fullname(NameOrder::FirstLast), "Ada Lovelace");
    }

    #[test]
    fn email_validation() -> Result<(), AppError> {
        let good = Contact::new("Ada", "Lovelace", "ada@example.com", Gender::Unspecified);
        let bad = Contact::new("Ada", "Lovelace", "foo@bar", Gender::Unspecified);

        assert!(good.validate_email()?);
        assert!(!bad.validate_email()?);
        Ok(())
    }
}
