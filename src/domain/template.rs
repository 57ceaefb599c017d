use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;

/// A saved mail template. The body may contain placeholder markers that a
/// rendering engine would fill in later.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MailTemplate {
    pub name: String,
    pub template: String,
}

impl MailTemplate {
    pub fn new(name: &str, template: &str) -> Self {
        MailTemplate {
            name: name.to_string(),
            template: template.to_string(),
        }
    }

    pub fn from_value(value: &Value) -> Result<Self, AppError> {
        serde_json::from_value(value.clone())
            .map_err(|e| AppError::MalformedRecord(format!("template: {e}")))
    }

    pub fn to_value(&self) -> Result<Value, AppError> {
        Ok(serde_json::to_value(self)?)
    }
}
