use std::env;

use serde_json::Value;
use tracing::info;

use crate::domain::template::MailTemplate;
use crate::errors::AppError;
use crate::store::{Collection, JsonStore};

pub const TEMPLATES_PATH: &str = "./.mail_templates.json";
pub const TEMPLATES_PATH_ENV: &str = "TEMPLATES_PATH";

/// The saved mail templates, backed by one JSON array file.
#[derive(Debug)]
pub struct MailTemplateBook {
    store: JsonStore<Vec<Value>>,
    templates: Vec<MailTemplate>,
}

impl MailTemplateBook {
    pub fn open() -> Result<Self, AppError> {
        let path = env::var(TEMPLATES_PATH_ENV).unwrap_or(TEMPLATES_PATH.to_string());
        Self::open_at(&path)
    }

    pub fn open_at(path: &str) -> Result<Self, AppError> {
        let mut book = Self {
            store: JsonStore::new(path, Vec::new()),
            templates: Vec::new(),
        };
        book.reload()?;
        Ok(book)
    }

    pub fn template_list(&self) -> &[MailTemplate] {
        &self.templates
    }

    /// Appends then persists immediately.
    pub fn add_template(&mut self, name: &str, template: &str) -> Result<(), AppError> {
        self.templates.push(MailTemplate::new(name, template));
        self.persist()?;

        info!(name, "template added");
        Ok(())
    }
}

impl Collection for MailTemplateBook {
    type Document = Vec<Value>;

    fn store(&self) -> &JsonStore<Vec<Value>> {
        &self.store
    }

    fn post_load(&mut self, document: Vec<Value>) -> Result<(), AppError> {
        self.templates = document
            .iter()
            .map(MailTemplate::from_value)
            .collect::<Result<Vec<MailTemplate>, AppError>>()?;
        Ok(())
    }

    fn pre_save(&self) -> Result<Vec<Value>, AppError> {
        self.templates.iter().map(MailTemplate::to_value).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn add_template_is_persistent() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("templates.json");
        let path = path.to_str().unwrap();

        let mut book = MailTemplateBook::open_at(path)?;
        assert!(book.template_list().is_empty());

        book.add_template("Newsletter", "Dear {{}}, How have you been?")?;

        let reopened = MailTemplateBook::open_at(path)?;
        assert_eq!(
            reopened.template_list(),
            &[MailTemplate::new(
                "Newsletter",
                "Dear {{}}, How have you been?"
            )]
        );
        Ok(())
    }

    #[test]
    fn record_without_body_fails_load() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("templates.json");

        std::fs::write(&path, r#"[{"name": "x"}]"#)?;

        let err = MailTemplateBook::open_at(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, AppError::MalformedRecord(_)));
        Ok(())
    }
}
