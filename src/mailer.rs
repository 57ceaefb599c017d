use serde_json::Value;

use crate::domain::address_book::AddressBook;
use crate::domain::contact::Contact;
use crate::domain::settings::Setting;
use crate::domain::template::MailTemplate;
use crate::errors::AppError;

/// Composes an already-loaded address book and settings store to prepare a
/// bulk send: recipient selection, sender address and template choice.
/// Transport and rendering live elsewhere.
pub struct Mailer<'a> {
    from: String,
    recipients: Vec<Contact>,
    template: Option<MailTemplate>,
    address_book: &'a AddressBook,
    settings: &'a Setting,
}

impl<'a> Mailer<'a> {
    pub fn new(address_book: &'a AddressBook, settings: &'a Setting) -> Self {
        Mailer {
            from: String::new(),
            recipients: Vec::new(),
            template: None,
            address_book,
            settings,
        }
    }

    pub fn set_from(&mut self, from: &str) {
        self.from = from.to_string();
    }

    pub fn from_address(&self) -> &str {
        &self.from
    }

    pub fn use_template(&mut self, template: MailTemplate) {
        self.template = Some(template);
    }

    pub fn template(&self) -> Option<&MailTemplate> {
        self.template.as_ref()
    }

    pub fn recipients(&self) -> &[Contact] {
        &self.recipients
    }

    pub fn smtp_port(&self) -> Option<&Value> {
        self.settings.get_config("PORT")
    }

    /// Copies the matching contact out of the address book.
    pub fn add_recipient(&mut self, email: &str) -> Result<(), AppError> {
        let contact = self
            .address_book
            .contact_list()
            .iter()
            .find(|c| c.email == email)
            .ok_or_else(|| AppError::NotFound("Recipient".to_string()))?;

        self.recipients.push(contact.clone());
        Ok(())
    }

    pub fn add_recipient_bulk(&mut self, emails: &[&str]) -> Result<(), AppError> {
        for email in emails {
            self.add_recipient(email)?;
        }
        Ok(())
    }

    pub fn add_recipient_all(&mut self) {
        self.recipients = self.address_book.contact_list().to_vec();
    }
}
