use std::env;

use serde_json::Value;
use tracing::info;

use crate::domain::contact::{Contact, Gender};
use crate::errors::AppError;
use crate::store::{Collection, JsonStore};

pub const CONTACTS_PATH: &str = "./.default_contacts.json";
pub const CONTACTS_PATH_ENV: &str = "CONTACTS_PATH";

/// The contact book. Owns the contacts file and the contact list derived
/// from it; every mutating call writes straight back to disk.
#[derive(Debug)]
pub struct AddressBook {
    store: JsonStore<Vec<Value>>,
    contacts: Vec<Contact>,
}

impl AddressBook {
    pub fn open() -> Result<Self, AppError> {
        let path = env::var(CONTACTS_PATH_ENV).unwrap_or(CONTACTS_PATH.to_string());
        Self::open_at(&path)
    }

    pub fn open_at(path: &str) -> Result<Self, AppError> {
        let mut book = Self {
            store: JsonStore::new(path, Vec::new()),
            contacts: Vec::new(),
        };
        book.reload()?;
        Ok(book)
    }

    pub fn contact_list(&self) -> &[Contact] {
        &self.contacts
    }

    /// Appends then persists immediately. Duplicates are permitted.
    pub fn add_contact(
        &mut self,
        firstname: &str,
        lastname: &str,
        email: &str,
        gender: Gender,
    ) -> Result<(), AppError> {
        self.push_contact(Contact::new(firstname, lastname, email, gender));
        self.persist()?;

        info!(email, "contact added");
        Ok(())
    }

    /// Appends without persisting. Bulk callers persist once at the end.
    pub fn push_contact(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }
}

impl Collection for AddressBook {
    type Document = Vec<Value>;

    fn store(&self) -> &JsonStore<Vec<Value>> {
        &self.store
    }

    fn post_load(&mut self, document: Vec<Value>) -> Result<(), AppError> {
        self.contacts = document
            .iter()
            .map(Contact::from_value)
            .collect::<Result<Vec<Contact>, AppError>>()?;
        Ok(())
    }

    fn pre_save(&self) -> Result<Vec<Value>, AppError> {
        self.contacts.iter().map(Contact::to_value).collect()
    }
}
