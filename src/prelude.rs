pub use crate::domain::{
    address_book::AddressBook,
    contact::{Contact, Gender, NameOrder},
    search::fuzzy_search_name,
    settings::Setting,
    template::MailTemplate,
    template_book::MailTemplateBook,
};
pub use crate::errors::AppError;
pub use crate::mailer::Mailer;
pub use crate::store::{Collection, JsonStore};
