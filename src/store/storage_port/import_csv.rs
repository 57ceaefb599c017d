use std::path::PathBuf;

use csv::Reader;
use tracing::info;

use crate::domain::address_book::AddressBook;
use crate::domain::contact::Contact;
use crate::errors::AppError;
use crate::store::Collection;

const IMPORT_PATH: &str = "./import_export/contacts.csv";

pub fn import_contacts_from_csv(
    book: &mut AddressBook,
    src: Option<&str>,
) -> Result<(PathBuf, u64), AppError> {
    let file_path = PathBuf::from(src.unwrap_or(IMPORT_PATH));

    if !file_path.exists() {
        return Err(AppError::NotFound("CSV file".to_string()));
    }

    if file_path.extension().is_some_and(|ext| ext != "csv") {
        return Err(AppError::Validation("File not .csv".to_string()));
    }

    let mut reader = Reader::from_path(&file_path)?;

    let mut counter: u64 = 0;
    for result in reader.deserialize() {
        let record: Contact = result?;
        book.push_contact(record);
        counter += 1;
    }

    book.persist()?;

    info!(path = %file_path.display(), counter, "imported contacts");
    Ok((file_path, counter))
}
