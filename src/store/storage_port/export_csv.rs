use std::path::PathBuf;

use csv::Writer;
use tracing::info;

use crate::domain::contact::Contact;
use crate::errors::AppError;
use crate::store::create_file_parent;

const EXPORT_PATH: &str = "./import_export/exported.csv";

pub fn export_contacts_to_csv(
    contacts: &[Contact],
    des: Option<&str>,
) -> Result<(PathBuf, u64), AppError> {
    let mut file_path = PathBuf::from(EXPORT_PATH);

    if let Some(path) = des {
        file_path = PathBuf::from(path);

        if file_path.is_dir() {
            file_path = file_path.join("exported.csv");
        } else if file_path.extension().is_some_and(|ext| ext != "csv") {
            return Err(AppError::Validation(
                "Export file must be a .csv file".to_string(),
            ));
        }
    }

    create_file_parent(&file_path)?;

    let mut writer = Writer::from_path(&file_path)?;

    let mut counter: u64 = 0;
    for contact in contacts {
        writer.serialize(contact)?;
        counter += 1;
    }

    writer.flush()?;

    info!(path = %file_path.display(), counter, "exported contacts");
    Ok((file_path, counter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact::Gender;
    use csv::Reader;
    use tempfile::tempdir;

    #[test]
    fn export_round_trips_through_csv() -> Result<(), AppError> {
        let dir = tempdir()?;
        let out_path = dir.path().join("out.csv");

        let contacts = vec![
            Contact::new("Ada", "Lovelace", "ada@example.com", Gender::Female),
            Contact::new("Charles", "Babbage", "charles@example.com", Gender::Male),
        ];

        let (path, total) = export_contacts_to_csv(&contacts, out_path.to_str())?;
        assert_eq!(total, 2);

        let mut reader = Reader::from_path(&path)?;
        let read_back: Vec<Contact> = reader
            .deserialize()
            .collect::<Result<Vec<Contact>, csv::Error>>()?;

        assert_eq!(read_back, contacts);
        Ok(())
    }

    #[test]
    fn directory_destination_gets_default_file_name() -> Result<(), AppError> {
        let dir = tempdir()?;
        let contacts = vec![Contact::new(
            "Ada",
            "Lovelace",
            "ada@example.com",
            Gender::Female,
        )];

        let (path, _) = export_contacts_to_csv(&contacts, dir.path().to_str())?;
        assert_eq!(path.file_name().unwrap(), "exported.csv");
        Ok(())
    }

    #[test]
    fn rejects_non_csv_destination() {
        let contacts: Vec<Contact> = Vec::new();

        let err = export_contacts_to_csv(&contacts, Some("./out.txt")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
