use rust_fuzzy_search::fuzzy_compare;

use crate::domain::contact::{Contact, NameOrder};
use crate::errors::AppError;

const MAX_SEARCH_LENGTH: usize = 30;
const MIN_SCORE: f32 = 0.7;

/// Fuzzy match against first name, last name and full name. A contact is
/// returned when any of the three clears the score threshold.
pub fn fuzzy_search_name<'a>(
    name: &str,
    contacts: &'a [Contact],
) -> Result<Vec<&'a Contact>, AppError> {
    let name = name.trim().to_ascii_lowercase();

    if name.is_empty() {
        return Err(AppError::Validation("No Name provided".to_string()));
    }

    if name.len() > MAX_SEARCH_LENGTH {
        return Err(AppError::Validation("Search string too long".to_string()));
    }

    let matches: Vec<&Contact> = contacts
        .iter()
        .filter(|c| {
            fuzzy_compare(&name, &c.firstname.to_ascii_lowercase()) >= MIN_SCORE
                || fuzzy_compare(&name, &c.lastname.to_ascii_lowercase()) >= MIN_SCORE
                || fuzzy_compare(&name, &c.fullname(NameOrder::FirstLast).to_ascii_lowercase())
                    >= MIN_SCORE
        })
        .collect();

    Ok(matches)
}
