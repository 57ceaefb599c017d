pub mod command;
pub mod run;

pub use run::run_app;

use std::io::{self, Write};

use crate::domain::contact::{Contact, NameOrder};
use crate::errors::AppError;

pub enum MenuChoice {
    AddContact,
    ListContacts,
    AddTemplate,
    Exit,
}

// OUTPUT FUNCTIONS
pub fn parse_command_from_menu() -> Result<MenuChoice, AppError> {
    println!();
    println!("1. Add Contact");
    println!("2. List Contacts");
    println!("3. Add Mail Template");
    println!("4. Exit");
    print!("> ");
    io::stdout().flush()?;

    let action = get_input()?;

    match action.as_str() {
        "1" => Ok(MenuChoice::AddContact),
        "2" => Ok(MenuChoice::ListContacts),
        "3" => Ok(MenuChoice::AddTemplate),
        "4" => Ok(MenuChoice::Exit),
        _ => Err(AppError::ParseCommand(action)),
    }
}

pub fn display_contact(contact: &Contact) -> String {
    format!(
        "Name: {}\n\
        Email: {}",
        contact.fullname(NameOrder::FirstLast),
        contact.email
    )
}

// INPUT FUNCTIONS
pub fn get_input() -> Result<String, AppError> {
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

pub fn prompt(label: &str) -> Result<String, AppError> {
    println!("{label}");
    print!("> ");
    io::stdout().flush()?;
    get_input()
}
