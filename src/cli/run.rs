use clap::Parser;
use serde_json::Value;

use crate::cli::{self, MenuChoice, command::{Cli, Commands}};
use crate::domain::address_book::AddressBook;
use crate::domain::contact::{Contact, Gender, NameOrder};
use crate::domain::search::fuzzy_search_name;
use crate::domain::settings::Setting;
use crate::domain::template_book::MailTemplateBook;
use crate::errors::AppError;
use crate::store::storage_port::{export_contacts_to_csv, import_contacts_from_csv};

pub fn run_app() -> Result<(), AppError> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    if cli.interactive {
        return run_interactive();
    }

    let Some(command) = cli.command else {
        println!("Nothing to do. See --help, or pass --interactive.");
        return Ok(());
    };

    match command {
        Commands::AddContact {
            firstname,
            lastname,
            email,
            gender,
        } => {
            let contact = Contact::new(&firstname, &lastname, &email, Gender::from_code(gender));

            if !contact.validate_email()? {
                return Err(AppError::Validation(
                    "Email must be a valid address of at most 254 characters".to_string(),
                ));
            }

            let mut book = AddressBook::open()?;
            book.add_contact(&firstname, &lastname, &email, Gender::from_code(gender))?;

            println!("Contact added successfully");
            Ok(())
        }

        Commands::Contacts => {
            let book = AddressBook::open()?;

            if book.contact_list().is_empty() {
                println!("No contact yet");
                return Ok(());
            }

            list_contacts(book.contact_list().iter());
            Ok(())
        }

        Commands::Search { name } => {
            let book = AddressBook::open()?;
            let results = fuzzy_search_name(&name, book.contact_list())?;

            if results.is_empty() {
                println!("Couldn't find a name with {name}");
                return Ok(());
            }

            list_contacts(results.into_iter());
            Ok(())
        }

        Commands::AddTemplate { name, body } => {
            let mut templates = MailTemplateBook::open()?;
            templates.add_template(&name, &body)?;

            println!("Template saved successfully");
            Ok(())
        }

        Commands::Templates => {
            let templates = MailTemplateBook::open()?;

            if templates.template_list().is_empty() {
                println!("No template yet");
                return Ok(());
            }

            for (i, t) in templates.template_list().iter().enumerate() {
                println!("{:>3}. {}", i + 1, t.name);
            }
            Ok(())
        }

        Commands::Set { key, value } => {
            // A value that parses as a number is stored as one
            let value: Value = match value.parse::<i64>() {
                Ok(n) => Value::from(n),
                Err(_) => Value::from(value),
            };

            let mut settings = Setting::open()?;
            settings.update_setting(&key, value)?;

            println!("Setting updated successfully");
            Ok(())
        }

        Commands::Get { key } => {
            let settings = Setting::open()?;

            match settings.get_config(&key) {
                Some(value) => println!("{value}"),
                None => println!("{key} is not set"),
            }
            Ok(())
        }

        Commands::Import { src } => {
            let mut book = AddressBook::open()?;
            let (path, total) = import_contacts_from_csv(&mut book, src.as_deref())?;

            println!("Successfully imported {} contacts from {:?}.", total, path);
            Ok(())
        }

        Commands::Export { des } => {
            let book = AddressBook::open()?;
            let (path, total) = export_contacts_to_csv(book.contact_list(), des.as_deref())?;

            println!("Successfully exported {} contacts to {:?}.", total, path);
            Ok(())
        }
    }
}

fn list_contacts<'a>(contacts: impl Iterator<Item = &'a Contact>) {
    for (i, c) in contacts.enumerate() {
        println!(
            "{:>3}. {:<25} {:^30}",
            i + 1,
            c.fullname(NameOrder::FirstLast),
            c.email
        );
    }
}

fn run_interactive() -> Result<(), AppError> {
    let mut book = AddressBook::open()?;
    let mut templates = MailTemplateBook::open()?;

    println!("\n--- Bulk Mailer ---");

    loop {
        let choice = match cli::parse_command_from_menu() {
            Ok(choice) => choice,
            // Bad menu input redisplays the menu instead of crashing
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };

        match choice {
            MenuChoice::AddContact => {
                let firstname = cli::prompt("First name:")?;
                let lastname = cli::prompt("Last name:")?;
                let email = cli::prompt("Email:")?;

                let contact = Contact::new(&firstname, &lastname, &email, Gender::Unspecified);
                if !contact.validate_email()? {
                    eprintln!(
                        "{}",
                        AppError::Validation("Invalid email input.".to_string())
                    );
                    continue;
                }

                book.add_contact(&firstname, &lastname, &email, Gender::Unspecified)?;
                println!("Contact added successfully");
            }
            MenuChoice::ListContacts => {
                if book.contact_list().is_empty() {
                    println!("No contact in contact list!");
                    continue;
                }

                for contact in book.contact_list() {
                    println!();
                    println!("{}", cli::display_contact(contact));
                }
            }
            MenuChoice::AddTemplate => {
                let name = cli::prompt("Template name:")?;
                let body = cli::prompt("Template body:")?;

                templates.add_template(&name, &body)?;
                println!("Template saved successfully");
            }
            MenuChoice::Exit => {
                println!("\nBye!");
                return Ok(());
            }
        }
    }
}
