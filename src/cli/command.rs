use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "rusty-mailer", version, about = "HTML bulk email utility")]
pub struct Cli {
    /// Launch in interactive mode
    #[arg(short, long)]
    pub interactive: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    AddContact {
        /// Contact first name
        #[arg(long)]
        firstname: String,

        /// Contact last name
        #[arg(long)]
        lastname: String,

        /// Contact email address
        #[arg(long)]
        email: String,

        /// Gender code (0 unspecified, 1 male, 2 female)
        #[arg(long, default_value_t = 0)]
        gender: i64,
    },
    /// List contacts
    Contacts,
    /// Fuzzy-search contacts by name
    Search {
        /// Name to search for
        #[arg(long)]
        name: String,
    },
    /// Save a new mail template
    AddTemplate {
        /// Template name
        #[arg(long)]
        name: String,

        /// Template body; may contain placeholder markers
        #[arg(long)]
        body: String,
    },
    /// List saved templates
    Templates,
    /// Insert or overwrite a configuration value
    Set {
        #[arg(long)]
        key: String,

        /// Stored as a number when it parses as one, text otherwise
        #[arg(long)]
        value: String,
    },
    /// Print a configuration value
    Get {
        #[arg(long)]
        key: String,
    },
    /// Import contacts from .csv file
    Import {
        /// File path to the source .csv file
        #[arg(short, long)]
        src: Option<String>,
    },
    /// Export contacts to a .csv file
    Export {
        /// File path to the destination location for export file
        #[arg(short, long)]
        des: Option<String>,
    },
}
