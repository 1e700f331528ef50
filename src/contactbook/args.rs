use clap::{Parser, Subcommand};

/// Version string, with git hash and commit date for non-release builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{}\ndev: {} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "contacts", bin_name = "contacts", version = get_version())]
#[command(about = "Personal contact book with birthdays and phone numbers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a contact (replaces an existing contact with the same name)
    #[command(alias = "n")]
    Add {
        /// Name of the contact
        name: String,

        /// Birthday, e.g. 26.11.2002 (see `contacts config date-format`)
        #[arg(short, long)]
        birthday: Option<String>,

        /// Phone number with 10 digits; repeat for several
        #[arg(short, long = "phone")]
        phones: Vec<String>,
    },

    /// Show a single contact
    #[command(alias = "v")]
    Show { name: String },

    /// Delete a contact
    #[command(alias = "rm")]
    Delete { name: String },

    /// List contacts page by page
    #[command(alias = "ls")]
    List {
        /// Contacts per page (defaults to the configured page size)
        #[arg(short = 'n', long)]
        page_size: Option<usize>,

        /// Print every page without waiting for Enter
        #[arg(long)]
        no_pause: bool,
    },

    /// Find contacts whose name or phone contains the term
    Search { term: String },

    /// Manage a contact's phone numbers
    #[command(subcommand)]
    Phone(PhoneCommands),

    /// Days until a contact's birthday, or set it with --set
    Birthday {
        name: String,

        /// New birthday; an empty string clears it
        #[arg(long)]
        set: Option<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (date-format, page-size)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum PhoneCommands {
    /// Add a phone number
    Add { name: String, phone: String },

    /// Remove a phone number
    #[command(alias = "rm")]
    Remove { name: String, phone: String },

    /// Replace a phone number
    Edit {
        name: String,
        old: String,
        new: String,
    },

    /// Check whether a contact has a phone number
    Find { name: String, phone: String },
}
