use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use contact_book::cli::{repl, Session};
use contact_book::config::{ContactPaths, Settings};
use contact_book::export::{export_to_file, ExportFormat};

/// Environment variable holding the log filter
const LOG_ENV: &str = "CONTACT_BOOK_LOG";

#[derive(Parser)]
#[command(
    name = "contacts",
    version,
    about = "Terminal address book for names, phone numbers and birthdays",
    long_about = "contacts keeps an address book of names, phone numbers and \
                  birthdays. Run it without a command to start the interactive \
                  prompt and type 'help' for the list of commands."
)]
struct Cli {
    /// Address book file to open (defaults to the data directory's contacts.json)
    #[arg(short, long, global = true, env = "CONTACT_BOOK_FILE")]
    book: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive prompt (default)
    Repl,

    /// Export the address book
    Export {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    // stderr keeps stdout free for the command transcript
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = ContactPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => {
            let mut session = Session::open_or_empty(&paths, settings, cli.book);
            if let Some(e) = session.load_error() {
                eprintln!(
                    "Could not open address book {}: {}",
                    session.default_book().display(),
                    e
                );
                eprintln!("Starting with an empty address book. The file will not be overwritten by autosave.");
            }
            info!(book = %session.default_book().display(), "starting session");

            let stdin = io::stdin();
            let stdout = io::stdout();
            if let Err(e) = repl::run(&mut session, stdin.lock(), stdout.lock()) {
                error!("session ended with an error: {}", e);
                return Err(e.into());
            }
        }
        Commands::Export { output, format } => {
            let session = Session::open(&paths, settings, cli.book)?;
            export_to_file(session.book(), format, session.today(), &output)?;
            println!(
                "Exported {} contacts to: {}",
                session.book().len(),
                output.display()
            );
        }
        Commands::Config => {
            println!("Contact Book Configuration");
            println!("==========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!(
                "Address book:     {}",
                cli.book.unwrap_or_else(|| paths.book_file()).display()
            );
            println!();
            println!("Settings:");
            println!("  Page size: {}", settings.page_size);
            println!("  Autoload:  {}", settings.autoload);
            println!("  Autosave:  {}", settings.autosave);
        }
    }

    Ok(())
}
