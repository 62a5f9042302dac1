mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::env;
use std::path::PathBuf;

use issueboard::config;
use issueboard::{logging, SqliteStore};

#[derive(Parser)]
#[command(name = "issueboard")]
#[command(about = "A shared issue board with accounts and threaded comments")]
#[command(version)]
struct Cli {
    /// Data directory (defaults to the nearest .issueboard above the current directory)
    #[arg(long, global = true, env = "ISSUEBOARD_DIR")]
    dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize issueboard in the current directory
    Init,

    /// Create an account and log in
    Register {
        /// Email address
        email: String,
        /// Display name
        name: String,
        /// Password (at least 6 characters)
        #[arg(short, long)]
        password: String,
    },

    /// Log in to an existing account
    Login {
        /// Email address
        email: String,
        /// Password
        #[arg(short, long)]
        password: String,
    },

    /// End the current session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Create a new issue
    Create {
        /// Issue title
        title: String,
        /// Issue description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Category (bug, feature, question, documentation, infrastructure, other)
        #[arg(short, long)]
        category: String,
    },

    /// List issues, newest first
    List {
        /// Case-insensitive search over title and description
        #[arg(short = 'q', long)]
        search: Option<String>,
        /// Filter by status (open, in-progress, resolved, all)
        #[arg(short, long, default_value = "all")]
        status: String,
    },

    /// Show issue details and comments
    Show {
        /// Issue ID
        id: String,
    },

    /// Change an issue's status
    Status {
        /// Issue ID
        id: String,
        /// New status (open, in-progress, resolved)
        status: String,
    },

    /// Add a comment to an issue
    Comment {
        /// Issue ID
        id: String,
        /// Comment text
        text: String,
    },

    /// Show issue counts by status
    Stats,
}

fn open_store(dir: Option<&PathBuf>) -> Result<SqliteStore> {
    let cwd = env::current_dir()?;
    let data_dir = config::resolve_data_dir(dir.map(PathBuf::as_path), &cwd)?;
    SqliteStore::open(&config::store_path(&data_dir)).context("Failed to open store")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_json);

    let dir = cli.dir;

    match cli.command {
        Commands::Init => {
            let data_dir = match dir {
                Some(dir) => dir,
                None => env::current_dir()?.join(config::DATA_DIR_NAME),
            };
            commands::init::run(&data_dir)
        }

        Commands::Register {
            email,
            name,
            password,
        } => {
            let store = open_store(dir.as_ref())?;
            commands::account::register(&store, &email, &name, &password)
        }

        Commands::Login { email, password } => {
            let store = open_store(dir.as_ref())?;
            commands::account::login(&store, &email, &password)
        }

        Commands::Logout => {
            let store = open_store(dir.as_ref())?;
            commands::account::logout(&store)
        }

        Commands::Whoami => {
            let store = open_store(dir.as_ref())?;
            commands::account::whoami(&store)
        }

        Commands::Create {
            title,
            description,
            category,
        } => {
            let store = open_store(dir.as_ref())?;
            commands::create::run(&store, &title, &description, &category)
        }

        Commands::List { search, status } => {
            let store = open_store(dir.as_ref())?;
            commands::list::run(&store, search.as_deref(), &status)
        }

        Commands::Show { id } => {
            let store = open_store(dir.as_ref())?;
            commands::show::run(&store, &id)
        }

        Commands::Status { id, status } => {
            let store = open_store(dir.as_ref())?;
            commands::status::run(&store, &id, &status)
        }

        Commands::Comment { id, text } => {
            let store = open_store(dir.as_ref())?;
            commands::comment::run(&store, &id, &text)
        }

        Commands::Stats => {
            let store = open_store(dir.as_ref())?;
            commands::stats::run(&store)
        }
    }
}
