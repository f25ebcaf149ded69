//! Eventgate CLI - manage access-gated events from the command line.

use clap::{Parser, Subcommand, ValueEnum};
use eventgate_registry::Category;

mod commands;
mod output;
mod store;

use commands::{create, end, grant, list, log, register, show, sign_in, stats, update};
use store::StorePaths;

#[derive(Parser)]
#[command(name = "eventgate")]
#[command(about = "Access-gated event registry CLI")]
struct Cli {
    /// Path to the registry snapshot file
    #[arg(long, global = true, default_value = "eventgate.json")]
    state: String,
    /// Path to the record journal
    #[arg(long, global = true, default_value = "eventgate.journal")]
    journal: String,
    /// Path to the credential holdings fixture
    #[arg(long, global = true, default_value = "holdings.json")]
    holdings: String,
    #[command(subcommand)]
    command: Commands,
}

/// Audience category, as accepted on the command line.
#[derive(Clone, Copy, ValueEnum)]
enum CategoryArg {
    Public,
    Restricted,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Public => Category::Public,
            CategoryArg::Restricted => Category::Restricted,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new gated event
    Create {
        /// Caller identity (becomes the event manager)
        #[arg(long = "as", value_name = "ADDRESS")]
        caller: String,
        /// Credential collection that gates registration
        collection: String,
        /// Event display name
        name: String,
        /// Audience category
        #[arg(long, value_enum, default_value = "public")]
        category: CategoryArg,
        /// Maximum number of registrations (unbounded when omitted)
        #[arg(long)]
        capacity: Option<u64>,
    },
    /// Update an existing event (manager only)
    Update {
        /// Caller identity
        #[arg(long = "as", value_name = "ADDRESS")]
        caller: String,
        /// Event id
        event_id: u64,
        /// Credential collection that gates registration
        collection: String,
        /// Event display name
        name: String,
        /// Audience category
        #[arg(long, value_enum, default_value = "public")]
        category: CategoryArg,
        /// Maximum number of registrations (unchanged when omitted)
        #[arg(long)]
        capacity: Option<u64>,
    },
    /// End an event (manager only, terminal)
    End {
        /// Caller identity
        #[arg(long = "as", value_name = "ADDRESS")]
        caller: String,
        /// Event id
        event_id: u64,
    },
    /// Register the caller for an event
    Register {
        /// Caller identity
        #[arg(long = "as", value_name = "ADDRESS")]
        caller: String,
        /// Event id
        event_id: u64,
        /// Display name stored on the registration
        display_name: String,
    },
    /// Sign in the caller's registration
    SignIn {
        /// Caller identity
        #[arg(long = "as", value_name = "ADDRESS")]
        caller: String,
        /// Event id
        event_id: u64,
    },
    /// Grant a credential holding in the fixture oracle
    Grant {
        /// Credential collection
        collection: String,
        /// Holder identity
        holder: String,
    },
    /// List events
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one event as JSON
    Show {
        /// Event id
        event_id: u64,
    },
    /// Show registry counters
    Stats,
    /// Replay the record journal
    Log {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let paths = StorePaths::new(&cli.state, &cli.journal, &cli.holdings);

    let result = match cli.command {
        Commands::Create {
            caller,
            collection,
            name,
            category,
            capacity,
        } => create::run(&paths, caller, collection, name, category.into(), capacity),
        Commands::Update {
            caller,
            event_id,
            collection,
            name,
            category,
            capacity,
        } => update::run(
            &paths,
            caller,
            event_id,
            collection,
            name,
            category.into(),
            capacity,
        ),
        Commands::End { caller, event_id } => end::run(&paths, caller, event_id),
        Commands::Register {
            caller,
            event_id,
            display_name,
        } => register::run(&paths, caller, event_id, display_name),
        Commands::SignIn { caller, event_id } => sign_in::run(&paths, caller, event_id),
        Commands::Grant { collection, holder } => grant::run(&paths, collection, holder),
        Commands::List { json } => list::run(&paths, json),
        Commands::Show { event_id } => show::run(&paths, event_id),
        Commands::Stats => stats::run(&paths),
        Commands::Log { json } => log::run(&paths, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
