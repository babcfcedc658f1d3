//! CLI frontend for the Liuren divination engine.

mod commands;
mod render;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use lr_core::{Element, ElementOverrides};

#[derive(Parser)]
#[command(
    name = "liuren",
    about = "Liuren — small six-cycle (小六壬) divination at the terminal",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct StoreOpts {
    /// History database path
    #[arg(long, default_value = "liuren-history.db")]
    db: PathBuf,

    /// Passphrase for the encrypted history fields
    #[arg(long, default_value = "liuren-local-history")]
    passphrase: String,
}

#[derive(Args)]
struct SchoolOpts {
    /// Element for 留连 (earth by default; some schools teach water)
    #[arg(long, value_name = "ELEMENT")]
    liulian: Option<Element>,

    /// Element for 小吉 (water by default; some schools teach wood)
    #[arg(long, value_name = "ELEMENT")]
    xiaoji: Option<Element>,
}

impl SchoolOpts {
    fn overrides(&self) -> ElementOverrides {
        ElementOverrides {
            lingering: self.liulian,
            small_luck: self.xiaoji,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Cast from the current moment (正时卦)
    Now {
        /// Question to attach to the record
        #[arg(short, long)]
        query: Option<String>,

        /// Compute without saving to history
        #[arg(long)]
        no_save: bool,

        #[command(flatten)]
        school: SchoolOpts,

        #[command(flatten)]
        store: StoreOpts,
    },

    /// Cast from explicit lunar month, day, and double-hour
    Time {
        /// Lunar month (1-12)
        #[arg(short, long)]
        month: i64,

        /// Lunar day (1-30)
        #[arg(short, long)]
        day: i64,

        /// Double-hour bucket 0-11 (0 = 子时, 23:00-01:00)
        #[arg(long)]
        hour: i64,

        /// Lunar year, used to check the day against the month length
        #[arg(short, long)]
        year: Option<i32>,

        /// Question to attach to the record
        #[arg(short, long)]
        query: Option<String>,

        /// Compute without saving to history
        #[arg(long)]
        no_save: bool,

        #[command(flatten)]
        school: SchoolOpts,

        #[command(flatten)]
        store: StoreOpts,
    },

    /// Cast from three numbers in 1-100 (活时卦); draws them when omitted
    Cast {
        /// The three numbers; 0 counts as 10
        numbers: Vec<i64>,

        /// RNG seed for a deterministic draw
        #[arg(short, long)]
        seed: Option<u64>,

        /// Question to attach to the record
        #[arg(short, long)]
        query: Option<String>,

        /// Compute without saving to history
        #[arg(long)]
        no_save: bool,

        #[command(flatten)]
        school: SchoolOpts,

        #[command(flatten)]
        store: StoreOpts,
    },

    /// Show a symbol's attributes, relations, and flow path
    Show {
        /// Symbol name (e.g. 大安, "great peace", xiaoji)
        name: String,

        #[command(flatten)]
        school: SchoolOpts,
    },

    /// Browse the divination history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },

    /// Print the language-model prompt for a stored record
    Prompt {
        /// Record id
        id: String,

        /// Also print the system-role text
        #[arg(long)]
        roles: bool,

        #[command(flatten)]
        store: StoreOpts,
    },
}

#[derive(Subcommand)]
enum HistoryAction {
    /// List stored records, newest first
    List {
        /// Maximum number of records to show
        #[arg(short, long, default_value = "20")]
        limit: usize,

        #[command(flatten)]
        store: StoreOpts,
    },

    /// Show one record in full
    Show {
        /// Record id
        id: String,

        #[command(flatten)]
        store: StoreOpts,
    },

    /// Delete all records
    Clear {
        /// Confirm the deletion
        #[arg(short = 'y', long)]
        yes: bool,

        #[command(flatten)]
        store: StoreOpts,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Now {
            query,
            no_save,
            school,
            store,
        } => commands::now::run(
            query,
            no_save,
            &school.overrides(),
            &store.db,
            &store.passphrase,
        ),
        Commands::Time {
            month,
            day,
            hour,
            year,
            query,
            no_save,
            school,
            store,
        } => commands::time::run(
            month,
            day,
            hour,
            year,
            query,
            no_save,
            &school.overrides(),
            &store.db,
            &store.passphrase,
        ),
        Commands::Cast {
            numbers,
            seed,
            query,
            no_save,
            school,
            store,
        } => commands::cast::run(
            &numbers,
            seed,
            query,
            no_save,
            &school.overrides(),
            &store.db,
            &store.passphrase,
        ),
        Commands::Show { name, school } => commands::show::run(&name, &school.overrides()),
        Commands::History { action } => match action {
            HistoryAction::List { limit, store } => {
                commands::history::list(limit, &store.db, &store.passphrase)
            }
            HistoryAction::Show { id, store } => {
                commands::history::show(&id, &store.db, &store.passphrase)
            }
            HistoryAction::Clear { yes, store } => {
                commands::history::clear(yes, &store.db, &store.passphrase)
            }
        },
        Commands::Prompt { id, roles, store } => {
            commands::prompt::run(&id, roles, &store.db, &store.passphrase)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
