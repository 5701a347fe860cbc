use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use expense_tracker::cli::{
    handle_add, handle_list, handle_read, handle_remove, handle_update, DialoguerPrompter,
    ExpenseArgs, ListArgs, ReadArgs, RemoveArgs, UpdateArgs,
};
use expense_tracker::config::{init_tracing, TrackerPaths};
use expense_tracker::display::output;
use expense_tracker::storage::ExpenseStore;
use expense_tracker::TrackerResult;

#[derive(Parser)]
#[command(
    name = "exp",
    version,
    disable_version_flag = true,
    about = "An expense CLI tool to track your monthly and yearly spending",
    long_about = "exp records your expenses in a local JSON file. Any option left \
                  out of add or update is asked for interactively."
)]
struct Cli {
    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,

    /// Expense file to use instead of the default location
    #[arg(short = 'f', long = "file", env = "EXP_FILE", global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new expense
    Add(ExpenseArgs),

    /// Remove an expense
    #[command(alias = "rm")]
    Remove(RemoveArgs),

    /// Update an existing expense
    Update(UpdateArgs),

    /// List expenses as a table
    #[command(alias = "ls")]
    List(ListArgs),

    /// Pick which fields to view, ids included
    Read(ReadArgs),

    /// Show where expenses are stored
    Config,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing();

    let paths = TrackerPaths::resolve(cli.file)?;

    let Some(command) = cli.command else {
        println!("exp - track your expenses from the terminal");
        println!();
        println!("Run 'exp --help' for usage information.");
        return Ok(ExitCode::SUCCESS);
    };

    match run(&paths, command) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            output::error(&err);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run(paths: &TrackerPaths, command: Commands) -> TrackerResult<()> {
    // `config` must not create the store file
    let open_store = || ExpenseStore::open(paths.store_file());
    let mut prompter = DialoguerPrompter::new();

    match command {
        Commands::Add(args) => handle_add(&open_store()?, &mut prompter, args).map(|_| ()),
        Commands::Remove(args) => handle_remove(&open_store()?, &mut prompter, args).map(|_| ()),
        Commands::Update(args) => handle_update(&open_store()?, &mut prompter, args).map(|_| ()),
        Commands::List(args) => handle_list(&open_store()?, args),
        Commands::Read(args) => handle_read(&open_store()?, &mut prompter, args),
        Commands::Config => {
            println!("Expense file: {}", paths.store_file().display());
            println!("Resolved from: {}", paths.source());
            Ok(())
        }
    }
}
