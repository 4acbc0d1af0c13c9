use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use order_builder::{run_orders, run_sandwiches, Ingredients, OrderError, OrderResult, SandwichMenu};
use regex_validator::prompt;
use regex_validator::PromptError;
use tracing::{error, info, Level};

/// Build a pizza order from the menu and save it, or build sandwich orders
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Menu of base options and toppings
    #[arg(long, default_value = "ingredients.json")]
    menu: PathBuf,

    /// Where the submitted order is saved
    #[arg(long, default_value = "order.json")]
    order: PathBuf,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the house menu to the menu file
    InitMenu {
        /// Replace an existing menu file
        #[arg(long)]
        force: bool,
    },
    /// Build sandwich orders from the house sandwich menu
    Sandwiches,
}

fn run(args: Args) -> OrderResult<()> {
    match args.command {
        Some(Command::InitMenu { force }) => {
            if Ingredients::default_menu().write(&args.menu, force)? {
                println!("{} has been created successfully!", args.menu.display());
            } else {
                println!("{} already exists; use --force to replace it.", args.menu.display());
            }
            Ok(())
        }
        Some(Command::Sandwiches) => {
            let mut p = prompt::stdio();
            let orders = run_sandwiches(&mut p, &SandwichMenu::default())?;
            info!(orders = orders.len(), "sandwich session finished");
            Ok(())
        }
        None => {
            let ingredients = Ingredients::load(&args.menu)?;
            let mut p = prompt::stdio();
            let order = run_orders(&mut p, &ingredients, &args.order)?;
            info!(total = order.final_total, "session finished");
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match run(args) {
        Ok(()) | Err(OrderError::Prompt(PromptError::Closed)) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: Unable to load or save the order. Reason: {}", e);
            ExitCode::FAILURE
        }
    }
}
