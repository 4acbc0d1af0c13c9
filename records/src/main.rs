use clap::{Parser, Subcommand};
use record_keeper::error::RecordError;
use record_keeper::session::{self, CatalogKind};
use record_keeper::{ContactFile, RecordResult, UserFile};
use regex_validator::prompt;
use regex_validator::PromptError;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, Level};

/// Menu-driven record keeping backed by flat files or in-memory catalogs
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    program: Program,
}

#[derive(Subcommand, Debug)]
enum Program {
    /// View and add contacts in a CSV file
    Contacts {
        #[arg(short, long, default_value = "contacts.csv")]
        file: PathBuf,
    },
    /// View and add "username email" records in a text file
    Users {
        #[arg(short, long, default_value = "user_manager_txt")]
        file: PathBuf,
    },
    /// Manage authors and the books they are reading
    Readings {
        /// Print the final reading list as JSON on exit
        #[arg(long)]
        json: bool,
    },
    /// Manage usernames and full names
    Accounts {
        /// Print the final accounts as JSON on exit
        #[arg(long)]
        json: bool,
    },
}

fn run(program: Program) -> RecordResult<()> {
    let mut p = prompt::stdio();
    match program {
        Program::Contacts { file } => session::run_contacts(&mut p, &ContactFile::new(file)),
        Program::Users { file } => session::run_users(&mut p, &UserFile::new(file)),
        Program::Readings { json } => run_catalog(&mut p, CatalogKind::Readings, json),
        Program::Accounts { json } => run_catalog(&mut p, CatalogKind::Accounts, json),
    }
}

fn run_catalog<R, W>(p: &mut regex_validator::Prompter<R, W>, kind: CatalogKind, json: bool) -> RecordResult<()>
where
    R: std::io::BufRead,
    W: std::io::Write,
{
    let catalog = session::run_catalog(p, kind, kind.seed())?;
    info!(entries = catalog.len(), "catalog session finished");
    if json {
        let rendered = serde_json::to_string_pretty(&catalog).map_err(std::io::Error::from)?;
        p.say(rendered)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match run(args.program) {
        Ok(()) | Err(RecordError::Prompt(PromptError::Closed)) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
