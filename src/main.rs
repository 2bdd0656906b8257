//! Command-line front end for shelter-tally.
//!
//! # Usage
//!
//! ```bash
//! # Frequency reports (reads FREQUENCY_SOURCE, default ./source.txt)
//! shelter-tally freq list
//! shelter-tally freq find Peppers
//! shelter-tally freq histogram --file groceries.txt
//!
//! # Interactive numbered menu
//! shelter-tally menu
//!
//! # Shelter records
//! shelter-tally shelter check
//! shelter-tally shelter create --record '{"name": "Rex", "animal_type": "Dog"}'
//! shelter-tally shelter read --query '{"animal_type": "Dog"}'
//! shelter-tally shelter update --query '{"name": "Rex"}' --set '{"outcome_type": "Adoption"}'
//! shelter-tally shelter delete --query '{"name": "Rex"}'
//! ```
//!
//! # Environment Variables
//!
//! - `FREQUENCY_SOURCE`: input file for frequency reports
//! - `SHELTER_USER`, `SHELTER_PASSWORD`: record store credentials (prompted for if unset)
//! - `RUST_LOG`, `LOG_FORMAT`: logging

use shelter_tally::ShelterStore;
use shelter_tally::application::services::FrequencyService;
use shelter_tally::config::{self, Config};
use shelter_tally::domain::frequency_table::FrequencyView;
use shelter_tally::error::AppError;
use shelter_tally::utils::json_document::{parse_optional_document, render_document};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use mongodb::bson::Document;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

/// Line frequency reports and animal shelter records.
#[derive(Parser)]
#[command(name = "shelter-tally")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Line frequency reports
    Freq {
        /// Input file (defaults to FREQUENCY_SOURCE, then source.txt)
        #[arg(short, long, global = true)]
        file: Option<PathBuf>,

        #[command(subcommand)]
        view: FreqCommand,
    },

    /// Interactive frequency menu
    Menu {
        /// Input file (defaults to FREQUENCY_SOURCE, then source.txt)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Animal shelter records
    Shelter {
        #[command(subcommand)]
        action: ShelterAction,
    },
}

/// Frequency report subcommands.
#[derive(Subcommand)]
enum FreqCommand {
    /// List every distinct line with its count
    List,

    /// Show the count for one line
    Find {
        /// Line to look up (must match a key exactly)
        name: String,
    },

    /// Print a histogram of line counts
    Histogram,
}

impl From<FreqCommand> for FrequencyView {
    fn from(command: FreqCommand) -> Self {
        match command {
            FreqCommand::List => FrequencyView::List,
            FreqCommand::Find { name } => FrequencyView::Lookup(name),
            FreqCommand::Histogram => FrequencyView::Histogram,
        }
    }
}

/// Shelter record subcommands. Documents are given as JSON objects.
#[derive(Subcommand)]
enum ShelterAction {
    /// Check the record store connection
    Check,

    /// Insert a new record
    Create {
        /// Record to insert, e.g. '{"name": "Rex"}'
        #[arg(short, long)]
        record: Option<String>,
    },

    /// Find records matching a query ('{}' matches all)
    Read {
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Set fields on every record matching a query
    Update {
        #[arg(short, long)]
        query: Option<String>,

        /// Fields to set, e.g. '{"outcome_type": "Adoption"}'
        #[arg(short, long = "set")]
        set: Option<String>,
    },

    /// Delete every record matching a query
    Delete {
        #[arg(short, long)]
        query: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// A shelter action with its JSON arguments parsed.
enum ShelterRequest {
    Check,
    Create(Option<Document>),
    Read(Option<Document>),
    Update(Option<Document>, Option<Document>),
    Delete(Option<Document>),
}

impl TryFrom<ShelterAction> for ShelterRequest {
    type Error = anyhow::Error;

    fn try_from(action: ShelterAction) -> Result<Self> {
        let request = match action {
            ShelterAction::Check => Self::Check,
            ShelterAction::Create { record } => Self::Create(
                parse_optional_document(record.as_deref()).context("Invalid --record")?,
            ),
            ShelterAction::Read { query } => Self::Read(
                parse_optional_document(query.as_deref()).context("Invalid --query")?,
            ),
            ShelterAction::Update { query, set } => Self::Update(
                parse_optional_document(query.as_deref()).context("Invalid --query")?,
                parse_optional_document(set.as_deref()).context("Invalid --set")?,
            ),
            ShelterAction::Delete { query, .. } => Self::Delete(
                parse_optional_document(query.as_deref()).context("Invalid --query")?,
            ),
        };
        Ok(request)
    }
}

impl ShelterRequest {
    /// Rejects missing or empty inputs the service would refuse, so no
    /// credentials are asked for and no connection is opened.
    fn check_inputs(&self) -> Result<(), AppError> {
        let missing = |doc: &Option<Document>| doc.is_none();
        let blank = |doc: &Option<Document>| doc.as_ref().is_none_or(Document::is_empty);

        match self {
            Self::Check => Ok(()),
            Self::Create(record) if blank(record) => Err(AppError::empty_input("save", "record")),
            Self::Read(query) if missing(query) => Err(AppError::empty_input("read", "query")),
            Self::Update(query, _) if missing(query) => {
                Err(AppError::empty_input("update", "query"))
            }
            Self::Update(_, changes) if blank(changes) => {
                Err(AppError::empty_input("update", "changes"))
            }
            Self::Delete(query) if missing(query) => {
                Err(AppError::empty_input("delete", "query"))
            }
            _ => Ok(()),
        }
    }
}

/// Entries of the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Frequency,
    Find,
    Histogram,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim() {
            "1" => Ok(Self::Frequency),
            "2" => Ok(Self::Find),
            "3" => Ok(Self::Histogram),
            "4" => Ok(Self::Exit),
            other => Err(other.to_string()),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    init_tracing(&config);
    config.print_summary();

    match cli.command {
        Commands::Freq { file, view } => {
            let service = frequency_service(&config, file);
            print_view(&service, &view.into())?;
        }
        Commands::Menu { file } => run_menu(&frequency_service(&config, file))?,
        Commands::Shelter { action } => handle_shelter_action(action, &config).await?,
    }

    Ok(())
}

/// Sets up `tracing` on stderr so stdout carries only results.
fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if config.log_format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

fn frequency_service(config: &Config, file: Option<PathBuf>) -> FrequencyService {
    FrequencyService::new(file.unwrap_or_else(|| config.frequency_source.clone()))
}

fn print_view(service: &FrequencyService, view: &FrequencyView) -> Result<()> {
    service
        .print(view, &mut io::stdout().lock())
        .with_context(|| format!("Failed to report on {}", service.source().display()))?;
    Ok(())
}

/// Runs the numbered menu until the user picks exit.
///
/// Every choice re-reads the source file. A failed report is shown and the
/// menu continues.
fn run_menu(service: &FrequencyService) -> Result<()> {
    loop {
        println!();
        println!("{}", "1: Calculate occurrence".bright_white());
        println!("{}", "2: Find occurrence of specific word".bright_white());
        println!("{}", "3: Histogram of frequency".bright_white());
        println!("{}", "4: Exit".bright_white());

        let input: String = Input::new()
            .with_prompt("Enter your selection as a number 1, 2, 3, or 4")
            .interact_text()?;

        let choice = match input.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(other) => {
                println!(
                    "{}",
                    format!("Did not recognize input: {other}, please try again").yellow()
                );
                continue;
            }
        };

        let view = match choice {
            MenuChoice::Frequency => FrequencyView::List,
            MenuChoice::Find => {
                let name: String = Input::new()
                    .with_prompt("Enter in name to search")
                    .interact_text()?;
                FrequencyView::Lookup(name)
            }
            MenuChoice::Histogram => FrequencyView::Histogram,
            MenuChoice::Exit => return Ok(()),
        };

        println!();
        if let Err(e) = print_view(service, &view) {
            println!("{}", format!("❌ {e:#}").red());
        }
    }
}

/// Parses arguments, connects, runs one action and closes the connection.
async fn handle_shelter_action(action: ShelterAction, config: &Config) -> Result<()> {
    let skip_confirm = matches!(action, ShelterAction::Delete { yes: true, .. });
    let request = ShelterRequest::try_from(action)?;
    request.check_inputs()?;

    if let ShelterRequest::Delete(Some(ref query)) = request
        && !skip_confirm
    {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete every record matching {}?",
                render_document(query.clone())
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let (user, password) = credentials(config)?;
    let store = ShelterStore::connect(&user, &password)
        .await
        .context("Failed to connect to record store")?;

    let result = run_shelter_request(request, &store).await;
    let closed = store.close().await;

    result?;
    closed.context("Failed to close record store connection")?;
    Ok(())
}

/// Takes credentials from the environment or prompts for them.
fn credentials(config: &Config) -> Result<(String, String)> {
    let user = match config.shelter_user {
        Some(ref user) => user.clone(),
        None => Input::new().with_prompt("Username").interact_text()?,
    };

    let password = match config.shelter_password {
        Some(ref password) => password.clone(),
        None => Password::new().with_prompt("Password").interact()?,
    };

    Ok((user, password))
}

async fn run_shelter_request(request: ShelterRequest, store: &ShelterStore) -> Result<()> {
    let service = store.service();

    match request {
        ShelterRequest::Check => {
            println!("{}", "🔍 Checking record store connection...".bright_blue());

            store.ping().await?;

            let target = store.config();
            println!("{}", "✅ Record store connection OK".green().bold());
            println!(
                "  {}:{} / {} / {}",
                target.host().cyan(),
                target.port(),
                target.database().cyan(),
                target.collection().cyan()
            );
        }
        ShelterRequest::Create(record) => {
            service.create(record).await?;
            println!("{}", "✅ Record created".green().bold());
        }
        ShelterRequest::Read(query) => {
            let records = service.read(query).await?;
            let count = records.len();

            for record in records {
                println!("{}", render_document(record));
            }
            eprintln!("{}", format!("📊 {count} record(s)").bright_black());
        }
        ShelterRequest::Update(query, changes) => {
            let summary = service.update(query, changes).await?;

            println!("{}", "✅ Update applied".green().bold());
            println!(
                "  Matched:  {}",
                summary.matched.to_string().bright_white().bold()
            );
            println!(
                "  Modified: {}",
                summary.modified.to_string().bright_white().bold()
            );
        }
        ShelterRequest::Delete(query) => {
            let summary = service.delete(query).await?;

            println!("{}", "✅ Delete applied".green().bold());
            println!(
                "  Deleted: {}",
                summary.deleted.to_string().bright_white().bold()
            );
        }
    }

    Ok(())
}
