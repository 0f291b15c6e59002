// homework-hub - assignments, reminders and study time in your terminal
//
// This is the main entry point. Parses CLI args, opens the database and
// hands the terminal to the menu.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use homework_hub_lib::menu::{self, Prompt};
use homework_hub_lib::{logging, Config, Database};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "homework-hub",
    author,
    version,
    about = "Track homework assignments, reminders, and study sessions"
)]
struct Cli {
    /// Database file
    #[arg(long, env = "HOMEWORK_HUB_DB", global = true)]
    db: Option<PathBuf>,

    /// Log in as this email instead of being asked
    #[arg(long, env = "HOMEWORK_HUB_EMAIL")]
    email: Option<String>,

    /// Debug logging to stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show row counts for every table
    Status {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(cli.db, cli.email, cli.debug)?;
    logging::init(config.debug)?;

    let db = Database::new(&config.db_path)
        .await
        .with_context(|| format!("Failed to open database at {}", config.db_path.display()))?;

    let result = match cli.command {
        Some(Command::Status { json }) => handle_status(&db, json).await,
        None => handle_interactive(Arc::new(db.clone()), &config).await,
    };

    db.close().await;
    result
}

async fn handle_interactive(db: Arc<Database>, config: &Config) -> Result<()> {
    let prompt = Prompt::new(io::stdin().lock(), io::stdout());

    // Login failure was already shown to the user
    let mut session = menu::login(db, prompt, config.email.as_deref())
        .await
        .context("Could not start a session")?;

    info!(student_id = session.student().id, "Session started");
    session.run().await?;

    Ok(())
}

async fn handle_status(db: &Database, json: bool) -> Result<()> {
    let stats = db.stats().await?;

    if json {
        println!("{}", stats.to_json()?);
        return Ok(());
    }

    println!("\nhomework-hub Status");
    println!("{}", "=".repeat(40));
    println!("  Database:       {}", db.path().display());
    println!("  Students:       {}", stats.students);
    println!("  Assignments:    {}", stats.assignments);
    println!("  Reminders:      {}", stats.reminders);
    println!("  Study sessions: {}", stats.study_sessions);
    println!("{}", "=".repeat(40));

    Ok(())
}
