//! signup CLI
//!
//! Fills in and submits the registration form from the terminal.

mod session;

use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use signup_form::Locale;

use crate::session::Session;

/// Registration form with live validation.
#[derive(Parser)]
#[command(name = "signup")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Language of messages (en or ru).
    #[arg(short, long, env = "SIGNUP_LOCALE", default_value = "en")]
    locale: Locale,

    /// Print accepted registrations as JSON.
    #[arg(long)]
    json: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable with --json
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!(locale = ?cli.locale, "type `help` for commands");

    let mut session = Session::new(cli.locale, cli.json);
    session.run(std::io::stdin().lock(), std::io::stdout().lock())?;

    Ok(())
}
