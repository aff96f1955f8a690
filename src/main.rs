// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};
use wordbook_export::config::DEFAULT_CONFIG_PATH;
use wordbook_export::session::ensure_target_page;
use wordbook_export::utils::logging::Notice;
use wordbook_export::{Config, ExportError, ExportFormat, HttpSession, Validator, WordbookExporter};

#[derive(Parser)]
#[command(name = "wordbook_export")]
#[command(version)]
#[command(about = "Export a Youdao dictionary word book to JSON and CSV", long_about = None)]
struct Cli {
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SessionArgs {
    /// Cookie header copied from a logged-in browser session
    #[arg(long, env = "YOUDAO_COOKIE", hide_env_values = true)]
    cookie: Option<String>,

    /// Word book page used for the login check
    #[arg(long, value_name = "URL")]
    page_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the word book and write words.json / words.csv
    Export {
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Formats to write (defaults to both)
        #[arg(short, long, value_enum, value_delimiter = ',')]
        format: Vec<ExportFormat>,

        #[arg(long)]
        no_progress: bool,

        #[command(flatten)]
        session: SessionArgs,
    },

    /// Verify the session is logged in without downloading anything
    Check {
        #[command(flatten)]
        session: SessionArgs,
    },

    /// Print how many words the word book holds
    Count {
        #[command(flatten)]
        session: SessionArgs,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    wordbook_export::utils::logging::init_logger(cli.color, cli.verbose);
    colored::control::set_override(cli.color);

    info!("Loading configuration from: {}", cli.config.display());

    let config = Config::resolve(&cli.config).context("Failed to load configuration")?;

    let outcome = match cli.command {
        Commands::Export {
            output,
            format,
            no_progress,
            session,
        } => {
            let config = apply_overrides(config, &session, output)?;
            cmd_export(config, &format, !no_progress, cli.color).await
        }
        Commands::Check { session } => {
            let config = apply_overrides(config, &session, None)?;
            cmd_check(config).await
        }
        Commands::Count { session } => {
            let config = apply_overrides(config, &session, None)?;
            cmd_count(config).await
        }
    };

    Ok(report_outcome(outcome))
}

fn apply_overrides(
    mut config: Config,
    session: &SessionArgs,
    output: Option<PathBuf>,
) -> Result<Config> {
    if let Some(cookie) = &session.cookie {
        config.session.cookie = Some(cookie.clone());
    }
    if let Some(page_url) = &session.page_url {
        Validator::validate_url(page_url)?;
        config.endpoint.page_url = page_url.clone();
    }
    if let Some(output) = output {
        Validator::validate_directory(&output)?;
        config.output.directory = output;
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Host precondition first, then the cookie-carrying session.
fn open_session(config: &Config) -> wordbook_export::Result<WordbookExporter<HttpSession>> {
    ensure_target_page(
        &config.endpoint.page_url,
        &config.endpoint.target_domain,
        &config.endpoint.site_url,
    )?;

    let session = HttpSession::new(config.clone())?;
    Ok(WordbookExporter::new(config.clone(), session))
}

async fn cmd_export(
    config: Config,
    formats: &[ExportFormat],
    show_progress: bool,
    colored: bool,
) -> wordbook_export::Result<()> {
    info!("Exporting word book to {}", config.output.directory.display());

    let exporter = open_session(&config)?.with_progress(show_progress, colored);
    let report = exporter.run(formats).await?;

    println!(
        "{}",
        Notice::Done.render(format!(
            "Exported {} of {} words",
            report.words_exported, report.total_reported
        ))
    );
    for file in &report.files {
        println!("{}", Notice::File.render(file.display()));
    }

    Ok(())
}

async fn cmd_check(config: Config) -> wordbook_export::Result<()> {
    info!("Checking login state at {}", config.endpoint.page_url);

    open_session(&config)?.check_login().await?;
    println!("{}", Notice::Done.render("Session is logged in"));

    Ok(())
}

async fn cmd_count(config: Config) -> wordbook_export::Result<()> {
    let total = open_session(&config)?.count_words().await?;
    println!("{}", Notice::Done.render(format!("Word book holds {} words", total)));

    Ok(())
}

/// Precondition failures become a notice; anything else is logged.
fn report_outcome(outcome: wordbook_export::Result<()>) -> ExitCode {
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_precondition() => {
            eprintln!("{}", Notice::Action.render(&err));
            ExitCode::FAILURE
        }
        Err(err) => {
            error!("Export failed: {}", err);
            if let ExportError::PartialExport { written, .. } = &err {
                for path in written {
                    warn!("Left in place: {}", path.display());
                }
            }
            eprintln!("{}", Notice::Failure.render(&err));
            ExitCode::FAILURE
        }
    }
}
