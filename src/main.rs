use anyhow::Context;
use backup_model::operations::{find_operation, validate_request_document};
use backup_model::utils::{logger, validation::Validate};
use backup_model::{
    render_document, BackupError, ClientConfig, DocumentKind, ErrorCategory, OPERATION_NAMES,
};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "backup-model")]
#[command(about = "Inspect AWS Backup request and response documents")]
struct Cli {
    #[arg(long, global = true, help = "Enable verbose output")]
    verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    json_logs: bool,

    #[arg(long, global = true, help = "Client configuration file (TOML)")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every operation name
    Operations,
    /// Decode a JSON document and print its debug rendering
    Render {
        /// Operation name, e.g. ListBackupJobs
        operation: String,
        /// `request` or `response`
        kind: DocumentKind,
        /// JSON document to decode
        file: PathBuf,
        /// Also run the request validation pass
        #[arg(long)]
        validate: bool,
    },
    /// Print the resolved service endpoint
    Endpoint,
}

fn load_config(path: Option<&Path>) -> Result<ClientConfig, BackupError> {
    let config = match path {
        Some(path) => ClientConfig::from_file(path)?,
        None => ClientConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn init_logging(cli: &Cli, config: &ClientConfig) {
    if cli.json_logs {
        logger::init_json_logger();
    } else if cli.config.is_some() {
        logger::init_from_config(&config.logging, cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
}

fn render(
    config: &ClientConfig,
    operation: &str,
    kind: DocumentKind,
    file: &Path,
    validate: bool,
) -> anyhow::Result<()> {
    let operation = find_operation(operation)?;
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    if validate || config.client.validate_requests {
        match kind {
            DocumentKind::Request => {
                validate_request_document(operation, &json)?;
                tracing::info!(operation, "Request passed validation");
            }
            DocumentKind::Response => {
                tracing::warn!(operation, "Validation only applies to requests, skipping");
            }
        }
    }

    println!("{}", render_document(operation, kind, &json)?);
    Ok(())
}

fn run(cli: &Cli, config: &ClientConfig) -> anyhow::Result<()> {
    match &cli.command {
        Command::Operations => {
            for name in OPERATION_NAMES {
                println!("{}", name);
            }
        }
        Command::Render {
            operation,
            kind,
            file,
            validate,
        } => render(config, operation, *kind, file, *validate)?,
        Command::Endpoint => println!("{}", config.endpoint()),
    }
    Ok(())
}

fn exit_code(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<BackupError>().map(BackupError::category) {
        Some(ErrorCategory::Validation) => ExitCode::from(2),
        Some(ErrorCategory::Config) => ExitCode::from(3),
        Some(ErrorCategory::Service) => ExitCode::from(4),
        Some(ErrorCategory::Client) | None => ExitCode::FAILURE,
    }
}

fn report(error: &anyhow::Error) {
    tracing::error!("{:#}", error);
    eprintln!("Error: {:#}", error);
    if let Some(e) = error.downcast_ref::<BackupError>() {
        eprintln!("Hint: {}", e.recovery_suggestion());
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            logger::init_cli_logger(cli.verbose);
            let error = anyhow::Error::new(e);
            report(&error);
            return exit_code(&error);
        }
    };

    init_logging(&cli, &config);
    tracing::debug!(region = config.region(), "Configuration loaded");

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            report(&error);
            exit_code(&error)
        }
    }
}
