// Docsplain CLI entry point

use anyhow::{Context, Result};
use clap::Parser;
use docsplain_core::export::{self, ExportFormat};
use docsplain_core::{intake, AppError, Channel, Explainer, ExplainerConfig, ExplanationArtifact};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const LOG_FORMAT_VAR: &str = "DOCSPLAIN_LOG_FORMAT";

#[derive(Parser, Debug)]
#[command(
    name = "docsplain",
    version,
    about = "Explain technical documentation in beginner-friendly terms"
)]
struct Cli {
    /// How the input reached the engine (paste, url or file)
    #[arg(long, default_value = "paste")]
    channel: Channel,

    /// Read the input from a text-based file
    #[arg(long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Output format: json, markdown, html, share or download
    #[arg(long, default_value = "json")]
    format: String,

    /// Documentation text; stdin is read when neither TEXT nor --file is given
    text: Option<String>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var(LOG_FORMAT_VAR).is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = stdout.write_all(output.as_bytes()) {
                error!("Failed to write output: {}", e);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            let message = match e.downcast_ref::<AppError>() {
                Some(app_error) => app_error.user_message(),
                None => AppError::Internal(e.to_string()).user_message(),
            };
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<String> {
    let config = ExplainerConfig::from_env()?;
    let format = OutputFormat::parse(&cli.format)?;

    let (raw, channel) = match (&cli.file, cli.text) {
        (Some(path), _) => (intake::read_path(path)?, Channel::File),
        (None, Some(text)) => (text, cli.channel),
        (None, None) => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            (buf, cli.channel)
        }
    };

    let explainer = Explainer::from_config(&config)?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!(%channel, "Explaining input");
    let artifact = explainer.explain(&raw, channel, &mut rng).await?;
    Ok(format.render(&artifact)?)
}

enum OutputFormat {
    Json,
    Export(ExportFormat),
}

impl OutputFormat {
    fn parse(raw: &str) -> Result<Self, AppError> {
        if raw.trim().eq_ignore_ascii_case("json") {
            return Ok(OutputFormat::Json);
        }
        raw.parse().map(OutputFormat::Export)
    }

    fn render(&self, artifact: &ExplanationArtifact) -> Result<String, AppError> {
        match self {
            OutputFormat::Json => export::to_json(artifact).map(|mut s| {
                s.push('\n');
                s
            }),
            OutputFormat::Export(format) => Ok(export::render(artifact, *format).body),
        }
    }
}
