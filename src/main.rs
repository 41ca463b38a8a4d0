use anyhow::Result;
use clap::Parser;
use gemini_format_check::report;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "gemini-format-check")]
#[command(version)]
#[command(about = "Print the expected Gemini chat request format next to our simulated payload")]
struct CliArgs {}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gemini_format_check=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let _args = CliArgs::parse();

    let stdout = std::io::stdout();
    report::run(&mut stdout.lock())?;

    info!("Format check report written");
    Ok(())
}
