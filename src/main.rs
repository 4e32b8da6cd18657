use clap::Parser;
use formflow::{
    config,
    screens::{LoginScreen, Presenter},
    shell::{self, ConsolePresenter},
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::BufReader;

#[derive(Debug, Parser)]
#[command(name = "formflow", version, about = "Login and nickname forms in the terminal")]
struct Cli {
    /// TOML file with validation patterns (overrides FORMFLOW_RULES)
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Read commands from a file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Log filter, e.g. "formflow=debug" (overrides FORMFLOW_LOG)
    #[arg(long)]
    log: Option<String>,

    /// Start with the password unmasked
    #[arg(long)]
    show_password: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut cfg = config::Config::from_env()?;
    if let Some(path) = cli.rules {
        cfg.rules_path = Some(path);
    }
    if let Some(filter) = cli.log {
        cfg.log_filter = filter;
    }
    if cli.show_password {
        cfg.secure_entry = false;
    }

    init_tracing(&cfg.log_filter)?;

    let rules = Arc::new(cfg.rule_set()?);
    let presenter: Arc<dyn Presenter> = Arc::new(ConsolePresenter::stdout());

    let mut screen = LoginScreen::new(rules, presenter.clone());
    screen.set_secure_entry(cfg.secure_entry);

    match cli.script {
        Some(path) => {
            tracing::info!(path = %path.display(), "running script");
            let file = tokio::fs::File::open(&path).await?;
            shell::serve(BufReader::new(file), screen, presenter).await?;
        }
        None => {
            presenter.notice("formflow ready, type 'help' for commands");
            shell::serve_stdin(screen, presenter).await?;
        }
    }

    Ok(())
}

fn init_tracing(filter: &str) -> anyhow::Result<()> {
    use tracing_subscriber::{EnvFilter, prelude::*};

    color_eyre::install().map_err(|e| anyhow::anyhow!(e.to_string()))?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(filter)?)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_timer(tracing_subscriber::fmt::time::uptime()),
        )
        .with(tracing_error::ErrorLayer::default())
        .init();

    Ok(())
}
