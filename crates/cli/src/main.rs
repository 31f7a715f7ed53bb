use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use folio_tui::PortfolioConfig;
use folio_tui::nav::SectionRegistry;
use folio_tui::ui::theme;
use folio_types::ThemeMode;
use folio_util::{UserPreferences, expand_tilde};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const LOG_PATH_ENV: &str = "FOLIO_LOG_PATH";

#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Terminal résumé with scroll-aware navigation")]
struct Cli {
    /// Color theme (overrides FOLIO_THEME and the saved preference).
    #[arg(long, global = true)]
    theme: Option<ThemeMode>,

    /// Rows scrolled before the header switches style.
    #[arg(long, global = true)]
    scroll_threshold: Option<u16>,

    /// Width in columns below which the header collapses into a menu.
    #[arg(long, global = true)]
    narrow_breakpoint: Option<u16>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Open the interactive page (default).
    Tui,
    /// Print the page to stdout.
    Render(RenderArgs),
}

#[derive(Debug, Args)]
struct RenderArgs {
    /// Layout width in columns.
    #[arg(long, default_value_t = 100)]
    width: u16,

    #[arg(long, value_enum, default_value_t = RenderFormat::Text)]
    format: RenderFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RenderFormat {
    /// Laid-out document as plain text.
    Text,
    /// Static content and section list as JSON.
    Json,
}

impl Cli {
    /// Environment-derived config with command-line overrides applied.
    fn config(&self) -> PortfolioConfig {
        let mut config = PortfolioConfig::from_env();
        if let Some(threshold) = self.scroll_threshold {
            config.scroll_threshold = threshold;
        }
        if let Some(breakpoint) = self.narrow_breakpoint {
            config.narrow_breakpoint = breakpoint;
        }
        if self.theme.is_some() {
            config.theme = self.theme;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    match cli.command {
        None | Some(Command::Tui) => {
            init_tracing(LogTarget::File(log_path()));
            let preferences = open_preferences();
            info!(?config, preferences = %preferences.path().display(), "launching");
            folio_tui::run(config, preferences).await
        }
        Some(Command::Render(args)) => {
            init_tracing(LogTarget::Stderr);
            render(&args, &config)
        }
    }
}

fn render(args: &RenderArgs, config: &PortfolioConfig) -> Result<()> {
    match args.format {
        RenderFormat::Text => {
            let preferred = open_preferences().preferred_theme();
            let mode = theme::resolve_mode(config.theme, preferred);
            print!("{}", folio_tui::render_plain_text(args.width, mode));
        }
        RenderFormat::Json => {
            let registry = SectionRegistry::portfolio();
            let out = serde_json::json!({
                "sections": registry.items(),
                "content": folio_content::portfolio(),
            });
            println!("{}", serde_json::to_string_pretty(&out).context("serialize portfolio")?);
        }
    }
    Ok(())
}

fn open_preferences() -> UserPreferences {
    UserPreferences::new().unwrap_or_else(|error| {
        warn!(%error, "preferences unavailable; changes will not be saved");
        UserPreferences::ephemeral()
    })
}

enum LogTarget {
    Stderr,
    /// The TUI owns the terminal, so logs go to a file instead.
    File(PathBuf),
}

fn log_path() -> PathBuf {
    if let Ok(path) = std::env::var(LOG_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return expand_tilde(trimmed);
        }
    }
    dirs_next::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
        .join("folio.log")
}

fn init_tracing(target: LogTarget) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match target {
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogTarget::File(path) => {
            let file = path
                .parent()
                .map_or(Ok(()), fs::create_dir_all)
                .and_then(|()| OpenOptions::new().create(true).append(true).open(&path));
            // Without a log file, run silently rather than corrupt the screen.
            if let Ok(file) = file {
                let _ = tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .try_init();
            }
        }
    }
}
