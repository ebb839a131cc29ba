//! Command-line front end: validate content, probe layouts headlessly.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::json;

use crate::config::{CONFIG_FILE, SiteConfig, TieBreak};
use crate::content::PortfolioData;
use crate::flags::ScrollFlags;
use crate::section::{ScrollState, Section, SectionTable};
use crate::tracker::SectionTracker;

#[derive(Debug, Parser)]
#[command(name = "portfolio", version, about = "Portfolio page tooling")]
pub struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a content document and config file
    Check {
        /// Content JSON (defaults to the built-in document)
        #[arg(long)]
        content: Option<PathBuf>,
        /// Config TOML (defaults to ./portfolio.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Report the active section for a layout and scroll position
    Probe(ProbeArgs),
    /// Print the built-in content document as JSON
    Content,
}

#[derive(Debug, Args)]
pub struct ProbeArgs {
    /// Layout JSON: `[{"id": "home", "top": 0, "height": 800}, ...]`
    #[arg(long)]
    pub layout: PathBuf,
    /// Scroll offset in pixels
    #[arg(long, allow_negative_numbers = true)]
    pub y: f64,
    /// Viewport height in pixels
    #[arg(long)]
    pub viewport: f64,
    /// Section that was active before this scroll
    #[arg(long)]
    pub previous: Option<String>,
    /// Overlap policy: first|last (overrides config)
    #[arg(long)]
    pub tie_break: Option<TieBreak>,
    /// Config TOML
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Install the stderr subscriber. `RUST_LOG` wins over `--log-level`.
pub fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();
}

pub fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Command::Check { content, config } => check(content.as_deref(), config.as_deref()),
        Command::Probe(args) => probe(&args),
        Command::Content => {
            let data = PortfolioData::builtin().context("built-in content is invalid")?;
            println!("{}", serde_json::to_string_pretty(&data)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    let path = path.unwrap_or_else(|| Path::new(CONFIG_FILE));
    SiteConfig::try_load_from_path(path).with_context(|| format!("loading {}", path.display()))
}

fn check(content: Option<&Path>, config: Option<&Path>) -> Result<ExitCode> {
    load_config(config)?;

    let data = match content {
        Some(path) => {
            PortfolioData::load(path).with_context(|| format!("loading {}", path.display()))?
        }
        None => PortfolioData::builtin().context("built-in content is invalid")?,
    };

    let issues = data.validate();
    if issues.is_empty() {
        println!(
            "ok: {} skill groups, {} roles, {} projects, {} education entries",
            data.skills.len(),
            data.experience.len(),
            data.projects.len(),
            data.education.len()
        );
        return Ok(ExitCode::SUCCESS);
    }

    for issue in &issues {
        println!("{issue}");
    }
    tracing::warn!(count = issues.len(), "content has issues");
    Ok(ExitCode::FAILURE)
}

fn probe(args: &ProbeArgs) -> Result<ExitCode> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(tie_break) = args.tie_break {
        config.tracker.tie_break = tie_break;
    }

    let raw = std::fs::read_to_string(&args.layout)
        .with_context(|| format!("reading {}", args.layout.display()))?;
    let layout: Vec<Section> =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", args.layout.display()))?;
    let table = SectionTable::from_sections(layout)?;

    let mut tracker = SectionTracker::new(table, config.tracker.clone());
    if let Some(previous) = &args.previous {
        tracker.restore(previous)?;
    }

    let scroll = ScrollState::new(args.y, args.viewport);
    let changed = tracker.recompute(scroll);
    let flags = ScrollFlags::from_scroll(scroll, &config.flags);
    let probe = scroll.probe_point(config.tracker.probe_divisor);

    if args.json {
        let out = json!({
            "active": tracker.active(),
            "changed": changed,
            "probe": probe,
            "navbar_opaque": flags.navbar_opaque,
            "show_scroll_top": flags.show_scroll_top,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("active: {}", tracker.active().unwrap_or("-"));
        println!("changed: {changed}");
        println!("probe: {probe}");
        println!("navbar_opaque: {}", flags.navbar_opaque);
        println!("show_scroll_top: {}", flags.show_scroll_top);
    }
    Ok(ExitCode::SUCCESS)
}
