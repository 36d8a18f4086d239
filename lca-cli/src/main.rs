//! # lca-report
//!
//! Renders the Bio-SAC Life Cycle Assessment report.
//!
//! ## Usage
//!
//! ```bash
//! # Serve the interactive report (sidebar at /, tabs at /tabs)
//! lca-report serve --port 8501
//!
//! # Write a standalone report with every section
//! lca-report render --layout tabs --out ./lca-report
//!
//! # List navigation entries
//! lca-report sections --layout sidebar
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use lca_cli::config::{CONFIG_FILE, ReportConfig};
use lca_cli::server::{self, ASSET_PREFIX};
use lca_cli::write_report;
use lca_report::{Layout, ReportRenderer};

#[derive(Parser, Debug)]
#[command(name = "lca-report")]
#[command(about = "Life Cycle Assessment report for Bio-SAC production")]
#[command(version)]
struct Args {
    /// Config file (default: ./lca-report.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the system boundary diagram
    #[arg(long, global = true)]
    asset_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the report as static HTML
    Render {
        /// Navigation layout: sidebar or tabs
        #[arg(long, value_parser = parse_layout)]
        layout: Option<Layout>,

        /// Output directory
        #[arg(long, default_value = "lca-report")]
        out: PathBuf,

        /// Write only this section (label or slug)
        #[arg(long)]
        section: Option<String>,
    },
    /// Serve the report over HTTP
    Serve {
        /// Address to bind
        #[arg(long)]
        bind: Option<String>,

        /// Port to listen on
        #[arg(long)]
        port: Option<u16>,
    },
    /// List the navigation entries of a layout
    Sections {
        /// Navigation layout: sidebar or tabs
        #[arg(long, value_parser = parse_layout)]
        layout: Option<Layout>,
    },
}

fn parse_layout(value: &str) -> Result<Layout, String> {
    Layout::from_label(value).ok_or_else(|| format!("unknown layout '{value}' (expected sidebar or tabs)"))
}

fn load_config(args: &Args) -> ReportConfig {
    let mut config = match &args.config {
        Some(path) => ReportConfig::load_from_path(path),
        None => ReportConfig::load_from_path(&PathBuf::from(CONFIG_FILE)),
    };
    if let Some(dir) = &args.asset_dir {
        config.report.asset_dir = dir.clone();
    }
    config
}

fn report_renderer(config: &ReportConfig, url_prefix: &str) -> ReportRenderer {
    let renderer = ReportRenderer::new(config.asset_store(url_prefix), config.chart_assets());
    for mismatch in renderer.data().consistency().mismatches() {
        warn!("{mismatch}");
    }
    renderer
}

async fn run() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    let mut config = load_config(&args);

    match args.command {
        Command::Render {
            layout,
            out,
            section,
        } => {
            let layout = layout.unwrap_or(config.report.layout);
            let renderer = report_renderer(&config, "");
            let outcome = write_report(&renderer, layout, section.as_deref(), &out)?;
            println!("{}", outcome.index.display());
        }
        Command::Serve { bind, port } => {
            if let Some(bind) = bind {
                config.server.bind = bind;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            info!("Starting lca-report v{}", env!("CARGO_PKG_VERSION"));
            let renderer = report_renderer(&config, ASSET_PREFIX);
            server::run(&config.listen_addr(), renderer).await?;
        }
        Command::Sections { layout } => {
            let layout = layout.unwrap_or(config.report.layout);
            for entry in layout.entries() {
                println!("{}\t{}", entry.slug, entry.label);
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[lca-report] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
