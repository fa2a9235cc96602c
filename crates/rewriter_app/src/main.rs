//! `rewriter`: rewrite blog posts from the command line.
mod access;
mod config;
mod logging;
mod persistence;
mod render;
mod runner;

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use engine_logging::{engine_info, engine_warn};
use log::LevelFilter;
use rewriter_core::AppViewModel;
use rewriter_engine::{write_atomic, Engine};

use crate::access::check_access;
use crate::config::{AppConfig, DEFAULT_CONFIG_PATH};
use crate::logging::LogDestination;
use crate::persistence::HistoryStore;

#[derive(Parser)]
#[command(name = "rewriter", about = "Rewrite blog posts with a language model")]
struct Cli {
    /// Settings file (RON). Missing file means defaults.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Where log lines go.
    #[arg(long, global = true, value_enum, default_value_t = LogDestination::Terminal)]
    log: LogDestination,
    /// Log at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and rewrite one or more posts
    Rewrite {
        /// Post URLs
        urls: Vec<String>,
        /// Read more URLs from a file, one per line
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Look up stock photos for keyword placeholders
        #[arg(long)]
        suggest_images: bool,
        /// Also write copy-ready texts to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Access password, when one is configured
        #[arg(long, env = "REWRITER_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Show recent submissions
    History,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    logging::initialize(cli.log, level, &PathBuf::from("./rewriter.log"));

    let mut config = AppConfig::load(&cli.config)?;
    config.apply_env(|name| std::env::var(name).ok());

    match cli.command {
        Commands::Rewrite {
            urls,
            file,
            suggest_images,
            output,
            password,
        } => {
            check_access(config.access_password.as_deref(), password.as_deref())?;
            let mut urls = urls;
            if let Some(path) = file {
                let listed = fs::read_to_string(&path)
                    .with_context(|| format!("failed to read URL list {:?}", path))?;
                urls.extend(listed.lines().map(str::to_string));
            }
            config.suggest_images |= suggest_images;
            rewrite(&config, &urls, output)
        }
        Commands::History => {
            let history = HistoryStore::open(&config.state_dir);
            if history.entries().is_empty() {
                println!("기록이 없습니다.");
            }
            for entry in history.entries() {
                println!("{}", entry.timestamp);
                for url in &entry.urls {
                    println!("  {url}");
                }
            }
            Ok(())
        }
    }
}

fn rewrite(config: &AppConfig, urls: &[String], output: Option<PathBuf>) -> anyhow::Result<()> {
    if config.openai_api_key.is_none() {
        engine_warn!("No completion API key configured; every item will fail to rewrite");
    }
    let engine = Engine::new(config.engine_config()).context("failed to start engine")?;
    let mut history = HistoryStore::open(&config.state_dir);

    let mut last_label = String::new();
    let view = runner::run_batch(&engine, &mut history, urls, &mut |view: &AppViewModel| {
        let label = view.progress_label();
        if label != last_label {
            eprintln!("{label}");
            last_label = label;
        }
    })?;

    println!("{}", render::render_batch(&view));

    if let Some(path) = output {
        write_atomic(&path, &render::copy_ready_export(&view))
            .with_context(|| format!("failed to write {:?}", path))?;
        engine_info!("Wrote copy-ready texts to {:?}", path);
    }
    Ok(())
}
