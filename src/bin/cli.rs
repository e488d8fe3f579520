// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! scadkit CLI

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::{Level, LevelFilter, Log, Metadata, Record};
use scadkit::demos::Demo;
use scadkit::{io, Config};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scadkit")]
#[command(about = "Compose solids and transforms and render them to OpenSCAD source", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a demo scene to SCAD source
    Demo {
        /// Demo name (see `list`)
        name: Demo,

        /// Output file; stdout if omitted
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Configuration file; defaults to scadkit.toml if present
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Emit everything on one line
        #[arg(long)]
        inline: bool,

        /// Write single-child blocks without braces
        #[arg(long)]
        simplify: bool,
    },

    /// Print the object tree of a demo scene
    Tree {
        name: Demo,
    },

    /// Print a demo scene as JSON
    Json {
        name: Demo,
    },

    /// List the demo scenes
    List,

    /// Show version information
    Version,
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level = match record.level() {
            Level::Error => "error".red().bold(),
            Level::Warn => "warning".yellow().bold(),
            Level::Info => "info".bright_blue(),
            Level::Debug | Level::Trace => "debug".bright_black(),
        };
        eprintln!("{}: {}", level, record.args());
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logger(verbose: bool) -> Result<()> {
    log::set_logger(&LOGGER).map_err(|e| anyhow!("{}", e))?;
    log::set_max_level(if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose)?;

    match cli.command {
        Commands::Demo {
            name,
            output,
            config,
            inline,
            simplify,
        } => {
            demo_command(name, output, config, inline, simplify)?;
        }
        Commands::Tree { name } => {
            let scene = name.scene()?;
            println!("{}", scene.to_tree());
        }
        Commands::Json { name } => {
            let scene = name.scene()?;
            println!("{}", serde_json::to_string_pretty(&scene)?);
        }
        Commands::List => {
            for demo in Demo::ALL {
                println!("  {:<12} {}", demo.name().cyan(), demo.description());
            }
        }
        Commands::Version => {
            println!("scadkit v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn demo_command(
    demo: Demo,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
    inline: bool,
    simplify: bool,
) -> Result<()> {
    let mut config = match &config_path {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config file: {:?}", path))?,
        None => Config::load().context("Failed to load configuration")?,
    };
    if config.resolution.is_none() {
        config.resolution = demo.config().resolution;
    }
    config.emit.inline |= inline;
    config.emit.simplify |= simplify;

    log::debug!("rendering demo {}", demo);
    let scene = demo.scene()?;

    match output {
        Some(path) => {
            io::write_to_file(&scene, &path, &config)
                .with_context(|| format!("Failed to write {:?}", path))?;
            println!("{} {} -> {}", "Rendered".green(), demo, path.display());
        }
        None => {
            print!("{}", io::render_to_string(&scene, &config)?);
        }
    }

    Ok(())
}
