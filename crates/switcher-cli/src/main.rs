//! Switcher CLI - check widget configs and replay gesture scripts.

#![allow(clippy::uninlined_format_args)]

mod script;

use clap::{Parser, Subcommand};
use log::LevelFilter;
use script::{Report, Script};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use switcher::{SwitcherConfig, SwitcherStyle};
use switcher_core::DrawCommand;

#[derive(Parser)]
#[command(name = "switcher")]
#[command(about = "Toggle switch widget tooling")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a widget config file
    Check {
        /// Path to config file (.yaml, .yml or .toml)
        #[arg(default_value = "switcher.yaml")]
        config: PathBuf,
    },

    /// Replay a gesture script against a headless switcher
    Replay {
        /// Path to the YAML gesture script
        script: PathBuf,

        /// Widget config file (defaults apply when omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Check { config } => check_config(&config),
        Commands::Replay {
            script,
            config,
            format,
        } => replay(&script, config.as_deref(), &format),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::from_default_env();
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.init();
}

fn load_style(path: Option<&Path>) -> Result<SwitcherStyle, Box<dyn Error>> {
    let config = match path {
        Some(path) => SwitcherConfig::from_path(path)?,
        None => SwitcherConfig::default(),
    };
    Ok(config.resolve()?)
}

fn check_config(path: &Path) -> Result<(), Box<dyn Error>> {
    println!("Checking config: {}", path.display());
    let config = SwitcherConfig::from_path(path)?;
    let style = config.resolve()?;

    println!("Config valid!");
    println!("  Open color: {}", style.open_color.to_hex());
    println!("  Close color: {}", style.close_color.to_hex());
    println!("  Thumb color: {}", style.thumb_color.to_hex());
    println!("  Thumb gap: {}px", style.gap);
    println!("  Duration: {}ms", style.duration_ms);
    println!("  Threshold: {}", style.threshold);
    println!("  Easing: {:?}", style.easing);
    if style.gap <= 0 {
        log::warn!("thumb gap {} is not positive", style.gap);
    }
    Ok(())
}

fn replay(path: &Path, config: Option<&Path>, format: &str) -> Result<(), Box<dyn Error>> {
    let style = load_style(config)?;
    let script = Script::from_yaml_str(&fs::read_to_string(path)?)?;
    log::debug!(
        "replaying {} steps on a {}x{} surface",
        script.steps.len(),
        script.width,
        script.height
    );
    let report = script.replay(style);

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        "text" => print_report(&report),
        other => return Err(format!("unknown format '{}' (expected text or json)", other).into()),
    }
    Ok(())
}

fn print_report(report: &Report) {
    for change in &report.changes {
        println!("step {}: switched {}", change.step, change.state);
    }
    println!("Frames: {}", report.frames);
    println!("State: {}", report.state);
    println!("Thumb: {}", report.thumb_position);
    println!("Blend: {}", report.background_blend);
    if report.animating {
        println!("Animation still running");
    }
    for command in &report.paint {
        let DrawCommand::FillRect { rect, color } = command;
        println!(
            "  fill ({}, {}) - ({}, {}) {} alpha {}",
            rect.left,
            rect.top,
            rect.right,
            rect.bottom,
            color.to_hex(),
            color.alpha8()
        );
    }
}
