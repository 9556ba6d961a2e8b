use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use swatchgrid_engine::{RecordingRenderer, SelectionController, layout};
use swatchgrid_tui::ScreenOptions;
use swatchgrid_types::{ColumnCapacity, ColumnId, Rgb};
use swatchgrid_util::{Settings, parse_color};
use tracing::debug;

/// Pick a color from a grid of swatches.
#[derive(Debug, Parser)]
#[command(name = "swatchgrid", version, about)]
struct Cli {
    /// Swatches per column (overrides the settings file).
    #[arg(long, short = 'n', global = true, value_name = "N")]
    capacity: Option<usize>,

    /// Color to offer, repeatable: #rrggbb, rgb(r, g, b) or a name such as "orange".
    #[arg(long = "color", short = 'c', global = true, value_name = "COLOR", value_parser = parse_color)]
    colors: Vec<Rgb>,

    /// Settings file to read instead of the default location.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the palette grid as JSON.
    Layout,
    /// Select a color without opening the screen and report where it lives.
    Select {
        /// The color to select.
        #[arg(value_parser = parse_color)]
        color: Rgb,
    },
}

#[derive(Debug, Serialize)]
struct SelectionReport {
    selected: Rgb,
    label: String,
    column: ColumnId,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(default_log_filter(&cli));

    let options = resolve_options(&cli)?;
    debug!(
        colors = options.colors.len(),
        capacity = options.column_capacity.get(),
        "resolved palette options"
    );

    match cli.command {
        None => {
            if let Some(color) = swatchgrid_tui::run(options)? {
                println!("{}", color.to_hex());
            }
        }
        Some(Command::Layout) => {
            let grid = layout(&options.colors, options.column_capacity.get())?;
            println!("{}", serde_json::to_string_pretty(&grid)?);
        }
        Some(Command::Select { color }) => {
            let report = select_headless(options, color)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

/// The screen owns the terminal, so it only logs when `RUST_LOG` asks for it.
fn default_log_filter(cli: &Cli) -> &'static str {
    if cli.command.is_none() { "off" } else { "warn" }
}

fn init_tracing(default_filter: &str) {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Merges command-line flags over the settings file over built-in defaults.
fn resolve_options(cli: &Cli) -> Result<ScreenOptions> {
    let settings = match cli.config.as_ref() {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
    .context("failed to load settings")?;

    let column_capacity = match cli.capacity {
        Some(raw) => ColumnCapacity::new(raw).context("invalid --capacity")?,
        None => settings.column_capacity()?,
    };
    let colors = if cli.colors.is_empty() { settings.colors()? } else { cli.colors.clone() };

    Ok(ScreenOptions { colors, column_capacity })
}

fn select_headless(options: ScreenOptions, color: Rgb) -> Result<SelectionReport> {
    let mut controller = SelectionController::with_capacity(options.column_capacity, RecordingRenderer::default());
    controller.set_available_colors(&options.colors);
    controller
        .select(color)
        .with_context(|| format!("cannot select {}", color.to_hex()))?;

    let label = controller.renderer().selection_label().unwrap_or_default().to_string();
    let column = controller
        .column_of(color)
        .context("selected color has no column")?;
    Ok(SelectionReport {
        selected: color,
        label,
        column,
    })
}
