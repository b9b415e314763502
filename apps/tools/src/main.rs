use std::io::{self, Write};

use anyhow::{Context, Result};
use catalog::Catalog;
use clap::{Parser, Subcommand};
use serde::Serialize;
use shared::domain::{Layer, Mode, ModeNarrative};
use tracing_subscriber::EnvFilter;
use view_core::ViewStateController;

mod replay;

#[derive(Parser, Debug)]
struct Cli {
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the layers in storage order (foundation first).
    Layers {
        #[arg(long)]
        top_down: bool,
    },
    /// Print one layer's panel content for a mode.
    Show {
        id: String,
        #[arg(long, default_value = "baseline")]
        mode: Mode,
    },
    /// Run interaction steps against a fresh session.
    Replay {
        #[arg(required = true)]
        steps: Vec<String>,
    },
}

#[derive(Serialize)]
struct ShowRecord<'a> {
    position: usize,
    total: usize,
    layer: &'a Layer,
    narrative: ModeNarrative,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    run(cli, Catalog::standard(), &mut out)?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}

fn run(cli: Cli, catalog: &Catalog, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Command::Layers { top_down } => {
            let layers: Vec<&Layer> = if top_down {
                catalog.top_down().collect()
            } else {
                catalog.all_layers().iter().collect()
            };
            if cli.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&layers)?)?;
            } else {
                for layer in layers {
                    let position = catalog.position(layer.id).unwrap_or_default();
                    writeln!(
                        out,
                        "{position}. {:<14} {:<20} {}",
                        layer.id.as_str(),
                        layer.title,
                        layer.analogy
                    )?;
                }
            }
        }
        Command::Show { id, mode } => {
            let layer = catalog.layer_by_id(&id)?;
            let record = ShowRecord {
                position: catalog.position(layer.id).unwrap_or_default(),
                total: catalog.len(),
                layer,
                narrative: layer.narrative(mode),
            };
            if cli.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&record)?)?;
            } else {
                print_panel(out, &record)?;
            }
        }
        Command::Replay { steps } => {
            let steps = steps
                .iter()
                .map(|raw| replay::parse_step(raw))
                .collect::<Result<Vec<_>>>()?;
            let mut controller = ViewStateController::new(catalog);
            tracing::debug!(steps = steps.len(), "replaying interaction script");
            replay::run_replay(&mut controller, &steps, cli.json, out)?;
        }
    }
    Ok(())
}

fn print_panel(out: &mut impl Write, record: &ShowRecord<'_>) -> Result<()> {
    let layer = record.layer;
    let mode = record.narrative.mode;
    let (lead_kicker, lead_heading) = mode.lead_labels();
    let (follow_kicker, follow_heading) = mode.follow_up_labels();

    writeln!(out, "{} (Layer {}/{})", layer.title, record.position, record.total)?;
    writeln!(out)?;
    writeln!(out, "THE ANALOGY")?;
    writeln!(out, "{} / {}", layer.analogy, layer.software_title)?;
    if let Some(note) = layer.historical_note {
        writeln!(out, "  {note}")?;
    }
    writeln!(out)?;
    writeln!(out, "{}", mode.section_heading().to_ascii_uppercase())?;
    writeln!(out, "[{lead_kicker}] {lead_heading}")?;
    writeln!(out, "{}", record.narrative.lead)?;
    writeln!(out)?;
    writeln!(out, "[{follow_kicker}] {follow_heading}")?;
    writeln!(out, "{}", record.narrative.follow_up)?;
    Ok(())
}
