//! NoteBender - harmonica tabs, circle of fifths and pitch matching

use anyhow::{anyhow, Result};
use clap::Parser;
use notebender::circle::{circle_of_fifths, derive_scale, Mode};
use notebender::config::{self, NoteBenderConfig};
use notebender::harmonica::{HarmonicaKey, Layout, Technique};
use notebender::pitch::{
    freq_to_note_and_cents, load_recording, meter_offset, ClarityGate, PitchReading, PitchSource,
    ReplaySource,
};
use notebender::score::load_score;
use notebender::theory::Note;
use notebender::transpose::{annotate, auto_transpose};
use std::time::Duration;
use tokio::sync::broadcast::error::RecvError;

mod cli;

use cli::{Cli, Commands};

/// Half height of the text tuning meter
const METER_HALF_RANGE: f64 = 8.0;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Layout { key } => {
            let cfg = config::load_config_or_default(&cli.config)?;
            let key = resolve_key(&cfg, key.as_deref())?;

            println!("Harmonica in {}\n", key);
            print_layout(&key.layout());
        }

        Commands::Tab { key, notes } => {
            let cfg = config::load_config_or_default(&cli.config)?;
            let key = resolve_key(&cfg, key.as_deref())?;
            let layout = key.layout();

            println!("Tabs for {} harmonica:", key);
            for name in &notes {
                match name.parse::<Note>() {
                    Ok(note) => match layout.resolve(&note) {
                        Some(tab) => println!("  {:>5}  {}", note.to_string(), tab),
                        None => println!("  {:>5}  (not playable)", note.to_string()),
                    },
                    Err(e) => println!("  {:>5}  {}", name, e),
                }
            }
        }

        Commands::Circle { root, mode } => {
            let cfg = config::load_config_or_default(&cli.config)?;
            let root = match root {
                Some(root) => root.parse()?,
                None => cfg.circle.root()?,
            };
            let mode = match mode {
                Some(mode) => mode.parse()?,
                None => cfg.circle.mode()?,
            };

            let scale = derive_scale(&root, mode);

            println!(
                "{} {} ({} position), parent major: {}\n",
                scale.tonic(),
                mode,
                mode.harmonica_position(),
                root
            );

            println!("Circle of fifths:");
            for pitch_class in circle_of_fifths() {
                let degree = scale
                    .degree_of(&pitch_class)
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "-".to_string());
                let marker = if scale.is_tonic(&pitch_class) { "*" } else { " " };
                println!(
                    "  {}{:<3} degree {:<2} {}",
                    marker,
                    pitch_class.to_string(),
                    degree,
                    scale.quality_of(&pitch_class)
                );
            }

            println!("\nTriads in {} {}:", scale.tonic(), mode);
            for (index, triad) in scale.triads().iter().enumerate() {
                let notes: Vec<String> = triad.notes().iter().map(|n| n.to_string()).collect();
                println!(
                    "  {}. {:<6} {:<14} {}",
                    index + 1,
                    triad.symbol(),
                    notes.join(" - "),
                    triad.quality()
                );
            }

            println!("\nModes by harmonica position:");
            for other in Mode::by_harmonica_order() {
                let marker = if other == mode { ">" } else { " " };
                println!("  {} {} ({})", marker, other, other.harmonica_position());
            }
        }

        Commands::Pitch { key, frequencies } => {
            let cfg = config::load_config_or_default(&cli.config)?;
            let key = resolve_key(&cfg, key.as_deref())?;
            let layout = key.layout();

            for freq in frequencies {
                match freq_to_note_and_cents(freq) {
                    Some(offset) => {
                        let tab = layout
                            .resolve(&offset.note())
                            .map(|t| t.to_string())
                            .unwrap_or_else(|| "-".to_string());
                        println!(
                            "  {:>8.2} Hz  {:<4} {:+6.1} cents  tab {}",
                            freq,
                            offset.note().to_string(),
                            offset.cents(),
                            tab
                        );
                    }
                    None => println!("  {:>8.2} Hz  (no reading)", freq),
                }
            }
        }

        Commands::Listen {
            recording,
            key,
            min_clarity,
        } => {
            let cfg = config::load_config_or_default(&cli.config)?;
            let key = resolve_key(&cfg, key.as_deref())?;
            let layout = key.layout();
            let gate = ClarityGate::new(min_clarity.unwrap_or(cfg.pitch.min_clarity));
            let samples = load_recording(&recording)?;

            println!(
                "Listening to {:?} on {} harmonica (clarity > {:.2})...\n",
                recording,
                key,
                gate.min_clarity()
            );

            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(async {
                let mut source = ReplaySource::new("replay", samples, cfg.pitch.tick());
                let mut rx = source.subscribe();
                source.start()?;

                let idle = cfg.pitch.tick() * 4 + Duration::from_millis(50);

                loop {
                    tokio::select! {
                        received = rx.recv() => match received {
                            Ok(sample) => match gate.read(&sample) {
                                Some(reading) => print_reading(&layout, &reading),
                                None => println!("  ..."),
                            },
                            Err(RecvError::Lagged(skipped)) => {
                                log::warn!("Skipped {} samples", skipped);
                            }
                            Err(RecvError::Closed) => break,
                        },
                        _ = tokio::signal::ctrl_c() => break,
                        _ = tokio::time::sleep(idle) => {
                            if !source.is_running() {
                                break;
                            }
                        }
                    }
                }

                source.stop();
                Ok::<(), anyhow::Error>(())
            })?;
        }

        Commands::Transpose {
            score,
            key,
            offset,
            allow_overbends,
            no_bends,
        } => {
            let cfg = config::load_config_or_default(&cli.config)?;
            let key = resolve_key(&cfg, key.as_deref())?;
            let score = load_score(&score)?;

            let mut filters = cfg.transpose.filters();
            if allow_overbends {
                filters.exclude_overbends = false;
            }
            if no_bends {
                filters.exclude_bends = true;
            }

            let offset = match offset {
                Some(offset) => offset,
                None => {
                    let found = auto_transpose(
                        &score.notes,
                        &key.root(),
                        filters,
                        cfg.transpose.range(),
                    )?;
                    println!("Auto transpose: {:+} semitones", found);
                    found
                }
            };

            if let Some(title) = &score.title {
                println!("{}", title);
            }
            println!("Tabs for {} harmonica, offset {:+}:\n", key, offset);

            for annotation in annotate(&score.notes, &key.root(), offset) {
                match (annotation.transposed, annotation.tab) {
                    (None, _) => println!("  rest"),
                    (Some(note), Some(tab)) => println!("  {:<5} {}", note.to_string(), tab),
                    (Some(note), None) => println!("  {:<5} (not playable)", note.to_string()),
                }
            }
        }

        Commands::Check => {
            println!("Checking configuration at {:?}...", cli.config);

            match config::load_config(&cli.config) {
                Ok(cfg) => {
                    println!("Configuration is valid!");
                    println!("  Harmonica: {}", cfg.harmonica.key()?);
                    println!("  Circle: {} {}", cfg.circle.root()?, cfg.circle.mode()?);
                    println!("  Min clarity: {:.2}", cfg.pitch.min_clarity);
                    println!("  Tick: {} ms", cfg.pitch.tick_ms);
                    println!(
                        "  Transpose range: {}..={}",
                        cfg.transpose.min_offset, cfg.transpose.max_offset
                    );
                    let mut filters = Vec::new();
                    if cfg.transpose.exclude_overbends {
                        filters.push("no overblows/overdraws");
                    }
                    if cfg.transpose.exclude_bends {
                        filters.push("no bends");
                    }
                    println!("  Filters: {}", filters.join(", "));
                }
                Err(e) => {
                    println!("Configuration is invalid: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Init => {
            let example_config = include_str!("../notebender.example.yaml");

            let path = "notebender.yaml";
            if std::path::Path::new(path).exists() {
                println!("notebender.yaml already exists. Not overwriting.");
            } else {
                std::fs::write(path, example_config)?;
                println!("Created notebender.yaml with example configuration.");
            }
        }
    }

    Ok(())
}

/// Key from the command line if given, otherwise from config
fn resolve_key(cfg: &NoteBenderConfig, key: Option<&str>) -> Result<HarmonicaKey> {
    match key {
        Some(key) => {
            HarmonicaKey::parse(key).ok_or_else(|| anyhow!("Unknown harmonica key '{}'", key))
        }
        None => cfg.harmonica.key(),
    }
}

/// Print the layout as rows, bends above and below the blow/draw rows
fn print_layout(layout: &Layout) {
    let rows = [
        ("2 step blow", Technique::WholeStepBlowBend),
        ("1/2 blow", Technique::HalfStepBlow),
        ("blow", Technique::Blow),
        ("", Technique::Blow),
        ("draw", Technique::Draw),
        ("1/2 draw", Technique::HalfStepDraw),
        ("2 step draw", Technique::WholeStepDrawBend),
        ("3 step draw", Technique::StepAndHalfDrawBend),
    ];

    for (index, (label, technique)) in rows.iter().enumerate() {
        print!("{:>12} ", label);
        for hole in layout.holes() {
            let cell = if index == 3 {
                hole.number().to_string()
            } else {
                match hole.pitch(*technique) {
                    Some(note) if technique.is_overbend_on(hole.number()) => format!("{}o", note),
                    Some(note) => note.to_string(),
                    None => String::new(),
                }
            };
            print!("{:>6}", cell);
        }
        println!();
    }
}

/// Print one live reading with its meter and matching holes
fn print_reading(layout: &Layout, reading: &PitchReading) {
    let positions = layout.positions_of(&reading.note());
    let mut holes: Vec<String> = positions
        .iter()
        .map(|(hole, technique)| format!("{} {}", hole, technique.describe(*hole)))
        .collect();
    if holes.is_empty() {
        holes.push("-".to_string());
    }

    println!(
        "  {:>8.2} Hz  {:<4} {:+6.1} cents  [{}]  {}",
        reading.frequency(),
        reading.note().to_string(),
        reading.cents(),
        meter(reading.cents()),
        holes.join(", ")
    );
}

/// Text tuning meter, centre mark when in tune
fn meter(cents: f64) -> String {
    let width = (METER_HALF_RANGE as usize) * 2 + 1;
    // Sharp lands right of centre
    let position = (METER_HALF_RANGE - meter_offset(cents, METER_HALF_RANGE)).round() as usize;
    (0..width)
        .map(|i| if i == position { '|' } else { '-' })
        .collect()
}
