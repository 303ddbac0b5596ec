use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use serde::Serialize;

use huemix::color::parse_hex_color;
use huemix::gradient::Direction;
use huemix::mix::{MixResult, mix};
use huemix::session::Session;
use huemix::store::{ColorEntry, ColorStore};

#[derive(Parser, Debug)]
#[command(
    name = "huemix",
    about = "Blend colors by weighted average into CSS rgba and linear-gradient values",
    version
)]
struct Args {
    /// Colors to blend, as HEX[:WEIGHT] (e.g. '#ff0000:30', '#0f0').
    /// Weights are percentages 0-100; the first two colors default to
    /// 50/50 when no weight is given, later ones to 0.
    #[arg(required = true, value_name = "COLOR")]
    colors: Vec<String>,

    /// Gradient direction: to-right, to-left, to-bottom or to-top
    #[arg(short, long, value_name = "DIRECTION", default_value = "to-right")]
    direction: String,

    /// Print the result as JSON (entries, mix, gradient)
    #[arg(short, long)]
    json: bool,

    /// Print only the rgba string
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

/// One HEX[:WEIGHT] command-line argument, split but not yet validated.
/// The store decides what to do with each half.
#[derive(Debug)]
struct ColorSpec {
    hex: String,
    weight: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    let direction = Direction::from_str(&args.direction)
        .with_context(|| format!("Invalid --direction value: {}", args.direction))?;
    let specs = parse_color_specs(&args.colors)?;

    // The latest mix arrives through the store's notification path, the
    // same way a UI front end would track it
    let latest: Rc<RefCell<Option<MixResult>>> = Rc::new(RefCell::new(None));
    let mut store = ColorStore::new();
    store.subscribe({
        let latest = Rc::clone(&latest);
        move |entries| *latest.borrow_mut() = mix(entries)
    });

    for (index, spec) in specs.iter().enumerate() {
        if index >= store.len() {
            store.add_entry();
        }
        store.set_hex(index, &spec.hex);
        if let Some(weight) = &spec.weight {
            store.set_weight(index, weight);
        }
    }

    let mut session = Session::new();
    session.set_direction(direction);

    let result = *latest.borrow();
    if let Some(blended) = &result {
        session.apply_background(blended);
    }

    if args.json {
        print_json(&store, &session, result.as_ref())?;
    } else if args.quiet {
        if let Some(blended) = &result {
            println!("{blended}");
        }
    } else {
        print_report(&store, &session, result.as_ref());
    }

    Ok(())
}

/// Split a COLOR argument into its hex text and optional weight part
fn parse_color_spec(spec: &str) -> Result<ColorSpec> {
    let (hex, weight) = match spec.split_once(':') {
        Some((hex, weight)) => (hex, Some(weight.to_string())),
        None => (spec, None),
    };

    if hex.is_empty() {
        anyhow::bail!("Empty color specification");
    }

    Ok(ColorSpec {
        hex: hex.to_string(),
        weight,
    })
}

fn parse_color_specs(specs: &[String]) -> Result<Vec<ColorSpec>> {
    specs
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            parse_color_spec(spec)
                .with_context(|| format!("Invalid color specification #{}: {}", i + 1, spec))
        })
        .collect()
}

fn print_report(store: &ColorStore, session: &Session, result: Option<&MixResult>) {
    println!("Colors:");
    for (index, entry) in store.entries().iter().enumerate() {
        let label = if entry.hex().is_empty() {
            "(unset)"
        } else {
            entry.hex()
        };
        match parse_hex_color(entry.hex()) {
            Ok([r, g, b]) => println!(
                "  [{index}] {label:<9} {:>3}%  {}",
                entry.weight(),
                "  ".on_truecolor(r, g, b)
            ),
            Err(_) if entry.hex().is_empty() => {
                println!("  [{index}] {label:<9} {:>3}%", entry.weight())
            }
            Err(_) => println!(
                "  [{index}] {label:<9} {:>3}%  {}",
                entry.weight(),
                "invalid hex color".red()
            ),
        }
    }
    println!();

    match result {
        Some(blended) => {
            println!(
                "{} {}  {}",
                "Mix:".bold(),
                blended,
                "  ".on_truecolor(blended.red, blended.green, blended.blue)
            );
            if let Some(background) = session.background() {
                println!("{} {}", "Background:".bold(), background);
            }
        }
        None => println!("{}", "No mix: need at least two valid colors.".yellow()),
    }
}

#[derive(Serialize)]
struct Report<'a> {
    entries: &'a [ColorEntry],
    mix: Option<&'a MixResult>,
    rgba: Option<String>,
    direction: Direction,
    gradient: Option<String>,
}

fn print_json(store: &ColorStore, session: &Session, result: Option<&MixResult>) -> Result<()> {
    let report = Report {
        entries: store.entries(),
        mix: result,
        rgba: result.map(MixResult::to_string),
        direction: session.direction(),
        gradient: session.background().map(str::to_string),
    };

    let json = serde_json::to_string_pretty(&report).context("Failed to encode report as JSON")?;
    println!("{json}");
    Ok(())
}
