//! Command line front end: build a bracket document from a roster file, or re-derive
//! standings from a persisted one.
//! Run with: cargo run --bin bracket -- generate roster.csv --format double-elimination
//! Env: BRACKET_FORMAT sets the default format, RUST_LOG the log filter (default info).

use anyhow::Context;
use bracket_engine::{
    calculate_standings, generate_rounds, load_roster, Format, Round, StandingRow,
};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bracket", about = "Tournament brackets and standings", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
    /// Pretty-print the JSON output.
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build all rounds for a roster (.json, .csv, or one name per line).
    Generate {
        roster: PathBuf,
        #[arg(short, long, env = "BRACKET_FORMAT", default_value = "single-elimination")]
        format: String,
        /// Participant count; the roster length wins when they disagree.
        #[arg(short = 'n', long)]
        participants: Option<usize>,
        /// Include standings in the output document.
        #[arg(long)]
        standings: bool,
    },
    /// Compute standings from a stored bracket document.
    Standings {
        document: PathBuf,
        /// Overrides the format stored in the document.
        #[arg(short, long)]
        format: Option<String>,
    },
}

/// Document written by `generate`, and accepted by `standings`.
#[derive(Serialize)]
struct BracketDocument<'a> {
    format: Format,
    rounds: &'a [Round],
    #[serde(skip_serializing_if = "Option::is_none")]
    standings: Option<Vec<StandingRow>>,
}

/// A stored document: a bare round list or an object with `rounds`.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredDocument {
    Rounds(Vec<Round>),
    Document {
        rounds: Vec<Round>,
        #[serde(default)]
        format: Option<Format>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    let cli = Cli::parse();

    let output = match cli.command {
        Command::Generate {
            roster,
            format,
            participants,
            standings,
        } => {
            let players = load_roster(&roster)
                .with_context(|| format!("loading roster {}", roster.display()))?;
            let format = Format::from_name(&format);
            let rounds = generate_rounds(participants.unwrap_or(players.len()), &players, format);
            log::info!(
                "Generated {} rounds ({}) for {} entrants",
                rounds.len(),
                format,
                players.len()
            );
            let document = BracketDocument {
                format,
                rounds: &rounds,
                standings: standings.then(|| calculate_standings(&rounds, format)),
            };
            to_json(&document, cli.pretty)?
        }
        Command::Standings { document, format } => {
            let text = std::fs::read_to_string(&document)
                .with_context(|| format!("reading {}", document.display()))?;
            let stored: StoredDocument = serde_json::from_str(&text)
                .with_context(|| format!("parsing {}", document.display()))?;
            let (rounds, stored_format) = match stored {
                StoredDocument::Rounds(rounds) => (rounds, None),
                StoredDocument::Document { rounds, format } => (rounds, format),
            };
            let format = format
                .as_deref()
                .map(Format::from_name)
                .or(stored_format)
                .unwrap_or_default();
            to_json(&calculate_standings(&rounds, format), cli.pretty)?
        }
    };

    println!("{output}");
    Ok(())
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
