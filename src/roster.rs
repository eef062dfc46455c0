//! Roster import: JSON, CSV, or one name per line.

use crate::models::{PlayerEntry, PlayerProfile};
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Errors while reading a roster file.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("failed to read roster: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid CSV roster: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid JSON roster: {0}")]
    Json(#[from] serde_json::Error),
    #[error("roster CSV has no `name` column")]
    MissingNameColumn,
    #[error("roster row {row} has an empty name")]
    EmptyName { row: usize },
}

/// Load a roster, choosing the parser from the file extension (`.json`, `.csv`, else plain text).
pub fn load_roster(path: &Path) -> Result<Vec<PlayerEntry>, RosterError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let roster = match extension.as_deref() {
        Some("json") => parse_json_roster(&std::fs::read_to_string(path)?)?,
        Some("csv") => parse_csv_roster(std::fs::File::open(path)?)?,
        _ => parse_plain_roster(&std::fs::read_to_string(path)?),
    };
    log::info!("Loaded {} entrants from {}", roster.len(), path.display());
    Ok(roster)
}

/// JSON array of names and/or profile objects.
pub fn parse_json_roster(text: &str) -> Result<Vec<PlayerEntry>, RosterError> {
    Ok(serde_json::from_str(text)?)
}

/// One name per line; blank lines are skipped.
pub fn parse_plain_roster(text: &str) -> Vec<PlayerEntry> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PlayerEntry::from)
        .collect()
}

/// CSV with a header row and a `name` column.
///
/// The `avatar` column fills that field; other non-empty cells, `email` included, become extra
/// string fields. With only a `name` column every entry is a bare name.
pub fn parse_csv_roster<R: Read>(reader: R) -> Result<Vec<PlayerEntry>, RosterError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let headers: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| h.to_ascii_lowercase())
        .collect();
    let name_column = headers
        .iter()
        .position(|h| h == "name")
        .ok_or(RosterError::MissingNameColumn)?;
    let names_only = headers.len() == 1;

    let mut roster = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        // Header is row 1.
        let row = i + 2;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let name = record.get(name_column).unwrap_or_default();
        if name.is_empty() {
            return Err(RosterError::EmptyName { row });
        }
        if names_only {
            roster.push(PlayerEntry::from(name));
            continue;
        }

        let mut profile = PlayerProfile::new(name);
        for (column, cell) in headers.iter().zip(record.iter()) {
            if cell.is_empty() || column == "name" {
                continue;
            }
            match column.as_str() {
                "avatar" => profile.avatar = Some(cell.to_string()),
                _ => {
                    profile
                        .extra
                        .insert(column.clone(), Value::String(cell.to_string()));
                }
            }
        }
        roster.push(PlayerEntry::Profile(profile));
    }
    Ok(roster)
}
