//! CSV ingestion for the two source tables.
//!
//! Both files are read once at startup. Column names are part of the
//! external contract; a missing required column aborts the load, while
//! missing *values* in nullable columns become `None`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::config::DataConfig;
use crate::domain::{DataStore, Delivery, MatchInfo};
use crate::error::{CreaseError, Result};

const MATCH_INFO_TABLE: &str = "match_info";
const MATCH_DATA_TABLE: &str = "match_data";

const MATCH_INFO_COLUMNS: &[&str] = &["id", "season", "venue", "team1", "team2"];
const MATCH_DATA_COLUMNS: &[&str] = &[
    "match_id",
    "batting_team",
    "bowling_team",
    "innings",
    "striker",
    "bowler",
    "runs_off_bat",
    "wicket_type",
];
const EXTRAS_TYPE_COLUMN: &str = "extras_type";

/// Tokens treated as a missing value
const NA_TOKENS: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "null", "NULL", "None", "<NA>", "#N/A",
];

#[derive(Debug, Deserialize)]
struct MatchInfoRow {
    #[serde(deserialize_with = "identifier")]
    id: String,
    #[serde(deserialize_with = "nullable")]
    season: Option<String>,
    #[serde(deserialize_with = "nullable")]
    venue: Option<String>,
    #[serde(deserialize_with = "nullable")]
    team1: Option<String>,
    #[serde(deserialize_with = "nullable")]
    team2: Option<String>,
}

impl From<MatchInfoRow> for MatchInfo {
    fn from(row: MatchInfoRow) -> Self {
        MatchInfo {
            id: row.id,
            season: row.season.map(normalize_season),
            venue: row.venue,
            team1: row.team1,
            team2: row.team2,
        }
    }
}

#[derive(Debug, Deserialize)]
struct DeliveryRow {
    #[serde(deserialize_with = "identifier")]
    match_id: String,
    batting_team: String,
    bowling_team: String,
    #[serde(deserialize_with = "count")]
    innings: u32,
    striker: String,
    bowler: String,
    #[serde(deserialize_with = "count")]
    runs_off_bat: u32,
    #[serde(deserialize_with = "nullable")]
    wicket_type: Option<String>,
    // `extras_type` is the raw category; the "None" placeholder is kept
    // so the chart layer can decide what to exclude.
    #[serde(default, deserialize_with = "nullable_keep_none")]
    extras_type: Option<String>,
}

impl From<DeliveryRow> for Delivery {
    fn from(row: DeliveryRow) -> Self {
        Delivery {
            match_id: row.match_id,
            batting_team: row.batting_team,
            bowling_team: row.bowling_team,
            innings: row.innings,
            striker: row.striker,
            bowler: row.bowler,
            runs_off_bat: row.runs_off_bat,
            wicket_type: row.wicket_type,
            extras_type: row.extras_type,
        }
    }
}

fn is_missing(raw: &str) -> bool {
    NA_TOKENS.contains(&raw.trim())
}

fn nullable<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .map(|value| value.trim().to_string())
        .filter(|value| !is_missing(value)))
}

fn nullable_keep_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .map(|value| value.trim().to_string())
        .filter(|value| value == "None" || !is_missing(value)))
}

/// Non-negative integer; tolerates float-formatted values such as `4.0`
fn count<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_count(&raw).map_err(serde::de::Error::custom)
}

fn parse_count(raw: &str) -> std::result::Result<u32, String> {
    let raw = raw.trim();
    if let Ok(value) = raw.parse::<u32>() {
        return Ok(value);
    }
    match raw.parse::<f64>() {
        Ok(value) if value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 => {
            Ok(value as u32)
        }
        _ => Err(format!("expected a non-negative integer, got '{raw}'")),
    }
}

/// Identifiers exported as floats (`335982.0`) collapse to their integer form
fn identifier<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();
    if is_missing(raw) {
        return Err(serde::de::Error::custom("missing match identifier"));
    }
    Ok(raw.strip_suffix(".0").unwrap_or(raw).to_string())
}

/// Seasons exported as floats (`2020.0`) read back as `2020`
fn normalize_season(season: String) -> String {
    match season.strip_suffix(".0") {
        Some(year) if year.chars().all(|c| c.is_ascii_digit()) => year.to_string(),
        _ => season,
    }
}

fn require_columns(table: &str, headers: &csv::StringRecord, required: &[&str]) -> Result<()> {
    for column in required {
        if !headers.iter().any(|header| header == *column) {
            return Err(CreaseError::MissingColumn {
                table: table.to_string(),
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

fn record_error(table: &str, err: csv::Error) -> CreaseError {
    let line = err.position().map(|pos| pos.line()).unwrap_or(0);
    if let csv::ErrorKind::Deserialize { err: de, .. } = err.kind() {
        return CreaseError::InvalidRecord {
            table: table.to_string(),
            line,
            reason: de.to_string(),
        };
    }
    CreaseError::Csv(err)
}

fn read_table<R, Row, T>(
    table: &str,
    reader: R,
    required: &[&str],
) -> Result<(Vec<T>, csv::StringRecord)>
where
    R: Read,
    Row: DeserializeOwned + Into<T>,
{
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    require_columns(table, &headers, required)?;

    let mut rows = Vec::new();
    for record in reader.deserialize::<Row>() {
        let row = record.map_err(|err| record_error(table, err))?;
        rows.push(row.into());
    }

    debug!(table, rows = rows.len(), "table parsed");
    Ok((rows, headers))
}

/// Parse the per-match metadata table
pub fn read_matches<R: Read>(reader: R) -> Result<Vec<MatchInfo>> {
    let (matches, _) =
        read_table::<R, MatchInfoRow, MatchInfo>(MATCH_INFO_TABLE, reader, MATCH_INFO_COLUMNS)?;

    for info in &matches {
        if info.team1.is_some() && info.team1 == info.team2 {
            debug!(match_id = %info.id, "match lists the same team twice");
        }
    }

    Ok(matches)
}

/// Parse the ball-by-ball table; the flag reports whether `extras_type` exists
pub fn read_deliveries<R: Read>(reader: R) -> Result<(Vec<Delivery>, bool)> {
    let (deliveries, headers) =
        read_table::<R, DeliveryRow, Delivery>(MATCH_DATA_TABLE, reader, MATCH_DATA_COLUMNS)?;
    let has_extras_type = headers.iter().any(|header| header == EXTRAS_TYPE_COLUMN);
    Ok((deliveries, has_extras_type))
}

/// Build a store from two in-memory or already-open sources
pub fn store_from_readers<A: Read, B: Read>(match_info: A, match_data: B) -> Result<DataStore> {
    let matches = read_matches(match_info)?;
    let (deliveries, has_extras_type) = read_deliveries(match_data)?;
    Ok(DataStore::new(matches, deliveries, has_extras_type))
}

fn open(path: &Path) -> Result<std::fs::File> {
    std::fs::File::open(path).map_err(|err| {
        CreaseError::Io(std::io::Error::new(
            err.kind(),
            format!("{}: {}", path.display(), err),
        ))
    })
}

/// Load both datasets from the configured paths
pub fn load_store(config: &DataConfig) -> Result<DataStore> {
    info!(
        match_info = %config.match_info_path.display(),
        match_data = %config.match_data_path.display(),
        "loading datasets"
    );

    let store = store_from_readers(
        open(&config.match_info_path)?,
        open(&config.match_data_path)?,
    )?;

    info!(
        matches = store.matches().len(),
        deliveries = store.deliveries().len(),
        extras_type = store.has_extras_type(),
        "datasets loaded"
    );
    Ok(store)
}
