//! Homepage pipeline: CSV records rendered into two static HTML pages.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::AppError;
use crate::render;

/// Template file names looked up inside the templates directory.
pub const HOMEPAGE_TEMPLATE: &str = "index.html.j2";
pub const EVENTS_TEMPLATE: &str = "events.html.j2";

/// Accepted formats for the CSV date column.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d.%m.%Y", "%m/%d/%Y"];

/// One CSV cell: the parsed date column or plain text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Field {
    Date(NaiveDate),
    Text(String),
}

/// One CSV row keyed by header name.
pub type Record = BTreeMap<String, Field>;

/// Inputs for one homepage run.
#[derive(Debug, Clone)]
pub struct HomepageOptions {
    /// Semicolon-delimited CSV file with a header row.
    pub csv: PathBuf,
    /// Directory holding `index.html.j2` and `events.html.j2`.
    pub templates_dir: PathBuf,
    /// Directory the rendered pages are written to.
    pub out_dir: PathBuf,
}

/// What a run produced, for the binary to report.
#[derive(Debug)]
pub struct HomepageOutcome {
    pub homepage: PathBuf,
    pub events: PathBuf,
    pub record_count: usize,
}

/// Read the CSV at `path` into records.
///
/// Any column whose header is `date` (case-insensitive) is parsed into a
/// calendar date; every other cell stays text.
pub fn load_records(path: &Path) -> Result<Vec<Record>, AppError> {
    let mut reader =
        csv::ReaderBuilder::new().delimiter(b';').has_headers(true).from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let mut record = Record::new();
        for (header, value) in headers.iter().zip(row.iter()) {
            let field = if header.eq_ignore_ascii_case("date") {
                Field::Date(parse_date(header, value)?)
            } else {
                Field::Text(value.to_string())
            };
            record.insert(header.to_string(), field);
        }
        records.push(record);
    }
    Ok(records)
}

fn parse_date(column: &str, value: &str) -> Result<NaiveDate, AppError> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value.trim(), format).ok())
        .ok_or_else(|| AppError::DateParse {
            column: column.to_string(),
            value: value.to_string(),
        })
}

#[derive(Serialize)]
struct HomepageContext<'a> {
    hosts: &'a [Record],
}

#[derive(Serialize)]
struct EventsContext<'a> {
    events: &'a [Record],
}

/// Render both pages from the record sequence and write them into the output
/// directory, overwriting previous runs.
pub fn generate(options: HomepageOptions) -> Result<HomepageOutcome, AppError> {
    let records = load_records(&options.csv)?;

    fs::create_dir_all(&options.out_dir)?;

    let homepage = options.out_dir.join("index.html");
    render::render_to_file(
        &options.templates_dir.join(HOMEPAGE_TEMPLATE),
        &HomepageContext { hosts: &records },
        &homepage,
    )?;

    let events = options.out_dir.join("events.html");
    render::render_to_file(
        &options.templates_dir.join(EVENTS_TEMPLATE),
        &EventsContext { events: &records },
        &events,
    )?;

    Ok(HomepageOutcome { homepage, events, record_count: records.len() })
}
