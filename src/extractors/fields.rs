// src/extractors/fields.rs
//! Heuristic field parser for a company's metadata table.
//!
//! The directory renders each company as a loose table: some cells are
//! label tokens (`City:`) followed by their value, some are bare phone
//! numbers, and whatever is left over is the street address. Parsing runs
//! as a chain of passes, each taking the remaining rows and returning them
//! together with what it pulled out.

use crate::directory::models::{CompanyRecord, MetadataRow};
use crate::extractors::text::normalize;
use once_cell::sync::Lazy;
use regex::Regex;

/// A cell is treated as a phone number when it holds more digits than this.
pub const PHONE_MIN_DIGITS_EXCLUSIVE: usize = 8;

/// Label tokens that are dropped once phones and address have been collected.
const LEFTOVER_LABEL_TOKENS: [&str; 2] = ["Phone:", "Address:"];

static NON_DIGIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9]").expect("Failed to compile NON_DIGIT_RE"));

/// Labels whose value is the cell right after them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldLabel {
    ZipCode,
    PoBox,
    City,
    Country,
}

impl FieldLabel {
    /// Extraction order within a row.
    pub const ALL: [FieldLabel; 4] = [
        FieldLabel::ZipCode,
        FieldLabel::PoBox,
        FieldLabel::City,
        FieldLabel::Country,
    ];

    pub fn token(self) -> &'static str {
        match self {
            FieldLabel::ZipCode => "Zip Code:",
            FieldLabel::PoBox => "P.O Box:",
            FieldLabel::City => "City:",
            FieldLabel::Country => "Country:",
        }
    }
}

/// Values found by the labeled-field pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LabeledFields {
    pub zip_code: Option<String>,
    pub po_box: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl LabeledFields {
    fn set(&mut self, label: FieldLabel, value: String) {
        let slot = match label {
            FieldLabel::ZipCode => &mut self.zip_code,
            FieldLabel::PoBox => &mut self.po_box,
            FieldLabel::City => &mut self.city,
            FieldLabel::Country => &mut self.country,
        };
        *slot = Some(value);
    }
}

/// Parses one company's rows into a record. `company_name` is left empty
/// for the caller to fill in from the heading.
pub fn parse_rows(rows: Vec<MetadataRow>) -> CompanyRecord {
    let (rows, labeled) = extract_labeled_fields(rows);
    let (rows, phones) = extract_phones(rows);
    let rows = strip_label_tokens(rows);
    let address = concat_address(&rows);

    tracing::trace!(?labeled, ?phones, %address, "Parsed company metadata rows");

    CompanyRecord {
        zip_code: labeled.zip_code,
        po_box: labeled.po_box,
        city: labeled.city,
        country: labeled.country,
        phones,
        address,
        company_name: String::new(),
    }
}

/// Pass 1: pulls `label, value` pairs out of each row.
///
/// Only the first occurrence of a label in a row counts. A label that ends
/// its row has no value and is simply dropped. When several rows carry the
/// same label, the last one wins.
pub fn extract_labeled_fields(rows: Vec<MetadataRow>) -> (Vec<MetadataRow>, LabeledFields) {
    let mut fields = LabeledFields::default();

    let rows = rows
        .into_iter()
        .map(|mut row| {
            for label in FieldLabel::ALL {
                let Some(pos) = row.iter().position(|cell| cell == label.token()) else {
                    continue;
                };
                row.remove(pos);
                if pos < row.len() {
                    let value = row.remove(pos);
                    fields.set(label, value);
                } else {
                    tracing::debug!("Label '{}' has no value cell, skipping", label.token());
                }
            }
            row
        })
        .collect();

    (rows, fields)
}

/// Number of ASCII digits in a cell.
pub fn digit_count(cell: &str) -> usize {
    NON_DIGIT_RE.replace_all(cell, "").len()
}

/// True when a cell holds more than [`PHONE_MIN_DIGITS_EXCLUSIVE`] digits.
/// Any long digit run matches, so reference numbers count as phones too.
pub fn looks_like_phone(cell: &str) -> bool {
    digit_count(cell) > PHONE_MIN_DIGITS_EXCLUSIVE
}

/// Pass 2: moves phone-like cells out of the rows, spaces removed.
pub fn extract_phones(rows: Vec<MetadataRow>) -> (Vec<MetadataRow>, Vec<String>) {
    let mut phones = Vec::new();

    let rows = rows
        .into_iter()
        .map(|row| {
            let (found, rest): (Vec<String>, Vec<String>) =
                row.into_iter().partition(|cell| looks_like_phone(cell));
            phones.extend(found.into_iter().map(|cell| cell.replace(' ', "")));
            rest
        })
        .collect();

    (rows, phones)
}

/// Pass 3: drops leftover `Phone:` / `Address:` label cells.
pub fn strip_label_tokens(rows: Vec<MetadataRow>) -> Vec<MetadataRow> {
    rows.into_iter()
        .map(|row| {
            row.into_iter()
                .filter(|cell| !LEFTOVER_LABEL_TOKENS.contains(&cell.as_str()))
                .collect()
        })
        .collect()
}

/// Pass 4: joins every remaining non-empty cell in reading order.
pub fn concat_address(rows: &[MetadataRow]) -> String {
    let joined = rows
        .iter()
        .flatten()
        .filter(|cell| !cell.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    normalize(&joined)
}
