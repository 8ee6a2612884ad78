//! Catalog and rating value types plus the text ingestion boundary.
//!
//! Parsing is strict: every record that reaches the engines has been
//! validated here exactly once, so the recommenders never re-check field
//! shapes. Malformed input fails with a line-numbered `Parse` error instead
//! of being silently dropped.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RecomendarError, Result};

/// Stable catalog identifier for an item.
pub type ItemId = u32;

/// Stable identifier for a rating user.
pub type UserId = u32;

/// One user's ratings, keyed by item id.
///
/// Passed explicitly into
/// [`CollaborativeRecommender::recommend_for`](crate::recommend::CollaborativeRecommender::recommend_for);
/// the crate keeps no ambient per-user state.
pub type RatingProfile = HashMap<ItemId, f64>;

/// A catalog item: something that can be recommended.
///
/// # Examples
///
/// ```
/// use recomendar::data::parse_catalog;
///
/// let csv = "\
/// movieId,title,genres
/// 1,Toy Story (1995),Adventure|Animation|Comedy
/// 2,\"American President, The (1995)\",Drama|Romance";
///
/// let items = parse_catalog(csv).expect("well-formed catalog");
/// assert_eq!(items.len(), 2);
/// assert_eq!(items[1].title, "American President, The (1995)");
/// assert_eq!(items[1].year, Some(1995));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique, stable identifier; the join key across catalog and ratings.
    pub id: ItemId,
    /// Display title, kept verbatim including any trailing year suffix.
    pub title: String,
    /// Descriptive tags (genres), order as listed in the source.
    pub tags: Vec<String>,
    /// Release year extracted from a trailing `(YYYY)` in the title.
    pub year: Option<u16>,
}

/// A single rating: one user scored one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingEvent {
    /// The rating user.
    pub user_id: UserId,
    /// The rated item.
    pub item_id: ItemId,
    /// The rating value; validated finite at ingestion.
    pub value: f64,
}

/// Parses delimited catalog text into items.
///
/// The first line is a header and is skipped; blank lines are ignored.
/// Quoted fields may contain commas. The third field holds `|`-separated
/// tags; empty segments are dropped. A trailing `(YYYY)` in the title is
/// read into [`Item::year`] while the title keeps its suffix.
///
/// # Errors
///
/// Returns `Parse` with the 1-based line number for rows with fewer than
/// three fields or a non-numeric id.
pub fn parse_catalog(text: &str) -> Result<Vec<Item>> {
    let mut items = Vec::new();
    for (idx, line) in text.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = idx + 1;
        let fields = split_quoted(line);
        if fields.len() < 3 {
            return Err(RecomendarError::parse(
                line_no,
                format!("expected 3 fields, found {}", fields.len()),
            ));
        }
        let id: ItemId = fields[0].trim().parse().map_err(|_| {
            RecomendarError::parse(line_no, format!("invalid item id {:?}", fields[0].trim()))
        })?;
        let title = fields[1].trim().to_string();
        let tags: Vec<String> = fields[2]
            .split('|')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(ToString::to_string)
            .collect();
        let year = extract_year(&title);
        items.push(Item {
            id,
            title,
            tags,
            year,
        });
    }
    Ok(items)
}

/// Parses delimited rating text into events.
///
/// Expects `user,item,value[,timestamp]` rows after a header line; the
/// timestamp column, when present, is ignored. Blank lines are skipped.
///
/// # Errors
///
/// Returns `Parse` with the 1-based line number for rows with fewer than
/// three fields, non-numeric ids, or a non-finite rating value.
pub fn parse_ratings(text: &str) -> Result<Vec<RatingEvent>> {
    let mut events = Vec::new();
    for (idx, line) in text.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = idx + 1;
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 3 {
            return Err(RecomendarError::parse(
                line_no,
                format!("expected at least 3 fields, found {}", fields.len()),
            ));
        }
        let user_id: UserId = fields[0].trim().parse().map_err(|_| {
            RecomendarError::parse(line_no, format!("invalid user id {:?}", fields[0].trim()))
        })?;
        let item_id: ItemId = fields[1].trim().parse().map_err(|_| {
            RecomendarError::parse(line_no, format!("invalid item id {:?}", fields[1].trim()))
        })?;
        let value: f64 = fields[2]
            .trim()
            .parse()
            .ok()
            .filter(|v: &f64| v.is_finite())
            .ok_or_else(|| {
                RecomendarError::parse(
                    line_no,
                    format!("invalid rating value {:?}", fields[2].trim()),
                )
            })?;
        events.push(RatingEvent {
            user_id,
            item_id,
            value,
        });
    }
    Ok(events)
}

/// Reads and parses a catalog file.
///
/// # Errors
///
/// Returns `Io` if the file cannot be read, or any [`parse_catalog`] error.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Item>> {
    let text = fs::read_to_string(path)?;
    parse_catalog(&text)
}

/// Reads and parses a ratings file.
///
/// # Errors
///
/// Returns `Io` if the file cannot be read, or any [`parse_ratings`] error.
pub fn load_ratings<P: AsRef<Path>>(path: P) -> Result<Vec<RatingEvent>> {
    let text = fs::read_to_string(path)?;
    parse_ratings(&text)
}

/// Splits one line on commas, honoring double-quoted fields.
///
/// Quote characters toggle quoting and are not kept in the output.
fn split_quoted(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}

/// Extracts a trailing `(YYYY)` year from a title, if present.
fn extract_year(title: &str) -> Option<u16> {
    let trimmed = title.trim_end();
    if !trimmed.ends_with(')') {
        return None;
    }
    let open = trimmed.rfind('(')?;
    let inner = &trimmed[open + 1..trimmed.len() - 1];
    if inner.len() == 4 && inner.chars().all(|c| c.is_ascii_digit()) {
        inner.parse().ok()
    } else {
        None
    }
}

#[cfg(test)]
#[path = "data_tests.rs"]
mod tests;
