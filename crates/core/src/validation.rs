//! Field-level validation shared by the HTTP layer.
//!
//! Struct-shape rules (required strings, URL formats, lengths) live on the
//! DTOs as `validator` attributes. The checks here span several fields or
//! need a pattern, so they are plain functions returning [`CoreError::Validation`].

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;
use crate::types::{Date, DbId};

static HEX_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("valid regex"));

/// Ensure `end` (when present) does not precede `start`.
///
/// `start_field` / `end_field` are the JSON field names used in the message.
pub fn validate_date_range(
    start: Option<Date>,
    end: Option<Date>,
    start_field: &str,
    end_field: &str,
) -> Result<(), CoreError> {
    match (start, end) {
        (Some(s), Some(e)) if e < s => Err(CoreError::Validation(format!(
            "{end_field} ({e}) must not be before {start_field} ({s})"
        ))),
        _ => Ok(()),
    }
}

/// Ensure a colour is `#RGB` or `#RRGGBB`.
pub fn validate_hex_color(color: &str) -> Result<(), CoreError> {
    if HEX_COLOR_RE.is_match(color) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid colour '{color}'. Expected #RGB or #RRGGBB"
        )))
    }
}

/// Ensure every id in a link set is a positive database id.
pub fn validate_ids(ids: &[DbId], field: &str) -> Result<(), CoreError> {
    match ids.iter().find(|id| **id <= 0) {
        Some(bad) => Err(CoreError::Validation(format!(
            "{field} contains invalid id {bad}"
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn d(s: &str) -> Date {
        s.parse().unwrap()
    }

    #[test]
    fn open_ended_range_is_valid() {
        assert!(validate_date_range(Some(d("2020-01-01")), None, "start_date", "end_date").is_ok());
        assert!(validate_date_range(None, Some(d("2020-01-01")), "start_date", "end_date").is_ok());
    }

    #[test]
    fn same_day_range_is_valid() {
        let day = d("2023-06-15");
        assert!(validate_date_range(Some(day), Some(day), "start_date", "end_date").is_ok());
    }

    #[test]
    fn inverted_range_is_rejected() {
        let result = validate_date_range(
            Some(d("2023-06-15")),
            Some(d("2023-01-01")),
            "issue_date",
            "expiry_date",
        );
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg.contains("expiry_date"));
    }

    #[test]
    fn hex_colors() {
        assert!(validate_hex_color("#fff").is_ok());
        assert!(validate_hex_color("#1A2b3C").is_ok());
        assert!(validate_hex_color("fff").is_err());
        assert!(validate_hex_color("#12345").is_err());
        assert!(validate_hex_color("#gggggg").is_err());
    }

    #[test]
    fn ids_must_be_positive() {
        assert!(validate_ids(&[1, 2, 3], "technique_ids").is_ok());
        assert!(validate_ids(&[], "technique_ids").is_ok());
        assert_matches!(
            validate_ids(&[4, 0], "paint_ids"),
            Err(CoreError::Validation(msg)) if msg.contains("paint_ids")
        );
    }
}
